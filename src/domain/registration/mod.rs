//! Registration aggregate
//!
//! Contains the Registration entity, joined record shape, and repository
//! interface.

pub mod model;
pub mod repository;

pub use model::{NewRegistration, Registration, RegistrationRecord};
pub use repository::RegistrationRepository;
