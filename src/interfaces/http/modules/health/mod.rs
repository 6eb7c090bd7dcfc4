//! Liveness and readiness probe

pub mod handlers;

pub use handlers::*;
