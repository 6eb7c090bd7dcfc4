//! Administrative review - filter cascade, listings, export, event creation

pub mod dto;
pub mod handlers;

pub use dto::*;
pub use handlers::*;
