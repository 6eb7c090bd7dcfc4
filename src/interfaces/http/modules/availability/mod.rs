//! Public availability cascade - category, date, event selection

pub mod dto;
pub mod handlers;

pub use dto::*;
pub use handlers::*;
