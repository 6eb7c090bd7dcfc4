//! Storage implementations outside the database

#[cfg(test)]
pub(crate) mod failing;
mod memory;

pub use memory::InMemoryRepositoryProvider;
