//! In-memory adapter for task persistence.

mod repository;

pub use repository::InMemoryTaskRepository;
