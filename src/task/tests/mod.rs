//! Unit tests for the task module.
//!
//! Tests are organised by layer: domain types, the in-memory repository
//! adapter, and the board service.

mod domain_tests;
mod service_tests;
