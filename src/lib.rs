//! Taskboard: a single-user task-tracking web application.
//!
//! Tasks carry a title, optional description, priority, optional due date,
//! and a lifecycle status, and are presented as a three-column board
//! (Pending / In Progress / Completed) with search, filtering, and sorting.
//!
//! # Architecture
//!
//! The crate follows hexagonal architecture principles:
//!
//! - **Domain**: Pure business logic with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for external interactions
//! - **Adapters**: Concrete implementations of ports (database, memory)
//!
//! # Modules
//!
//! - [`task`]: Task aggregate, repository port and adapters, board service
//! - [`web`]: HTTP transport — JSON API and server-rendered board page
//! - [`config`]: Environment-sourced runtime configuration

pub mod config;
pub mod task;
pub mod web;
