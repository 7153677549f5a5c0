//! Unit and transport tests for the web module.
