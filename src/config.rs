//! Runtime configuration sourced from the environment.

use std::env;
use std::net::SocketAddr;
use thiserror::Error;

/// Default listen address when `TASKBOARD_ADDR` is unset.
const DEFAULT_BIND_ADDR: &str = "127.0.0.1:8080";

/// Server configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    /// `PostgreSQL` connection string.
    pub database_url: String,
    /// Address the HTTP server binds to.
    pub bind_addr: SocketAddr,
}

/// Errors returned while reading configuration from the environment.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// `DATABASE_URL` is not set.
    #[error("DATABASE_URL must be set")]
    MissingDatabaseUrl,

    /// The bind address cannot be parsed as `host:port`.
    #[error("invalid bind address '{0}', expected host:port")]
    InvalidBindAddr(String),
}

impl ServerConfig {
    /// Reads the configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when `DATABASE_URL` is missing or
    /// `TASKBOARD_ADDR` is not a valid socket address.
    pub fn from_env() -> Result<Self, ConfigError> {
        let database_url = env::var("DATABASE_URL").map_err(|_| ConfigError::MissingDatabaseUrl)?;
        let raw_addr =
            env::var("TASKBOARD_ADDR").unwrap_or_else(|_| DEFAULT_BIND_ADDR.to_owned());
        let bind_addr = raw_addr
            .parse()
            .map_err(|_| ConfigError::InvalidBindAddr(raw_addr))?;
        Ok(Self {
            database_url,
            bind_addr,
        })
    }
}
