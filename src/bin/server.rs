//! HTTP server entry point for the task board.
//!
//! Wires the `PostgreSQL` repository, the board service, and the axum
//! router together, then serves both the JSON API and the board page from
//! one listener. Configuration comes from the environment (`DATABASE_URL`,
//! optional `TASKBOARD_ADDR`), with `.env` support.

use std::sync::Arc;

use diesel::pg::PgConnection;
use diesel::r2d2::{ConnectionManager, Pool};
use mockable::DefaultClock;
use tracing_subscriber::EnvFilter;

use taskboard::config::ServerConfig;
use taskboard::task::{adapters::postgres::PostgresTaskRepository, services::TaskBoardService};
use taskboard::web::{self, AppState};

/// Boxed error type for the main result.
type BoxError = Box<dyn std::error::Error + Send + Sync>;

#[tokio::main]
async fn main() -> Result<(), BoxError> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = ServerConfig::from_env()?;
    let manager = ConnectionManager::<PgConnection>::new(&config.database_url);
    let pool = Pool::builder().build(manager)?;

    let repository = Arc::new(PostgresTaskRepository::new(pool));
    let service = Arc::new(TaskBoardService::new(repository, Arc::new(DefaultClock)));
    let app = web::router(AppState::new(service));

    let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;
    tracing::info!(address = %config.bind_addr, "task board listening");
    axum::serve(listener, app).await?;
    Ok(())
}
