//! HTTP server initialization and runtime setup.
//!
//! Handles the database pool, service wiring and the Axum server lifecycle.

use crate::api::mappers::FindByPidProgrammeMapper;
use crate::application::services::{ProgrammesService, StatusService};
use crate::config::Config;
use crate::domain::entities::Pid;
use crate::domain::repositories::ProgrammesRepository;
use crate::infrastructure::persistence::PgProgrammesRepository;
use crate::routes::app_router;
use crate::state::AppState;

use anyhow::{Context, Result};
use axum::ServiceExt;
use axum::extract::Request;
use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

/// Creates the connection pool.
///
/// Connections are opened lazily so the service starts, and keeps reporting
/// status, while the catalogue database is down.
///
/// # Errors
///
/// Returns an error if the database URL cannot be parsed.
pub fn connect_pool(config: &Config) -> Result<PgPool> {
    PgPoolOptions::new()
        .max_connections(config.db_max_connections)
        .acquire_timeout(Duration::from_secs(config.db_connect_timeout))
        .idle_timeout(Duration::from_secs(config.db_idle_timeout))
        .max_lifetime(Duration::from_secs(config.db_max_lifetime))
        .connect_lazy(&config.database_url)
        .context("Invalid database configuration")
}

/// Wires repositories and services into the shared state.
///
/// # Errors
///
/// Returns an error if the status probe PID is malformed.
pub fn build_state(config: &Config, pool: PgPool) -> Result<AppState> {
    let repository: Arc<dyn ProgrammesRepository> = Arc::new(PgProgrammesRepository::new(
        Arc::new(pool),
        config.max_ancestor_depth,
    ));

    let probe_pid = Pid::new(&config.healthcheck_pid)
        .map_err(|e| anyhow::anyhow!("HEALTHCHECK_PID: {e}"))?;

    Ok(AppState {
        programmes_service: Arc::new(ProgrammesService::new(repository.clone())),
        status_service: Arc::new(StatusService::new(repository, probe_pid)),
        mapper: FindByPidProgrammeMapper::new(),
        healthcheck_user_agent: Arc::from(config.healthcheck_user_agent.as_str()),
    })
}

/// Runs the HTTP server with the given configuration.
///
/// # Errors
///
/// Returns an error if:
/// - The database URL is invalid
/// - Server bind fails
/// - Server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    let pool = connect_pool(&config)?;
    let state = build_state(&config, pool)?;

    let app = app_router(state);

    let addr: SocketAddr = config.listen_addr.parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(listener, ServiceExt::<Request>::into_make_service(app))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        return;
    }
    tracing::info!("Shutdown signal received");
}
