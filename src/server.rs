//! HTTP server initialization and runtime setup.
//!
//! Handles database connections, worker spawning, and Axum server lifecycle.

use crate::application::services::{AuthService, VenueService};
use crate::config::Config;
use crate::domain::view_worker::{run_view_worker, wait_for_drain};
use crate::infrastructure::analytics::ChannelEmitter;
use crate::infrastructure::persistence::{PgTokenRepository, PgVenueRepository, PgViewRepository};
use crate::routes::app_router;
use crate::state::AppState;

use anyhow::{Context, Result};
use axum::ServiceExt;
use axum::extract::Request;
use sqlx::postgres::PgPoolOptions;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;

/// How long shutdown waits for queued view events to be written.
const VIEW_DRAIN_TIMEOUT: Duration = Duration::from_secs(10);

/// Runs the HTTP server with the given configuration.
///
/// Initializes:
/// - PostgreSQL connection pool
/// - Apply migrations
/// - Background view worker
/// - Axum HTTP server with graceful shutdown on Ctrl-C, after which queued
///   views are flushed
///
/// # Errors
///
/// Returns an error if:
/// - Database connection or migration fails
/// - Server bind fails
/// - Server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    let pool = PgPoolOptions::new()
        .max_connections(config.db_max_connections)
        .acquire_timeout(Duration::from_secs(config.db_connect_timeout))
        .idle_timeout(Duration::from_secs(config.db_idle_timeout))
        .max_lifetime(Duration::from_secs(config.db_max_lifetime))
        .connect(&config.database_url)
        .await
        .context("Failed to connect to database")?;
    tracing::info!("Connected to database");

    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .context("Failed to run migrations")?;

    let pool = Arc::new(pool);
    let venue_repository = Arc::new(PgVenueRepository::new(pool.clone()));
    let view_repository = Arc::new(PgViewRepository::new(pool.clone()));
    let token_repository = Arc::new(PgTokenRepository::new(pool));

    let (view_tx, view_rx) = mpsc::channel(config.view_queue_capacity);
    let view_worker = tokio::spawn(run_view_worker(view_rx, view_repository.clone()));
    tracing::info!("View worker started");

    let state = AppState::new(
        Arc::new(VenueService::new(venue_repository, view_repository)),
        Arc::new(AuthService::new(
            token_repository,
            config.token_signing_secret.clone(),
        )),
        ChannelEmitter::new(view_tx),
        config.site.clone(),
    );

    let app = app_router(state);

    let addr: SocketAddr = config.listen_addr.parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(
        listener,
        ServiceExt::<Request>::into_make_service_with_connect_info::<SocketAddr>(app),
    )
    .with_graceful_shutdown(shutdown_signal())
    .await?;

    // The router and every emitter clone are gone, so the worker sees the
    // queue close once it has written what is left.
    if wait_for_drain(view_worker, VIEW_DRAIN_TIMEOUT).await {
        tracing::info!("View queue drained");
    }

    tracing::info!("Server stopped");

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for shutdown signal");
    }
    tracing::info!("Shutdown signal received");
}
