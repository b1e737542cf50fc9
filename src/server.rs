//! HTTP server initialization and runtime setup.
//!
//! Handles database connections, outbound clients, worker spawning, and Axum
//! server lifecycle.

use crate::application::services::{LinkService, UrlCheckService};
use crate::config::Config;
use crate::domain::repositories::LinkRepository;
use crate::domain::view_worker::run_view_worker;
use crate::infrastructure::http::{HttpReachabilityProbe, SafeBrowsingClient};
use crate::infrastructure::persistence::PgLinkRepository;
use crate::routes::app_router;
use crate::state::AppState;

use anyhow::{Context, Result};
use axum::ServiceExt;
use axum::extract::Request;
use axum::http::HeaderValue;
use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;

/// Grace period for queued views after the server stops accepting requests.
const VIEW_DRAIN_TIMEOUT: Duration = Duration::from_secs(10);

/// Runs the HTTP server with the given configuration.
///
/// Initializes:
/// - PostgreSQL connection pool
/// - Apply migrations
/// - Reachability probe and Safe Browsing client
/// - Background view worker
/// - Axum HTTP server
///
/// Stops on Ctrl-C, then waits briefly for queued views to be applied.
///
/// # Errors
///
/// Returns an error if:
/// - Database connection or migration fails
/// - An outbound HTTP client cannot be built
/// - Server bind fails
/// - Server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    let pool = connect_pool(&config).await?;
    tracing::info!("Connected to database");

    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .context("Failed to run migrations")?;

    let link_repository: Arc<dyn LinkRepository> = Arc::new(PgLinkRepository::new(Arc::new(pool)));
    let url_checks = Arc::new(build_url_checks(&config)?);
    let link_service = Arc::new(LinkService::new(link_repository.clone(), url_checks));

    let (view_sender, view_receiver) = mpsc::channel(config.view_queue_capacity);
    let view_worker = tokio::spawn(run_view_worker(
        view_receiver,
        link_repository,
        config.view_worker_concurrency,
    ));
    tracing::info!("View worker started");

    let allowed_origin = config
        .app_origin
        .as_deref()
        .map(HeaderValue::from_str)
        .transpose()
        .context("APP_ORIGIN is not a valid header value")?;

    let state = AppState::new(link_service, view_sender);
    let app = app_router(state, allowed_origin);

    let addr: SocketAddr = config.listen_addr.parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(listener, ServiceExt::<Request>::into_make_service(app))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    // The router, and with it the last view sender, is gone; the worker
    // returns once the queue is drained.
    if tokio::time::timeout(VIEW_DRAIN_TIMEOUT, view_worker)
        .await
        .is_err()
    {
        tracing::warn!("View worker did not drain in time, pending views dropped");
    }

    tracing::info!("Server stopped");
    Ok(())
}

/// Opens the PostgreSQL pool with the configured limits.
///
/// # Errors
///
/// Returns an error if the database cannot be reached.
pub async fn connect_pool(config: &Config) -> Result<PgPool> {
    PgPoolOptions::new()
        .max_connections(config.db_max_connections)
        .acquire_timeout(Duration::from_secs(config.db_connect_timeout))
        .idle_timeout(Duration::from_secs(config.db_idle_timeout))
        .max_lifetime(Duration::from_secs(config.db_max_lifetime))
        .connect(&config.database_url)
        .await
        .context("Failed to connect to database")
}

/// Builds the reachability and safety checks from configuration.
///
/// # Errors
///
/// Returns an error if an HTTP client cannot be built or the Safe Browsing
/// endpoint is not a valid URL.
pub fn build_url_checks(config: &Config) -> Result<UrlCheckService> {
    let probe = HttpReachabilityProbe::new(config.probe_timeout())
        .context("Failed to build reachability probe")?;
    let threats = SafeBrowsingClient::new(
        &config.safe_browsing_url,
        &config.google_api_key,
        config.app_name.clone(),
        config.safety_timeout(),
    )
    .context("Failed to build Safe Browsing client")?;

    Ok(UrlCheckService::new(
        Arc::new(probe),
        Arc::new(threats),
        config.probe_timeout(),
        config.safety_timeout(),
    ))
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
