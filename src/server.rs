//! HTTP server initialization and runtime setup.
//!
//! Handles store creation, audit worker spawning, request log setup, and the
//! Axum server lifecycle.

use crate::api::middleware::request_log::RequestLog;
use crate::application::services::{AuditLogger, ShortenerService};
use crate::config::Config;
use crate::infrastructure::audit::{AuditSink, HttpAuditSink, NullAuditSink, run_audit_worker};
use crate::infrastructure::storage::MemoryUrlStore;
use crate::routes::app_router;
use crate::state::AppState;

use anyhow::{Context, Result};
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tokio::signal;

/// Time allowed for queued audit events to drain after shutdown.
const AUDIT_DRAIN_TIMEOUT: Duration = Duration::from_secs(5);

/// Runs the HTTP server with the given configuration.
///
/// Initializes:
/// - In-memory shortcode store
/// - Audit sink (HTTP collector or no-op) and background delivery worker
/// - Request log file (if configured)
/// - Axum HTTP server with graceful Ctrl+C shutdown
///
/// # Errors
///
/// Returns an error if:
/// - The audit HTTP client cannot be built
/// - The request log file cannot be opened
/// - Server bind fails
/// - Server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    let sink = build_audit_sink(&config)?;
    if !sink.is_enabled() {
        tracing::warn!("Audit forwarding disabled, events are only written to the local log");
    }

    let (audit_logger, audit_rx) = AuditLogger::channel(config.audit_queue_capacity);
    let worker = tokio::spawn(run_audit_worker(
        audit_rx,
        sink,
        audit_logger.stats(),
        config.audit_timeout(),
    ));
    tracing::info!("Audit worker started");

    let store = Arc::new(MemoryUrlStore::new());
    let shortener_service = Arc::new(
        ShortenerService::new(store, audit_logger.clone())
            .with_default_validity(config.default_validity_minutes)
            .with_max_generation_attempts(config.code_generation_attempts),
    );

    let state = AppState::new(shortener_service, audit_logger, config.behind_proxy);

    let request_log = match config.request_log_path {
        Some(ref path) => {
            let log = RequestLog::open(path)
                .await
                .with_context(|| format!("Failed to open request log '{}'", path))?;
            tracing::info!("Request log: {}", path);
            Some(Arc::new(log))
        }
        None => None,
    };

    let app = app_router(state, request_log);

    let addr: SocketAddr = config
        .listen_addr()
        .parse()
        .with_context(|| format!("Invalid listen address '{}'", config.listen_addr()))?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .with_graceful_shutdown(shutdown_signal())
    .await?;

    // The router owned the last senders; the worker stops once the queue is empty.
    match tokio::time::timeout(AUDIT_DRAIN_TIMEOUT, worker).await {
        Ok(_) => tracing::info!("Audit queue drained"),
        Err(_) => tracing::warn!(
            "Audit queue not drained after {}s, exiting",
            AUDIT_DRAIN_TIMEOUT.as_secs()
        ),
    }

    Ok(())
}

/// Selects the HTTP collector when `LOGGING_API_URL` is set, otherwise a no-op sink.
fn build_audit_sink(config: &Config) -> Result<Arc<dyn AuditSink>> {
    match config.logging_api_url {
        Some(ref url) => {
            let sink = HttpAuditSink::new(
                url.clone(),
                config.access_token.clone(),
                config.audit_timeout(),
            )
            .context("Failed to build audit HTTP client")?;
            tracing::info!("Audit forwarding enabled ({})", sink.endpoint());
            Ok(Arc::new(sink))
        }
        None => Ok(Arc::new(NullAuditSink::new())),
    }
}

/// Resolves on Ctrl+C.
async fn shutdown_signal() {
    match signal::ctrl_c().await {
        Ok(()) => tracing::info!("Shutdown signal received"),
        Err(e) => tracing::warn!(
            "Failed to listen for Ctrl+C: {}. Proceeding with shutdown anyway.",
            e
        ),
    }
}
