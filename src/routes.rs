//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `POST /shorturls`             - Create a short URL
//! - `GET  /shorturls`             - Short link redirect for the code `shorturls`
//! - `GET  /shorturls/{shortcode}` - Shortcode statistics
//! - `GET  /-/health`              - Health check: store, audit queue
//! - `GET  /{shortcode}`           - Short link redirect
//!
//! Every shortcode is reachable. The health check lives under `/-/`, which no
//! single-segment shortcode path can match.
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **Request log** - JSON-lines file, one line per completed request (optional)

use crate::api;
use crate::api::handlers::{health_handler, redirect_handler};
use crate::api::middleware::request_log::{self, RequestLog};
use crate::api::middleware::tracing;
use crate::state::AppState;
use axum::routing::get;
use axum::{Router, middleware};
use std::sync::Arc;

/// Health check path, kept outside the shortcode namespace.
pub const HEALTH_PATH: &str = "/-/health";

/// Constructs the application router with all routes and middleware.
///
/// # Arguments
///
/// - `state` - shared application state injected into all handlers
/// - `request_log` - request log sink; `None` disables the file log
pub fn app_router(state: AppState, request_log: Option<Arc<RequestLog>>) -> Router {
    let router = Router::new()
        .route(HEALTH_PATH, get(health_handler))
        .route("/{shortcode}", get(redirect_handler))
        .nest("/shorturls", api::routes::shorturl_routes())
        .with_state(state);

    let router = match request_log {
        Some(log) => router.layer(middleware::from_fn_with_state(log, request_log::layer)),
        None => router,
    };

    router.layer(tracing::layer())
}
