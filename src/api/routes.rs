//! API route configuration.

use crate::api::handlers::{shorten_handler, shorturls_code_redirect_handler, stats_handler};
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post},
};

/// Short URL management routes, nested under `/shorturls`.
///
/// # Endpoints
///
/// - `POST /`            - Create a short URL
/// - `GET  /`            - Redirect for the shortcode `shorturls`
/// - `GET  /{shortcode}` - Statistics for a shortcode
pub fn shorturl_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            post(shorten_handler).get(shorturls_code_redirect_handler),
        )
        .route("/{shortcode}", get(stats_handler))
}
