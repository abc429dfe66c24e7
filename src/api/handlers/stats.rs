//! Handler for shortcode statistics.

use axum::{
    Json,
    extract::{Path, State},
};

use crate::api::dto::stats::StatsResponse;
use crate::error::AppError;
use crate::state::AppState;

/// Retrieves statistics for a shortcode.
///
/// # Endpoint
///
/// `GET /shorturls/{shortcode}`
///
/// Expired links still report their statistics. Reading statistics never
/// records a click.
///
/// # Response
///
/// ```json
/// {
///   "originalUrl": "https://example.com",
///   "createdAt": "2025-01-01T12:00:00.000Z",
///   "expiry": "2025-01-01T12:30:00.000Z",
///   "totalClicks": 1,
///   "clickData": [
///     { "timestamp": "2025-01-01T12:01:00.000Z", "referrer": "Direct", "sourceIp": "10.0.0.1" }
///   ]
/// }
/// ```
///
/// # Errors
///
/// Returns 404 Not Found if the shortcode doesn't exist.
pub async fn stats_handler(
    State(state): State<AppState>,
    Path(shortcode): Path<String>,
) -> Result<Json<StatsResponse>, AppError> {
    let stats = state
        .shortener_service
        .get_short_url_stats(&shortcode)
        .await?
        .ok_or_else(|| AppError::not_found("Shortcode not found"))?;

    Ok(Json(stats.into()))
}
