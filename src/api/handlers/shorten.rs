//! Handler for short URL creation.

use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::{HeaderMap, StatusCode},
};
use validator::Validate;

use crate::api::dto::shorten::{CreateShortUrlRequest, CreateShortUrlResponse};
use crate::domain::audit_event::{AuditLevel, AuditPackage};
use crate::error::AppError;
use crate::state::AppState;
use crate::utils::request_info::request_origin;

/// Creates a short URL.
///
/// # Endpoint
///
/// `POST /shorturls`
///
/// # Request Body
///
/// ```json
/// {
///   "url": "https://example.com/very/long/path",
///   "validity": 60,          // optional, minutes (default: 30)
///   "shortcode": "my-link"   // optional, 4-20 of [A-Za-z0-9_-]
/// }
/// ```
///
/// # Response
///
/// `201 Created`
///
/// ```json
/// {
///   "shortLink": "http://localhost:3000/my-link",
///   "expiry": "2025-01-01T12:30:00.000Z"
/// }
/// ```
///
/// # Errors
///
/// Returns 400 Bad Request if the body is not valid JSON, `validity` is out of
/// range, the URL or shortcode is malformed, or the shortcode is taken.
/// Returns 500 Internal Server Error on unexpected failures.
pub async fn shorten_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
    payload: Result<Json<CreateShortUrlRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<CreateShortUrlResponse>), AppError> {
    let Json(payload) = payload.inspect_err(|rejection| {
        state.audit_logger.log(
            AuditLevel::Warn,
            AuditPackage::Handler,
            format!("Rejected create request body: {}", rejection.body_text()),
        );
    })?;

    payload.validate()?;

    let host = request_origin(&headers, state.behind_proxy)?;

    let created = state
        .shortener_service
        .create_short_url(
            &payload.url,
            payload.validity,
            payload.shortcode.as_deref(),
            &host,
        )
        .await?;

    Ok((StatusCode::CREATED, Json(created.into())))
}
