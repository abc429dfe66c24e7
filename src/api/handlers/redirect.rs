//! Handler for short URL redirect.

use axum::{
    extract::{Path, State},
    http::{HeaderMap, HeaderValue, StatusCode, header},
    response::{IntoResponse, Response},
};

use std::net::SocketAddr;

use crate::application::services::RedirectOutcome;
use crate::error::AppError;
use crate::state::AppState;
use crate::utils::request_info::{PeerAddr, client_ip, referrer};

/// Redirects a shortcode to its original URL.
///
/// # Endpoint
///
/// `GET /{shortcode}`
///
/// # Request Flow
///
/// 1. Look up the shortcode
/// 2. Reject expired entries (the entry is kept)
/// 3. Record a click with the `Referer` header and client IP
/// 4. Return 302 Found with `Location` set to the original URL
///
/// The client IP is the peer address, or the first `X-Forwarded-For` hop
/// when the service runs behind a proxy.
///
/// # Errors
///
/// Returns 404 Not Found if the shortcode doesn't exist.
/// Returns 410 Gone if the link has expired.
pub async fn redirect_handler(
    Path(shortcode): Path<String>,
    State(state): State<AppState>,
    PeerAddr(peer): PeerAddr,
    headers: HeaderMap,
) -> Result<Response, AppError> {
    redirect(&state, &shortcode, peer, &headers).await
}

/// Redirects the shortcode `shorturls`.
///
/// # Endpoint
///
/// `GET /shorturls`
///
/// The path is shared with the create route, so the code cannot be matched by
/// `GET /{shortcode}`.
pub async fn shorturls_code_redirect_handler(
    State(state): State<AppState>,
    PeerAddr(peer): PeerAddr,
    headers: HeaderMap,
) -> Result<Response, AppError> {
    redirect(&state, SHORTURLS_CODE, peer, &headers).await
}

/// Shortcode that collides with the `/shorturls` collection path.
const SHORTURLS_CODE: &str = "shorturls";

async fn redirect(
    state: &AppState,
    shortcode: &str,
    peer: Option<SocketAddr>,
    headers: &HeaderMap,
) -> Result<Response, AppError> {
    let ip = client_ip(headers, peer, state.behind_proxy);

    let outcome = state
        .shortener_service
        .handle_redirect(shortcode, referrer(headers), ip.as_deref())
        .await?;

    match outcome {
        RedirectOutcome::Redirect(url) => found(&url),
        RedirectOutcome::NotFound => Err(AppError::not_found("Shortcode not found")),
        RedirectOutcome::Expired => Err(AppError::gone("Shortlink expired")),
    }
}

/// `302 Found` with a `Location` header.
fn found(url: &str) -> Result<Response, AppError> {
    let location = HeaderValue::from_str(url)
        .map_err(|e| AppError::internal(format!("Unusable redirect target {}: {}", url, e)))?;

    Ok((StatusCode::FOUND, [(header::LOCATION, location)]).into_response())
}
