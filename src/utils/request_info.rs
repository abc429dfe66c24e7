//! Client and origin details extracted from HTTP requests.

use crate::AppError;
use axum::extract::{ConnectInfo, FromRequestParts};
use axum::http::{HeaderMap, header, request::Parts};
use std::convert::Infallible;
use std::net::SocketAddr;

const FORWARDED_PROTO: &str = "x-forwarded-proto";
const FORWARDED_FOR: &str = "x-forwarded-for";

/// Socket address of the connected peer, if the server recorded one.
///
/// Unlike [`ConnectInfo`], this extractor never rejects: routers served
/// without `into_make_service_with_connect_info` simply yield `None`.
#[derive(Debug, Clone, Copy)]
pub struct PeerAddr(pub Option<SocketAddr>);

impl<S> FromRequestParts<S> for PeerAddr
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Ok(Self(
            parts
                .extensions
                .get::<ConnectInfo<SocketAddr>>()
                .map(|ConnectInfo(addr)| *addr),
        ))
    }
}

/// Builds the public origin (`scheme://host[:port]`) the client used.
///
/// The scheme is `http` unless `trust_forwarded` is set and the request
/// carries `X-Forwarded-Proto`. The host part is the `Host` header verbatim,
/// port included.
///
/// # Errors
///
/// Returns [`AppError::Validation`] if the `Host` header is missing or is not
/// valid UTF-8.
///
/// # Examples
///
/// ```ignore
/// let mut headers = HeaderMap::new();
/// headers.insert(header::HOST, "localhost:3000".parse().unwrap());
///
/// assert_eq!(request_origin(&headers, false)?, "http://localhost:3000");
/// ```
pub fn request_origin(headers: &HeaderMap, trust_forwarded: bool) -> Result<String, AppError> {
    let host = headers
        .get(header::HOST)
        .ok_or_else(|| AppError::bad_request("Missing Host header"))?
        .to_str()
        .map_err(|_| AppError::bad_request("Invalid Host header"))?;

    let scheme = trust_forwarded
        .then(|| first_header_value(headers, FORWARDED_PROTO))
        .flatten()
        .unwrap_or("http");

    Ok(format!("{}://{}", scheme, host))
}

/// Returns the `Referer` header, if present and non-empty.
pub fn referrer(headers: &HeaderMap) -> Option<&str> {
    headers
        .get(header::REFERER)
        .and_then(|v| v.to_str().ok())
        .filter(|v| !v.is_empty())
}

/// Resolves the client IP address.
///
/// With `trust_forwarded`, the first hop of `X-Forwarded-For` wins. Otherwise
/// (or when the header is absent) the peer socket address is used.
pub fn client_ip(
    headers: &HeaderMap,
    peer: Option<SocketAddr>,
    trust_forwarded: bool,
) -> Option<String> {
    if trust_forwarded && let Some(forwarded) = first_header_value(headers, FORWARDED_FOR) {
        return Some(forwarded.to_string());
    }

    peer.map(|addr| addr.ip().to_string())
}

/// First comma-separated element of a header, trimmed. `None` when empty.
fn first_header_value<'a>(headers: &'a HeaderMap, name: &str) -> Option<&'a str> {
    headers
        .get(name)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.split(',').next())
        .map(str::trim)
        .filter(|v| !v.is_empty())
}
