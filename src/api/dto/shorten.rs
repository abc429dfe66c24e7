//! DTOs for the short URL creation endpoint.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::application::services::CreatedShortUrl;

/// Request to create a short URL.
///
/// A missing `url` deserializes to an empty string so the service reports it
/// as an invalid URL, like any other malformed input.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateShortUrlRequest {
    #[serde(default)]
    pub url: String,

    /// Lifetime in minutes (default 30, at most one year).
    #[validate(range(max = 525_600, message = "Validity must be between 0 and 525600 minutes"))]
    pub validity: Option<u32>,

    /// Requested shortcode; generated when absent or empty.
    pub shortcode: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateShortUrlResponse {
    pub short_link: String,
    #[serde(with = "super::timestamp")]
    pub expiry: DateTime<Utc>,
}

impl From<CreatedShortUrl> for CreateShortUrlResponse {
    fn from(created: CreatedShortUrl) -> Self {
        Self {
            short_link: created.short_link,
            expiry: created.expiry,
        }
    }
}
