//! DTO for individual click records.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::domain::entities::ClickRecord;

/// Click record in statistics responses.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ClickInfo {
    #[serde(with = "super::timestamp")]
    pub timestamp: DateTime<Utc>,
    pub referrer: String,
    pub source_ip: String,
}

impl From<ClickRecord> for ClickInfo {
    fn from(click: ClickRecord) -> Self {
        Self {
            timestamp: click.timestamp,
            referrer: click.referrer,
            source_ip: click.source_ip,
        }
    }
}
