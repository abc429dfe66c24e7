//! DTOs for shortcode statistics.

use chrono::{DateTime, Utc};
use serde::Serialize;

use super::clicks::ClickInfo;
use crate::application::services::ShortUrlStats;

/// Statistics for a single shortcode, including every recorded click.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatsResponse {
    pub original_url: String,
    #[serde(with = "super::timestamp")]
    pub created_at: DateTime<Utc>,
    #[serde(with = "super::timestamp")]
    pub expiry: DateTime<Utc>,
    pub total_clicks: usize,
    pub click_data: Vec<ClickInfo>,
}

impl From<ShortUrlStats> for StatsResponse {
    fn from(stats: ShortUrlStats) -> Self {
        Self {
            original_url: stats.original_url,
            created_at: stats.created_at,
            expiry: stats.expiry,
            total_clicks: stats.total_clicks,
            click_data: stats.clicks.into_iter().map(ClickInfo::from).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::ClickRecord;
    use chrono::TimeZone;
    use serde_json::json;

    #[test]
    fn test_stats_response_shape() {
        let created = Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap();
        let stats = ShortUrlStats {
            original_url: "https://example.com".to_string(),
            created_at: created,
            expiry: created + chrono::Duration::minutes(30),
            total_clicks: 1,
            clicks: vec![ClickRecord::new(created, None, Some("10.0.0.1"))],
        };

        let value = serde_json::to_value(StatsResponse::from(stats)).unwrap();

        assert_eq!(
            value,
            json!({
                "originalUrl": "https://example.com",
                "createdAt": "2025-01-01T00:00:00.000Z",
                "expiry": "2025-01-01T00:30:00.000Z",
                "totalClicks": 1,
                "clickData": [{
                    "timestamp": "2025-01-01T00:00:00.000Z",
                    "referrer": "Direct",
                    "sourceIp": "10.0.0.1"
                }]
            })
        );
    }
}
