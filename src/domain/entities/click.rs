//! Click record captured on each successful redirect.

use chrono::{DateTime, Utc};

/// Referrer recorded when the request carries none.
pub const DIRECT_REFERRER: &str = "Direct";

/// Source recorded when the client address is not known.
pub const UNKNOWN_SOURCE: &str = "Unknown";

/// One observed redirect.
///
/// Missing client metadata is replaced with fixed placeholders so every
/// record has the same shape in statistics output.
#[derive(Debug, Clone, PartialEq)]
pub struct ClickRecord {
    pub timestamp: DateTime<Utc>,
    pub referrer: String,
    pub source_ip: String,
}

impl ClickRecord {
    /// Creates a click record, substituting defaults for absent or empty values.
    ///
    /// # Examples
    ///
    /// ```ignore
    /// let click = ClickRecord::new(Utc::now(), None, Some("10.0.0.1"));
    /// assert_eq!(click.referrer, "Direct");
    /// ```
    pub fn new(timestamp: DateTime<Utc>, referrer: Option<&str>, source_ip: Option<&str>) -> Self {
        Self {
            timestamp,
            referrer: non_empty_or(referrer, DIRECT_REFERRER),
            source_ip: non_empty_or(source_ip, UNKNOWN_SOURCE),
        }
    }
}

fn non_empty_or(value: Option<&str>, default: &str) -> String {
    value
        .filter(|v| !v.is_empty())
        .unwrap_or(default)
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_click_creation_with_all_fields() {
        let now = Utc::now();
        let click = ClickRecord::new(now, Some("https://google.com"), Some("192.168.1.1"));

        assert_eq!(click.timestamp, now);
        assert_eq!(click.referrer, "https://google.com");
        assert_eq!(click.source_ip, "192.168.1.1");
    }

    #[test]
    fn test_click_creation_defaults() {
        let click = ClickRecord::new(Utc::now(), None, None);

        assert_eq!(click.referrer, DIRECT_REFERRER);
        assert_eq!(click.source_ip, UNKNOWN_SOURCE);
    }

    #[test]
    fn test_click_empty_values_use_defaults() {
        let click = ClickRecord::new(Utc::now(), Some(""), Some(""));

        assert_eq!(click.referrer, "Direct");
        assert_eq!(click.source_ip, "Unknown");
    }
}
