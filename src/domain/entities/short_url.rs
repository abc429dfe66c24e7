//! Short URL entry stored per shortcode.

use chrono::{DateTime, Duration, Utc};

use super::click::ClickRecord;

/// The stored mapping behind a shortcode.
///
/// Created once, then mutated only by appending click records. Entries are
/// never removed; expiry is evaluated lazily against the wall clock.
#[derive(Debug, Clone, PartialEq)]
pub struct ShortUrlEntry {
    pub original_url: String,
    pub created_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
    pub clicks: Vec<ClickRecord>,
}

impl ShortUrlEntry {
    /// Creates an entry with no clicks that expires `validity_minutes` after `created_at`.
    pub fn new(original_url: String, created_at: DateTime<Utc>, validity_minutes: u32) -> Self {
        Self {
            original_url,
            created_at,
            expires_at: created_at + Duration::minutes(i64::from(validity_minutes)),
            clicks: Vec::new(),
        }
    }

    /// Returns true once `now` has reached the expiry instant.
    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        now >= self.expires_at
    }

    pub fn total_clicks(&self) -> usize {
        self.clicks.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entry_creation() {
        let now = Utc::now();
        let entry = ShortUrlEntry::new("https://example.com".to_string(), now, 30);

        assert_eq!(entry.original_url, "https://example.com");
        assert_eq!(entry.created_at, now);
        assert_eq!(entry.expires_at, now + Duration::minutes(30));
        assert!(entry.clicks.is_empty());
        assert_eq!(entry.total_clicks(), 0);
    }

    #[test]
    fn test_entry_not_expired_inside_window() {
        let now = Utc::now();
        let entry = ShortUrlEntry::new("https://example.com".to_string(), now, 1);

        assert!(!entry.is_expired_at(now));
        assert!(!entry.is_expired_at(now + Duration::seconds(59)));
    }

    #[test]
    fn test_entry_expired_after_window() {
        let now = Utc::now();
        let entry = ShortUrlEntry::new("https://example.com".to_string(), now, 1);

        assert!(entry.is_expired_at(now + Duration::seconds(61)));
    }

    #[test]
    fn test_zero_validity_is_expired_immediately() {
        let now = Utc::now();
        let entry = ShortUrlEntry::new("https://example.com".to_string(), now, 0);

        assert_eq!(entry.expires_at, entry.created_at);
        assert!(entry.is_expired_at(now));
        assert!(entry.is_expired_at(now + Duration::seconds(1)));
    }
}
