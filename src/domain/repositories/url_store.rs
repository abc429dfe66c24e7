//! Key-value store trait for shortcode entries.

use crate::domain::entities::{ClickRecord, ShortUrlEntry};
use crate::domain::errors::StoreError;
use async_trait::async_trait;

/// Storage interface keyed by shortcode.
///
/// Implementations must make [`insert_if_absent`](UrlStore::insert_if_absent)
/// and [`append_click`](UrlStore::append_click) atomic with respect to each
/// other and to concurrent callers. The service relies on this instead of a
/// get-then-set sequence.
///
/// # Implementations
///
/// - [`crate::infrastructure::storage::MemoryUrlStore`] - process-lifetime `DashMap`
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UrlStore: Send + Sync {
    /// Returns a snapshot of the entry stored under `code`.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if the backend cannot be read.
    async fn get(&self, code: &str) -> Result<Option<ShortUrlEntry>, StoreError>;

    /// Stores `entry` under `code`, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if the backend cannot be written.
    async fn set(&self, code: &str, entry: ShortUrlEntry) -> Result<(), StoreError>;

    /// Stores `entry` only if `code` is unused.
    ///
    /// # Returns
    ///
    /// - `Ok(true)` if the entry was inserted
    /// - `Ok(false)` if `code` already maps to an entry (left untouched)
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if the backend cannot be written.
    async fn insert_if_absent(&self, code: &str, entry: ShortUrlEntry) -> Result<bool, StoreError>;

    /// Appends `click` to the entry under `code`.
    ///
    /// Returns `Ok(false)` if no entry exists.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if the backend cannot be written.
    async fn append_click(&self, code: &str, click: ClickRecord) -> Result<bool, StoreError>;

    /// Number of stored entries.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if the backend cannot be read.
    async fn count(&self) -> Result<usize, StoreError>;
}
