//! In-memory implementation of the URL store.

use async_trait::async_trait;
use dashmap::DashMap;
use dashmap::mapref::entry::Entry;
use std::sync::Arc;
use tracing::debug;

use crate::domain::entities::{ClickRecord, ShortUrlEntry};
use crate::domain::errors::StoreError;
use crate::domain::repositories::UrlStore;

/// Process-lifetime store backed by a sharded concurrent map.
///
/// No TTL, no capacity bound, nothing survives a restart. Per-key operations
/// run under the owning shard's lock, which makes `insert_if_absent` and
/// `append_click` atomic without a global mutex.
#[derive(Clone, Default)]
pub struct MemoryUrlStore {
    entries: Arc<DashMap<String, ShortUrlEntry>>,
}

impl MemoryUrlStore {
    pub fn new() -> Self {
        debug!("Using in-memory URL store");
        Self::default()
    }
}

#[async_trait]
impl UrlStore for MemoryUrlStore {
    async fn get(&self, code: &str) -> Result<Option<ShortUrlEntry>, StoreError> {
        Ok(self.entries.get(code).map(|entry| entry.value().clone()))
    }

    async fn set(&self, code: &str, entry: ShortUrlEntry) -> Result<(), StoreError> {
        self.entries.insert(code.to_string(), entry);
        Ok(())
    }

    async fn insert_if_absent(&self, code: &str, entry: ShortUrlEntry) -> Result<bool, StoreError> {
        match self.entries.entry(code.to_string()) {
            Entry::Occupied(_) => Ok(false),
            Entry::Vacant(slot) => {
                slot.insert(entry);
                Ok(true)
            }
        }
    }

    async fn append_click(&self, code: &str, click: ClickRecord) -> Result<bool, StoreError> {
        match self.entries.get_mut(code) {
            Some(mut entry) => {
                entry.clicks.push(click);
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn count(&self) -> Result<usize, StoreError> {
        Ok(self.entries.len())
    }
}
