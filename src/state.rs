//! Shared application state injected into every handler.

use std::sync::Arc;

use crate::application::services::{AuditLogger, ShortenerService};
use crate::infrastructure::storage::MemoryUrlStore;

/// Shortener service backed by the in-process store.
pub type AppShortenerService = ShortenerService<MemoryUrlStore>;

#[derive(Clone)]
pub struct AppState {
    pub shortener_service: Arc<AppShortenerService>,
    pub audit_logger: AuditLogger,
    /// Trust `X-Forwarded-For` / `X-Forwarded-Proto` from a reverse proxy.
    pub behind_proxy: bool,
}

impl AppState {
    pub fn new(
        shortener_service: Arc<AppShortenerService>,
        audit_logger: AuditLogger,
        behind_proxy: bool,
    ) -> Self {
        Self {
            shortener_service,
            audit_logger,
            behind_proxy,
        }
    }
}
