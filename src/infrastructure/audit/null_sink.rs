//! No-op audit sink for running without a collector.

use super::sink::{AuditResult, AuditSink};
use crate::domain::audit_event::AuditEvent;
use async_trait::async_trait;
use serde_json::Value;
use tracing::debug;

/// A sink that accepts every event and sends nothing.
///
/// Used when `LOGGING_API_URL` is not configured. Events still reach the
/// local `tracing` subscriber through the audit logger.
pub struct NullAuditSink;

impl NullAuditSink {
    pub fn new() -> Self {
        debug!("Using NullAuditSink (audit forwarding disabled)");
        Self
    }
}

impl Default for NullAuditSink {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl AuditSink for NullAuditSink {
    async fn deliver(&self, _event: &AuditEvent) -> AuditResult<Value> {
        Ok(Value::Null)
    }

    fn is_enabled(&self) -> bool {
        false
    }
}
