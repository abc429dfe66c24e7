//! Delivery counters shared by the audit logger and its worker.

use serde::Serialize;
use std::sync::atomic::{AtomicU64, Ordering};

/// Lock-free counters for audit event outcomes.
///
/// - `delivered` - accepted by the collector
/// - `failed` - sent but rejected, unreadable, or timed out
/// - `dropped` - never sent because the queue was full or closed
#[derive(Debug, Default)]
pub struct AuditStats {
    delivered: AtomicU64,
    failed: AtomicU64,
    dropped: AtomicU64,
}

/// Point-in-time copy of [`AuditStats`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AuditStatsSnapshot {
    pub delivered: u64,
    pub failed: u64,
    pub dropped: u64,
}

impl AuditStats {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_delivered(&self) {
        self.delivered.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_failed(&self) {
        self.failed.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_dropped(&self) {
        self.dropped.fetch_add(1, Ordering::Relaxed);
    }

    pub fn snapshot(&self) -> AuditStatsSnapshot {
        AuditStatsSnapshot {
            delivered: self.delivered.load(Ordering::Relaxed),
            failed: self.failed.load(Ordering::Relaxed),
            dropped: self.dropped.load(Ordering::Relaxed),
        }
    }
}
