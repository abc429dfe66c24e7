//! Non-blocking audit logger handed to services.

use std::sync::Arc;
use tokio::sync::mpsc::{self, error::TrySendError};
use tracing::{debug, error, info, warn};

use crate::domain::audit_event::{AuditEvent, AuditLevel, AuditPackage};
use crate::domain::audit_stats::{AuditStats, AuditStatsSnapshot};

/// Cloneable handle that queues audit events for background delivery.
///
/// [`log`](AuditLogger::log) never waits on the network: the event is mirrored
/// to the local `tracing` subscriber and pushed onto a bounded channel drained
/// by [`crate::infrastructure::audit::run_audit_worker`]. When the channel is
/// full or closed, the event is dropped and counted.
#[derive(Clone)]
pub struct AuditLogger {
    sender: mpsc::Sender<AuditEvent>,
    stats: Arc<AuditStats>,
}

impl AuditLogger {
    /// Creates a logger and the receiving end of its queue.
    ///
    /// # Panics
    ///
    /// Panics if `capacity` is zero.
    pub fn channel(capacity: usize) -> (Self, mpsc::Receiver<AuditEvent>) {
        let (sender, receiver) = mpsc::channel(capacity);
        let logger = Self {
            sender,
            stats: Arc::new(AuditStats::new()),
        };
        (logger, receiver)
    }

    /// Queues a backend audit event.
    pub fn log(&self, level: AuditLevel, package: AuditPackage, message: impl Into<String>) {
        let event = AuditEvent::backend(level, package, message);
        mirror_to_tracing(&event);

        match self.sender.try_send(event) {
            Ok(()) => {}
            Err(TrySendError::Full(event)) => {
                self.stats.record_dropped();
                warn!(
                    level = %event.level,
                    package = %event.package,
                    "Audit queue full, event dropped"
                );
            }
            Err(TrySendError::Closed(_)) => {
                self.stats.record_dropped();
                debug!("Audit queue closed, event dropped");
            }
        }
    }

    /// Shared counters, also handed to the worker.
    pub fn stats(&self) -> Arc<AuditStats> {
        Arc::clone(&self.stats)
    }

    pub fn snapshot(&self) -> AuditStatsSnapshot {
        self.stats.snapshot()
    }

    pub fn is_closed(&self) -> bool {
        self.sender.is_closed()
    }

    /// Free slots currently available in the queue.
    pub fn capacity(&self) -> usize {
        self.sender.capacity()
    }
}

fn mirror_to_tracing(event: &AuditEvent) {
    let package = event.package.as_str();
    let message = event.message.as_str();

    match event.level {
        AuditLevel::Debug => debug!(target: "audit", package, "{}", message),
        AuditLevel::Info => info!(target: "audit", package, "{}", message),
        AuditLevel::Warn => warn!(target: "audit", package, "{}", message),
        AuditLevel::Error | AuditLevel::Fatal => {
            error!(target: "audit", package, level = event.level.as_str(), "{}", message)
        }
    }
}
