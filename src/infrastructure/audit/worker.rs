//! Background task that drains the audit queue.

use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;
use tracing::{debug, error, warn};

use super::sink::{AuditError, AuditSink};
use crate::domain::audit_event::AuditEvent;
use crate::domain::audit_stats::AuditStats;

/// Delivers queued audit events one at a time until every sender is dropped.
///
/// Events are sent in the order they were queued. Each delivery is bounded by
/// `timeout`; a timeout or delivery error is logged locally, counted as
/// failed, and the worker moves on. Nothing is retried.
pub async fn run_audit_worker(
    mut rx: mpsc::Receiver<AuditEvent>,
    sink: Arc<dyn AuditSink>,
    stats: Arc<AuditStats>,
    timeout: Duration,
) {
    while let Some(event) = rx.recv().await {
        let outcome = match tokio::time::timeout(timeout, sink.deliver(&event)).await {
            Ok(result) => result,
            Err(_) => Err(AuditError::Timeout),
        };

        match outcome {
            Ok(response) => {
                stats.record_delivered();
                debug!(?response, "Audit event delivered");
            }
            Err(AuditError::Timeout) => {
                stats.record_failed();
                warn!(
                    level = %event.level,
                    package = %event.package,
                    "Audit event delivery timed out after {}ms",
                    timeout.as_millis()
                );
            }
            Err(e) => {
                stats.record_failed();
                error!(
                    level = %event.level,
                    package = %event.package,
                    "[Logger Client Error] {}",
                    e
                );
            }
        }
    }

    debug!("Audit queue closed, worker exiting");
}
