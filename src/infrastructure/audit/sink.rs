//! Audit sink trait and error types.

use async_trait::async_trait;
use serde_json::Value;
use std::fmt;

use crate::domain::audit_event::AuditEvent;

/// Errors that can occur while delivering an audit event.
#[derive(Debug)]
pub enum AuditError {
    /// Connection failure, non-2xx status, or a response body that is not JSON.
    Delivery(String),
    /// The collector did not answer within the configured timeout.
    Timeout,
}

impl fmt::Display for AuditError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::Delivery(e) => write!(f, "Audit delivery error: {}", e),
            Self::Timeout => write!(f, "Audit delivery timed out"),
        }
    }
}

impl std::error::Error for AuditError {}

impl From<reqwest::Error> for AuditError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            Self::Timeout
        } else {
            Self::Delivery(e.to_string())
        }
    }
}

/// Result type for audit deliveries.
pub type AuditResult<T> = Result<T, AuditError>;

/// Destination for audit events.
///
/// Delivery errors are returned to the worker, which logs and counts them;
/// they never reach request handlers.
///
/// # Implementations
///
/// - [`crate::infrastructure::audit::HttpAuditSink`] - JSON POST with bearer token
/// - [`crate::infrastructure::audit::NullAuditSink`] - No-op when no collector is configured
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AuditSink: Send + Sync {
    /// Sends one event and returns the collector's parsed JSON response.
    async fn deliver(&self, event: &AuditEvent) -> AuditResult<Value>;

    /// Returns false for sinks that discard everything.
    fn is_enabled(&self) -> bool;
}
