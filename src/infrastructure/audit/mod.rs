//! Audit log forwarding to the external collector.

pub mod http_sink;
pub mod null_sink;
pub mod sink;
pub mod worker;

pub use http_sink::HttpAuditSink;
pub use null_sink::NullAuditSink;
pub use sink::{AuditError, AuditResult, AuditSink};
pub use worker::run_audit_worker;
