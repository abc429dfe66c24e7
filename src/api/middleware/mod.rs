//! HTTP middleware for request processing and observability.

pub mod request_log;
pub mod tracing;
