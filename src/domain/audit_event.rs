//! Audit event model forwarded to the external logging collector.

use serde::Serialize;
use std::fmt;

/// Origin tier of an audit event.
///
/// This service only ever emits [`AuditStack::Backend`]; the variant exists so
/// the wire schema can carry other callers without a format change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AuditStack {
    Backend,
    /// Reserved for browser clients reporting to the same collector.
    Frontend,
}

/// Severity of an audit event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AuditLevel {
    Debug,
    Info,
    Warn,
    Error,
    Fatal,
}

/// Component of the service that produced an audit event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AuditPackage {
    Service,
    Handler,
    Route,
    Db,
    Middleware,
    Config,
    Utils,
}

impl AuditLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Debug => "debug",
            Self::Info => "info",
            Self::Warn => "warn",
            Self::Error => "error",
            Self::Fatal => "fatal",
        }
    }
}

impl AuditPackage {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Service => "service",
            Self::Handler => "handler",
            Self::Route => "route",
            Self::Db => "db",
            Self::Middleware => "middleware",
            Self::Config => "config",
            Self::Utils => "utils",
        }
    }
}

impl fmt::Display for AuditLevel {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for AuditPackage {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A structured record describing a backend action or failure.
///
/// Serializes to the collector's payload shape:
///
/// ```json
/// { "stack": "backend", "level": "info", "package": "service", "message": "..." }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AuditEvent {
    pub stack: AuditStack,
    pub level: AuditLevel,
    pub package: AuditPackage,
    pub message: String,
}

impl AuditEvent {
    pub fn new(
        stack: AuditStack,
        level: AuditLevel,
        package: AuditPackage,
        message: impl Into<String>,
    ) -> Self {
        Self {
            stack,
            level,
            package,
            message: message.into(),
        }
    }

    /// Creates an event attributed to the backend stack.
    pub fn backend(level: AuditLevel, package: AuditPackage, message: impl Into<String>) -> Self {
        Self::new(AuditStack::Backend, level, package, message)
    }
}
