//! # Short URLs
//!
//! An in-memory URL shortener with click analytics and audit log forwarding,
//! built with Axum.
//!
//! ## Architecture
//!
//! This crate follows Clean Architecture principles with clear layer separation:
//!
//! - **Domain Layer** ([`domain`]) - Entries, click records, audit events, and the store trait
//! - **Application Layer** ([`application`]) - Shortener service and audit logger
//! - **Infrastructure Layer** ([`infrastructure`]) - In-memory store and audit sinks
//! - **API Layer** ([`api`]) - REST handlers, DTOs, and middleware
//!
//! ## Features
//!
//! - Random or custom shortcodes with configurable validity
//! - Per-click referrer and source IP tracking
//! - Non-blocking audit event forwarding to an external collector
//! - JSON-lines request log
//!
//! ## Quick Start
//!
//! ```bash
//! # Optional: forward audit events
//! export LOGGING_API_URL="http://collector.local/logs"
//! export ACCESS_TOKEN="..."
//!
//! cargo run
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via [`config::Config`].
//! See [`config`] module for available options.

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;
pub mod utils;

pub mod config;
pub mod server;

pub mod routes;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::{
        AuditLogger, CreatedShortUrl, RedirectOutcome, ShortUrlStats, ShortenerService,
    };
    pub use crate::domain::audit_event::{AuditEvent, AuditLevel, AuditPackage, AuditStack};
    pub use crate::domain::entities::{ClickRecord, ShortUrlEntry};
    pub use crate::error::AppError;
    pub use crate::infrastructure::storage::MemoryUrlStore;
    pub use crate::state::AppState;
}
