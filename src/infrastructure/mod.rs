//! Infrastructure layer for external integrations.
//!
//! This layer implements interfaces defined by the domain layer.
//!
//! # Modules
//!
//! - [`storage`] - In-memory shortcode store
//! - [`audit`] - Audit sinks (HTTP collector and no-op) and the delivery worker

pub mod audit;
pub mod storage;
