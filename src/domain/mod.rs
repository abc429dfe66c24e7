//! Domain layer containing business entities and contracts.
//!
//! # Architecture
//!
//! - [`entities`] - Short URL entries and click records
//! - [`repositories`] - Storage trait definitions
//! - [`errors`] - Store and service failure types
//! - [`audit_event`] - Audit log event model
//! - [`audit_stats`] - Audit delivery counters
//!
//! # Audit Flow
//!
//! 1. A service calls [`crate::application::services::AuditLogger::log`]
//! 2. The [`audit_event::AuditEvent`] is queued on a bounded channel (non-blocking)
//! 3. [`crate::infrastructure::audit::run_audit_worker`] delivers events in order
//! 4. Outcomes are counted in [`audit_stats::AuditStats`]

pub mod audit_event;
pub mod audit_stats;
pub mod entities;
pub mod errors;
pub mod repositories;
