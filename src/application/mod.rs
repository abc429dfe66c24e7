//! Application layer services implementing business logic.
//!
//! Services consume the [`crate::domain::repositories::UrlStore`] trait and the
//! [`services::AuditLogger`] handle, and provide a clean API for HTTP handlers.
//!
//! # Available Services
//!
//! - [`services::shortener_service::ShortenerService`] - Creation, redirect, and statistics
//! - [`services::audit_logger::AuditLogger`] - Non-blocking audit event queue

pub mod services;
