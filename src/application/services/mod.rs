//! Business logic services for the application layer.

pub mod audit_logger;
pub mod shortener_service;

pub use audit_logger::AuditLogger;
pub use shortener_service::{
    CreatedShortUrl, DEFAULT_GENERATION_ATTEMPTS, DEFAULT_VALIDITY_MINUTES, RedirectOutcome,
    ShortUrlStats, ShortenerService,
};
