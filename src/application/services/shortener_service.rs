//! Shortcode lifecycle: creation, redirect resolution, and statistics.

use chrono::{DateTime, Utc};
use std::sync::Arc;

use crate::application::services::AuditLogger;
use crate::domain::audit_event::{AuditLevel, AuditPackage};
use crate::domain::entities::{ClickRecord, ShortUrlEntry};
use crate::domain::errors::{ShortenerError, StoreError};
use crate::domain::repositories::UrlStore;
use crate::utils::code_generator::generate_code;
use crate::utils::validators::{is_valid_shortcode, is_valid_url};

/// Validity window applied when the caller does not supply one.
pub const DEFAULT_VALIDITY_MINUTES: u32 = 30;

/// Generation attempts before giving up with [`ShortenerError::CapacityExhausted`].
pub const DEFAULT_GENERATION_ATTEMPTS: usize = 10;

/// Result of a successful [`ShortenerService::create_short_url`] call.
#[derive(Debug, Clone, PartialEq)]
pub struct CreatedShortUrl {
    pub code: String,
    pub short_link: String,
    pub expiry: DateTime<Utc>,
}

/// How a redirect request resolved.
#[derive(Debug, Clone, PartialEq)]
pub enum RedirectOutcome {
    /// Click recorded; redirect the client here.
    Redirect(String),
    NotFound,
    /// The entry exists but its validity window has passed. Nothing is recorded.
    Expired,
}

/// Read-only view of an entry and its click history.
#[derive(Debug, Clone, PartialEq)]
pub struct ShortUrlStats {
    pub original_url: String,
    pub created_at: DateTime<Utc>,
    pub expiry: DateTime<Utc>,
    pub total_clicks: usize,
    pub clicks: Vec<ClickRecord>,
}

impl From<ShortUrlEntry> for ShortUrlStats {
    fn from(entry: ShortUrlEntry) -> Self {
        Self {
            total_clicks: entry.total_clicks(),
            original_url: entry.original_url,
            created_at: entry.created_at,
            expiry: entry.expires_at,
            clicks: entry.clicks,
        }
    }
}

/// Service implementing the shortcode lifecycle.
///
/// Every outcome of a public operation emits exactly one audit event through
/// the injected [`AuditLogger`]. Unexpected store or entropy failures emit an
/// `error` event and are returned to the caller.
pub struct ShortenerService<S: UrlStore> {
    store: Arc<S>,
    audit: AuditLogger,
    default_validity_minutes: u32,
    max_generation_attempts: usize,
}

impl<S: UrlStore> ShortenerService<S> {
    /// Creates a service with the default validity window and generation limit.
    pub fn new(store: Arc<S>, audit: AuditLogger) -> Self {
        Self {
            store,
            audit,
            default_validity_minutes: DEFAULT_VALIDITY_MINUTES,
            max_generation_attempts: DEFAULT_GENERATION_ATTEMPTS,
        }
    }

    pub fn with_default_validity(mut self, minutes: u32) -> Self {
        self.default_validity_minutes = minutes;
        self
    }

    /// Sets the generation limit. Values below 1 are raised to 1.
    pub fn with_max_generation_attempts(mut self, attempts: usize) -> Self {
        self.max_generation_attempts = attempts.max(1);
        self
    }

    /// Draws random codes until one is unused.
    ///
    /// The returned code was free when checked; callers still claim it through
    /// [`UrlStore::insert_if_absent`].
    ///
    /// # Errors
    ///
    /// Returns [`ShortenerError::CapacityExhausted`] after the configured
    /// number of attempts, [`ShortenerError::Entropy`] if no randomness is
    /// available, and [`ShortenerError::Storage`] on store failures.
    pub async fn generate_unique_shortcode(&self) -> Result<String, ShortenerError> {
        for _ in 0..self.max_generation_attempts {
            let code = generate_code().map_err(|e| ShortenerError::Entropy(e.to_string()))?;

            if self.store.get(&code).await?.is_none() {
                return Ok(code);
            }
        }

        Err(ShortenerError::CapacityExhausted {
            attempts: self.max_generation_attempts,
        })
    }

    /// Creates a short URL.
    ///
    /// # Arguments
    ///
    /// - `url` - Destination; must parse as an absolute URL
    /// - `validity_minutes` - Lifetime of the link (default 30)
    /// - `custom_code` - Requested shortcode; an empty string counts as absent
    /// - `host` - Public origin prefixed to the code, e.g. `http://localhost:3000`
    ///
    /// # Errors
    ///
    /// - [`ShortenerError::InvalidUrl`] if `url` is malformed
    /// - [`ShortenerError::InvalidShortcode`] if `custom_code` is malformed
    /// - [`ShortenerError::ShortcodeCollision`] if `custom_code` is taken
    /// - [`ShortenerError::CapacityExhausted`], [`ShortenerError::Entropy`] or
    ///   [`ShortenerError::Storage`] on unexpected failures
    pub async fn create_short_url(
        &self,
        url: &str,
        validity_minutes: Option<u32>,
        custom_code: Option<&str>,
        host: &str,
    ) -> Result<CreatedShortUrl, ShortenerError> {
        if !is_valid_url(url) {
            self.audit.log(
                AuditLevel::Error,
                AuditPackage::Service,
                format!("Invalid URL format received: {}", url),
            );
            return Err(ShortenerError::InvalidUrl);
        }

        let validity = validity_minutes.unwrap_or(self.default_validity_minutes);
        let entry = ShortUrlEntry::new(url.to_string(), Utc::now(), validity);
        let expiry = entry.expires_at;

        let code = match custom_code.filter(|c| !c.is_empty()) {
            Some(custom) => self.claim_custom_code(custom, entry).await?,
            None => self
                .claim_generated_code(entry)
                .await
                .map_err(|e| self.unexpected("create_short_url", e))?,
        };

        self.audit.log(
            AuditLevel::Info,
            AuditPackage::Service,
            format!("Short URL created: {} for {}", code, url),
        );

        Ok(CreatedShortUrl {
            short_link: format!("{}/{}", host.trim_end_matches('/'), code),
            code,
            expiry,
        })
    }

    /// Resolves a shortcode and records the click.
    ///
    /// Expired entries are reported but kept; no click is recorded for them.
    ///
    /// # Errors
    ///
    /// Returns [`ShortenerError::Storage`] only on store failure. Missing and
    /// expired codes are reported through [`RedirectOutcome`].
    pub async fn handle_redirect(
        &self,
        code: &str,
        referrer: Option<&str>,
        ip: Option<&str>,
    ) -> Result<RedirectOutcome, ShortenerError> {
        let entry = self
            .store
            .get(code)
            .await
            .map_err(|e| self.unexpected("handle_redirect", e.into()))?;

        let Some(entry) = entry else {
            self.audit.log(
                AuditLevel::Warn,
                AuditPackage::Service,
                format!("Redirect requested for non-existent shortcode: {}", code),
            );
            return Ok(RedirectOutcome::NotFound);
        };

        let now = Utc::now();
        if entry.is_expired_at(now) {
            self.audit.log(
                AuditLevel::Info,
                AuditPackage::Service,
                format!("Redirect requested for expired shortcode: {}", code),
            );
            return Ok(RedirectOutcome::Expired);
        }

        let click = ClickRecord::new(now, referrer, ip);
        let recorded = self
            .store
            .append_click(code, click)
            .await
            .map_err(|e| self.unexpected("handle_redirect", e.into()))?;

        if !recorded {
            self.audit.log(
                AuditLevel::Warn,
                AuditPackage::Service,
                format!("Redirect requested for non-existent shortcode: {}", code),
            );
            return Ok(RedirectOutcome::NotFound);
        }

        self.audit.log(
            AuditLevel::Info,
            AuditPackage::Service,
            format!("Redirecting shortcode {} to original URL", code),
        );

        Ok(RedirectOutcome::Redirect(entry.original_url))
    }

    /// Returns statistics for a shortcode, or `None` if it does not exist.
    ///
    /// Expired entries still report their statistics.
    ///
    /// # Errors
    ///
    /// Returns [`ShortenerError::Storage`] only on store failure.
    pub async fn get_short_url_stats(
        &self,
        code: &str,
    ) -> Result<Option<ShortUrlStats>, ShortenerError> {
        let entry = self
            .store
            .get(code)
            .await
            .map_err(|e| self.unexpected("get_short_url_stats", e.into()))?;

        match entry {
            Some(entry) => {
                self.audit.log(
                    AuditLevel::Info,
                    AuditPackage::Service,
                    format!("Stats retrieved for shortcode: {}", code),
                );
                Ok(Some(entry.into()))
            }
            None => {
                self.audit.log(
                    AuditLevel::Warn,
                    AuditPackage::Service,
                    format!("Stats requested for non-existent shortcode: {}", code),
                );
                Ok(None)
            }
        }
    }

    /// Number of stored entries, for health reporting.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if the store cannot be read.
    pub async fn stored_count(&self) -> Result<usize, StoreError> {
        self.store.count().await
    }

    async fn claim_custom_code(
        &self,
        custom: &str,
        entry: ShortUrlEntry,
    ) -> Result<String, ShortenerError> {
        if !is_valid_shortcode(custom) {
            self.audit.log(
                AuditLevel::Error,
                AuditPackage::Service,
                format!("Invalid shortcode format: {}", custom),
            );
            return Err(ShortenerError::InvalidShortcode);
        }

        let inserted = self
            .store
            .insert_if_absent(custom, entry)
            .await
            .map_err(|e| self.unexpected("create_short_url", e.into()))?;

        if !inserted {
            self.audit.log(
                AuditLevel::Warn,
                AuditPackage::Service,
                format!("Shortcode collision attempted: {}", custom),
            );
            return Err(ShortenerError::ShortcodeCollision);
        }

        Ok(custom.to_string())
    }

    /// Claims a generated code, regenerating if another request took it first.
    async fn claim_generated_code(&self, entry: ShortUrlEntry) -> Result<String, ShortenerError> {
        for _ in 0..self.max_generation_attempts {
            let code = self.generate_unique_shortcode().await?;

            if self.store.insert_if_absent(&code, entry.clone()).await? {
                return Ok(code);
            }
        }

        Err(ShortenerError::CapacityExhausted {
            attempts: self.max_generation_attempts,
        })
    }

    fn unexpected(&self, operation: &str, error: ShortenerError) -> ShortenerError {
        self.audit.log(
            AuditLevel::Error,
            AuditPackage::Service,
            format!("Error in {}: {}", operation, error),
        );
        error
    }
}
