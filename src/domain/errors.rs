//! Typed failures raised by the store and the shortener service.

/// Failure reported by a [`crate::domain::repositories::UrlStore`] backend.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Store unavailable: {0}")]
    Unavailable(String),
}

/// Failure raised while creating a short URL or resolving a shortcode.
///
/// "Not found" and "expired" are not errors; they are reported through
/// [`crate::application::services::RedirectOutcome`] and `Option`.
#[derive(Debug, thiserror::Error)]
pub enum ShortenerError {
    #[error("Invalid URL format")]
    InvalidUrl,

    #[error("Invalid shortcode format")]
    InvalidShortcode,

    #[error("Shortcode already exists")]
    ShortcodeCollision,

    #[error("Failed to generate a unique shortcode after {attempts} attempts")]
    CapacityExhausted { attempts: usize },

    #[error("Entropy source failure: {0}")]
    Entropy(String),

    #[error(transparent)]
    Storage(#[from] StoreError),
}

impl ShortenerError {
    /// Returns true for failures caused by client input rather than the service.
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            Self::InvalidUrl | Self::InvalidShortcode | Self::ShortcodeCollision
        )
    }
}
