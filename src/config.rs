//! Application configuration loaded from environment variables.
//!
//! Configuration is loaded once at startup and validated before the server starts.
//!
//! ## Variables
//!
//! - `PORT` - Listen port (default: `3000`)
//! - `HOST` - Bind address (default: `0.0.0.0`)
//! - `LOGGING_API_URL` - Audit collector endpoint (audit forwarding disabled if unset)
//! - `ACCESS_TOKEN` - Bearer token for the collector (required with `LOGGING_API_URL`)
//! - `RUST_LOG` - Log level (default: `info`)
//! - `LOG_FORMAT` - Log format: `text` or `json` (default: `text`)
//! - `DEFAULT_VALIDITY_MINUTES` - Link lifetime when none is given (default: 30)
//! - `CODE_GENERATION_ATTEMPTS` - Random code attempts before failing (default: 10)
//! - `AUDIT_QUEUE_CAPACITY` - Pending audit events buffer (default: 1024)
//! - `AUDIT_TIMEOUT_MS` - Per-event collector timeout (default: 3000)
//! - `REQUEST_LOG_PATH` - Request log file (default: `logs.txt`, empty disables)
//! - `BEHIND_PROXY` - Trust `X-Forwarded-For` / `X-Forwarded-Proto` (default: false)
//!
//! ```bash
//! export PORT=8080
//! export LOGGING_API_URL="http://collector.internal/evaluation-service/logs"
//! export ACCESS_TOKEN="eyJhbGciOi..."
//! ```

use anyhow::{Context, Result};
use std::env;
use std::str::FromStr;
use std::time::Duration;

/// Upper bound for `validity` and `DEFAULT_VALIDITY_MINUTES`: one year.
pub const MAX_VALIDITY_MINUTES: u32 = 525_600;

/// Service configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub logging_api_url: Option<String>,
    pub access_token: Option<String>,
    pub log_level: String,
    pub log_format: String,
    pub default_validity_minutes: u32,
    pub code_generation_attempts: usize,
    pub audit_queue_capacity: usize,
    pub audit_timeout_ms: u64,
    /// `None` disables the JSON-lines request log.
    pub request_log_path: Option<String>,
    /// When true, client IP and scheme are read from `X-Forwarded-*` headers.
    /// Enable only when the service is behind a trusted reverse proxy.
    pub behind_proxy: bool,
}

impl Config {
    /// Loads configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if a numeric variable cannot be parsed.
    pub fn from_env() -> Result<Self> {
        let host = env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
        let port = parse_var("PORT", 3000)?;

        let logging_api_url = non_empty_var("LOGGING_API_URL");
        let access_token = non_empty_var("ACCESS_TOKEN");

        let log_level = env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
        let log_format = env::var("LOG_FORMAT").unwrap_or_else(|_| "text".to_string());

        let default_validity_minutes = parse_var("DEFAULT_VALIDITY_MINUTES", 30)?;
        let code_generation_attempts = parse_var("CODE_GENERATION_ATTEMPTS", 10)?;
        let audit_queue_capacity = parse_var("AUDIT_QUEUE_CAPACITY", 1024)?;
        let audit_timeout_ms = parse_var("AUDIT_TIMEOUT_MS", 3000)?;

        let request_log_path = match env::var("REQUEST_LOG_PATH") {
            Ok(path) if path.trim().is_empty() => None,
            Ok(path) => Some(path),
            Err(_) => Some("logs.txt".to_string()),
        };

        let behind_proxy = env::var("BEHIND_PROXY")
            .map(|v| v.eq_ignore_ascii_case("true") || v == "1")
            .unwrap_or(false);

        Ok(Self {
            host,
            port,
            logging_api_url,
            access_token,
            log_level,
            log_format,
            default_validity_minutes,
            code_generation_attempts,
            audit_queue_capacity,
            audit_timeout_ms,
            request_log_path,
            behind_proxy,
        })
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `log_format` is not `text` or `json`
    /// - `LOGGING_API_URL` is not an absolute http(s) URL, or is set without `ACCESS_TOKEN`
    /// - a numeric setting is zero or out of range
    pub fn validate(&self) -> Result<()> {
        if self.log_format != "text" && self.log_format != "json" {
            anyhow::bail!(
                "LOG_FORMAT must be 'text' or 'json', got '{}'",
                self.log_format
            );
        }

        if let Some(ref url) = self.logging_api_url {
            if !url.starts_with("http://") && !url.starts_with("https://") {
                anyhow::bail!(
                    "LOGGING_API_URL must start with 'http://' or 'https://', got '{}'",
                    url
                );
            }

            if self.access_token.is_none() {
                anyhow::bail!("ACCESS_TOKEN must be set when LOGGING_API_URL is provided");
            }
        }

        if self.default_validity_minutes > MAX_VALIDITY_MINUTES {
            anyhow::bail!(
                "DEFAULT_VALIDITY_MINUTES must be at most {}, got {}",
                MAX_VALIDITY_MINUTES,
                self.default_validity_minutes
            );
        }

        if self.code_generation_attempts == 0 || self.code_generation_attempts > 1000 {
            anyhow::bail!(
                "CODE_GENERATION_ATTEMPTS must be between 1 and 1000, got {}",
                self.code_generation_attempts
            );
        }

        if self.audit_queue_capacity == 0 || self.audit_queue_capacity > 1_000_000 {
            anyhow::bail!(
                "AUDIT_QUEUE_CAPACITY must be between 1 and 1000000, got {}",
                self.audit_queue_capacity
            );
        }

        if self.audit_timeout_ms == 0 {
            anyhow::bail!("AUDIT_TIMEOUT_MS must be greater than 0");
        }

        Ok(())
    }

    /// Address the server binds to, `host:port`.
    pub fn listen_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    pub fn audit_timeout(&self) -> Duration {
        Duration::from_millis(self.audit_timeout_ms)
    }

    /// Prints configuration summary (without sensitive data).
    pub fn print_summary(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Listen address: {}", self.listen_addr());

        match (&self.logging_api_url, &self.access_token) {
            (Some(url), Some(token)) => {
                tracing::info!("  Audit collector: {} (token {})", url, mask_token(token))
            }
            (Some(url), None) => tracing::info!("  Audit collector: {} (no token)", url),
            _ => tracing::info!("  Audit collector: disabled"),
        }

        tracing::info!("  Log level: {}", self.log_level);
        tracing::info!("  Log format: {}", self.log_format);
        tracing::info!(
            "  Default validity: {} minutes",
            self.default_validity_minutes
        );
        tracing::info!("  Audit queue capacity: {}", self.audit_queue_capacity);
        tracing::info!("  Audit timeout: {}ms", self.audit_timeout_ms);

        match self.request_log_path {
            Some(ref path) => tracing::info!("  Request log: {}", path),
            None => tracing::info!("  Request log: disabled"),
        }

        tracing::info!("  Behind proxy: {}", self.behind_proxy);
    }
}

/// Reads an optional variable, treating an empty value as unset.
fn non_empty_var(key: &str) -> Option<String> {
    env::var(key).ok().filter(|v| !v.trim().is_empty())
}

/// Parses a variable, falling back to `default` when it is unset.
fn parse_var<T>(key: &str, default: T) -> Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse()
            .with_context(|| format!("{} has an invalid value: '{}'", key, raw)),
        Err(_) => Ok(default),
    }
}

/// Masks a bearer token for logging, keeping the first four characters.
///
/// - `eyJhbGciOiJIUzI1NiJ9` → `eyJh***`
/// - `abc` → `***`
fn mask_token(token: &str) -> String {
    match token.get(..4) {
        Some(prefix) if token.len() > 8 => format!("{}***", prefix),
        _ => "***".to_string(),
    }
}

/// Loads and validates configuration from environment variables.
///
/// # Errors
///
/// Returns an error if a variable is malformed or validation fails.
///
/// # Note
///
/// This function expects environment variables to be already loaded
/// (e.g., via `dotenvy::dotenv()` in `main.rs`).
pub fn load_from_env() -> Result<Config> {
    let config = Config::from_env()?;
    config.validate()?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    const VARS: [&str; 12] = [
        "HOST",
        "PORT",
        "LOGGING_API_URL",
        "ACCESS_TOKEN",
        "LOG_FORMAT",
        "DEFAULT_VALIDITY_MINUTES",
        "CODE_GENERATION_ATTEMPTS",
        "AUDIT_QUEUE_CAPACITY",
        "AUDIT_TIMEOUT_MS",
        "REQUEST_LOG_PATH",
        "BEHIND_PROXY",
        "RUST_LOG",
    ];

    fn clear_env() {
        // SAFETY: Tests are run serially due to #[serial], so no concurrent access
        unsafe {
            for var in VARS {
                env::remove_var(var);
            }
        }
    }

    fn base_config() -> Config {
        Config {
            host: "0.0.0.0".to_string(),
            port: 3000,
            logging_api_url: None,
            access_token: None,
            log_level: "info".to_string(),
            log_format: "text".to_string(),
            default_validity_minutes: 30,
            code_generation_attempts: 10,
            audit_queue_capacity: 1024,
            audit_timeout_ms: 3000,
            request_log_path: Some("logs.txt".to_string()),
            behind_proxy: false,
        }
    }

    #[test]
    fn test_mask_token() {
        assert_eq!(mask_token("eyJhbGciOiJIUzI1NiJ9"), "eyJh***");
        assert_eq!(mask_token("short"), "***");
        assert_eq!(mask_token(""), "***");
    }

    #[test]
    fn test_config_validation() {
        let mut config = base_config();
        assert!(config.validate().is_ok());

        config.log_format = "invalid".to_string();
        assert!(config.validate().is_err());
        config.log_format = "json".to_string();
        assert!(config.validate().is_ok());

        config.logging_api_url = Some("collector.local/logs".to_string());
        config.access_token = Some("token".to_string());
        assert!(config.validate().is_err());

        config.logging_api_url = Some("http://collector.local/logs".to_string());
        assert!(config.validate().is_ok());

        config.access_token = None;
        assert!(config.validate().is_err());
        config.logging_api_url = None;

        config.code_generation_attempts = 0;
        assert!(config.validate().is_err());
        config.code_generation_attempts = 10;

        config.audit_queue_capacity = 0;
        assert!(config.validate().is_err());
        config.audit_queue_capacity = 1024;

        config.audit_timeout_ms = 0;
        assert!(config.validate().is_err());
        config.audit_timeout_ms = 3000;

        config.default_validity_minutes = MAX_VALIDITY_MINUTES + 1;
        assert!(config.validate().is_err());
    }

    #[test]
    #[serial]
    fn test_defaults_when_env_empty() {
        clear_env();

        let config = Config::from_env().unwrap();

        assert_eq!(config.listen_addr(), "0.0.0.0:3000");
        assert!(config.logging_api_url.is_none());
        assert_eq!(config.default_validity_minutes, 30);
        assert_eq!(config.code_generation_attempts, 10);
        assert_eq!(config.audit_queue_capacity, 1024);
        assert_eq!(config.audit_timeout(), Duration::from_millis(3000));
        assert_eq!(config.request_log_path.as_deref(), Some("logs.txt"));
        assert!(!config.behind_proxy);
        assert!(config.validate().is_ok());
    }

    #[test]
    #[serial]
    fn test_from_env_overrides() {
        clear_env();
        // SAFETY: Tests are run serially due to #[serial], so no concurrent access
        unsafe {
            env::set_var("HOST", "127.0.0.1");
            env::set_var("PORT", "8080");
            env::set_var("LOGGING_API_URL", "http://collector.local/logs");
            env::set_var("ACCESS_TOKEN", "secret-token");
            env::set_var("REQUEST_LOG_PATH", "");
            env::set_var("BEHIND_PROXY", "TRUE");
            env::set_var("DEFAULT_VALIDITY_MINUTES", "5");
        }

        let config = load_from_env().unwrap();

        assert_eq!(config.listen_addr(), "127.0.0.1:8080");
        assert_eq!(
            config.logging_api_url.as_deref(),
            Some("http://collector.local/logs")
        );
        assert_eq!(config.access_token.as_deref(), Some("secret-token"));
        assert!(config.request_log_path.is_none());
        assert!(config.behind_proxy);
        assert_eq!(config.default_validity_minutes, 5);

        clear_env();
    }

    #[test]
    #[serial]
    fn test_invalid_number_is_error() {
        clear_env();
        // SAFETY: Tests are run serially due to #[serial], so no concurrent access
        unsafe {
            env::set_var("PORT", "not-a-port");
        }

        let err = Config::from_env().unwrap_err();
        assert!(err.to_string().contains("PORT"));

        clear_env();
    }

    #[test]
    #[serial]
    fn test_logging_url_without_token_fails_load() {
        clear_env();
        // SAFETY: Tests are run serially due to #[serial], so no concurrent access
        unsafe {
            env::set_var("LOGGING_API_URL", "http://collector.local/logs");
        }

        assert!(load_from_env().is_err());

        clear_env();
    }
}
