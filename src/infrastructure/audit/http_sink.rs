//! HTTP audit sink posting events to the external logging API.

use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;
use std::time::Duration;

use super::sink::{AuditResult, AuditSink};
use crate::domain::audit_event::AuditEvent;

/// Posts each event as JSON to a collector endpoint.
///
/// Requests carry `Authorization: Bearer <token>` when a token is configured.
/// A response counts as delivered only if the status is 2xx and the body
/// parses as JSON.
pub struct HttpAuditSink {
    client: Client,
    endpoint: String,
    access_token: Option<String>,
}

impl HttpAuditSink {
    /// Builds a sink with its own HTTP client.
    ///
    /// `timeout` bounds each request end to end.
    ///
    /// # Errors
    ///
    /// Returns an error if the TLS backend cannot be initialized.
    pub fn new(
        endpoint: String,
        access_token: Option<String>,
        timeout: Duration,
    ) -> Result<Self, reqwest::Error> {
        let client = Client::builder()
            .user_agent(concat!("shorturls/", env!("CARGO_PKG_VERSION")))
            .timeout(timeout)
            .build()?;

        Ok(Self {
            client,
            endpoint,
            access_token,
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl AuditSink for HttpAuditSink {
    async fn deliver(&self, event: &AuditEvent) -> AuditResult<Value> {
        let mut request = self.client.post(&self.endpoint).json(event);

        if let Some(token) = &self.access_token {
            request = request.bearer_auth(token);
        }

        let body = request
            .send()
            .await?
            .error_for_status()?
            .json::<Value>()
            .await?;

        Ok(body)
    }

    fn is_enabled(&self) -> bool {
        true
    }
}
