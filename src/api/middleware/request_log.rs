//! Append-only JSON-lines request log.
//!
//! Each completed request produces one line:
//!
//! ```text
//! {"method":"GET","url":"/abc123","statusCode":302,"timestamp":"2025-01-01T12:00:00.000Z","responseTime":"1ms"}
//! ```
//!
//! The file is written, never read back. Write failures are reported through
//! `tracing` and do not affect the response.

use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};
use chrono::Utc;
use serde::Serialize;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Instant;
use tokio::fs::{File, OpenOptions};
use tokio::io::AsyncWriteExt;
use tokio::sync::Mutex;
use tracing::warn;

use crate::api::dto::timestamp;

/// One line of the request log.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RequestLogLine {
    pub method: String,
    pub url: String,
    pub status_code: u16,
    pub timestamp: String,
    pub response_time: String,
}

/// Open request log file shared by all requests.
///
/// Lines are written under a lock so concurrent requests never interleave.
pub struct RequestLog {
    path: PathBuf,
    file: Mutex<File>,
}

impl RequestLog {
    /// Opens `path` for appending, creating it if needed.
    ///
    /// # Errors
    ///
    /// Returns the I/O error if the file cannot be opened.
    pub async fn open(path: impl AsRef<Path>) -> std::io::Result<Self> {
        let path = path.as_ref().to_path_buf();
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
            .await?;

        Ok(Self {
            path,
            file: Mutex::new(file),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Appends one serialized line.
    ///
    /// # Errors
    ///
    /// Returns the I/O error if the write fails.
    pub async fn append(&self, line: &RequestLogLine) -> std::io::Result<()> {
        let mut bytes = serde_json::to_vec(line)?;
        bytes.push(b'\n');

        let mut file = self.file.lock().await;
        file.write_all(&bytes).await?;
        file.flush().await
    }
}

/// Middleware recording every completed request in the [`RequestLog`].
///
/// # Integration
///
/// ```rust,ignore
/// let log = Arc::new(RequestLog::open("logs.txt").await?);
/// let app = router.layer(middleware::from_fn_with_state(log, request_log::layer));
/// ```
pub async fn layer(State(log): State<Arc<RequestLog>>, req: Request, next: Next) -> Response {
    let start = Instant::now();

    let method = req.method().to_string();
    let url = req
        .uri()
        .path_and_query()
        .map(|pq| pq.as_str().to_string())
        .unwrap_or_else(|| req.uri().path().to_string());

    let response = next.run(req).await;

    let line = RequestLogLine {
        method,
        url,
        status_code: response.status().as_u16(),
        timestamp: timestamp::format(&Utc::now()),
        response_time: format!("{}ms", start.elapsed().as_millis()),
    };

    if let Err(e) = log.append(&line).await {
        warn!(path = %log.path().display(), "Failed to write request log: {}", e);
    }

    response
}
