#![allow(dead_code)]

use axum::extract::ConnectInfo;
use shorturls::application::services::{AuditLogger, ShortenerService};
use shorturls::domain::audit_event::AuditEvent;
use shorturls::infrastructure::storage::MemoryUrlStore;
use shorturls::state::AppState;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::sync::mpsc;
use tower::Layer;

pub const TEST_HOST: &str = "localhost:3000";

pub fn create_test_state() -> (AppState, mpsc::Receiver<AuditEvent>) {
    create_test_state_with(false)
}

pub fn create_test_state_with(behind_proxy: bool) -> (AppState, mpsc::Receiver<AuditEvent>) {
    let (audit_logger, rx) = AuditLogger::channel(1024);
    let store = Arc::new(MemoryUrlStore::new());
    let shortener_service = Arc::new(ShortenerService::new(store, audit_logger.clone()));

    let state = AppState::new(shortener_service, audit_logger, behind_proxy);

    (state, rx)
}

/// Drains every audit event queued so far.
pub fn drain_audit(rx: &mut mpsc::Receiver<AuditEvent>) -> Vec<AuditEvent> {
    let mut events = Vec::new();
    while let Ok(event) = rx.try_recv() {
        events.push(event);
    }
    events
}

/// Inserts a fixed `ConnectInfo` so handlers see a peer address under the mock transport.
#[derive(Clone)]
pub struct MockConnectInfoLayer(pub SocketAddr);

impl Default for MockConnectInfoLayer {
    fn default() -> Self {
        Self("127.0.0.1:12345".parse().unwrap())
    }
}

impl<S> Layer<S> for MockConnectInfoLayer {
    type Service = MockConnectInfoService<S>;

    fn layer(&self, inner: S) -> Self::Service {
        MockConnectInfoService {
            inner,
            addr: self.0,
        }
    }
}

#[derive(Clone)]
pub struct MockConnectInfoService<S> {
    inner: S,
    addr: SocketAddr,
}

impl<S, B> tower::Service<axum::http::Request<B>> for MockConnectInfoService<S>
where
    S: tower::Service<axum::http::Request<B>> + Clone + Send + 'static,
    S::Future: Send + 'static,
    B: Send + 'static,
{
    type Response = S::Response;
    type Error = S::Error;
    type Future = S::Future;

    fn poll_ready(
        &mut self,
        cx: &mut std::task::Context<'_>,
    ) -> std::task::Poll<Result<(), Self::Error>> {
        self.inner.poll_ready(cx)
    }

    fn call(&mut self, mut req: axum::http::Request<B>) -> Self::Future {
        req.extensions_mut().insert(ConnectInfo(self.addr));
        self.inner.call(req)
    }
}
