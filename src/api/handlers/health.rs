//! Handler for health check endpoint.

use axum::{Json, extract::State, http::StatusCode};

use crate::api::dto::health::{CheckStatus, HealthChecks, HealthResponse};
use crate::state::AppState;

/// Returns service health status with component checks.
///
/// # Endpoint
///
/// `GET /-/health`
///
/// # Response Codes
///
/// - **200 OK**: All components healthy
/// - **503 Service Unavailable**: The store is unreadable or the audit queue is closed
///
/// # Response
///
/// ```json
/// {
///   "status": "healthy",
///   "version": "0.1.0",
///   "checks": {
///     "store": { "status": "ok", "message": "12 entries" },
///     "audit_queue": { "status": "ok", "message": "Free slots: 1024" },
///     "audit_delivery": { "delivered": 40, "failed": 0, "dropped": 0 }
///   }
/// }
/// ```
///
/// Audit delivery failures are reported but never degrade the status.
pub async fn health_handler(
    State(state): State<AppState>,
) -> Result<Json<HealthResponse>, (StatusCode, Json<HealthResponse>)> {
    let store_check = check_store(&state).await;

    let queue_check = check_audit_queue(&state);

    let all_healthy = store_check.is_ok() && queue_check.is_ok();

    let response = HealthResponse {
        status: if all_healthy { "healthy" } else { "degraded" }.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        checks: HealthChecks {
            store: store_check,
            audit_queue: queue_check,
            audit_delivery: state.audit_logger.snapshot(),
        },
    };

    if all_healthy {
        Ok(Json(response))
    } else {
        Err((StatusCode::SERVICE_UNAVAILABLE, Json(response)))
    }
}

async fn check_store(state: &AppState) -> CheckStatus {
    match state.shortener_service.stored_count().await {
        Ok(count) => CheckStatus::ok(format!("{} entries", count)),
        Err(e) => CheckStatus::error(format!("Store error: {}", e)),
    }
}

/// Checks if the audit queue is still drained by its worker.
fn check_audit_queue(state: &AppState) -> CheckStatus {
    if state.audit_logger.is_closed() {
        CheckStatus::error("Audit queue is closed")
    } else {
        CheckStatus::ok(format!("Free slots: {}", state.audit_logger.capacity()))
    }
}
