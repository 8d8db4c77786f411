//! Handler for health check endpoint.

use axum::{Json, extract::State, http::StatusCode};

use crate::api::dto::health::{CheckStatus, HealthChecks, HealthResponse};
use crate::state::AppState;

/// Returns service health status.
///
/// # Endpoint
///
/// `GET /health`
///
/// # Response Codes
///
/// - **200 OK**: Storage reachable
/// - **503 Service Unavailable**: Storage check failed
///
/// # Response
///
/// ```json
/// {
///   "status": "healthy",
///   "version": "0.1.0",
///   "checks": {
///     "storage": { "status": "ok", "message": "Connected, 42 records" }
///   }
/// }
/// ```
pub async fn health_handler(
    State(state): State<AppState>,
) -> Result<Json<HealthResponse>, (StatusCode, Json<HealthResponse>)> {
    let storage = check_storage(&state).await;
    let healthy = storage.is_ok();

    let response = HealthResponse {
        status: if healthy { "healthy" } else { "degraded" }.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        checks: HealthChecks { storage },
    };

    if healthy {
        Ok(Json(response))
    } else {
        Err((StatusCode::SERVICE_UNAVAILABLE, Json(response)))
    }
}

/// Pings the store and reports how many records it holds.
async fn check_storage(state: &AppState) -> CheckStatus {
    if let Err(e) = state.url_service.check_storage().await {
        return CheckStatus {
            status: "error".to_string(),
            message: Some(format!("Storage error: {}", e)),
        };
    }

    match state.url_service.count().await {
        Ok(count) => CheckStatus {
            status: "ok".to_string(),
            message: Some(format!("Connected, {} records", count)),
        },
        Err(e) => CheckStatus {
            status: "error".to_string(),
            message: Some(format!("Storage error: {}", e)),
        },
    }
}
