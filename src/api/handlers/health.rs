//! Handler for health check endpoint.

use axum::{Json, extract::State, http::StatusCode};

use crate::api::dto::health::{CheckStatus, HealthChecks, HealthResponse};
use crate::state::AppState;

/// Returns service health status with component checks.
///
/// # Endpoint
///
/// `GET /health`
///
/// # Response Codes
///
/// - **200 OK**: All components healthy
/// - **503 Service Unavailable**: One or more components degraded
///
/// # Components Checked
///
/// 1. **Database**: Runs `SELECT 1`
/// 2. **Media**: Checks that the media root is a writable directory
///
/// # Response
///
/// ```json
/// {
///   "status": "healthy",
///   "version": "0.1.0",
///   "checks": {
///     "database": { "status": "ok", "message": "Connected" },
///     "media": { "status": "ok", "message": "Media root writable" }
///   }
/// }
/// ```
pub async fn health_handler(
    State(state): State<AppState>,
) -> Result<Json<HealthResponse>, (StatusCode, Json<HealthResponse>)> {
    let db_check = check_database(&state).await;

    let media_check = check_media(&state).await;

    let all_healthy = db_check.is_ok() && media_check.is_ok();

    let response = HealthResponse {
        status: if all_healthy { "healthy" } else { "degraded" }.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        checks: HealthChecks {
            database: db_check,
            media: media_check,
        },
    };

    if all_healthy {
        Ok(Json(response))
    } else {
        Err((StatusCode::SERVICE_UNAVAILABLE, Json(response)))
    }
}

async fn check_database(state: &AppState) -> CheckStatus {
    match sqlx::query("SELECT 1").execute(&state.db).await {
        Ok(_) => CheckStatus::ok("Connected"),
        Err(e) => {
            tracing::warn!(error = %e, "Health check: database unreachable");
            CheckStatus::error(format!("Database error: {}", e))
        }
    }
}

async fn check_media(state: &AppState) -> CheckStatus {
    if state.media.health_check().await {
        CheckStatus::ok("Media root writable")
    } else {
        CheckStatus::error("Media root is missing or not writable")
    }
}
