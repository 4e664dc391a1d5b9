use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::IntoResponse,
};
use serde_json::json;

use crate::routes::AppState;

/// GET /health - Liveness probe
pub async fn health() -> impl IntoResponse {
    (StatusCode::OK, Json(json!({"status": "ok"})))
}

/// GET /ready - Readiness probe
/// Ready once an email provider is configured
pub async fn ready(State(app_state): State<AppState>) -> impl IntoResponse {
    if app_state.contact_command.is_configured() {
        return (StatusCode::OK, Json(json!({"status": "ready"})));
    }

    tracing::warn!("Readiness check failed: email provider not configured");
    (
        StatusCode::SERVICE_UNAVAILABLE,
        Json(json!({
            "status": "not_ready",
            "reason": "email_not_configured"
        })),
    )
}
