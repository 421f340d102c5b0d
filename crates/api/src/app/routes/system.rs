use axum::{response::IntoResponse, Json};
use serde_json::json;

/// GET /api/ping - liveness probe; deliberately unauthenticated.
pub async fn ping() -> impl IntoResponse {
    Json(json!({ "message": "pong" }))
}
