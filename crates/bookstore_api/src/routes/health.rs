use axum::response::IntoResponse;
use axum::Json;
use serde_json::json;

/// `GET /health`
pub(super) async fn health() -> impl IntoResponse {
    Json(json!({ "ok": true, "version": bookstore_core::core_version() }))
}
