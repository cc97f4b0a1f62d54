//! Diagnostic endpoint.

use axum::Json;
use serde_json::json;

/// `GET /test` — fixed liveness acknowledgment, no input.
pub async fn handler() -> Json<serde_json::Value> {
  Json(json!({ "message": "Server is running!" }))
}
