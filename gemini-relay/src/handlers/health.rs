use axum::{http::StatusCode, response::IntoResponse, Json};
use serde_json::json;

/// Liveness probe. The upstream API is deliberately not called here.
pub async fn health_check() -> impl IntoResponse {
    (
        StatusCode::OK,
        Json(json!({
            "status": "ok",
            "service": "gemini-relay",
            "version": env!("CARGO_PKG_VERSION")
        })),
    )
}
