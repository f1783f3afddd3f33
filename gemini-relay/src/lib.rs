//! Prompt relay service for the Gemini API.
//!
//! Accepts a JSON POST, derives the final prompt (verbatim passthrough or a
//! canned program-summary template), forwards it to the configured text
//! provider, and returns a normalized JSON envelope for both success and
//! failure.

pub mod config;
pub mod dtos;
pub mod error;
pub mod handlers;
pub mod services;
pub mod startup;

use axum::http::header;
use axum::middleware::from_fn;
use axum::routing::{get, post};
use axum::Router;
use service_core::middleware::tracing::request_id_middleware;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::config::CorsPolicy;
use crate::startup::AppState;

/// Assemble the service router.
///
/// Every response carries the permissive CORS headers; `OPTIONS` preflight
/// is answered by the CORS layer before routing, and unsupported methods on
/// the relay route fall back to a 405 envelope.
pub fn build_router(state: AppState, cors_policy: CorsPolicy) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(cors_policy.allowed_methods())
        .allow_headers([header::CONTENT_TYPE]);

    Router::new()
        .route(
            "/api/gemini",
            post(handlers::relay::relay).fallback(handlers::relay::method_not_allowed),
        )
        .route("/health", get(handlers::health::health_check))
        .layer(
            TraceLayer::new_for_http().make_span_with(|request: &axum::http::Request<_>| {
                let request_id = request
                    .headers()
                    .get("x-request-id")
                    .and_then(|value| value.to_str().ok())
                    .unwrap_or("-");

                tracing::info_span!(
                    "http_request",
                    request_id = %request_id,
                    method = %request.method(),
                    uri = %request.uri(),
                )
            }),
        )
        .layer(from_fn(request_id_middleware))
        .layer(cors)
        .with_state(state)
}
