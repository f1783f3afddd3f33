//! The relay endpoint: validate, derive the prompt, call the provider,
//! wrap the result in the response envelope.

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::response::{IntoResponse, Response};
use axum::Json;
use validator::Validate;

use crate::dtos::{ContentResponse, RelayRequest, SummaryResponse};
use crate::error::RelayError;
use crate::services::prompt::{self, DerivedPrompt};
use crate::startup::AppState;

/// `POST /api/gemini`
///
/// Failures of every kind (bad body, validation, upstream) normalize into
/// the error envelope via `RelayError`; nothing escapes as a raw fault.
pub async fn relay(
    State(state): State<AppState>,
    body: Result<Json<RelayRequest>, JsonRejection>,
) -> Result<Response, RelayError> {
    let Json(request) = body.map_err(|rejection| RelayError::InvalidBody(rejection.body_text()))?;
    request.validate()?;

    let derived = prompt::derive(&request)?;

    match &derived {
        DerivedPrompt::Summary {
            program,
            institution,
            ..
        } => {
            tracing::info!(
                program = ?program,
                institution = ?institution,
                context = ?request.context,
                "Summary generation triggered"
            );
        }
        DerivedPrompt::Passthrough { text } => {
            tracing::info!(prompt_len = text.len(), "Received prompt");
        }
    }

    let text = state.provider.generate(derived.text()).await?;
    tracing::info!(response_len = text.len(), "Generation completed");

    let response = match derived {
        DerivedPrompt::Summary {
            program,
            institution,
            ..
        } => Json(SummaryResponse::new(text, program, institution)).into_response(),
        DerivedPrompt::Passthrough { .. } => {
            Json(ContentResponse::new(text, state.provider.model())).into_response()
        }
    };

    Ok(response)
}

/// Method-router fallback for `/api/gemini`; preflight never reaches this
/// because the CORS layer answers `OPTIONS` first.
pub async fn method_not_allowed() -> RelayError {
    RelayError::MethodNotAllowed
}
