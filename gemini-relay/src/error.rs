use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

use crate::dtos::rfc3339_now;
use crate::services::providers::ProviderError;

/// Request-level failure taxonomy for the relay endpoint.
///
/// Every variant normalizes into the `{success: false, error, timestamp}`
/// envelope; callers can discriminate failure kinds by variant rather than
/// by matching message strings.
#[derive(Debug, Error)]
pub enum RelayError {
    #[error("Missing prompt or action in request body")]
    MissingInput,

    #[error("Invalid request body: {0}")]
    InvalidBody(String),

    #[error("Validation error: {0}")]
    Validation(#[from] validator::ValidationErrors),

    #[error("Method not allowed. Use POST.")]
    MethodNotAllowed,

    #[error(transparent)]
    Provider(#[from] ProviderError),

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl RelayError {
    fn status_code(&self) -> StatusCode {
        match self {
            RelayError::MissingInput | RelayError::InvalidBody(_) | RelayError::Validation(_) => {
                StatusCode::BAD_REQUEST
            }
            RelayError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            RelayError::Provider(_) | RelayError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

#[derive(Serialize)]
struct ErrorEnvelope {
    success: bool,
    error: String,
    timestamp: String,
}

impl IntoResponse for RelayError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        if status.is_server_error() {
            tracing::error!(error = %self, "Relay request failed");
        } else {
            tracing::warn!(error = %self, "Relay request rejected");
        }

        let body = ErrorEnvelope {
            success: false,
            error: self.to_string(),
            timestamp: rfc3339_now(),
        };

        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_codes_follow_taxonomy() {
        assert_eq!(RelayError::MissingInput.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(
            RelayError::MethodNotAllowed.status_code(),
            StatusCode::METHOD_NOT_ALLOWED
        );
        assert_eq!(
            RelayError::Provider(ProviderError::Status {
                status: 503,
                body: "quota".to_string()
            })
            .status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn upstream_status_error_text_includes_code() {
        let err = RelayError::Provider(ProviderError::Status {
            status: 429,
            body: "rate limited".to_string(),
        });
        let text = err.to_string();
        assert!(text.contains("429"));
        assert!(text.contains("rate limited"));
    }

    #[test]
    fn contract_error_message_is_distinct_from_transport_error() {
        let contract = RelayError::Provider(ProviderError::UnexpectedFormat(
            "no candidate text in response".to_string(),
        ))
        .to_string();
        let transport = RelayError::Provider(ProviderError::Status {
            status: 500,
            body: "boom".to_string(),
        })
        .to_string();

        assert!(contract.contains("Unexpected response format"));
        assert_ne!(contract, transport);
    }
}
