//! Wire shapes for the relay endpoint.

use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Inbound relay request.
///
/// Exactly one of `prompt` / `action == "generate_summary"` drives the
/// request; the action takes precedence when both are present. `program`,
/// `institution` and `context` only matter on the summary path.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct RelayRequest {
    #[validate(length(max = 100_000, message = "prompt exceeds maximum length"))]
    pub prompt: Option<String>,
    pub action: Option<String>,
    pub program: Option<String>,
    pub institution: Option<String>,
    #[serde(default)]
    pub context: Option<serde_json::Value>,
}

/// Success envelope for the plain-prompt path.
#[derive(Debug, Serialize)]
pub struct ContentResponse {
    pub success: bool,
    pub content: String,
    pub model: String,
    pub timestamp: String,
}

impl ContentResponse {
    pub fn new(content: String, model: &str) -> Self {
        Self {
            success: true,
            content,
            model: model.to_string(),
            timestamp: rfc3339_now(),
        }
    }
}

/// Success envelope for the summary path, marked with `type` so callers can
/// tell it apart from a plain-prompt response.
#[derive(Debug, Serialize)]
pub struct SummaryResponse {
    pub success: bool,
    pub message: String,
    pub summary: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub program: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub institution: Option<String>,
    pub timestamp: String,
    #[serde(rename = "type")]
    pub response_type: String,
}

impl SummaryResponse {
    pub fn new(summary: String, program: Option<String>, institution: Option<String>) -> Self {
        Self {
            success: true,
            message: "AI Summary generated successfully".to_string(),
            summary,
            program,
            institution,
            timestamp: rfc3339_now(),
            response_type: "trigger_response".to_string(),
        }
    }
}

/// Response-time timestamp, millisecond precision with a `Z` suffix.
pub fn rfc3339_now() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn content_response_serializes_expected_fields() {
        let body = serde_json::to_value(ContentResponse::new(
            "generated".to_string(),
            "gemini-2.0-flash-exp",
        ))
        .unwrap();

        assert_eq!(body["success"], true);
        assert_eq!(body["content"], "generated");
        assert_eq!(body["model"], "gemini-2.0-flash-exp");
        assert!(body["timestamp"].is_string());
    }

    #[test]
    fn summary_response_carries_type_marker_and_echoes_fields() {
        let body = serde_json::to_value(SummaryResponse::new(
            "summary text".to_string(),
            Some("Nursing".to_string()),
            Some("State College".to_string()),
        ))
        .unwrap();

        assert_eq!(body["type"], "trigger_response");
        assert_eq!(body["summary"], "summary text");
        assert_eq!(body["program"], "Nursing");
        assert_eq!(body["institution"], "State College");
    }

    #[test]
    fn summary_response_omits_absent_echo_fields() {
        let body = serde_json::to_value(SummaryResponse::new("s".to_string(), None, None)).unwrap();

        assert!(body.get("program").is_none());
        assert!(body.get("institution").is_none());
    }

    #[test]
    fn timestamp_is_rfc3339() {
        let ts = rfc3339_now();
        assert!(chrono::DateTime::parse_from_rfc3339(&ts).is_ok());
        assert!(ts.ends_with('Z'));
    }
}
