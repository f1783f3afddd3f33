//! Final-prompt derivation.
//!
//! A request either passes its prompt through verbatim or, when
//! `action == "generate_summary"`, gets a fixed-structure report prompt
//! synthesized from `program` and `institution`.

use chrono::{DateTime, Utc};

use crate::dtos::RelayRequest;
use crate::error::RelayError;

/// Action flag selecting the canned summary prompt.
pub const SUMMARY_ACTION: &str = "generate_summary";

const FALLBACK_PROGRAM: &str = "Current Program";
const FALLBACK_INSTITUTION: &str = "Current Institution";

/// The prompt sent upstream, tagged with which path produced it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DerivedPrompt {
    Summary {
        text: String,
        program: Option<String>,
        institution: Option<String>,
    },
    Passthrough {
        text: String,
    },
}

impl DerivedPrompt {
    pub fn text(&self) -> &str {
        match self {
            DerivedPrompt::Summary { text, .. } => text,
            DerivedPrompt::Passthrough { text } => text,
        }
    }
}

/// Derive the final prompt from a validated request.
///
/// The summary action wins over a supplied prompt; an unrecognized action
/// value falls through to the prompt path rather than failing.
pub fn derive(request: &RelayRequest) -> Result<DerivedPrompt, RelayError> {
    if request.action.as_deref() == Some(SUMMARY_ACTION) {
        let text = summary_prompt(
            request.program.as_deref(),
            request.institution.as_deref(),
            Utc::now(),
        );
        return Ok(DerivedPrompt::Summary {
            text,
            program: request.program.clone(),
            institution: request.institution.clone(),
        });
    }

    match request.prompt.as_deref() {
        Some(prompt) if !prompt.is_empty() => Ok(DerivedPrompt::Passthrough {
            text: prompt.to_string(),
        }),
        _ => Err(RelayError::MissingInput),
    }
}

fn summary_prompt(program: Option<&str>, institution: Option<&str>, now: DateTime<Utc>) -> String {
    format!(
        "Generate a comprehensive AI summary for this program:\n\
         \n\
         Program: {}\n\
         Institution: {}\n\
         Context: Dashboard trigger at {}\n\
         \n\
         Please provide insights on:\n\
         1. Market demand and workforce trends\n\
         2. Earnings potential and career outcomes\n\
         3. Program viability and recommendations\n\
         4. Key strengths and potential concerns\n\
         \n\
         Format the response in a clear, professional manner suitable for \
         institutional decision-making.",
        program.unwrap_or(FALLBACK_PROGRAM),
        institution.unwrap_or(FALLBACK_INSTITUTION),
        now.format("%Y-%m-%d %H:%M:%S UTC"),
    )
}
