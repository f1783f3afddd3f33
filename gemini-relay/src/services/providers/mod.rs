//! Text-generation provider abstraction.
//!
//! The relay talks to exactly one upstream at a time through the
//! [`TextProvider`] trait, so tests can swap the real Gemini client for a
//! mock without touching the handler.

pub mod gemini;
pub mod mock;

use async_trait::async_trait;
use thiserror::Error;

/// Error type for provider operations.
#[derive(Error, Debug)]
pub enum ProviderError {
    /// The provider cannot run at all (e.g. no API key configured).
    /// Detected before any outbound call is attempted.
    #[error("Provider not configured: {0}")]
    NotConfigured(String),

    /// The upstream answered with a non-success HTTP status.
    #[error("Gemini API error {status}: {body}")]
    Status { status: u16, body: String },

    /// The upstream answered 2xx but the payload violated its own contract
    /// (missing or empty candidates). Distinct from a transport failure.
    #[error("Unexpected response format from Gemini API: {0}")]
    UnexpectedFormat(String),

    /// The outbound call itself failed (DNS, connect, timeout).
    #[error("Network error: {0}")]
    Network(String),
}

/// A single-shot text generation backend.
#[async_trait]
pub trait TextProvider: Send + Sync {
    /// Generate text for the given prompt.
    async fn generate(&self, prompt: &str) -> Result<String, ProviderError>;

    /// Identifier of the model answering requests.
    fn model(&self) -> &str;
}
