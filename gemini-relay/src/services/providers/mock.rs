//! Mock provider for tests.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;

use super::{ProviderError, TextProvider};

/// What the mock does when asked to generate.
#[derive(Debug, Clone)]
pub enum MockBehavior {
    /// Reply with fixed text.
    Reply(String),
    /// Fail as if the upstream returned this HTTP status.
    Status { status: u16, body: String },
    /// Fail as if the upstream returned 2xx without usable candidates.
    EmptyCandidates,
    /// Fail as if no API key were configured.
    NotConfigured,
}

/// Scriptable text provider that records the prompts it receives.
pub struct MockTextProvider {
    behavior: MockBehavior,
    model: String,
    calls: AtomicUsize,
    last_prompt: Mutex<Option<String>>,
}

impl MockTextProvider {
    pub fn new(behavior: MockBehavior) -> Self {
        Self {
            behavior,
            model: "mock-model".to_string(),
            calls: AtomicUsize::new(0),
            last_prompt: Mutex::new(None),
        }
    }

    pub fn replying(text: &str) -> Self {
        Self::new(MockBehavior::Reply(text.to_string()))
    }

    pub fn failing_with_status(status: u16, body: &str) -> Self {
        Self::new(MockBehavior::Status {
            status,
            body: body.to_string(),
        })
    }

    pub fn empty_candidates() -> Self {
        Self::new(MockBehavior::EmptyCandidates)
    }

    pub fn unconfigured() -> Self {
        Self::new(MockBehavior::NotConfigured)
    }

    /// Number of generate calls received.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    /// The most recent prompt received, if any.
    pub fn last_prompt(&self) -> Option<String> {
        self.last_prompt.lock().unwrap().clone()
    }
}

#[async_trait]
impl TextProvider for MockTextProvider {
    async fn generate(&self, prompt: &str) -> Result<String, ProviderError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        *self.last_prompt.lock().unwrap() = Some(prompt.to_string());

        match &self.behavior {
            MockBehavior::Reply(text) => Ok(text.clone()),
            MockBehavior::Status { status, body } => Err(ProviderError::Status {
                status: *status,
                body: body.clone(),
            }),
            MockBehavior::EmptyCandidates => Err(ProviderError::UnexpectedFormat(
                "no candidate text in response".to_string(),
            )),
            MockBehavior::NotConfigured => Err(ProviderError::NotConfigured(
                "GEMINI_API_KEY environment variable not set".to_string(),
            )),
        }
    }

    fn model(&self) -> &str {
        &self.model
    }
}
