//! Quill LLM Provider Layer
//!
//! Pluggable completion backends for the editorial pipeline.
//!
//! # Architecture
//!
//! This crate provides implementations of the `CompletionProvider` trait from
//! `quill-domain`. The backend is chosen by deployment configuration; the
//! extraction pipeline only sees the trait.
//!
//! # Providers
//!
//! - `MockProvider`: Deterministic mock for testing
//! - `ChatCompletionProvider`: OpenAI-compatible chat-completion API
//!   (OpenAI, Perplexity)
//!
//! # Examples
//!
//! ```
//! use quill_llm::MockProvider;
//!
//! let provider = MockProvider::new("1. Hello from LLM!");
//! let rt = tokio::runtime::Runtime::new().unwrap();
//! let result = rt.block_on(provider.complete("test prompt")).unwrap();
//! assert_eq!(result, "1. Hello from LLM!");
//! ```

#![warn(missing_docs)]

pub mod chat;
pub mod config;

use quill_domain::traits::CompletionProvider;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use thiserror::Error;

pub use chat::ChatCompletionProvider;
pub use config::{LlmConfig, ProviderKind, SamplingExtras};

/// Errors that can occur during completion calls
#[derive(Error, Debug, Clone, PartialEq)]
pub enum LlmError {
    /// Missing credential or unusable provider settings
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// The service answered with a non-success status
    #[error("Upstream error: HTTP {status}: {body}")]
    Upstream {
        /// HTTP status code
        status: u16,
        /// Response body, for diagnostics
        body: String,
    },

    /// Network-level failure or timeout reaching the service
    #[error("Transport error: {0}")]
    Transport(String),
}

impl LlmError {
    /// Whether a retry could plausibly succeed
    ///
    /// Transport failures, rate limiting and server errors are retryable;
    /// configuration problems and client errors are not.
    pub fn is_retryable(&self) -> bool {
        match self {
            LlmError::Configuration(_) => false,
            LlmError::Upstream { status, .. } => *status == 429 || *status >= 500,
            LlmError::Transport(_) => true,
        }
    }
}

/// Mock completion provider for deterministic testing
///
/// This provider returns pre-configured responses without making any network calls.
///
/// # Examples
///
/// ```
/// use quill_llm::MockProvider;
///
/// let rt = tokio::runtime::Runtime::new().unwrap();
///
/// // Simple fixed response
/// let provider = MockProvider::new("Fixed response");
/// assert_eq!(rt.block_on(provider.complete("any prompt")).unwrap(), "Fixed response");
///
/// // Multiple responses
/// let mut provider = MockProvider::default();
/// provider.add_response("prompt1", "response1");
/// provider.add_response("prompt2", "response2");
/// assert_eq!(rt.block_on(provider.complete("prompt1")).unwrap(), "response1");
/// assert_eq!(rt.block_on(provider.complete("prompt2")).unwrap(), "response2");
/// ```
#[derive(Debug, Clone)]
pub struct MockProvider {
    default_response: String,
    responses: Arc<Mutex<HashMap<String, String>>>,
    failure: Option<LlmError>,
    delay: Option<Duration>,
    call_count: Arc<Mutex<usize>>,
    last_prompt: Arc<Mutex<Option<String>>>,
}

impl MockProvider {
    /// Create a new MockProvider with a fixed response for all prompts
    pub fn new(response: impl Into<String>) -> Self {
        Self {
            default_response: response.into(),
            responses: Arc::new(Mutex::new(HashMap::new())),
            failure: None,
            delay: None,
            call_count: Arc::new(Mutex::new(0)),
            last_prompt: Arc::new(Mutex::new(None)),
        }
    }

    /// Create a MockProvider that fails every call with `error`
    pub fn failing(error: LlmError) -> Self {
        Self {
            failure: Some(error),
            ..Self::default()
        }
    }

    /// Wait for `delay` before answering
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    /// Add a specific response for a given prompt
    pub fn add_response(&mut self, prompt: impl Into<String>, response: impl Into<String>) {
        self.lock_responses().insert(prompt.into(), response.into());
    }

    /// Get the number of times complete was called
    pub fn call_count(&self) -> usize {
        *self.call_count.lock().unwrap_or_else(|e| e.into_inner())
    }

    /// Reset the call count
    pub fn reset_call_count(&self) {
        *self.call_count.lock().unwrap_or_else(|e| e.into_inner()) = 0;
    }

    /// The most recent prompt received
    pub fn last_prompt(&self) -> Option<String> {
        self.last_prompt
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .clone()
    }

    /// Answer a prompt
    pub async fn complete(&self, prompt: &str) -> Result<String, LlmError> {
        *self.call_count.lock().unwrap_or_else(|e| e.into_inner()) += 1;
        *self.last_prompt.lock().unwrap_or_else(|e| e.into_inner()) = Some(prompt.to_string());

        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }

        if let Some(error) = &self.failure {
            return Err(error.clone());
        }

        let response = self
            .lock_responses()
            .get(prompt)
            .cloned()
            .unwrap_or_else(|| self.default_response.clone());
        Ok(response)
    }

    fn lock_responses(&self) -> std::sync::MutexGuard<'_, HashMap<String, String>> {
        self.responses.lock().unwrap_or_else(|e| e.into_inner())
    }
}

impl Default for MockProvider {
    fn default() -> Self {
        Self::new("Default mock response")
    }
}

impl CompletionProvider for MockProvider {
    type Error = LlmError;

    async fn complete(&self, prompt: &str) -> Result<String, Self::Error> {
        MockProvider::complete(self, prompt).await
    }

    fn model_name(&self) -> &str {
        "mock"
    }
}
