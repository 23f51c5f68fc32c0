//! Chat-completion provider
//!
//! Talks to any endpoint that accepts the common chat-completion request
//! shape (`model`, `messages`, `temperature`, `max_tokens`) and answers with
//! `choices[0].message.content`. OpenAI and Perplexity are both served by
//! this one implementation; [`ProviderKind`] only selects the endpoint,
//! model and vendor-specific sampling parameters.
//!
//! # Examples
//!
//! ```no_run
//! use quill_llm::{ChatCompletionProvider, LlmConfig, ProviderKind};
//!
//! # async fn example() -> Result<(), quill_llm::LlmError> {
//! let config = LlmConfig::for_provider(ProviderKind::OpenAi).with_api_key("sk-...");
//! let provider = ChatCompletionProvider::from_config(&config)?;
//! let text = provider.complete("Summarize this transcript").await?;
//! # Ok(())
//! # }
//! ```

use crate::config::{LlmConfig, ProviderKind};
use crate::LlmError;
use quill_domain::traits::CompletionProvider;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Duration;
use tracing::{debug, warn};

/// Chat-completion provider backed by a remote HTTP endpoint
pub struct ChatCompletionProvider {
    kind: ProviderKind,
    endpoint: String,
    model: String,
    api_key: Option<String>,
    temperature: f32,
    max_tokens: u32,
    max_attempts: u32,
    client: reqwest::Client,
}

/// Request body for the chat-completion API
#[derive(Debug, Serialize)]
pub(crate) struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    temperature: f32,
    max_tokens: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    top_p: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    frequency_penalty: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    presence_penalty: Option<f32>,
}

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'static str,
    content: &'a str,
}

/// Response from the chat-completion API
///
/// Every field is optional; a missing piece degrades to empty text.
#[derive(Deserialize)]
struct ChatResponse {
    #[serde(default)]
    choices: Vec<ChatChoice>,
}

#[derive(Deserialize)]
struct ChatChoice {
    #[serde(default)]
    message: Option<ChatChoiceMessage>,
}

#[derive(Deserialize)]
struct ChatChoiceMessage {
    #[serde(default)]
    content: Option<String>,
}

impl ChatCompletionProvider {
    /// Create a provider for a vendor with default settings
    ///
    /// # Errors
    ///
    /// Returns [`LlmError::Configuration`] if the HTTP client cannot be built.
    pub fn new(kind: ProviderKind, api_key: Option<String>) -> Result<Self, LlmError> {
        let mut config = LlmConfig::for_provider(kind);
        config.api_key = api_key;
        Self::from_config(&config)
    }

    /// Create a provider from configuration
    ///
    /// A missing credential is not an error here; it is reported by
    /// [`complete`](Self::complete) before any network traffic.
    pub fn from_config(config: &LlmConfig) -> Result<Self, LlmError> {
        config.validate()?;

        let client = reqwest::Client::builder()
            .timeout(config.request_timeout())
            .build()
            .map_err(|e| LlmError::Configuration(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            kind: config.provider,
            endpoint: config.endpoint().to_string(),
            model: config.model().to_string(),
            api_key: config.api_key.clone(),
            temperature: config.temperature,
            max_tokens: config.max_tokens,
            max_attempts: config.max_attempts,
            client,
        })
    }

    /// Override the endpoint
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    /// Set the maximum number of attempts (1 disables retry)
    pub fn with_max_attempts(mut self, max_attempts: u32) -> Self {
        self.max_attempts = max_attempts.max(1);
        self
    }

    /// Vendor behind this provider
    pub fn kind(&self) -> ProviderKind {
        self.kind
    }

    /// Endpoint this provider posts to
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Request a completion for `prompt`
    ///
    /// # Errors
    ///
    /// - [`LlmError::Configuration`] if no credential is set (no request is sent)
    /// - [`LlmError::Upstream`] for a non-success HTTP status
    /// - [`LlmError::Transport`] for network failures and timeouts
    ///
    /// A success response without completion text returns `""`.
    pub async fn complete(&self, prompt: &str) -> Result<String, LlmError> {
        let api_key = self
            .api_key
            .as_deref()
            .filter(|k| !k.trim().is_empty())
            .ok_or_else(|| {
                LlmError::Configuration(format!("{} API key not configured", self.kind))
            })?;

        let request_body = self.request_body(prompt);

        // Retry only applies when max_attempts > 1
        let mut attempts = 0;
        let mut last_error = None;

        while attempts < self.max_attempts {
            debug!(
                "Sending completion request to {} (model {}, attempt {})",
                self.kind,
                self.model,
                attempts + 1
            );

            match self
                .client
                .post(&self.endpoint)
                .bearer_auth(api_key)
                .json(&request_body)
                .send()
                .await
            {
                Ok(response) => {
                    let status = response.status();
                    if status.is_success() {
                        let body = response.text().await.map_err(|e| {
                            LlmError::Transport(format!("Failed to read response body: {}", e))
                        })?;
                        return Ok(extract_content(&body));
                    }

                    let error_text = response
                        .text()
                        .await
                        .unwrap_or_else(|_| "Unknown error".to_string());
                    warn!("{} API error: HTTP {}", self.kind, status.as_u16());
                    let error = LlmError::Upstream {
                        status: status.as_u16(),
                        body: error_text,
                    };
                    if !error.is_retryable() {
                        return Err(error);
                    }
                    last_error = Some(error);
                }
                Err(e) => {
                    let message = if e.is_timeout() {
                        format!("Request timed out: {}", e)
                    } else {
                        format!("Request failed: {}", e)
                    };
                    warn!("{} transport error: {}", self.kind, message);
                    last_error = Some(LlmError::Transport(message));
                }
            }

            attempts += 1;
            if attempts < self.max_attempts {
                // Exponential backoff: 1s, 2s, 4s, etc.
                let delay = Duration::from_secs(2u64.pow(attempts - 1));
                tokio::time::sleep(delay).await;
            }
        }

        Err(last_error
            .unwrap_or_else(|| LlmError::Transport("Max attempts exceeded".to_string())))
    }

    pub(crate) fn request_body<'a>(&'a self, prompt: &'a str) -> ChatRequest<'a> {
        let extras = self.kind.sampling_extras();
        ChatRequest {
            model: &self.model,
            messages: vec![ChatMessage {
                role: "user",
                content: prompt,
            }],
            temperature: self.temperature,
            max_tokens: self.max_tokens,
            top_p: extras.map(|e| e.top_p),
            frequency_penalty: extras.map(|e| e.frequency_penalty),
            presence_penalty: extras.map(|e| e.presence_penalty),
        }
    }
}

/// Pull the completion text out of a response body
///
/// Malformed JSON or a missing `choices[0].message.content` yields `""`.
pub(crate) fn extract_content(body: &str) -> String {
    match serde_json::from_str::<ChatResponse>(body) {
        Ok(response) => response
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message)
            .and_then(|message| message.content)
            .unwrap_or_default(),
        Err(e) => {
            warn!("Completion response was not valid JSON: {}", e);
            String::new()
        }
    }
}

impl CompletionProvider for ChatCompletionProvider {
    type Error = LlmError;

    async fn complete(&self, prompt: &str) -> Result<String, Self::Error> {
        ChatCompletionProvider::complete(self, prompt).await
    }

    fn model_name(&self) -> &str {
        &self.model
    }
}

impl fmt::Debug for ChatCompletionProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ChatCompletionProvider")
            .field("kind", &self.kind)
            .field("endpoint", &self.endpoint)
            .field("model", &self.model)
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field("temperature", &self.temperature)
            .field("max_tokens", &self.max_tokens)
            .field("max_attempts", &self.max_attempts)
            .finish()
    }
}
