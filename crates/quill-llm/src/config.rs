//! Provider selection and request settings

use crate::LlmError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Duration;

/// Default sampling temperature, low to favour literal extraction
pub const DEFAULT_TEMPERATURE: f32 = 0.2;

/// Default completion length cap, enough for 5-10 short sentences
pub const DEFAULT_MAX_TOKENS: u32 = 1000;

/// Default timeout for a single HTTP request (30 seconds)
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Default number of attempts per completion (no retry)
pub const DEFAULT_MAX_ATTEMPTS: u32 = 1;

/// Chat-completion vendor behind the provider
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProviderKind {
    /// OpenAI chat completions
    #[default]
    OpenAi,
    /// Perplexity chat completions
    Perplexity,
}

/// Vendor-specific sampling parameters sent in addition to temperature
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SamplingExtras {
    /// Nucleus sampling mass
    pub top_p: f32,
    /// Penalty on repeated tokens
    pub frequency_penalty: f32,
    /// Penalty on tokens already present
    pub presence_penalty: f32,
}

impl ProviderKind {
    /// Human-readable vendor name
    pub fn display_name(&self) -> &'static str {
        match self {
            ProviderKind::OpenAi => "OpenAI",
            ProviderKind::Perplexity => "Perplexity",
        }
    }

    /// Chat-completion endpoint
    pub fn default_endpoint(&self) -> &'static str {
        match self {
            ProviderKind::OpenAi => "https://api.openai.com/v1/chat/completions",
            ProviderKind::Perplexity => "https://api.perplexity.ai/chat/completions",
        }
    }

    /// Model identifier
    pub fn default_model(&self) -> &'static str {
        match self {
            ProviderKind::OpenAi => "gpt-4o-mini",
            ProviderKind::Perplexity => "llama-3.1-sonar-small-128k-online",
        }
    }

    /// Environment variable conventionally holding the credential
    pub fn default_api_key_env(&self) -> &'static str {
        match self {
            ProviderKind::OpenAi => "OPENAI_API_KEY",
            ProviderKind::Perplexity => "PERPLEXITY_API_KEY",
        }
    }

    /// Extra sampling parameters this vendor is called with
    pub fn sampling_extras(&self) -> Option<SamplingExtras> {
        match self {
            ProviderKind::OpenAi => None,
            ProviderKind::Perplexity => Some(SamplingExtras {
                top_p: 0.9,
                frequency_penalty: 1.0,
                presence_penalty: 0.0,
            }),
        }
    }

    /// Parse a provider kind from a string
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "openai" => Some(ProviderKind::OpenAi),
            "perplexity" => Some(ProviderKind::Perplexity),
            _ => None,
        }
    }
}

impl fmt::Display for ProviderKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// Configuration for a chat-completion provider
///
/// The credential is never serialized; it is resolved by the deployment
/// (e.g. from an environment variable) and set on the config before the
/// provider is built.
#[derive(Clone, Serialize, Deserialize)]
pub struct LlmConfig {
    /// Vendor
    #[serde(default)]
    pub provider: ProviderKind,

    /// Endpoint override
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub endpoint: Option<String>,

    /// Model override
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,

    /// Sampling temperature
    #[serde(default = "default_temperature")]
    pub temperature: f32,

    /// Completion length cap in tokens
    #[serde(default = "default_max_tokens")]
    pub max_tokens: u32,

    /// Timeout for a single HTTP request (seconds)
    #[serde(default = "default_timeout_secs")]
    pub request_timeout_secs: u64,

    /// Attempts per completion; values above 1 enable retry
    #[serde(default = "default_max_attempts")]
    pub max_attempts: u32,

    /// Bearer credential
    #[serde(skip)]
    pub api_key: Option<String>,
}

impl LlmConfig {
    /// Configuration for a vendor with default settings
    pub fn for_provider(provider: ProviderKind) -> Self {
        Self {
            provider,
            ..Self::default()
        }
    }

    /// Set the credential
    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    /// Endpoint to call, honouring the override
    pub fn endpoint(&self) -> &str {
        self.endpoint
            .as_deref()
            .unwrap_or_else(|| self.provider.default_endpoint())
    }

    /// Model to request, honouring the override
    pub fn model(&self) -> &str {
        self.model
            .as_deref()
            .unwrap_or_else(|| self.provider.default_model())
    }

    /// Get the request timeout as a Duration
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), LlmError> {
        if !(0.0..=2.0).contains(&self.temperature) {
            return Err(LlmError::Configuration(format!(
                "temperature {} out of range [0.0, 2.0]",
                self.temperature
            )));
        }
        if self.max_tokens == 0 {
            return Err(LlmError::Configuration(
                "max_tokens must be greater than 0".to_string(),
            ));
        }
        if self.request_timeout_secs == 0 {
            return Err(LlmError::Configuration(
                "request_timeout_secs must be greater than 0".to_string(),
            ));
        }
        if self.max_attempts == 0 {
            return Err(LlmError::Configuration(
                "max_attempts must be greater than 0".to_string(),
            ));
        }
        Ok(())
    }

    /// Load configuration from TOML string
    pub fn from_toml(toml_str: &str) -> Result<Self, String> {
        toml::from_str(toml_str).map_err(|e| format!("Failed to parse TOML: {}", e))
    }

    /// Serialize configuration to TOML string
    pub fn to_toml(&self) -> Result<String, String> {
        toml::to_string_pretty(self).map_err(|e| format!("Failed to serialize to TOML: {}", e))
    }
}

impl Default for LlmConfig {
    fn default() -> Self {
        Self {
            provider: ProviderKind::OpenAi,
            endpoint: None,
            model: None,
            temperature: DEFAULT_TEMPERATURE,
            max_tokens: DEFAULT_MAX_TOKENS,
            request_timeout_secs: DEFAULT_TIMEOUT_SECS,
            max_attempts: DEFAULT_MAX_ATTEMPTS,
            api_key: None,
        }
    }
}

impl fmt::Debug for LlmConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LlmConfig")
            .field("provider", &self.provider)
            .field("endpoint", &self.endpoint())
            .field("model", &self.model())
            .field("temperature", &self.temperature)
            .field("max_tokens", &self.max_tokens)
            .field("request_timeout_secs", &self.request_timeout_secs)
            .field("max_attempts", &self.max_attempts)
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .finish()
    }
}

fn default_temperature() -> f32 {
    DEFAULT_TEMPERATURE
}

fn default_max_tokens() -> u32 {
    DEFAULT_MAX_TOKENS
}

fn default_timeout_secs() -> u64 {
    DEFAULT_TIMEOUT_SECS
}

fn default_max_attempts() -> u32 {
    DEFAULT_MAX_ATTEMPTS
}
