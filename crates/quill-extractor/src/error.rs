//! Error types for the Extractor

use quill_llm::LlmError;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors that can occur during extraction
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ExtractorError {
    /// Nothing to extract from, or input over the size limit
    #[error("Input error: {0}")]
    Input(String),

    /// Credential missing or provider misconfigured
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// The completion service answered with a non-success status
    #[error("Upstream error: HTTP {status}: {body}")]
    Upstream {
        /// HTTP status code
        status: u16,
        /// Response body
        body: String,
    },

    /// Network failure reaching the completion service
    #[error("Transport error: {0}")]
    Transport(String),

    /// The caller cancelled the run while waiting on the completion call
    #[error("Extraction cancelled")]
    Cancelled,

    /// The completion call exceeded the extraction timeout
    #[error("Extraction timed out after {0}s")]
    Timeout(u64),

    /// Invalid extractor configuration
    #[error("Invalid extractor configuration: {0}")]
    Config(String),
}

/// Coarse failure class reported to callers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    /// The caller supplied no usable content
    BadInput,
    /// Credential missing, or the completion service failed or was unreachable
    UpstreamUnavailable,
    /// Anything else
    Internal,
}

impl ErrorKind {
    /// HTTP-style status code for this class
    pub fn status_code(&self) -> u16 {
        match self {
            ErrorKind::BadInput => 400,
            ErrorKind::UpstreamUnavailable => 503,
            ErrorKind::Internal => 500,
        }
    }
}

impl ExtractorError {
    /// Failure class of this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            ExtractorError::Input(_) => ErrorKind::BadInput,
            ExtractorError::Configuration(_)
            | ExtractorError::Upstream { .. }
            | ExtractorError::Transport(_)
            | ExtractorError::Timeout(_) => ErrorKind::UpstreamUnavailable,
            ExtractorError::Cancelled | ExtractorError::Config(_) => ErrorKind::Internal,
        }
    }
}

impl From<LlmError> for ExtractorError {
    fn from(e: LlmError) -> Self {
        match e {
            LlmError::Configuration(msg) => ExtractorError::Configuration(msg),
            LlmError::Upstream { status, body } => ExtractorError::Upstream { status, body },
            LlmError::Transport(msg) => ExtractorError::Transport(msg),
        }
    }
}

/// Failure body returned to callers
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Human-readable message
    pub error: String,
}

impl From<&ExtractorError> for ErrorResponse {
    fn from(e: &ExtractorError) -> Self {
        Self {
            error: e.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_llm_errors_convert_verbatim() {
        let e: ExtractorError = LlmError::Configuration("OpenAI API key not configured".into()).into();
        assert_eq!(e, ExtractorError::Configuration("OpenAI API key not configured".into()));

        let e: ExtractorError = LlmError::Upstream { status: 500, body: "boom".into() }.into();
        assert_eq!(e, ExtractorError::Upstream { status: 500, body: "boom".into() });

        let e: ExtractorError = LlmError::Transport("reset".into()).into();
        assert_eq!(e, ExtractorError::Transport("reset".into()));
    }

    #[test]
    fn test_error_kinds() {
        assert_eq!(ExtractorError::Input("none".into()).kind(), ErrorKind::BadInput);
        assert_eq!(ExtractorError::Configuration("no key".into()).kind(), ErrorKind::UpstreamUnavailable);
        assert_eq!(ExtractorError::Transport("x".into()).kind(), ErrorKind::UpstreamUnavailable);
        assert_eq!(ExtractorError::Timeout(60).kind(), ErrorKind::UpstreamUnavailable);
        assert_eq!(ExtractorError::Cancelled.kind(), ErrorKind::Internal);
        assert_eq!(ErrorKind::BadInput.status_code(), 400);
        assert_eq!(ErrorKind::UpstreamUnavailable.status_code(), 503);
    }

    #[test]
    fn test_error_response_body() {
        let error = ExtractorError::Input("no content provided".into());
        let body = serde_json::to_string(&ErrorResponse::from(&error)).unwrap();
        assert_eq!(body, r#"{"error":"Input error: no content provided"}"#);
    }
}
