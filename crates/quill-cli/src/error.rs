//! Error types for the CLI application.

use quill_drafter::DrafterError;
use quill_extractor::{ErrorKind, ExtractorError};
use quill_llm::LlmError;
use thiserror::Error;

/// Result type alias for CLI operations.
pub type Result<T> = std::result::Result<T, CliError>;

/// CLI-specific errors.
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Extraction failure
    #[error(transparent)]
    Extractor(#[from] ExtractorError),

    /// Drafting or export failure
    #[error(transparent)]
    Drafter(#[from] DrafterError),

    /// Provider construction failure
    #[error(transparent)]
    Llm(#[from] LlmError),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// TOML parsing error
    #[error("TOML parsing error: {0}")]
    Toml(#[from] toml::de::Error),

    /// Invalid input
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Operation not permitted
    #[error("Operation not permitted: {0}")]
    NotPermitted(String),
}

impl CliError {
    /// Process exit code: 2 for bad input, 3 when the provider is
    /// unavailable, 1 otherwise
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::InvalidInput(_) => 2,
            CliError::Extractor(e) => kind_exit_code(e.kind()),
            CliError::Llm(e) => kind_exit_code(ExtractorError::from(e.clone()).kind()),
            CliError::Drafter(e) => match e {
                DrafterError::NoApprovedKeyPoints | DrafterError::NoDraft => 2,
                DrafterError::Llm(e) => kind_exit_code(ExtractorError::from(e.clone()).kind()),
                DrafterError::Timeout(_) => 3,
                _ => 1,
            },
            _ => 1,
        }
    }
}

fn kind_exit_code(kind: ErrorKind) -> i32 {
    match kind {
        ErrorKind::BadInput => 2,
        ErrorKind::UpstreamUnavailable => 3,
        ErrorKind::Internal => 1,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_codes() {
        let input: CliError = ExtractorError::Input("no content".into()).into();
        assert_eq!(input.exit_code(), 2);

        let upstream: CliError = ExtractorError::Upstream {
            status: 502,
            body: "bad gateway".into(),
        }
        .into();
        assert_eq!(upstream.exit_code(), 3);

        let cancelled: CliError = ExtractorError::Cancelled.into();
        assert_eq!(cancelled.exit_code(), 1);

        let no_points: CliError = DrafterError::NoApprovedKeyPoints.into();
        assert_eq!(no_points.exit_code(), 2);

        let credential: CliError =
            DrafterError::Llm(LlmError::Configuration("missing key".into())).into();
        assert_eq!(credential.exit_code(), 3);

        assert_eq!(CliError::Config("bad".into()).exit_code(), 1);
    }

    #[test]
    fn test_messages_are_verbatim() {
        let err: CliError = ExtractorError::Input("no content provided".into()).into();
        assert_eq!(err.to_string(), "Input error: no content provided");
    }
}
