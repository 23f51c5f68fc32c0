//! Error types for drafting and export

use quill_llm::LlmError;
use thiserror::Error;

/// Errors that can occur while drafting or exporting
#[derive(Error, Debug)]
pub enum DrafterError {
    /// No key point has been approved yet
    #[error("No approved key points: approve at least one key point before drafting")]
    NoApprovedKeyPoints,

    /// The project has no draft to export
    #[error("Project has no draft to export")]
    NoDraft,

    /// Completion provider failure
    #[error(transparent)]
    Llm(#[from] LlmError),

    /// The completion call exceeded the drafting timeout
    #[error("Draft generation timed out after {0}s")]
    Timeout(u64),

    /// The caller cancelled before the completion arrived
    #[error("Draft generation cancelled")]
    Cancelled,

    /// I/O error while writing an export
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
