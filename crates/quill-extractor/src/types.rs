//! Request and response types for extraction

use quill_domain::{Category, KeyPoint, Source};
use serde::{Deserialize, Serialize};

/// Request to extract key points from a transcript and its sources
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExtractionRequest {
    /// Interview transcript
    #[serde(default)]
    pub transcript: Option<String>,

    /// Supporting sources; only ready sources with content are used
    #[serde(default)]
    pub sources: Vec<Source>,
}

impl ExtractionRequest {
    /// Create a request
    pub fn new(transcript: Option<String>, sources: Vec<Source>) -> Self {
        Self { transcript, sources }
    }

    /// The transcript, if present and not blank
    pub fn transcript_text(&self) -> Option<&str> {
        self.transcript
            .as_deref()
            .filter(|t| !t.trim().is_empty())
    }

    /// Sources that take part in extraction
    pub fn usable_sources(&self) -> impl Iterator<Item = &Source> {
        self.sources.iter().filter(|s| s.is_usable())
    }

    /// Whether there is anything to extract from
    pub fn has_content(&self) -> bool {
        self.transcript_text().is_some() || self.usable_sources().next().is_some()
    }

    /// Characters of input that will be sent to the model
    pub fn input_chars(&self) -> usize {
        let transcript = self.transcript_text().map_or(0, |t| t.chars().count());
        let sources: usize = self
            .usable_sources()
            .filter_map(|s| s.usable_content())
            .map(|c| c.chars().count())
            .sum();
        transcript + sources
    }
}

/// A parsed line with its source tag and category resolved
///
/// This is a key point before the pipeline assigns an id, confidence and
/// approval state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassifiedPoint {
    /// Display text with every bracketed tag removed
    pub text: String,

    /// Lower-cased first tag, or "transcript"
    pub source_id: String,

    /// Keyword category
    pub category: Category,
}

/// Result of an extraction operation
#[derive(Debug, Clone)]
pub struct ExtractionResult {
    /// Key points in the order the model listed them
    pub key_points: Vec<KeyPoint>,

    /// Metadata about the extraction
    pub metadata: ExtractionMetadata,
}

/// Metadata about an extraction operation
#[derive(Debug, Clone)]
pub struct ExtractionMetadata {
    /// Model that answered
    pub model_name: String,

    /// Length of the prompt sent (characters)
    pub prompt_chars: usize,

    /// Length of the raw completion (characters)
    pub response_chars: usize,

    /// Numbered-list lines found in the completion
    pub lines_parsed: usize,

    /// Processing time in milliseconds
    pub processing_time_ms: u64,

    /// Unix timestamp (seconds) when extraction finished
    pub timestamp: u64,
}

/// Success body returned to callers
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExtractionResponse {
    /// Extracted key points
    pub key_points: Vec<KeyPoint>,
}

impl From<ExtractionResult> for ExtractionResponse {
    fn from(result: ExtractionResult) -> Self {
        Self {
            key_points: result.key_points,
        }
    }
}
