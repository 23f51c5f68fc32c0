//! Source module - externally supplied documents used as extraction input

use serde::{Deserialize, Serialize};

/// Processing status of a source
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SourceStatus {
    /// Registered but not yet fetched
    #[default]
    Pending,
    /// Content is being fetched or processed
    Processing,
    /// Content is available
    Ready,
    /// Fetching or processing failed
    Error,
}

/// Kind of document behind a source
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SourceKind {
    /// Uploaded PDF document
    Pdf,
    /// Web page
    Url,
    /// Video with a transcript
    Youtube,
}

/// A document reference supplied by the surrounding application
///
/// The extraction pipeline only ever reads sources; status and content are
/// owned by whoever registered the source.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Source {
    /// Identifier assigned by the application
    #[serde(default)]
    pub id: String,

    /// Display name, also used as the tag in prompts
    pub name: String,

    /// Document kind, when known
    #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<SourceKind>,

    /// Original location of the document
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,

    /// Extracted text, present once processing is complete
    #[serde(default)]
    pub content: Option<String>,

    /// Processing status
    #[serde(default)]
    pub status: SourceStatus,
}

impl Source {
    /// Create a ready source with content
    pub fn ready(name: impl Into<String>, content: impl Into<String>) -> Self {
        let name = name.into();
        Self {
            id: name.to_lowercase(),
            name,
            kind: None,
            url: None,
            content: Some(content.into()),
            status: SourceStatus::Ready,
        }
    }

    /// Create a source that has not been processed yet
    pub fn pending(name: impl Into<String>) -> Self {
        let name = name.into();
        Self {
            id: name.to_lowercase(),
            name,
            kind: None,
            url: None,
            content: None,
            status: SourceStatus::Pending,
        }
    }

    /// Usable content, if this source may take part in extraction
    ///
    /// Returns `Some` only for `Ready` sources with non-empty content.
    pub fn usable_content(&self) -> Option<&str> {
        if self.status != SourceStatus::Ready {
            return None;
        }
        self.content.as_deref().filter(|c| !c.is_empty())
    }

    /// Whether this source takes part in extraction
    pub fn is_usable(&self) -> bool {
        self.usable_content().is_some()
    }
}
