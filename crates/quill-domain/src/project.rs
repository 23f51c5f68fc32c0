//! Project module - the editor's working document

use crate::{KeyPoint, Source};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Editorial direction for a draft
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoryDirection {
    /// Voice of the piece (e.g. "informative", "conversational")
    pub tone: String,

    /// Framing of the piece (e.g. "balanced", "critical")
    pub angle: String,

    /// Target length: "short", "medium" or "long"
    pub length: String,
}

impl Default for StoryDirection {
    fn default() -> Self {
        Self {
            tone: "informative".to_string(),
            angle: "balanced".to_string(),
            length: "medium".to_string(),
        }
    }
}

/// A generated article draft
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Draft {
    /// Markdown article
    pub content: String,

    /// Paragraph id ("p1", "p2", ...) to the source ids it draws on
    pub source_mapping: BTreeMap<String, Vec<String>>,

    /// RFC 3339 generation time
    pub generated_at: String,
}

/// An article drafting project
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    /// Project identifier
    pub id: String,

    /// Working title, also used to name exported files
    pub title: String,

    /// Interview transcript
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transcript: Option<String>,

    /// Supporting sources
    #[serde(default)]
    pub sources: Vec<Source>,

    /// Key points from the latest extraction run
    #[serde(default)]
    pub key_points: Vec<KeyPoint>,

    /// Editorial direction used for the draft
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub story_direction: Option<StoryDirection>,

    /// Latest draft
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub draft: Option<Draft>,
}

impl Project {
    /// Create an empty project
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            transcript: None,
            sources: Vec::new(),
            key_points: Vec::new(),
            story_direction: None,
            draft: None,
        }
    }

    /// Replace the key points wholesale with the result of a new run
    pub fn replace_key_points(&mut self, key_points: Vec<KeyPoint>) {
        self.key_points = key_points;
    }

    /// Key points an editor approved
    pub fn approved_key_points(&self) -> impl Iterator<Item = &KeyPoint> {
        self.key_points.iter().filter(|p| p.approved)
    }

    /// Sources that take part in extraction
    pub fn usable_sources(&self) -> impl Iterator<Item = &Source> {
        self.sources.iter().filter(|s| s.is_usable())
    }
}
