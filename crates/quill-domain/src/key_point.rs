//! Key point module - the unit of extracted, reviewable knowledge

use crate::Category;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Source id assigned when a key point carries no bracketed source tag
pub const TRANSCRIPT_SOURCE_ID: &str = "transcript";

/// Unique identifier for a key point
///
/// New identifiers are UUIDv7 strings, so every key point in a run (and
/// across runs) gets a distinct value. Identifiers read from a project file
/// are kept as given, whatever their shape.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct KeyPointId(String);

impl KeyPointId {
    /// Generate a new UUIDv7-based KeyPointId
    ///
    /// # Examples
    ///
    /// ```
    /// use quill_domain::KeyPointId;
    ///
    /// let a = KeyPointId::new();
    /// let b = KeyPointId::new();
    /// assert_ne!(a, b);
    /// ```
    pub fn new() -> Self {
        Self(uuid::Uuid::now_v7().to_string())
    }

    /// Wrap an existing identifier
    pub fn from_string(s: impl Into<String>) -> Self {
        Self(s.into())
    }

    /// The identifier text
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for KeyPointId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for KeyPointId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A categorized, source-attributed claim extracted from the input corpus
///
/// `source_id` and `category` are set once at creation. `confidence` is a
/// placeholder in [0.85, 1.0) assigned by the pipeline; it is not reported
/// by the model and carries no meaning beyond its range.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KeyPoint {
    /// Unique identifier
    pub id: KeyPointId,

    /// The claim, without any bracketed source tags
    pub text: String,

    /// Lower-cased source tag, or "transcript" when none was given
    pub source_id: String,

    /// Topical category
    pub category: Category,

    /// Whether an editor approved this point
    pub approved: bool,

    /// Pipeline-assigned placeholder confidence
    pub confidence: f64,
}

impl KeyPoint {
    /// Create a new, unapproved key point
    pub fn new(
        id: KeyPointId,
        text: String,
        source_id: String,
        category: Category,
        confidence: f64,
    ) -> Self {
        Self {
            id,
            text,
            source_id,
            category,
            approved: false,
            confidence,
        }
    }

    /// Whether the point was attributed to the transcript
    pub fn is_from_transcript(&self) -> bool {
        self.source_id == TRANSCRIPT_SOURCE_ID
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_key_point_id_is_uuid_v7() {
        let id = KeyPointId::new();
        let parsed = uuid::Uuid::parse_str(id.as_str()).unwrap();
        assert_eq!(parsed.get_version_num(), 7);
    }

    #[test]
    fn test_key_point_id_accepts_any_string() {
        let json = r#"{"id": "extracted-1718000000000-0", "text": "Bias persists.",
            "sourceId": "transcript", "category": "bias", "approved": true, "confidence": 0.9}"#;
        let point: KeyPoint = serde_json::from_str(json).unwrap();
        assert_eq!(point.id.as_str(), "extracted-1718000000000-0");
        assert!(point.approved);

        let back = serde_json::to_value(&point).unwrap();
        assert_eq!(back["id"], "extracted-1718000000000-0");
    }

    #[test]
    fn test_new_key_point_is_unapproved() {
        let point = KeyPoint::new(
            KeyPointId::new(),
            "Hiring algorithms showed bias.".to_string(),
            TRANSCRIPT_SOURCE_ID.to_string(),
            Category::Bias,
            0.9,
        );
        assert!(!point.approved);
        assert!(point.is_from_transcript());
    }

    #[test]
    fn test_key_point_wire_shape() {
        let point = KeyPoint::new(
            KeyPointId::from_string("kp-1"),
            "The EU AI Act is a regulatory milestone.".to_string(),
            "source pdf".to_string(),
            Category::Regulation,
            0.91,
        );
        let json = serde_json::to_value(&point).unwrap();
        assert_eq!(json["sourceId"], "source pdf");
        assert_eq!(json["category"], "regulation");
        assert_eq!(json["approved"], false);
        assert_eq!(json["id"], "kp-1");

        let back: KeyPoint = serde_json::from_value(json).unwrap();
        assert_eq!(back, point);
    }
}
