//! Category module - topical buckets for key points

use serde::{Deserialize, Serialize};
use std::fmt;

/// Topical category assigned to a key point
///
/// Categories are assigned once, at extraction time, by an ordered keyword
/// rule list. See [`Category::classify`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    /// No specific topic matched
    #[default]
    General,

    /// Bias or discrimination
    Bias,

    /// Concrete examples or cases
    Examples,

    /// Regulation, law or policy
    Regulation,

    /// Recommendations and calls to action
    Recommendations,
}

/// Keyword rules in priority order. The first rule with a matching keyword wins.
///
/// "regulat" is a stem so that "regulatory" lands with "regulation".
const RULES: &[(Category, &[&str])] = &[
    (Category::Bias, &["bias", "discrimination"]),
    (Category::Examples, &["example", "case"]),
    (Category::Regulation, &["regulat", "law", "policy"]),
    (Category::Recommendations, &["recommend", "should"]),
];

impl Category {
    /// All categories, `General` first
    pub const ALL: [Category; 5] = [
        Category::General,
        Category::Bias,
        Category::Examples,
        Category::Regulation,
        Category::Recommendations,
    ];

    /// Get the category name as a string
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::General => "general",
            Category::Bias => "bias",
            Category::Examples => "examples",
            Category::Regulation => "regulation",
            Category::Recommendations => "recommendations",
        }
    }

    /// Parse a category from a string
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "general" => Some(Category::General),
            "bias" => Some(Category::Bias),
            "examples" => Some(Category::Examples),
            "regulation" => Some(Category::Regulation),
            "recommendations" => Some(Category::Recommendations),
            _ => None,
        }
    }

    /// Classify a line of text by keyword membership
    ///
    /// Matching is case-insensitive substring containment, so "lawyer"
    /// counts as "law" and "showcase" counts as "case".
    ///
    /// # Examples
    ///
    /// ```
    /// use quill_domain::Category;
    ///
    /// assert_eq!(Category::classify("Hiring tools showed bias"), Category::Bias);
    /// // Bias is checked before recommendations
    /// assert_eq!(Category::classify("We recommend auditing for bias"), Category::Bias);
    /// assert_eq!(Category::classify("Nothing to see here"), Category::General);
    /// ```
    pub fn classify(text: &str) -> Self {
        let lowered = text.to_lowercase();
        RULES
            .iter()
            .find(|(_, keywords)| keywords.iter().any(|k| lowered.contains(k)))
            .map(|(category, _)| *category)
            .unwrap_or_default()
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_as_str() {
        assert_eq!(Category::General.as_str(), "general");
        assert_eq!(Category::Bias.as_str(), "bias");
        assert_eq!(Category::Examples.as_str(), "examples");
        assert_eq!(Category::Regulation.as_str(), "regulation");
        assert_eq!(Category::Recommendations.as_str(), "recommendations");
    }

    #[test]
    fn test_category_parse() {
        for category in Category::ALL {
            assert_eq!(Category::parse(category.as_str()), Some(category));
        }
        assert_eq!(Category::parse("BIAS"), Some(Category::Bias));
        assert_eq!(Category::parse("unknown"), None);
    }

    #[test]
    fn test_classify_each_rule() {
        assert_eq!(Category::classify("Evidence of discrimination"), Category::Bias);
        assert_eq!(Category::classify("One example was Amazon"), Category::Examples);
        assert_eq!(Category::classify("A notable case in 2018"), Category::Examples);
        assert_eq!(Category::classify("The new regulation applies"), Category::Regulation);
        assert_eq!(Category::classify("A regulatory milestone"), Category::Regulation);
        assert_eq!(Category::classify("State law differs"), Category::Regulation);
        assert_eq!(Category::classify("Company policy changed"), Category::Regulation);
        assert_eq!(Category::classify("We recommend audits"), Category::Recommendations);
        assert_eq!(Category::classify("Users should stay critical"), Category::Recommendations);
        assert_eq!(Category::classify("AI is everywhere"), Category::General);
    }

    #[test]
    fn test_classify_is_case_insensitive() {
        assert_eq!(Category::classify("BIAS IN HIRING"), Category::Bias);
        assert_eq!(Category::classify("The EU AI Act is a Regulatory milestone"), Category::Regulation);
    }

    #[test]
    fn test_classify_priority_order() {
        assert_eq!(Category::classify("An example of bias"), Category::Bias);
        assert_eq!(Category::classify("A case for new law"), Category::Examples);
        assert_eq!(Category::classify("Policy should change"), Category::Regulation);
    }

    #[test]
    fn test_serde_lowercase() {
        let json = serde_json::to_string(&Category::Recommendations).unwrap();
        assert_eq!(json, "\"recommendations\"");
        let parsed: Category = serde_json::from_str("\"examples\"").unwrap();
        assert_eq!(parsed, Category::Examples);
    }
}
