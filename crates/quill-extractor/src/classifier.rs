//! Source attribution and categorization of parsed lines

use crate::types::ClassifiedPoint;
use quill_domain::{Category, TRANSCRIPT_SOURCE_ID};
use regex::Regex;
use std::sync::OnceLock;

/// First non-empty `[...]` group
fn source_tag() -> &'static Regex {
    static TAG: OnceLock<Regex> = OnceLock::new();
    TAG.get_or_init(|| Regex::new(r"\[([^\]]+)\]").expect("static pattern"))
}

/// Any bracketed substring, including `[]`
fn bracketed() -> &'static Regex {
    static BRACKETED: OnceLock<Regex> = OnceLock::new();
    BRACKETED.get_or_init(|| Regex::new(r"\[[^\]]*\]").expect("static pattern"))
}

/// Resolve the source tag, category and display text of one parsed line
///
/// - The first bracketed tag, lower-cased, becomes the source id; a line
///   without one is attributed to the transcript.
/// - The category comes from [`Category::classify`] over the whole line,
///   tags included.
/// - Every bracketed substring is removed from the display text, along
///   with any unbalanced bracket left behind, and the result is trimmed.
///
/// # Examples
///
/// ```
/// use quill_extractor::classify_line;
/// use quill_domain::Category;
///
/// let point = classify_line("The EU AI Act is a regulatory milestone. [Source PDF]");
/// assert_eq!(point.text, "The EU AI Act is a regulatory milestone.");
/// assert_eq!(point.source_id, "source pdf");
/// assert_eq!(point.category, Category::Regulation);
/// ```
pub fn classify_line(line: &str) -> ClassifiedPoint {
    ClassifiedPoint {
        text: strip_tags(line),
        source_id: source_id(line),
        category: Category::classify(line),
    }
}

fn source_id(line: &str) -> String {
    source_tag()
        .captures(line)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().trim().to_lowercase())
        .filter(|tag| !tag.is_empty())
        .unwrap_or_else(|| TRANSCRIPT_SOURCE_ID.to_string())
}

fn strip_tags(line: &str) -> String {
    bracketed()
        .replace_all(line, "")
        .replace(['[', ']'], "")
        .trim()
        .to_string()
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Display text never contains brackets
        #[test]
        fn test_text_has_no_brackets(line in "[ -~]{0,80}") {
            let point = classify_line(&line);
            prop_assert!(!point.text.contains('['));
            prop_assert!(!point.text.contains(']'));
        }

        /// Source ids are lower-case, and untagged lines go to the transcript
        #[test]
        fn test_source_id_is_lowercase(line in "[ -~]{0,80}") {
            let point = classify_line(&line);
            prop_assert_eq!(point.source_id.clone(), point.source_id.to_lowercase());
            if !line.contains('[') {
                prop_assert_eq!(point.source_id, TRANSCRIPT_SOURCE_ID);
            }
        }

        /// Classifying the same line twice gives the same result
        #[test]
        fn test_classification_is_deterministic(line in "[ -~]{0,80}") {
            prop_assert_eq!(classify_line(&line), classify_line(&line));
        }

        /// Bias keywords win over every later rule
        #[test]
        fn test_bias_priority(prefix in "[a-z ]{0,20}", suffix in "[a-z ]{0,20}") {
            let line = format!("{}bias{} recommend example law", prefix, suffix);
            prop_assert_eq!(classify_line(&line).category, Category::Bias);
        }
    }
}
