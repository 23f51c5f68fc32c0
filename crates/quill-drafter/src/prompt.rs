//! Prompt construction for article drafts

use quill_domain::{KeyPoint, StoryDirection};

/// Longest transcript excerpt included in a draft prompt (characters)
const TRANSCRIPT_EXCERPT_CHARS: usize = 4_000;

/// Target word range for a story length
///
/// Unknown lengths fall back to "medium".
pub fn word_range(length: &str) -> (u32, u32) {
    match length.to_lowercase().as_str() {
        "short" => (300, 500),
        "long" => (1000, 1500),
        _ => (600, 900),
    }
}

/// Builds the prompt for an article draft
pub struct DraftPromptBuilder<'a> {
    title: &'a str,
    key_points: &'a [KeyPoint],
    transcript: Option<&'a str>,
    direction: &'a StoryDirection,
}

impl<'a> DraftPromptBuilder<'a> {
    /// Create a new prompt builder
    pub fn new(title: &'a str, key_points: &'a [KeyPoint], direction: &'a StoryDirection) -> Self {
        Self {
            title,
            key_points,
            transcript: None,
            direction,
        }
    }

    /// Include a transcript excerpt for quotes
    pub fn with_transcript(mut self, transcript: Option<&'a str>) -> Self {
        self.transcript = transcript.filter(|t| !t.trim().is_empty());
        self
    }

    /// Build the complete draft prompt
    pub fn build(&self) -> String {
        let (min_words, max_words) = word_range(&self.direction.length);
        let mut prompt = String::new();

        prompt.push_str("You are an editorial assistant helping a human editor write an article.\n\n");
        prompt.push_str(&format!("TITLE: {}\n\n", self.title));

        prompt.push_str("STORY DIRECTION:\n");
        prompt.push_str(&format!("- Tone: {}\n", self.direction.tone));
        prompt.push_str(&format!("- Angle: {}\n", self.direction.angle));
        prompt.push_str(&format!("- Length: {}–{} words\n\n", min_words, max_words));

        prompt.push_str("APPROVED KEY POINTS:\n");
        for point in self.key_points {
            prompt.push_str(&format!("- {} [{}]\n", point.text, point.source_id));
        }
        prompt.push('\n');

        if let Some(transcript) = self.transcript {
            let excerpt: String = transcript.chars().take(TRANSCRIPT_EXCERPT_CHARS).collect();
            prompt.push_str("TRANSCRIPT EXCERPT (for direct quotes only):\n---\n");
            prompt.push_str(&excerpt);
            prompt.push_str("\n---\n\n");
        }

        prompt.push_str(INSTRUCTIONS);
        prompt
    }
}

const INSTRUCTIONS: &str = "INSTRUCTIONS:
1. Write the article in Markdown, starting with a level-one heading. Use level-two headings for sections.
2. Build the article only from the approved key points. Quotes must be taken verbatim from the transcript excerpt.
3. End every body paragraph with the ids of the sources it draws on, in square brackets, exactly as given above. Example: [transcript] [source pdf].
4. Separate paragraphs with a blank line.
5. Do not invent facts, quotes or sources.";

#[cfg(test)]
mod tests {
    use super::*;
    use quill_domain::{Category, KeyPointId};

    fn point(text: &str, source: &str) -> KeyPoint {
        KeyPoint::new(KeyPointId::new(), text.into(), source.into(), Category::General, 0.9)
    }

    #[test]
    fn test_word_range() {
        assert_eq!(word_range("short"), (300, 500));
        assert_eq!(word_range("Medium"), (600, 900));
        assert_eq!(word_range("long"), (1000, 1500));
        assert_eq!(word_range("epic"), (600, 900));
    }

    #[test]
    fn test_prompt_lists_points_with_sources() {
        let points = vec![
            point("Hiring algorithms discriminated against women.", "transcript"),
            point("The EU AI Act is progress.", "source pdf"),
        ];
        let direction = StoryDirection::default();
        let prompt = DraftPromptBuilder::new("AI Bias", &points, &direction).build();

        assert!(prompt.contains("TITLE: AI Bias"));
        assert!(prompt.contains("- Hiring algorithms discriminated against women. [transcript]"));
        assert!(prompt.contains("- The EU AI Act is progress. [source pdf]"));
        assert!(prompt.contains("- Tone: informative"));
        assert!(prompt.contains("- Length: 600–900 words"));
        assert!(!prompt.contains("TRANSCRIPT EXCERPT"));
    }

    #[test]
    fn test_transcript_excerpt_is_truncated() {
        let direction = StoryDirection::default();
        let transcript = "é".repeat(TRANSCRIPT_EXCERPT_CHARS + 100);
        let prompt = DraftPromptBuilder::new("T", &[], &direction)
            .with_transcript(Some(&transcript))
            .build();

        assert!(prompt.contains("TRANSCRIPT EXCERPT"));
        assert_eq!(prompt.matches('é').count(), TRANSCRIPT_EXCERPT_CHARS);
    }

    #[test]
    fn test_blank_transcript_is_skipped() {
        let direction = StoryDirection::default();
        let prompt = DraftPromptBuilder::new("T", &[], &direction)
            .with_transcript(Some("  "))
            .build();
        assert!(!prompt.contains("TRANSCRIPT EXCERPT"));
    }
}
