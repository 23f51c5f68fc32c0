//! LLM prompt engineering for key point extraction

use quill_domain::Source;

/// Placeholder used when the transcript is empty or absent
pub const NO_TRANSCRIPT: &str = "No transcript provided.";

/// Placeholder used when no source is ready with content
pub const NO_SOURCES: &str = "No supporting sources provided.";

/// Builds the extraction prompt from a transcript and its sources
///
/// The output is fully determined by the inputs.
pub struct PromptBuilder<'a> {
    transcript: Option<&'a str>,
    sources: &'a [Source],
}

impl<'a> PromptBuilder<'a> {
    /// Create a new prompt builder
    pub fn new(transcript: Option<&'a str>, sources: &'a [Source]) -> Self {
        Self { transcript, sources }
    }

    /// Build the complete extraction prompt
    pub fn build(&self) -> String {
        let mut prompt = String::new();

        prompt.push_str(PREAMBLE);
        prompt.push_str("\n\n");

        prompt.push_str("Transcript:\n");
        prompt.push_str(self.transcript_section());
        prompt.push_str("\n\n");

        prompt.push_str("Supporting Source(s):\n");
        prompt.push_str(&self.sources_section());
        prompt.push_str("\n\n");

        prompt.push_str(INSTRUCTIONS);

        prompt
    }

    fn transcript_section(&self) -> &str {
        self.transcript
            .filter(|t| !t.trim().is_empty())
            .unwrap_or(NO_TRANSCRIPT)
    }

    /// Render usable sources as `[name]: content`, separated by blank lines
    fn sources_section(&self) -> String {
        let rendered: Vec<String> = self
            .sources
            .iter()
            .filter_map(|s| s.usable_content().map(|content| format!("[{}]: {}", s.name, content)))
            .collect();

        if rendered.is_empty() {
            NO_SOURCES.to_string()
        } else {
            rendered.join("\n\n")
        }
    }
}

const PREAMBLE: &str = "You are an editorial assistant helping a human editor.

TASK: Extract the most important key points from the provided interview transcript and supporting sources.";

const INSTRUCTIONS: &str = "INSTRUCTIONS:
1. Read the transcript and supporting sources carefully.
2. Identify 5–10 key points that are factual, distinct, and relevant to the story.
3. Write each key point as a clear, short sentence.
4. If a point is supported by a source, note the source in brackets. Example: [Transcript], [Source PDF], [Web article].
5. Do not invent new information. Only use what is present in the transcript and sources.
6. Output the key points as a numbered list.";

#[cfg(test)]
mod tests {
    use super::*;
    use quill_domain::SourceStatus;

    #[test]
    fn test_prompt_includes_transcript() {
        let prompt = PromptBuilder::new(Some("Dr. Chen discussed hiring bias."), &[]).build();
        assert!(prompt.contains("Transcript:\nDr. Chen discussed hiring bias."));
    }

    #[test]
    fn test_empty_transcript_placeholder() {
        let prompt = PromptBuilder::new(None, &[]).build();
        assert!(prompt.contains(NO_TRANSCRIPT));

        let prompt = PromptBuilder::new(Some(""), &[]).build();
        assert!(prompt.contains(NO_TRANSCRIPT));
    }

    #[test]
    fn test_no_sources_placeholder() {
        let sources = vec![Source::pending("Web article")];
        let prompt = PromptBuilder::new(Some("text"), &sources).build();
        assert!(prompt.contains(NO_SOURCES));
        assert!(!prompt.contains("[Web article]:"));
    }

    #[test]
    fn test_sources_rendered_and_filtered() {
        let mut errored = Source::ready("Broken", "should not appear");
        errored.status = SourceStatus::Error;
        let sources = vec![
            Source::ready("Source PDF", "The EU AI Act passed."),
            errored,
            Source::ready("Empty", ""),
            Source::ready("Web article", "Facial recognition errors."),
        ];

        let prompt = PromptBuilder::new(Some("text"), &sources).build();
        assert!(prompt.contains(
            "[Source PDF]: The EU AI Act passed.\n\n[Web article]: Facial recognition errors."
        ));
        assert!(!prompt.contains("should not appear"));
        assert!(!prompt.contains("[Empty]"));
        assert!(!prompt.contains(NO_SOURCES));
    }

    #[test]
    fn test_prompt_includes_instructions() {
        let prompt = PromptBuilder::new(Some("text"), &[]).build();
        assert!(prompt.contains("5–10 key points"));
        assert!(prompt.contains("note the source in brackets"));
        assert!(prompt.contains("Do not invent new information"));
        assert!(prompt.contains("numbered list"));
    }

    #[test]
    fn test_prompt_is_deterministic() {
        let sources = vec![Source::ready("A", "one"), Source::ready("B", "two")];
        let first = PromptBuilder::new(Some("text"), &sources).build();
        let second = PromptBuilder::new(Some("text"), &sources).build();
        assert_eq!(first, second);
    }
}
