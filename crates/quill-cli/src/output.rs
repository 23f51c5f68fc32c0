//! Output formatting for the CLI.

use crate::config::OutputFormat;
use crate::error::Result;
use colored::*;
use quill_domain::{Draft, KeyPoint};
use std::path::PathBuf;
use tabled::{
    builder::Builder,
    settings::{object::Rows, Alignment, Modify, Style},
};

/// Output formatter.
pub struct Formatter {
    format: OutputFormat,
    color_enabled: bool,
}

impl Formatter {
    /// Create a new formatter.
    pub fn new(format: OutputFormat, color_enabled: bool) -> Self {
        Self {
            format,
            color_enabled,
        }
    }

    /// Format key points.
    pub fn format_key_points(&self, key_points: &[KeyPoint]) -> Result<String> {
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(
                &serde_json::json!({ "keyPoints": key_points }),
            )?),
            OutputFormat::Table => Ok(self.format_key_points_table(key_points)),
            OutputFormat::Quiet => Ok(key_points
                .iter()
                .map(|p| p.id.to_string())
                .collect::<Vec<_>>()
                .join("\n")),
        }
    }

    /// Format key points as a table.
    fn format_key_points_table(&self, key_points: &[KeyPoint]) -> String {
        if key_points.is_empty() {
            return self.colorize("No key points found.", "yellow");
        }

        let mut builder = Builder::default();
        builder.push_record(["#", "ID", "Category", "Source", "Confidence", "Approved", "Key Point"]);

        for (index, point) in key_points.iter().enumerate() {
            let id = point.id.to_string();
            builder.push_record([
                (index + 1).to_string(),
                id.chars().take(8).collect(), // Truncate ID for readability
                point.category.to_string(),
                point.source_id.clone(),
                format!("{:.2}", point.confidence),
                if point.approved { "yes" } else { "no" }.to_string(),
                point.text.clone(),
            ]);
        }

        let mut table = builder.build();
        table
            .with(Style::rounded())
            .with(Modify::new(Rows::first()).with(Alignment::center()));

        table.to_string()
    }

    /// Format a draft.
    pub fn format_draft(&self, draft: &Draft) -> Result<String> {
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(draft)?),
            OutputFormat::Quiet => Ok(draft.content.clone()),
            OutputFormat::Table => {
                if draft.source_mapping.is_empty() {
                    return Ok(format!(
                        "{}\n\n{}",
                        draft.content,
                        self.colorize("No paragraph cites a source.", "yellow")
                    ));
                }

                let mut builder = Builder::default();
                builder.push_record(["Paragraph", "Sources"]);
                for (paragraph, sources) in &draft.source_mapping {
                    builder.push_record([paragraph.clone(), sources.join(", ")]);
                }
                let mut table = builder.build();
                table.with(Style::rounded());

                Ok(format!("{}\n\n{}", draft.content, table))
            }
        }
    }

    /// Format written file paths.
    pub fn format_paths(&self, paths: &[PathBuf]) -> Result<String> {
        match self.format {
            OutputFormat::Json => {
                let paths: Vec<String> = paths.iter().map(|p| p.display().to_string()).collect();
                Ok(serde_json::to_string_pretty(&serde_json::json!({ "written": paths }))?)
            }
            OutputFormat::Quiet => Ok(paths
                .iter()
                .map(|p| p.display().to_string())
                .collect::<Vec<_>>()
                .join("\n")),
            OutputFormat::Table => Ok(paths
                .iter()
                .map(|p| self.success(&format!("Wrote {}", p.display())))
                .collect::<Vec<_>>()
                .join("\n")),
        }
    }

    /// Format a success message.
    pub fn success(&self, message: &str) -> String {
        self.colorize(&format!("✓ {}", message), "green")
    }

    /// Format an info message.
    pub fn info(&self, message: &str) -> String {
        self.colorize(&format!("ℹ {}", message), "blue")
    }

    /// Format a warning message.
    pub fn warning(&self, message: &str) -> String {
        self.colorize(&format!("⚠ {}", message), "yellow")
    }

    /// Print a status line to stderr, keeping stdout for the result.
    ///
    /// Nothing is printed outside table format.
    pub fn status(&self, message: &str) {
        if self.format == OutputFormat::Table {
            eprintln!("{}", self.success(message));
        }
    }

    /// Colorize text if color is enabled.
    fn colorize(&self, text: &str, color: &str) -> String {
        if !self.color_enabled {
            return text.to_string();
        }

        match color {
            "green" => text.green().to_string(),
            "blue" => text.blue().to_string(),
            "yellow" => text.yellow().to_string(),
            _ => text.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quill_domain::{Category, KeyPointId};
    use std::collections::BTreeMap;

    fn create_test_point() -> KeyPoint {
        KeyPoint::new(
            KeyPointId::new(),
            "Screening tools showed bias".to_string(),
            "transcript".to_string(),
            Category::Bias,
            0.91,
        )
    }

    fn create_test_draft() -> Draft {
        let mut source_mapping = BTreeMap::new();
        source_mapping.insert("p1".to_string(), vec!["transcript".to_string()]);
        Draft {
            content: "# Title\n\nBody.".to_string(),
            source_mapping,
            generated_at: "2026-01-01T00:00:00+00:00".to_string(),
        }
    }

    #[test]
    fn test_json_format() {
        let formatter = Formatter::new(OutputFormat::Json, false);
        let output = formatter.format_key_points(&[create_test_point()]).unwrap();
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(value["keyPoints"][0]["sourceId"], "transcript");
        assert_eq!(value["keyPoints"][0]["category"], "bias");
    }

    #[test]
    fn test_quiet_format() {
        let formatter = Formatter::new(OutputFormat::Quiet, false);
        let point = create_test_point();
        let output = formatter.format_key_points(&[point.clone()]).unwrap();
        assert_eq!(output, point.id.to_string());
    }

    #[test]
    fn test_table_format() {
        let formatter = Formatter::new(OutputFormat::Table, false);
        let output = formatter.format_key_points(&[create_test_point()]).unwrap();
        assert!(output.contains("Category"));
        assert!(output.contains("Screening tools showed bias"));
        assert!(output.contains("0.91"));
    }

    #[test]
    fn test_empty_key_points() {
        let formatter = Formatter::new(OutputFormat::Table, false);
        let output = formatter.format_key_points(&[]).unwrap();
        assert!(output.contains("No key points found"));
    }

    #[test]
    fn test_draft_formats() {
        let draft = create_test_draft();

        let table = Formatter::new(OutputFormat::Table, false).format_draft(&draft).unwrap();
        assert!(table.starts_with("# Title"));
        assert!(table.contains("p1"));

        let quiet = Formatter::new(OutputFormat::Quiet, false).format_draft(&draft).unwrap();
        assert_eq!(quiet, draft.content);

        let json = Formatter::new(OutputFormat::Json, false).format_draft(&draft).unwrap();
        assert!(json.contains("\"sourceMapping\""));
    }

    #[test]
    fn test_colorize_disabled() {
        let formatter = Formatter::new(OutputFormat::Table, false);
        let msg = formatter.success("test");
        assert_eq!(msg, "✓ test");
    }
}
