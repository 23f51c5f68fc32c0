//! Extract command implementation.

use crate::cli::ExtractArgs;
use crate::error::{CliError, Result};
use crate::output::Formatter;
use crate::project_file::{load_project, load_sources, load_transcript, save_project};
use quill_domain::CompletionProvider;
use quill_extractor::{ExtractionRequest, Extractor, ExtractorError};
use std::future::Future;
use tracing::info;

/// Execute the extract command.
///
/// With `--project` the project's key points are replaced by the new run
/// and the file is rewritten; a failed or cancelled run leaves it untouched.
pub async fn execute_extract<P, F>(
    args: ExtractArgs,
    extractor: &Extractor<P>,
    formatter: &Formatter,
    cancel: F,
) -> Result<()>
where
    P: CompletionProvider + Sync,
    ExtractorError: From<P::Error>,
    F: Future<Output = ()>,
{
    if let Some(path) = args.project {
        let mut project = load_project(&path)?;
        let request = ExtractionRequest::new(project.transcript.clone(), project.sources.clone());

        let result = extractor.extract_until(&request, cancel).await?;
        info!(
            "Replacing {} key point(s) in {}",
            project.key_points.len(),
            path.display()
        );
        project.replace_key_points(result.key_points);
        save_project(&path, &project)?;

        println!("{}", formatter.format_key_points(&project.key_points)?);
        formatter.status(&format!(
            "Extracted {} key point(s) into {}",
            project.key_points.len(),
            path.display()
        ));
        return Ok(());
    }

    let transcript_path = args.transcript.ok_or_else(|| {
        CliError::InvalidInput("Must specify either --project or --transcript".to_string())
    })?;
    let transcript = load_transcript(&transcript_path)?;
    let sources = match args.sources {
        Some(path) => load_sources(&path)?,
        None => Vec::new(),
    };

    let request = ExtractionRequest::new(Some(transcript), sources);
    let result = extractor.extract_until(&request, cancel).await?;

    println!("{}", formatter.format_key_points(&result.key_points)?);
    formatter.status(&format!(
        "Extracted {} key point(s) in {}ms",
        result.key_points.len(),
        result.metadata.processing_time_ms
    ));
    Ok(())
}
