//! Draft command implementation.

use crate::cli::DraftArgs;
use crate::error::Result;
use crate::output::Formatter;
use crate::project_file::{load_project, save_project};
use quill_domain::CompletionProvider;
use quill_drafter::{DraftGenerator, DraftRequest, DrafterError};
use std::future::Future;

/// Execute the draft command.
///
/// Direction options given on the command line are stored on the project
/// before drafting, so later exports record them.
pub async fn execute_draft<P, F>(
    args: DraftArgs,
    generator: &DraftGenerator<P>,
    formatter: &Formatter,
    cancel: F,
) -> Result<()>
where
    P: CompletionProvider + Sync,
    DrafterError: From<P::Error>,
    F: Future<Output = ()>,
{
    let mut project = load_project(&args.project)?;

    let mut direction = project.story_direction.clone().unwrap_or_default();
    if let Some(tone) = args.tone {
        direction.tone = tone;
    }
    if let Some(angle) = args.angle {
        direction.angle = angle;
    }
    if let Some(length) = args.length {
        direction.length = length.as_str().to_string();
    }
    project.story_direction = Some(direction);

    let request = DraftRequest::from_project(&project, args.include_unapproved);
    let draft = generator.generate_until(&request, cancel).await?;

    println!("{}", formatter.format_draft(&draft)?);
    project.draft = Some(draft);
    save_project(&args.project, &project)?;

    formatter.status(&format!("Draft saved to {}", args.project.display()));
    Ok(())
}
