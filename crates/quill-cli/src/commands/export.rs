//! Export command implementation.

use crate::cli::ExportArgs;
use crate::error::Result;
use crate::output::Formatter;
use crate::project_file::load_project;
use quill_drafter::{export_markdown, export_provenance};

/// Execute the export command.
///
/// Writes both files when neither `--markdown` nor `--provenance` is given.
pub fn execute_export(args: ExportArgs, formatter: &Formatter) -> Result<()> {
    let project = load_project(&args.project)?;
    let both = !args.markdown && !args.provenance;

    let mut written = Vec::new();
    if args.markdown || both {
        written.push(export_markdown(&project, &args.out)?);
    }
    if args.provenance || both {
        written.push(export_provenance(&project, &args.out)?);
    }

    println!("{}", formatter.format_paths(&written)?);
    Ok(())
}
