//! Quill Drafter
//!
//! Writes an article draft from the key points an editor approved and
//! exports the result: the Markdown article itself, and a provenance file
//! recording which sources each paragraph draws on.
//!
//! # Example Usage
//!
//! ```no_run
//! use quill_drafter::{export_markdown, DraftGenerator, DraftRequest};
//! use quill_domain::Project;
//! use quill_llm::MockProvider;
//! use std::path::Path;
//!
//! # async fn example(mut project: Project) -> Result<(), quill_drafter::DrafterError> {
//! let generator = DraftGenerator::new(MockProvider::new("# Title\n\nBody. [transcript]"));
//! let draft = generator.generate(&DraftRequest::from_project(&project, false)).await?;
//! project.draft = Some(draft);
//!
//! let path = export_markdown(&project, Path::new("exports"))?;
//! println!("Wrote {}", path.display());
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]

mod draft;
mod error;
mod export;
mod prompt;

pub use draft::{parse_draft, DraftGenerator, DraftRequest, DEFAULT_DRAFT_TIMEOUT_SECS};
pub use error::DrafterError;
pub use export::{export_markdown, export_provenance, slugify, ProvenanceRecord};
pub use prompt::{word_range, DraftPromptBuilder};
