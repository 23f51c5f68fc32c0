//! Markdown and provenance export

use crate::DrafterError;
use quill_domain::{KeyPoint, Project, Source, StoryDirection};
use serde::Serialize;
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

/// Turn a project title into a file name stem
///
/// Whitespace runs become a single `-` and the result is lowercased. An
/// empty title yields `untitled`.
pub fn slugify(title: &str) -> String {
    let slug = title.split_whitespace().collect::<Vec<_>>().join("-").to_lowercase();
    if slug.is_empty() {
        "untitled".to_string()
    } else {
        slug
    }
}

/// Provenance file contents
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProvenanceRecord<'a> {
    /// Project title
    pub project_title: &'a str,

    /// When the draft was generated, or the export time without a draft
    pub generated_at: String,

    /// All sources attached to the project
    pub sources: &'a [Source],

    /// All key points, approved or not
    pub key_points: &'a [KeyPoint],

    /// Paragraph id to source ids
    pub source_mapping: &'a BTreeMap<String, Vec<String>>,

    /// Editorial direction
    pub story_direction: StoryDirection,
}

impl<'a> ProvenanceRecord<'a> {
    /// Collect the provenance of a project
    pub fn from_project(project: &'a Project) -> Self {
        static EMPTY: BTreeMap<String, Vec<String>> = BTreeMap::new();

        let (generated_at, source_mapping) = match &project.draft {
            Some(draft) => (draft.generated_at.clone(), &draft.source_mapping),
            None => (chrono::Utc::now().to_rfc3339(), &EMPTY),
        };

        Self {
            project_title: &project.title,
            generated_at,
            sources: &project.sources,
            key_points: &project.key_points,
            source_mapping,
            story_direction: project.story_direction.clone().unwrap_or_default(),
        }
    }
}

/// Write the draft to `<dir>/<slug>.md`
///
/// The directory is created when missing. Returns the written path.
///
/// # Errors
///
/// [`DrafterError::NoDraft`] when the project has no draft; nothing is written.
pub fn export_markdown(project: &Project, dir: &Path) -> Result<PathBuf, DrafterError> {
    let draft = project.draft.as_ref().ok_or(DrafterError::NoDraft)?;

    fs::create_dir_all(dir)?;
    let path = dir.join(format!("{}.md", slugify(&project.title)));
    fs::write(&path, &draft.content)?;

    info!("Exported draft to {}", path.display());
    Ok(path)
}

/// Write the provenance record to `<dir>/<slug>-provenance.json`
///
/// Works without a draft; the mapping is then empty.
pub fn export_provenance(project: &Project, dir: &Path) -> Result<PathBuf, DrafterError> {
    let record = ProvenanceRecord::from_project(project);
    let json = serde_json::to_string_pretty(&record)?;

    fs::create_dir_all(dir)?;
    let path = dir.join(format!("{}-provenance.json", slugify(&project.title)));
    fs::write(&path, json)?;

    info!("Exported provenance to {}", path.display());
    Ok(path)
}
