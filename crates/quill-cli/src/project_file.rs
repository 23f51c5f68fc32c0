//! Reading and writing project JSON files.

use crate::error::{CliError, Result};
use quill_domain::{Project, Source};
use std::fs;
use std::path::Path;

/// Load a project file.
pub fn load_project(path: &Path) -> Result<Project> {
    let contents = fs::read_to_string(path).map_err(|e| {
        CliError::InvalidInput(format!("Cannot read project '{}': {}", path.display(), e))
    })?;
    serde_json::from_str(&contents).map_err(|e| {
        CliError::InvalidInput(format!("Invalid project '{}': {}", path.display(), e))
    })
}

/// Write a project file, replacing its contents.
pub fn save_project(path: &Path, project: &Project) -> Result<()> {
    let contents = serde_json::to_string_pretty(project)?;
    fs::write(path, contents)?;
    Ok(())
}

/// Load a JSON array of sources.
pub fn load_sources(path: &Path) -> Result<Vec<Source>> {
    let contents = fs::read_to_string(path).map_err(|e| {
        CliError::InvalidInput(format!("Cannot read sources '{}': {}", path.display(), e))
    })?;
    serde_json::from_str(&contents).map_err(|e| {
        CliError::InvalidInput(format!("Invalid sources '{}': {}", path.display(), e))
    })
}

/// Load a plain-text transcript.
pub fn load_transcript(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|e| {
        CliError::InvalidInput(format!("Cannot read transcript '{}': {}", path.display(), e))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_project_round_trip() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("story.json");

        let mut project = Project::new("p1", "AI Bias");
        project.transcript = Some("We talked.".to_string());
        save_project(&path, &project).unwrap();

        let loaded = load_project(&path).unwrap();
        assert_eq!(loaded, project);
    }

    #[test]
    fn test_missing_project_is_bad_input() {
        let dir = TempDir::new().unwrap();
        let err = load_project(&dir.path().join("absent.json")).unwrap_err();
        assert_eq!(err.exit_code(), 2);
    }

    #[test]
    fn test_sources_from_wire_shape() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("sources.json");
        fs::write(
            &path,
            r#"[{"id": "s1", "name": "EU AI Act", "type": "pdf", "content": "Text", "status": "ready"}]"#,
        )
        .unwrap();

        let sources = load_sources(&path).unwrap();
        assert_eq!(sources.len(), 1);
        assert!(sources[0].is_usable());
    }
}
