//! Draft generation and paragraph source mapping

use crate::prompt::DraftPromptBuilder;
use crate::DrafterError;
use quill_domain::{CompletionProvider, Draft, KeyPoint, Project, StoryDirection};
use regex::Regex;
use std::collections::BTreeMap;
use std::future::{self, Future};
use std::sync::OnceLock;
use std::time::Duration;
use tokio::time::timeout;
use tracing::{debug, info};

/// Default bound on a single draft completion call (seconds)
pub const DEFAULT_DRAFT_TIMEOUT_SECS: u64 = 120;

/// Everything needed to write a draft
#[derive(Debug, Clone)]
pub struct DraftRequest {
    /// Article title
    pub title: String,

    /// Key points the article is built from
    pub key_points: Vec<KeyPoint>,

    /// Transcript offered for direct quotes
    pub transcript: Option<String>,

    /// Editorial direction
    pub direction: StoryDirection,
}

impl DraftRequest {
    /// Build a request from a project
    ///
    /// Only approved key points are used unless `include_unapproved` is set.
    /// A project without a story direction gets the default one.
    pub fn from_project(project: &Project, include_unapproved: bool) -> Self {
        let key_points = if include_unapproved {
            project.key_points.clone()
        } else {
            project.approved_key_points().cloned().collect()
        };

        Self {
            title: project.title.clone(),
            key_points,
            transcript: project.transcript.clone(),
            direction: project.story_direction.clone().unwrap_or_default(),
        }
    }
}

/// Writes article drafts through a completion provider
pub struct DraftGenerator<P> {
    provider: P,
    timeout_secs: u64,
}

impl<P> DraftGenerator<P>
where
    P: CompletionProvider + Sync,
    DrafterError: From<P::Error>,
{
    /// Create a generator with the default timeout
    pub fn new(provider: P) -> Self {
        Self {
            provider,
            timeout_secs: DEFAULT_DRAFT_TIMEOUT_SECS,
        }
    }

    /// Override the completion timeout (seconds, at least one)
    pub fn with_timeout_secs(mut self, secs: u64) -> Self {
        self.timeout_secs = secs.max(1);
        self
    }

    /// Get a reference to the provider
    pub fn provider(&self) -> &P {
        &self.provider
    }

    /// Generate a draft
    ///
    /// # Errors
    ///
    /// [`DrafterError::NoApprovedKeyPoints`] when the request has no key
    /// points; the provider is not called. Provider failures are returned
    /// unchanged and [`DrafterError::Timeout`] when the call runs too long.
    pub async fn generate(&self, request: &DraftRequest) -> Result<Draft, DrafterError> {
        self.generate_until(request, future::pending::<()>()).await
    }

    /// Generate a draft, giving up when `cancel` resolves first
    ///
    /// Returns [`DrafterError::Cancelled`] when cancelled; nothing is parsed.
    pub async fn generate_until<F>(
        &self,
        request: &DraftRequest,
        cancel: F,
    ) -> Result<Draft, DrafterError>
    where
        F: Future<Output = ()>,
    {
        if request.key_points.is_empty() {
            return Err(DrafterError::NoApprovedKeyPoints);
        }

        let prompt = DraftPromptBuilder::new(&request.title, &request.key_points, &request.direction)
            .with_transcript(request.transcript.as_deref())
            .build();

        info!(
            "Drafting \"{}\" from {} key point(s) with {}",
            request.title,
            request.key_points.len(),
            self.provider.model_name()
        );

        let completion = tokio::select! {
            biased;
            _ = cancel => {
                info!("Draft generation cancelled");
                return Err(DrafterError::Cancelled);
            }
            result = timeout(Duration::from_secs(self.timeout_secs), self.provider.complete(&prompt)) => {
                result.map_err(|_| DrafterError::Timeout(self.timeout_secs))??
            }
        };

        let (content, source_mapping) = parse_draft(&completion);
        debug!(
            "Draft has {} chars, {} mapped paragraph(s)",
            content.len(),
            source_mapping.len()
        );

        Ok(Draft {
            content,
            source_mapping,
            generated_at: chrono::Utc::now().to_rfc3339(),
        })
    }
}

fn trailing_tags_regex() -> &'static Regex {
    static TRAILING: OnceLock<Regex> = OnceLock::new();
    TRAILING.get_or_init(|| Regex::new(r"(?:\s*\[[^\[\]]+\])+\s*$").expect("static pattern"))
}

fn tag_regex() -> &'static Regex {
    static TAG: OnceLock<Regex> = OnceLock::new();
    TAG.get_or_init(|| Regex::new(r"\[([^\[\]]+)\]").expect("static pattern"))
}

/// Split a completion into article text and a paragraph source mapping
///
/// Blocks are separated by blank lines, and every heading line (starting
/// with `#`) is a block of its own. Headings are kept as they are and not
/// numbered. Every other block is a body
/// paragraph numbered `p1`, `p2`, ... in order; the run of bracketed source
/// ids at its end is removed from the text and recorded (lowercased, without
/// duplicates) under its number. Paragraphs without trailing ids are numbered
/// but absent from the mapping.
pub fn parse_draft(raw: &str) -> (String, BTreeMap<String, Vec<String>>) {
    let mut blocks: Vec<String> = Vec::new();
    let mut mapping = BTreeMap::new();
    let mut paragraph = 0usize;

    for block in split_blocks(raw) {
        if block.trim_start().starts_with('#') {
            blocks.push(block);
            continue;
        }

        paragraph += 1;
        let Some(found) = trailing_tags_regex().find(&block) else {
            blocks.push(block);
            continue;
        };

        let mut ids: Vec<String> = Vec::new();
        for caps in tag_regex().captures_iter(found.as_str()) {
            let id = caps[1].trim().to_lowercase();
            if !id.is_empty() && !ids.contains(&id) {
                ids.push(id);
            }
        }

        let text = block[..found.start()].trim_end().to_string();
        if !ids.is_empty() {
            mapping.insert(format!("p{}", paragraph), ids);
        }
        blocks.push(text);
    }

    (blocks.join("\n\n"), mapping)
}

fn split_blocks(raw: &str) -> Vec<String> {
    let mut blocks = Vec::new();
    let mut current: Vec<&str> = Vec::new();

    for line in raw.lines() {
        let is_heading = line.trim_start().starts_with('#');
        if (line.trim().is_empty() || is_heading) && !current.is_empty() {
            blocks.push(current.join("\n"));
            current.clear();
        }
        if is_heading {
            blocks.push(line.trim_end().to_string());
        } else if !line.trim().is_empty() {
            current.push(line.trim_end());
        }
    }
    if !current.is_empty() {
        blocks.push(current.join("\n"));
    }
    blocks
}
