//! Core Extractor implementation

use crate::classifier::classify_line;
use crate::confidence::{ConfidenceSource, UniformConfidence};
use crate::config::ExtractorConfig;
use crate::error::ExtractorError;
use crate::parser::parse_numbered_list;
use crate::prompt::PromptBuilder;
use crate::types::{ExtractionMetadata, ExtractionRequest, ExtractionResult};
use quill_domain::traits::CompletionProvider;
use quill_domain::{KeyPoint, KeyPointId};
use std::future::{self, Future};
use std::sync::Arc;
use std::time::{Instant, SystemTime, UNIX_EPOCH};
use tokio::time::timeout;
use tracing::{debug, info};

/// The Extractor turns a transcript and its sources into reviewable key points
///
/// Each call is independent: the extractor holds no state between runs and
/// may be shared across concurrent tasks.
pub struct Extractor<P>
where
    P: CompletionProvider,
{
    provider: P,
    config: ExtractorConfig,
    confidence: Arc<dyn ConfidenceSource>,
}

impl<P> Extractor<P>
where
    P: CompletionProvider + Sync,
    ExtractorError: From<P::Error>,
{
    /// Create a new Extractor
    pub fn new(provider: P, config: ExtractorConfig) -> Self {
        Self {
            provider,
            config,
            confidence: Arc::new(UniformConfidence),
        }
    }

    /// Use a different source of confidence values
    pub fn with_confidence_source(mut self, source: impl ConfidenceSource + 'static) -> Self {
        self.confidence = Arc::new(source);
        self
    }

    /// The completion provider
    pub fn provider(&self) -> &P {
        &self.provider
    }

    /// The active configuration
    pub fn config(&self) -> &ExtractorConfig {
        &self.config
    }

    /// Extract key points
    ///
    /// # Errors
    ///
    /// - [`ExtractorError::Input`] when there is no transcript and no usable
    ///   source, or the input is too large; the provider is not called
    /// - [`ExtractorError::Configuration`], [`ExtractorError::Upstream`] and
    ///   [`ExtractorError::Transport`] from the provider, unchanged
    /// - [`ExtractorError::Timeout`] when the provider exceeds the configured bound
    ///
    /// A completion without numbered lines is a success with no key points.
    pub async fn extract(
        &self,
        request: &ExtractionRequest,
    ) -> Result<ExtractionResult, ExtractorError> {
        self.extract_until(request, future::pending::<()>()).await
    }

    /// Extract key points, giving up when `cancel` resolves first
    ///
    /// If `cancel` completes while the completion call is in flight the call
    /// is dropped and [`ExtractorError::Cancelled`] is returned; no parsing
    /// happens and no partial result is produced.
    pub async fn extract_until<F>(
        &self,
        request: &ExtractionRequest,
        cancel: F,
    ) -> Result<ExtractionResult, ExtractorError>
    where
        F: Future<Output = ()>,
    {
        let start_time = Instant::now();

        self.config.validate().map_err(ExtractorError::Config)?;
        self.check_input(request)?;

        let prompt = PromptBuilder::new(request.transcript_text(), &request.sources).build();

        info!(
            "Starting extraction with {} usable source(s), prompt length {} chars",
            request.usable_sources().count(),
            prompt.len()
        );

        let completion = tokio::select! {
            biased;
            _ = cancel => {
                info!("Extraction cancelled while waiting on the completion call");
                return Err(ExtractorError::Cancelled);
            }
            result = timeout(self.config.extraction_timeout(), self.provider.complete(&prompt)) => {
                result.map_err(|_| ExtractorError::Timeout(self.config.extraction_timeout_secs))??
            }
        };

        debug!("Completion length: {} chars", completion.len());

        let lines = parse_numbered_list(&completion);
        debug!("Parsed {} numbered line(s)", lines.len());

        let key_points: Vec<KeyPoint> = lines
            .iter()
            .map(|line| {
                let classified = classify_line(line);
                KeyPoint::new(
                    KeyPointId::new(),
                    classified.text,
                    classified.source_id,
                    classified.category,
                    self.confidence.sample(),
                )
            })
            .collect();

        info!("Extraction complete: {} key point(s)", key_points.len());

        let metadata = ExtractionMetadata {
            model_name: self.provider.model_name().to_string(),
            prompt_chars: prompt.chars().count(),
            response_chars: completion.chars().count(),
            lines_parsed: lines.len(),
            processing_time_ms: start_time.elapsed().as_millis() as u64,
            timestamp: SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .map(|d| d.as_secs())
                .unwrap_or_default(),
        };

        Ok(ExtractionResult {
            key_points,
            metadata,
        })
    }

    fn check_input(&self, request: &ExtractionRequest) -> Result<(), ExtractorError> {
        if !request.has_content() {
            return Err(ExtractorError::Input(
                "no content provided: add a transcript or sources first".to_string(),
            ));
        }

        let chars = request.input_chars();
        if chars > self.config.max_input_chars {
            return Err(ExtractorError::Input(format!(
                "input too long: {} chars (max: {})",
                chars, self.config.max_input_chars
            )));
        }
        Ok(())
    }
}
