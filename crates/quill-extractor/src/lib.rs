//! Quill Extractor
//!
//! Turns an interview transcript plus supporting sources into structured,
//! categorized, source-attributed key points for editorial review.
//!
//! # Architecture
//!
//! ```text
//! Transcript + Sources → PromptBuilder → CompletionProvider → parse_numbered_list → classify_line → KeyPoints
//! ```
//!
//! Each run is single-pass: it either returns every key point the model
//! listed (possibly none) or fails as a whole.
//!
//! # Example Usage
//!
//! ```no_run
//! use quill_extractor::{Extractor, ExtractorConfig, ExtractionRequest};
//! use quill_domain::Source;
//! use quill_llm::MockProvider;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let llm = MockProvider::new("1. Hiring algorithms showed bias against women. [Transcript]");
//! let extractor = Extractor::new(llm, ExtractorConfig::default());
//!
//! let request = ExtractionRequest::new(
//!     Some("Interview with Dr. Chen...".to_string()),
//!     vec![Source::ready("Source PDF", "The EU AI Act ...")],
//! );
//!
//! let result = extractor.extract(&request).await?;
//! for point in &result.key_points {
//!     println!("[{}] {} ({})", point.category, point.text, point.source_id);
//! }
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]

mod classifier;
mod confidence;
mod config;
mod error;
mod extractor;
mod parser;
mod prompt;
mod types;


pub use classifier::classify_line;
pub use confidence::{
    ConfidenceSource, FixedConfidence, UniformConfidence, CONFIDENCE_CEILING, CONFIDENCE_FLOOR,
};
pub use config::ExtractorConfig;
pub use error::{ErrorKind, ErrorResponse, ExtractorError};
pub use extractor::Extractor;
pub use parser::parse_numbered_list;
pub use prompt::{PromptBuilder, NO_SOURCES, NO_TRANSCRIPT};
pub use types::{
    ClassifiedPoint, ExtractionMetadata, ExtractionRequest, ExtractionResponse, ExtractionResult,
};
