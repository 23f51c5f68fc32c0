//! Trait definitions for external interactions
//!
//! These traits define the boundary between the editorial pipeline and the
//! remote language-model service. Implementations live in `quill-llm`.

use std::future::Future;

/// A backend that turns a prompt into raw completion text
///
/// Implemented by the infrastructure layer (quill-llm). One backend is
/// selected by deployment configuration; the pipeline never knows which
/// vendor answers.
pub trait CompletionProvider {
    /// Error type for completion calls
    type Error;

    /// Send `prompt` as a single user message and return the raw response text
    ///
    /// A response that carries no completion text yields an empty string
    /// rather than an error.
    fn complete(&self, prompt: &str) -> impl Future<Output = Result<String, Self::Error>> + Send;

    /// Model identifier used for the call, for logging and metadata
    fn model_name(&self) -> &str;
}
