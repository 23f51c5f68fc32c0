//! Quill Domain Layer
//!
//! Core data model for the editorial workflow: the sources an editor
//! supplies, the key points extracted from them, and the project that ties
//! a transcript, its sources, the reviewed key points and the final draft
//! together.
//!
//! ## Key Concepts
//!
//! - **Source**: An externally supplied document (web article, PDF, video
//!   transcript). Only sources that are `Ready` and carry content take part
//!   in extraction.
//! - **Key point**: A single categorized, source-attributed claim produced by
//!   one extraction run. Approval is a human action and always starts out
//!   `false`.
//! - **Project**: The working document the editor moves through the
//!   transcript → sources → key points → draft workflow.
//!
//! ## Architecture
//!
//! This crate holds no I/O. Trait definitions for the remote completion
//! service live in [`traits`]; implementations live in `quill-llm`.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod category;
pub mod key_point;
pub mod project;
pub mod source;
pub mod traits;

// Re-exports for convenience
pub use category::Category;
pub use key_point::{KeyPoint, KeyPointId, TRANSCRIPT_SOURCE_ID};
pub use project::{Draft, Project, StoryDirection};
pub use source::{Source, SourceKind, SourceStatus};
pub use traits::CompletionProvider;
