//! Core data types for the Folio book generator.
//!
//! This crate provides the table-of-contents data model, the fence-stripping
//! tokenizer for raw model responses, the prompt templates, and the typed
//! progress events emitted during generation.

mod chapter;
mod extraction;
mod progress;
mod prompt;
mod toc;

pub use chapter::Chapter;
pub use extraction::strip_code_fence;
pub use progress::ProgressEvent;
pub use prompt::{default_toc_prompt, intro_prompt, subchapter_prompt};
pub use toc::TableOfContents;
