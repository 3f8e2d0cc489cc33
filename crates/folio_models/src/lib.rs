//! Gemini provider integration for the Folio book generator.
//!
//! Provides the reqwest-based Gemini client, credential and model
//! resolution, and the bounded-retry [`folio_interface::ContentSource`]
//! implementation the orchestrator consumes.

mod gemini;
mod retry;

pub use gemini::{GeminiClient, GeminiConfig, GeminiSource, DEFAULT_GEMINI_MODEL};
pub use retry::{RetryConfig, retry_with_backoff};
