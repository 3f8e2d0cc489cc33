//! Gemini API client, configuration, and content source.

mod client;
mod config;
mod dto;
mod source;

pub use client::GeminiClient;
pub use config::{DEFAULT_GEMINI_MODEL, GeminiConfig};
pub use source::GeminiSource;
