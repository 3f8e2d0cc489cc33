//! CLI argument definitions.

use clap::Parser;
use std::path::PathBuf;

/// Generate a complete book from a title.
#[derive(Parser, Debug)]
#[command(name = "folio", version, about)]
pub struct Cli {
    /// The title of the book to generate
    #[arg(long)]
    pub title: String,

    /// A specific prompt for generating the table of contents; if omitted,
    /// a default prompt is built from the title
    #[arg(long)]
    pub toc_prompt: Option<String>,

    /// The Gemini model to use; if not provided, uses ~/.model-gemini or
    /// falls back to the built-in default
    #[arg(long)]
    pub model: Option<String>,

    /// Path to the file containing the Gemini API key, consulted when no
    /// GEMINI_API_KEY or GOOGLE_API_KEY environment variable is set
    #[arg(long, default_value = "~/.api-gemini")]
    pub api_key_file: PathBuf,

    /// The directory to save the generated book files into
    #[arg(long, default_value = "books")]
    pub output_dir: PathBuf,

    /// Pause after TOC generation to allow manual editing of the JSON file
    /// before proceeding
    #[arg(long)]
    pub interactive_toc: bool,

    /// Display the current book content after TOC generation and before
    /// generating chapters
    #[arg(long)]
    pub browse_after_toc: bool,
}

impl Cli {
    /// Rejects blank values clap cannot catch on its own.
    pub fn validate(&self) -> Result<(), String> {
        if self.title.trim().is_empty() {
            return Err("Book title cannot be empty.".to_string());
        }
        if self.toc_prompt.as_deref().is_some_and(|p| p.trim().is_empty()) {
            return Err("TOC prompt cannot be empty if provided.".to_string());
        }
        if self.model.as_deref().is_some_and(|m| m.trim().is_empty()) {
            return Err("Model name cannot be empty if provided.".to_string());
        }
        Ok(())
    }
}
