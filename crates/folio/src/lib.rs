//! Folio generates complete books with an LLM: a table of contents first,
//! then an introduction per chapter and a body per subchapter, all appended
//! to a single markdown file with stable navigation anchors.
//!
//! This facade re-exports the member crates so applications can depend on
//! `folio` alone.

pub mod cli;

pub use folio_core::{
    Chapter, ProgressEvent, TableOfContents, default_toc_prompt, intro_prompt, strip_code_fence,
    subchapter_prompt,
};
pub use folio_error::{FolioError, FolioErrorKind, FolioResult};
pub use folio_generator::BookGenerator;
pub use folio_interface::{ContentSource, OutputSink, ProgressSink};
pub use folio_models::{
    DEFAULT_GEMINI_MODEL, GeminiClient, GeminiConfig, GeminiSource, RetryConfig,
};
pub use folio_writer::BookWriter;
