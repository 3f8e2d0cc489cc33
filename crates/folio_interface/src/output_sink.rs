//! Output sink trait for finished text blocks.

use async_trait::async_trait;
use folio_core::{Chapter, TableOfContents};
use folio_error::WriterError;
use std::path::{Path, PathBuf};

/// Receives finished text blocks keyed by position and persists them.
///
/// The locator is derived once per session from the book title; the
/// top-level contents block overwrites it while chapter and subchapter
/// blocks append. Each write is atomic from the orchestrator's point of
/// view.
#[async_trait]
pub trait OutputSink: Send + Sync {
    /// Derives the output locator for a book title.
    fn filepath(&self, title: &str) -> PathBuf;

    /// Writes the book heading and top-level contents block, replacing any
    /// previous content at the locator.
    async fn write_toc(
        &self,
        filepath: &Path,
        title: &str,
        toc: &TableOfContents,
    ) -> Result<(), WriterError>;

    /// Appends a chapter heading, its local contents block, and its
    /// introduction.
    async fn write_chapter(
        &self,
        filepath: &Path,
        chapter: &Chapter,
        intro: &str,
        chapter_toc: &str,
    ) -> Result<(), WriterError>;

    /// Appends a subchapter heading and its body.
    ///
    /// `subchapter_num` is the 1-based position within the chapter.
    async fn write_subchapter(
        &self,
        filepath: &Path,
        chapter: &Chapter,
        subchapter_num: usize,
        title: &str,
        content: &str,
    ) -> Result<(), WriterError>;
}
