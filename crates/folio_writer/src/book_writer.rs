//! Book file writer.

use async_trait::async_trait;
use folio_core::{Chapter, TableOfContents};
use folio_error::{WriterError, WriterErrorKind};
use folio_interface::OutputSink;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::{debug, instrument};

/// Writes book content to markdown files under an output directory.
#[derive(Debug, Clone)]
pub struct BookWriter {
    output_dir: PathBuf,
}

impl BookWriter {
    /// Creates a writer, creating the output directory if needed.
    ///
    /// # Errors
    ///
    /// Returns [`WriterError`] when the directory cannot be created.
    pub fn new(output_dir: impl Into<PathBuf>) -> Result<Self, WriterError> {
        let output_dir = output_dir.into();
        std::fs::create_dir_all(&output_dir)
            .map_err(|e| WriterError::new(WriterErrorKind::CreateDir(e.to_string())))?;
        Ok(Self { output_dir })
    }

    /// Returns the output directory.
    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    fn append(&self, filepath: &Path, block: &str) -> Result<(), WriterError> {
        let mut file = OpenOptions::new()
            .append(true)
            .create(true)
            .open(filepath)
            .map_err(|e| file_write_error(filepath, e))?;
        file.write_all(block.as_bytes())
            .map_err(|e| file_write_error(filepath, e))
    }
}

fn file_write_error(path: &Path, e: std::io::Error) -> WriterError {
    WriterError::new(WriterErrorKind::FileWrite {
        path: path.display().to_string(),
        message: e.to_string(),
    })
}

/// Keeps alphanumerics, spaces, hyphens, and underscores; trims trailing
/// whitespace; spaces become underscores; lowercased.
fn sanitize_title(title: &str) -> String {
    title
        .chars()
        .filter(|c| c.is_alphanumeric() || matches!(c, ' ' | '-' | '_'))
        .collect::<String>()
        .trim_end()
        .replace(' ', "_")
        .to_lowercase()
}

#[async_trait]
impl OutputSink for BookWriter {
    fn filepath(&self, title: &str) -> PathBuf {
        self.output_dir.join(format!("{}.md", sanitize_title(title)))
    }

    #[instrument(skip(self, toc), fields(filepath = %filepath.display()))]
    async fn write_toc(
        &self,
        filepath: &Path,
        title: &str,
        toc: &TableOfContents,
    ) -> Result<(), WriterError> {
        let mut block = String::new();
        block.push_str(&format!("# {}\n\n", title));
        block.push_str("<a id='table-of-contents'></a>\n\n");
        block.push_str(&toc.to_markdown());

        std::fs::write(filepath, block).map_err(|e| file_write_error(filepath, e))?;
        debug!("Wrote top-level table of contents");
        Ok(())
    }

    #[instrument(
        skip(self, intro, chapter_toc),
        fields(filepath = %filepath.display(), chapter = %chapter.number())
    )]
    async fn write_chapter(
        &self,
        filepath: &Path,
        chapter: &Chapter,
        intro: &str,
        chapter_toc: &str,
    ) -> Result<(), WriterError> {
        let mut block = String::new();
        block.push_str(&format!("<a id='chapter-{}'></a>\n\n", chapter.number()));
        block.push_str(&format!(
            "## Chapter {}. {}\n\n",
            chapter.number(),
            chapter.title()
        ));
        block.push_str(&format!(
            "<a id='chapter-{}-contents'></a>\n\n",
            chapter.number()
        ));
        block.push_str("[Back to Main Table of Contents](#table-of-contents)\n\n");
        block.push_str(chapter_toc);
        block.push_str(&format!("{}\n\n", intro));

        self.append(filepath, &block)?;
        debug!("Wrote chapter heading and introduction");
        Ok(())
    }

    #[instrument(
        skip(self, content),
        fields(filepath = %filepath.display(), chapter = %chapter.number(), subchapter = subchapter_num)
    )]
    async fn write_subchapter(
        &self,
        filepath: &Path,
        chapter: &Chapter,
        subchapter_num: usize,
        title: &str,
        content: &str,
    ) -> Result<(), WriterError> {
        let mut block = String::new();
        block.push_str(&format!(
            "<a id='chapter-{}-{}'></a>\n\n",
            chapter.number(),
            subchapter_num
        ));
        block.push_str(&format!(
            "### {}.{}. {}\n\n",
            chapter.number(),
            subchapter_num,
            title
        ));
        block.push_str(&format!(
            "[Back to Chapter Contents](#chapter-{}-contents)\n",
            chapter.number()
        ));
        block.push_str("[Back to Main Table of Contents](#table-of-contents)\n\n");
        block.push_str(&format!("{}\n\n", content));

        self.append(filepath, &block)?;
        debug!("Wrote subchapter");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_core::TableOfContents;
    use folio_interface::OutputSink;

    fn sample_toc() -> TableOfContents {
        TableOfContents::parse(r#"[{"title": "Ch1", "subchapters": ["S1"]}]"#)
            .expect("valid TOC")
    }

    #[test]
    fn filepath_sanitizes_title() {
        let dir = tempfile::tempdir().expect("temp dir");
        let writer = BookWriter::new(dir.path()).expect("writer");

        let path = writer.filepath("My Book: A Story? ");
        assert_eq!(
            path.file_name().and_then(|n| n.to_str()),
            Some("my_book_a_story.md")
        );
    }

    #[test]
    fn filepath_keeps_hyphens_and_underscores() {
        let dir = tempfile::tempdir().expect("temp dir");
        let writer = BookWriter::new(dir.path()).expect("writer");

        let path = writer.filepath("re-usable_Title 2");
        assert_eq!(
            path.file_name().and_then(|n| n.to_str()),
            Some("re-usable_title_2.md")
        );
    }

    #[tokio::test]
    async fn toc_write_overwrites_previous_content() {
        let dir = tempfile::tempdir().expect("temp dir");
        let writer = BookWriter::new(dir.path()).expect("writer");
        let toc = sample_toc();
        let path = writer.filepath("My Book");

        std::fs::write(&path, "stale content").expect("seed file");
        writer.write_toc(&path, "My Book", &toc).await.expect("write");

        let content = std::fs::read_to_string(&path).expect("read back");
        assert!(content.starts_with("# My Book\n\n<a id='table-of-contents'></a>\n\n"));
        assert!(content.contains("1. [Ch1](#chapter-1)"));
        assert!(!content.contains("stale content"));
    }

    #[tokio::test]
    async fn chapter_and_subchapter_writes_append() {
        let dir = tempfile::tempdir().expect("temp dir");
        let writer = BookWriter::new(dir.path()).expect("writer");
        let toc = sample_toc();
        let chapter = &toc.chapters()[0];
        let path = writer.filepath("My Book");

        writer.write_toc(&path, "My Book", &toc).await.expect("toc");
        writer
            .write_chapter(&path, chapter, "Intro text", &toc.chapter_toc(chapter))
            .await
            .expect("chapter");
        writer
            .write_subchapter(&path, chapter, 1, "S1", "Body text")
            .await
            .expect("subchapter");

        let content = std::fs::read_to_string(&path).expect("read back");
        let toc_at = content.find("<a id='table-of-contents'></a>").expect("toc anchor");
        let chapter_at = content.find("<a id='chapter-1'></a>").expect("chapter anchor");
        let sub_at = content.find("<a id='chapter-1-1'></a>").expect("subchapter anchor");
        assert!(toc_at < chapter_at && chapter_at < sub_at);

        assert!(content.contains("## Chapter 1. Ch1\n\n"));
        assert!(content.contains("### Chapter 1 Contents\n"));
        assert!(content.contains("### 1.1. S1\n\n"));
        assert!(content.contains("[Back to Chapter Contents](#chapter-1-contents)\n"));
        assert!(content.contains("Intro text\n\n"));
        assert!(content.contains("Body text\n\n"));
    }

    #[test]
    fn new_creates_output_directory() {
        let dir = tempfile::tempdir().expect("temp dir");
        let nested = dir.path().join("books").join("drafts");

        let writer = BookWriter::new(&nested).expect("writer");
        assert!(nested.is_dir());
        assert_eq!(writer.output_dir(), nested);
    }
}
