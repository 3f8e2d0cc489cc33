//! Generation session orchestration.

use folio_core::{ProgressEvent, TableOfContents, intro_prompt, subchapter_prompt};
use folio_error::{
    FolioResult, PreconditionError, WriterError, WriterErrorKind,
};
use folio_interface::{ContentSource, OutputSink, ProgressSink};
use std::path::{Path, PathBuf};
use tracing::{debug, error, info, instrument, warn};

/// Coordinates one book generation run.
///
/// Owns the session state: the book title, the table of contents once the
/// TOC phase has completed, and the output locator derived from the title.
/// Strictly sequential; one outstanding generation call at a time, one
/// chapter finished before the next starts.
pub struct BookGenerator<S, W> {
    source: S,
    writer: W,
    progress: Box<dyn ProgressSink>,
    book_title: Option<String>,
    toc: Option<TableOfContents>,
    filepath: Option<PathBuf>,
}

impl<S, W> BookGenerator<S, W>
where
    S: ContentSource,
    W: OutputSink,
{
    /// Creates a generator with no progress reporting.
    pub fn new(source: S, writer: W) -> Self {
        Self {
            source,
            writer,
            progress: Box::new(|_event: ProgressEvent| {}),
            book_title: None,
            toc: None,
            filepath: None,
        }
    }

    /// Attaches a progress sink.
    pub fn with_progress(mut self, progress: Box<dyn ProgressSink>) -> Self {
        self.progress = progress;
        self
    }

    /// Returns the parsed table of contents, if the TOC phase has completed.
    pub fn toc(&self) -> Option<&TableOfContents> {
        self.toc.as_ref()
    }

    /// Returns the output locator, if the TOC phase has completed.
    pub fn filepath(&self) -> Option<&Path> {
        self.filepath.as_ref().map(PathBuf::as_path)
    }

    /// Generates and parses the table of contents.
    ///
    /// Derives the output locator from the title and writes the rendered
    /// top-level contents block. On generation or parse failure the session
    /// exposes no table of contents.
    ///
    /// # Errors
    ///
    /// Returns the generation or parse failure; either also surfaces as a
    /// [`ProgressEvent::Failed`] on the progress channel.
    #[instrument(skip(self, toc_prompt), fields(title = %title))]
    pub async fn generate_toc(
        &mut self,
        title: &str,
        toc_prompt: &str,
    ) -> FolioResult<&TableOfContents> {
        self.book_title = Some(title.to_string());

        let result: FolioResult<TableOfContents> = async {
            let toc_content = self.source.generate(toc_prompt).await?;
            Ok(TableOfContents::parse(&toc_content)?)
        }
        .await;

        let toc = match result {
            Ok(toc) => toc,
            Err(e) => {
                error!(error = %e, "Failed to generate table of contents");
                self.progress.emit(ProgressEvent::Failed {
                    message: e.to_string(),
                });
                return Err(e);
            }
        };

        let filepath = self.writer.filepath(title);
        self.writer
            .write_toc(&filepath, title, &toc)
            .await
            .map_err(|e| self.report_write_failure(e))?;

        info!(
            chapters = toc.chapters().len(),
            filepath = %filepath.display(),
            "Table of contents generated"
        );
        self.filepath = Some(filepath);
        self.toc = Some(toc);
        Ok(self.toc.as_ref().expect("toc was just assigned"))
    }

    /// Saves the current table of contents to its JSON sidecar.
    ///
    /// Returns the sidecar path, or `None` when no TOC exists yet.
    ///
    /// # Errors
    ///
    /// Returns [`WriterError`] when the sidecar cannot be written.
    pub fn save_toc(&self) -> FolioResult<Option<PathBuf>> {
        let (Some(toc), Some(filepath)) = (&self.toc, &self.filepath) else {
            return Ok(None);
        };

        let json_path = filepath.with_extension("json");
        std::fs::write(&json_path, toc.to_json()).map_err(|e| {
            WriterError::new(WriterErrorKind::FileWrite {
                path: json_path.display().to_string(),
                message: e.to_string(),
            })
        })?;
        debug!(path = %json_path.display(), "Saved table of contents sidecar");
        Ok(Some(json_path))
    }

    /// Reloads the table of contents from its JSON sidecar.
    ///
    /// When the sidecar exists and parses, the chapter sequence is replaced
    /// wholesale and the top-level contents block re-emitted; numbers in the
    /// edited form are trusted as written. Returns `true` when a reload was
    /// applied.
    ///
    /// A missing sidecar or a malformed edit is logged but does not abort
    /// the run: the session continues with the previous TOC and `false` is
    /// returned.
    ///
    /// # Errors
    ///
    /// Returns a [`WriterError`] when re-emitting the contents block fails.
    #[instrument(skip(self))]
    pub async fn load_toc(&mut self) -> FolioResult<bool> {
        let (Some(toc), Some(filepath)) = (self.toc.as_mut(), self.filepath.as_ref()) else {
            warn!("No generation session to reload a table of contents into");
            return Ok(false);
        };

        let json_path = filepath.with_extension("json");
        let edited = match std::fs::read_to_string(&json_path) {
            Ok(edited) => edited,
            Err(e) => {
                warn!(
                    path = %json_path.display(),
                    error = %e,
                    "Failed to read saved TOC, continuing with previous TOC"
                );
                return Ok(false);
            }
        };

        if let Err(e) = toc.update_from_json(&edited) {
            warn!(error = %e, "Failed to reload edited TOC, continuing with previous TOC");
            return Ok(false);
        }

        // Numbers and order may have changed; re-emit the contents block.
        let title = self.book_title.clone().expect("title set with toc");
        let filepath = self.filepath.clone().expect("filepath set with toc");
        let toc = self.toc.clone().expect("toc still present");
        self.writer
            .write_toc(&filepath, &title, &toc)
            .await
            .map_err(|e| self.report_write_failure(e))?;

        info!(path = %json_path.display(), "Reloaded table of contents from edited form");
        Ok(true)
    }

    /// Suspends for a manual TOC edit, then reloads the edited form.
    ///
    /// Serializes the current TOC to its JSON sidecar, invokes `confirm`
    /// with the sidecar path — the only point where the run waits on
    /// something outside its own control flow — and then reloads the file
    /// through [`BookGenerator::load_toc`], with its leniency. Returns
    /// `true` when the edited form was applied.
    ///
    /// # Errors
    ///
    /// Returns [`PreconditionError`] when no TOC exists yet, or a
    /// [`WriterError`] when re-emitting the contents block fails.
    #[instrument(skip(self, confirm))]
    pub async fn pause_for_edit<F>(&mut self, confirm: F) -> FolioResult<bool>
    where
        F: FnOnce(&Path),
    {
        let json_path = self.save_toc()?.ok_or_else(|| {
            PreconditionError::new("Table of Contents not generated. Call generate_toc() first.")
        })?;

        confirm(&json_path);
        self.load_toc().await
    }

    /// Generates the entire book.
    ///
    /// Iterates chapters in order, generating each introduction and then
    /// each subchapter body, forwarding every finished block to the output
    /// sink and emitting a progress event per unit. A generation failure
    /// aborts the whole run: a [`ProgressEvent::Failed`] is emitted and
    /// `Ok(None)` is returned. Blocks already written stay written.
    ///
    /// # Errors
    ///
    /// Returns [`PreconditionError`] when called before a TOC exists, or a
    /// [`WriterError`] when a finished block cannot be persisted.
    #[instrument(skip(self))]
    pub async fn generate_book(&mut self) -> FolioResult<Option<PathBuf>> {
        let (Some(toc), Some(filepath), Some(book_title)) =
            (self.toc.clone(), self.filepath.clone(), self.book_title.clone())
        else {
            return Err(PreconditionError::new(
                "Table of Contents not generated. Call generate_toc() first.",
            )
            .into());
        };

        let total_chapters = toc.chapters().len();
        let total_units: usize = toc
            .chapters()
            .iter()
            .map(|chapter| 1 + chapter.subchapters().len())
            .sum();
        let mut completed = 0;

        self.progress.emit(ProgressEvent::Started {
            chapters: total_chapters,
            units: total_units,
        });
        info!(
            chapters = total_chapters,
            units = total_units,
            "Starting book generation"
        );

        for chapter in toc.chapters() {
            debug!(chapter = %chapter.number(), title = %chapter.title(), "Generating chapter");

            let intro = match self.source.generate(&intro_prompt(&book_title, chapter)).await {
                Ok(intro) => intro,
                Err(e) => return self.abort_run(e.into()),
            };
            self.writer
                .write_chapter(&filepath, chapter, &intro, &toc.chapter_toc(chapter))
                .await
                .map_err(|e| self.report_write_failure(e))?;

            completed += 1;
            self.progress.emit(ProgressEvent::UnitCompleted {
                completed,
                total: total_units,
                label: format!(
                    "Chapter {}/{} introduction: {}",
                    chapter.number(),
                    total_chapters,
                    chapter.title()
                ),
            });

            for (idx, subchapter_title) in chapter.subchapters().iter().enumerate() {
                let subchapter_num = idx + 1;
                let prompt =
                    subchapter_prompt(&book_title, chapter, subchapter_num, subchapter_title);
                let content = match self.source.generate(&prompt).await {
                    Ok(content) => content,
                    Err(e) => return self.abort_run(e.into()),
                };
                self.writer
                    .write_subchapter(&filepath, chapter, subchapter_num, subchapter_title, &content)
                    .await
                    .map_err(|e| self.report_write_failure(e))?;

                completed += 1;
                self.progress.emit(ProgressEvent::UnitCompleted {
                    completed,
                    total: total_units,
                    label: format!(
                        "Subchapter {}.{}: {}",
                        chapter.number(),
                        subchapter_num,
                        subchapter_title
                    ),
                });
            }

            self.progress.emit(ProgressEvent::SectionCompleted {
                chapter: *chapter.number(),
                title: chapter.title().clone(),
                completed,
                total: total_units,
            });
        }

        self.progress.emit(ProgressEvent::Finished);
        info!(filepath = %filepath.display(), "Book generation completed");
        Ok(Some(filepath))
    }

    /// Aborts the run on a generation failure: reports it and returns the
    /// no-completed-output sentinel instead of a partial result path.
    fn abort_run(&mut self, e: folio_error::FolioError) -> FolioResult<Option<PathBuf>> {
        error!(error = %e, "Book generation failed");
        self.progress.emit(ProgressEvent::Failed {
            message: e.to_string(),
        });
        Ok(None)
    }

    fn report_write_failure(&mut self, e: WriterError) -> WriterError {
        error!(error = %e, "Failed to write finished block");
        self.progress.emit(ProgressEvent::Failed {
            message: e.to_string(),
        });
        e
    }
}
