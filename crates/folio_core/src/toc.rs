//! Table-of-contents parsing, rendering, and the edit round trip.

use crate::{Chapter, strip_code_fence};
use folio_error::{
    TocParseError, TocParseErrorKind, TocUpdateError, TocUpdateErrorKind,
};
use serde::Deserialize;
use serde_json::Value as JsonValue;
use tracing::{debug, instrument};

/// Placeholder for chapters whose parsed title is blank or missing.
const UNTITLED_CHAPTER: &str = "Untitled Chapter";

/// Chapter object as it appears on the wire: `title` and `subchapters` from
/// the model, `number` only present in the edited serialization.
#[derive(Debug, Deserialize)]
struct ChapterRecord {
    #[serde(default)]
    title: String,
    #[serde(default)]
    subchapters: Vec<JsonValue>,
    #[serde(default)]
    number: u32,
}

/// The ordered chapter tree driving book generation.
///
/// Created from a raw model response ([`TableOfContents::parse`]) or updated
/// wholesale from a previously serialized form
/// ([`TableOfContents::update_from_json`]). After any mutation through
/// `parse`, chapter numbers form a contiguous 1..N run matching sequence
/// position; the edit round trip instead trusts the numbers a human wrote.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableOfContents {
    chapters: Vec<Chapter>,
}

impl TableOfContents {
    /// Parses a raw model response into a table of contents.
    ///
    /// The response may be wrapped in a markdown code fence; the payload must
    /// be a JSON array of `{title, subchapters}` objects. Blank titles get a
    /// placeholder, missing subchapter lists default to empty, and chapter
    /// numbers are assigned 1..N from sequence position regardless of any
    /// `number` field in the input.
    ///
    /// # Errors
    ///
    /// Returns [`TocParseError`] when the payload is not valid JSON, is not
    /// an array, or contains a non-string subchapter entry. No partially
    /// parsed value is ever produced.
    #[instrument(skip(content), fields(response_len = content.len()))]
    pub fn parse(content: &str) -> Result<Self, TocParseError> {
        let payload = strip_code_fence(content);

        let value: JsonValue = serde_json::from_str(payload)
            .map_err(|e| TocParseError::new(TocParseErrorKind::InvalidJson(e.to_string())))?;
        if !value.is_array() {
            return Err(TocParseError::new(TocParseErrorKind::NotAnArray));
        }

        let records: Vec<ChapterRecord> = serde_json::from_value(value)
            .map_err(|e| TocParseError::new(TocParseErrorKind::InvalidJson(e.to_string())))?;

        let mut chapters = Vec::with_capacity(records.len());
        for (chapter_index, record) in records.into_iter().enumerate() {
            let subchapters =
                validate_subchapters(record.subchapters, chapter_index).map_err(
                    |(chapter_index, subchapter_index)| {
                        TocParseError::new(TocParseErrorKind::SubchapterNotString {
                            chapter_index,
                            subchapter_index,
                        })
                    },
                )?;
            // Parse always renumbers; any number in the input is ignored.
            chapters.push(Chapter::new(
                normalize_title(record.title),
                subchapters,
                (chapter_index + 1) as u32,
            ));
        }

        debug!(chapter_count = chapters.len(), "Parsed table of contents");
        Ok(Self { chapters })
    }

    /// Returns the ordered chapter sequence.
    pub fn chapters(&self) -> &[Chapter] {
        &self.chapters
    }

    /// Renders the top-level contents block as markdown.
    ///
    /// One numbered line per chapter linking to `#chapter-<n>`, one indented
    /// bullet per subchapter linking to `#chapter-<n>-<i>`. Numbering always
    /// reflects the current chapter numbers and 1-based subchapter positions.
    pub fn to_markdown(&self) -> String {
        let mut lines = vec!["# Table of Contents\n".to_string()];
        for chapter in &self.chapters {
            lines.push(format!(
                "{}. [{}](#chapter-{})",
                chapter.number(),
                chapter.title(),
                chapter.number()
            ));
            for (idx, subchapter) in chapter.subchapters().iter().enumerate() {
                lines.push(format!(
                    "    * [{}.{}. {}](#chapter-{}-{})",
                    chapter.number(),
                    idx + 1,
                    subchapter,
                    chapter.number(),
                    idx + 1
                ));
            }
        }
        lines.join("\n") + "\n\n"
    }

    /// Renders the contents block for a single chapter.
    pub fn chapter_toc(&self, chapter: &Chapter) -> String {
        let mut lines = vec![format!("### Chapter {} Contents\n", chapter.number())];
        lines.push(format!(
            "{}. [{}](#chapter-{})",
            chapter.number(),
            chapter.title(),
            chapter.number()
        ));
        for (idx, subchapter) in chapter.subchapters().iter().enumerate() {
            lines.push(format!(
                "    * [{}.{}. {}](#chapter-{}-{})",
                chapter.number(),
                idx + 1,
                subchapter,
                chapter.number(),
                idx + 1
            ));
        }
        lines.join("\n") + "\n\n"
    }

    /// Serializes the chapter sequence to the human-editable JSON form.
    pub fn to_json(&self) -> String {
        serde_json::to_string_pretty(&self.chapters)
            .expect("chapter sequence serializes to JSON")
    }

    /// Replaces the chapter sequence with the parsed contents of an edited
    /// JSON form.
    ///
    /// Unlike [`TableOfContents::parse`] this trusts and preserves any
    /// `number` field present in the edited form (missing numbers default to
    /// zero), so a human can reorder or renumber chapters deliberately.
    ///
    /// # Errors
    ///
    /// Returns [`TocUpdateError`] when the edited form is malformed; the
    /// previous chapter sequence is left intact.
    #[instrument(skip(self, json_data))]
    pub fn update_from_json(&mut self, json_data: &str) -> Result<(), TocUpdateError> {
        let value: JsonValue = serde_json::from_str(json_data)
            .map_err(|e| TocUpdateError::new(TocUpdateErrorKind::InvalidJson(e.to_string())))?;
        if !value.is_array() {
            return Err(TocUpdateError::new(TocUpdateErrorKind::NotAnArray));
        }

        let records: Vec<ChapterRecord> = serde_json::from_value(value)
            .map_err(|e| TocUpdateError::new(TocUpdateErrorKind::InvalidJson(e.to_string())))?;

        // Parse everything before touching state; the update is all-or-nothing.
        let mut chapters = Vec::with_capacity(records.len());
        for (chapter_index, record) in records.into_iter().enumerate() {
            let subchapters =
                validate_subchapters(record.subchapters, chapter_index).map_err(
                    |(chapter_index, subchapter_index)| {
                        TocUpdateError::new(TocUpdateErrorKind::SubchapterNotString {
                            chapter_index,
                            subchapter_index,
                        })
                    },
                )?;
            chapters.push(Chapter::new(
                normalize_title(record.title),
                subchapters,
                record.number,
            ));
        }

        debug!(
            chapter_count = chapters.len(),
            "Replaced table of contents from edited form"
        );
        self.chapters = chapters;
        Ok(())
    }
}

fn normalize_title(title: String) -> String {
    if title.trim().is_empty() {
        UNTITLED_CHAPTER.to_string()
    } else {
        title
    }
}

/// Checks every subchapter value is a string; returns the offending
/// coordinates otherwise.
fn validate_subchapters(
    values: Vec<JsonValue>,
    chapter_index: usize,
) -> Result<Vec<String>, (usize, usize)> {
    let mut subchapters = Vec::with_capacity(values.len());
    for (subchapter_index, value) in values.into_iter().enumerate() {
        match value {
            JsonValue::String(s) => subchapters.push(s),
            _ => return Err((chapter_index, subchapter_index)),
        }
    }
    Ok(subchapters)
}
