//! Markdown file output for the Folio book generator.
//!
//! [`BookWriter`] persists finished text blocks into a single markdown file
//! per book: the top-level contents block overwrites the file, chapter and
//! subchapter blocks append in generation order, and every block carries the
//! anchors that the rendered contents links resolve against.

mod book_writer;

pub use book_writer::BookWriter;
