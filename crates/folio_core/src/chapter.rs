//! Chapter value type.

use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// A chapter in the book: a title, its ordered subchapter titles, and the
/// 1-based chapter number.
///
/// The number is assigned by the containing [`crate::TableOfContents`] as the
/// chapter's position in the sequence. It is never taken from parsed input,
/// except when deliberately restored through the edit round trip.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters)]
pub struct Chapter {
    /// Chapter title
    title: String,
    /// Ordered subchapter titles; order defines generation and display order
    subchapters: Vec<String>,
    /// 1-based position in the chapter sequence
    number: u32,
}

impl Chapter {
    /// Creates a new chapter.
    pub fn new(title: impl Into<String>, subchapters: Vec<String>, number: u32) -> Self {
        Self {
            title: title.into(),
            subchapters,
            number,
        }
    }
}
