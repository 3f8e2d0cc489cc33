//! Table-of-contents error types.

/// Specific failure conditions when parsing a raw TOC response.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum TocParseErrorKind {
    /// The response is not valid JSON
    InvalidJson(String),
    /// The top-level JSON value is not an array
    NotAnArray,
    /// A subchapter entry is not a JSON string
    SubchapterNotString {
        /// 0-based index of the offending chapter in the input array
        chapter_index: usize,
        /// 0-based index of the offending subchapter within its chapter
        subchapter_index: usize,
    },
}

impl std::fmt::Display for TocParseErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TocParseErrorKind::InvalidJson(msg) => write!(f, "Invalid TOC format: {}", msg),
            TocParseErrorKind::NotAnArray => {
                write!(f, "TOC must be a JSON array of chapter objects")
            }
            TocParseErrorKind::SubchapterNotString {
                chapter_index,
                subchapter_index,
            } => write!(
                f,
                "Subchapter {} of chapter {} is not a string",
                subchapter_index, chapter_index
            ),
        }
    }
}

/// Error type for initial TOC parsing.
///
/// # Examples
///
/// ```
/// use folio_error::{TocParseError, TocParseErrorKind};
///
/// let err = TocParseError::new(TocParseErrorKind::NotAnArray);
/// assert!(format!("{}", err).contains("array"));
/// ```
#[derive(Debug, Clone)]
pub struct TocParseError {
    /// The specific failure condition
    pub kind: TocParseErrorKind,
    /// Line number where the error occurred
    pub line: u32,
    /// Source file where the error occurred
    pub file: &'static str,
}

impl TocParseError {
    /// Create a new TocParseError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: TocParseErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}

impl std::fmt::Display for TocParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "TOC Parse Error: {} at line {} in {}",
            self.kind, self.line, self.file
        )
    }
}

impl std::error::Error for TocParseError {}

/// Specific failure conditions when reloading an edited TOC form.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum TocUpdateErrorKind {
    /// The edited form is not valid JSON
    InvalidJson(String),
    /// The top-level JSON value is not an array
    NotAnArray,
    /// A subchapter entry is not a JSON string
    SubchapterNotString {
        /// 0-based index of the offending chapter in the edited array
        chapter_index: usize,
        /// 0-based index of the offending subchapter within its chapter
        subchapter_index: usize,
    },
}

impl std::fmt::Display for TocUpdateErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TocUpdateErrorKind::InvalidJson(msg) => {
                write!(f, "Invalid TOC JSON format: {}", msg)
            }
            TocUpdateErrorKind::NotAnArray => {
                write!(f, "Edited TOC must be a JSON array of chapter objects")
            }
            TocUpdateErrorKind::SubchapterNotString {
                chapter_index,
                subchapter_index,
            } => write!(
                f,
                "Subchapter {} of chapter {} is not a string",
                subchapter_index, chapter_index
            ),
        }
    }
}

/// Error type for the TOC edit round trip.
#[derive(Debug, Clone)]
pub struct TocUpdateError {
    /// The specific failure condition
    pub kind: TocUpdateErrorKind,
    /// Line number where the error occurred
    pub line: u32,
    /// Source file where the error occurred
    pub file: &'static str,
}

impl TocUpdateError {
    /// Create a new TocUpdateError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: TocUpdateErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}

impl std::fmt::Display for TocUpdateError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "TOC Update Error: {} at line {} in {}",
            self.kind, self.line, self.file
        )
    }
}

impl std::error::Error for TocUpdateError {}
