//! File output error types.

/// Specific error conditions for book file output.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum WriterErrorKind {
    /// Failed to create the output directory
    CreateDir(String),
    /// Failed to write to the book file
    FileWrite {
        /// Path that failed
        path: String,
        /// Underlying I/O error message
        message: String,
    },
    /// Failed to read a saved TOC sidecar
    FileRead {
        /// Path that failed
        path: String,
        /// Underlying I/O error message
        message: String,
    },
}

impl std::fmt::Display for WriterErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            WriterErrorKind::CreateDir(msg) => {
                write!(f, "Failed to create output directory: {}", msg)
            }
            WriterErrorKind::FileWrite { path, message } => {
                write!(f, "Failed to write {}: {}", path, message)
            }
            WriterErrorKind::FileRead { path, message } => {
                write!(f, "Failed to read {}: {}", path, message)
            }
        }
    }
}

/// Error type for book file output operations.
#[derive(Debug, Clone)]
pub struct WriterError {
    /// The specific error condition
    pub kind: WriterErrorKind,
    /// Line number where the error occurred
    pub line: u32,
    /// Source file where the error occurred
    pub file: &'static str,
}

impl WriterError {
    /// Create a new WriterError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: WriterErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}

impl std::fmt::Display for WriterError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Writer Error: {} at line {} in {}",
            self.kind, self.line, self.file
        )
    }
}

impl std::error::Error for WriterError {}
