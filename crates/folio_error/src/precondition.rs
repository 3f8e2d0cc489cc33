//! Precondition error type.

/// Error raised when an operation is requested before its prerequisites exist,
/// such as chapter generation before a table of contents has been produced.
#[derive(Debug, Clone)]
pub struct PreconditionError {
    /// Error message
    pub message: String,
    /// Line number where the error occurred
    pub line: u32,
    /// File where the error occurred
    pub file: &'static str,
}

impl PreconditionError {
    /// Create a new PreconditionError with the given message at the current location.
    ///
    /// # Examples
    ///
    /// ```
    /// use folio_error::PreconditionError;
    ///
    /// let err = PreconditionError::new("Table of Contents not generated");
    /// assert!(err.message.contains("not generated"));
    /// ```
    #[track_caller]
    pub fn new(message: impl Into<String>) -> Self {
        let location = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: location.line(),
            file: location.file(),
        }
    }
}

impl std::fmt::Display for PreconditionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Precondition Error: {} at line {} in {}",
            self.message, self.line, self.file
        )
    }
}

impl std::error::Error for PreconditionError {}
