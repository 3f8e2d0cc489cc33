//! Text-generation error types.

/// Specific failure conditions when calling the generation backend.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum GenerationErrorKind {
    /// The upstream API request failed
    Upstream(String),
    /// HTTP error with status code and message
    HttpStatus {
        /// HTTP status code
        status_code: u16,
        /// Error message
        message: String,
    },
    /// The model returned a response with no usable text
    EmptyResponse,
    /// The prompt or response was blocked by the upstream safety layer
    Blocked(String),
    /// All retry attempts were consumed without a usable response
    RetriesExhausted {
        /// Number of attempts made
        attempts: usize,
        /// Display form of the last underlying failure
        last: String,
    },
}

impl std::fmt::Display for GenerationErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GenerationErrorKind::Upstream(msg) => {
                write!(f, "Generation request failed: {}", msg)
            }
            GenerationErrorKind::HttpStatus {
                status_code,
                message,
            } => write!(f, "HTTP {} error: {}", status_code, message),
            GenerationErrorKind::EmptyResponse => {
                write!(f, "Model returned an empty response")
            }
            GenerationErrorKind::Blocked(reason) => {
                write!(f, "Prompt was blocked by the model: {}", reason)
            }
            GenerationErrorKind::RetriesExhausted { attempts, last } => {
                write!(f, "Gave up after {} attempts, last error: {}", attempts, last)
            }
        }
    }
}

/// Error type for text-generation operations.
///
/// # Examples
///
/// ```
/// use folio_error::{GenerationError, GenerationErrorKind};
///
/// let err = GenerationError::new(GenerationErrorKind::EmptyResponse);
/// assert!(format!("{}", err).contains("empty"));
/// ```
#[derive(Debug, Clone)]
pub struct GenerationError {
    /// The specific failure condition
    pub kind: GenerationErrorKind,
    /// Line number where the error occurred
    pub line: u32,
    /// Source file where the error occurred
    pub file: &'static str,
}

impl GenerationError {
    /// Create a new GenerationError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: GenerationErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }

    /// True when another attempt against the backend could succeed.
    ///
    /// Exhaustion is terminal; everything else (transient upstream failures,
    /// empty or blocked payloads) is worth retrying within the budget.
    pub fn is_retryable(&self) -> bool {
        !matches!(self.kind, GenerationErrorKind::RetriesExhausted { .. })
    }
}

impl std::fmt::Display for GenerationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Generation Error: {} at line {} in {}",
            self.kind, self.line, self.file
        )
    }
}

impl std::error::Error for GenerationError {}
