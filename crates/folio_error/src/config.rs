//! Configuration error types.

/// Specific error conditions for credential and model resolution.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ConfigErrorKind {
    /// API key not found in environment or key file
    MissingApiKey(String),
    /// Key file exists but contains no key
    EmptyApiKeyFile(String),
    /// Failed to read the key file
    KeyFileRead {
        /// Path to the key file
        path: String,
        /// Underlying I/O error message
        message: String,
    },
}

impl std::fmt::Display for ConfigErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigErrorKind::MissingApiKey(path) => {
                write!(f, "API key file not found: {}", path)
            }
            ConfigErrorKind::EmptyApiKeyFile(path) => {
                write!(f, "API key file is empty: {}", path)
            }
            ConfigErrorKind::KeyFileRead { path, message } => {
                write!(f, "Error reading API key file {}: {}", path, message)
            }
        }
    }
}

/// Error type for configuration operations.
#[derive(Debug, Clone)]
pub struct ConfigError {
    /// The specific error condition
    pub kind: ConfigErrorKind,
    /// Line number where the error occurred
    pub line: u32,
    /// Source file where the error occurred
    pub file: &'static str,
}

impl ConfigError {
    /// Create a new ConfigError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: ConfigErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Config Error: {} at line {} in {}",
            self.kind, self.line, self.file
        )
    }
}

impl std::error::Error for ConfigError {}
