//! Error types for the Folio book generator.
//!
//! This crate provides the foundation error types used throughout the Folio
//! workspace. Each error family lives in its own module with a kind enum and
//! automatic source-location capture; the aggregate [`FolioError`] wraps all
//! of them behind a single boxed enum for use at crate boundaries.

mod config;
mod generation;
mod precondition;
mod toc;
mod writer;

pub use config::{ConfigError, ConfigErrorKind};
pub use generation::{GenerationError, GenerationErrorKind};
pub use precondition::PreconditionError;
pub use toc::{TocParseError, TocParseErrorKind, TocUpdateError, TocUpdateErrorKind};
pub use writer::{WriterError, WriterErrorKind};

/// Kind discrimination for the aggregate Folio error.
#[derive(Debug, derive_more::From)]
pub enum FolioErrorKind {
    /// Upstream text-generation failure
    Generation(GenerationError),
    /// Initial TOC response is not valid structured data
    TocParse(TocParseError),
    /// Edited TOC form is not valid structured data
    TocUpdate(TocUpdateError),
    /// Operation requested before its prerequisites exist
    Precondition(PreconditionError),
    /// Credential or model resolution failure
    Config(ConfigError),
    /// File output failure
    Writer(WriterError),
}

impl std::fmt::Display for FolioErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FolioErrorKind::Generation(e) => write!(f, "{}", e),
            FolioErrorKind::TocParse(e) => write!(f, "{}", e),
            FolioErrorKind::TocUpdate(e) => write!(f, "{}", e),
            FolioErrorKind::Precondition(e) => write!(f, "{}", e),
            FolioErrorKind::Config(e) => write!(f, "{}", e),
            FolioErrorKind::Writer(e) => write!(f, "{}", e),
        }
    }
}

/// Folio error with kind discrimination.
#[derive(Debug)]
pub struct FolioError(Box<FolioErrorKind>);

impl FolioError {
    /// Create a new error from a kind.
    pub fn new(kind: FolioErrorKind) -> Self {
        Self(Box::new(kind))
    }

    /// Get the error kind.
    pub fn kind(&self) -> &FolioErrorKind {
        &self.0
    }
}

impl std::fmt::Display for FolioError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::error::Error for FolioError {}

// Generic From implementation for any type that converts to FolioErrorKind
impl<T> From<T> for FolioError
where
    T: Into<FolioErrorKind>,
{
    fn from(value: T) -> Self {
        Self::new(value.into())
    }
}

/// Result alias for fallible Folio operations.
pub type FolioResult<T> = std::result::Result<T, FolioError>;
