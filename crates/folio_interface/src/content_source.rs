//! Text-generation source trait.

use async_trait::async_trait;
use folio_error::GenerationError;

/// A text-generation capability with its own retry policy.
///
/// Implementations must be safe to call repeatedly with the same prompt; no
/// idempotence is assumed from the upstream service and none is promised to
/// the caller.
#[async_trait]
pub trait ContentSource: Send + Sync {
    /// Generates text for the given prompt.
    ///
    /// # Errors
    ///
    /// Returns [`GenerationError`] when the upstream capability is
    /// unavailable, returns an empty or blocked result, or the retry budget
    /// is exhausted.
    async fn generate(&self, prompt: &str) -> Result<String, GenerationError>;
}
