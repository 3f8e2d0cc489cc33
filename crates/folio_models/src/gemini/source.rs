//! Retry-wrapped Gemini content source.

use crate::gemini::{GeminiClient, GeminiConfig};
use crate::retry::{RetryConfig, retry_with_backoff};
use async_trait::async_trait;
use folio_error::GenerationError;
use folio_interface::ContentSource;
use tracing::instrument;

/// [`ContentSource`] backed by the Gemini API with a bounded retry budget.
///
/// Each `generate` call makes at most `retry.max_attempts` requests, backing
/// off exponentially between attempts; empty and blocked responses count as
/// failed attempts.
#[derive(Debug, Clone)]
pub struct GeminiSource {
    client: GeminiClient,
    retry: RetryConfig,
}

impl GeminiSource {
    /// Creates a source from resolved configuration with the default retry
    /// budget.
    pub fn new(config: &GeminiConfig) -> Self {
        Self {
            client: GeminiClient::new(config.api_key().to_string(), config.model().to_string()),
            retry: RetryConfig::default(),
        }
    }

    /// Replaces the retry configuration.
    pub fn with_retry(mut self, retry: RetryConfig) -> Self {
        self.retry = retry;
        self
    }

    /// Returns the model name this source generates with.
    pub fn model_name(&self) -> &str {
        self.client.model_name()
    }
}

#[async_trait]
impl ContentSource for GeminiSource {
    #[instrument(skip(self, prompt), fields(model = %self.client.model_name()))]
    async fn generate(&self, prompt: &str) -> Result<String, GenerationError> {
        retry_with_backoff(&self.retry, || self.client.generate_once(prompt)).await
    }
}
