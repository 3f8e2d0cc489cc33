//! Single-attempt Gemini HTTP client.

use crate::gemini::dto::{GenerateContentRequest, GenerateContentResponse};
use folio_error::{GenerationError, GenerationErrorKind};
use reqwest::Client;
use tracing::{debug, error, instrument};

const GEMINI_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta/models";

/// Client for the Gemini generateContent API.
///
/// Performs exactly one request per call; the retry budget lives in
/// [`crate::GeminiSource`].
#[derive(Debug, Clone)]
pub struct GeminiClient {
    client: Client,
    api_key: String,
    model: String,
    base_url: String,
}

impl GeminiClient {
    /// Creates a new Gemini client.
    #[instrument(skip(api_key), fields(model = %model))]
    pub fn new(api_key: String, model: String) -> Self {
        debug!(model = %model, "Created Gemini client");
        Self {
            client: Client::new(),
            api_key,
            model,
            base_url: GEMINI_BASE_URL.to_string(),
        }
    }

    /// Overrides the API base URL. Intended for tests against a local stub.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Returns the model name.
    pub fn model_name(&self) -> &str {
        &self.model
    }

    /// Performs a single generateContent request.
    ///
    /// # Errors
    ///
    /// Returns an error when the request fails, the API reports a non-success
    /// status, the prompt is blocked, or the response carries no text.
    #[instrument(skip(self, prompt), fields(model = %self.model, prompt_len = prompt.len()))]
    pub async fn generate_once(&self, prompt: &str) -> Result<String, GenerationError> {
        let url = format!("{}/{}:generateContent", self.base_url, self.model);
        let request = GenerateContentRequest::from_prompt(prompt);

        let response = self
            .client
            .post(&url)
            .header("x-goog-api-key", &self.api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                error!(error = %e, "HTTP request failed");
                GenerationError::new(GenerationErrorKind::Upstream(format!(
                    "Request failed: {}",
                    e
                )))
            })?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            error!(status = %status, error = %error_text, "Gemini API error");
            return Err(GenerationError::new(GenerationErrorKind::HttpStatus {
                status_code: status.as_u16(),
                message: error_text,
            }));
        }

        let body: GenerateContentResponse = response.json().await.map_err(|e| {
            error!(error = %e, "Failed to parse Gemini response");
            GenerationError::new(GenerationErrorKind::Upstream(format!(
                "Failed to parse response: {}",
                e
            )))
        })?;

        if let Some(reason) = body
            .prompt_feedback
            .as_ref()
            .and_then(|feedback| feedback.block_reason.clone())
        {
            return Err(GenerationError::new(GenerationErrorKind::Blocked(reason)));
        }

        let text = body.text();
        if text.trim().is_empty() {
            return Err(GenerationError::new(GenerationErrorKind::EmptyResponse));
        }

        debug!(response_len = text.len(), "Received generated text");
        Ok(text)
    }
}
