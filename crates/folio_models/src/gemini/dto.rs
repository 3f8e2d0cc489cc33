//! Gemini generateContent request and response types.

use serde::{Deserialize, Serialize};

/// Request body for the generateContent endpoint.
#[derive(Debug, Clone, Serialize)]
pub(crate) struct GenerateContentRequest {
    pub contents: Vec<Content>,
}

impl GenerateContentRequest {
    /// Builds a single-turn text request from a prompt.
    pub fn from_prompt(prompt: &str) -> Self {
        Self {
            contents: vec![Content {
                parts: vec![Part {
                    text: prompt.to_string(),
                }],
            }],
        }
    }
}

/// A content block: an ordered list of parts.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub(crate) struct Content {
    #[serde(default)]
    pub parts: Vec<Part>,
}

/// A single text part.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub(crate) struct Part {
    #[serde(default)]
    pub text: String,
}

/// Response body from the generateContent endpoint.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct GenerateContentResponse {
    #[serde(default)]
    pub candidates: Vec<Candidate>,
    pub prompt_feedback: Option<PromptFeedback>,
}

impl GenerateContentResponse {
    /// Concatenated text of the first candidate's parts.
    pub fn text(&self) -> String {
        self.candidates
            .first()
            .and_then(|candidate| candidate.content.as_ref())
            .map(|content| {
                content
                    .parts
                    .iter()
                    .map(|part| part.text.as_str())
                    .collect::<Vec<_>>()
                    .join("")
            })
            .unwrap_or_default()
    }
}

/// One generated candidate.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct Candidate {
    pub content: Option<Content>,
    pub finish_reason: Option<String>,
}

/// Safety feedback on the prompt itself.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct PromptFeedback {
    pub block_reason: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn response_text_joins_parts() {
        let response: GenerateContentResponse = serde_json::from_str(
            r#"{"candidates": [{"content": {"parts": [{"text": "Hello "}, {"text": "world"}]}, "finishReason": "STOP"}]}"#,
        )
        .expect("valid response");

        assert_eq!(response.text(), "Hello world");
        assert_eq!(
            response.candidates[0].finish_reason.as_deref(),
            Some("STOP")
        );
    }

    #[test]
    fn blocked_response_carries_reason() {
        let response: GenerateContentResponse = serde_json::from_str(
            r#"{"promptFeedback": {"blockReason": "SAFETY"}}"#,
        )
        .expect("valid response");

        assert!(response.candidates.is_empty());
        assert_eq!(
            response
                .prompt_feedback
                .as_ref()
                .and_then(|f| f.block_reason.as_deref()),
            Some("SAFETY")
        );
    }

    #[test]
    fn request_serializes_prompt() {
        let request = GenerateContentRequest::from_prompt("hi");
        let json = serde_json::to_value(&request).expect("serializes");
        assert_eq!(json["contents"][0]["parts"][0]["text"], "hi");
    }
}
