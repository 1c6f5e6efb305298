//! Async Gemini API client
//!
//! Calls the non-streaming `generateContent` endpoint in JSON mode, asking
//! the model to answer with a document that matches a response schema.

use serde_json::Value;

use super::AiError;

/// Gemini API base URL
const GEMINI_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta/models";

const PROVIDER: &str = "Gemini";

/// Async Gemini API client
pub struct AsyncGeminiClient {
    client: reqwest::Client,
    api_key: String,
    model: String,
}

impl std::fmt::Debug for AsyncGeminiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // The API key is never printed
        f.debug_struct("AsyncGeminiClient")
            .field("model", &self.model)
            .finish_non_exhaustive()
    }
}

impl AsyncGeminiClient {
    pub fn new(api_key: String, model: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_key,
            model,
        }
    }

    #[cfg(test)]
    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    pub(crate) fn build_url(&self) -> String {
        format!("{}/{}:generateContent", GEMINI_API_BASE, self.model)
    }

    pub(crate) fn build_request_body(&self, prompt: &str, schema: &Value) -> Result<String, AiError> {
        let request_body = serde_json::json!({
            "contents": [
                {
                    "role": "user",
                    "parts": [{ "text": prompt }]
                }
            ],
            "generationConfig": {
                "responseMimeType": "application/json",
                "responseSchema": schema
            }
        });

        serde_json::to_string(&request_body).map_err(|e| AiError::Parse {
            provider: PROVIDER.to_string(),
            message: e.to_string(),
        })
    }

    /// Send one request and return the generated text
    ///
    /// Single attempt; no retry and no client-side timeout.
    pub async fn generate(&self, prompt: &str, schema: &Value) -> Result<String, AiError> {
        let body = self.build_request_body(prompt, schema)?;

        let response = self
            .client
            .post(self.build_url())
            .header("x-goog-api-key", &self.api_key)
            .header("content-type", "application/json")
            .body(body)
            .send()
            .await
            .map_err(|e| AiError::Network {
                provider: PROVIDER.to_string(),
                message: e.to_string(),
            })?;

        let status = response.status();
        if !status.is_success() {
            let message = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(AiError::Api {
                provider: PROVIDER.to_string(),
                code: status.as_u16(),
                message,
            });
        }

        let json: Value = response.json().await.map_err(|e| AiError::Parse {
            provider: PROVIDER.to_string(),
            message: e.to_string(),
        })?;

        extract_text(&json)
    }
}

/// Concatenate the text parts of the first candidate
pub(crate) fn extract_text(json: &Value) -> Result<String, AiError> {
    let parts = json
        .get("candidates")
        .and_then(|c| c.get(0))
        .and_then(|c| c.get("content"))
        .and_then(|c| c.get("parts"))
        .and_then(Value::as_array);

    let Some(parts) = parts else {
        let reason = json
            .get("promptFeedback")
            .and_then(|f| f.get("blockReason"))
            .and_then(Value::as_str)
            .map(|r| format!("prompt blocked: {}", r))
            .unwrap_or_else(|| "response has no candidate content".to_string());
        return Err(AiError::Parse {
            provider: PROVIDER.to_string(),
            message: reason,
        });
    };

    let text: String = parts
        .iter()
        .filter_map(|part| part.get("text").and_then(Value::as_str))
        .collect();

    if text.is_empty() {
        return Err(AiError::Parse {
            provider: PROVIDER.to_string(),
            message: "candidate contains no text".to_string(),
        });
    }

    Ok(text)
}

#[cfg(test)]
#[path = "gemini_tests.rs"]
mod gemini_tests;
