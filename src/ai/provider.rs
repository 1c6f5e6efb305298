//! AI provider abstraction
//!
//! Defines the AiProvider enum, AiError types, and factory for creating provider instances.

use serde_json::Value;
use thiserror::Error;

use super::gateway::GenerationService;
use crate::config::{AiConfig, AiProviderType};

mod gemini;

pub use gemini::AsyncGeminiClient;

/// Errors that can occur during AI operations
#[derive(Debug, Error)]
pub enum AiError {
    /// AI is not configured (missing API key or disabled)
    #[error("[{provider}] AI not configured: {message}")]
    NotConfigured { provider: String, message: String },

    /// Network error during API request
    #[error("[{provider}] Network error: {message}")]
    Network { provider: String, message: String },

    /// API returned an error response
    #[error("[{provider}] API error ({code}): {message}")]
    Api {
        provider: String,
        code: u16,
        message: String,
    },

    /// Failed to parse the API envelope
    #[error("[{provider}] Parse error: {message}")]
    Parse { provider: String, message: String },

    /// Generated text is not the requested JSON shape
    #[error("Schema mismatch: {0}")]
    Schema(String),
}

/// AI provider implementations
#[derive(Debug)]
pub enum AiProvider {
    /// Google Gemini API
    Gemini(AsyncGeminiClient),
}

impl AiProvider {
    /// Create an AI provider from configuration
    ///
    /// Returns an error if the configuration is invalid (e.g., missing API key)
    pub fn from_config(config: &AiConfig) -> Result<Self, AiError> {
        if !config.enabled {
            return Err(AiError::NotConfigured {
                provider: "Gemini".to_string(),
                message: "AI is disabled in config".to_string(),
            });
        }

        match config.provider {
            AiProviderType::Gemini => {
                let api_key = config
                    .gemini
                    .api_key
                    .as_ref()
                    .filter(|k| !k.trim().is_empty())
                    .ok_or_else(|| AiError::NotConfigured {
                        provider: "Gemini".to_string(),
                        message: "Missing API key: set [ai.gemini] api_key or GEMINI_API_KEY"
                            .to_string(),
                    })?;

                let model = config.gemini.model.trim();
                if model.is_empty() {
                    return Err(AiError::NotConfigured {
                        provider: "Gemini".to_string(),
                        message: "Empty model in [ai.gemini] config".to_string(),
                    });
                }

                Ok(AiProvider::Gemini(AsyncGeminiClient::new(
                    api_key.clone(),
                    model.to_string(),
                )))
            }
        }
    }

    pub fn provider_name(&self) -> &'static str {
        match self {
            AiProvider::Gemini(_) => "Gemini",
        }
    }
}

impl GenerationService for AiProvider {
    async fn generate_json(&self, prompt: &str, schema: &Value) -> Result<String, AiError> {
        match self {
            AiProvider::Gemini(client) => client.generate(prompt, schema).await,
        }
    }
}

#[cfg(test)]
#[path = "provider_tests.rs"]
mod provider_tests;
