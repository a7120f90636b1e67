//! Gemini AI provider implementation.
//!
//! Implements text generation and single-image understanding using
//! Google's Gemini API.

use super::{ImageAttachment, ProviderError, TextProvider, VisionProvider};
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Gemini API base URL.
const GEMINI_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Gemini provider configuration.
#[derive(Debug, Clone)]
pub struct GeminiConfig {
    pub api_key: String,
    pub text_model: String,
    pub vision_model: String,
    pub request_timeout: Duration,
}

/// Gemini provider serving both the text and vision capabilities.
pub struct GeminiProvider {
    config: GeminiConfig,
    client: Client,
}

impl GeminiProvider {
    pub fn new(config: GeminiConfig) -> Self {
        let client = Client::builder()
            .timeout(config.request_timeout)
            .build()
            .expect("Failed to create HTTP client");

        Self { config, client }
    }

    /// Build the API URL for the given model and method.
    fn api_url(&self, model: &str, method: &str) -> String {
        format!(
            "{}/models/{}:{}?key={}",
            GEMINI_API_BASE, model, method, self.config.api_key
        )
    }

    /// Send one generateContent request and extract the reply text.
    async fn generate_content(
        &self,
        model: &str,
        parts: Vec<ContentPart>,
    ) -> Result<String, ProviderError> {
        let request = GenerateContentRequest {
            contents: vec![Content {
                role: Some("user".to_string()),
                parts,
            }],
        };

        let url = self.api_url(model, "generateContent");

        let response = self
            .client
            .post(&url)
            .json(&request)
            .send()
            .await
            .map_err(handle_request_error)?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();

            if status.as_u16() == 429 {
                return Err(ProviderError::RateLimited);
            }

            return Err(ProviderError::ApiError(format!(
                "Gemini API error {}: {}",
                status, error_text
            )));
        }

        let api_response: GenerateContentResponse = response
            .json()
            .await
            .map_err(|e| ProviderError::ApiError(format!("Failed to parse response: {}", e)))?;

        if let Some(candidate) = api_response.candidates.first() {
            if candidate.finish_reason.as_deref() == Some("SAFETY") {
                return Err(ProviderError::ContentFiltered);
            }
        }

        api_response
            .candidates
            .first()
            .and_then(|c| c.content.parts.first())
            .and_then(|p| match p {
                ContentPart::Text { text } => Some(text.clone()),
                _ => None,
            })
            .ok_or_else(|| ProviderError::ApiError("Empty response from Gemini".to_string()))
    }

    /// Verify the API key by listing available models.
    async fn verify_api_key(&self) -> Result<(), ProviderError> {
        if self.config.api_key.is_empty() {
            return Err(ProviderError::NotConfigured(
                "Gemini API key not configured".to_string(),
            ));
        }

        let url = format!("{}/models?key={}", GEMINI_API_BASE, self.config.api_key);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(handle_request_error)?;

        if response.status().is_success() {
            Ok(())
        } else {
            Err(ProviderError::ApiError(format!(
                "Health check failed: {}",
                response.status()
            )))
        }
    }
}

#[async_trait]
impl TextProvider for GeminiProvider {
    async fn generate(
        &self,
        system_instructions: &str,
        prompt: &str,
    ) -> Result<String, ProviderError> {
        let mut parts = Vec::new();
        if !system_instructions.is_empty() {
            parts.push(ContentPart::Text {
                text: system_instructions.to_string(),
            });
        }
        parts.push(ContentPart::Text {
            text: prompt.to_string(),
        });

        tracing::debug!(
            model = %self.config.text_model,
            prompt_len = prompt.len(),
            "Sending text request to Gemini API"
        );

        self.generate_content(&self.config.text_model, parts).await
    }

    async fn health_check(&self) -> Result<(), ProviderError> {
        self.verify_api_key().await
    }
}

#[async_trait]
impl VisionProvider for GeminiProvider {
    async fn describe(
        &self,
        instruction: &str,
        image: &ImageAttachment,
    ) -> Result<String, ProviderError> {
        let parts = vec![
            ContentPart::Text {
                text: instruction.to_string(),
            },
            ContentPart::InlineData {
                inline_data: InlineData {
                    mime_type: image.mime_type.clone(),
                    data: image.data.clone(),
                },
            },
        ];

        tracing::debug!(
            model = %self.config.vision_model,
            mime_type = %image.mime_type,
            "Sending vision request to Gemini API"
        );

        self.generate_content(&self.config.vision_model, parts)
            .await
    }

    async fn health_check(&self) -> Result<(), ProviderError> {
        self.verify_api_key().await
    }
}

fn handle_request_error(err: reqwest::Error) -> ProviderError {
    if err.is_timeout() {
        ProviderError::Timeout
    } else {
        ProviderError::NetworkError(err.to_string())
    }
}

// ============================================================================
// Gemini API Request/Response Types
// ============================================================================

#[derive(Debug, Serialize)]
struct GenerateContentRequest {
    contents: Vec<Content>,
}

#[derive(Debug, Serialize, Deserialize)]
struct Content {
    #[serde(skip_serializing_if = "Option::is_none")]
    role: Option<String>,
    parts: Vec<ContentPart>,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(untagged)]
enum ContentPart {
    Text { text: String },
    InlineData { inline_data: InlineData },
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct InlineData {
    mime_type: String,
    data: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Candidate {
    content: Content,
    #[serde(default)]
    finish_reason: Option<String>,
}
