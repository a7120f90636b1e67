//! Model provider abstractions and implementations.
//!
//! This module provides a trait-based abstraction over the generative
//! language API, allowing easy swapping between the real Gemini backend
//! and mocks.

pub mod gemini;
pub mod mock;

use async_trait::async_trait;
use thiserror::Error;

/// Error type for provider operations.
#[derive(Error, Debug)]
pub enum ProviderError {
    #[error("Provider not configured: {0}")]
    NotConfigured(String),

    #[error("API error: {0}")]
    ApiError(String),

    #[error("Rate limited")]
    RateLimited,

    #[error("Content filtered")]
    ContentFiltered,

    #[error("Request timed out")]
    Timeout,

    #[error("Network error: {0}")]
    NetworkError(String),
}

/// An image ready to attach to a vision request.
#[derive(Debug, Clone)]
pub struct ImageAttachment {
    /// MIME type sniffed from the image bytes (e.g., image/png).
    pub mime_type: String,

    /// Base64-encoded image bytes.
    pub data: String,
}

/// Trait for text generation providers (e.g., Gemini).
#[async_trait]
pub trait TextProvider: Send + Sync {
    /// Generate a text reply for a system-instruction block plus a task
    /// prompt. An empty system-instruction block is omitted from the
    /// request.
    async fn generate(
        &self,
        system_instructions: &str,
        prompt: &str,
    ) -> Result<String, ProviderError>;

    /// Health check.
    async fn health_check(&self) -> Result<(), ProviderError>;
}

/// Trait for image-understanding providers.
#[async_trait]
pub trait VisionProvider: Send + Sync {
    /// Describe a single image following the given instruction.
    async fn describe(
        &self,
        instruction: &str,
        image: &ImageAttachment,
    ) -> Result<String, ProviderError>;

    /// Health check.
    async fn health_check(&self) -> Result<(), ProviderError>;
}

/// Strip a wrapping markdown code fence from a model reply.
///
/// Models regularly wrap JSON in ```json ... ``` despite strict-output
/// instructions. Returns the inner content when a fence pair is found,
/// otherwise the trimmed input unchanged.
pub fn strip_code_fences(content: &str) -> &str {
    let trimmed = content.trim();
    if let Some(start) = trimmed.find("```") {
        // Skip the rest of the opening fence line (e.g., ```json)
        let after_fence = &trimmed[start + 3..];
        if let Some(newline) = after_fence.find('\n') {
            let inner = &after_fence[newline + 1..];
            if let Some(end) = inner.rfind("```") {
                return inner[..end].trim();
            }
        }
    }
    trimmed
}
