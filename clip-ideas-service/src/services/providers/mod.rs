//! AI provider abstractions and implementations.
//!
//! The handler only sees [`TextProvider`], so the Gemini backend can be
//! replaced by the mock in tests.

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

    #[error("Empty completion")]
    EmptyCompletion,

    #[error("Network error: {0}")]
    NetworkError(String),
}

/// Result of a provider response.
#[derive(Debug, Clone)]
pub struct ProviderResponse {
    /// Completion text.
    pub text: Option<String>,

    /// Input tokens consumed.
    pub input_tokens: i32,

    /// Output tokens generated.
    pub output_tokens: i32,

    /// Finish reason.
    pub finish_reason: FinishReason,
}

/// Reason why generation stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FinishReason {
    Complete,
    Length,
    ContentFilter,
}

impl FinishReason {
    pub fn from_gemini(reason: Option<&str>) -> Self {
        match reason {
            Some("MAX_TOKENS") => FinishReason::Length,
            Some("SAFETY") => FinishReason::ContentFilter,
            _ => FinishReason::Complete,
        }
    }
}

/// Generation parameters for AI requests.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GenerationParams {
    /// MIME type the completion must use, e.g. `application/json`.
    pub response_mime_type: Option<String>,
}

impl GenerationParams {
    /// Parameters requesting a JSON completion.
    pub fn json() -> Self {
        Self {
            response_mime_type: Some("application/json".to_string()),
        }
    }
}

/// Trait for text/JSON generation providers (e.g., Gemini).
#[async_trait]
pub trait TextProvider: Send + Sync {
    /// Generate a completion for a single text prompt.
    async fn generate(
        &self,
        prompt: &str,
        params: &GenerationParams,
    ) -> Result<ProviderResponse, ProviderError>;

    /// Health check. Must not spend tokens.
    async fn health_check(&self) -> Result<(), ProviderError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn json_params_request_json_mime_type() {
        let params = GenerationParams::json();
        assert_eq!(params.response_mime_type.as_deref(), Some("application/json"));
        assert_eq!(GenerationParams::default().response_mime_type, None);
    }

    #[test]
    fn finish_reason_mapping() {
        assert_eq!(FinishReason::from_gemini(Some("STOP")), FinishReason::Complete);
        assert_eq!(FinishReason::from_gemini(Some("MAX_TOKENS")), FinishReason::Length);
        assert_eq!(FinishReason::from_gemini(Some("SAFETY")), FinishReason::ContentFilter);
        assert_eq!(FinishReason::from_gemini(None), FinishReason::Complete);
    }
}
