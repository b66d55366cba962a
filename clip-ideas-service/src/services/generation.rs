//! Turns a video URL into clip ideas through the configured text provider.

use crate::models::ClipCount;
use crate::prompt::build_prompt;
use crate::services::providers::{GenerationParams, ProviderError, TextProvider};
use serde_json::Value;
use std::sync::Arc;
use std::time::Duration;
use thiserror::Error;

/// Failure of a single generation, in either the call or the parse.
#[derive(Debug, Error)]
pub enum GenerationError {
    #[error(transparent)]
    Provider(#[from] ProviderError),

    #[error(transparent)]
    InvalidJson(#[from] serde_json::Error),

    #[error("Generation timed out after {0:?}")]
    TimedOut(Duration),
}

impl GenerationError {
    /// Metric label for this failure.
    pub fn outcome(&self) -> &'static str {
        match self {
            GenerationError::Provider(_) => "upstream_error",
            GenerationError::InvalidJson(_) => "invalid_json",
            GenerationError::TimedOut(_) => "timeout",
        }
    }
}

#[derive(Clone)]
pub struct ClipGenerator {
    provider: Arc<dyn TextProvider>,
    deadline: Duration,
}

impl ClipGenerator {
    /// `deadline` bounds each provider call.
    pub fn new(provider: Arc<dyn TextProvider>, deadline: Duration) -> Self {
        Self { provider, deadline }
    }

    /// Ask the model for `count` ideas about `video_url` and return its JSON
    /// as-is. No retries; the shape of the JSON is not checked.
    pub async fn generate(&self, video_url: &str, count: ClipCount) -> Result<Value, GenerationError> {
        let prompt = build_prompt(video_url, count);

        let response = tokio::time::timeout(
            self.deadline,
            self.provider.generate(&prompt, &GenerationParams::json()),
        )
        .await
        .map_err(|_| GenerationError::TimedOut(self.deadline))??;

        tracing::debug!(
            input_tokens = response.input_tokens,
            output_tokens = response.output_tokens,
            finish_reason = ?response.finish_reason,
            "Completion received"
        );

        let text = response.text.ok_or(ProviderError::EmptyCompletion)?;

        Ok(serde_json::from_str(&text)?)
    }

    pub async fn health_check(&self) -> Result<(), ProviderError> {
        self.provider.health_check().await
    }
}
