//! Mock provider implementations for testing.

use super::{FinishReason, GenerationParams, ProviderError, ProviderResponse, TextProvider};
use async_trait::async_trait;
use std::sync::Mutex;
use std::time::Duration;

/// What the mock answers with.
#[derive(Debug, Clone)]
enum MockReply {
    Text(String),
    NetworkError(String),
    ApiError(String),
}

/// Mock text provider for testing.
///
/// Returns a canned completion or failure and remembers every call it saw.
pub struct MockTextProvider {
    reply: MockReply,
    delay: Option<Duration>,
    calls: Mutex<Vec<(String, GenerationParams)>>,
}

impl MockTextProvider {
    /// Succeed with `text` as the completion.
    pub fn with_text(text: impl Into<String>) -> Self {
        Self::new(MockReply::Text(text.into()))
    }

    /// Fail as if the upstream could not be reached.
    pub fn with_network_error(message: impl Into<String>) -> Self {
        Self::new(MockReply::NetworkError(message.into()))
    }

    /// Fail as if the upstream answered with an error status.
    pub fn with_api_error(message: impl Into<String>) -> Self {
        Self::new(MockReply::ApiError(message.into()))
    }

    fn new(reply: MockReply) -> Self {
        Self {
            reply,
            delay: None,
            calls: Mutex::new(Vec::new()),
        }
    }

    /// Wait `delay` before answering.
    pub fn delayed(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    /// Prompts received so far, oldest first.
    pub fn prompts(&self) -> Vec<String> {
        self.calls
            .lock()
            .map(|calls| calls.iter().map(|(prompt, _)| prompt.clone()).collect())
            .unwrap_or_default()
    }

    /// Parameters of the most recent call.
    pub fn last_params(&self) -> Option<GenerationParams> {
        self.calls
            .lock()
            .ok()
            .and_then(|calls| calls.last().map(|(_, params)| params.clone()))
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().map(|calls| calls.len()).unwrap_or(0)
    }
}

#[async_trait]
impl TextProvider for MockTextProvider {
    async fn generate(
        &self,
        prompt: &str,
        params: &GenerationParams,
    ) -> Result<ProviderResponse, ProviderError> {
        if let Ok(mut calls) = self.calls.lock() {
            calls.push((prompt.to_string(), params.clone()));
        }

        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }

        match &self.reply {
            MockReply::Text(text) => Ok(ProviderResponse {
                text: Some(text.clone()),
                input_tokens: prompt.len() as i32 / 4,
                output_tokens: text.len() as i32 / 4,
                finish_reason: FinishReason::Complete,
            }),
            MockReply::NetworkError(message) => Err(ProviderError::NetworkError(message.clone())),
            MockReply::ApiError(message) => Err(ProviderError::ApiError(message.clone())),
        }
    }

    async fn health_check(&self) -> Result<(), ProviderError> {
        Ok(())
    }
}
