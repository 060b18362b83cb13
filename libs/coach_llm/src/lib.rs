use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tokio::time::timeout;

pub mod decode;
pub mod deepseek;
pub mod error;

pub use decode::decode_completion;
pub use error::CompletionError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    System,
    User,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: Role,
    pub content: String,
}

impl ChatMessage {
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: Role::System,
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: content.into(),
        }
    }
}

/// One round trip to a chat-completion endpoint.
///
/// Returns the first choice's message content as raw text. Parsing is the
/// caller's responsibility; `json_mode` only instructs the remote model to
/// constrain its output to a single JSON object.
#[async_trait]
pub trait ChatCompletion {
    async fn complete(
        &self,
        messages: &[ChatMessage],
        json_mode: bool,
    ) -> Result<String, CompletionError>;
}

pub struct RetryConfig {
    pub max_retries: u32,
    pub base_delay: Duration,
}

impl Default for RetryConfig {
    /// Zero retries: one attempt, failures propagate immediately.
    fn default() -> Self {
        Self {
            max_retries: 0,
            base_delay: Duration::from_secs(1),
        }
    }
}

pub struct CompletionClientConfig {
    pub timeout: Duration,
    pub retry: RetryConfig,
}

impl Default for CompletionClientConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(180),
            retry: RetryConfig::default(),
        }
    }
}

pub struct CompletionClient {
    service: Box<dyn ChatCompletion + Send + Sync>,
    config: CompletionClientConfig,
}

impl CompletionClient {
    pub fn new(config: deepseek::DeepSeekConfig) -> Self {
        Self::from_service(
            Box::new(deepseek::DeepSeekService::new(config)),
            CompletionClientConfig::default(),
        )
    }

    /// Wrap an arbitrary completion service. Tests use this to substitute a
    /// stub without touching process environment state.
    pub fn from_service(
        service: Box<dyn ChatCompletion + Send + Sync>,
        config: CompletionClientConfig,
    ) -> Self {
        Self { service, config }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.config.timeout = timeout;
        self
    }

    pub fn with_retry_config(mut self, retry: RetryConfig) -> Self {
        self.config.retry = retry;
        self
    }

    pub async fn complete(
        &self,
        messages: &[ChatMessage],
        json_mode: bool,
    ) -> Result<String, CompletionError> {
        let mut retries = 0;
        let max_retries = self.config.retry.max_retries;
        let base_delay = self.config.retry.base_delay;

        loop {
            match timeout(self.config.timeout, self.service.complete(messages, json_mode)).await {
                Ok(Ok(content)) => return Ok(content),
                Ok(Err(e)) => {
                    if retries >= max_retries {
                        return Err(e);
                    }

                    tracing::warn!("completion attempt {} failed: {}", retries + 1, e);

                    let delay = base_delay * 2u32.pow(retries);
                    tokio::time::sleep(delay).await;
                    retries += 1;
                }
                Err(_) => {
                    if retries >= max_retries {
                        return Err(CompletionError::Timeout(self.config.timeout));
                    }

                    tracing::warn!("completion attempt {} timed out", retries + 1);

                    let delay = base_delay * 2u32.pow(retries);
                    tokio::time::sleep(delay).await;
                    retries += 1;
                }
            }
        }
    }
}
