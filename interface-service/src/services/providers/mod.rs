//! Language-model client abstraction.
//!
//! Handlers only ever see `Arc<dyn LanguageModel>`, so the Cohere client can be
//! swapped for the mock in tests.

pub mod cohere;
pub mod mock;

use async_trait::async_trait;
use thiserror::Error;

/// Error type for provider operations.
#[derive(Error, Debug)]
pub enum ProviderError {
    #[error("Provider not configured: {0}")]
    NotConfigured(String),

    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("API error: {0}")]
    ApiError(String),

    #[error("Rate limited")]
    RateLimited,

    #[error("Network error: {0}")]
    NetworkError(String),
}

/// A single non-streaming chat completion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatReply {
    pub text: String,
    pub generation_id: Option<String>,
}

#[async_trait]
pub trait LanguageModel: Send + Sync {
    /// Provider name, for logs.
    fn name(&self) -> &str;

    /// Send one user message and wait for the full reply.
    async fn chat(&self, message: &str) -> Result<ChatReply, ProviderError>;
}
