//! Mock provider for testing.

use super::{ChatReply, LanguageModel, ProviderError};
use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Mock language model that echoes the message and counts calls.
#[derive(Default)]
pub struct MockLanguageModel {
    calls: AtomicUsize,
}

impl MockLanguageModel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl LanguageModel for MockLanguageModel {
    fn name(&self) -> &str {
        "mock"
    }

    async fn chat(&self, message: &str) -> Result<ChatReply, ProviderError> {
        self.calls.fetch_add(1, Ordering::SeqCst);

        Ok(ChatReply {
            text: format!("Mock response for: {}", message),
            generation_id: None,
        })
    }
}
