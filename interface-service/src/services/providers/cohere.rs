//! Cohere API client.
//!
//! Holds the credential and a configured HTTP client. One instance is built at
//! startup and shared for the life of the process.

use super::{ChatReply, LanguageModel, ProviderError};
use crate::config::CohereConfig;
use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use secrecy::{ExposeSecret, Secret};
use serde::{Deserialize, Serialize};
use std::time::Duration;

pub struct CohereClient {
    api_key: Secret<String>,
    base_url: String,
    client: Client,
}

impl CohereClient {
    pub fn new(config: &CohereConfig) -> Result<Self, ProviderError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| {
                ProviderError::NotConfigured(format!("Failed to create HTTP client: {}", e))
            })?;

        Ok(Self {
            api_key: config.api_key.clone(),
            base_url: config.base_url.clone(),
            client,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn api_url(&self, path: &str) -> String {
        format!("{}/v1/{}", self.base_url, path)
    }
}

#[async_trait]
impl LanguageModel for CohereClient {
    fn name(&self) -> &str {
        "cohere"
    }

    async fn chat(&self, message: &str) -> Result<ChatReply, ProviderError> {
        let request = ChatRequest { message };

        tracing::debug!(message_len = message.len(), "Sending request to Cohere API");

        let response = self
            .client
            .post(self.api_url("chat"))
            .bearer_auth(self.api_key.expose_secret())
            .json(&request)
            .send()
            .await
            .map_err(|e| ProviderError::NetworkError(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();

            return Err(match status {
                StatusCode::TOO_MANY_REQUESTS => ProviderError::RateLimited,
                StatusCode::UNAUTHORIZED => ProviderError::Unauthorized(error_text),
                _ => ProviderError::ApiError(format!(
                    "Cohere API error {}: {}",
                    status, error_text
                )),
            });
        }

        let body: ChatResponse = response
            .json()
            .await
            .map_err(|e| ProviderError::ApiError(format!("Failed to parse response: {}", e)))?;

        Ok(ChatReply {
            text: body.text,
            generation_id: body.generation_id,
        })
    }
}

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    message: &'a str,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    text: String,
    #[serde(default)]
    generation_id: Option<String>,
}
