use crate::config::RelayConfig;
use crate::error::{RelayError, Result};
use crate::io_struct::{CompletionRequest, CompletionResponse};
use crate::transcript::Message;
use std::time::Duration;

/// Thin client for an OpenAI-style `chat/completions` endpoint.
#[derive(Debug, Clone)]
pub struct CompletionClient {
    client: reqwest::Client,
    url: String,
    api_key: String,
    model: String,
}

impl CompletionClient {
    pub fn new(config: &RelayConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout))
            .build()?;
        Ok(CompletionClient {
            client,
            url: config.upstream_url.clone(),
            api_key: config.api_key.clone(),
            model: config.model.clone(),
        })
    }

    /// Sends `messages` upstream and returns the parsed envelope.
    pub async fn complete(&self, messages: &[Message]) -> Result<CompletionResponse> {
        let request = CompletionRequest {
            model: &self.model,
            messages,
        };
        let resp = self
            .client
            .post(&self.url)
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await?;

        let status = resp.status();
        log::info!("Completion API response status: {}", status.as_u16());
        let body = resp.bytes().await?;

        if !status.is_success() {
            let body = String::from_utf8_lossy(&body).into_owned();
            log::error!("Completion API error response ({}): {}", status.as_u16(), body);
            return Err(RelayError::UpstreamProtocol {
                status: status.as_u16(),
                body,
            });
        }

        serde_json::from_slice(&body).map_err(|e| {
            log::error!("Failed to parse completion API response: {}", e);
            RelayError::UpstreamProtocol {
                status: status.as_u16(),
                body: String::from_utf8_lossy(&body).into_owned(),
            }
        })
    }
}
