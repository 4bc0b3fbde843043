use crate::config::{RelayConfig, SYSTEM_PROMPT};
use crate::error::{RelayError, Result};
use crate::io_struct::StatusResponse;
use crate::transcript::{Message, Transcript};
use crate::upstream::CompletionClient;
use std::time::{Duration, Instant};

#[derive(Debug, Clone)]
pub struct Reply {
    pub content: String,
    pub elapsed: Duration,
}

impl Reply {
    pub fn elapsed_display(&self) -> String {
        format!("{:.2}s", self.elapsed.as_secs_f64())
    }
}

#[derive(Debug, Clone)]
pub struct RelayState {
    pub transcript: Transcript,
    pub upstream: CompletionClient,
}

impl RelayState {
    pub fn new(config: &RelayConfig) -> Result<Self> {
        Ok(Self {
            transcript: Transcript::new(SYSTEM_PROMPT),
            upstream: CompletionClient::new(config)?,
        })
    }

    /// Runs one conversation turn against the completion API.
    ///
    /// The user message and the reply are committed together, and only on
    /// success. A failed turn leaves the transcript as it was.
    ///
    /// Concurrent turns are each sent with the history as it stood when they
    /// started, and are committed in the order their replies arrive.
    pub async fn submit(&self, message: &str) -> Result<Reply> {
        if message.trim().is_empty() {
            return Err(RelayError::Validation("message must not be empty".to_string()));
        }
        log::debug!("User message: {}", message);

        let user = Message::user(message);
        let snapshot = self.transcript.snapshot().await;
        let mut messages = snapshot.messages;
        messages.push(user.clone());

        let start = Instant::now();
        let response = self.upstream.complete(&messages).await?;
        let elapsed = start.elapsed();

        let content = match response.first_content() {
            Some(content) => content,
            None => {
                log::error!("Completion API response has no usable choice");
                return Err(RelayError::EmptyUpstreamResponse);
            }
        };
        log::debug!("Assistant reply: {}", content);

        let committed = self
            .transcript
            .append(snapshot.generation, [user, Message::assistant(content.clone())])
            .await;
        if !committed {
            log::warn!("Transcript was reset during the request, reply not recorded");
        }

        Ok(Reply { content, elapsed })
    }

    pub async fn reset(&self) -> StatusResponse {
        self.transcript.reset().await;
        log::info!("Conversation reset");
        StatusResponse::new("reset")
    }

    pub fn health_check(&self) -> StatusResponse {
        StatusResponse::new("ok")
    }
}
