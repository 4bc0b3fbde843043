use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tokio::sync::Mutex;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    System,
    User,
    Assistant,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub role: Role,
    pub content: String,
}

impl Message {
    pub fn system(content: impl Into<String>) -> Self {
        Message {
            role: Role::System,
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Message {
            role: Role::User,
            content: content.into(),
        }
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Message {
            role: Role::Assistant,
            content: content.into(),
        }
    }
}

/// Copy of the transcript taken at one point in time.
#[derive(Debug, Clone)]
pub struct Snapshot {
    pub generation: u64,
    pub messages: Vec<Message>,
}

#[derive(Debug)]
struct Inner {
    generation: u64,
    messages: Vec<Message>,
}

/// Conversation history shared by every request handler.
///
/// The first element is always the system message. `reset` bumps the
/// generation so that turns started before the reset can be detected and
/// dropped by [`Transcript::append`].
#[derive(Debug, Clone)]
pub struct Transcript {
    system_prompt: Arc<str>,
    inner: Arc<Mutex<Inner>>,
}

impl Transcript {
    pub fn new(system_prompt: &str) -> Self {
        Transcript {
            system_prompt: Arc::from(system_prompt),
            inner: Arc::new(Mutex::new(Inner {
                generation: 0,
                messages: vec![Message::system(system_prompt)],
            })),
        }
    }

    pub async fn snapshot(&self) -> Snapshot {
        let inner = self.inner.lock().await;
        Snapshot {
            generation: inner.generation,
            messages: inner.messages.clone(),
        }
    }

    /// Appends `messages` in one step. Returns `false` and leaves the
    /// transcript untouched if it was reset after `generation` was read.
    pub async fn append<I>(&self, generation: u64, messages: I) -> bool
    where
        I: IntoIterator<Item = Message>,
    {
        let mut inner = self.inner.lock().await;
        if inner.generation != generation {
            return false;
        }
        inner.messages.extend(messages);
        true
    }

    pub async fn reset(&self) {
        let mut inner = self.inner.lock().await;
        inner.generation += 1;
        inner.messages = vec![Message::system(self.system_prompt.as_ref())];
    }

    pub async fn len(&self) -> usize {
        self.inner.lock().await.messages.len()
    }

    pub async fn messages(&self) -> Vec<Message> {
        self.inner.lock().await.messages.clone()
    }
}
