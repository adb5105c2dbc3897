//! Test-only `TextGenerator` that records calls instead of reaching the network.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;

use super::{GenerationError, TextGenerator};

enum Reply {
    Fixed(String),
    Echo,
    Fail(u16, String),
}

pub struct MockGenerator {
    reply: Reply,
    credential: bool,
    calls: AtomicUsize,
    last_prompt: Mutex<Option<String>>,
}

impl MockGenerator {
    fn with_reply(reply: Reply) -> Self {
        Self {
            reply,
            credential: true,
            calls: AtomicUsize::new(0),
            last_prompt: Mutex::new(None),
        }
    }

    /// Always answers with `text`.
    pub fn replying(text: &str) -> Self {
        Self::with_reply(Reply::Fixed(text.to_string()))
    }

    /// Answers with the prompt it was given.
    pub fn echoing() -> Self {
        Self::with_reply(Reply::Echo)
    }

    /// Fails every call with an API error carrying `message`.
    pub fn failing(status: u16, message: &str) -> Self {
        Self::with_reply(Reply::Fail(status, message.to_string()))
    }

    /// Behaves as if the server started without a credential.
    pub fn without_credential(mut self) -> Self {
        self.credential = false;
        self
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn last_prompt(&self) -> Option<String> {
        self.last_prompt.lock().unwrap().clone()
    }
}

#[async_trait]
impl TextGenerator for MockGenerator {
    fn has_credential(&self) -> bool {
        self.credential
    }

    async fn generate(&self, prompt: &str) -> Result<String, GenerationError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        *self.last_prompt.lock().unwrap() = Some(prompt.to_string());

        match &self.reply {
            Reply::Fixed(text) => Ok(text.clone()),
            Reply::Echo => Ok(prompt.to_string()),
            Reply::Fail(status, message) => Err(GenerationError::Api {
                status: *status,
                message: message.clone(),
            }),
        }
    }
}
