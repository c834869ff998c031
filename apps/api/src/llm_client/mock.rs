//! Stub model for tests.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use super::{LlmError, SamplingConfig, TextModel};

#[derive(Clone)]
enum Reply {
    Text(String),
    Empty,
    Fail(String),
}

/// Records every prompt it receives and answers with a canned reply.
#[derive(Clone)]
pub struct StubModel {
    reply: Reply,
    calls: Arc<AtomicUsize>,
    prompts: Arc<Mutex<Vec<(String, SamplingConfig)>>>,
}

impl StubModel {
    fn with_reply(reply: Reply) -> Self {
        Self {
            reply,
            calls: Arc::new(AtomicUsize::new(0)),
            prompts: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn replying(text: &str) -> Self {
        Self::with_reply(Reply::Text(text.to_string()))
    }

    pub fn empty() -> Self {
        Self::with_reply(Reply::Empty)
    }

    pub fn failing(message: &str) -> Self {
        Self::with_reply(Reply::Fail(message.to_string()))
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn last_prompt(&self) -> Option<String> {
        self.prompts.lock().unwrap().last().map(|(p, _)| p.clone())
    }

    pub fn last_sampling(&self) -> Option<SamplingConfig> {
        self.prompts.lock().unwrap().last().map(|(_, s)| *s)
    }
}

#[async_trait]
impl TextModel for StubModel {
    async fn generate(&self, prompt: &str, sampling: &SamplingConfig) -> Result<String, LlmError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.prompts
            .lock()
            .unwrap()
            .push((prompt.to_string(), *sampling));

        match &self.reply {
            Reply::Text(text) => Ok(text.clone()),
            Reply::Empty => Err(LlmError::EmptyContent),
            Reply::Fail(message) => Err(LlmError::Api {
                status: 503,
                message: message.clone(),
            }),
        }
    }
}
