//! Scripted completion client for tests. Never touches the network.

use std::collections::VecDeque;
use std::sync::Mutex;

use async_trait::async_trait;

use super::{CompletionClient, LlmError};

/// Replays queued outcomes in order and records every prompt it was sent.
#[derive(Default)]
pub struct ScriptedCompletion {
    outcomes: Mutex<VecDeque<Result<String, LlmError>>>,
    prompts: Mutex<Vec<String>>,
}

impl ScriptedCompletion {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn replying(text: &str) -> Self {
        Self::new().then_reply(text)
    }

    pub fn failing(message: &str) -> Self {
        Self::new().then_fail(message)
    }

    pub fn then_reply(self, text: &str) -> Self {
        self.outcomes.lock().unwrap().push_back(Ok(text.to_string()));
        self
    }

    pub fn then_fail(self, message: &str) -> Self {
        self.outcomes.lock().unwrap().push_back(Err(LlmError::Api {
            status: 503,
            message: message.to_string(),
        }));
        self
    }

    pub fn prompts(&self) -> Vec<String> {
        self.prompts.lock().unwrap().clone()
    }
}

#[async_trait]
impl CompletionClient for ScriptedCompletion {
    async fn complete(&self, prompt: &str) -> Result<String, LlmError> {
        self.prompts.lock().unwrap().push(prompt.to_string());
        self.outcomes
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or(Err(LlmError::EmptyContent))
    }
}
