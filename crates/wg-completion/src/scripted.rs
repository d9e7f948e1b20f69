//! In-process [`Completer`] with canned replies, for tests.

use std::collections::VecDeque;
use std::sync::Mutex;

use serde_json::{Value, json};

use crate::{Completer, CompletionError};

/// One canned answer.
#[derive(Debug, Clone)]
pub enum Reply {
    /// A normal payload whose first choice carries this text.
    Text(String),
    /// A payload passed back verbatim.
    Raw(Value),
    /// An upstream non-success status.
    Fail { status: u16, message: String },
}

impl Reply {
    #[must_use]
    pub fn text(text: impl Into<String>) -> Self {
        Self::Text(text.into())
    }

    fn into_result(self) -> Result<Value, CompletionError> {
        match self {
            Self::Text(text) => Ok(json!({
                "choices": [{ "message": { "role": "assistant", "content": text } }]
            })),
            Self::Raw(value) => Ok(value),
            Self::Fail { status, message } => Err(CompletionError::Api { status, message }),
        }
    }
}

/// Answers prompts from rules first (`prompt contains needle`), then from
/// a FIFO queue. Every prompt is recorded.
#[derive(Debug, Default)]
pub struct ScriptedCompleter {
    rules: Vec<(String, Reply)>,
    queue: Mutex<VecDeque<Reply>>,
    prompts: Mutex<Vec<String>>,
}

impl ScriptedCompleter {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Answer any prompt containing `needle` with `reply`.
    #[must_use]
    pub fn when(mut self, needle: impl Into<String>, reply: Reply) -> Self {
        self.rules.push((needle.into(), reply));
        self
    }

    /// Queue replies for prompts no rule matches.
    #[must_use]
    pub fn then(self, reply: Reply) -> Self {
        if let Ok(mut queue) = self.queue.lock() {
            queue.push_back(reply);
        }
        self
    }

    /// Prompts received so far, in call order.
    #[must_use]
    pub fn prompts(&self) -> Vec<String> {
        self.prompts.lock().map(|p| p.clone()).unwrap_or_default()
    }
}

impl Completer for ScriptedCompleter {
    async fn complete_raw(&self, prompt: &str) -> Result<Value, CompletionError> {
        if let Ok(mut prompts) = self.prompts.lock() {
            prompts.push(prompt.to_string());
        }
        let ruled = self
            .rules
            .iter()
            .find(|(needle, _)| prompt.contains(needle.as_str()))
            .map(|(_, reply)| reply.clone());
        let reply = match ruled {
            Some(reply) => reply,
            None => self
                .queue
                .lock()
                .ok()
                .and_then(|mut queue| queue.pop_front())
                .unwrap_or(Reply::Fail {
                    status: 500,
                    message: "no scripted reply".into(),
                }),
        };
        reply.into_result()
    }
}
