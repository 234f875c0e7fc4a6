//! Shared helpers for runtime tests.

#![allow(dead_code)]

use anyhow::Result;
use compact_str::CompactString;
use std::{
    collections::VecDeque,
    sync::{Arc, Mutex},
};
use warren_runtime::Runtime;
use wcore::model::{
    General, Message, Registry, Response, Tool, ToolCall, ToolChoice, default_context_limit,
};

/// One request seen by the scripted registry.
#[derive(Debug, Clone)]
pub struct Seen {
    pub model: String,
    pub system: String,
    pub tools: Vec<CompactString>,
    pub tool_choice: ToolChoice,
    pub last: Message,
}

/// A registry that replays canned assistant messages in order and records
/// every request it receives.
#[derive(Clone, Default)]
pub struct Scripted {
    replies: Arc<Mutex<VecDeque<Message>>>,
    seen: Arc<Mutex<Vec<Seen>>>,
    active: Arc<Mutex<Option<CompactString>>>,
}

impl Scripted {
    pub fn new(replies: impl IntoIterator<Item = Message>) -> Self {
        Self {
            replies: Arc::new(Mutex::new(replies.into_iter().collect())),
            seen: Arc::default(),
            active: Arc::default(),
        }
    }

    /// Change the active model, as `ProviderManager::switch` would.
    pub fn switch(&self, model: &str) {
        *self.active.lock().unwrap() = Some(model.into());
    }

    pub fn seen(&self) -> Vec<Seen> {
        self.seen.lock().unwrap().clone()
    }

    pub fn remaining(&self) -> usize {
        self.replies.lock().unwrap().len()
    }
}

impl Registry for Scripted {
    async fn send(&self, model: &str, config: &General, messages: &[Message]) -> Result<Response> {
        self.seen.lock().unwrap().push(Seen {
            model: model.to_owned(),
            system: messages.first().map(|m| m.content.clone()).unwrap_or_default(),
            tools: config.tools.iter().map(|t| t.name.clone()).collect(),
            tool_choice: config.tool_choice.clone(),
            last: messages.last().cloned().unwrap_or_default(),
        });
        let reply = self.replies.lock().unwrap().pop_front();
        match reply {
            Some(message) => Ok(Response::from_message(message)),
            None => anyhow::bail!("script exhausted"),
        }
    }

    fn context_limit(&self, model: &str) -> usize {
        default_context_limit(model)
    }

    fn active_model(&self) -> CompactString {
        self.active
            .lock()
            .unwrap()
            .clone()
            .unwrap_or_else(|| CompactString::const_new("gemini-2.0-flash-exp"))
    }
}

/// An assistant reply that calls one tool.
pub fn call(id: &str, name: &str, arguments: &str) -> Message {
    Message::assistant("", Some(&[ToolCall::function(id, name, arguments)]))
}

/// A final assistant reply.
pub fn answer(text: &str) -> Message {
    Message::assistant(text, None)
}

pub fn echo_tool() -> Tool {
    Tool {
        name: "echo".into(),
        description: "Echoes the input".into(),
        parameters: schemars::schema_for!(String),
        strict: false,
    }
}

pub fn runtime<R: Registry>(registry: R) -> Runtime<R> {
    Runtime::new(General::default(), registry)
}
