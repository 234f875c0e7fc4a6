//! Chat session: agent name and message history.

use compact_str::CompactString;
use wcore::model::Message;

/// A chat session: agent name + conversation messages.
///
/// The system prompt is never stored here; the runtime prepends it on
/// every request.
#[derive(Debug, Clone)]
pub struct Chat {
    /// The agent name for this session.
    pub agent_name: CompactString,
    /// Conversation messages.
    pub messages: Vec<Message>,
}

impl Chat {
    /// Create a new chat session.
    pub fn new(agent_name: impl Into<CompactString>) -> Self {
        Self {
            agent_name: agent_name.into(),
            messages: Vec::new(),
        }
    }

    /// Get the agent name for this session.
    pub fn agent_name(&self) -> &str {
        &self.agent_name
    }

    /// Number of messages in this session.
    pub fn len(&self) -> usize {
        self.messages.len()
    }

    /// Whether this session has no messages.
    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }
}
