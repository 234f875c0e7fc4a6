//! Agent configuration.
//!
//! An [`Agent`] is pure config: name, description, instruction, model,
//! tool names and sub-agents. Tool handlers live in the runtime, and so
//! does the decision of when to delegate.

use compact_str::CompactString;

/// An agent configuration.
///
/// Agents describe *what* an agent does but not *how* tool calls are
/// dispatched. The runtime resolves tool names to handlers and exposes
/// each sub-agent to its parent as a callable tool.
#[derive(Debug, Clone, Default)]
pub struct Agent {
    /// Agent identifier, unique across a tree (used as the delegation key).
    pub name: CompactString,
    /// Human-readable description (shown to the parent as tool description).
    pub description: String,
    /// Instruction sent as the system prompt before each LLM request.
    pub system_prompt: String,
    /// Model override. `None` uses the registry's active model.
    pub model: Option<CompactString>,
    /// Names of tools this agent can use (resolved by the runtime).
    pub tools: Vec<CompactString>,
    /// Child agents this agent may delegate to, in declaration order.
    pub sub_agents: Vec<Agent>,
}

impl Agent {
    /// Create a new agent with the given name.
    pub fn new(name: impl Into<CompactString>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    /// Set the system prompt.
    pub fn system_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.system_prompt = prompt.into();
        self
    }

    /// Set the description.
    pub fn description(mut self, desc: impl Into<String>) -> Self {
        self.description = desc.into();
        self
    }

    /// Set the model backing this agent.
    pub fn model(mut self, model: impl Into<CompactString>) -> Self {
        self.model = Some(model.into());
        self
    }

    /// Add a tool by name.
    pub fn tool(mut self, name: impl Into<CompactString>) -> Self {
        self.tools.push(name.into());
        self
    }

    /// Add a sub-agent.
    pub fn sub_agent(mut self, agent: Agent) -> Self {
        self.sub_agents.push(agent);
        self
    }

    /// Whether this agent has no sub-agents.
    pub fn is_leaf(&self) -> bool {
        self.sub_agents.is_empty()
    }

    /// The text used as this agent's system prompt.
    ///
    /// Falls back to the description when no instruction is set.
    pub fn instruction(&self) -> &str {
        if self.system_prompt.trim().is_empty() {
            &self.description
        } else {
            &self.system_prompt
        }
    }
}
