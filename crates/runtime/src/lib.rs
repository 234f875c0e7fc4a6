//! Warren runtime: tool dispatch and agent delegation.
//!
//! The [`Runtime`] holds the model registry, agent configurations and
//! tool handlers. Mounting an [`AgentTree`](wcore::AgentTree) exposes every
//! sub-agent to its parent as a tool; which tool gets called is left to
//! the model.
//!
//! # Example
//!
//! ```rust,ignore
//! use runtime::Runtime;
//! use wcore::{Agent, AgentTree, model::{General, Message}};
//!
//! let tree = AgentTree::new(
//!     Agent::new("root")
//!         .system_prompt("You coordinate.")
//!         .sub_agent(Agent::new("greeter").description("Says hello")),
//! )?;
//! let mut runtime = Runtime::new(General::default(), registry);
//! runtime.mount(&tree)?;
//! let response = runtime.send_to("root", Message::user("hi")).await?;
//! ```

pub use chat::Chat;
pub use team::{build_team, compose_prompt, extract_input, worker_tool};

use anyhow::Result;
use compact_str::CompactString;
use std::{collections::BTreeMap, future::Future, pin::Pin, sync::Arc};
use wcore::{
    Agent,
    model::{General, Message, Registry, Response, Role, Tool, ToolCall, ToolChoice, estimate_tokens},
};

mod chat;
pub mod team;

/// Maximum tool-call rounds per request before giving up.
pub const MAX_TOOL_CALLS: usize = 16;

/// A type-erased async tool handler.
pub type Handler =
    Arc<dyn Fn(String) -> Pin<Box<dyn Future<Output = String> + Send>> + Send + Sync>;

/// The Warren runtime.
///
/// Holds the model registry, agent configurations, tool handlers and
/// internal chat sessions. Once agents are mounted the runtime is only
/// read by [`send`](Runtime::send), so it can be shared behind an `Arc`.
pub struct Runtime<R: Registry> {
    registry: R,
    config: General,
    tools: BTreeMap<CompactString, (Tool, Handler)>,
    agents: BTreeMap<CompactString, Agent>,
    sessions: BTreeMap<CompactString, Chat>,
}

impl<R: Registry> Runtime<R> {
    /// Create a new runtime with the given config and registry.
    pub fn new(config: General, registry: R) -> Self {
        Self {
            registry,
            config,
            tools: BTreeMap::new(),
            agents: BTreeMap::new(),
            sessions: BTreeMap::new(),
        }
    }

    /// The model registry.
    pub fn registry(&self) -> &R {
        &self.registry
    }

    /// The base request config.
    pub fn config(&self) -> &General {
        &self.config
    }

    /// Register an agent.
    pub fn add_agent(&mut self, agent: Agent) {
        self.agents.insert(agent.name.clone(), agent);
    }

    /// Get a registered agent by name.
    pub fn agent(&self, name: &str) -> Option<&Agent> {
        self.agents.get(name)
    }

    /// Names of all registered agents.
    pub fn agents(&self) -> impl Iterator<Item = &str> {
        self.agents.keys().map(CompactString::as_str)
    }

    /// Register a tool with its handler.
    ///
    /// A tool with the same name replaces the previous one.
    pub fn register<F, Fut>(&mut self, tool: Tool, handler: F)
    where
        F: Fn(String) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = String> + Send + 'static,
    {
        let name = tool.name.clone();
        let handler: Handler = Arc::new(move |args| Box::pin(handler(args)));
        self.tools.insert(name, (tool, handler));
    }

    /// Whether a tool with this name is registered.
    pub fn has_tool(&self, name: &str) -> bool {
        self.tools.contains_key(name)
    }

    /// Resolve tool schemas for the given tool names.
    ///
    /// Unknown names are skipped.
    pub fn resolve(&self, names: &[CompactString]) -> Vec<Tool> {
        names
            .iter()
            .filter_map(|name| self.tools.get(name.as_str()).map(|(tool, _)| tool.clone()))
            .collect()
    }

    /// Resolve tool schemas together with their handlers.
    pub(crate) fn resolve_tools(&self, names: &[CompactString]) -> Vec<(Tool, Handler)> {
        names
            .iter()
            .filter_map(|name| match self.tools.get(name.as_str()) {
                Some((tool, handler)) => Some((tool.clone(), Arc::clone(handler))),
                None => {
                    tracing::warn!("tool '{name}' is not registered, skipping");
                    None
                }
            })
            .collect()
    }

    /// Dispatch tool calls and collect results as tool messages.
    pub async fn dispatch(&self, calls: &[ToolCall]) -> Vec<Message> {
        let mut results = Vec::with_capacity(calls.len());
        for call in calls {
            tracing::debug!("dispatching tool call {}", call.function.name);
            let output = if let Some((_, handler)) = self.tools.get(call.function.name.as_str()) {
                handler(call.function.arguments.clone()).await
            } else {
                format!("function {} not available", call.function.name)
            };
            results.push(Message::tool(output, call.id.clone()));
        }
        results
    }

    /// Create a new chat session for the named agent.
    pub fn chat(&self, agent: &str) -> Result<Chat> {
        if !self.agents.contains_key(agent) {
            anyhow::bail!("agent '{agent}' not registered");
        }
        Ok(Chat::new(agent))
    }

    /// The model backing an agent: its override or the active model.
    pub fn model_for(&self, agent: &Agent) -> CompactString {
        agent
            .model
            .clone()
            .unwrap_or_else(|| self.registry.active_model())
    }

    /// Context window limit for the named agent's model.
    pub fn context_limit(&self, agent: &str) -> usize {
        if let Some(limit) = self.config.context_limit {
            return limit;
        }
        let model = match self.agents.get(agent) {
            Some(a) => self.model_for(a),
            None => self.registry.active_model(),
        };
        self.registry.context_limit(&model)
    }

    /// Estimate current token usage for a chat session.
    pub fn estimate_tokens(&self, chat: &Chat) -> usize {
        let system_tokens = self
            .agents
            .get(chat.agent_name())
            .map(|a| (compose_prompt(a).len() / 4).max(1))
            .unwrap_or(0);
        system_tokens + estimate_tokens(&chat.messages)
    }

    /// Build the message list for an API request.
    fn api_messages(&self, agent: &Agent, chat: &Chat) -> Vec<Message> {
        let mut messages = Vec::with_capacity(chat.messages.len() + 1);
        if chat.messages.first().map(|m| m.role) != Some(Role::System) {
            messages.push(Message::system(compose_prompt(agent)));
        }
        messages.extend(chat.messages.iter().cloned());
        messages
    }

    /// Send a message through a chat session.
    ///
    /// Loops through tool calls (including delegations to sub-agents) until
    /// the model answers without calling a tool.
    pub async fn send(&self, chat: &mut Chat, message: Message) -> Result<Response> {
        let agent = self
            .agents
            .get(chat.agent_name())
            .ok_or_else(|| anyhow::anyhow!("agent '{}' not registered", chat.agent_name))?;
        let model = self.model_for(agent);
        let tools = self.resolve(&agent.tools);
        let mut tool_choice = ToolChoice::Auto;
        chat.messages.push(message);

        for _ in 0..MAX_TOOL_CALLS {
            let messages = self.api_messages(agent, chat);
            let cfg = self
                .config
                .clone()
                .with_tools(tools.clone())
                .with_tool_choice(tool_choice.clone());
            let response = self.registry.send(&model, &cfg, &messages).await?;
            let Some(message) = response.message() else {
                return Ok(response);
            };

            if message.tool_calls.is_empty() {
                chat.messages.push(message);
                return Ok(response);
            }

            let result = self.dispatch(&message.tool_calls).await;
            chat.messages.push(message);
            chat.messages.extend(result);
            tool_choice = ToolChoice::None;
        }

        anyhow::bail!("max tool calls reached");
    }

    /// Convenience: send to a named agent using an internal session.
    pub async fn send_to(&mut self, agent: &str, message: Message) -> Result<Response> {
        let key = CompactString::from(agent);
        let mut chat = match self.sessions.remove(&key) {
            Some(chat) => chat,
            None => self.chat(agent)?,
        };
        let result = self.send(&mut chat, message).await;
        self.sessions.insert(key, chat);
        result
    }

    /// The internal session of a named agent, if one was started.
    pub fn session(&self, agent: &str) -> Option<&Chat> {
        self.sessions.get(agent)
    }
}
