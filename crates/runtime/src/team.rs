//! Team composition: register sub-agents as tools in the runtime.
//!
//! Each worker agent is exposed as a tool on its leader. When the leader
//! calls a worker tool, the handler runs a self-contained send loop using
//! captured state (registry, config, agent config, tools, handlers), with
//! no reference back to the Runtime.
//!
//! [`Runtime::mount`] applies this recursively to a whole
//! [`AgentTree`]: children are mounted before their parent, so a worker's
//! captured tools already include its own children.

use crate::{Handler, MAX_TOOL_CALLS, Runtime};
use anyhow::{Result, bail};
use compact_str::CompactString;
use std::{collections::BTreeMap, fmt::Write, sync::Arc};
use wcore::{
    Agent, AgentTree,
    model::{General, Message, Registry, Tool, ToolChoice},
};

impl<R: Registry> Runtime<R> {
    /// Mount an agent tree.
    ///
    /// Registers every agent, and every non-root agent as a worker tool
    /// on its parent. Fails if an agent name collides with a tool that is
    /// already registered.
    pub fn mount(&mut self, tree: &AgentTree) -> Result<()> {
        let root = mount_agent(self, tree.root().clone())?;
        tracing::info!(
            "mounted agent tree at '{}' ({} agents)",
            root.name,
            tree.len()
        );
        self.add_agent(root);
        Ok(())
    }
}

fn mount_agent<R: Registry>(runtime: &mut Runtime<R>, agent: Agent) -> Result<Agent> {
    let mut workers = Vec::with_capacity(agent.sub_agents.len());
    for child in &agent.sub_agents {
        workers.push(mount_agent(runtime, child.clone())?);
    }
    build_team(agent, workers, runtime)
}

/// Build a team: register each worker as a tool and add it to the leader.
///
/// Each worker's handler captures everything it needs to independently run
/// a conversation: registry, model, config, agent config, resolved tool
/// schemas and resolved tool handlers.
pub fn build_team<R: Registry>(
    mut leader: Agent,
    workers: Vec<Agent>,
    runtime: &mut Runtime<R>,
) -> Result<Agent> {
    for worker in workers {
        if runtime.has_tool(&worker.name) {
            bail!(
                "agent '{}' collides with a registered tool of the same name",
                worker.name
            );
        }

        let tool_def = worker_tool(worker.name.clone(), worker.description.clone());
        let (worker_tools, worker_handlers) = {
            let resolved = runtime.resolve_tools(&worker.tools);
            let mut t = Vec::with_capacity(resolved.len());
            let mut h = BTreeMap::new();
            for (tool, handler) in resolved {
                h.insert(tool.name.clone(), handler);
                t.push(tool);
            }
            (t, h)
        };

        let ctx = Arc::new(WorkerCtx {
            registry: runtime.registry().clone(),
            model: worker.model.clone(),
            config: runtime.config().clone(),
            prompt: compose_prompt(&worker),
            tools: worker_tools,
            handlers: worker_handlers,
        });

        tracing::debug!("registering worker '{}' under '{}'", worker.name, leader.name);
        runtime.register(tool_def, move |args| {
            let ctx = Arc::clone(&ctx);
            async move {
                let input = match extract_input(&args) {
                    Ok(input) => input,
                    Err(e) => return format!("invalid arguments: {e}"),
                };
                worker_send(&ctx, input).await
            }
        });

        if !leader.tools.contains(&worker.name) {
            leader.tools.push(worker.name.clone());
        }
        runtime.add_agent(worker);
    }
    Ok(leader)
}

/// Shared immutable state for a worker handler, wrapped in Arc
/// to avoid cloning the registry, `Vec<Tool>` and handler map per call.
struct WorkerCtx<R: Registry> {
    registry: R,
    /// Pinned model; `None` follows the registry's active model per call.
    model: Option<CompactString>,
    config: General,
    prompt: String,
    tools: Vec<Tool>,
    handlers: BTreeMap<CompactString, Handler>,
}

/// Run a self-contained send loop for a worker agent.
///
/// Sends the input as a user message and loops through tool calls up to
/// [`MAX_TOOL_CALLS`]. Failures are returned as text for the leader.
async fn worker_send<R: Registry>(ctx: &WorkerCtx<R>, input: String) -> String {
    let mut messages = vec![Message::system(&ctx.prompt), Message::user(input)];
    let mut tool_choice = ToolChoice::Auto;
    let base_cfg = ctx.config.clone().with_tools(ctx.tools.clone());
    let model = ctx
        .model
        .clone()
        .unwrap_or_else(|| ctx.registry.active_model());

    for _ in 0..MAX_TOOL_CALLS {
        let cfg = base_cfg.clone().with_tool_choice(tool_choice.clone());
        let response = match ctx.registry.send(&model, &cfg, &messages).await {
            Ok(r) => r,
            Err(e) => return format!("worker error: {e}"),
        };
        let Some(message) = response.message() else {
            return response.content().cloned().unwrap_or_default();
        };

        if message.tool_calls.is_empty() {
            return message.content;
        }

        let mut tool_results = Vec::with_capacity(message.tool_calls.len());
        for call in &message.tool_calls {
            let output = if let Some(handler) = ctx.handlers.get(call.function.name.as_str()) {
                handler(call.function.arguments.clone()).await
            } else {
                format!("function {} not available", call.function.name)
            };
            tool_results.push(Message::tool(output, call.id.clone()));
        }

        messages.push(message);
        messages.extend(tool_results);
        tool_choice = ToolChoice::None;
    }

    "worker: max tool calls reached".to_string()
}

/// The system prompt sent for an agent.
///
/// The agent's instruction, followed by a list of the sub-agents it may
/// delegate to.
pub fn compose_prompt(agent: &Agent) -> String {
    let mut prompt = agent.instruction().to_owned();
    if agent.sub_agents.is_empty() {
        return prompt;
    }

    prompt.push_str("\n\nYou can delegate to the following agents by calling them as tools:\n");
    for child in &agent.sub_agents {
        let _ = writeln!(prompt, "- `{}`: {}", child.name, child.description);
    }
    prompt
}

/// Build a tool definition for a worker agent.
///
/// Uses a standard `{ input: string }` schema so the leader
/// can delegate tasks with a single text field.
pub fn worker_tool(name: impl Into<CompactString>, description: impl Into<String>) -> Tool {
    Tool {
        name: name.into(),
        description: description.into(),
        parameters: default_input_schema(),
        strict: true,
    }
}

/// Extract the `input` field from tool call arguments JSON.
pub fn extract_input(arguments: &str) -> Result<String> {
    let parsed: serde_json::Value = serde_json::from_str(arguments)?;
    parsed
        .get("input")
        .and_then(|v| v.as_str())
        .map(String::from)
        .ok_or_else(|| anyhow::anyhow!("missing 'input' field in arguments"))
}

/// Default input schema for agent-as-tool calls.
#[derive(schemars::JsonSchema, serde::Deserialize)]
#[allow(dead_code)]
struct DefaultInput {
    /// The task or question to delegate to this agent.
    input: String,
}

fn default_input_schema() -> schemars::Schema {
    schemars::schema_for!(DefaultInput)
}
