//! Configuration for a chat request

use crate::model::{Tool, ToolChoice};
use serde::{Deserialize, Serialize};

/// Per-request chat configuration.
///
/// The model name is not part of this struct: the runtime passes it to
/// the [`Registry`](crate::model::Registry) separately so each agent can
/// use its own.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct General {
    /// Sampling temperature.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f32>,

    /// Maximum number of tokens to generate.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_tokens: Option<usize>,

    /// Context window limit override (in tokens).
    /// If `None`, the registry uses its default for the model.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub context_limit: Option<usize>,

    /// The tools offered for this request.
    #[serde(skip)]
    pub tools: Vec<Tool>,

    /// Controls which tool is called by the model.
    #[serde(skip)]
    pub tool_choice: ToolChoice,
}

impl General {
    /// Set the tools for this request.
    pub fn with_tools(mut self, tools: Vec<Tool>) -> Self {
        self.tools = tools;
        self
    }

    /// Set the tool choice for this request.
    ///
    /// This is set per round of the tool-call loop.
    pub fn with_tool_choice(mut self, tool_choice: ToolChoice) -> Self {
        self.tool_choice = tool_choice;
        self
    }
}
