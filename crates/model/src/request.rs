//! OpenAI-compatible chat completions request body.

use serde::Serialize;
use serde_json::{Value, json};
use wcore::model::{General, Message, Tool, ToolChoice};

/// Chat completions request body.
#[derive(Debug, Clone, Serialize)]
pub struct Request {
    /// The model identifier (wire name).
    pub model: String,
    /// The messages to send.
    pub messages: Vec<Message>,
    /// Temperature.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f32>,
    /// Maximum tokens to generate.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_tokens: Option<usize>,
    /// Tools the model may call.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tools: Option<Value>,
    /// Tool choice control.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tool_choice: Option<Value>,
}

impl Request {
    /// Build a request for `model` from a chat config and messages.
    ///
    /// Tools and tool choice are omitted entirely when no tools are
    /// offered.
    pub fn new(model: &str, config: &General, messages: &[Message]) -> Self {
        let request = Self {
            model: model.to_owned(),
            messages: messages.to_vec(),
            temperature: config.temperature,
            max_tokens: config.max_tokens,
            tools: None,
            tool_choice: None,
        };
        if config.tools.is_empty() {
            return request;
        }
        request
            .with_tools(&config.tools)
            .with_tool_choice(&config.tool_choice)
    }

    /// Set the tools for the request.
    fn with_tools(self, tools: &[Tool]) -> Self {
        let tools = tools
            .iter()
            .map(|tool| {
                json!({
                    "type": "function",
                    "function": {
                        "name": tool.name,
                        "description": tool.description,
                        "parameters": parameters(tool),
                        "strict": tool.strict,
                    },
                })
            })
            .collect::<Vec<_>>();
        Self {
            tools: Some(json!(tools)),
            ..self
        }
    }

    /// Set the tool choice for the request.
    fn with_tool_choice(self, tool_choice: &ToolChoice) -> Self {
        Self {
            tool_choice: Some(match tool_choice {
                ToolChoice::None => json!("none"),
                ToolChoice::Auto => json!("auto"),
                ToolChoice::Required => json!("required"),
                ToolChoice::Function(name) => json!({
                    "type": "function",
                    "function": { "name": name }
                }),
            }),
            ..self
        }
    }
}

/// Tool parameters as a function-calling JSON schema.
///
/// Drops the generator's `$schema`/`title` keys; strict tools also close
/// the object with `additionalProperties: false`.
fn parameters(tool: &Tool) -> Value {
    let mut schema = json!(tool.parameters);
    if let Some(object) = schema.as_object_mut() {
        object.remove("$schema");
        object.remove("title");
        if tool.strict && object.get("type") == Some(&json!("object")) {
            object.insert("additionalProperties".into(), json!(false));
        }
    }
    schema
}
