//! The `tavily_search` tool.

use crate::TavilyClient;
use runtime::Runtime;
use schemars::JsonSchema;
use serde::Deserialize;
use wcore::model::{Registry, Tool};

/// Tool name under which search is registered.
pub const TOOL_NAME: &str = "tavily_search";

/// Arguments of the `tavily_search` tool.
#[derive(Debug, Deserialize, JsonSchema)]
pub struct SearchInput {
    /// Free-text search query.
    pub query: String,
}

/// The `tavily_search` tool definition.
pub fn tool() -> Tool {
    Tool {
        name: TOOL_NAME.into(),
        description: "A search engine optimized for comprehensive, accurate, and trusted \
                      results. Useful for answering questions about current events. \
                      Input should be a search query."
            .into(),
        parameters: schemars::schema_for!(SearchInput),
        strict: true,
    }
}

/// Handle a `tavily_search` tool call with JSON arguments.
///
/// Failures are returned as text so the calling model can react.
pub async fn handle(client: &TavilyClient, arguments: &str) -> String {
    let input: SearchInput = match serde_json::from_str(arguments) {
        Ok(input) => input,
        Err(e) => return format!("invalid arguments: {e}"),
    };
    match client.search(&input.query).await {
        Ok(response) => serde_json::to_string(&response)
            .unwrap_or_else(|e| format!("search error: {e}")),
        Err(e) => {
            tracing::warn!("tavily search failed: {e}");
            format!("search error: {e}")
        }
    }
}

/// Register the `tavily_search` tool on a runtime.
///
/// The client is shared by every agent that lists the tool.
pub fn register<R: Registry>(runtime: &mut Runtime<R>, client: TavilyClient) {
    runtime.register(tool(), move |args| {
        let client = client.clone();
        async move { handle(&client, &args).await }
    });
}
