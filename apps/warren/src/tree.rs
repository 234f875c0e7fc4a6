//! The warren agent tree.
//!
//! ```text
//! root_agent
//!  ├─ greeting_agent
//!  ├─ farewell_agent
//!  ├─ weather_agent  -> tavily_search
//!  └─ animal_agent
//!      └─ cat_agent
//!          └─ search_agent (openai/gpt-4o-mini) -> tavily_search
//! ```
//!
//! Delegation rules are prose for the model. Nothing here branches on
//! user input.

use crate::config::SEARCH_MODEL;
use wcore::{Agent, AgentTree, TreeError};

/// Name of the entry agent.
pub const ROOT: &str = "root_agent";

const ROOT_DESCRIPTION: &str = "You are the main Agent, coordinating a team. - Your main task: answer the user's query based on your knwoledge. - Delegation Rules: - If the user gives a simple greeting (like 'Hi', 'Hello'), delegate to `greeting_agent`. - If the user gives a simple farewell (like 'Bye', 'See you'), delegate to `farewell_agent`. - If the user gives a weather query (like 'What's the weather in Chennai?'), delegate to `weather_agent`. - If the user gives a animal query (like 'What's the cat information?'), delegate to `animal_agent`. - If the user gives a question related to USD, delegate to `search_agent`.";

/// Build the agent tree.
///
/// With `mock_weather` the weather agent also gets the local
/// `get_weather` tool next to web search.
pub fn build(mock_weather: bool) -> Result<AgentTree, TreeError> {
    AgentTree::new(root(mock_weather))
}

fn root(mock_weather: bool) -> Agent {
    Agent::new(ROOT)
        .description(ROOT_DESCRIPTION)
        .sub_agent(greeting())
        .sub_agent(farewell())
        .sub_agent(weather_agent(mock_weather))
        .sub_agent(animal())
}

fn greeting() -> Agent {
    Agent::new("greeting_agent")
        .description("Handles simple greetings and hellos")
        .system_prompt(
            "You are the Greeting Agent. Your ONLY task is to provide a friendly greeting to the user. ",
        )
}

fn farewell() -> Agent {
    Agent::new("farewell_agent")
        .description("Handles simple farewells and goodbyes")
        .system_prompt(
            "You are the Farewell Agent. Your ONLY task is to provide a polite goodbye message.",
        )
}

fn weather_agent(mock_weather: bool) -> Agent {
    let agent = Agent::new("weather_agent")
        .description("Handles weather information")
        .system_prompt(
            "You are the Weather Agent. Your ONLY task is to provide the weather information for the given city. I can answer your questions by searching the internet",
        )
        .tool(search::tool::TOOL_NAME);
    if mock_weather {
        agent.tool(weather::TOOL_NAME)
    } else {
        agent
    }
}

fn animal() -> Agent {
    Agent::new("animal_agent")
        .description("Any question about animal such as cat, dog, etc.")
        .system_prompt(
            "You are the Animal Agent. Your ONLY task is to provide the animal information for the given animal. - Delegation Rules: About Cat, delegate to cat_agent.Do not perform any other actions.",
        )
        .sub_agent(cat())
}

fn cat() -> Agent {
    Agent::new("cat_agent")
        .description("Handles cat information")
        .system_prompt(
            "You are the Cat Agent. Your ONLY task is to provide the cat information for the given cat. - Delegation Rules: If cat needs go to hospital, delegate to search_agent to find the nearest hospital",
        )
        .sub_agent(search_agent())
}

fn search_agent() -> Agent {
    Agent::new("search_agent")
        .description(
            "A helpful assistant agent that can answer questions. Search internet for the given query",
        )
        .system_prompt("Agent to answer questions using TavilySearch")
        .model(SEARCH_MODEL)
        .tool(search::tool::TOOL_NAME)
}

/// Render the tree with each agent's model and tools.
///
/// Agents without a pinned model show `default_model`.
pub fn render(tree: &AgentTree, default_model: &str) -> String {
    let mut out = String::new();
    for (depth, agent) in tree.walk() {
        let model = agent.model.as_deref().unwrap_or(default_model);
        out.push_str(&"  ".repeat(depth));
        out.push_str(&format!("{} ({model})", agent.name));

        let tools = agent
            .tools
            .iter()
            .map(|t| t.as_str())
            .chain(agent.sub_agents.iter().map(|a| a.name.as_str()))
            .collect::<Vec<_>>();
        if !tools.is_empty() {
            out.push_str(&format!(" -> {}", tools.join(", ")));
        }
        out.push('\n');
    }
    out
}
