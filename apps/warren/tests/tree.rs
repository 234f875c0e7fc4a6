//! Tests for the warren agent tree.

use runtime::Runtime;
use search::{SearchConfig, TavilyClient};
use warren::tree::{self, ROOT};
use wcore::model::{General, NoopRegistry};

const AGENTS: [&str; 7] = [
    "root_agent",
    "greeting_agent",
    "farewell_agent",
    "weather_agent",
    "animal_agent",
    "cat_agent",
    "search_agent",
];

#[test]
fn declares_seven_uniquely_named_agents() {
    let tree = tree::build(false).unwrap();
    assert_eq!(tree.len(), 7);
    assert_eq!(tree.depth(), 3);
    assert_eq!(tree.root().name, ROOT);
    assert_eq!(tree.names(), AGENTS);
}

#[test]
fn root_delegates_to_four_children() {
    let tree = tree::build(false).unwrap();
    let children: Vec<_> = tree
        .root()
        .sub_agents
        .iter()
        .map(|a| a.name.as_str())
        .collect();
    assert_eq!(
        children,
        ["greeting_agent", "farewell_agent", "weather_agent", "animal_agent"]
    );
}

#[test]
fn cat_agent_reachable_only_through_animal_agent() {
    let tree = tree::build(false).unwrap();
    assert_eq!(tree.parent("cat_agent").unwrap().name, "animal_agent");
    assert_eq!(
        tree.path("search_agent").unwrap(),
        ["root_agent", "animal_agent", "cat_agent", "search_agent"]
    );
}

#[test]
fn search_capability_on_weather_and_search_agents() {
    let tree = tree::build(false).unwrap();
    let with_search: Vec<_> = tree
        .walk()
        .filter(|(_, a)| a.tools.iter().any(|t| t == "tavily_search"))
        .map(|(_, a)| a.name.as_str())
        .collect();
    assert_eq!(with_search, ["weather_agent", "search_agent"]);
}

#[test]
fn only_search_agent_pins_a_model() {
    let tree = tree::build(false).unwrap();
    for (_, agent) in tree.walk() {
        match agent.name.as_str() {
            "search_agent" => assert_eq!(agent.model.as_deref(), Some("openai/gpt-4o-mini")),
            _ => assert!(agent.model.is_none(), "{}", agent.name),
        }
    }
}

#[test]
fn root_rules_live_in_description() {
    let tree = tree::build(false).unwrap();
    let root = tree.root();
    assert!(root.system_prompt.is_empty());
    assert!(root.instruction().contains("delegate to `greeting_agent`"));
    assert!(root.instruction().contains("delegate to `search_agent`"));
}

#[test]
fn leaf_text_is_verbatim() {
    let tree = tree::build(false).unwrap();
    let greeting = tree.find("greeting_agent").unwrap();
    assert_eq!(greeting.description, "Handles simple greetings and hellos");
    assert_eq!(
        greeting.system_prompt,
        "You are the Greeting Agent. Your ONLY task is to provide a friendly greeting to the user. "
    );
    let animal = tree.find("animal_agent").unwrap();
    assert!(animal.system_prompt.ends_with("delegate to cat_agent.Do not perform any other actions."));
}

#[test]
fn mock_weather_adds_lookup_tool() {
    let tree = tree::build(true).unwrap();
    let weather = tree.find("weather_agent").unwrap();
    assert_eq!(weather.tools, ["tavily_search", "get_weather"]);
}

#[test]
fn render_shows_models_and_tools() {
    let tree = tree::build(false).unwrap();
    let out = tree::render(&tree, "gemini-2.0-flash-exp");
    let lines: Vec<_> = out.lines().collect();
    assert_eq!(lines.len(), 7);
    assert!(lines[0].starts_with("root_agent (gemini-2.0-flash-exp) -> greeting_agent"));
    assert_eq!(lines[1], "  greeting_agent (gemini-2.0-flash-exp)");
    assert_eq!(
        lines[6],
        "      search_agent (openai/gpt-4o-mini) -> tavily_search"
    );
}

#[test]
fn mounting_exposes_each_child_to_its_parent() {
    let mut runtime = Runtime::new(General::default(), NoopRegistry);
    let client = TavilyClient::new(SearchConfig::with_key("tvly-test"), Default::default()).unwrap();
    search::tool::register(&mut runtime, client);
    runtime.mount(&tree::build(false).unwrap()).unwrap();

    for name in &AGENTS[1..] {
        assert!(runtime.has_tool(name), "{name}");
    }
    assert!(!runtime.has_tool(ROOT));

    let root = runtime.agent(ROOT).unwrap();
    assert_eq!(
        root.tools,
        ["greeting_agent", "farewell_agent", "weather_agent", "animal_agent"]
    );
    assert_eq!(runtime.agent("animal_agent").unwrap().tools, ["cat_agent"]);
    assert_eq!(
        runtime.agent("cat_agent").unwrap().tools,
        ["search_agent"]
    );
    assert_eq!(runtime.model_for(root), "noop");
}
