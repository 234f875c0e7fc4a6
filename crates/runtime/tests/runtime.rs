//! Tests for the Runtime tool registry and send loop.

mod common;

use common::{Scripted, answer, call, echo_tool, runtime};
use wcore::{
    Agent,
    model::{General, Message, NoopRegistry, Role, ToolCall, ToolChoice},
};

#[test]
fn resolve_returns_registered_tools() {
    let mut rt = runtime(NoopRegistry);
    rt.register(echo_tool(), |args| async move { args });
    let tools = rt.resolve(&["echo".into()]);
    assert_eq!(tools.len(), 1);
    assert_eq!(tools[0].name, "echo");
    assert!(rt.has_tool("echo"));
}

#[test]
fn resolve_skips_unknown() {
    let rt = runtime(NoopRegistry);
    assert!(rt.resolve(&["missing".into()]).is_empty());
}

#[tokio::test]
async fn dispatch_calls_handler() {
    let mut rt = runtime(NoopRegistry);
    rt.register(echo_tool(), |args| async move { format!("got: {args}") });

    let calls = vec![ToolCall::function("call_1", "echo", "hello")];
    let results = rt.dispatch(&calls).await;
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].content, "got: hello");
    assert_eq!(results[0].tool_call_id, "call_1");
    assert_eq!(results[0].role, Role::Tool);
}

#[tokio::test]
async fn dispatch_keeps_one_result_per_call() {
    let mut rt = runtime(NoopRegistry);
    rt.register(echo_tool(), |args| async move { args });

    let calls = vec![
        ToolCall::function("a", "echo", "1"),
        ToolCall::function("b", "missing", ""),
        ToolCall::function("c", "echo", "3"),
    ];
    let results = rt.dispatch(&calls).await;
    let ids: Vec<_> = results.iter().map(|m| m.tool_call_id.as_str()).collect();
    assert_eq!(ids, ["a", "b", "c"]);
    assert_eq!(results[1].content, "function missing not available");
}

#[test]
fn chat_requires_registered_agent() {
    let rt = runtime(NoopRegistry);
    assert!(rt.chat("unknown").is_err());
}

#[test]
fn chat_succeeds_with_agent() {
    let mut rt = runtime(NoopRegistry);
    rt.add_agent(Agent::new("test").system_prompt("hello"));
    let chat = rt.chat("test").unwrap();
    assert_eq!(chat.agent_name(), "test");
    assert!(chat.is_empty());
}

#[test]
fn context_limit_follows_agent_model() {
    let mut rt = runtime(Scripted::default());
    rt.add_agent(Agent::new("mini").model("openai/gpt-4o-mini"));
    rt.add_agent(Agent::new("flash"));
    assert_eq!(rt.context_limit("mini"), 128_000);
    assert_eq!(rt.context_limit("flash"), 1_048_576);
}

#[test]
fn context_limit_override() {
    let config = General {
        context_limit: Some(32_000),
        ..Default::default()
    };
    let mut rt = warren_runtime::Runtime::new(config, NoopRegistry);
    rt.add_agent(Agent::new("any"));
    assert_eq!(rt.context_limit("any"), 32_000);
}

#[test]
fn estimate_tokens_counts() {
    let mut rt = runtime(NoopRegistry);
    rt.add_agent(Agent::new("test").system_prompt("You are helpful."));
    let mut chat = rt.chat("test").unwrap();
    chat.messages.push(Message::user("hello world"));
    assert!(rt.estimate_tokens(&chat) > 0);
}

#[tokio::test]
async fn send_without_tools_returns_answer() {
    let registry = Scripted::new([answer("Hello there!")]);
    let mut rt = runtime(registry.clone());
    rt.add_agent(Agent::new("greeter").system_prompt("Greet the user."));

    let mut chat = rt.chat("greeter").unwrap();
    let response = rt.send(&mut chat, Message::user("hi")).await.unwrap();
    assert_eq!(response.content().unwrap(), "Hello there!");
    assert_eq!(chat.len(), 2);

    let seen = registry.seen();
    assert_eq!(seen.len(), 1);
    assert_eq!(seen[0].system, "Greet the user.");
    assert_eq!(seen[0].model, "gemini-2.0-flash-exp");
}

#[tokio::test]
async fn send_runs_tool_round() {
    let registry = Scripted::new([call("c1", "echo", "ping"), answer("pong")]);
    let mut rt = runtime(registry.clone());
    rt.register(echo_tool(), |args| async move { format!("echo {args}") });
    rt.add_agent(Agent::new("a").tool("echo"));

    let mut chat = rt.chat("a").unwrap();
    rt.send(&mut chat, Message::user("go")).await.unwrap();

    // user, assistant(tool call), tool result, assistant(answer)
    assert_eq!(chat.len(), 4);
    assert_eq!(chat.messages[2].content, "echo ping");

    let seen = registry.seen();
    assert_eq!(seen[0].tools, ["echo"]);
    assert_eq!(seen[0].tool_choice, ToolChoice::Auto);
    assert_eq!(seen[1].tool_choice, ToolChoice::None);
    assert_eq!(seen[1].last.role, Role::Tool);
}

#[tokio::test]
async fn send_propagates_registry_errors() {
    let mut rt = runtime(NoopRegistry);
    rt.add_agent(Agent::new("a"));
    let mut chat = rt.chat("a").unwrap();
    assert!(rt.send(&mut chat, Message::user("hi")).await.is_err());
}

#[tokio::test]
async fn send_to_keeps_session() {
    let registry = Scripted::new([answer("one"), answer("two")]);
    let mut rt = runtime(registry);
    rt.add_agent(Agent::new("a"));

    rt.send_to("a", Message::user("first")).await.unwrap();
    rt.send_to("a", Message::user("second")).await.unwrap();
    assert_eq!(rt.session("a").unwrap().len(), 4);
}

#[tokio::test]
async fn send_to_unknown_agent_fails() {
    let mut rt = runtime(NoopRegistry);
    assert!(rt.send_to("ghost", Message::user("boo")).await.is_err());
}
