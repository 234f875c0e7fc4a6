//! Tests for AgentTree validation and lookups.

use warren_core::{Agent, AgentTree, TreeError};

fn zoo() -> Agent {
    Agent::new("root")
        .sub_agent(Agent::new("greeting"))
        .sub_agent(
            Agent::new("animal")
                .sub_agent(Agent::new("cat").sub_agent(Agent::new("search").tool("tavily_search"))),
        )
}

#[test]
fn counts_and_depth() {
    let tree = AgentTree::new(zoo()).unwrap();
    assert_eq!(tree.len(), 5);
    assert_eq!(tree.depth(), 3);
    assert!(!tree.is_empty());
}

#[test]
fn names_are_preorder() {
    let tree = AgentTree::new(zoo()).unwrap();
    assert_eq!(tree.names(), ["root", "greeting", "animal", "cat", "search"]);
}

#[test]
fn duplicate_name_rejected() {
    let root = Agent::new("root")
        .sub_agent(Agent::new("cat"))
        .sub_agent(Agent::new("animal").sub_agent(Agent::new("cat")));
    let err = AgentTree::new(root).unwrap_err();
    assert_eq!(err, TreeError::DuplicateName("cat".into()));
    assert_eq!(err.to_string(), "duplicate agent name 'cat'");
}

#[test]
fn root_name_counts_for_uniqueness() {
    let root = Agent::new("root").sub_agent(Agent::new("root"));
    assert!(matches!(
        AgentTree::new(root),
        Err(TreeError::DuplicateName(_))
    ));
}

#[test]
fn find_and_parent() {
    let tree = AgentTree::new(zoo()).unwrap();
    assert_eq!(tree.find("search").unwrap().tools, ["tavily_search"]);
    assert_eq!(tree.parent("cat").unwrap().name, "animal");
    assert_eq!(tree.parent("search").unwrap().name, "cat");
    assert!(tree.parent("root").is_none());
    assert!(tree.find("dog").is_none());
}

#[test]
fn path_runs_from_root() {
    let tree = AgentTree::new(zoo()).unwrap();
    assert_eq!(
        tree.path("search").unwrap(),
        ["root", "animal", "cat", "search"]
    );
    assert_eq!(tree.path("root").unwrap(), ["root"]);
    assert!(tree.path("missing").is_none());
}
