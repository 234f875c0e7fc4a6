//! Validated agent hierarchy.
//!
//! [`AgentTree`] owns a root [`Agent`] whose descendants have been checked
//! once at construction: every name is non-empty and unique across the
//! whole tree. After that the tree is read-only and can be shared freely.

use crate::Agent;
use compact_str::CompactString;
use std::collections::BTreeSet;

/// Errors raised while validating an agent tree.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum TreeError {
    /// Two agents share the same name.
    #[error("duplicate agent name '{0}'")]
    DuplicateName(CompactString),

    /// An agent has an empty (or blank) name. Holds the parent's name.
    #[error("agent under '{0}' has an empty name")]
    EmptyName(CompactString),
}

/// An immutable, validated agent tree.
#[derive(Debug, Clone)]
pub struct AgentTree {
    root: Agent,
    len: usize,
}

impl AgentTree {
    /// Validate and wrap a root agent.
    pub fn new(root: Agent) -> Result<Self, TreeError> {
        let mut seen = BTreeSet::new();
        check(&root, "", &mut seen)?;
        Ok(Self {
            len: seen.len(),
            root,
        })
    }

    /// The entry-point agent.
    pub fn root(&self) -> &Agent {
        &self.root
    }

    /// Number of agents in the tree.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Always false: a tree has at least its root.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Depth of the deepest agent (the root alone has depth 0).
    pub fn depth(&self) -> usize {
        self.walk().map(|(d, _)| d).max().unwrap_or(0)
    }

    /// Find an agent by name.
    pub fn find(&self, name: &str) -> Option<&Agent> {
        self.walk().map(|(_, a)| a).find(|a| a.name == name)
    }

    /// The parent of the named agent. `None` for the root or unknown names.
    pub fn parent(&self, name: &str) -> Option<&Agent> {
        self.walk()
            .map(|(_, a)| a)
            .find(|a| a.sub_agents.iter().any(|c| c.name == name))
    }

    /// Names from the root down to the named agent, inclusive.
    pub fn path(&self, name: &str) -> Option<Vec<CompactString>> {
        let mut path = Vec::new();
        path_to(&self.root, name, &mut path).then_some(path)
    }

    /// All agent names in pre-order.
    pub fn names(&self) -> Vec<CompactString> {
        self.walk().map(|(_, a)| a.name.clone()).collect()
    }

    /// Pre-order traversal yielding `(depth, agent)`.
    pub fn walk(&self) -> Walk<'_> {
        Walk {
            stack: vec![(0, &self.root)],
        }
    }
}

fn check(
    agent: &Agent,
    parent: &str,
    seen: &mut BTreeSet<CompactString>,
) -> Result<(), TreeError> {
    if agent.name.trim().is_empty() {
        return Err(TreeError::EmptyName(parent.into()));
    }
    if !seen.insert(agent.name.clone()) {
        return Err(TreeError::DuplicateName(agent.name.clone()));
    }
    for child in &agent.sub_agents {
        check(child, &agent.name, seen)?;
    }
    Ok(())
}

fn path_to(agent: &Agent, name: &str, path: &mut Vec<CompactString>) -> bool {
    path.push(agent.name.clone());
    if agent.name == name {
        return true;
    }
    for child in &agent.sub_agents {
        if path_to(child, name, path) {
            return true;
        }
    }
    path.pop();
    false
}

/// Pre-order iterator over an [`AgentTree`].
pub struct Walk<'a> {
    stack: Vec<(usize, &'a Agent)>,
}

impl<'a> Iterator for Walk<'a> {
    type Item = (usize, &'a Agent);

    fn next(&mut self) -> Option<Self::Item> {
        let (depth, agent) = self.stack.pop()?;
        // Reverse so the first child is visited first.
        for child in agent.sub_agents.iter().rev() {
            self.stack.push((depth + 1, child));
        }
        Some((depth, agent))
    }
}
