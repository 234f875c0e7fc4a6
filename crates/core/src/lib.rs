//! Core types for Warren.
//!
//! - [`Agent`]: pure config (name, description, instruction, model, tools,
//!   sub-agents).
//! - [`AgentTree`]: a validated, immutable agent hierarchy.
//! - [`model`]: the LLM wire types and the [`Registry`](model::Registry)
//!   trait through which the runtime reaches a model.

pub use {
    agent::Agent,
    tree::{AgentTree, TreeError, Walk},
};

mod agent;
pub mod model;
mod tree;
