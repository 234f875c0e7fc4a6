//! LLM wire types and the model registry trait.
//!
//! Provides the shared types used between the runtime and model
//! providers: [`Message`], [`Response`], [`Tool`], [`General`], and the
//! [`Registry`] trait that routes a request to a named model.

pub use config::General;
pub use limits::default_context_limit;
pub use message::{Message, Role, estimate_tokens};
pub use noop::NoopRegistry;
pub use provider::Registry;
pub use response::{Choice, CompletionMeta, Delta, FinishReason, Response, Usage};
pub use tool::{FunctionCall, Tool, ToolCall, ToolChoice};

mod config;
mod limits;
mod message;
mod noop;
mod provider;
mod response;
mod tool;
