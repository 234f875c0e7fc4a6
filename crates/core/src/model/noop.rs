//! No-op registry for testing.
//!
//! Implements [`Registry`] but refuses every `send`. Intended for tests
//! that exercise tool registration, dispatch and tree mounting without
//! making real LLM calls.

use crate::model::{General, Message, Registry, Response, default_context_limit};
use anyhow::Result;
use compact_str::CompactString;

/// A registry whose `send` always fails.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopRegistry;

impl Registry for NoopRegistry {
    async fn send(&self, model: &str, _config: &General, _messages: &[Message]) -> Result<Response> {
        anyhow::bail!("noop registry cannot send to '{model}'")
    }

    fn context_limit(&self, model: &str) -> usize {
        default_context_limit(model)
    }

    fn active_model(&self) -> CompactString {
        CompactString::const_new("noop")
    }
}
