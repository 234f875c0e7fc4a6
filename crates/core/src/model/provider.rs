//! The model registry seam.

use crate::model::{General, Message, Response};
use anyhow::Result;
use compact_str::CompactString;

/// A model registry that routes requests to named models.
///
/// This is the inference engine the runtime consults: given an agent's
/// prompt, history and tool schemas, the model decides whether to answer
/// or to call a tool (which may be another agent). Implementations are
/// cheap to clone and shared across worker handlers.
pub trait Registry: Clone + Send + Sync + 'static {
    /// Send a request to the named model.
    fn send(
        &self,
        model: &str,
        config: &General,
        messages: &[Message],
    ) -> impl Future<Output = Result<Response>> + Send;

    /// Resolve the context limit for a model.
    fn context_limit(&self, model: &str) -> usize;

    /// Get the active/default model name.
    fn active_model(&self) -> CompactString;
}
