//! Model providers for Warren.
//!
//! [`Provider`] is an OpenAI-compatible chat-completions transport (OpenAI,
//! Gemini's compatibility endpoint, DeepSeek, Ollama). [`ProviderManager`]
//! holds one provider per configured model id and implements
//! [`Registry`](wcore::model::Registry), so each agent can be backed by
//! its own model.

pub use {
    config::{ProviderConfig, ProviderKind},
    manager::{ProviderEntry, ProviderManager},
    provider::Provider,
    request::Request,
};

pub mod config;
mod manager;
mod provider;
mod request;
