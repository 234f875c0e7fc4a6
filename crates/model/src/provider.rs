//! HTTP transport for OpenAI-compatible chat completions.
//!
//! `Provider` wraps a `reqwest::Client` with pre-built headers, the target
//! endpoint and the wire model name. Every supported backend speaks the
//! same request and response shape, so one transport covers them all.

use crate::{ProviderConfig, Request};
use anyhow::{Result, bail};
use compact_str::CompactString;
use reqwest::{
    Client, Method,
    header::{self, HeaderMap, HeaderValue},
};
use wcore::model::{General, Message, Response};

/// An OpenAI-compatible chat completions endpoint bound to one model.
#[derive(Clone, Debug)]
pub struct Provider {
    client: Client,
    headers: HeaderMap,
    endpoint: String,
    model: CompactString,
}

impl Provider {
    /// Build a provider from a validated config.
    pub fn from_config(config: &ProviderConfig, client: Client) -> Result<Self> {
        let kind = config.kind()?;
        let endpoint = config.endpoint()?;
        let model = config.wire_model();
        let provider = match config.api_key.as_deref().filter(|k| !k.trim().is_empty()) {
            Some(key) => Self::bearer(client, key, &endpoint, model)?,
            None if !kind.requires_key() => Self::no_auth(client, &endpoint, model),
            None => bail!("model '{}' requires an api_key", config.model),
        };
        tracing::debug!(
            "built {} provider for '{}' at {}",
            kind.as_str(),
            config.model,
            provider.endpoint
        );
        Ok(provider)
    }

    /// Create a provider with Bearer token authentication.
    pub fn bearer(client: Client, key: &str, endpoint: &str, model: &str) -> Result<Self> {
        let mut headers = json_headers();
        headers.insert(header::AUTHORIZATION, format!("Bearer {key}").parse()?);
        Ok(Self {
            client,
            headers,
            endpoint: endpoint.to_owned(),
            model: model.into(),
        })
    }

    /// Create a provider without authentication (e.g. Ollama).
    pub fn no_auth(client: Client, endpoint: &str, model: &str) -> Self {
        Self {
            client,
            headers: json_headers(),
            endpoint: endpoint.to_owned(),
            model: model.into(),
        }
    }

    /// Send a chat completion request and decode the response.
    pub async fn send(&self, config: &General, messages: &[Message]) -> Result<Response> {
        let body = Request::new(&self.model, config, messages);
        tracing::trace!("request: {}", serde_json::to_string(&body)?);
        let response = self
            .client
            .request(Method::POST, &self.endpoint)
            .headers(self.headers.clone())
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        let text = response.text().await?;
        if !status.is_success() {
            bail!("{} returned {status}: {text}", self.endpoint);
        }
        tracing::trace!("response: {text}");
        serde_json::from_str(&text).map_err(Into::into)
    }

    /// The wire model name.
    pub fn model(&self) -> &str {
        &self.model
    }

    /// The endpoint URL.
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// The pre-built request headers.
    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }
}

fn json_headers() -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(
        header::CONTENT_TYPE,
        HeaderValue::from_static("application/json"),
    );
    headers.insert(header::ACCEPT, HeaderValue::from_static("application/json"));
    headers
}
