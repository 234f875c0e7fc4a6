//! `ProviderManager`: concurrent-safe model-keyed provider map with an
//! active selection.

use crate::{Provider, ProviderConfig};
use anyhow::{Result, bail};
use compact_str::CompactString;
use parking_lot::RwLock;
use std::{collections::BTreeMap, sync::Arc};
use wcore::model::{General, Message, Registry, Response, default_context_limit};

/// Manages a set of providers keyed by model id, with an active selection.
///
/// Read paths clone the provider out of the lock, so no lock is held
/// across an LLM call.
#[derive(Clone)]
pub struct ProviderManager {
    inner: Arc<RwLock<Inner>>,
}

struct Inner {
    /// Provider instances keyed by model id.
    providers: BTreeMap<CompactString, (ProviderConfig, Provider)>,
    /// Model id of the active provider.
    active: CompactString,
    /// Shared HTTP client for constructing new providers.
    client: reqwest::Client,
}

/// Info about a single provider entry returned by `list()`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProviderEntry {
    /// Model id (key).
    pub name: CompactString,
    /// Whether this is the active provider.
    pub active: bool,
}

impl ProviderManager {
    /// Create a manager from provider configs.
    ///
    /// `active` selects the default model; when it is not configured the
    /// first entry wins. Fails on an empty list or an invalid entry.
    pub fn from_configs(configs: &[ProviderConfig], active: &str) -> Result<Self> {
        let Some(first) = configs.first() else {
            bail!("at least one provider config is required");
        };

        let client = reqwest::Client::new();
        let mut providers = BTreeMap::new();
        for config in configs {
            config.validate()?;
            let provider = Provider::from_config(config, client.clone())?;
            providers.insert(config.model.clone(), (config.clone(), provider));
        }

        let active = if providers.contains_key(active) {
            CompactString::from(active)
        } else {
            tracing::warn!(
                "default model '{active}' is not configured, using '{}'",
                first.model
            );
            first.model.clone()
        };

        Ok(Self {
            inner: Arc::new(RwLock::new(Inner {
                providers,
                active,
                client,
            })),
        })
    }

    /// Create a manager with a single provider.
    pub fn single(config: ProviderConfig, provider: Provider) -> Self {
        let model = config.model.clone();
        let mut providers = BTreeMap::new();
        providers.insert(model.clone(), (config, provider));
        Self {
            inner: Arc::new(RwLock::new(Inner {
                providers,
                active: model,
                client: reqwest::Client::new(),
            })),
        }
    }

    /// Get a clone of the active provider.
    pub fn active(&self) -> Option<Provider> {
        let inner = self.inner.read();
        inner.providers.get(&inner.active).map(|(_, p)| p.clone())
    }

    /// Get the provider for `model`, if configured.
    pub fn get(&self, model: &str) -> Option<Provider> {
        self.inner.read().providers.get(model).map(|(_, p)| p.clone())
    }

    /// Switch the active provider. Fails if the model is not configured.
    pub fn switch(&self, model: &str) -> Result<()> {
        let mut inner = self.inner.write();
        if !inner.providers.contains_key(model) {
            bail!("provider '{model}' not found");
        }
        inner.active = CompactString::from(model);
        Ok(())
    }

    /// Add a provider, replacing any existing entry for the same model.
    pub fn add(&self, config: &ProviderConfig) -> Result<()> {
        config.validate()?;
        let client = self.inner.read().client.clone();
        let provider = Provider::from_config(config, client)?;
        self.inner
            .write()
            .providers
            .insert(config.model.clone(), (config.clone(), provider));
        Ok(())
    }

    /// The HTTP client shared by every provider.
    pub fn client(&self) -> reqwest::Client {
        self.inner.read().client.clone()
    }

    /// List all providers with their active status.
    pub fn list(&self) -> Vec<ProviderEntry> {
        let inner = self.inner.read();
        inner
            .providers
            .keys()
            .map(|name| ProviderEntry {
                name: name.clone(),
                active: *name == inner.active,
            })
            .collect()
    }

    /// Resolve the provider for `model`, falling back to the active one.
    ///
    /// A provider is bound to its own model, so a fallback request goes out
    /// under the active model name.
    fn resolve(&self, model: &str) -> Result<Provider> {
        if let Some(provider) = self.get(model) {
            return Ok(provider);
        }
        let active = self.active_model();
        tracing::warn!("model '{model}' is not configured, falling back to '{active}'");
        match self.active() {
            Some(provider) => Ok(provider),
            None => bail!("no provider configured for '{model}'"),
        }
    }
}

impl Registry for ProviderManager {
    async fn send(&self, model: &str, config: &General, messages: &[Message]) -> Result<Response> {
        let provider = self.resolve(model)?;
        tracing::debug!(
            "sending {} messages for '{model}' as '{}' via {}",
            messages.len(),
            provider.model(),
            provider.endpoint()
        );
        provider.send(config, messages).await
    }

    fn context_limit(&self, model: &str) -> usize {
        default_context_limit(model)
    }

    fn active_model(&self) -> CompactString {
        self.inner.read().active.clone()
    }
}

impl std::fmt::Debug for ProviderManager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let inner = self.inner.read();
        f.debug_struct("ProviderManager")
            .field("active", &inner.active)
            .field("count", &inner.providers.len())
            .finish()
    }
}
