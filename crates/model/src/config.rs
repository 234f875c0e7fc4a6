//! Provider configuration.
//!
//! A provider entry is keyed by the model id agents refer to. Ids may be
//! provider-qualified (`openai/gpt-4o-mini`); the prefix selects the
//! provider and is stripped from the model name sent on the wire.

use anyhow::{Result, bail};
use compact_str::CompactString;
use serde::{Deserialize, Serialize};

/// Configuration for one model.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProviderConfig {
    /// Model identifier, as referenced by agents.
    pub model: CompactString,
    /// Provider kind. Inferred from the model id when omitted.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub provider: Option<ProviderKind>,
    /// API key (supports `${ENV_VAR}` expansion at the config layer).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,
    /// Optional endpoint override.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base_url: Option<String>,
}

impl ProviderConfig {
    /// A config for `model` with the given key and everything else inferred.
    pub fn new(model: impl Into<CompactString>, api_key: impl Into<String>) -> Self {
        Self {
            model: model.into(),
            provider: None,
            api_key: Some(api_key.into()),
            base_url: None,
        }
    }

    /// The provider kind: explicit, or inferred from the model id.
    pub fn kind(&self) -> Result<ProviderKind> {
        match self.provider {
            Some(kind) => Ok(kind),
            None => ProviderKind::detect(&self.model),
        }
    }

    /// The model name sent on the wire (provider prefix removed).
    pub fn wire_model(&self) -> &str {
        wire_model(&self.model)
    }

    /// The chat-completions endpoint for this entry.
    pub fn endpoint(&self) -> Result<String> {
        match &self.base_url {
            Some(url) => Ok(url.clone()),
            None => Ok(self.kind()?.endpoint().to_owned()),
        }
    }

    /// Check that the entry can be turned into a provider.
    pub fn validate(&self) -> Result<()> {
        if self.model.trim().is_empty() {
            bail!("provider model must not be empty");
        }
        let kind = self.kind()?;
        let has_key = self.api_key.as_deref().is_some_and(|k| !k.trim().is_empty());
        if kind.requires_key() && !has_key {
            bail!("model '{}' requires an api_key", self.model);
        }
        Ok(())
    }
}

/// Strip a `provider/` prefix from a model id.
pub fn wire_model(model: &str) -> &str {
    match model.split_once('/') {
        Some((prefix, rest)) if ProviderKind::from_prefix(prefix).is_some() => rest,
        _ => model,
    }
}

/// Supported OpenAI-compatible providers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProviderKind {
    /// OpenAI API.
    #[serde(rename = "openai")]
    OpenAI,
    /// Google Gemini through its OpenAI-compatible endpoint.
    Gemini,
    /// DeepSeek API.
    #[serde(rename = "deepseek")]
    DeepSeek,
    /// Ollama local API, no key required.
    Ollama,
}

impl ProviderKind {
    /// Infer the provider from a model id.
    pub fn detect(model: &str) -> Result<Self> {
        if let Some((prefix, _)) = model.split_once('/') {
            return match Self::from_prefix(prefix) {
                Some(kind) => Ok(kind),
                None => bail!("unknown provider prefix '{prefix}' in model '{model}'"),
            };
        }

        if model.starts_with("gemini-") {
            Ok(Self::Gemini)
        } else if model.starts_with("gpt-")
            || model.starts_with("chatgpt-")
            || model.starts_with("o1")
            || model.starts_with("o3")
            || model.starts_with("o4")
        {
            Ok(Self::OpenAI)
        } else if model.starts_with("deepseek-") {
            Ok(Self::DeepSeek)
        } else {
            bail!("cannot infer provider for model '{model}', set `provider` explicitly")
        }
    }

    fn from_prefix(prefix: &str) -> Option<Self> {
        match prefix {
            "openai" => Some(Self::OpenAI),
            "gemini" => Some(Self::Gemini),
            "deepseek" => Some(Self::DeepSeek),
            "ollama" => Some(Self::Ollama),
            _ => None,
        }
    }

    /// Default chat-completions endpoint.
    pub fn endpoint(self) -> &'static str {
        match self {
            Self::OpenAI => "https://api.openai.com/v1/chat/completions",
            Self::Gemini => {
                "https://generativelanguage.googleapis.com/v1beta/openai/chat/completions"
            }
            Self::DeepSeek => "https://api.deepseek.com/chat/completions",
            Self::Ollama => "http://localhost:11434/v1/chat/completions",
        }
    }

    /// Whether requests must carry an API key.
    pub fn requires_key(self) -> bool {
        !matches!(self, Self::Ollama)
    }

    /// Human-readable name for logging.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::OpenAI => "openai",
            Self::Gemini => "gemini",
            Self::DeepSeek => "deepseek",
            Self::Ollama => "ollama",
        }
    }
}
