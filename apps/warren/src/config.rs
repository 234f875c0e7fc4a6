//! Configuration for the warren CLI

use anyhow::{Context, Result, bail};
use compact_str::CompactString;
use model::ProviderConfig;
use search::SearchConfig;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Model backing every agent without an explicit override.
pub const DEFAULT_MODEL: &str = "gemini-2.0-flash-exp";

/// Model backing the search agent.
pub const SEARCH_MODEL: &str = "openai/gpt-4o-mini";

/// Default config file location: `~/.config/warren/warren.toml`.
pub fn default_path() -> Result<PathBuf> {
    let home = dirs::home_dir().context("cannot resolve the home directory")?;
    Ok(home.join(".config/warren/warren.toml"))
}

/// The warren configuration file.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct Config {
    /// Model used by agents that do not pin one.
    pub default_model: CompactString,

    /// Model providers, keyed by model id.
    pub providers: Vec<ProviderConfig>,

    /// Tavily search parameters.
    pub search: SearchConfig,

    /// Mock weather tool.
    pub weather: WeatherConfig,
}

/// Settings for the mock weather tool.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct WeatherConfig {
    /// Attach `get_weather` to the weather agent.
    pub mock: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_model: DEFAULT_MODEL.into(),
            providers: vec![
                ProviderConfig::new(DEFAULT_MODEL, "${GEMINI_API_KEY}"),
                ProviderConfig::new(SEARCH_MODEL, "${OPENAI_API_KEY}"),
            ],
            search: SearchConfig::with_key("${TAVILY_API_KEY}"),
            weather: WeatherConfig::default(),
        }
    }
}

impl Config {
    /// Parse a config document, expanding `${VAR}` references first.
    pub fn parse(content: &str) -> Result<Self> {
        let config = toml::from_str(&expand_env_vars(content))?;
        Ok(config)
    }

    /// Load the configuration from `path`.
    ///
    /// A missing file yields the built-in defaults with keys taken from
    /// the environment.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            tracing::info!(
                "no config at {}, using defaults from the environment",
                path.display()
            );
            return Self::parse(&toml::to_string(&Self::default())?);
        }

        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        Self::parse(&content).with_context(|| format!("failed to parse {}", path.display()))
    }

    /// Save the configuration to `path`, refusing to overwrite.
    pub fn save(&self, path: &Path) -> Result<()> {
        if path.exists() {
            bail!("{} already exists", path.display());
        }
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("failed to create {}", parent.display()))?;
        }
        std::fs::write(path, toml::to_string(self)?)
            .with_context(|| format!("failed to write {}", path.display()))?;
        tracing::info!("configuration saved to {}", path.display());
        Ok(())
    }

    /// Providers that can be built.
    ///
    /// Entries whose key expanded to nothing are skipped with a warning;
    /// requests for their model fall back to the default provider.
    pub fn usable_providers(&self) -> Vec<ProviderConfig> {
        self.providers
            .iter()
            .filter(|provider| match provider.validate() {
                Ok(()) => true,
                Err(e) => {
                    tracing::warn!("skipping provider: {e}");
                    false
                }
            })
            .cloned()
            .collect()
    }
}

/// Expand `${VAR}` patterns in a string with environment variable values.
///
/// Unknown variables are replaced with an empty string.
pub fn expand_env_vars(input: &str) -> String {
    let mut result = String::with_capacity(input.len());
    let mut chars = input.chars().peekable();

    while let Some(ch) = chars.next() {
        if ch == '$' && chars.peek() == Some(&'{') {
            chars.next();
            let mut var_name = String::new();
            for c in chars.by_ref() {
                if c == '}' {
                    break;
                }
                var_name.push(c);
            }
            if let Ok(val) = std::env::var(&var_name) {
                result.push_str(&val);
            }
        } else {
            result.push(ch);
        }
    }

    result
}
