//! Search configuration.

use serde::{Deserialize, Serialize};

/// Default Tavily search endpoint.
pub const DEFAULT_ENDPOINT: &str = "https://api.tavily.com/search";

/// How thoroughly Tavily searches.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SearchDepth {
    /// Fast, fewer sources.
    Basic,
    /// Slower, more relevant sources.
    #[default]
    Advanced,
}

/// Tavily search parameters.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    /// API key (supports `${ENV_VAR}` expansion at the config layer).
    pub api_key: String,
    /// Endpoint override.
    pub base_url: String,
    /// Maximum number of results returned.
    pub max_results: usize,
    /// Search depth.
    pub search_depth: SearchDepth,
    /// Ask Tavily for a synthesized answer.
    pub include_answer: bool,
    /// Include the cleaned page content of each result.
    pub include_raw_content: bool,
    /// Include related image URLs.
    pub include_images: bool,
    /// Request timeout in seconds.
    pub timeout_secs: u64,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            base_url: DEFAULT_ENDPOINT.to_owned(),
            max_results: 5,
            search_depth: SearchDepth::Advanced,
            include_answer: true,
            include_raw_content: true,
            include_images: true,
            timeout_secs: 30,
        }
    }
}

impl SearchConfig {
    /// Default parameters with the given API key.
    pub fn with_key(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            ..Default::default()
        }
    }
}
