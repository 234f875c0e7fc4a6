//! Search response types.

use serde::{Deserialize, Serialize};

/// A Tavily search response.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SearchResponse {
    /// The query as Tavily understood it.
    #[serde(default)]
    pub query: String,

    /// Synthesized answer, when requested.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub answer: Option<String>,

    /// Ranked results.
    #[serde(default)]
    pub results: Vec<SearchResult>,

    /// Related images, when requested.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub images: Vec<Image>,
}

impl SearchResponse {
    /// Keep at most `max` results.
    pub fn truncate(&mut self, max: usize) {
        self.results.truncate(max);
    }
}

/// A single search result.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SearchResult {
    /// Page title.
    #[serde(default)]
    pub title: String,

    /// Page URL.
    pub url: String,

    /// Relevant snippet.
    #[serde(default)]
    pub content: String,

    /// Relevance score.
    #[serde(default)]
    pub score: f64,

    /// Cleaned page content, when requested.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub raw_content: Option<String>,
}

/// An image reference. Tavily returns bare URLs unless image
/// descriptions are requested.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Image {
    /// Bare image URL.
    Url(String),
    /// Image URL with a description.
    Described {
        /// Image URL.
        url: String,
        /// Short description.
        #[serde(default)]
        description: Option<String>,
    },
}

impl Image {
    /// The image URL.
    pub fn url(&self) -> &str {
        match self {
            Self::Url(url) | Self::Described { url, .. } => url,
        }
    }
}
