//! Search errors.

/// Errors returned by [`TavilyClient::search`](crate::TavilyClient::search).
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The query was empty after trimming.
    #[error("search query is empty")]
    EmptyQuery,

    /// No API key is configured.
    #[error("missing Tavily API key")]
    MissingApiKey,

    /// Transport failure.
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),

    /// Tavily answered with a non-success status.
    #[error("tavily returned {status}: {body}")]
    Status {
        /// HTTP status code.
        status: u16,
        /// Response body, as text.
        body: String,
    },

    /// The response body is not a valid search response.
    #[error("failed to decode response: {0}")]
    Decode(#[from] serde_json::Error),
}
