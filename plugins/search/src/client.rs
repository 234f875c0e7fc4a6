//! Tavily HTTP client.
//!
//! Wraps a shared `reqwest::Client` with pre-built headers, mirroring
//! the Bearer-authenticated JSON transport used for model providers.

use crate::{Error, SearchConfig, SearchDepth, SearchResponse};
use reqwest::{
    Client, Method,
    header::{self, HeaderMap, HeaderValue},
};
use serde::Serialize;
use std::time::Duration;

/// Request body sent to Tavily.
#[derive(Debug, Clone, Serialize)]
pub struct SearchRequest<'a> {
    /// The search query.
    pub query: &'a str,
    /// Search depth.
    pub search_depth: SearchDepth,
    /// Maximum number of results.
    pub max_results: usize,
    /// Ask for a synthesized answer.
    pub include_answer: bool,
    /// Include cleaned page content.
    pub include_raw_content: bool,
    /// Include image URLs.
    pub include_images: bool,
}

/// A Tavily search client.
#[derive(Clone, Debug)]
pub struct TavilyClient {
    client: Client,
    headers: HeaderMap,
    config: SearchConfig,
}

impl TavilyClient {
    /// Create a client from config and a shared HTTP client.
    pub fn new(config: SearchConfig, client: Client) -> Result<Self, Error> {
        if config.api_key.trim().is_empty() {
            return Err(Error::MissingApiKey);
        }

        let mut headers = HeaderMap::new();
        headers.insert(
            header::CONTENT_TYPE,
            HeaderValue::from_static("application/json"),
        );
        headers.insert(header::ACCEPT, HeaderValue::from_static("application/json"));
        let auth = HeaderValue::from_str(&format!("Bearer {}", config.api_key))
            .map_err(|_| Error::MissingApiKey)?;
        headers.insert(header::AUTHORIZATION, auth);

        Ok(Self {
            client,
            headers,
            config,
        })
    }

    /// The search parameters.
    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Build the request body for a query.
    pub fn request<'a>(&self, query: &'a str) -> SearchRequest<'a> {
        SearchRequest {
            query,
            search_depth: self.config.search_depth,
            max_results: self.config.max_results,
            include_answer: self.config.include_answer,
            include_raw_content: self.config.include_raw_content,
            include_images: self.config.include_images,
        }
    }

    /// Run a search.
    ///
    /// The returned list never holds more than `max_results` entries.
    pub async fn search(&self, query: &str) -> Result<SearchResponse, Error> {
        let query = query.trim();
        if query.is_empty() {
            return Err(Error::EmptyQuery);
        }

        let body = self.request(query);
        tracing::debug!("tavily search: {query}");
        tracing::trace!("request: {}", serde_json::to_string(&body)?);

        let response = self
            .client
            .request(Method::POST, &self.config.base_url)
            .headers(self.headers.clone())
            .timeout(Duration::from_secs(self.config.timeout_secs))
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        let text = response.text().await?;
        if !status.is_success() {
            return Err(Error::Status {
                status: status.as_u16(),
                body: text,
            });
        }

        parse_response(&text, self.config.max_results)
    }
}

/// Decode a Tavily response body and cap its result list.
pub fn parse_response(text: &str, max_results: usize) -> Result<SearchResponse, Error> {
    tracing::trace!("response: {text}");
    let mut response: SearchResponse = serde_json::from_str(text)?;
    response.truncate(max_results);
    Ok(response)
}
