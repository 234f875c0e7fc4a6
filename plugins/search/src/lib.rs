//! Tavily web search for Warren agents.
//!
//! [`TavilyClient`] performs a search with the parameters in
//! [`SearchConfig`] and returns a bounded [`SearchResponse`]. The
//! [`tool`] module exposes it as the `tavily_search` tool, which any
//! number of agents may share.

pub use {
    client::{SearchRequest, TavilyClient, parse_response},
    config::{SearchConfig, SearchDepth},
    error::Error,
    response::{Image, SearchResponse, SearchResult},
};

mod client;
mod config;
mod error;
mod response;
pub mod tool;
