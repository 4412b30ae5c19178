//! Site-restricted web search.
//!
//! Runs the fixed query templates for a domain against the Custom Search JSON
//! API and merges the result links. A failed query is logged and counted; it
//! never fails the search as a whole.

mod types;

use std::collections::HashSet;
use std::sync::Arc;
use std::time::Duration;

use log::{debug, warn};

pub use types::{SearchItem, SearchResponse};

use crate::config::{Config, SEARCH_QUERY_TEMPLATES};
use crate::error_handling::{categorize_search_error, InfoType, ProcessingStats};

/// Client for the Custom Search JSON API.
#[derive(Clone)]
pub struct SearchClient {
    client: Arc<reqwest::Client>,
    endpoint: String,
    api_key: String,
    engine_id: String,
    delay: Duration,
}

impl std::fmt::Debug for SearchClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SearchClient")
            .field("endpoint", &self.endpoint)
            .field("engine_id", &self.engine_id)
            .field("delay", &self.delay)
            .finish_non_exhaustive()
    }
}

impl SearchClient {
    pub fn new(
        client: Arc<reqwest::Client>,
        endpoint: impl Into<String>,
        api_key: impl Into<String>,
        engine_id: impl Into<String>,
        delay: Duration,
    ) -> Self {
        Self {
            client,
            endpoint: endpoint.into(),
            api_key: api_key.into(),
            engine_id: engine_id.into(),
            delay,
        }
    }

    /// Builds a client from a validated configuration.
    pub fn from_config(client: Arc<reqwest::Client>, config: &Config) -> Self {
        Self::new(
            client,
            config.search_endpoint.clone(),
            config.google_api_key.clone().unwrap_or_default(),
            config.search_engine_id.clone().unwrap_or_default(),
            config.search_delay(),
        )
    }

    /// Returns the deduplicated result links of every query for `domain`.
    ///
    /// Queries run one after another, separated by the configured delay.
    /// Links keep the order in which they were first returned.
    pub async fn search(&self, domain: &str, stats: &ProcessingStats) -> Vec<String> {
        let mut seen = HashSet::new();
        let mut links = Vec::new();

        for (i, query) in build_queries(domain).iter().enumerate() {
            if i > 0 && !self.delay.is_zero() {
                tokio::time::sleep(self.delay).await;
            }

            stats.increment_info(InfoType::SearchQuery);
            match self.run_query(query).await {
                Ok(response) => {
                    let found: Vec<String> = response.links().collect();
                    debug!("Query '{}' returned {} links", query, found.len());
                    stats.add_info(InfoType::SearchLink, found.len());
                    for link in found {
                        if seen.insert(link.clone()) {
                            links.push(link);
                        }
                    }
                }
                Err(e) => {
                    warn!("Search error for query '{}': {}", query, e);
                    stats.increment_error(categorize_search_error(&e));
                }
            }
        }

        links
    }

    /// Runs one query. The returned error carries no URL, since the request
    /// URL contains the API key.
    async fn run_query(&self, query: &str) -> Result<SearchResponse, reqwest::Error> {
        self.send_query(query)
            .await
            .map_err(reqwest::Error::without_url)
    }

    async fn send_query(&self, query: &str) -> Result<SearchResponse, reqwest::Error> {
        self.client
            .get(&self.endpoint)
            .query(&[
                ("q", query),
                ("key", self.api_key.as_str()),
                ("cx", self.engine_id.as_str()),
            ])
            .send()
            .await?
            .error_for_status()?
            .json::<SearchResponse>()
            .await
    }
}

/// Expands the query templates for `domain`.
pub fn build_queries(domain: &str) -> Vec<String> {
    SEARCH_QUERY_TEMPLATES
        .iter()
        .map(|template| template.replace("{domain}", domain))
        .collect()
}
