//! Page scraping and place-name extraction.
//!
//! Fetches one page, extracts the visible text of its content elements and
//! runs the entity recognizer over the text in fixed-size chunks. Every
//! failure is absorbed here: a page that cannot be fetched or parsed simply
//! contributes no locations.

mod chunk;
mod html;

use std::collections::HashSet;
use std::sync::Arc;

use log::{debug, warn};

pub use chunk::chunk_text;
pub use html::extract_content_text;

use crate::config::NER_CHUNK_SIZE;
use crate::error_handling::{update_error_stats, ErrorType, InfoType, ProcessingStats};
use crate::ner::EntityRecognizer;

/// Fetches pages and collects the place names mentioned on them.
#[derive(Clone)]
pub struct PageScraper {
    client: Arc<reqwest::Client>,
    recognizer: Arc<dyn EntityRecognizer>,
    chunk_size: usize,
}

impl PageScraper {
    pub fn new(client: Arc<reqwest::Client>, recognizer: Arc<dyn EntityRecognizer>) -> Self {
        Self {
            client,
            recognizer,
            chunk_size: NER_CHUNK_SIZE,
        }
    }

    /// Overrides the recognizer chunk size (in characters).
    pub fn with_chunk_size(mut self, chunk_size: usize) -> Self {
        self.chunk_size = chunk_size;
        self
    }

    /// Returns the distinct place names found on the page at `url`.
    ///
    /// Names keep the order of their first appearance. Any fetch failure
    /// yields an empty list.
    pub async fn scrape_locations(&self, url: &str, stats: &ProcessingStats) -> Vec<String> {
        let body = match self.fetch(url).await {
            Ok(body) => body,
            Err(e) => {
                warn!("Error scraping {}: {}", url, e);
                update_error_stats(stats, &e);
                return Vec::new();
            }
        };
        stats.increment_info(InfoType::PageScraped);

        let text = extract_content_text(&body);
        drop(body);
        debug!("Extracted {} characters of text from {}", text.len(), url);

        let locations = self.extract_locations(&text, stats);
        debug!("Found {} distinct locations on {}", locations.len(), url);
        locations
    }

    /// Runs the recognizer over `text` chunk by chunk and collects the
    /// distinct GPE/LOC entity texts.
    pub fn extract_locations(&self, text: &str, stats: &ProcessingStats) -> Vec<String> {
        let mut seen = HashSet::new();
        let mut locations = Vec::new();

        for (i, chunk) in chunk_text(text, self.chunk_size).enumerate() {
            stats.increment_info(InfoType::ChunkAnalyzed);
            let entities = match self.recognizer.recognize(chunk) {
                Ok(entities) => entities,
                Err(e) => {
                    warn!("Skipping text chunk {}: {}", i, e);
                    stats.increment_error(ErrorType::RecognizerError);
                    continue;
                }
            };
            for entity in entities.into_iter().filter(|e| e.label.is_place()) {
                if seen.insert(entity.text.clone()) {
                    locations.push(entity.text);
                }
            }
        }

        locations
    }

    async fn fetch(&self, url: &str) -> Result<String, reqwest::Error> {
        self.client
            .get(url)
            .send()
            .await?
            .error_for_status()?
            .text()
            .await
    }
}
