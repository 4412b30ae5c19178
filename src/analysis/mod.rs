//! Domain analysis: the end-to-end location pipeline.
//!
//! `LocationFinder` ties the stages together:
//!
//! 1. normalize the input into a bare domain
//! 2. search the domain with the fixed query templates
//! 3. scrape the first `max_pages` result pages
//! 4. count every place mention under its normalized name
//! 5. classify, score and sort the counted locations
//!
//! Everything after normalization sits behind one recovery boundary, so
//! `analyze` always returns an `AnalysisResult` and never an error.

mod result;

use std::panic::AssertUnwindSafe;
use std::sync::Arc;

use futures::FutureExt;
use log::{debug, error, info};

pub use result::AnalysisResult;

use crate::config::Config;
use crate::domain::extract_main_domain;
use crate::error_handling::{AnalysisError, InitializationError, ProcessingStats};
use crate::initialization::{init_client, init_recognizer};
use crate::locations::MentionCounter;
use crate::ner::EntityRecognizer;
use crate::scrape::PageScraper;
use crate::search::SearchClient;

/// Infers company locations from a web domain.
///
/// Holds only immutable, shareable handles; one finder can serve any number
/// of concurrent analyses, each of which owns its own counters.
#[derive(Clone)]
pub struct LocationFinder {
    search: SearchClient,
    scraper: PageScraper,
    max_pages: usize,
}

impl LocationFinder {
    pub fn new(search: SearchClient, scraper: PageScraper, max_pages: usize) -> Self {
        Self {
            search,
            scraper,
            max_pages,
        }
    }

    /// Builds a finder from configuration with the configured recognizer.
    ///
    /// # Errors
    ///
    /// Fails if the configuration is invalid (for example missing search
    /// credentials) or the HTTP client cannot be built.
    pub fn from_config(config: &Config) -> Result<Self, InitializationError> {
        config.validate()?;
        Self::with_recognizer(config, init_recognizer(config))
    }

    /// Builds a finder from configuration with a caller-supplied recognizer.
    pub fn with_recognizer(
        config: &Config,
        recognizer: Arc<dyn EntityRecognizer>,
    ) -> Result<Self, InitializationError> {
        config.validate()?;
        let client = init_client(config)?;
        let search = SearchClient::from_config(client.clone(), config);
        let scraper = PageScraper::new(client, recognizer);
        Ok(Self::new(search, scraper, config.max_pages))
    }

    /// Analyzes `domain` and returns the categorized locations.
    ///
    /// Failures are reported through the `error` field of the result, with
    /// all location lists empty.
    pub async fn analyze(&self, domain: &str) -> AnalysisResult {
        info!("Processing domain: {}", domain);
        match self.try_analyze(domain).await {
            Ok(result) => result,
            Err(e) => {
                let reported_domain = match &e {
                    AnalysisError::NoRelevantPages { domain: main_domain } => {
                        info!("No relevant pages found for {}", main_domain);
                        main_domain.clone()
                    }
                    _ => {
                        error!("Error in analysis of {}: {}", domain, e);
                        domain.to_string()
                    }
                };
                AnalysisResult::failed(reported_domain, &e)
            }
        }
    }

    /// Analyzes `domain`, reporting failures as a typed `AnalysisError`.
    ///
    /// Panics inside the pipeline are caught and reported as
    /// `AnalysisError::Internal`.
    pub async fn try_analyze(&self, domain: &str) -> Result<AnalysisResult, AnalysisError> {
        let main_domain = extract_main_domain(domain);
        if main_domain.is_empty() {
            return Err(AnalysisError::EmptyDomain);
        }

        AssertUnwindSafe(self.run_pipeline(main_domain))
            .catch_unwind()
            .await
            .unwrap_or_else(|panic| Err(AnalysisError::Internal(panic_message(panic.as_ref()))))
    }

    async fn run_pipeline(&self, main_domain: String) -> Result<AnalysisResult, AnalysisError> {
        let stats = ProcessingStats::new();

        let urls = self.search.search(&main_domain, &stats).await;
        if urls.is_empty() {
            debug!("Search summary for {}: {}", main_domain, stats.summary());
            return Err(AnalysisError::NoRelevantPages {
                domain: main_domain,
            });
        }
        debug!(
            "Found {} candidate pages for {}, scraping up to {}",
            urls.len(),
            main_domain,
            self.max_pages
        );

        let mut mentions = MentionCounter::new();
        for url in urls.iter().take(self.max_pages) {
            for location in self.scraper.scrape_locations(url, &stats).await {
                mentions.record(&location);
            }
        }

        let locations = mentions.finalize();
        info!(
            "Analyzed {}: {} countries, {} cities, {} others ({})",
            main_domain,
            locations.countries.len(),
            locations.cities.len(),
            locations.others.len(),
            stats.summary()
        );

        Ok(AnalysisResult::from_locations(main_domain, locations))
    }
}

fn panic_message(panic: &(dyn std::any::Any + Send)) -> String {
    if let Some(message) = panic.downcast_ref::<&str>() {
        (*message).to_string()
    } else if let Some(message) = panic.downcast_ref::<String>() {
        message.clone()
    } else {
        "Analysis panicked".to_string()
    }
}
