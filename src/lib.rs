//! location_finder library: infer where a company operates from its domain
//!
//! This library searches a company's own site for pages about its locations,
//! scrapes the top results, recognizes place names in the page text and
//! reports the countries, cities and other places mentioned, each with a
//! mention count and a confidence tier.
//!
//! # Example
//!
//! ```no_run
//! use location_finder::{Config, LocationFinder};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = Config {
//!     google_api_key: Some("api-key".into()),
//!     search_engine_id: Some("engine-id".into()),
//!     ..Default::default()
//! };
//!
//! let finder = LocationFinder::from_config(&config)?;
//! let result = finder.analyze("https://www.example.com").await;
//! for country in &result.countries {
//!     println!("{} ({} mentions, {})", country.name, country.count, country.confidence);
//! }
//! # Ok(())
//! # }
//! ```
//!
//! # Requirements
//!
//! This library requires a Tokio runtime. Use `#[tokio::main]` in your application
//! or ensure you're calling library functions within an async context.

mod analysis;
pub mod config;
mod domain;
mod error_handling;
pub mod initialization;
mod locations;
mod ner;
mod scrape;
mod search;
mod server;
mod utils;

// Re-export public API
pub use analysis::{AnalysisResult, LocationFinder};
pub use config::{Config, LogFormat, LogLevel};
pub use domain::extract_main_domain;
pub use error_handling::{
    AnalysisError, ErrorType, InfoType, InitializationError, ProcessingStats, RecognizerError,
};
pub use locations::{
    classify, normalize_location, CategorizedLocations, ClassifiedLocation, Confidence,
    LocationKind, MentionCounter, COUNTRY_ALIASES, KNOWN_COUNTRIES,
};
pub use ner::{Entity, EntityLabel, EntityRecognizer, GazetteerRecognizer};
#[cfg(feature = "ner-model")]
pub use ner::GlinerRecognizer;
pub use scrape::{chunk_text, extract_content_text, PageScraper};
pub use search::{build_queries, SearchClient, SearchItem, SearchResponse};
pub use server::{router, start_server, AnalyzeForm};
