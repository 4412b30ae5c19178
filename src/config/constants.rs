//! Configuration constants.
//!
//! This module defines the operational parameters of the location pipeline:
//! search query templates, scraping bounds, timeouts and default endpoints.

use std::time::Duration;

/// Google Custom Search JSON API endpoint.
pub const DEFAULT_SEARCH_ENDPOINT: &str = "https://www.googleapis.com/customsearch/v1";

/// Query templates issued for every domain, in order.
///
/// `{domain}` is replaced by the normalized domain. Each query is scoped with
/// the `site:` operator so only pages from the company's own site come back.
pub const SEARCH_QUERY_TEMPLATES: &[&str] = &[
    "site:{domain} global locations",
    "site:{domain} worldwide offices",
    "site:{domain} international presence",
];

/// Pause between consecutive search queries (API quota pacing).
pub const SEARCH_DELAY: Duration = Duration::from_secs(1);

/// Default number of search result pages that are scraped per domain.
pub const DEFAULT_MAX_PAGES: usize = 2;

/// Per-request HTTP timeout in seconds
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Default User-Agent string for HTTP requests.
///
/// A Chrome-on-Windows string; some company sites refuse requests without a
/// browser-like agent. Users can override this via the `--user-agent` flag.
pub const DEFAULT_USER_AGENT: &str =
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36";

// HTML text extraction limits
/// CSS selector for the elements whose text is fed to the recognizer.
pub const CONTENT_SELECTOR: &str = "p, div, span";
/// Maximum number of content elements read per page, in document order.
/// Bounds memory and recognizer cost on very large pages.
pub const MAX_CONTENT_ELEMENTS: usize = 200;
/// Recognizer chunk size in characters.
/// Chunks are recognized one after another so peak memory stays bounded.
pub const NER_CHUNK_SIZE: usize = 10_000;

/// Error message reported when the search step finds nothing to scrape.
pub const NO_RELEVANT_PAGES: &str = "No relevant pages found";

/// Error message for a missing domain.
///
/// Returned in the body of the HTTP 400 response when `POST /analyze` has no
/// usable `domain` field, and as the analysis error when the input
/// normalizes to an empty domain.
pub const DOMAIN_REQUIRED: &str = "Domain is required";

/// Entity labels requested from a zero-shot NER model. `location` maps to
/// `EntityLabel::Loc`, the others to `EntityLabel::Gpe`.
pub const NER_MODEL_LABELS: &[&str] = &["country", "city", "state", "location"];

/// Minimum span probability kept from the NER model.
pub const DEFAULT_NER_THRESHOLD: f32 = 0.5;

/// Characters per NER model input; longer chunks are split into windows of
/// this size and run as one batch.
pub const NER_MODEL_WINDOW: usize = 1_500;
