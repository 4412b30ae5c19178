//! Error handling and processing statistics.
//!
//! This module provides:
//! - Error type definitions (startup failures and analysis failure kinds)
//! - Processing statistics tracking for absorbed failures
//! - Error type extraction from `reqwest` errors
//!
//! Transient failures (one search query, one page, one recognizer chunk) never
//! abort an analysis. They are categorized, counted and logged here.

mod categorization;
mod stats;
mod types;

// Re-export public API
pub use categorization::{categorize_reqwest_error, categorize_search_error, update_error_stats};
pub use stats::ProcessingStats;
pub use types::{AnalysisError, ErrorType, InfoType, InitializationError, RecognizerError};
