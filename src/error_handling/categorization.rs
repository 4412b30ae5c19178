//! Error categorization.
//!
//! Maps `reqwest` failures onto the `ErrorType` categories tracked in
//! `ProcessingStats`.

use super::stats::ProcessingStats;
use super::types::ErrorType;

/// Categorizes a page-fetch `reqwest::Error` into an `ErrorType`.
///
/// # Arguments
///
/// * `error` - The `reqwest::Error` to categorize
///
/// # Returns
///
/// The appropriate `ErrorType` for the error.
pub fn categorize_reqwest_error(error: &reqwest::Error) -> ErrorType {
    if error.is_status() || error.status().is_some() {
        ErrorType::HttpRequestStatusError
    } else if error.is_timeout() {
        ErrorType::HttpRequestTimeoutError
    } else if error.is_connect() {
        ErrorType::HttpRequestConnectError
    } else if error.is_body() || error.is_decode() {
        ErrorType::HttpRequestBodyError
    } else {
        ErrorType::HttpRequestOtherError
    }
}

/// Categorizes a search API `reqwest::Error` into an `ErrorType`.
pub fn categorize_search_error(error: &reqwest::Error) -> ErrorType {
    if error.is_status() || error.status().is_some() {
        ErrorType::SearchStatusError
    } else if error.is_decode() || error.is_body() {
        ErrorType::SearchDecodeError
    } else {
        ErrorType::SearchRequestError
    }
}

/// Records a page-fetch failure in the processing statistics.
pub fn update_error_stats(stats: &ProcessingStats, error: &reqwest::Error) {
    stats.increment_error(categorize_reqwest_error(error));
}
