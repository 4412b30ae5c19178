//! Error type definitions.
//!
//! This module defines the error, failure-category and info types used
//! throughout the pipeline.

use log::SetLoggerError;
use reqwest::Error as ReqwestError;
use strum_macros::EnumIter as EnumIterMacro;
use thiserror::Error;

use crate::config::{DOMAIN_REQUIRED, NO_RELEVANT_PAGES};

/// Error types for initialization failures.
///
/// These are fatal at startup and never produced per request.
#[derive(Error, Debug)]
pub enum InitializationError {
    /// Error initializing the logger.
    #[error("Logger initialization error: {0}")]
    LoggerError(#[from] SetLoggerError),

    /// Error initializing the HTTP client.
    #[error("HTTP client initialization error: {0}")]
    HttpClientError(#[from] ReqwestError),

    /// A mandatory search API credential is missing.
    #[error("Missing API credentials: {0} is not set")]
    MissingCredentials(&'static str),

    /// A configuration value is out of range.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

/// Failure kinds of a single domain analysis.
///
/// `LocationFinder::try_analyze` returns these so callers can branch on the
/// failure category; `LocationFinder::analyze` flattens them into the
/// `error` field of an `AnalysisResult`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AnalysisError {
    /// The input normalized to an empty domain.
    #[error("{}", DOMAIN_REQUIRED)]
    EmptyDomain,

    /// The search step returned no URLs for the domain.
    #[error("{}", NO_RELEVANT_PAGES)]
    NoRelevantPages {
        /// Normalized domain that was searched
        domain: String,
    },

    /// Any other failure inside the pipeline (including panics).
    #[error("{0}")]
    Internal(String),
}

/// Error returned by an entity recognizer for one chunk of text.
#[derive(Error, Debug)]
#[error("Entity recognition failed: {0}")]
pub struct RecognizerError(pub String);

/// Categories of transient failures absorbed inside the pipeline.
///
/// None of these abort an analysis; they are logged and counted in
/// `ProcessingStats`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIterMacro)]
pub enum ErrorType {
    // Search API
    SearchRequestError,
    SearchStatusError,
    SearchDecodeError,
    // Page fetching
    HttpRequestTimeoutError,
    HttpRequestConnectError,
    HttpRequestStatusError,
    HttpRequestBodyError,
    HttpRequestOtherError,
    // Entity recognition
    RecognizerError,
}

/// Informational metrics recorded during one analysis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIterMacro)]
pub enum InfoType {
    SearchQuery,   // Search query issued
    SearchLink,    // Link returned by the search API (before deduplication)
    PageScraped,   // Page fetched and parsed successfully
    ChunkAnalyzed, // Text chunk passed through the recognizer
}

impl std::fmt::Display for ErrorType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl ErrorType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorType::SearchRequestError => "Search request error",
            ErrorType::SearchStatusError => "Search API status error",
            ErrorType::SearchDecodeError => "Search response decode error",
            ErrorType::HttpRequestTimeoutError => "HTTP request timeout error",
            ErrorType::HttpRequestConnectError => "HTTP request connect error",
            ErrorType::HttpRequestStatusError => "HTTP request status error",
            ErrorType::HttpRequestBodyError => "HTTP request body error",
            ErrorType::HttpRequestOtherError => "HTTP request other error",
            ErrorType::RecognizerError => "Entity recognition error",
        }
    }
}
