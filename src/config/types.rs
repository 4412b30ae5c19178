//! Configuration types and CLI options.
//!
//! This module defines enums and structs used for command-line argument parsing
//! and configuration.

use std::path::PathBuf;
use std::time::Duration;

use clap::{Parser, ValueEnum};

use crate::config::constants::{
    DEFAULT_MAX_PAGES, DEFAULT_NER_THRESHOLD, DEFAULT_SEARCH_ENDPOINT, DEFAULT_TIMEOUT_SECS,
    DEFAULT_USER_AGENT, SEARCH_DELAY,
};
use crate::error_handling::InitializationError;

/// Logging level for the application.
///
/// Controls the verbosity of log output, from most restrictive (Error) to most
/// verbose (Trace).
#[derive(Clone, Debug, ValueEnum)]
pub enum LogLevel {
    /// Only error messages
    Error,
    /// Error and warning messages
    Warn,
    /// Error, warning, and informational messages
    Info,
    /// All messages except trace
    Debug,
    /// All messages including trace
    Trace,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(l: LogLevel) -> Self {
        match l {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Log output format.
///
/// Controls how log messages are formatted:
/// - `Plain`: Human-readable format with colors (default)
/// - `Json`: Structured JSON format for machine parsing
#[derive(Clone, Debug, ValueEnum)]
pub enum LogFormat {
    /// Human-readable format with colors (default)
    Plain,
    /// Structured JSON format for machine parsing
    Json,
}

/// Pipeline configuration.
///
/// Parsed from the command line by the binary (every option can also be set
/// through its environment variable), or constructed programmatically by
/// library callers.
///
/// # Examples
///
/// ```no_run
/// use location_finder::Config;
///
/// let config = Config {
///     google_api_key: Some("key".into()),
///     search_engine_id: Some("cx".into()),
///     max_pages: 3,
///     ..Default::default()
/// };
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, Parser)]
#[command(
    name = "location_finder",
    about = "Finds the countries and cities a company operates in from its web domain."
)]
pub struct Config {
    /// Domains (or URLs) to analyze
    #[arg(value_parser)]
    pub domains: Vec<String>,

    /// Log level: error|warn|info|debug|trace
    #[arg(long, value_enum, default_value_t = LogLevel::Info)]
    pub log_level: LogLevel,

    /// Log format: plain|json
    #[arg(long, value_enum, default_value_t = LogFormat::Plain)]
    pub log_format: LogFormat,

    /// Google Custom Search API key
    #[arg(long, env = "GOOGLE_API_KEY", hide_env_values = true)]
    pub google_api_key: Option<String>,

    /// Google Programmable Search Engine id (cx)
    #[arg(long, env = "SEARCH_ENGINE_ID")]
    pub search_engine_id: Option<String>,

    /// Search API endpoint
    #[arg(
        long,
        env = "LOCATION_FINDER_SEARCH_ENDPOINT",
        default_value = DEFAULT_SEARCH_ENDPOINT
    )]
    pub search_endpoint: String,

    /// Delay between consecutive search queries in milliseconds
    #[arg(long, env = "LOCATION_FINDER_SEARCH_DELAY_MS", default_value_t = SEARCH_DELAY.as_millis() as u64)]
    pub search_delay_ms: u64,

    /// Maximum number of search result pages scraped per domain
    #[arg(long, env = "LOCATION_FINDER_MAX_PAGES", default_value_t = DEFAULT_MAX_PAGES)]
    pub max_pages: usize,

    /// Per-request timeout in seconds
    #[arg(long, env = "LOCATION_FINDER_TIMEOUT_SECONDS", default_value_t = DEFAULT_TIMEOUT_SECS)]
    pub timeout_seconds: u64,

    /// HTTP User-Agent header value
    #[arg(long, env = "LOCATION_FINDER_USER_AGENT", default_value = DEFAULT_USER_AGENT)]
    pub user_agent: String,

    /// GLiNER ONNX model file (requires the `ner-model` feature)
    #[arg(long, env = "LOCATION_FINDER_NER_MODEL")]
    pub ner_model: Option<PathBuf>,

    /// Tokenizer file (tokenizer.json) for --ner-model
    #[arg(long, env = "LOCATION_FINDER_NER_TOKENIZER")]
    pub ner_tokenizer: Option<PathBuf>,

    /// Minimum probability for entities reported by the NER model
    #[arg(long, env = "LOCATION_FINDER_NER_THRESHOLD", default_value_t = DEFAULT_NER_THRESHOLD)]
    pub ner_threshold: f32,

    /// Serve the HTTP front-end on this port instead of analyzing DOMAINS
    #[arg(long)]
    pub serve: Option<u16>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            domains: Vec::new(),
            log_level: LogLevel::Info,
            log_format: LogFormat::Plain,
            google_api_key: None,
            search_engine_id: None,
            search_endpoint: DEFAULT_SEARCH_ENDPOINT.to_string(),
            search_delay_ms: SEARCH_DELAY.as_millis() as u64,
            max_pages: DEFAULT_MAX_PAGES,
            timeout_seconds: DEFAULT_TIMEOUT_SECS,
            user_agent: DEFAULT_USER_AGENT.to_string(),
            ner_model: None,
            ner_tokenizer: None,
            ner_threshold: DEFAULT_NER_THRESHOLD,
            serve: None,
        }
    }
}

impl Config {
    /// Checks the settings that must hold before any analysis can run.
    ///
    /// Missing search credentials are a startup-time failure, not a
    /// per-request one.
    ///
    /// # Errors
    ///
    /// Returns `InitializationError::MissingCredentials` if either credential
    /// is absent or blank, and `InitializationError::InvalidConfig` for
    /// out-of-range values.
    pub fn validate(&self) -> Result<(), InitializationError> {
        let is_blank =
            |value: &Option<String>| value.as_deref().map_or(true, |v| v.trim().is_empty());
        if is_blank(&self.google_api_key) {
            return Err(InitializationError::MissingCredentials("GOOGLE_API_KEY"));
        }
        if is_blank(&self.search_engine_id) {
            return Err(InitializationError::MissingCredentials("SEARCH_ENGINE_ID"));
        }
        if self.max_pages == 0 {
            return Err(InitializationError::InvalidConfig(
                "max_pages must be at least 1".to_string(),
            ));
        }
        if self.timeout_seconds == 0 {
            return Err(InitializationError::InvalidConfig(
                "timeout_seconds must be at least 1".to_string(),
            ));
        }
        if self.ner_model.is_some() != self.ner_tokenizer.is_some() {
            return Err(InitializationError::InvalidConfig(
                "ner_model and ner_tokenizer must be set together".to_string(),
            ));
        }
        if !(0.0..=1.0).contains(&self.ner_threshold) {
            return Err(InitializationError::InvalidConfig(format!(
                "ner_threshold must be between 0 and 1, got {}",
                self.ner_threshold
            )));
        }
        if url::Url::parse(&self.search_endpoint).is_err() {
            return Err(InitializationError::InvalidConfig(format!(
                "search_endpoint is not a valid URL: {}",
                self.search_endpoint
            )));
        }
        Ok(())
    }

    /// Delay between consecutive search queries.
    pub fn search_delay(&self) -> Duration {
        Duration::from_millis(self.search_delay_ms)
    }

    /// Per-request HTTP timeout.
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_seconds)
    }
}
