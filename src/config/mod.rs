//! Application configuration and constants.
//!
//! This module provides:
//! - Pipeline constants (query templates, scraping bounds, timeouts)
//! - CLI option types and parsing

mod constants;
mod types;

// Re-export all constants
pub use constants::*;
pub use types::{Config, LogFormat, LogLevel};
