//! Utility functions shared by the pipeline stages.
//!
//! This module provides:
//! - CSS selector parsing with a safe fallback
//! - A regex that never matches, for degraded recognizers

mod selector;

pub use selector::{never_matching_regex, parse_selector_with_fallback};
