//! Processing statistics tracking.
//!
//! This module provides statistics tracking for absorbed failures and
//! informational metrics during one domain analysis.

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use strum::IntoEnumIterator;

use super::types::{ErrorType, InfoType};

/// Processing statistics tracker.
///
/// Tracks errors and informational metrics using atomic counters. All types
/// are initialized to zero on creation. Each analysis owns its own instance.
pub struct ProcessingStats {
    errors: HashMap<ErrorType, AtomicUsize>,
    info: HashMap<InfoType, AtomicUsize>,
}

impl Default for ProcessingStats {
    fn default() -> Self {
        Self::new()
    }
}

impl ProcessingStats {
    pub fn new() -> Self {
        let errors = ErrorType::iter()
            .map(|error| (error, AtomicUsize::new(0)))
            .collect();
        let info = InfoType::iter()
            .map(|info_type| (info_type, AtomicUsize::new(0)))
            .collect();

        ProcessingStats { errors, info }
    }

    /// Increment an error counter.
    pub fn increment_error(&self, error: ErrorType) {
        if let Some(counter) = self.errors.get(&error) {
            counter.fetch_add(1, Ordering::Relaxed);
        } else {
            log::error!(
                "Attempted to increment error counter for {:?} which is not in the map. \
                 This indicates a bug in ProcessingStats initialization.",
                error
            );
        }
    }

    /// Increment an info counter.
    pub fn increment_info(&self, info_type: InfoType) {
        self.add_info(info_type, 1);
    }

    /// Add `amount` to an info counter.
    pub fn add_info(&self, info_type: InfoType, amount: usize) {
        if let Some(counter) = self.info.get(&info_type) {
            counter.fetch_add(amount, Ordering::Relaxed);
        } else {
            log::error!(
                "Attempted to increment info counter for {:?} which is not in the map. \
                 This indicates a bug in ProcessingStats initialization.",
                info_type
            );
        }
    }

    /// Get the count for an error type.
    pub fn get_error_count(&self, error: ErrorType) -> usize {
        self.errors
            .get(&error)
            .map(|c| c.load(Ordering::SeqCst))
            .unwrap_or(0)
    }

    /// Get the count for an info type.
    pub fn get_info_count(&self, info_type: InfoType) -> usize {
        self.info
            .get(&info_type)
            .map(|c| c.load(Ordering::SeqCst))
            .unwrap_or(0)
    }

    /// Get total error count across all error types.
    pub fn total_errors(&self) -> usize {
        ErrorType::iter().map(|e| self.get_error_count(e)).sum()
    }

    /// Get total info count across all info types.
    pub fn total_info(&self) -> usize {
        InfoType::iter().map(|i| self.get_info_count(i)).sum()
    }

    /// One-line summary for the end-of-analysis log entry.
    pub fn summary(&self) -> String {
        let mut line = format!(
            "{} queries, {} links, {} pages scraped, {} chunks analyzed, {} errors",
            self.get_info_count(InfoType::SearchQuery),
            self.get_info_count(InfoType::SearchLink),
            self.get_info_count(InfoType::PageScraped),
            self.get_info_count(InfoType::ChunkAnalyzed),
            self.total_errors()
        );
        let breakdown: Vec<String> = ErrorType::iter()
            .filter_map(|e| {
                let count = self.get_error_count(e);
                (count > 0).then(|| format!("{}: {}", e, count))
            })
            .collect();
        if !breakdown.is_empty() {
            line.push_str(&format!(" ({})", breakdown.join(", ")));
        }
        line
    }
}
