//! Application initialization and resource setup.
//!
//! This module provides functions to initialize the shared resources:
//! - Logger
//! - HTTP client (with user agent and timeout)
//! - Entity recognizer (GLiNER model or built-in gazetteer)
//!
//! All initialization functions return proper error types for error handling.

mod client;
mod logger;

use std::path::Path;
use std::sync::Arc;

use log::warn;

// Re-export public API
pub use client::init_client;
pub use logger::init_logger_with;

use crate::config::Config;
use crate::ner::{EntityRecognizer, GazetteerRecognizer};

/// Initializes the entity recognizer.
///
/// Uses the GLiNER model when `ner_model` and `ner_tokenizer` are configured
/// and the crate is built with the `ner-model` feature. Otherwise, or if the
/// model fails to load, the built-in gazetteer is used. The returned handle
/// is immutable and shared across concurrent analyses.
pub fn init_recognizer(config: &Config) -> Arc<dyn EntityRecognizer> {
    if let (Some(model), Some(tokenizer)) = (&config.ner_model, &config.ner_tokenizer) {
        if let Some(recognizer) = load_model_recognizer(model, tokenizer, config.ner_threshold) {
            return recognizer;
        }
    }
    Arc::new(GazetteerRecognizer::new())
}

#[cfg(feature = "ner-model")]
fn load_model_recognizer(
    model: &Path,
    tokenizer: &Path,
    threshold: f32,
) -> Option<Arc<dyn EntityRecognizer>> {
    match crate::ner::GlinerRecognizer::new(model, tokenizer, threshold) {
        Ok(recognizer) => Some(Arc::new(recognizer)),
        Err(e) => {
            warn!("{}; using the built-in gazetteer", e);
            None
        }
    }
}

#[cfg(not(feature = "ner-model"))]
fn load_model_recognizer(
    model: &Path,
    _tokenizer: &Path,
    _threshold: f32,
) -> Option<Arc<dyn EntityRecognizer>> {
    warn!(
        "NER model {} ignored: built without the `ner-model` feature; using the built-in gazetteer",
        model.display()
    );
    None
}
