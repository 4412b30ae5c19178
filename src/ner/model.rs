//! GLiNER-backed place-name recognizer.
//!
//! Runs a zero-shot span model (via gline-rs) over the text with the labels in
//! `NER_MODEL_LABELS`. Model and tokenizer are read from disk once at startup;
//! inference only borrows the model, so one instance serves every analysis.

use std::path::Path;

use ::gliner::model::input::text::TextInput;
use ::gliner::model::params::Parameters;
use ::gliner::model::pipeline::span::SpanMode;
use ::gliner::model::GLiNER;
use log::{debug, info};
use orp::params::RuntimeParameters;

use super::{Entity, EntityLabel, EntityRecognizer};
use crate::config::{NER_MODEL_LABELS, NER_MODEL_WINDOW};
use crate::error_handling::RecognizerError;
use crate::scrape::chunk_text;

/// Recognizer backed by a GLiNER ONNX model.
pub struct GlinerRecognizer {
    model: GLiNER<SpanMode>,
    threshold: f32,
}

impl GlinerRecognizer {
    /// Loads the model and tokenizer files.
    ///
    /// # Errors
    ///
    /// Returns a `RecognizerError` if either file is missing or the model
    /// cannot be initialized.
    pub fn new(
        model_path: &Path,
        tokenizer_path: &Path,
        threshold: f32,
    ) -> Result<Self, RecognizerError> {
        for path in [model_path, tokenizer_path] {
            if !path.is_file() {
                return Err(RecognizerError(format!(
                    "NER model file not found: {}",
                    path.display()
                )));
            }
        }
        let as_str = |path: &Path| {
            path.to_str()
                .ok_or_else(|| RecognizerError(format!("Invalid path: {}", path.display())))
        };

        let model = GLiNER::<SpanMode>::new(
            Parameters::default(),
            RuntimeParameters::default(),
            as_str(tokenizer_path)?,
            as_str(model_path)?,
        )
        .map_err(|e| RecognizerError(format!("Failed to initialize GLiNER model: {}", e)))?;

        info!("NER model loaded from {}", model_path.display());
        Ok(Self { model, threshold })
    }
}

impl EntityRecognizer for GlinerRecognizer {
    fn recognize(&self, text: &str) -> Result<Vec<Entity>, RecognizerError> {
        let windows: Vec<&str> = chunk_text(text, NER_MODEL_WINDOW).collect();
        if windows.is_empty() {
            return Ok(Vec::new());
        }

        let input = TextInput::from_str(&windows, NER_MODEL_LABELS)
            .map_err(|e| RecognizerError(format!("Failed to create TextInput: {}", e)))?;
        let output = self
            .model
            .inference(input)
            .map_err(|e| RecognizerError(format!("NER inference failed: {}", e)))?;

        let mut entities = Vec::new();
        for spans in &output.spans {
            for span in spans {
                if span.probability() < self.threshold {
                    continue;
                }
                let name = span.text().trim().to_string();
                if !name.is_empty() {
                    let label = label_for_class(&span.class().to_lowercase());
                    entities.push(Entity::new(name, label));
                }
            }
        }
        debug!(
            "NER model found {} entities in {} windows",
            entities.len(),
            windows.len()
        );
        Ok(entities)
    }
}

/// Maps a lowercased model class name onto the recognizer labels.
fn label_for_class(class: &str) -> EntityLabel {
    match class {
        "country" | "city" | "state" => EntityLabel::Gpe,
        "location" => EntityLabel::Loc,
        _ => EntityLabel::Other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_label_for_class() {
        assert_eq!(label_for_class("country"), EntityLabel::Gpe);
        assert_eq!(label_for_class("city"), EntityLabel::Gpe);
        assert_eq!(label_for_class("state"), EntityLabel::Gpe);
        assert_eq!(label_for_class("location"), EntityLabel::Loc);
        assert_eq!(label_for_class("organization"), EntityLabel::Other);
    }

    #[test]
    fn test_every_requested_label_is_a_place() {
        for label in NER_MODEL_LABELS {
            assert!(label_for_class(label).is_place(), "{label}");
        }
    }

    #[test]
    fn test_missing_model_files() {
        let err = GlinerRecognizer::new(
            Path::new("/nonexistent/gliner.onnx"),
            Path::new("/nonexistent/tokenizer.json"),
            0.5,
        )
        .err()
        .unwrap();
        assert!(err.to_string().contains("/nonexistent/gliner.onnx"));
    }
}
