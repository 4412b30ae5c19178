//! Analysis result type.

use serde::Serialize;

use crate::error_handling::AnalysisError;
use crate::locations::{CategorizedLocations, ClassifiedLocation};

/// Outcome of one domain analysis.
///
/// When `error` is set all three lists are empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AnalysisResult {
    pub domain: String,
    pub countries: Vec<ClassifiedLocation>,
    pub cities: Vec<ClassifiedLocation>,
    pub others: Vec<ClassifiedLocation>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl AnalysisResult {
    pub fn from_locations(domain: impl Into<String>, locations: CategorizedLocations) -> Self {
        Self {
            domain: domain.into(),
            countries: locations.countries,
            cities: locations.cities,
            others: locations.others,
            error: None,
        }
    }

    pub fn failed(domain: impl Into<String>, error: &AnalysisError) -> Self {
        Self {
            domain: domain.into(),
            countries: Vec::new(),
            cities: Vec::new(),
            others: Vec::new(),
            error: Some(error.to_string()),
        }
    }

    pub fn is_success(&self) -> bool {
        self.error.is_none()
    }
}
