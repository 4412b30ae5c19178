//! Location normalization and classification.
//!
//! Raw place names coming out of the recognizer are normalized through the
//! country alias table, counted per normalized name, and finally split into
//! countries, cities and other mentions with a confidence tier derived from
//! the mention count.

mod tables;

use std::cmp::Ordering;
use std::collections::HashMap;
use std::fmt;

use serde::Serialize;

pub use tables::{COUNTRY_ALIASES, KNOWN_COUNTRIES};
pub(crate) use tables::{country_vocabulary, CITY_NAMES, REGION_NAMES};

/// Coarse confidence bucket derived from a mention count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Confidence {
    Low,
    Medium,
    High,
}

impl Confidence {
    /// `1 → Low`, `2 → Medium`, `3+ → High`.
    pub fn from_count(count: usize) -> Self {
        match count {
            0 | 1 => Confidence::Low,
            2 => Confidence::Medium,
            _ => Confidence::High,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Confidence::Low => "Low",
            Confidence::Medium => "Medium",
            Confidence::High => "High",
        }
    }
}

impl fmt::Display for Confidence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Result bucket a normalized location belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LocationKind {
    Country,
    City,
    Other,
}

/// Maps a raw location string to its canonical country name if it is a known
/// alias, otherwise returns it unchanged.
pub fn normalize_location(raw: &str) -> &str {
    COUNTRY_ALIASES.get(raw).copied().unwrap_or(raw)
}

/// Decides which bucket a normalized location name belongs to.
///
/// Countries are names in the reference country set or alias-table keys.
/// Anything else longer than two characters that is not purely numeric is a
/// city candidate; the remainder is `Other`.
pub fn classify(name: &str) -> LocationKind {
    if KNOWN_COUNTRIES.contains(name) || COUNTRY_ALIASES.contains_key(name) {
        LocationKind::Country
    } else if name.chars().count() > 2 && !is_numeric(name) {
        LocationKind::City
    } else {
        LocationKind::Other
    }
}

fn is_numeric(s: &str) -> bool {
    !s.is_empty() && s.chars().all(char::is_numeric)
}

/// One entry of a result bucket.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ClassifiedLocation {
    pub name: String,
    pub count: usize,
    pub confidence: Confidence,
    pub note: String,
}

impl ClassifiedLocation {
    pub fn new(name: impl Into<String>, count: usize) -> Self {
        Self {
            name: name.into(),
            count,
            confidence: Confidence::from_count(count),
            note: String::new(),
        }
    }
}

/// Locations split into the three disjoint result buckets, each sorted by name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CategorizedLocations {
    pub countries: Vec<ClassifiedLocation>,
    pub cities: Vec<ClassifiedLocation>,
    pub others: Vec<ClassifiedLocation>,
}

/// Mention counts keyed by normalized location name for one analysis.
#[derive(Debug, Clone, Default)]
pub struct MentionCounter {
    counts: HashMap<String, usize>,
}

impl MentionCounter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Normalizes `raw` and counts one mention of the normalized name.
    pub fn record(&mut self, raw: &str) {
        let normalized = normalize_location(raw);
        *self.counts.entry(normalized.to_string()).or_insert(0) += 1;
    }

    /// Current count for an already normalized name.
    pub fn count(&self, name: &str) -> usize {
        self.counts.get(name).copied().unwrap_or(0)
    }

    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Classifies every counted name into its bucket.
    ///
    /// Countries are merged by canonical name so different aliases of one
    /// country end up as a single entry with the summed count. Confidence is
    /// computed from the final count. Buckets are sorted case-insensitively.
    pub fn finalize(self) -> CategorizedLocations {
        let mut countries: HashMap<String, usize> = HashMap::new();
        let mut result = CategorizedLocations::default();

        for (name, count) in self.counts {
            match classify(&name) {
                LocationKind::Country => {
                    let canonical = normalize_location(&name).to_string();
                    *countries.entry(canonical).or_insert(0) += count;
                }
                LocationKind::City => result.cities.push(ClassifiedLocation::new(name, count)),
                LocationKind::Other => result.others.push(ClassifiedLocation::new(name, count)),
            }
        }

        result.countries = countries
            .into_iter()
            .map(|(name, count)| ClassifiedLocation::new(name, count))
            .collect();

        sort_by_name(&mut result.countries);
        sort_by_name(&mut result.cities);
        sort_by_name(&mut result.others);
        result
    }
}

/// Case-insensitive name order; exact name breaks ties so output is stable.
fn compare_names(a: &str, b: &str) -> Ordering {
    a.to_lowercase()
        .cmp(&b.to_lowercase())
        .then_with(|| a.cmp(b))
}

fn sort_by_name(locations: &mut [ClassifiedLocation]) {
    locations.sort_by(|a, b| compare_names(&a.name, &b.name));
}
