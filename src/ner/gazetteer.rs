//! Dictionary-based place-name recognizer.
//!
//! Matches the country table, the country aliases, a list of major cities and
//! a list of continents/regions against the text. Country and city names are
//! tagged `Gpe`, regions `Loc`. Matching is case-sensitive. A name whose first
//! or last character is alphanumeric must not be glued to another
//! alphanumeric character on that side; when the longest candidate at a
//! position is glued, shorter names at the same position are tried.

use regex::Regex;

use super::{Entity, EntityLabel, EntityRecognizer};
use crate::error_handling::RecognizerError;
use crate::locations::{country_vocabulary, CITY_NAMES, REGION_NAMES};

/// Gazetteer recognizer over the built-in place-name tables.
pub struct GazetteerRecognizer {
    pattern: Regex,
    /// Longest first, used to retry a position after a glued match.
    names: Vec<(String, EntityLabel)>,
}

impl Default for GazetteerRecognizer {
    fn default() -> Self {
        Self::new()
    }
}

impl GazetteerRecognizer {
    /// Builds the recognizer from the built-in tables.
    pub fn new() -> Self {
        let gpe = country_vocabulary().chain(CITY_NAMES.iter().copied());
        Self::with_names(gpe, REGION_NAMES.iter().copied())
    }

    /// Builds a recognizer from custom GPE and LOC name lists.
    pub fn with_names<'a>(
        gpe: impl IntoIterator<Item = &'a str>,
        loc: impl IntoIterator<Item = &'a str>,
    ) -> Self {
        let mut names: Vec<(&str, EntityLabel)> = gpe
            .into_iter()
            .map(|n| (n, EntityLabel::Gpe))
            .chain(loc.into_iter().map(|n| (n, EntityLabel::Loc)))
            .filter(|(n, _)| !n.is_empty())
            .collect();
        // Longest first: the regex alternation is leftmost-first, so
        // "United States of America" must be tried before "United States".
        names.sort_by(|a, b| b.0.len().cmp(&a.0.len()).then_with(|| a.0.cmp(b.0)));
        names.dedup_by(|a, b| a.0 == b.0);

        // One capture group per label keeps the label lookup O(1) per match.
        let alternation = |label: EntityLabel| {
            names
                .iter()
                .filter(|(_, l)| *l == label)
                .map(|(n, _)| regex::escape(n))
                .collect::<Vec<_>>()
                .join("|")
        };
        let gpe_alt = alternation(EntityLabel::Gpe);
        let loc_alt = alternation(EntityLabel::Loc);
        let source = match (gpe_alt.is_empty(), loc_alt.is_empty()) {
            (false, false) => format!("(?P<gpe>{gpe_alt})|(?P<loc>{loc_alt})"),
            (false, true) => format!("(?P<gpe>{gpe_alt})"),
            (true, false) => format!("(?P<loc>{loc_alt})"),
            (true, true) => r"[^\s\S]".to_string(),
        };

        // Patterns are escaped literals, so compilation cannot fail short of
        // exceeding the size limit, which the built-in tables stay far below.
        let pattern = Regex::new(&source).unwrap_or_else(|e| {
            log::error!("Failed to compile gazetteer pattern: {}", e);
            crate::utils::never_matching_regex()
        });

        let names = names
            .into_iter()
            .map(|(n, label)| (n.to_string(), label))
            .collect();
        Self { pattern, names }
    }

    /// Longest name starting at `start` that is shorter than `max_len` bytes
    /// and not glued to the surrounding text.
    fn shorter_match(
        &self,
        text: &str,
        start: usize,
        max_len: usize,
    ) -> Option<(usize, EntityLabel)> {
        let rest = &text[start..];
        self.names
            .iter()
            .filter(|(name, _)| name.len() < max_len && rest.starts_with(name.as_str()))
            .find(|(name, _)| is_word_bounded(text, start, start + name.len()))
            .map(|(name, label)| (start + name.len(), *label))
    }
}

impl EntityRecognizer for GazetteerRecognizer {
    fn recognize(&self, text: &str) -> Result<Vec<Entity>, RecognizerError> {
        let mut entities = Vec::new();
        let mut pos = 0;
        while let Some(caps) = self.pattern.captures_at(text, pos) {
            let (m, label) = match (caps.name("gpe"), caps.name("loc")) {
                (Some(m), _) => (m, EntityLabel::Gpe),
                (None, Some(m)) => (m, EntityLabel::Loc),
                (None, None) => break,
            };
            let start = m.start();
            let found = if is_word_bounded(text, start, m.end()) {
                Some((m.end(), label))
            } else {
                self.shorter_match(text, start, m.len())
            };
            match found {
                Some((end, label)) => {
                    entities.push(Entity::new(&text[start..end], label));
                    pos = end;
                }
                None => {
                    // Skip one character and keep scanning
                    pos = start + text[start..].chars().next().map_or(1, char::len_utf8);
                }
            }
        }
        Ok(entities)
    }
}

/// True if the span `start..end` is not glued to letters or digits.
///
/// A side only needs a boundary when the name itself has an alphanumeric
/// character there, so "U.S." matches inside "U.S.A".
fn is_word_bounded(text: &str, start: usize, end: usize) -> bool {
    let span = &text[start..end];
    let alnum = |c: Option<char>| c.is_some_and(char::is_alphanumeric);
    let glued_before = alnum(span.chars().next()) && alnum(text[..start].chars().next_back());
    let glued_after = alnum(span.chars().next_back()) && alnum(text[end..].chars().next());
    !glued_before && !glued_after
}
