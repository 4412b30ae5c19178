//! Selector and pattern parsing utilities.

use regex::Regex;
use scraper::Selector;

/// Parses a CSS selector with a safe fallback.
///
/// If parsing fails, logs an error and returns a selector that matches nothing
/// (`*:not(*)`). This prevents panics while allowing the code to continue.
///
/// # Arguments
///
/// * `selector_str` - The CSS selector string to parse
/// * `context` - Context description for error logging (e.g., "content text extraction")
pub fn parse_selector_with_fallback(selector_str: &str, context: &str) -> Selector {
    Selector::parse(selector_str).unwrap_or_else(|e| {
        log::error!(
            "Failed to parse CSS selector '{}' in {}: {}. Using fallback selector.",
            selector_str,
            context,
            e
        );
        Selector::parse("*:not(*)").expect(
            "Fallback selector '*:not(*)' should always parse - this is a programming error",
        )
    })
}

/// A regex that matches no input at all.
pub fn never_matching_regex() -> Regex {
    Regex::new(r"[^\s\S]")
        .expect("Pattern '[^\\s\\S]' should always compile - this is a programming error")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_selector_valid() {
        let selector = parse_selector_with_fallback("p, div, span", "test");
        let html = scraper::Html::parse_fragment("<p>a</p><div>b</div><em>c</em>");
        assert_eq!(html.select(&selector).count(), 2);
    }

    #[test]
    fn test_parse_selector_invalid_matches_nothing() {
        let selector = parse_selector_with_fallback("p[[", "test");
        let html = scraper::Html::parse_fragment("<p>a</p>");
        assert_eq!(html.select(&selector).count(), 0);
    }

    #[test]
    fn test_never_matching_regex() {
        let re = never_matching_regex();
        assert!(!re.is_match(""));
        assert!(!re.is_match("anything at all"));
    }
}
