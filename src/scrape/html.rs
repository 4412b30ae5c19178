//! Visible-text extraction from HTML pages.

use std::sync::LazyLock;

use scraper::{Html, Selector};

use crate::config::{CONTENT_SELECTOR, MAX_CONTENT_ELEMENTS};

static CONTENT_ELEMENT_SELECTOR: LazyLock<Selector> = LazyLock::new(|| {
    crate::utils::parse_selector_with_fallback(CONTENT_SELECTOR, "content text extraction")
});

/// Extracts the text of the first `MAX_CONTENT_ELEMENTS` paragraph, block and
/// span elements of a page, in document order, joined by single spaces.
///
/// Text of nested elements is included once per matching ancestor, so a
/// `<span>` inside a `<div>` contributes to both.
pub fn extract_content_text(body: &str) -> String {
    let document = Html::parse_document(body);
    document
        .select(&CONTENT_ELEMENT_SELECTOR)
        .take(MAX_CONTENT_ELEMENTS)
        .map(|element| element.text().collect::<String>())
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extracts_only_content_elements() {
        let html = r#"<html><head><title>Berlin</title></head><body>
            <h1>Madrid</h1>
            <p>Offices in Paris</p>
            <ul><li>Rome</li></ul>
            <span>and Tokyo</span>
        </body></html>"#;
        assert_eq!(extract_content_text(html), "Offices in Paris and Tokyo");
    }

    #[test]
    fn test_nested_elements_repeat_text() {
        let html = "<div>Hello <span>London</span></div>";
        assert_eq!(extract_content_text(html), "Hello London London");
    }

    #[test]
    fn test_caps_number_of_elements() {
        let html: String = (0..MAX_CONTENT_ELEMENTS + 50)
            .map(|i| format!("<p>{}</p>", i))
            .collect();
        let text = extract_content_text(&html);
        let parts: Vec<&str> = text.split(' ').collect();
        assert_eq!(parts.len(), MAX_CONTENT_ELEMENTS);
        assert_eq!(parts.last(), Some(&"199"));
    }

    #[test]
    fn test_empty_or_garbage_body() {
        assert_eq!(extract_content_text(""), "");
        assert_eq!(extract_content_text("not html at all"), "");
    }
}
