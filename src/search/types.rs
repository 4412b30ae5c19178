//! Search API response types.

use serde::Deserialize;

/// Subset of a Custom Search JSON API response.
///
/// Responses without results omit `items` entirely.
#[derive(Debug, Default, Deserialize)]
pub struct SearchResponse {
    #[serde(default)]
    pub items: Vec<SearchItem>,
}

/// One search result. Only the `link` field is used.
#[derive(Debug, Deserialize)]
pub struct SearchItem {
    pub link: Option<String>,
}

impl SearchResponse {
    /// Links of all items that carry one, in result order.
    pub fn links(self) -> impl Iterator<Item = String> {
        self.items.into_iter().filter_map(|item| item.link)
    }
}
