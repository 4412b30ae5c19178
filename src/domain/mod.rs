//! Domain extraction and normalization utilities.
//!
//! Turns whatever the user typed (a bare hostname, a full URL, a URL with
//! `www.`) into the bare hostname that scopes search queries and labels the
//! analysis result.

use url::Url;

/// Extracts the bare hostname from a user-supplied domain or URL.
///
/// Inputs without an `http://` or `https://` scheme are prefixed with
/// `http://` before parsing. The host component is used; when the parsed URL
/// has no host, the path component is used instead. A leading `www.` is then
/// stripped (exact prefix only).
///
/// There is no error path: input that `url` cannot parse falls back to plain
/// string manipulation.
///
/// # Examples
///
/// ```
/// use location_finder::extract_main_domain;
///
/// assert_eq!(extract_main_domain("https://www.example.com/path"), "example.com");
/// assert_eq!(extract_main_domain("example.com"), "example.com");
/// ```
pub fn extract_main_domain(input: &str) -> String {
    let input = input.trim();
    let with_scheme = if has_http_scheme(input) {
        input.to_string()
    } else {
        format!("http://{}", input)
    };

    let host = match Url::parse(&with_scheme) {
        Ok(parsed) => match parsed.host_str() {
            Some(host) if !host.is_empty() => host.to_string(),
            _ => parsed.path().trim_start_matches('/').to_string(),
        },
        Err(e) => {
            log::debug!("Falling back to string parsing for '{}': {}", input, e);
            fallback_host(&with_scheme)
        }
    };

    match host.strip_prefix("www.") {
        Some(stripped) => stripped.to_string(),
        None => host,
    }
}

fn has_http_scheme(input: &str) -> bool {
    let lower = input.get(..8).unwrap_or(input).to_ascii_lowercase();
    lower.starts_with("http://") || lower.starts_with("https://")
}

/// Best-effort host extraction for strings the URL parser rejects.
fn fallback_host(with_scheme: &str) -> String {
    let rest = with_scheme
        .split_once("://")
        .map(|(_, rest)| rest)
        .unwrap_or(with_scheme);
    let end = rest.find(['/', '?', '#']).unwrap_or(rest.len());
    rest[..end].to_string()
}

#[cfg(test)]
mod tests {
    include!("tests.rs");
}
