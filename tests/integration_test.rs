//! Integration tests for the location_finder library.
//!
//! These tests drive the public API against a mock HTTP server that plays
//! both the search API and the company's pages. They make no real network
//! requests.

use std::sync::Arc;
use std::time::Duration;

use httptest::{all_of, matchers::*, responders::*, Expectation, Server};

use location_finder::{
    Confidence, Config, Entity, EntityLabel, EntityRecognizer, GazetteerRecognizer,
    LocationFinder, PageScraper, RecognizerError, SearchClient,
};

fn finder(server: &Server, recognizer: Arc<dyn EntityRecognizer>, max_pages: usize) -> LocationFinder {
    let client = Arc::new(reqwest::Client::new());
    let search = SearchClient::new(
        client.clone(),
        server.url_str("/customsearch/v1"),
        "integration-key",
        "integration-cx",
        Duration::ZERO,
    );
    LocationFinder::new(search, PageScraper::new(client, recognizer), max_pages)
}

fn expect_query(server: &Server, query: &'static str, body: serde_json::Value) {
    server.expect(
        Expectation::matching(all_of![
            request::method_path("GET", "/customsearch/v1"),
            request::query(url_decoded(contains(("q", query)))),
            request::query(url_decoded(contains(("key", "integration-key")))),
            request::query(url_decoded(contains(("cx", "integration-cx")))),
        ])
        .respond_with(json_encoded(body)),
    );
}

#[tokio::test]
async fn test_full_pipeline() {
    let server = Server::run();
    expect_query(
        &server,
        "site:globex.io global locations",
        serde_json::json!({ "items": [{ "link": server.url_str("/locations") }] }),
    );
    expect_query(
        &server,
        "site:globex.io worldwide offices",
        serde_json::json!({ "items": [
            { "link": server.url_str("/locations") },
            { "link": server.url_str("/careers") }
        ] }),
    );
    expect_query(
        &server,
        "site:globex.io international presence",
        serde_json::json!({ "items": [{ "link": server.url_str("/press") }] }),
    );
    server.expect(
        Expectation::matching(request::method_path("GET", "/locations")).respond_with(
            status_code(200).append_header("Content-Type", "text/html").body(
                "<html><body>\
                 <div><p>Globex has offices in Toronto, Canada and Sydney, Australia.</p></div>\
                 <p>Our European hub is in the U.K.</p>\
                 </body></html>",
            ),
        ),
    );
    server.expect(
        Expectation::matching(request::method_path("GET", "/careers")).respond_with(
            status_code(200).append_header("Content-Type", "text/html").body(
                "<html><body><span>Join us in Toronto or in Britain.</span></body></html>",
            ),
        ),
    );

    let result = finder(&server, Arc::new(GazetteerRecognizer::new()), 2)
        .analyze("HTTPS://WWW.Globex.IO/contact?ref=footer")
        .await;

    assert!(result.is_success(), "unexpected error: {:?}", result.error);
    assert_eq!(result.domain, "globex.io");

    let countries: Vec<(&str, usize, Confidence)> = result
        .countries
        .iter()
        .map(|c| (c.name.as_str(), c.count, c.confidence))
        .collect();
    assert_eq!(
        countries,
        vec![
            ("Australia", 1, Confidence::Low),
            ("Canada", 1, Confidence::Low),
            ("United Kingdom", 2, Confidence::Medium),
        ]
    );

    let cities: Vec<(&str, usize)> = result
        .cities
        .iter()
        .map(|c| (c.name.as_str(), c.count))
        .collect();
    assert_eq!(cities, vec![("Sydney", 1), ("Toronto", 2)]);
    assert!(result.others.is_empty());

    let json = serde_json::to_value(&result).unwrap();
    assert!(json.get("error").is_none());
    assert_eq!(json["cities"][1]["confidence"], "Medium");
}

/// Recognizer that tags every capitalized word as a place.
struct CapitalizedWords;

impl EntityRecognizer for CapitalizedWords {
    fn recognize(&self, text: &str) -> Result<Vec<Entity>, RecognizerError> {
        Ok(text
            .split(|c: char| !c.is_alphanumeric())
            .filter(|w| w.chars().next().is_some_and(|c| c.is_uppercase() || c.is_ascii_digit()))
            .map(|w| Entity::new(w, EntityLabel::Gpe))
            .collect())
    }
}

#[tokio::test]
async fn test_custom_recognizer_populates_all_buckets() {
    let server = Server::run();
    expect_query(
        &server,
        "site:initech.com global locations",
        serde_json::json!({ "items": [{ "link": server.url_str("/about") }] }),
    );
    expect_query(&server, "site:initech.com worldwide offices", serde_json::json!({}));
    expect_query(&server, "site:initech.com international presence", serde_json::json!({}));
    server.expect(
        Expectation::matching(request::method_path("GET", "/about"))
            .respond_with(status_code(200).body("<p>Austin Texas NY 2024 Japan</p>")),
    );

    let result = finder(&server, Arc::new(CapitalizedWords), 2)
        .analyze("initech.com")
        .await;

    let names = |list: &[location_finder::ClassifiedLocation]| -> Vec<String> {
        list.iter().map(|l| l.name.clone()).collect()
    };
    assert_eq!(names(&result.countries), vec!["Japan"]);
    assert_eq!(names(&result.cities), vec!["Austin", "Texas"]);
    assert_eq!(names(&result.others), vec!["2024", "NY"]);
}

#[tokio::test]
async fn test_failed_search_is_reported_in_result() {
    let server = Server::run();
    server.expect(
        Expectation::matching(request::method_path("GET", "/customsearch/v1"))
            .times(3)
            .respond_with(status_code(403).body("quota exceeded")),
    );

    let result = finder(&server, Arc::new(GazetteerRecognizer::new()), 2)
        .analyze("www.initech.com")
        .await;

    assert_eq!(result.domain, "initech.com");
    assert_eq!(result.error.as_deref(), Some("No relevant pages found"));
}

#[test]
fn test_from_config_validates_settings() {
    let config = Config {
        google_api_key: Some("key".into()),
        search_engine_id: Some("cx".into()),
        ..Default::default()
    };
    assert!(LocationFinder::from_config(&config).is_ok());

    let config = Config {
        max_pages: 0,
        ..config
    };
    let err = LocationFinder::from_config(&config).err().unwrap();
    assert!(err.to_string().contains("max_pages"));
}
