// Search client tests.

use super::*;
use crate::error_handling::ErrorType;
use httptest::{all_of, matchers::*, responders::*, Expectation, Server};

fn client_for(server: &Server) -> SearchClient {
    SearchClient::new(
        Arc::new(reqwest::Client::new()),
        server.url_str("/customsearch/v1"),
        "test-key",
        "test-cx",
        Duration::ZERO,
    )
}

macro_rules! query_matcher {
    ($query:expr) => {
        all_of![
            request::method_path("GET", "/customsearch/v1"),
            request::query(url_decoded(contains(("q", $query)))),
            request::query(url_decoded(contains(("key", "test-key")))),
            request::query(url_decoded(contains(("cx", "test-cx")))),
        ]
    };
}

#[test]
fn test_build_queries() {
    assert_eq!(
        build_queries("acme.com"),
        vec![
            "site:acme.com global locations",
            "site:acme.com worldwide offices",
            "site:acme.com international presence",
        ]
    );
}

#[tokio::test]
async fn test_search_merges_and_deduplicates_links() {
    let server = Server::run();
    server.expect(
        Expectation::matching(query_matcher!("site:acme.com global locations")).respond_with(
            json_encoded(serde_json::json!({
                "items": [
                    {"link": "https://acme.com/locations"},
                    {"link": "https://acme.com/about"}
                ]
            })),
        ),
    );
    server.expect(
        Expectation::matching(query_matcher!("site:acme.com worldwide offices")).respond_with(
            json_encoded(serde_json::json!({
                "items": [
                    {"link": "https://acme.com/about"},
                    {"title": "no link here"},
                    {"link": "https://acme.com/offices"}
                ]
            })),
        ),
    );
    server.expect(
        Expectation::matching(query_matcher!("site:acme.com international presence"))
            .respond_with(json_encoded(serde_json::json!({"kind": "customsearch#search"}))),
    );

    let stats = ProcessingStats::new();
    let links = client_for(&server).search("acme.com", &stats).await;

    assert_eq!(
        links,
        vec![
            "https://acme.com/locations",
            "https://acme.com/about",
            "https://acme.com/offices",
        ]
    );
    assert_eq!(stats.get_info_count(InfoType::SearchQuery), 3);
    assert_eq!(stats.get_info_count(InfoType::SearchLink), 4);
    assert_eq!(stats.total_errors(), 0);
}

#[tokio::test]
async fn test_failed_queries_contribute_nothing() {
    let server = Server::run();
    server.expect(
        Expectation::matching(query_matcher!("site:acme.com global locations"))
            .respond_with(status_code(429).body("quota exceeded")),
    );
    server.expect(
        Expectation::matching(query_matcher!("site:acme.com worldwide offices"))
            .respond_with(status_code(200).body("this is not json")),
    );
    server.expect(
        Expectation::matching(query_matcher!("site:acme.com international presence"))
            .respond_with(json_encoded(serde_json::json!({
                "items": [{"link": "https://acme.com/global"}]
            }))),
    );

    let stats = ProcessingStats::new();
    let links = client_for(&server).search("acme.com", &stats).await;

    assert_eq!(links, vec!["https://acme.com/global"]);
    assert_eq!(stats.get_error_count(ErrorType::SearchStatusError), 1);
    assert_eq!(stats.get_error_count(ErrorType::SearchDecodeError), 1);
}

#[tokio::test]
async fn test_unreachable_search_api_returns_empty() {
    let client = SearchClient::new(
        Arc::new(reqwest::Client::new()),
        "http://127.0.0.1:9/customsearch/v1",
        "k",
        "cx",
        Duration::ZERO,
    );
    let stats = ProcessingStats::new();
    let links = client.search("acme.com", &stats).await;

    assert!(links.is_empty());
    assert_eq!(stats.get_error_count(ErrorType::SearchRequestError), 3);
}

#[tokio::test]
async fn test_queries_are_paced_by_delay() {
    let server = Server::run();
    server.expect(
        Expectation::matching(request::method_path("GET", "/customsearch/v1"))
            .times(3)
            .respond_with(json_encoded(serde_json::json!({}))),
    );
    let client = SearchClient {
        delay: Duration::from_millis(200),
        ..client_for(&server)
    };

    let start = std::time::Instant::now();
    client.search("acme.com", &ProcessingStats::new()).await;
    // Two pauses between three queries
    assert!(start.elapsed() >= Duration::from_millis(400));
}

#[tokio::test]
async fn test_query_errors_do_not_expose_api_key() {
    let server = Server::run();
    server.expect(
        Expectation::matching(query_matcher!("site:acme.com global locations"))
            .respond_with(status_code(403).body("forbidden")),
    );

    let err = client_for(&server)
        .run_query("site:acme.com global locations")
        .await
        .unwrap_err();
    assert!(err.is_status());
    assert!(err.url().is_none());
    assert!(!err.to_string().contains("test-key"));
    assert!(!format!("{:?}", err).contains("test-key"));
    assert_eq!(categorize_search_error(&err), ErrorType::SearchStatusError);

    let unreachable = SearchClient::new(
        Arc::new(reqwest::Client::new()),
        "http://127.0.0.1:9/customsearch/v1",
        "secret-key",
        "cx",
        Duration::ZERO,
    );
    let err = unreachable.run_query("site:acme.com").await.unwrap_err();
    assert!(!err.to_string().contains("secret-key"));
    assert!(!format!("{:?}", err).contains("secret-key"));
}
