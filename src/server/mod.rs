//! HTTP front-end for on-demand analyses.
//!
//! Provides two endpoints:
//! - `POST /analyze` - form field `domain`, responds with the JSON `AnalysisResult`
//! - `GET /health` - liveness probe
//!
//! Requests are handled independently; each one runs its own analysis
//! against the shared `LocationFinder`.

use std::sync::Arc;

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Form, Json, Router};
use serde::Deserialize;

use crate::analysis::LocationFinder;
use crate::config::DOMAIN_REQUIRED;

/// Form body of `POST /analyze`.
#[derive(Debug, Deserialize)]
pub struct AnalyzeForm {
    #[serde(default)]
    pub domain: Option<String>,
}

/// Builds the router without binding it, so it can be mounted or tested.
pub fn router(finder: Arc<LocationFinder>) -> Router {
    Router::new()
        .route("/analyze", post(analyze_handler))
        .route("/health", get(health_handler))
        .with_state(finder)
}

/// Creates and starts the HTTP front-end on `127.0.0.1:port`.
pub async fn start_server(port: u16, finder: Arc<LocationFinder>) -> Result<(), anyhow::Error> {
    let app = router(finder);

    let listener = tokio::net::TcpListener::bind(format!("127.0.0.1:{}", port))
        .await
        .map_err(|e| anyhow::anyhow!("Failed to bind server to port {}: {}", port, e))?;

    log::info!("Server listening on http://127.0.0.1:{}/", port);
    log::info!("  - Analyze: POST http://127.0.0.1:{}/analyze", port);

    axum::serve(listener, app)
        .await
        .map_err(|e| anyhow::anyhow!("Server error: {}", e))?;

    Ok(())
}

async fn analyze_handler(
    State(finder): State<Arc<LocationFinder>>,
    Form(form): Form<AnalyzeForm>,
) -> Response {
    let domain = match form.domain.as_deref().map(str::trim) {
        Some(domain) if !domain.is_empty() => domain.to_string(),
        _ => {
            return (
                StatusCode::BAD_REQUEST,
                Json(serde_json::json!({ "error": DOMAIN_REQUIRED })),
            )
                .into_response()
        }
    };

    let result = finder.analyze(&domain).await;
    (StatusCode::OK, Json(result)).into_response()
}

async fn health_handler() -> &'static str {
    "ok"
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ner::GazetteerRecognizer;
    use crate::scrape::PageScraper;
    use crate::search::SearchClient;
    use axum::body::{to_bytes, Body};
    use axum::http::{header, Request};
    use httptest::{matchers::*, responders::*, Expectation, Server};
    use std::time::Duration;
    use tower::ServiceExt;

    fn finder_for(endpoint: String) -> Arc<LocationFinder> {
        let client = Arc::new(reqwest::Client::new());
        let search = SearchClient::new(client.clone(), endpoint, "k", "cx", Duration::ZERO);
        let scraper = PageScraper::new(client, Arc::new(GazetteerRecognizer::new()));
        Arc::new(LocationFinder::new(search, scraper, 2))
    }

    fn analyze_request(body: &'static str) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri("/analyze")
            .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
            .body(Body::from(body))
            .unwrap()
    }

    async fn json_body(response: Response) -> serde_json::Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_health() {
        let app = router(finder_for("http://127.0.0.1:9/search".to_string()));
        let response = app
            .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        assert_eq!(&bytes[..], b"ok");
    }

    #[tokio::test]
    async fn test_analyze_requires_domain() {
        for body in ["", "domain=", "domain=%20%20", "other=acme.com"] {
            let app = router(finder_for("http://127.0.0.1:9/search".to_string()));
            let response = app.oneshot(analyze_request(body)).await.unwrap();
            assert_eq!(response.status(), StatusCode::BAD_REQUEST, "body: {body:?}");
            assert_eq!(
                json_body(response).await,
                serde_json::json!({ "error": "Domain is required" })
            );
        }
    }

    #[tokio::test]
    async fn test_analyze_returns_result_json() {
        let server = Server::run();
        server.expect(
            Expectation::matching(request::method_path("GET", "/customsearch/v1"))
                .times(3)
                .respond_with(json_encoded(serde_json::json!({}))),
        );

        let app = router(finder_for(server.url_str("/customsearch/v1")));
        let response = app
            .oneshot(analyze_request("domain=https%3A%2F%2Fwww.acme.com%2F"))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            json_body(response).await,
            serde_json::json!({
                "domain": "acme.com",
                "countries": [],
                "cities": [],
                "others": [],
                "error": "No relevant pages found"
            })
        );
    }
}
