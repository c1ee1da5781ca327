//! Integration tests for the CMS REST client and the repository on top of
//! it, against a mock HTTP server.

use std::sync::Arc;
use std::time::Duration;

use assert_matches::assert_matches;
use foliomate_cms::client::CmsClient;
use foliomate_cms::config::CmsConfig;
use foliomate_cms::error::CmsError;
use foliomate_cms::query::{Collection, FindQuery};
use foliomate_cms::repository::ContentRepo;
use foliomate_core::preview::ContentMode;
use serde_json::json;
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client_for(server: &MockServer) -> CmsClient {
    CmsClient::new(CmsConfig::for_server(server.uri())).unwrap()
}

// ---------------------------------------------------------------------------
// Test: filters, depth and cache headers are sent as the CMS expects
// ---------------------------------------------------------------------------

#[tokio::test]
async fn published_query_sends_filters_and_cache_header() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/templates"))
        .and(query_param("where[slug][equals]", "modern-portfolio"))
        .and(query_param("depth", "2"))
        .and(header("cache-control", "max-age=60"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "docs": [{ "id": "t1", "name": "Modern Portfolio", "slug": "modern-portfolio", "_status": "published" }],
            "totalDocs": 1,
            "hasNextPage": false
        })))
        .expect(1)
        .mount(&server)
        .await;

    let query = FindQuery::new().equals("slug", "modern-portfolio").depth(2);
    let response = client_for(&server)
        .fetch::<serde_json::Value>(Collection::Templates, &query)
        .await
        .unwrap();

    assert_eq!(response.docs.len(), 1);
    assert_eq!(response.total_docs, Some(1));
}

#[tokio::test]
async fn draft_query_disables_caching() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/templates"))
        .and(query_param("draft", "true"))
        .and(header("cache-control", "no-cache"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "docs": [] })))
        .expect(1)
        .mount(&server)
        .await;

    let query = FindQuery::new().equals("slug", "x").mode(ContentMode::Draft);
    let response = client_for(&server)
        .fetch::<serde_json::Value>(Collection::Templates, &query)
        .await
        .unwrap();

    assert!(response.docs.is_empty());
}

// ---------------------------------------------------------------------------
// Test: error classification
// ---------------------------------------------------------------------------

#[tokio::test]
async fn non_success_status_is_api_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
        .mount(&server)
        .await;

    let result = client_for(&server)
        .fetch::<serde_json::Value>(Collection::Categories, &FindQuery::new())
        .await;

    assert_matches!(result, Err(CmsError::Api { status: 500, ref body }) if body == "boom");
}

#[tokio::test]
async fn garbage_body_is_decode_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>not json</html>"))
        .mount(&server)
        .await;

    let result = client_for(&server)
        .fetch::<serde_json::Value>(Collection::Templates, &FindQuery::new())
        .await;

    assert_matches!(result, Err(CmsError::Decode(_)));
}

#[tokio::test]
async fn slow_server_is_request_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({ "docs": [] }))
                .set_delay(Duration::from_secs(2)),
        )
        .mount(&server)
        .await;

    let config = CmsConfig {
        timeout: Duration::from_millis(200),
        ..CmsConfig::for_server(server.uri())
    };
    let result = CmsClient::new(config)
        .unwrap()
        .fetch::<serde_json::Value>(Collection::Templates, &FindQuery::new())
        .await;

    assert_matches!(result, Err(CmsError::Request(_)));
}

// ---------------------------------------------------------------------------
// Test: repository over HTTP
// ---------------------------------------------------------------------------

#[tokio::test]
async fn repository_discards_unpublished_documents_from_published_query() {
    let server = MockServer::start().await;

    // A misbehaving source that ignores the status filter.
    Mock::given(method("GET"))
        .and(path("/api/templates"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "docs": [{ "id": "t9", "name": "Leaky Draft", "slug": "leaky", "_status": "draft" }]
        })))
        .mount(&server)
        .await;

    let repo = ContentRepo::new(Arc::new(client_for(&server)), 2);

    assert!(repo
        .find_template_by_slug("leaky", ContentMode::Published)
        .await
        .is_none());
    assert!(repo.find_template_by_slug("leaky", ContentMode::Draft).await.is_some());
}

#[tokio::test]
async fn repository_turns_outage_into_not_found() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let repo = ContentRepo::new(Arc::new(client_for(&server)), 2);

    assert!(repo.find_category_by_slug("portfolio").await.is_none());
    assert!(repo.find_published_templates(100).await.is_empty());
}

#[tokio::test]
async fn repository_queries_category_membership() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/templates"))
        .and(query_param("where[categories][in]", "c1"))
        .and(query_param("where[_status][equals]", "published"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "docs": [
                { "id": "t1", "name": "One", "slug": "one", "_status": "published" },
                { "id": "t2", "name": "Two", "slug": "two", "_status": "published" }
            ]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let repo = ContentRepo::new(Arc::new(client_for(&server)), 2);
    let slugs: Vec<String> = repo
        .find_templates_by_category("c1")
        .await
        .into_iter()
        .map(|t| t.slug)
        .collect();

    assert_eq!(slugs, vec!["one".to_string(), "two".to_string()]);
}
