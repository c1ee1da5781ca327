#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Request, Response};
use axum::Router;
use foliomate_api::config::ServerConfig;
use foliomate_api::router::build_app_router;
use foliomate_api::state::AppState;
use foliomate_cms::config::CmsConfig;
use foliomate_cms::memory::MemorySource;
use http_body_util::BodyExt;
use serde_json::{json, Value};
use tower::ServiceExt;

/// Build a test `ServerConfig` with safe defaults.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:3001".to_string()],
        request_timeout_secs: 30,
        frontend_url: "http://localhost:3001".to_string(),
        home_template_limit: 100,
        home_category_limit: 100,
        card_description_max_chars: None,
        cms: CmsConfig::for_server("http://cms.test"),
    }
}

/// Build the full application router over an in-memory content source.
pub fn build_test_app(source: Arc<MemorySource>) -> Router {
    let config = test_config();
    let state = AppState::new(config.clone(), source);
    build_app_router(state, &config)
}

/// Router over the standard storefront fixture.
pub fn fixture_app() -> Router {
    build_test_app(Arc::new(fixture_source()))
}

/// Two categories (one empty), two published templates and one draft.
pub fn fixture_source() -> MemorySource {
    let portfolio = json!({ "id": "c1", "title": "Portfolio", "slug": "portfolio" });
    let minimal = json!({ "id": "c2", "title": "Minimal", "slug": "minimal" });
    let agency = json!({ "id": "c3", "title": "Agency", "slug": "agency" });

    MemorySource::new(
        vec![
            json!({
                "id": "t1",
                "name": "Modern Portfolio",
                "slug": "modern-portfolio",
                "description": "A clean, responsive portfolio.",
                "price": 19.99,
                "liveDemo": "demo.example.com",
                "thumbnail": { "id": "m1", "url": "/api/media/file/modern.png" },
                "sections": [
                    { "title": "Hero", "content": "Full-bleed header", "image": { "id": "m2", "url": "https://cdn.test/hero.png" } },
                    { "title": "Gallery", "image": "m3" }
                ],
                "categories": [portfolio, minimal, agency],
                "_status": "published"
            }),
            json!({
                "id": "t2",
                "name": "Starter",
                "slug": "starter",
                "categories": ["c2"],
                "_status": "published"
            }),
            json!({
                "id": "t3",
                "name": "Upcoming Shop",
                "slug": "upcoming-shop",
                "price": 49,
                "categories": [{ "id": "c1", "title": "Portfolio", "slug": "portfolio" }],
                "_status": "draft"
            }),
        ],
        vec![
            json!({ "id": "c1", "title": "Portfolio", "slug": "portfolio" }),
            json!({ "id": "c2", "title": "Minimal", "slug": "minimal" }),
            json!({ "id": "c4", "title": "Ecommerce", "slug": "ecommerce" }),
        ],
    )
}

/// Issue a GET request against the router.
pub async fn get(app: Router, uri: &str) -> Response<Body> {
    let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
    app.oneshot(request).await.unwrap()
}

/// Collect a response body as JSON.
pub async fn body_json(response: Response<Body>) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}
