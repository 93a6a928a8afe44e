// tests/api_http.rs
//
// HTTP-level tests for the public API Router without opening sockets.
// We exercise the router directly via tower::ServiceExt::oneshot.
//
// Covered:
// - GET /health
// - GET /news        (HTML, query echo, placeholder)
// - GET /api/news    (JSON contract)

mod common;

use std::sync::Arc;

use axum::{
    body::{self, Body},
    http::{Request, StatusCode},
    Router,
};
use serde_json::Value as Json;
use tower::ServiceExt as _; // for `oneshot`

use common::{default_cfg, pipeline_with, Reply, ScriptedClient};
use ecoportal::enrich::{PLACEHOLDER_CATEGORY, PLACEHOLDER_TITLE};
use ecoportal::{api, AppState};

const BODY_LIMIT: usize = 1024 * 1024; // 1MB, safe for tests

fn router_with(client: ScriptedClient) -> Router {
    let p = pipeline_with(Arc::new(client), default_cfg());
    api::router(AppState::new(p))
}

fn search_router() -> Router {
    router_with(
        ScriptedClient::new().on("https://news.google.com/", Reply::Body(common::SEARCH_FIVE.into())),
    )
}

async fn get_text(app: Router, uri: &str) -> (StatusCode, String) {
    let req = Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .expect("build request");
    let resp = app.oneshot(req).await.expect("oneshot");
    let status = resp.status();
    let bytes = body::to_bytes(resp.into_body(), BODY_LIMIT)
        .await
        .expect("read body")
        .to_vec();
    (status, String::from_utf8(bytes).expect("utf8"))
}

#[tokio::test]
async fn api_health_returns_200_and_ok_body() {
    let (status, body) = get_text(router_with(ScriptedClient::new()), "/health").await;
    assert_eq!(status, StatusCode::OK, "health should be 200");
    assert_eq!(body.trim(), "OK", "health body should be 'OK'");
}

#[tokio::test]
async fn news_page_renders_placeholder_when_all_feeds_fail() {
    let (status, html) = get_text(router_with(ScriptedClient::new()), "/news").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(html.matches("<article").count(), 1);
    assert!(html.contains(PLACEHOLDER_TITLE));
}

#[tokio::test]
async fn news_page_echoes_query_and_lists_items() {
    let (status, html) = get_text(search_router(), "/news?q=flood").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(html.matches("<article").count(), 3);
    assert!(html.contains("value=\"flood\""));
    assert!(html.contains("Search Result"));
}

#[tokio::test]
async fn news_page_escapes_hostile_query() {
    let (status, html) = get_text(
        router_with(ScriptedClient::new()),
        "/news?q=%3Cscript%3Ealert(1)%3C%2Fscript%3E",
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert!(!html.contains("<script>alert(1)"));
    assert!(html.contains("&lt;script&gt;"));
}

#[tokio::test]
async fn api_news_returns_expected_json_fields() {
    let (status, body) = get_text(search_router(), "/api/news?q=flood").await;
    assert!(status.is_success(), "GET /api/news should be 2xx, got {status}");

    let v: Json = serde_json::from_str(&body).expect("parse news json");
    assert_eq!(v["query"], "flood");
    let items = v["items"].as_array().expect("items array");
    assert_eq!(items.len(), 3);

    // Contract checks for UI consumers
    for it in items {
        for key in [
            "title",
            "category",
            "intro",
            "explanation",
            "impact",
            "awareness",
            "conclusion",
            "date",
            "location",
            "search_query",
        ] {
            assert!(it.get(key).is_some(), "missing '{key}'");
        }
        assert_eq!(it["category"], "Search Result");
        assert!(it["intro"].as_str().unwrap().ends_with("..."));
    }
}

#[tokio::test]
async fn api_news_blank_query_uses_default_mode() {
    let (status, body) = get_text(router_with(ScriptedClient::new()), "/api/news?q=%20%20").await;
    assert_eq!(status, StatusCode::OK);

    let v: Json = serde_json::from_str(&body).expect("parse news json");
    assert!(v["query"].is_null());
    let items = v["items"].as_array().expect("items array");
    assert_eq!(items.len(), 1);
    assert_eq!(items[0]["category"], PLACEHOLDER_CATEGORY);
}
