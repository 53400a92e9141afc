//! Route-level tests against a dead upstream: every listing route must
//! still answer 200 with fallback data, by-slug misses must 404.

use agenthub_catalog::RemoteClient;
use agenthub_server::{AppState, build_router};
use axum::Router;
use axum::body::{Body, to_bytes};
use axum::http::{Request, StatusCode, header};
use serde_json::Value;
use tower::ServiceExt;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Router wired against a port nothing listens on.
fn fallback_router() -> Router {
    let state = AppState::new(RemoteClient::new("http://127.0.0.1:1/api/v1"));
    build_router(state)
}

async fn get_json(router: Router, uri: &str) -> (StatusCode, Value) {
    let response = router
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body: Value = serde_json::from_slice(&bytes).unwrap();
    (status, body)
}

#[tokio::test]
async fn health_answers_ok() {
    let (status, body) = get_json(fallback_router(), "/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "agenthub is working!");
}

#[tokio::test]
async fn agent_listing_survives_dead_upstream() {
    let (status, body) = get_json(fallback_router(), "/api/agents").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "success");
    assert_eq!(body["source"], "fallback");
    assert!(!body["data"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn agent_listing_applies_query_filters_on_fallback() {
    let (status, body) = get_json(
        fallback_router(),
        "/api/agents?category=data%20analysis&featured=true",
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    let slugs: Vec<&str> = body["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|a| a["slug"].as_str().unwrap())
        .collect();
    assert_eq!(slugs, vec!["data-analyzer"]);
}

#[tokio::test]
async fn agent_detail_falls_back_to_fixture() {
    let (status, body) = get_json(fallback_router(), "/api/agents/data-analyzer").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["source"], "fallback");
    assert_eq!(body["data"]["name"], "Data Analyzer");
}

#[tokio::test]
async fn unknown_agent_slug_is_a_real_404() {
    let (status, body) = get_json(fallback_router(), "/api/agents/does-not-exist").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"]["code"], 404);
}

#[tokio::test]
async fn remote_404_maps_through_fixtures_at_the_route() {
    // A healthy upstream that simply does not know the slug: the
    // route must check the fixtures before giving up.
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/agent/data-analyzer"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/agent/missing-everywhere"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let router = build_router(AppState::new(RemoteClient::new(&server.uri())));

    let (status, body) = get_json(router.clone(), "/api/agents/data-analyzer").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["source"], "fallback");
    assert_eq!(body["data"]["name"], "Data Analyzer");

    // Absent from both sources: only now is the 404 real.
    let (status, body) = get_json(router, "/api/agents/missing-everywhere").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"]["code"], 404);
}

#[tokio::test]
async fn related_agents_exclude_source_and_cap_at_three() {
    let (status, body) =
        get_json(fallback_router(), "/api/agents/data-analyzer/related").await;

    assert_eq!(status, StatusCode::OK);
    let items = body["data"].as_array().unwrap();
    assert!(items.len() <= 3);
    assert!(items.iter().all(|a| a["id"] != "data-analyzer"));
}

#[tokio::test]
async fn chatflow_ids_filter_returns_both_records() {
    let (status, body) =
        get_json(fallback_router(), "/api/chatflows?ids=chatflow2,chatflow1").await;

    assert_eq!(status, StatusCode::OK);
    let ids: Vec<&str> = body["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|c| c["id"].as_str().unwrap())
        .collect();
    assert_eq!(ids, vec!["chatflow1", "chatflow2"]);
}

#[tokio::test]
async fn onboarding_answers_200_with_local_ack() {
    let request = Request::builder()
        .method("POST")
        .uri("/api/onboarduser")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(
            serde_json::json!({
                "name": "Ada",
                "email": "ada@example.com",
                "agentIds": ["data-analyzer"]
            })
            .to_string(),
        ))
        .unwrap();

    let response = fallback_router().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body: Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(body["status"], "success");
    assert_eq!(body["source"], "fallback");
    assert!(!body["data"]["id"].as_str().unwrap().is_empty());
}

#[tokio::test]
async fn onboarding_rejects_missing_email() {
    let request = Request::builder()
        .method("POST")
        .uri("/api/onboarduser")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(
            serde_json::json!({ "name": "Ada", "email": "" }).to_string(),
        ))
        .unwrap();

    let response = fallback_router().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}
