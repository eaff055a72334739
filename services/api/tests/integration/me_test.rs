use axum::http::{HeaderName, HeaderValue};
use serde_json::{Value, json};

use crate::helpers::test_server;

// ── /v1/me ───────────────────────────────────────────────────────────────────

#[tokio::test]
async fn should_echo_get_request() {
    let resp = test_server()
        .get("/v1/me")
        .add_query_param("name", "ada")
        .add_query_param("tag", "a")
        .add_query_param("tag", "b")
        .add_header(
            HeaderName::from_static("x-trace"),
            HeaderValue::from_static("t1"),
        )
        .await;
    resp.assert_status_ok();

    let body: Value = resp.json();
    assert_eq!(body["name"], "ada");
    assert_eq!(body["request"]["method"], "GET");
    assert_eq!(body["request"]["path"], "/v1/me");
    assert_eq!(body["request"]["query"], json!({ "name": "ada", "tag": ["a", "b"] }));
    assert_eq!(body["request"]["headers"]["x-trace"], "t1");
    assert_eq!(body["request"]["body"], Value::Null);
    assert!(body["request"]["url"].as_str().unwrap().contains("name=ada"));
}

#[tokio::test]
async fn should_echo_post_body_without_name() {
    let body: Value = test_server()
        .post("/v1/me")
        .json(&json!({ "hello": "world" }))
        .await
        .json();
    assert_eq!(body["name"], Value::Null);
    assert_eq!(body["request"]["method"], "POST");
    assert_eq!(body["request"]["body"], json!({ "hello": "world" }));
}

#[tokio::test]
async fn should_not_require_session() {
    test_server().get("/v1/me").await.assert_status_ok();
}

#[tokio::test]
async fn should_serve_health_and_request_id() {
    let server = test_server();
    server.get("/healthz").await.assert_status_ok();

    let resp = server.get("/readyz").await;
    resp.assert_status_ok();
    assert_eq!(resp.json::<Value>()["service"], "jobboard-api");
    assert!(!resp.header("x-request-id").is_empty());
}

#[tokio::test]
async fn should_render_unknown_routes_as_json_not_found() {
    let resp = test_server().get("/nowhere").await;
    resp.assert_status_not_found();
    assert_eq!(resp.json::<Value>()["kind"], "NOT_FOUND");
}
