use axum::http::StatusCode;
use serde_json::{Value, json};

use jobboard_testing::auth::DemoAuth;
use jobboard_testing::fixture::Fixture;

use crate::helpers::test_server;

// ── GET /orgs/memberships ────────────────────────────────────────────────────

#[tokio::test]
async fn should_list_org_user_memberships() {
    let (name, value) = DemoAuth::org_user().header();
    let resp = test_server()
        .get("/orgs/memberships")
        .add_header(name, value)
        .await;
    resp.assert_status_ok();

    Fixture::assert_matches(&resp.json::<Value>(), "contracts/http/orgs/memberships.json");
}

#[tokio::test]
async fn should_list_admin_memberships() {
    let (name, value) = DemoAuth::admin().header();
    let body: Value = test_server()
        .get("/orgs/memberships")
        .add_header(name, value)
        .await
        .json();
    assert_eq!(
        body["memberships"],
        json!([{ "companyId": "job-board", "companyName": "Job Board HQ", "orgRole": "ADMIN" }])
    );
}

#[tokio::test]
async fn should_forbid_basic_user() {
    let (name, value) = DemoAuth::basic().header();
    let resp = test_server()
        .get("/orgs/memberships")
        .add_header(name, value)
        .await;
    resp.assert_status(StatusCode::FORBIDDEN);
    assert_eq!(
        resp.json::<Value>()["message"],
        "Requires one of roles: ORG_USER, ADMIN"
    );
}
