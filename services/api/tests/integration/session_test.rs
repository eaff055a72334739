use axum::body::Bytes;
use axum::http::StatusCode;
use serde_json::Value;

use jobboard_api::error::ApiError;
use jobboard_api::usecase::lookup::{default_user, user_by_role};
use jobboard_api::usecase::session::ResolveSessionUseCase;
use jobboard_auth_types::cookie::SESSION_COOKIE;
use jobboard_auth_types::identity::DemoIdentity;
use jobboard_domain::role::AuthRole;
use jobboard_testing::auth::{ADMIN_USER_ID, DemoAuth};

use crate::helpers::{MockUserRepo, session_cookie, test_server, test_user};

// ── ResolveSessionUseCase ────────────────────────────────────────────────────

#[tokio::test]
async fn should_fall_back_to_first_user_when_role_is_unheld() {
    let users = MockUserRepo::new(vec![
        test_user("first", AuthRole::OrgUser),
        test_user("second", AuthRole::User),
    ]);

    let user = user_by_role(&users, Some("ADMIN")).await.unwrap();
    assert_eq!(user.id, "first");

    let user = user_by_role(&users, Some("user")).await.unwrap();
    assert_eq!(user.id, "second");
}

#[tokio::test]
async fn should_fail_internally_on_empty_store() {
    let result = default_user(&MockUserRepo::empty()).await;
    assert!(matches!(result, Err(ApiError::Internal(_))));

    let usecase = ResolveSessionUseCase {
        users: MockUserRepo::empty(),
    };
    let identity = DemoIdentity {
        role: Some("ADMIN".to_owned()),
        ..Default::default()
    };
    assert!(matches!(
        usecase.execute(&identity).await,
        Err(ApiError::Internal(_))
    ));
}

#[tokio::test]
async fn should_resolve_cookie_against_custom_store() {
    let usecase = ResolveSessionUseCase {
        users: MockUserRepo::new(vec![test_user("alpha", AuthRole::Admin)]),
    };
    let identity = DemoIdentity {
        session_id: Some("sess_alpha_000000".to_owned()),
        ..Default::default()
    };
    assert_eq!(usecase.execute(&identity).await.unwrap().id, "alpha");
}

// ── GET /auth/session ────────────────────────────────────────────────────────

#[tokio::test]
async fn should_return_session_for_demo_user_header() {
    let server = test_server();
    let (name, value) = DemoAuth::admin().header();

    let resp = server.get("/auth/session").add_header(name, value).await;
    resp.assert_status_ok();

    let body: Value = resp.json();
    assert_eq!(body["user"]["id"], ADMIN_USER_ID);
    assert_eq!(body["role"], "ADMIN");
    assert_eq!(body["memberships"][0]["companyId"], "job-board");

    let session_id = body["sessionId"].as_str().unwrap();
    assert!(session_id.starts_with("sess_user-admin_"));

    let cookie = resp.cookie(SESSION_COOKIE);
    assert_eq!(cookie.value(), session_id);
    assert_eq!(cookie.path(), Some("/"));
    assert_eq!(cookie.http_only(), Some(true));
}

#[tokio::test]
async fn should_resolve_role_header_and_query_hints() {
    let server = test_server();

    let (name, value) = DemoAuth::role(AuthRole::OrgUser).header();
    let body: Value = server.get("/auth/session").add_header(name, value).await.json();
    assert_eq!(body["user"]["id"], "user-org");

    let body: Value = server
        .get("/auth/session")
        .add_query_param("userId", "user-basic")
        .await
        .json();
    assert_eq!(body["user"]["id"], "user-basic");

    let body: Value = server
        .get("/auth/session")
        .add_query_param("role", "admin")
        .await
        .json();
    assert_eq!(body["user"]["id"], "user-admin");
}

#[tokio::test]
async fn should_resolve_user_id_query_despite_repeated_role() {
    let body: Value = test_server()
        .get("/auth/session?userId=user-admin&role=a&role=b")
        .await
        .json();
    assert_eq!(body["user"]["id"], ADMIN_USER_ID);
}

#[tokio::test]
async fn should_resolve_session_cookie() {
    let server = test_server();
    let (name, value) = session_cookie("sess_user-org_abc123");

    let body: Value = server.get("/auth/session").add_header(name, value).await.json();
    assert_eq!(body["user"]["id"], "user-org");
}

#[tokio::test]
async fn should_reject_request_without_hints() {
    let resp = test_server().get("/auth/session").await;
    resp.assert_status(StatusCode::UNAUTHORIZED);

    let body: Value = resp.json();
    assert_eq!(body["kind"], "UNAUTHENTICATED");
    assert_eq!(
        body["message"],
        "Dummy session not found. Provide x-demo-user or x-demo-role header."
    );
}

#[tokio::test]
async fn should_reject_unknown_user_id() {
    let (name, value) = DemoAuth::user("user-ghost").header();
    test_server()
        .get("/auth/session")
        .add_header(name, value)
        .await
        .assert_status(StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn should_apply_ttl_query_and_ignore_unparsable() {
    let server = test_server();

    let expires_in = |body: &Value| {
        let at = chrono::DateTime::parse_from_rfc3339(body["expiresAt"].as_str().unwrap()).unwrap();
        (at.with_timezone(&chrono::Utc) - chrono::Utc::now()).num_minutes()
    };

    let (name, value) = DemoAuth::basic().header();
    let body: Value = server
        .get("/auth/session")
        .add_header(name.clone(), value.clone())
        .add_query_param("ttl", "5")
        .await
        .json();
    assert!((3..=5).contains(&expires_in(&body)));

    let body: Value = server
        .get("/auth/session")
        .add_header(name, value)
        .add_query_param("ttl", "soon")
        .await
        .json();
    assert!((58..=60).contains(&expires_in(&body)));
}

// ── POST /auth/logout ────────────────────────────────────────────────────────

#[tokio::test]
async fn should_clear_cookie_on_logout() {
    let server = test_server();
    let (name, value) = DemoAuth::basic().header();

    let resp = server.post("/auth/logout").add_header(name, value).await;
    resp.assert_status_ok();

    let body: Value = resp.json();
    assert_eq!(body["status"], "ok");
    assert_eq!(body["allDevices"], false);
    assert_eq!(body["message"], "Current dummy session cleared.");

    let cookie = resp.cookie(SESSION_COOKIE);
    assert_eq!(cookie.value(), "");
    assert!(cookie.max_age().is_some_and(|age| age.is_zero()));
}

#[tokio::test]
async fn should_report_all_devices_logout() {
    let (name, value) = DemoAuth::org_user().header();
    let body: Value = test_server()
        .post("/auth/logout")
        .add_header(name, value)
        .json(&serde_json::json!({ "allDevices": true }))
        .await
        .json();
    assert_eq!(body["allDevices"], true);
    assert_eq!(body["message"], "All dummy sessions cleared.");
}

#[tokio::test]
async fn should_reject_malformed_logout_body() {
    let (name, value) = DemoAuth::basic().header();
    let resp = test_server()
        .post("/auth/logout")
        .add_header(name, value)
        .bytes(Bytes::from_static(b"{oops"))
        .content_type("application/json")
        .await;
    resp.assert_status(StatusCode::BAD_REQUEST);
    assert_eq!(resp.json::<Value>()["kind"], "BAD_REQUEST");
}

#[tokio::test]
async fn should_ignore_non_json_logout_body() {
    let (name, value) = DemoAuth::basic().header();
    let body: Value = test_server()
        .post("/auth/logout")
        .add_header(name, value)
        .text("allDevices=true")
        .await
        .json();
    assert_eq!(body["allDevices"], false);
}

#[tokio::test]
async fn should_require_session_for_logout() {
    test_server()
        .post("/auth/logout")
        .await
        .assert_status(StatusCode::UNAUTHORIZED);
}

// ── POST /auth/token/refresh ─────────────────────────────────────────────────

#[tokio::test]
async fn should_refresh_session_cookie() {
    let (name, value) = session_cookie("sess_user-admin_aaaaaa");
    let resp = test_server()
        .post("/auth/token/refresh")
        .add_header(name, value)
        .await;
    resp.assert_status_ok();

    let body: Value = resp.json();
    let session_id = body["sessionId"].as_str().unwrap();
    assert!(session_id.starts_with("sess_user-admin_"));
    assert!(body["expiresAt"].as_str().unwrap().ends_with('Z'));
    assert_eq!(resp.cookie(SESSION_COOKIE).value(), session_id);
}
