#![allow(dead_code)]

use axum::http::{HeaderName, HeaderValue, header};
use axum_test::TestServer;

use jobboard_api::config::ApiConfig;
use jobboard_api::domain::repository::UserRepository;
use jobboard_api::error::ApiError;
use jobboard_api::infra::fixture::FixtureUserRepository;
use jobboard_api::router::build_router;
use jobboard_api::state::AppState;
use jobboard_auth_types::cookie::SESSION_COOKIE;
use jobboard_domain::id::UserId;
use jobboard_domain::role::AuthRole;
use jobboard_domain::user::User;

// ── MockUserRepo ─────────────────────────────────────────────────────────────

pub struct MockUserRepo {
    pub users: Vec<User>,
}

impl MockUserRepo {
    pub fn new(users: Vec<User>) -> Self {
        Self { users }
    }

    pub fn empty() -> Self {
        Self { users: vec![] }
    }
}

impl UserRepository for MockUserRepo {
    async fn list(&self) -> Result<Vec<User>, ApiError> {
        Ok(self.users.clone())
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<User>, ApiError> {
        Ok(self.users.iter().find(|u| u.id == id).cloned())
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, ApiError> {
        Ok(self.users.iter().find(|u| u.has_email(email)).cloned())
    }

    async fn find_by_role(&self, role: AuthRole) -> Result<Option<User>, ApiError> {
        Ok(self.users.iter().find(|u| u.role == role).cloned())
    }

    async fn first(&self) -> Result<Option<User>, ApiError> {
        Ok(self.users.first().cloned())
    }
}

// ── Test fixture helpers ─────────────────────────────────────────────────────

pub fn test_user(id: &str, role: AuthRole) -> User {
    User {
        id: UserId::from(id),
        email: format!("{id}@example.com"),
        first_name: "Test".to_owned(),
        last_name: id.to_owned(),
        avatar_url: None,
        role,
        memberships: vec![],
    }
}

pub fn test_server_with(config: ApiConfig) -> TestServer {
    let state = AppState::new(&config, FixtureUserRepository::seeded());
    TestServer::new(build_router(state)).unwrap()
}

pub fn test_server() -> TestServer {
    test_server_with(ApiConfig::default())
}

/// `Cookie` request header carrying a session id.
pub fn session_cookie(session_id: &str) -> (HeaderName, HeaderValue) {
    (
        header::COOKIE,
        HeaderValue::from_str(&format!("{SESSION_COOKIE}={session_id}")).unwrap(),
    )
}
