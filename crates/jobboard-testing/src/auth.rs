//! Demo identity helpers for integration tests.
//!
//! The API picks its fixture identity from `x-demo-user` / `x-demo-role`
//! headers. `DemoAuth` builds those headers so tests read as "act as admin".

use axum::http::{HeaderName, HeaderValue};
use jobboard_auth_types::identity::{X_DEMO_ROLE, X_DEMO_USER};
use jobboard_domain::role::AuthRole;

/// Fixture ids, one per role.
pub const BASIC_USER_ID: &str = "user-basic";
pub const ORG_USER_ID: &str = "user-org";
pub const ADMIN_USER_ID: &str = "user-admin";

/// Identity hint injected into test requests.
#[derive(Debug, Clone)]
pub enum DemoAuth {
    User(String),
    Role(AuthRole),
}

impl DemoAuth {
    pub fn user(id: &str) -> Self {
        Self::User(id.to_owned())
    }

    pub fn role(role: AuthRole) -> Self {
        Self::Role(role)
    }

    pub fn admin() -> Self {
        Self::user(ADMIN_USER_ID)
    }

    pub fn org_user() -> Self {
        Self::user(ORG_USER_ID)
    }

    pub fn basic() -> Self {
        Self::user(BASIC_USER_ID)
    }

    /// The single header this identity is carried in.
    pub fn header(&self) -> (HeaderName, HeaderValue) {
        match self {
            Self::User(id) => (
                HeaderName::from_static(X_DEMO_USER),
                HeaderValue::from_str(id).unwrap(),
            ),
            Self::Role(role) => (
                HeaderName::from_static(X_DEMO_ROLE),
                HeaderValue::from_static(role.as_str()),
            ),
        }
    }
}
