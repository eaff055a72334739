use jobboard_auth_types::cookie::CookieSettings;
use jobboard_domain::provider::LoginProvider;

use crate::config::ApiConfig;
use crate::infra::fixture::{FixtureUserRepository, LOGIN_PROVIDERS};

/// Shared application state passed to every handler via axum `State`.
#[derive(Clone)]
pub struct AppState {
    pub users: FixtureUserRepository,
    pub session_ttl_minutes: i64,
    pub cookies: CookieSettings,
    pub expose_dev_token: bool,
}

impl AppState {
    pub fn new(config: &ApiConfig, users: FixtureUserRepository) -> Self {
        Self {
            users,
            session_ttl_minutes: config.session_ttl_minutes,
            cookies: CookieSettings {
                domain: config.cookie_domain.clone(),
                secure: config.cookie_secure,
            },
            expose_dev_token: config.expose_dev_token,
        }
    }

    pub fn user_repo(&self) -> FixtureUserRepository {
        self.users.clone()
    }

    pub fn login_providers(&self) -> &'static [LoginProvider] {
        &LOGIN_PROVIDERS
    }
}
