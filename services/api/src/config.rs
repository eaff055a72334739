use serde::Deserialize;

use jobboard_core::config::Config;

use crate::domain::types::DEFAULT_SESSION_TTL_MINUTES;

/// API service configuration loaded from environment variables.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiConfig {
    /// TCP port to listen on (default 3000). Env var: `API_PORT`.
    #[serde(default = "default_port")]
    pub api_port: u16,
    /// Session lifetime when a request does not pass `ttl`. Env var: `SESSION_TTL_MINUTES`.
    #[serde(default = "default_session_ttl")]
    pub session_ttl_minutes: i64,
    /// `Domain` attribute of the session cookie. Env var: `COOKIE_DOMAIN`.
    #[serde(default)]
    pub cookie_domain: Option<String>,
    /// Mark the session cookie `Secure`. Env var: `COOKIE_SECURE`.
    #[serde(default)]
    pub cookie_secure: bool,
    /// Return `devToken` and `previewUrl` from magic-link requests. Env var: `EXPOSE_DEV_TOKEN`.
    #[serde(default = "default_expose_dev_token")]
    pub expose_dev_token: bool,
}

fn default_port() -> u16 {
    3000
}

fn default_session_ttl() -> i64 {
    DEFAULT_SESSION_TTL_MINUTES
}

fn default_expose_dev_token() -> bool {
    true
}

impl Config for ApiConfig {}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            api_port: default_port(),
            session_ttl_minutes: default_session_ttl(),
            cookie_domain: None,
            cookie_secure: false,
            expose_dev_token: default_expose_dev_token(),
        }
    }
}
