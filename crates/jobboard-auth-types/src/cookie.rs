//! Cookie builders for the session cookie.
//!
//! The cookie value is an opaque session id. Nothing server-side records it,
//! so clearing the cookie is the whole of "logout".

use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use time::Duration;

/// Cookie name for the session id.
pub const SESSION_COOKIE: &str = "sb_session";

/// Deployment-specific cookie attributes.
#[derive(Debug, Clone, Default)]
pub struct CookieSettings {
    /// `Domain` attribute. Host-only cookie when `None`.
    pub domain: Option<String>,
    /// Emit the `Secure` attribute.
    pub secure: bool,
}

fn base_cookie(value: String, settings: &CookieSettings) -> Cookie<'static> {
    let mut cookie = Cookie::build((SESSION_COOKIE, value))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .build();
    if settings.secure {
        cookie.set_secure(true);
    }
    if let Some(domain) = settings.domain.clone() {
        cookie.set_domain(domain);
    }
    cookie
}

/// Set the session cookie on the jar.
///
/// ```
/// use axum_extra::extract::cookie::{CookieJar, SameSite};
/// use jobboard_auth_types::cookie::{set_session_cookie, CookieSettings, SESSION_COOKIE};
///
/// let jar = set_session_cookie(CookieJar::new(), "sess_user-basic_abc123".to_string(), &CookieSettings::default());
/// let cookie = jar.get(SESSION_COOKIE).unwrap();
/// assert_eq!(cookie.value(), "sess_user-basic_abc123");
/// assert_eq!(cookie.path(), Some("/"));
/// assert_eq!(cookie.same_site(), Some(SameSite::Lax));
/// assert!(cookie.http_only().unwrap_or(false));
/// assert_eq!(cookie.domain(), None);
/// ```
pub fn set_session_cookie(jar: CookieJar, session_id: String, settings: &CookieSettings) -> CookieJar {
    jar.add(base_cookie(session_id, settings))
}

/// Clear the session cookie by setting an empty value with Max-Age 0.
///
/// ```
/// use axum_extra::extract::cookie::CookieJar;
/// use jobboard_auth_types::cookie::{clear_session_cookie, set_session_cookie, CookieSettings, SESSION_COOKIE};
///
/// let settings = CookieSettings { domain: Some("jobboard.io".to_string()), secure: true };
/// let jar = set_session_cookie(CookieJar::new(), "sess_x_1".to_string(), &settings);
/// let jar = clear_session_cookie(jar, &settings);
/// let cookie = jar.get(SESSION_COOKIE).unwrap();
/// assert_eq!(cookie.value(), "");
/// assert_eq!(cookie.max_age(), Some(time::Duration::ZERO));
/// assert_eq!(cookie.domain(), Some("jobboard.io"));
/// assert!(cookie.secure().unwrap_or(false));
/// ```
pub fn clear_session_cookie(jar: CookieJar, settings: &CookieSettings) -> CookieJar {
    let mut cookie = base_cookie(String::new(), settings);
    cookie.set_max_age(Duration::ZERO);
    jar.add(cookie)
}

/// Read the session id from the jar. Empty values count as absent.
pub fn session_id(jar: &CookieJar) -> Option<String> {
    jar.get(SESSION_COOKIE)
        .map(|c| c.value().to_owned())
        .filter(|v| !v.is_empty())
}
