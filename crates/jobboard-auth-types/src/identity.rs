//! Demo identity hints extractor.

use std::convert::Infallible;

use axum::extract::{FromRequestParts, Query};
use axum_extra::extract::CookieJar;
use http::request::Parts;

use crate::cookie::session_id;

/// Header naming the fixture user id to impersonate.
pub const X_DEMO_USER: &str = "x-demo-user";

/// Header naming the fixture role to impersonate.
pub const X_DEMO_ROLE: &str = "x-demo-role";

/// Raw identity hints carried by a request, before any fixture lookup.
///
/// Each field takes the header first and falls back to the query string:
/// `x-demo-user` / `?userId=`, `x-demo-role` / `?role=`. The session id comes
/// from the `sb_session` cookie. Empty values are treated as absent.
///
/// Never rejects. Deciding whether the hints identify anyone is the job of
/// the session resolver.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DemoIdentity {
    pub user_id: Option<String>,
    pub role: Option<String>,
    pub session_id: Option<String>,
}

impl DemoIdentity {
    pub fn is_empty(&self) -> bool {
        self.user_id.is_none() && self.role.is_none() && self.session_id.is_none()
    }

    /// Read hints from request parts.
    pub fn from_parts(parts: &Parts) -> Self {
        let pairs = Query::<Vec<(String, String)>>::try_from_uri(&parts.uri)
            .map(|Query(pairs)| pairs)
            .unwrap_or_default();
        // Keys are read one at a time so a repeated key cannot hide another.
        let query = |key: &str| {
            pairs
                .iter()
                .find(|(k, v)| k == key && !v.trim().is_empty())
                .map(|(_, v)| v.clone())
        };
        let header = |name: &str| {
            parts
                .headers
                .get(name)
                .and_then(|v| v.to_str().ok())
                .map(str::to_owned)
        };
        let jar = CookieJar::from_headers(&parts.headers);

        Self {
            user_id: non_empty(header(X_DEMO_USER)).or_else(|| query("userId")),
            role: non_empty(header(X_DEMO_ROLE)).or_else(|| query("role")),
            session_id: session_id(&jar),
        }
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

impl<S> FromRequestParts<S> for DemoIdentity
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    // Read synchronously and return a 'static future so the borrow of `parts`
    // does not leak into the returned future.
    fn from_request_parts(
        parts: &mut Parts,
        _state: &S,
    ) -> impl std::future::Future<Output = Result<Self, Self::Rejection>> + Send {
        let identity = Self::from_parts(parts);
        async move { Ok(identity) }
    }
}
