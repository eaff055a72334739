//! Session and role guards.
//!
//! `require_session` resolves the caller and stores a [`SessionUser`] in the
//! request extensions; `require_roles` reads it back. Route groups mount both,
//! session outermost.

use axum::extract::{FromRequestParts, Request, State};
use axum::http::request::Parts;
use axum::middleware::Next;
use axum::response::Response;

use jobboard_auth_types::identity::DemoIdentity;
use jobboard_domain::role::AuthRole;
use jobboard_domain::user::User;

use crate::error::ApiError;
use crate::state::AppState;
use crate::usecase::session::ResolveSessionUseCase;

pub const ANY_ROLE: &[AuthRole] = &[];
pub const ADMIN_ONLY: &[AuthRole] = &[AuthRole::Admin];
pub const ORG_MEMBERS: &[AuthRole] = &[AuthRole::OrgUser, AuthRole::Admin];

/// The resolved caller of a guarded route.
#[derive(Debug, Clone)]
pub struct SessionUser(pub User);

impl<S> FromRequestParts<S> for SessionUser
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    fn from_request_parts(
        parts: &mut Parts,
        _state: &S,
    ) -> impl std::future::Future<Output = Result<Self, Self::Rejection>> + Send {
        let user = parts.extensions.get::<SessionUser>().cloned();
        async move { user.ok_or(ApiError::SessionMissing) }
    }
}

/// Roles allowed through [`require_roles`]. Empty allows any session.
#[derive(Debug, Clone, Copy)]
pub struct RequiredRoles(pub &'static [AuthRole]);

/// Pass when `required` is empty or contains the user's role.
pub fn check_roles(required: &[AuthRole], user: Option<&User>) -> Result<(), ApiError> {
    let user = user.ok_or(ApiError::SessionMissing)?;
    if required.is_empty() || required.contains(&user.role) {
        Ok(())
    } else {
        Err(ApiError::Forbidden {
            required: required.to_vec(),
        })
    }
}

pub async fn require_session(
    State(state): State<AppState>,
    identity: DemoIdentity,
    mut req: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let user = ResolveSessionUseCase {
        users: state.user_repo(),
    }
    .execute(&identity)
    .await?;

    tracing::debug!(user_id = %user.id, role = %user.role, "session resolved");
    req.extensions_mut().insert(SessionUser(user));
    Ok(next.run(req).await)
}

pub async fn require_roles(
    State(RequiredRoles(required)): State<RequiredRoles>,
    req: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let user = req.extensions().get::<SessionUser>().map(|s| &s.0);
    if let Err(err) = check_roles(required, user) {
        tracing::info!(path = %req.uri().path(), error = %err, "role guard rejected request");
        return Err(err);
    }
    Ok(next.run(req).await)
}
