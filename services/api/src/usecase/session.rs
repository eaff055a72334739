use chrono::{DateTime, TimeDelta, Utc};

use jobboard_auth_types::identity::DemoIdentity;
use jobboard_auth_types::token::{new_session_id, session_id_user_id};
use jobboard_domain::user::User;

use crate::domain::repository::UserRepository;
use crate::domain::types::SessionPayload;
use crate::error::ApiError;
use crate::usecase::lookup::{user_by_id, user_by_role};

/// `now + ttl_minutes`, rejecting values chrono cannot represent.
pub fn expiry_after(now: DateTime<Utc>, ttl_minutes: i64) -> Result<DateTime<Utc>, ApiError> {
    TimeDelta::try_minutes(ttl_minutes)
        .and_then(|delta| now.checked_add_signed(delta))
        .ok_or(ApiError::InvalidTtl)
}

/// Build a fresh session for `user`. Zero or negative TTLs are allowed and
/// yield an already-expired payload.
pub fn build_session(
    user: User,
    ttl_minutes: i64,
    now: DateTime<Utc>,
) -> Result<SessionPayload, ApiError> {
    let expires_at = expiry_after(now, ttl_minutes)?;
    Ok(SessionPayload {
        session_id: new_session_id(&user.id),
        role: user.role,
        memberships: user.memberships.clone(),
        user,
        expires_at,
    })
}

// ── ResolveSession ───────────────────────────────────────────────────────────

/// Maps request hints to a user.
///
/// Precedence: explicit user id, then role hint, then session cookie. An
/// unknown id or cookie fails; an unknown role falls back to the default user.
pub struct ResolveSessionUseCase<R: UserRepository> {
    pub users: R,
}

impl<R: UserRepository> ResolveSessionUseCase<R> {
    pub async fn execute(&self, identity: &DemoIdentity) -> Result<User, ApiError> {
        if let Some(id) = identity.user_id.as_deref() {
            return user_by_id(&self.users, Some(id))
                .await?
                .ok_or_else(|| {
                    tracing::debug!(user_id = %id, "demo user id matched no fixture");
                    ApiError::SessionNotFound
                });
        }

        if let Some(role) = identity.role.as_deref() {
            return user_by_role(&self.users, Some(role)).await;
        }

        if let Some(session_id) = identity.session_id.as_deref() {
            let user_id = session_id_user_id(session_id);
            return user_by_id(&self.users, user_id)
                .await?
                .ok_or_else(|| {
                    tracing::debug!("session cookie matched no fixture");
                    ApiError::SessionNotFound
                });
        }

        Err(ApiError::SessionNotFound)
    }
}
