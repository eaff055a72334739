//! Fixture lookups with the demo fallback rules.

use jobboard_domain::role::AuthRole;
use jobboard_domain::user::User;

use crate::domain::repository::UserRepository;
use crate::error::ApiError;

/// First user in the store. An empty store is a configuration error.
pub async fn default_user<R: UserRepository>(users: &R) -> Result<User, ApiError> {
    users
        .first()
        .await?
        .ok_or_else(|| ApiError::Internal(anyhow::anyhow!("user store is empty")))
}

/// Exact id match. An absent or empty id finds nobody.
pub async fn user_by_id<R: UserRepository>(
    users: &R,
    id: Option<&str>,
) -> Result<Option<User>, ApiError> {
    match id {
        Some(id) if !id.is_empty() => users.find_by_id(id).await,
        _ => Ok(None),
    }
}

/// Role hint match, upper-casing the hint first. Falls back to the default
/// user when the hint is absent, unknown, or no user holds the role.
pub async fn user_by_role<R: UserRepository>(
    users: &R,
    hint: Option<&str>,
) -> Result<User, ApiError> {
    let role = hint.filter(|h| !h.is_empty()).and_then(AuthRole::from_hint);
    if let Some(role) = role {
        if let Some(user) = users.find_by_role(role).await? {
            return Ok(user);
        }
    }
    default_user(users).await
}

/// Trimmed, case-insensitive email match.
pub async fn user_by_email<R: UserRepository>(
    users: &R,
    email: Option<&str>,
) -> Result<Option<User>, ApiError> {
    let normalized = match email {
        Some(e) if !e.trim().is_empty() => e.trim().to_lowercase(),
        _ => return Ok(None),
    };
    users.find_by_email(&normalized).await
}
