use chrono::{DateTime, Utc};

use jobboard_auth_types::token::{magic_token_user_id, new_magic_token};
use jobboard_domain::user::User;

use crate::domain::repository::UserRepository;
use crate::domain::types::{MagicTokenGrant, SessionPayload};
use crate::error::ApiError;
use crate::usecase::lookup::{default_user, user_by_email, user_by_id};
use crate::usecase::session::{build_session, expiry_after};

// ── RequestMagicLink ─────────────────────────────────────────────────────────

/// Issues a dev magic-link token. Nothing is sent; the token is returned to
/// the caller. Unknown or missing emails get the default user's token.
pub struct RequestMagicLinkUseCase<R: UserRepository> {
    pub users: R,
    pub ttl_minutes: i64,
}

impl<R: UserRepository> RequestMagicLinkUseCase<R> {
    pub async fn execute(
        &self,
        email: Option<&str>,
        now: DateTime<Utc>,
    ) -> Result<(User, MagicTokenGrant), ApiError> {
        let user = match user_by_email(&self.users, email).await? {
            Some(user) => user,
            None => default_user(&self.users).await?,
        };
        let grant = MagicTokenGrant {
            token: new_magic_token(&user.id),
            expires_at: expiry_after(now, self.ttl_minutes)?,
        };

        tracing::info!(user_id = %user.id, "issued dev magic link");
        Ok((user, grant))
    }
}

// ── ConsumeMagicLink ─────────────────────────────────────────────────────────

/// Exchanges a magic-link token for a session.
///
/// Tokens are stateless: any well-formed token naming a known user is
/// accepted, however old.
pub struct ConsumeMagicLinkUseCase<R: UserRepository> {
    pub users: R,
    pub default_ttl_minutes: i64,
}

impl<R: UserRepository> ConsumeMagicLinkUseCase<R> {
    pub async fn execute(
        &self,
        token: Option<&str>,
        ttl_minutes: Option<i64>,
        now: DateTime<Utc>,
    ) -> Result<SessionPayload, ApiError> {
        let user_id = token.and_then(magic_token_user_id);
        let user = user_by_id(&self.users, user_id)
            .await?
            .ok_or(ApiError::InvalidMagicLink)?;

        let payload = build_session(user, ttl_minutes.unwrap_or(self.default_ttl_minutes), now)?;
        tracing::info!(user_id = %payload.user.id, "magic link consumed");
        Ok(payload)
    }
}
