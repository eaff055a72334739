use chrono::{DateTime, Utc};
use serde::Serialize;

use jobboard_domain::role::AuthRole;
use jobboard_domain::user::{Membership, User};

/// Session lifetime when neither the request nor config says otherwise.
pub const DEFAULT_SESSION_TTL_MINUTES: i64 = 60;

/// Session handed to the client. Never stored server-side; the cookie holding
/// `session_id` is the only record of it.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionPayload {
    pub user: User,
    pub role: AuthRole,
    pub memberships: Vec<Membership>,
    pub session_id: String,
    #[serde(serialize_with = "jobboard_core::serde::to_rfc3339_ms")]
    pub expires_at: DateTime<Utc>,
}

/// A freshly issued magic-link token.
///
/// `expires_at` is informational only: consumption does not check it.
#[derive(Debug, Clone)]
pub struct MagicTokenGrant {
    pub token: String,
    pub expires_at: DateTime<Utc>,
}

/// Row of the admin user listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UserSummary {
    pub id: String,
    pub email: String,
    pub name: String,
    pub role: AuthRole,
    pub memberships: Vec<Membership>,
}

impl From<&User> for UserSummary {
    fn from(user: &User) -> Self {
        Self {
            id: user.id.to_string(),
            email: user.email.clone(),
            name: user.display_name(),
            role: user.role,
            memberships: user.memberships.clone(),
        }
    }
}
