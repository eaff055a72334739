//! User domain types.

use serde::{Deserialize, Serialize};

use crate::id::UserId;
use crate::role::AuthRole;

/// Membership of a user in a company. Owned by exactly one [`User`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Membership {
    pub company_id: String,
    pub company_name: String,
    /// Org-scoped role. Free-form (`OWNER`, `EDITOR`, ...), unrelated to [`AuthRole`].
    pub org_role: String,
}

/// A user account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: UserId,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar_url: Option<String>,
    pub role: AuthRole,
    pub memberships: Vec<Membership>,
}

impl User {
    /// `"<first> <last>"`.
    pub fn display_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// Case-insensitive email comparison against an already-normalized address.
    pub fn has_email(&self, normalized: &str) -> bool {
        self.email.to_lowercase() == normalized
    }
}
