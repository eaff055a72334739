//! Account roles.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Account-wide permission level.
///
/// Wire format: upper-case string (`USER`, `ORG_USER`, `ADMIN`).
/// Roles are a flat allow-list vocabulary; there is no ordering between them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AuthRole {
    User,
    OrgUser,
    Admin,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown role: {0}")]
pub struct UnknownRole(pub String);

impl AuthRole {
    pub const ALL: [AuthRole; 3] = [AuthRole::User, AuthRole::OrgUser, AuthRole::Admin];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::User => "USER",
            Self::OrgUser => "ORG_USER",
            Self::Admin => "ADMIN",
        }
    }

    /// Parse a user-supplied role hint. The hint is upper-cased first, so
    /// `admin` and `Admin` both name [`AuthRole::Admin`].
    pub fn from_hint(hint: &str) -> Option<Self> {
        hint.to_uppercase().parse().ok()
    }
}

impl fmt::Display for AuthRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Exact, case-sensitive parse of the wire value.
impl FromStr for AuthRole {
    type Err = UnknownRole;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "USER" => Ok(Self::User),
            "ORG_USER" => Ok(Self::OrgUser),
            "ADMIN" => Ok(Self::Admin),
            other => Err(UnknownRole(other.to_owned())),
        }
    }
}

/// Join roles as `ADMIN, ORG_USER` for error messages.
pub fn join_roles(roles: &[AuthRole]) -> String {
    roles
        .iter()
        .map(|r| r.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}
