#![allow(async_fn_in_trait)]

use jobboard_domain::role::AuthRole;
use jobboard_domain::user::User;

use crate::error::ApiError;

/// Read-only access to user records.
///
/// Order matters: the first record is the default identity.
pub trait UserRepository: Send + Sync {
    /// All users in store order.
    async fn list(&self) -> Result<Vec<User>, ApiError>;

    async fn find_by_id(&self, id: &str) -> Result<Option<User>, ApiError>;

    /// `email` must already be trimmed and lower-cased.
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, ApiError>;

    /// First user holding `role`.
    async fn find_by_role(&self, role: AuthRole) -> Result<Option<User>, ApiError>;

    /// First user in store order.
    async fn first(&self) -> Result<Option<User>, ApiError>;
}
