use jobboard_domain::role::AuthRole;

use crate::domain::repository::UserRepository;
use crate::domain::types::UserSummary;
use crate::error::ApiError;

/// Lists fixture users, optionally filtered by role.
///
/// The filter is upper-cased before comparison. An empty filter lists
/// everyone; a filter naming no known role lists no one.
pub struct ListUsersUseCase<R: UserRepository> {
    pub users: R,
}

impl<R: UserRepository> ListUsersUseCase<R> {
    pub async fn execute(&self, role: Option<&str>) -> Result<Vec<UserSummary>, ApiError> {
        let filter = role.map(str::trim).filter(|r| !r.is_empty());
        let all = self.users.list().await?;

        let items = match filter {
            None => all.iter().map(UserSummary::from).collect(),
            Some(hint) => match AuthRole::from_hint(hint) {
                Some(role) => all
                    .iter()
                    .filter(|u| u.role == role)
                    .map(UserSummary::from)
                    .collect(),
                None => Vec::new(),
            },
        };
        Ok(items)
    }
}
