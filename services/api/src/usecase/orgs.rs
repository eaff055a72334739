use jobboard_domain::user::Membership;

use crate::domain::repository::UserRepository;
use crate::error::ApiError;
use crate::usecase::lookup::user_by_id;

/// Company memberships of a user. Unknown users have none.
pub struct GetMembershipsUseCase<R: UserRepository> {
    pub users: R,
}

impl<R: UserRepository> GetMembershipsUseCase<R> {
    pub async fn execute(&self, user_id: &str) -> Result<Vec<Membership>, ApiError> {
        Ok(user_by_id(&self.users, Some(user_id))
            .await?
            .map(|u| u.memberships)
            .unwrap_or_default())
    }
}
