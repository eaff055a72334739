use axum::{Json, extract::State};
use serde::Serialize;

use jobboard_domain::user::Membership;

use crate::error::ApiError;
use crate::guard::SessionUser;
use crate::state::AppState;
use crate::usecase::orgs::GetMembershipsUseCase;

// ── GET /orgs/memberships ─────────────────────────────────────────────────────

#[derive(Serialize)]
pub struct MembershipsResponse {
    pub memberships: Vec<Membership>,
}

pub async fn list_memberships(
    State(state): State<AppState>,
    SessionUser(user): SessionUser,
) -> Result<Json<MembershipsResponse>, ApiError> {
    let memberships = GetMembershipsUseCase {
        users: state.user_repo(),
    }
    .execute(user.id.as_str())
    .await?;

    Ok(Json(MembershipsResponse { memberships }))
}
