use axum::{
    Json,
    extract::{Query, State},
};
use serde::{Deserialize, Serialize};

use crate::domain::types::UserSummary;
use crate::error::ApiError;
use crate::state::AppState;
use crate::usecase::admin::ListUsersUseCase;

// ── GET /admin/users ──────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct ListUsersQuery {
    pub role: Option<String>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PageInfo {
    pub total: usize,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ListUsersResponse {
    pub items: Vec<UserSummary>,
    pub page_info: PageInfo,
}

pub async fn list_users(
    State(state): State<AppState>,
    Query(query): Query<ListUsersQuery>,
) -> Result<Json<ListUsersResponse>, ApiError> {
    let items = ListUsersUseCase {
        users: state.user_repo(),
    }
    .execute(query.role.as_deref())
    .await?;

    let total = items.len();
    Ok(Json(ListUsersResponse {
        items,
        page_info: PageInfo { total },
    }))
}
