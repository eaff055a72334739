use axum::response::{IntoResponse, Response};

use jobboard_core::error::AppError;
use jobboard_domain::role::{AuthRole, join_roles};

/// API service error variants.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("Dummy session not found. Provide x-demo-user or x-demo-role header.")]
    SessionNotFound,
    #[error("Session missing for dummy auth guard.")]
    SessionMissing,
    #[error("Requires one of roles: {}", join_roles(.required))]
    Forbidden { required: Vec<AuthRole> },
    #[error("Invalid or expired magic link token")]
    InvalidMagicLink,
    #[error("ttl is out of range")]
    InvalidTtl,
    #[error("invalid request body: {0}")]
    InvalidBody(String),
    #[error("internal error")]
    Internal(#[from] anyhow::Error),
}

impl From<ApiError> for AppError {
    fn from(err: ApiError) -> Self {
        let message = err.to_string();
        match err {
            ApiError::SessionNotFound | ApiError::SessionMissing | ApiError::InvalidMagicLink => {
                AppError::Unauthenticated(message)
            }
            ApiError::Forbidden { .. } => AppError::Forbidden(message),
            ApiError::InvalidTtl | ApiError::InvalidBody(_) => AppError::BadRequest(message),
            ApiError::Internal(e) => AppError::Internal(e),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        AppError::from(self).into_response()
    }
}
