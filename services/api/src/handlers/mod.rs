pub mod admin;
pub mod auth;
pub mod me;
pub mod orgs;

use axum::{
    Json,
    extract::{FromRequest, Request},
};
use serde::de::DeserializeOwned;

use crate::error::ApiError;

/// Optional JSON body.
///
/// A request without a JSON `Content-Type` yields `T::default()`. A JSON body
/// that fails to parse is rejected with [`ApiError::InvalidBody`] so it renders
/// like every other service error.
#[derive(Debug)]
pub struct OptionalJson<T>(pub T);

impl<S, T> FromRequest<S> for OptionalJson<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Default + Send,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match <Option<Json<T>> as FromRequest<S>>::from_request(req, state).await {
            Ok(body) => Ok(Self(body.map(|Json(b)| b).unwrap_or_default())),
            Err(rejection) => Err(ApiError::InvalidBody(rejection.body_text())),
        }
    }
}
