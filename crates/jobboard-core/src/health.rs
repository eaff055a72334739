use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};
use serde::Serialize;

/// Body returned by `GET /readyz`.
#[derive(Debug, Serialize)]
pub struct Readiness {
    pub status: &'static str,
    pub service: &'static str,
    pub version: &'static str,
}

/// Handler for `GET /healthz`. Liveness only, no body.
pub async fn healthz() -> StatusCode {
    StatusCode::OK
}

/// Mount `/healthz` and `/readyz` for a named service.
///
/// Fixture-backed services have nothing to warm up, so readiness reports
/// `ok` as soon as the router is serving.
pub fn health_routes<S>(service: &'static str, version: &'static str) -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    Router::new().route("/healthz", get(healthz)).route(
        "/readyz",
        get(move || async move {
            Json(Readiness {
                status: "ok",
                service,
                version,
            })
        }),
    )
}
