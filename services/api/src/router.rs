use axum::{
    Router,
    middleware::from_fn_with_state,
    routing::{get, post},
};

use jobboard_core::error::AppError;
use jobboard_core::health::health_routes;
use jobboard_core::middleware::{propagate_request_id_layer, request_id_layer, trace_layer};
use jobboard_domain::role::AuthRole;

use crate::guard::{
    ADMIN_ONLY, ANY_ROLE, ORG_MEMBERS, RequiredRoles, require_roles, require_session,
};
use crate::handlers::{
    admin::list_users,
    auth::{
        consume_magic_link, get_session, list_providers, logout, refresh_token,
        request_magic_link,
    },
    me::me,
    orgs::list_memberships,
};
use crate::state::AppState;

pub const SERVICE_NAME: &str = "jobboard-api";

pub fn build_router(state: AppState) -> Router {
    let session = from_fn_with_state(state.clone(), require_session);
    let roles =
        |required: &'static [AuthRole]| from_fn_with_state(RequiredRoles(required), require_roles);

    let auth = Router::new()
        // Public
        .route("/providers", get(list_providers))
        .route("/magic-link/request", post(request_magic_link))
        .route("/magic-link/consume", post(consume_magic_link))
        // Session only
        .merge(
            Router::new()
                .route("/session", get(get_session))
                .route_layer(session.clone()),
        )
        // Session + any role
        .merge(
            Router::new()
                .route("/logout", post(logout))
                .route("/token/refresh", post(refresh_token))
                .route_layer(roles(ANY_ROLE))
                .route_layer(session.clone()),
        );

    let admin = Router::new()
        .route("/users", get(list_users))
        .route_layer(roles(ADMIN_ONLY))
        .route_layer(session.clone());

    let orgs = Router::new()
        .route("/memberships", get(list_memberships))
        .route_layer(roles(ORG_MEMBERS))
        .route_layer(session);

    Router::new()
        .merge(health_routes(SERVICE_NAME, env!("CARGO_PKG_VERSION")))
        .nest("/auth", auth)
        .nest("/admin", admin)
        .nest("/orgs", orgs)
        .route("/v1/me", get(me).post(me))
        .fallback(|| async { AppError::NotFound })
        .with_state(state)
        .layer(propagate_request_id_layer())
        .layer(trace_layer())
        .layer(request_id_layer())
}
