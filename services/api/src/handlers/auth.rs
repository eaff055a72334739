use axum::{
    Json,
    extract::{Query, State},
    response::IntoResponse,
};
use axum_extra::extract::CookieJar;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use jobboard_auth_types::cookie::{clear_session_cookie, set_session_cookie};
use jobboard_core::serde::{lenient_minutes, parse_minutes, to_rfc3339_ms};
use jobboard_domain::provider::LoginProvider;
use jobboard_domain::role::AuthRole;

use crate::domain::types::SessionPayload;
use crate::error::ApiError;
use crate::guard::SessionUser;
use crate::handlers::OptionalJson;
use crate::state::AppState;
use crate::usecase::magic_link::{ConsumeMagicLinkUseCase, RequestMagicLinkUseCase};
use crate::usecase::session::build_session;

const DEFAULT_REDIRECT: &str = "/dashboard";

// ── GET /auth/providers ───────────────────────────────────────────────────────

#[derive(Serialize)]
pub struct ProvidersResponse {
    pub providers: &'static [LoginProvider],
}

pub async fn list_providers(State(state): State<AppState>) -> Json<ProvidersResponse> {
    Json(ProvidersResponse {
        providers: state.login_providers(),
    })
}

// ── POST /auth/magic-link/request ─────────────────────────────────────────────

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MagicLinkRequestBody {
    pub email: Option<String>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MagicLinkUser {
    pub id: String,
    pub email: String,
    pub role: AuthRole,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MagicLinkRequestResponse {
    pub status: &'static str,
    #[serde(serialize_with = "to_rfc3339_ms")]
    pub expires_at: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dev_token: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub preview_url: Option<String>,
    pub user: MagicLinkUser,
}

pub async fn request_magic_link(
    State(state): State<AppState>,
    OptionalJson(body): OptionalJson<MagicLinkRequestBody>,
) -> Result<Json<MagicLinkRequestResponse>, ApiError> {
    let (user, grant) = RequestMagicLinkUseCase {
        users: state.user_repo(),
        ttl_minutes: state.session_ttl_minutes,
    }
    .execute(body.email.as_deref(), Utc::now())
    .await?;

    let (dev_token, preview_url) = if state.expose_dev_token {
        let preview = format!("/login?token={}", grant.token);
        (Some(grant.token), Some(preview))
    } else {
        (None, None)
    };

    Ok(Json(MagicLinkRequestResponse {
        status: "queued",
        expires_at: grant.expires_at,
        dev_token,
        preview_url,
        user: MagicLinkUser {
            id: user.id.to_string(),
            email: user.email,
            role: user.role,
        },
    }))
}

// ── POST /auth/magic-link/consume ─────────────────────────────────────────────

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConsumeMagicLinkBody {
    pub token: Option<String>,
    #[serde(default, deserialize_with = "lenient_minutes")]
    pub ttl: Option<i64>,
    pub redirect_url: Option<String>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConsumeMagicLinkResponse {
    pub session: SessionPayload,
    pub redirect_url: String,
}

pub async fn consume_magic_link(
    State(state): State<AppState>,
    jar: CookieJar,
    OptionalJson(body): OptionalJson<ConsumeMagicLinkBody>,
) -> Result<impl IntoResponse, ApiError> {
    let session = ConsumeMagicLinkUseCase {
        users: state.user_repo(),
        default_ttl_minutes: state.session_ttl_minutes,
    }
    .execute(body.token.as_deref(), body.ttl, Utc::now())
    .await?;

    let jar = set_session_cookie(jar, session.session_id.clone(), &state.cookies);
    let redirect_url = body
        .redirect_url
        .filter(|url| !url.is_empty())
        .unwrap_or_else(|| DEFAULT_REDIRECT.to_owned());

    Ok((
        jar,
        Json(ConsumeMagicLinkResponse {
            session,
            redirect_url,
        }),
    ))
}

// ── GET /auth/session ─────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct SessionQuery {
    pub ttl: Option<String>,
}

pub async fn get_session(
    State(state): State<AppState>,
    SessionUser(user): SessionUser,
    jar: CookieJar,
    Query(query): Query<SessionQuery>,
) -> Result<impl IntoResponse, ApiError> {
    let ttl = query
        .ttl
        .as_deref()
        .and_then(parse_minutes)
        .unwrap_or(state.session_ttl_minutes);

    let session = build_session(user, ttl, Utc::now())?;
    let jar = set_session_cookie(jar, session.session_id.clone(), &state.cookies);
    Ok((jar, Json(session)))
}

// ── POST /auth/logout ─────────────────────────────────────────────────────────

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LogoutBody {
    #[serde(default)]
    pub all_devices: bool,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LogoutResponse {
    pub status: &'static str,
    pub all_devices: bool,
    pub message: &'static str,
}

pub async fn logout(
    State(state): State<AppState>,
    SessionUser(user): SessionUser,
    jar: CookieJar,
    OptionalJson(body): OptionalJson<LogoutBody>,
) -> Result<impl IntoResponse, ApiError> {    let message = if body.all_devices {
        "All dummy sessions cleared."
    } else {
        "Current dummy session cleared."
    };

    tracing::info!(user_id = %user.id, all_devices = body.all_devices, "logout");
    let jar = clear_session_cookie(jar, &state.cookies);
    Ok((
        jar,
        Json(LogoutResponse {
            status: "ok",
            all_devices: body.all_devices,
            message,
        }),
    ))
}

// ── POST /auth/token/refresh ──────────────────────────────────────────────────

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RefreshResponse {
    pub session_id: String,
    #[serde(serialize_with = "to_rfc3339_ms")]
    pub expires_at: DateTime<Utc>,
}

pub async fn refresh_token(
    State(state): State<AppState>,
    SessionUser(user): SessionUser,
    jar: CookieJar,
) -> Result<impl IntoResponse, ApiError> {
    let session = build_session(user, state.session_ttl_minutes, Utc::now())?;
    let jar = set_session_cookie(jar, session.session_id.clone(), &state.cookies);
    Ok((
        jar,
        Json(RefreshResponse {
            session_id: session.session_id,
            expires_at: session.expires_at,
        }),
    ))
}
