//! Auth HTTP handlers: login, current principal.

use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::auth::service::{AuthAppService, LoginResponse};
use crate::error::AppError;
use crate::handlers::http::AppState;
use crate::middleware::auth::AuthAdmin;

/// Missing fields deserialize as empty strings so they fail as bad credentials.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Serialize)]
pub struct MeResponse {
    pub id: String,
    pub username: String,
    pub email: String,
    pub role: String,
}

/// POST /api/auth/login
///
/// An unreadable body is a failed login like any other: 401, same message.
pub async fn login(
    State(state): State<AppState>,
    body: Result<Json<LoginRequest>, JsonRejection>,
) -> Result<Json<LoginResponse>, AppError> {
    let Json(body) = body.map_err(|e| {
        debug!(status = %e.status(), "login body rejected");
        AppError::InvalidCredentials
    })?;
    let res =
        AuthAppService::login(state.admins(), state.jwt_keys(), &body.username, &body.password)
            .await?;
    Ok(Json(res))
}

/// GET /api/auth/me
pub async fn me(AuthAdmin(claims): AuthAdmin) -> Json<MeResponse> {
    Json(MeResponse {
        id: claims.sub,
        username: claims.username,
        email: claims.email,
        role: claims.role,
    })
}
