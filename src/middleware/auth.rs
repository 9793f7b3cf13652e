//! Auth extractor: validated bearer token carrying the Admin role.

use axum::{extract::FromRequestParts, http::request::Parts};
use axum_extra::{
    headers::{authorization::Bearer, Authorization},
    TypedHeader,
};
use tracing::debug;

use crate::auth::Claims;
use crate::error::AppError;
use crate::handlers::http::AppState;

/// Extractor: claims of an authenticated administrator.
///
/// Missing header, malformed header or a token failing validation reject with
/// 401; a valid token without the Admin role rejects with 403.
#[derive(Clone, Debug)]
pub struct AuthAdmin(pub Claims);

#[axum::async_trait]
impl FromRequestParts<AppState> for AuthAdmin {
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &AppState) -> Result<Self, Self::Rejection> {
        let TypedHeader(Authorization(bearer)) =
            TypedHeader::<Authorization<Bearer>>::from_request_parts(parts, state)
                .await
                .map_err(|e| {
                    debug!(error = %e, "missing or malformed Authorization header");
                    AppError::Unauthorized
                })?;

        let claims = state.jwt_keys().validate(bearer.token())?;
        if !claims.is_admin() {
            debug!(role = %claims.role, "token lacks admin role");
            return Err(AppError::Forbidden);
        }
        Ok(AuthAdmin(claims))
    }
}
