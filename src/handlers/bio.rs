//! Bio handlers. There is at most one bio; create once, then update.

use axum::{extract::State, http::StatusCode, response::Response, Json};
use validator::Validate;

use crate::db::{bio_create, bio_get, bio_update};
use crate::error::AppError;
use crate::handlers::http::{created, AppState};
use crate::middleware::AuthAdmin;
use crate::models::{Bio, BioInput};

const BIO_MISSING: &str = "Bio not found. Please create one first.";

/// GET /api/bio
pub async fn get_bio(State(state): State<AppState>) -> Result<Json<Bio>, AppError> {
    let bio = bio_get(state.db())
        .await?
        .ok_or_else(|| AppError::NotFound(BIO_MISSING.to_string()))?;
    Ok(Json(bio))
}

/// POST /api/bio
pub async fn create_bio(
    State(state): State<AppState>,
    _admin: AuthAdmin,
    Json(body): Json<BioInput>,
) -> Result<Response, AppError> {
    body.validate()?;
    let bio = bio_create(state.db(), &body)
        .await?
        .ok_or_else(|| AppError::Validation("Bio already exists. Use PUT to update.".to_string()))?;
    Ok(created("/api/bio".to_string(), bio))
}

/// PUT /api/bio
pub async fn update_bio(
    State(state): State<AppState>,
    _admin: AuthAdmin,
    Json(body): Json<BioInput>,
) -> Result<StatusCode, AppError> {
    body.validate()?;
    bio_update(state.db(), &body).await?;
    Ok(StatusCode::NO_CONTENT)
}
