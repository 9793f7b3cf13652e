//! Picture handlers.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::Response,
    Json,
};
use uuid::Uuid;
use validator::Validate;

use crate::db::{picture_create, picture_delete, picture_get, picture_update, pictures_list};
use crate::error::AppError;
use crate::handlers::http::{created, AppState};
use crate::middleware::AuthAdmin;
use crate::models::{Picture, PictureFilter, PictureInput};

/// GET /api/pictures?category=...
pub async fn list_pictures(
    State(state): State<AppState>,
    Query(filter): Query<PictureFilter>,
) -> Result<Json<Vec<Picture>>, AppError> {
    let category = filter.category.as_deref().filter(|c| !c.is_empty());
    Ok(Json(pictures_list(state.db(), category).await?))
}

/// GET /api/pictures/:id
pub async fn get_picture(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Picture>, AppError> {
    let picture = picture_get(state.db(), id)
        .await?
        .ok_or_else(|| AppError::NotFound("Picture not found".to_string()))?;
    Ok(Json(picture))
}

/// POST /api/pictures
pub async fn create_picture(
    State(state): State<AppState>,
    _admin: AuthAdmin,
    Json(body): Json<PictureInput>,
) -> Result<Response, AppError> {
    body.validate()?;
    let picture = picture_create(state.db(), &body).await?;
    Ok(created(format!("/api/pictures/{}", picture.id), picture))
}

/// PUT /api/pictures/:id
pub async fn update_picture(
    State(state): State<AppState>,
    _admin: AuthAdmin,
    Path(id): Path<Uuid>,
    Json(body): Json<PictureInput>,
) -> Result<StatusCode, AppError> {
    body.validate()?;
    picture_update(state.db(), id, &body).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// DELETE /api/pictures/:id
pub async fn delete_picture(
    State(state): State<AppState>,
    _admin: AuthAdmin,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, AppError> {
    picture_delete(state.db(), id).await?;
    Ok(StatusCode::NO_CONTENT)
}
