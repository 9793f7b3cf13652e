//! Contact form: public submission, admin-only inbox.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Response,
    Json,
};
use tracing::info;
use uuid::Uuid;
use validator::Validate;

use crate::db::{contact_create, contact_delete, contact_get, contact_mark_read, contacts_list};
use crate::error::AppError;
use crate::handlers::http::{created, AppState};
use crate::middleware::AuthAdmin;
use crate::models::{ContactInput, ContactMessage};

/// POST /api/contact
pub async fn submit_contact(
    State(state): State<AppState>,
    Json(body): Json<ContactInput>,
) -> Result<Response, AppError> {
    body.validate()?;
    let message = contact_create(state.db(), &body).await?;
    info!(message_id = %message.id, "contact message received");
    Ok(created(format!("/api/contact/{}", message.id), message))
}

/// GET /api/contact
pub async fn list_contacts(
    State(state): State<AppState>,
    _admin: AuthAdmin,
) -> Result<Json<Vec<ContactMessage>>, AppError> {
    Ok(Json(contacts_list(state.db()).await?))
}

/// GET /api/contact/:id
pub async fn get_contact(
    State(state): State<AppState>,
    _admin: AuthAdmin,
    Path(id): Path<Uuid>,
) -> Result<Json<ContactMessage>, AppError> {
    let message = contact_get(state.db(), id)
        .await?
        .ok_or_else(|| AppError::NotFound("Message not found".to_string()))?;
    Ok(Json(message))
}

/// PUT /api/contact/:id/read
pub async fn mark_contact_read(
    State(state): State<AppState>,
    _admin: AuthAdmin,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, AppError> {
    contact_mark_read(state.db(), id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// DELETE /api/contact/:id
pub async fn delete_contact(
    State(state): State<AppState>,
    _admin: AuthAdmin,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, AppError> {
    contact_delete(state.db(), id).await?;
    Ok(StatusCode::NO_CONTENT)
}
