//! Project handlers.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Response,
    Json,
};
use uuid::Uuid;
use validator::Validate;

use crate::db::{project_create, project_delete, project_get, project_update, projects_list};
use crate::error::AppError;
use crate::handlers::http::{created, AppState};
use crate::middleware::AuthAdmin;
use crate::models::{Project, ProjectInput};

/// GET /api/projects — newest first.
pub async fn list_projects(State(state): State<AppState>) -> Result<Json<Vec<Project>>, AppError> {
    Ok(Json(projects_list(state.db()).await?))
}

/// GET /api/projects/:id
pub async fn get_project(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Project>, AppError> {
    let project = project_get(state.db(), id)
        .await?
        .ok_or_else(|| AppError::NotFound("Project not found".to_string()))?;
    Ok(Json(project))
}

/// POST /api/projects
pub async fn create_project(
    State(state): State<AppState>,
    _admin: AuthAdmin,
    Json(body): Json<ProjectInput>,
) -> Result<Response, AppError> {
    body.validate()?;
    let project = project_create(state.db(), &body).await?;
    Ok(created(format!("/api/projects/{}", project.id), project))
}

/// PUT /api/projects/:id
pub async fn update_project(
    State(state): State<AppState>,
    _admin: AuthAdmin,
    Path(id): Path<Uuid>,
    Json(body): Json<ProjectInput>,
) -> Result<StatusCode, AppError> {
    body.validate()?;
    project_update(state.db(), id, &body).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// DELETE /api/projects/:id
pub async fn delete_project(
    State(state): State<AppState>,
    _admin: AuthAdmin,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, AppError> {
    project_delete(state.db(), id).await?;
    Ok(StatusCode::NO_CONTENT)
}
