//! Book handlers.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Response,
    Json,
};
use uuid::Uuid;
use validator::Validate;

use crate::db::{book_create, book_delete, book_get, book_update, books_list};
use crate::error::AppError;
use crate::handlers::http::{created, AppState};
use crate::middleware::AuthAdmin;
use crate::models::{Book, BookInput};

/// GET /api/books
pub async fn list_books(State(state): State<AppState>) -> Result<Json<Vec<Book>>, AppError> {
    Ok(Json(books_list(state.db()).await?))
}

/// GET /api/books/:id
pub async fn get_book(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Book>, AppError> {
    let book = book_get(state.db(), id)
        .await?
        .ok_or_else(|| AppError::NotFound("Book not found".to_string()))?;
    Ok(Json(book))
}

/// POST /api/books
pub async fn create_book(
    State(state): State<AppState>,
    _admin: AuthAdmin,
    Json(body): Json<BookInput>,
) -> Result<Response, AppError> {
    body.validate()?;
    let book = book_create(state.db(), &body).await?;
    Ok(created(format!("/api/books/{}", book.id), book))
}

/// PUT /api/books/:id
pub async fn update_book(
    State(state): State<AppState>,
    _admin: AuthAdmin,
    Path(id): Path<Uuid>,
    Json(body): Json<BookInput>,
) -> Result<StatusCode, AppError> {
    body.validate()?;
    book_update(state.db(), id, &body).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// DELETE /api/books/:id
pub async fn delete_book(
    State(state): State<AppState>,
    _admin: AuthAdmin,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, AppError> {
    book_delete(state.db(), id).await?;
    Ok(StatusCode::NO_CONTENT)
}
