//! Repositories: admins, bio, projects, books, pictures, contact messages.

use crate::error::{AppError, AppResult};
use crate::models::{
    AdminRow, Bio, BioInput, Book, BookInput, ContactInput, ContactMessage, NewAdmin, Picture,
    PictureInput, Project, ProjectInput,
};
use uuid::Uuid;

use super::DbPool;

fn ensure_affected(rows: u64, what: &str) -> AppResult<()> {
    if rows == 0 {
        return Err(AppError::NotFound(format!("{} not found", what)));
    }
    Ok(())
}

// ---- Admin ----

const ADMIN_COLUMNS: &str = "id, username, email, password_hash, created_at";

pub async fn admin_count(pool: &DbPool) -> AppResult<i64> {
    let row: (i64,) = sqlx::query_as("SELECT COUNT(*)::bigint FROM admins")
        .fetch_one(pool)
        .await?;
    Ok(row.0)
}

pub async fn admin_find_by_username(pool: &DbPool, username: &str) -> AppResult<Option<AdminRow>> {
    let row = sqlx::query_as::<_, AdminRow>(&format!(
        "SELECT {} FROM admins WHERE username = $1",
        ADMIN_COLUMNS
    ))
    .bind(username)
    .fetch_optional(pool)
    .await?;
    Ok(row)
}

/// Insert an admin. `None` when the username or email is already taken.
pub async fn admin_create(pool: &DbPool, admin: &NewAdmin) -> AppResult<Option<AdminRow>> {
    let row = sqlx::query_as::<_, AdminRow>(&format!(
        r#"
        INSERT INTO admins (username, email, password_hash)
        VALUES ($1, $2, $3)
        ON CONFLICT DO NOTHING
        RETURNING {}
        "#,
        ADMIN_COLUMNS
    ))
    .bind(&admin.username)
    .bind(&admin.email)
    .bind(&admin.password_hash)
    .fetch_optional(pool)
    .await?;
    Ok(row)
}

// ---- Bio (singleton) ----

const BIO_COLUMNS: &str = "id, name, title, description, profile_image_url, email, phone, \
                           linkedin_url, github_url, twitter_url, updated_at";

pub async fn bio_get(pool: &DbPool) -> AppResult<Option<Bio>> {
    let row = sqlx::query_as::<_, Bio>(&format!("SELECT {} FROM bios LIMIT 1", BIO_COLUMNS))
        .fetch_optional(pool)
        .await?;
    Ok(row)
}

/// Insert the bio. `None` when one already exists.
pub async fn bio_create(pool: &DbPool, input: &BioInput) -> AppResult<Option<Bio>> {
    let row = sqlx::query_as::<_, Bio>(&format!(
        r#"
        INSERT INTO bios (name, title, description, profile_image_url, email, phone,
                          linkedin_url, github_url, twitter_url)
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
        ON CONFLICT (singleton) DO NOTHING
        RETURNING {}
        "#,
        BIO_COLUMNS
    ))
    .bind(&input.name)
    .bind(&input.title)
    .bind(&input.description)
    .bind(&input.profile_image_url)
    .bind(&input.email)
    .bind(&input.phone)
    .bind(&input.linkedin_url)
    .bind(&input.github_url)
    .bind(&input.twitter_url)
    .fetch_optional(pool)
    .await?;
    Ok(row)
}

pub async fn bio_update(pool: &DbPool, input: &BioInput) -> AppResult<()> {
    let r = sqlx::query(
        r#"
        UPDATE bios
        SET name = $1, title = $2, description = $3, profile_image_url = $4, email = $5,
            phone = $6, linkedin_url = $7, github_url = $8, twitter_url = $9, updated_at = NOW()
        "#,
    )
    .bind(&input.name)
    .bind(&input.title)
    .bind(&input.description)
    .bind(&input.profile_image_url)
    .bind(&input.email)
    .bind(&input.phone)
    .bind(&input.linkedin_url)
    .bind(&input.github_url)
    .bind(&input.twitter_url)
    .execute(pool)
    .await?;
    if r.rows_affected() == 0 {
        return Err(AppError::NotFound(
            "Bio not found. Please create one first.".to_string(),
        ));
    }
    Ok(())
}

// ---- Projects ----

const PROJECT_COLUMNS: &str = "id, title, description, image_url, technologies_used, project_url, \
                               github_url, created_at, updated_at";

pub async fn projects_list(pool: &DbPool) -> AppResult<Vec<Project>> {
    let rows = sqlx::query_as::<_, Project>(&format!(
        "SELECT {} FROM projects ORDER BY created_at DESC",
        PROJECT_COLUMNS
    ))
    .fetch_all(pool)
    .await?;
    Ok(rows)
}

pub async fn project_get(pool: &DbPool, id: Uuid) -> AppResult<Option<Project>> {
    let row = sqlx::query_as::<_, Project>(&format!(
        "SELECT {} FROM projects WHERE id = $1",
        PROJECT_COLUMNS
    ))
    .bind(id)
    .fetch_optional(pool)
    .await?;
    Ok(row)
}

pub async fn project_create(pool: &DbPool, input: &ProjectInput) -> AppResult<Project> {
    let row = sqlx::query_as::<_, Project>(&format!(
        r#"
        INSERT INTO projects (title, description, image_url, technologies_used, project_url, github_url)
        VALUES ($1, $2, $3, $4, $5, $6)
        RETURNING {}
        "#,
        PROJECT_COLUMNS
    ))
    .bind(&input.title)
    .bind(&input.description)
    .bind(&input.image_url)
    .bind(&input.technologies_used)
    .bind(&input.project_url)
    .bind(&input.github_url)
    .fetch_one(pool)
    .await?;
    Ok(row)
}

pub async fn project_update(pool: &DbPool, id: Uuid, input: &ProjectInput) -> AppResult<()> {
    let r = sqlx::query(
        r#"
        UPDATE projects
        SET title = $1, description = $2, image_url = $3, technologies_used = $4,
            project_url = $5, github_url = $6, updated_at = NOW()
        WHERE id = $7
        "#,
    )
    .bind(&input.title)
    .bind(&input.description)
    .bind(&input.image_url)
    .bind(&input.technologies_used)
    .bind(&input.project_url)
    .bind(&input.github_url)
    .bind(id)
    .execute(pool)
    .await?;
    ensure_affected(r.rows_affected(), "Project")
}

pub async fn project_delete(pool: &DbPool, id: Uuid) -> AppResult<()> {
    let r = sqlx::query("DELETE FROM projects WHERE id = $1")
        .bind(id)
        .execute(pool)
        .await?;
    ensure_affected(r.rows_affected(), "Project")
}

// ---- Books ----

const BOOK_COLUMNS: &str =
    "id, title, author, description, cover_image_url, amazon_url, rating, created_at";

pub async fn books_list(pool: &DbPool) -> AppResult<Vec<Book>> {
    let rows = sqlx::query_as::<_, Book>(&format!(
        "SELECT {} FROM books ORDER BY created_at DESC",
        BOOK_COLUMNS
    ))
    .fetch_all(pool)
    .await?;
    Ok(rows)
}

pub async fn book_get(pool: &DbPool, id: Uuid) -> AppResult<Option<Book>> {
    let row = sqlx::query_as::<_, Book>(&format!(
        "SELECT {} FROM books WHERE id = $1",
        BOOK_COLUMNS
    ))
    .bind(id)
    .fetch_optional(pool)
    .await?;
    Ok(row)
}

pub async fn book_create(pool: &DbPool, input: &BookInput) -> AppResult<Book> {
    let row = sqlx::query_as::<_, Book>(&format!(
        r#"
        INSERT INTO books (title, author, description, cover_image_url, amazon_url, rating)
        VALUES ($1, $2, $3, $4, $5, $6)
        RETURNING {}
        "#,
        BOOK_COLUMNS
    ))
    .bind(&input.title)
    .bind(&input.author)
    .bind(&input.description)
    .bind(&input.cover_image_url)
    .bind(&input.amazon_url)
    .bind(input.rating)
    .fetch_one(pool)
    .await?;
    Ok(row)
}

pub async fn book_update(pool: &DbPool, id: Uuid, input: &BookInput) -> AppResult<()> {
    let r = sqlx::query(
        r#"
        UPDATE books
        SET title = $1, author = $2, description = $3, cover_image_url = $4,
            amazon_url = $5, rating = $6
        WHERE id = $7
        "#,
    )
    .bind(&input.title)
    .bind(&input.author)
    .bind(&input.description)
    .bind(&input.cover_image_url)
    .bind(&input.amazon_url)
    .bind(input.rating)
    .bind(id)
    .execute(pool)
    .await?;
    ensure_affected(r.rows_affected(), "Book")
}

pub async fn book_delete(pool: &DbPool, id: Uuid) -> AppResult<()> {
    let r = sqlx::query("DELETE FROM books WHERE id = $1")
        .bind(id)
        .execute(pool)
        .await?;
    ensure_affected(r.rows_affected(), "Book")
}

// ---- Pictures ----

const PICTURE_COLUMNS: &str = "id, title, image_url, description, category, created_at";

/// List pictures, newest first, optionally restricted to one category.
pub async fn pictures_list(pool: &DbPool, category: Option<&str>) -> AppResult<Vec<Picture>> {
    let rows = sqlx::query_as::<_, Picture>(&format!(
        "SELECT {} FROM pictures WHERE ($1::text IS NULL OR category = $1) ORDER BY created_at DESC",
        PICTURE_COLUMNS
    ))
    .bind(category)
    .fetch_all(pool)
    .await?;
    Ok(rows)
}

pub async fn picture_get(pool: &DbPool, id: Uuid) -> AppResult<Option<Picture>> {
    let row = sqlx::query_as::<_, Picture>(&format!(
        "SELECT {} FROM pictures WHERE id = $1",
        PICTURE_COLUMNS
    ))
    .bind(id)
    .fetch_optional(pool)
    .await?;
    Ok(row)
}

pub async fn picture_create(pool: &DbPool, input: &PictureInput) -> AppResult<Picture> {
    let row = sqlx::query_as::<_, Picture>(&format!(
        r#"
        INSERT INTO pictures (title, image_url, description, category)
        VALUES ($1, $2, $3, $4)
        RETURNING {}
        "#,
        PICTURE_COLUMNS
    ))
    .bind(&input.title)
    .bind(&input.image_url)
    .bind(&input.description)
    .bind(&input.category)
    .fetch_one(pool)
    .await?;
    Ok(row)
}

pub async fn picture_update(pool: &DbPool, id: Uuid, input: &PictureInput) -> AppResult<()> {
    let r = sqlx::query(
        "UPDATE pictures SET title = $1, image_url = $2, description = $3, category = $4 WHERE id = $5",
    )
    .bind(&input.title)
    .bind(&input.image_url)
    .bind(&input.description)
    .bind(&input.category)
    .bind(id)
    .execute(pool)
    .await?;
    ensure_affected(r.rows_affected(), "Picture")
}

pub async fn picture_delete(pool: &DbPool, id: Uuid) -> AppResult<()> {
    let r = sqlx::query("DELETE FROM pictures WHERE id = $1")
        .bind(id)
        .execute(pool)
        .await?;
    ensure_affected(r.rows_affected(), "Picture")
}

// ---- Contact messages ----

const CONTACT_COLUMNS: &str = "id, name, email, subject, message, is_read, created_at";

pub async fn contact_create(pool: &DbPool, input: &ContactInput) -> AppResult<ContactMessage> {
    let row = sqlx::query_as::<_, ContactMessage>(&format!(
        r#"
        INSERT INTO contact_messages (name, email, subject, message)
        VALUES ($1, $2, $3, $4)
        RETURNING {}
        "#,
        CONTACT_COLUMNS
    ))
    .bind(&input.name)
    .bind(&input.email)
    .bind(&input.subject)
    .bind(&input.message)
    .fetch_one(pool)
    .await?;
    Ok(row)
}

pub async fn contacts_list(pool: &DbPool) -> AppResult<Vec<ContactMessage>> {
    let rows = sqlx::query_as::<_, ContactMessage>(&format!(
        "SELECT {} FROM contact_messages ORDER BY created_at DESC",
        CONTACT_COLUMNS
    ))
    .fetch_all(pool)
    .await?;
    Ok(rows)
}

pub async fn contact_get(pool: &DbPool, id: Uuid) -> AppResult<Option<ContactMessage>> {
    let row = sqlx::query_as::<_, ContactMessage>(&format!(
        "SELECT {} FROM contact_messages WHERE id = $1",
        CONTACT_COLUMNS
    ))
    .bind(id)
    .fetch_optional(pool)
    .await?;
    Ok(row)
}

pub async fn contact_mark_read(pool: &DbPool, id: Uuid) -> AppResult<()> {
    let r = sqlx::query("UPDATE contact_messages SET is_read = TRUE WHERE id = $1")
        .bind(id)
        .execute(pool)
        .await?;
    ensure_affected(r.rows_affected(), "Message")
}

pub async fn contact_delete(pool: &DbPool, id: Uuid) -> AppResult<()> {
    let r = sqlx::query("DELETE FROM contact_messages WHERE id = $1")
        .bind(id)
        .execute(pool)
        .await?;
    ensure_affected(r.rows_affected(), "Message")
}
