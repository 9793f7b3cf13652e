//! Gallery pictures, grouped by category.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;
use validator::Validate;

#[derive(Debug, Clone, Serialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Picture {
    pub id: Uuid,
    pub title: String,
    pub image_url: String,
    pub description: Option<String>,
    pub category: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct PictureInput {
    #[validate(length(min = 1, max = 200))]
    pub title: String,
    #[validate(length(min = 1, max = 2000))]
    pub image_url: String,
    pub description: Option<String>,
    #[validate(length(min = 1, max = 100))]
    pub category: String,
}

/// Query string for `GET /api/pictures`.
#[derive(Debug, Default, Deserialize)]
pub struct PictureFilter {
    pub category: Option<String>,
}
