//! Shared state, liveness and diagnostics.

use axum::{
    extract::State,
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use chrono::Utc;
use serde::Serialize;
use serde_json::json;
use std::sync::Arc;

use crate::auth::JwtKeys;
use crate::db::{AdminStore, DbPool};

/// Shared application state, built once in `main` and cloned per request.
#[derive(Clone)]
pub struct AppState {
    pub db: DbPool,
    pub admins: Arc<dyn AdminStore>,
    pub jwt_keys: JwtKeys,
}

impl AppState {
    pub fn db(&self) -> &DbPool {
        &self.db
    }
    pub fn admins(&self) -> &dyn AdminStore {
        self.admins.as_ref()
    }
    pub fn jwt_keys(&self) -> &JwtKeys {
        &self.jwt_keys
    }
}

/// 201 with a `Location` header pointing at the new resource.
pub(crate) fn created<T: Serialize>(location: String, body: T) -> Response {
    (
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(body),
    )
        .into_response()
}

/// GET /health — liveness check.
pub async fn health() -> (StatusCode, Json<serde_json::Value>) {
    (
        StatusCode::OK,
        Json(json!({ "status": "ok", "service": "portfolio-api" })),
    )
}

/// GET /api/diagnostics/health — database reachability and admin count.
pub async fn diagnostics(State(state): State<AppState>) -> (StatusCode, Json<serde_json::Value>) {
    let ping = sqlx::query("SELECT 1").execute(state.db()).await;
    let admin_count = match ping {
        Ok(_) => state.admins().count().await,
        Err(e) => Err(e.into()),
    };

    match admin_count {
        Ok(admin_count) => (
            StatusCode::OK,
            Json(json!({
                "status": "OK",
                "databaseConnected": true,
                "adminCount": admin_count,
                "timestamp": Utc::now().to_rfc3339(),
            })),
        ),
        Err(e) => {
            tracing::error!(error = %e, "diagnostics check failed");
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(json!({
                    "status": "ERROR",
                    "databaseConnected": false,
                    "timestamp": Utc::now().to_rfc3339(),
                })),
            )
        }
    }
}
