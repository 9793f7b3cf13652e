//! Admin credential store: the only persistence the login flow touches.
//!
//! `PgPool` implements it for production; [`MemoryAdminStore`] backs tests and
//! embedded use without a database.

use async_trait::async_trait;
use chrono::Utc;
use std::sync::RwLock;
use uuid::Uuid;

use super::{admin_count, admin_create, admin_find_by_username, DbPool};
use crate::error::{AppError, AppResult};
use crate::models::{AdminRow, NewAdmin};

#[async_trait]
pub trait AdminStore: Send + Sync {
    async fn find_by_username(&self, username: &str) -> AppResult<Option<AdminRow>>;

    async fn count(&self) -> AppResult<i64>;

    /// Insert an admin; `None` if the username or email is already taken.
    async fn create(&self, admin: &NewAdmin) -> AppResult<Option<AdminRow>>;
}

#[async_trait]
impl AdminStore for DbPool {
    async fn find_by_username(&self, username: &str) -> AppResult<Option<AdminRow>> {
        admin_find_by_username(self, username).await
    }

    async fn count(&self) -> AppResult<i64> {
        admin_count(self).await
    }

    async fn create(&self, admin: &NewAdmin) -> AppResult<Option<AdminRow>> {
        admin_create(self, admin).await
    }
}

/// In-process admin store with the same uniqueness rules as the `admins` table.
#[derive(Debug, Default)]
pub struct MemoryAdminStore {
    admins: RwLock<Vec<AdminRow>>,
}

impl MemoryAdminStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn poisoned() -> AppError {
        AppError::Internal(anyhow::anyhow!("admin store lock poisoned"))
    }
}

#[async_trait]
impl AdminStore for MemoryAdminStore {
    async fn find_by_username(&self, username: &str) -> AppResult<Option<AdminRow>> {
        let admins = self.admins.read().map_err(|_| Self::poisoned())?;
        Ok(admins.iter().find(|a| a.username == username).cloned())
    }

    async fn count(&self) -> AppResult<i64> {
        let admins = self.admins.read().map_err(|_| Self::poisoned())?;
        Ok(admins.len() as i64)
    }

    async fn create(&self, admin: &NewAdmin) -> AppResult<Option<AdminRow>> {
        let mut admins = self.admins.write().map_err(|_| Self::poisoned())?;
        if admins
            .iter()
            .any(|a| a.username == admin.username || a.email == admin.email)
        {
            return Ok(None);
        }
        let row = AdminRow {
            id: Uuid::new_v4(),
            username: admin.username.clone(),
            email: admin.email.clone(),
            password_hash: admin.password_hash.clone(),
            created_at: Utc::now(),
        };
        admins.push(row.clone());
        Ok(Some(row))
    }
}
