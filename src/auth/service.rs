//! Auth application service: login orchestration and first-boot admin seeding.

use serde::Serialize;
use std::sync::OnceLock;
use tracing::{info, warn};

use crate::auth::jwt::{JwtKeys, Principal};
use crate::auth::password::{hash_password, is_legacy_hash, verify_password};
use crate::config::SeedAdmin;
use crate::db::AdminStore;
use crate::error::{AppError, AppResult};
use crate::models::NewAdmin;

/// Successful login: the token plus public profile fields, never hash material.
#[derive(Debug, Clone, Serialize)]
pub struct LoginResponse {
    pub token: String,
    pub username: String,
    pub email: String,
}

/// What `seed_default_admin` did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeedOutcome {
    Created,
    AlreadyPresent,
}

// Verified against when the username is unknown, so both rejections cost the same.
static DUMMY_HASH: OnceLock<Option<String>> = OnceLock::new();

fn burn_verification(password: &str) {
    if let Some(hash) = DUMMY_HASH.get_or_init(|| hash_password("dummy-password").ok()) {
        let _ = verify_password(password, hash);
    }
}

/// Run CPU-heavy Argon2 work on the blocking pool instead of an async worker.
async fn off_worker<T, F>(work: F) -> AppResult<T>
where
    F: FnOnce() -> T + Send + 'static,
    T: Send + 'static,
{
    tokio::task::spawn_blocking(work)
        .await
        .map_err(|e| AppError::Internal(anyhow::anyhow!("password task: {}", e)))
}

pub struct AuthAppService;

impl AuthAppService {
    /// Verify `username`/`password` against the store and mint a token.
    /// Unknown user and wrong password both yield `InvalidCredentials`.
    pub async fn login(
        store: &dyn AdminStore,
        keys: &JwtKeys,
        username: &str,
        password: &str,
    ) -> AppResult<LoginResponse> {
        let admin = match store.find_by_username(username).await? {
            Some(admin) => admin,
            None => {
                let password = password.to_string();
                off_worker(move || burn_verification(&password)).await?;
                info!("login rejected");
                return Err(AppError::InvalidCredentials);
            }
        };

        let (password, stored) = (password.to_string(), admin.password_hash.clone());
        if !off_worker(move || verify_password(&password, &stored)).await? {
            info!("login rejected");
            return Err(AppError::InvalidCredentials);
        }
        if is_legacy_hash(&admin.password_hash) {
            warn!(admin_id = %admin.id, "admin password uses the legacy unsalted digest; rotate it");
        }

        let token = keys.issue(&Principal::from(&admin))?;
        info!(admin_id = %admin.id, "login succeeded");

        Ok(LoginResponse {
            token,
            username: admin.username,
            email: admin.email,
        })
    }

    /// Create the administrator on first boot. A no-op when any admin exists;
    /// otherwise missing seed credentials are a configuration error.
    pub async fn seed_default_admin(
        store: &dyn AdminStore,
        seed: Option<&SeedAdmin>,
    ) -> AppResult<SeedOutcome> {
        let existing = store.count().await?;
        if existing > 0 {
            info!(existing, "admin already present, skipping seed");
            return Ok(SeedOutcome::AlreadyPresent);
        }

        let seed = seed.ok_or_else(|| {
            AppError::Config(
                "default admin credentials are not configured (ADMIN_EMAIL, ADMIN_PASSWORD)"
                    .to_string(),
            )
        })?;

        let new_admin = NewAdmin {
            username: seed.username.clone(),
            email: seed.email.clone(),
            password_hash: {
                let password = seed.password.clone();
                off_worker(move || hash_password(&password)).await??
            },
        };
        let created = store.create(&new_admin).await?.ok_or_else(|| {
            AppError::Config("default admin conflicts with an existing record".to_string())
        })?;
        info!(admin_id = %created.id, "default admin created");
        Ok(SeedOutcome::Created)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::jwt::ADMIN_ROLE;
    use crate::config::JwtConfig;
    use crate::db::MemoryAdminStore;

    fn keys() -> JwtKeys {
        JwtKeys::new(&JwtConfig {
            key: "test-jwt-secret-min-32-chars!!!!".to_string(),
            issuer: "portfolio-api".to_string(),
            audience: "portfolio-client".to_string(),
        })
        .unwrap()
    }

    fn seed() -> SeedAdmin {
        SeedAdmin {
            username: "admin".to_string(),
            email: "admin@example.com".to_string(),
            password: "S3cret!".to_string(),
        }
    }

    async fn seeded_store() -> MemoryAdminStore {
        let store = MemoryAdminStore::new();
        AuthAppService::seed_default_admin(&store, Some(&seed()))
            .await
            .unwrap();
        store
    }

    #[tokio::test]
    async fn seed_stores_hash_not_plaintext() {
        let store = seeded_store().await;
        let admin = store.find_by_username("admin").await.unwrap().unwrap();
        assert_ne!(admin.password_hash, "S3cret!");
        assert!(verify_password("S3cret!", &admin.password_hash));
    }

    #[tokio::test]
    async fn seed_runs_once() {
        let store = seeded_store().await;
        let outcome = AuthAppService::seed_default_admin(&store, Some(&seed()))
            .await
            .unwrap();
        assert_eq!(outcome, SeedOutcome::AlreadyPresent);
        assert_eq!(store.count().await.unwrap(), 1);
    }

    #[tokio::test]
    async fn seed_without_credentials_is_fatal_only_when_needed() {
        let empty = MemoryAdminStore::new();
        assert!(matches!(
            AuthAppService::seed_default_admin(&empty, None).await,
            Err(AppError::Config(_))
        ));

        let store = seeded_store().await;
        assert_eq!(
            AuthAppService::seed_default_admin(&store, None).await.unwrap(),
            SeedOutcome::AlreadyPresent
        );
    }

    #[tokio::test]
    async fn login_issues_token_for_valid_credentials() {
        let store = seeded_store().await;
        let keys = keys();
        let res = AuthAppService::login(&store, &keys, "admin", "S3cret!")
            .await
            .unwrap();
        assert!(!res.token.is_empty());
        assert_eq!(res.username, "admin");
        assert_eq!(res.email, "admin@example.com");

        let claims = keys.validate(&res.token).unwrap();
        let admin = store.find_by_username("admin").await.unwrap().unwrap();
        assert_eq!(claims.sub, admin.id.to_string());
        assert_eq!(claims.role, ADMIN_ROLE);
    }

    #[tokio::test]
    async fn unknown_user_and_wrong_password_are_indistinguishable() {
        let store = seeded_store().await;
        let keys = keys();
        let wrong_password = AuthAppService::login(&store, &keys, "admin", "wrong")
            .await
            .unwrap_err();
        let unknown_user = AuthAppService::login(&store, &keys, "ghost", "S3cret!")
            .await
            .unwrap_err();
        assert!(matches!(wrong_password, AppError::InvalidCredentials));
        assert!(matches!(unknown_user, AppError::InvalidCredentials));
        assert_eq!(wrong_password.to_string(), unknown_user.to_string());
    }

    #[tokio::test]
    async fn legacy_digest_still_logs_in() {
        let store = MemoryAdminStore::new();
        store
            .create(&NewAdmin {
                username: "legacy".to_string(),
                email: "legacy@example.com".to_string(),
                // base64(SHA-256("password"))
                password_hash: "XohImNooBHFR0OVvjcYpJ3NgPQ1qq73WKhHvch0VQtg=".to_string(),
            })
            .await
            .unwrap();
        let res = AuthAppService::login(&store, &keys(), "legacy", "password").await;
        assert!(res.is_ok());
    }

    #[tokio::test]
    async fn concurrent_logins_leave_the_runtime_responsive() {
        let store = seeded_store().await;
        let keys = keys();
        let ticker = tokio::spawn(async {
            tokio::time::sleep(std::time::Duration::from_millis(1)).await;
            std::time::Instant::now()
        });
        let (a, b, c) = tokio::join!(
            AuthAppService::login(&store, &keys, "admin", "S3cret!"),
            AuthAppService::login(&store, &keys, "admin", "wrong"),
            AuthAppService::login(&store, &keys, "ghost", "S3cret!"),
        );
        let finished = std::time::Instant::now();
        assert!(a.is_ok());
        assert!(matches!(b, Err(AppError::InvalidCredentials)));
        assert!(matches!(c, Err(AppError::InvalidCredentials)));

        // Argon2 runs on the blocking pool, so the timer fires while logins are in flight.
        let woke = ticker.await.unwrap();
        assert!(woke < finished);
    }
}
