//! JWT issue and validation.

use crate::config::JwtConfig;
use crate::error::{AppError, AppResult};
use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use tracing::debug;
use uuid::Uuid;

/// The only role this service knows about.
pub const ADMIN_ROLE: &str = "Admin";

/// Tokens are valid for this many days and cannot be renewed.
pub const TOKEN_TTL_DAYS: i64 = 7;

/// Identity a token is minted for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Principal {
    pub id: Uuid,
    pub username: String,
    pub email: String,
}

impl From<&crate::models::AdminRow> for Principal {
    fn from(row: &crate::models::AdminRow) -> Self {
        Self {
            id: row.id,
            username: row.username.clone(),
            email: row.email.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String, // admin id
    pub username: String,
    pub email: String,
    pub role: String,
    pub iss: String,
    pub aud: String,
    pub iat: i64,
    pub exp: i64,
}

impl Claims {
    pub fn is_admin(&self) -> bool {
        self.role == ADMIN_ROLE
    }
}

/// Signing material plus the issuer/audience pair every token must carry.
#[derive(Clone)]
pub struct JwtKeys {
    encoding: EncodingKey,
    decoding: DecodingKey,
    issuer: String,
    audience: String,
}

impl JwtKeys {
    /// Fails when the secret is empty; callers treat that as fatal at startup.
    pub fn new(config: &JwtConfig) -> AppResult<Self> {
        if config.key.is_empty() {
            return Err(AppError::Config("JWT key is not configured".to_string()));
        }
        Ok(Self {
            encoding: EncodingKey::from_secret(config.key.as_bytes()),
            decoding: DecodingKey::from_secret(config.key.as_bytes()),
            issuer: config.issuer.clone(),
            audience: config.audience.clone(),
        })
    }

    pub fn issue(&self, principal: &Principal) -> AppResult<String> {
        self.issue_at(principal, Utc::now())
    }

    pub fn issue_at(&self, principal: &Principal, now: DateTime<Utc>) -> AppResult<String> {
        let claims = Claims {
            sub: principal.id.to_string(),
            username: principal.username.clone(),
            email: principal.email.clone(),
            role: ADMIN_ROLE.to_string(),
            iss: self.issuer.clone(),
            aud: self.audience.clone(),
            iat: now.timestamp(),
            exp: (now + Duration::days(TOKEN_TTL_DAYS)).timestamp(),
        };
        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding)
            .map_err(|e| AppError::Jwt(e.to_string()))
    }

    pub fn validate(&self, token: &str) -> AppResult<Claims> {
        self.validate_at(token, Utc::now())
    }

    /// Checks signature, issuer, audience and `now < exp`. Every failure is
    /// `Unauthorized`; the reason is only logged.
    pub fn validate_at(&self, token: &str, now: DateTime<Utc>) -> AppResult<Claims> {
        let mut validation = Validation::new(Algorithm::HS256);
        // Expiry is compared against `now` below, without leeway.
        validation.validate_exp = false;
        validation.set_issuer(&[&self.issuer]);
        validation.set_audience(&[&self.audience]);
        validation.set_required_spec_claims(&["exp", "iss", "aud", "sub"]);

        let data = decode::<Claims>(token, &self.decoding, &validation).map_err(|e| {
            debug!(error = %e, "token rejected");
            AppError::Unauthorized
        })?;

        if now.timestamp() >= data.claims.exp {
            debug!(exp = data.claims.exp, "token expired");
            return Err(AppError::Unauthorized);
        }
        Ok(data.claims)
    }
}
