//! Password hashing and verification.
//!
//! New hashes are Argon2id PHC strings with a per-record salt. Digests written by
//! the previous deployment (unsalted SHA-256, base64) still verify so an imported
//! `admins` table keeps working.

use crate::error::{AppError, AppResult};
use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};
use base64::{engine::general_purpose::STANDARD, Engine as _};
use sha2::{Digest, Sha256};
use subtle::ConstantTimeEq;

const PHC_PREFIX: char = '$';

pub fn hash_password(password: &str) -> AppResult<String> {
    let salt = SaltString::generate(&mut OsRng);
    let hash = Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map_err(|e| AppError::Internal(anyhow::anyhow!("hash: {}", e)))?
        .to_string();
    Ok(hash)
}

/// `true` iff `password` matches `stored`. A malformed digest is a mismatch, not an error.
pub fn verify_password(password: &str, stored: &str) -> bool {
    if stored.starts_with(PHC_PREFIX) {
        return match PasswordHash::new(stored) {
            Ok(parsed) => Argon2::default()
                .verify_password(password.as_bytes(), &parsed)
                .is_ok(),
            Err(e) => {
                tracing::warn!(error = %e, "stored password hash is not a valid PHC string");
                false
            }
        };
    }
    let computed = legacy_digest(password);
    computed.as_bytes().ct_eq(stored.as_bytes()).into()
}

/// `true` when `stored` predates Argon2 and should be replaced on the next rotation.
pub fn is_legacy_hash(stored: &str) -> bool {
    !stored.starts_with(PHC_PREFIX)
}

fn legacy_digest(password: &str) -> String {
    STANDARD.encode(Sha256::digest(password.as_bytes()))
}
