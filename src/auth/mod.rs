//! Authentication: password hashing, login, JWT issue/validation, admin seeding.

mod handlers;
mod jwt;
mod password;
mod service;

pub use handlers::{login, me, LoginRequest, MeResponse};
pub use jwt::{Claims, JwtKeys, Principal, ADMIN_ROLE, TOKEN_TTL_DAYS};
pub use password::{hash_password, is_legacy_hash, verify_password};
pub use service::{AuthAppService, LoginResponse, SeedOutcome};
