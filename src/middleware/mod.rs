//! Request extractors guarding Admin-restricted routes.

pub mod auth;

pub use auth::AuthAdmin;
