//! HTTP request handlers.

pub mod bio;
pub mod books;
pub mod contact;
pub mod http;
pub mod pictures;
pub mod projects;

pub use http::{diagnostics, health, AppState};
