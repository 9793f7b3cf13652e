//! Personal portfolio content API.
//!
//! Serves bio, projects, books, pictures and contact messages over REST. Writes
//! are restricted to a single administrator who logs in with a password and
//! receives a 7-day HS256 bearer token.

pub mod auth;
pub mod config;
pub mod db;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod models;

pub use config::Config;
pub use error::AppError;
pub use handlers::http::AppState;

use axum::routing::{get, post, put};
use handlers::{bio, books, contact, pictures, projects};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

/// Build the API router (auth, content resources, health). Used by main and by integration tests.
pub fn create_app(state: AppState) -> axum::Router {
    let auth_routes = axum::Router::new()
        .route("/login", post(auth::login))
        .route("/me", get(auth::me));

    let api_routes = axum::Router::new()
        .nest("/auth", auth_routes)
        .route(
            "/bio",
            get(bio::get_bio).post(bio::create_bio).put(bio::update_bio),
        )
        .route(
            "/projects",
            get(projects::list_projects).post(projects::create_project),
        )
        .route(
            "/projects/:id",
            get(projects::get_project)
                .put(projects::update_project)
                .delete(projects::delete_project),
        )
        .route("/books", get(books::list_books).post(books::create_book))
        .route(
            "/books/:id",
            get(books::get_book)
                .put(books::update_book)
                .delete(books::delete_book),
        )
        .route(
            "/pictures",
            get(pictures::list_pictures).post(pictures::create_picture),
        )
        .route(
            "/pictures/:id",
            get(pictures::get_picture)
                .put(pictures::update_picture)
                .delete(pictures::delete_picture),
        )
        .route(
            "/contact",
            post(contact::submit_contact).get(contact::list_contacts),
        )
        .route(
            "/contact/:id",
            get(contact::get_contact).delete(contact::delete_contact),
        )
        .route("/contact/:id/read", put(contact::mark_contact_read))
        .route("/diagnostics/health", get(handlers::diagnostics));

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    axum::Router::new()
        .route("/health", get(handlers::health))
        .nest("/api", api_routes)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}
