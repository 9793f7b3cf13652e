//! Entry point: load config, migrate and seed, wire dependencies, and run the server.

use axum::routing::get_service;
use portfolio_api::auth::{AuthAppService, JwtKeys};
use portfolio_api::config::Config;
use portfolio_api::db;
use portfolio_api::{create_app, AppState};
use std::sync::Arc;
use tower_http::services::ServeFile;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let config = Config::from_env().map_err(|e| anyhow::anyhow!("config: {}", e))?;

    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.log_level))?;
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();

    let jwt_keys = JwtKeys::new(&config.jwt)?;
    if config.jwt.key.len() < 32 {
        tracing::warn!("JWT_KEY is shorter than 32 bytes; use a longer secret");
    }

    let db_pool = db::create_pool(&config.database_url).await?;
    db::run_migrations(&db_pool).await?;
    tracing::info!("database migrations applied");

    let admins: Arc<dyn db::AdminStore> = Arc::new(db_pool.clone());
    AuthAppService::seed_default_admin(admins.as_ref(), config.seed_admin.as_ref()).await?;

    let state = AppState {
        db: db_pool,
        admins,
        jwt_keys,
    };

    let app = create_app(state)
        .route_service("/", get_service(ServeFile::new(&config.docs_path)))
        .route_service("/docs.html", get_service(ServeFile::new(&config.docs_path)));

    tracing::info!(addr = %config.server_addr, "listening");
    let listener = tokio::net::TcpListener::bind(config.server_addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}
