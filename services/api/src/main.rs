use anyhow::Result;
use tracing::info;
use tracing_subscriber::EnvFilter;

use api::{AppState, config::ServerConfig, create_router, repositories::Repositories};
use auth::{JwtConfig, JwtService};
use common::database::{DatabaseConfig, health_check, init_pool};

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    info!("Starting mygram API");

    let server_config = ServerConfig::from_env()?;
    let jwt_service = JwtService::new(JwtConfig::from_env()?);

    // Initialize database connection pool
    let db_config = DatabaseConfig::from_env()?;
    let pool = init_pool(&db_config).await?;

    if health_check(&pool).await? {
        info!("Database connection successful");
    } else {
        anyhow::bail!("Failed to connect to database");
    }

    let state = AppState::new(Repositories::postgres(pool), jwt_service);
    let app = create_router(state);

    let address = server_config.bind_address();
    let listener = tokio::net::TcpListener::bind(&address).await?;
    info!("mygram API listening on {}", address);

    axum::serve(listener, app).await?;

    Ok(())
}
