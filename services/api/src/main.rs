use anyhow::Result;
use common::{Catalog, seed};
use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use rating_api::{
    AppState,
    config::ApiConfig,
    jwt::{JwtConfig, JwtService},
    routes,
};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .finish();

    tracing::subscriber::set_global_default(subscriber)?;

    info!("Starting store ratings API service");

    let config = ApiConfig::from_env()?;

    let catalog = if config.seed_demo_data {
        info!("Seeding demo users, stores and ratings");
        seed::demo_catalog()
    } else {
        Catalog::new()
    };

    let jwt_service = JwtService::new(JwtConfig::from(&config));
    let app_state = AppState::new(catalog, jwt_service);

    // Start the web server
    let app = routes::create_router(app_state);

    let address = config.bind_address();
    let listener = TcpListener::bind(&address).await?;
    info!("API service listening on {}", address);

    axum::serve(listener, app).await?;

    Ok(())
}
