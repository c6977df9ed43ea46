//! Server: loads config from the environment, connects to PostgreSQL, serves the API.

use tokio::net::TcpListener;
use top_places::{app, connect, AppConfig, AppState};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("top_places=info,tower_http=info")),
        )
        .init();

    let config = AppConfig::from_env()?;
    tracing::info!(bind = %config.bind_addr, max_connections = config.max_connections, "initializing db");
    let pool = connect(&config).await?;

    let router = app(AppState::postgres(pool), config.body_limit_bytes);

    let listener = TcpListener::bind(&config.bind_addr).await?;
    tracing::info!("listening on {}", listener.local_addr()?);
    axum::serve(listener, router).await?;
    Ok(())
}
