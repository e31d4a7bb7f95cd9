use anyhow::Context;
use tracing_subscriber::EnvFilter;

mod config;
mod controller;
mod db;
mod error;
mod flash;
mod forms;
mod handlers;
mod models;


use crate::{config::Config, controller::AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env first so that RUST_LOG from it reaches the log filter
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("cafe_wifi=info,tower_http=info")),
        )
        .init();

    let config = Config::from_env().context("Invalid configuration")?;
    if !config.csrf_enabled {
        tracing::warn!("CSRF protection is disabled");
    }

    let pool = db::init_db_pool(&config.database_url, config.max_pool_size)
        .await
        .with_context(|| format!("Failed to open database {}", config.database_url))?;
    let state = AppState::new(&config, pool)?;
    let app = controller::router(state);

    let addr = config.server_addr();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;
    tracing::info!("Starting cafe server on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
