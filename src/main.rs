// src/main.rs

use std::sync::Arc;

use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::EnvFilter;

mod chart;
mod config;
mod db;
mod models;
mod routes;

use config::Config;

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("survey_chart=info,tower_http=info")),
        )
        .init();

    // Environment (and .env if present)
    let config = Config::from_env()?;
    let addr = config.addr();
    let port = config.port;
    let state = AppState { config: Arc::new(config) };

    let app = routes::router(state);

    let listener = TcpListener::bind(&addr).await?;
    info!(%addr, "survey chart listening on http://127.0.0.1:{port}");

    axum::serve(listener, app.into_make_service()).await?;
    Ok(())
}
