//! Binary crate for the weather proxy server.
//!
//! This crate focuses on:
//! - Startup: logging, flags, configuration
//! - Binding the listener and running the axum service

use anyhow::Context;
use clap::Parser;
use tokio::net::TcpListener;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;
use weather_core::{Config, config::ENV_API_KEY};
use weather_server::{app, cli::Cli, state::AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = Cli::parse();
    let mut config = match &args.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };
    args.apply(&mut config);

    if config.credential().is_none() {
        error!("no OpenWeather API key configured; /api/weather will answer 500 until {ENV_API_KEY} is set");
    }

    let state = AppState::from_config(&config)?;
    let app = app::build_router(state);

    let addr = config.bind_addr();
    let listener = TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;
    info!(addr = %listener.local_addr()?, "weather proxy listening");

    axum::serve(listener, app).await.context("Server error")?;

    Ok(())
}
