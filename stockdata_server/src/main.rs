use anyhow::{Context, Result};
use clap::Parser;
use stockdata_api::Client;
use stockdata_server::{app, env_filter, AppState, Config};

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(env_filter(std::env::var("RUST_LOG").ok().as_deref()))
        .with_target(false)
        .init();

    let config = Config::parse();

    let client = Client::with_timeout(&config.upstream_url, config.upstream_timeout())
        .context("failed to build upstream client")?;
    let state = AppState::new(client, config.history_query());
    let router = app(state);

    let addr = config.socket_addr();
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {}", addr))?;
    tracing::info!(upstream = %config.upstream_url, symbol = %config.symbol, "Server running on port {}", config.port);

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    tracing::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
}
