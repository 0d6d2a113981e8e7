use anyhow::Context;
use dotenvy::dotenv;
use tracing::info;

use quill::{ config::logging::init_logging, initialize_app, Config };

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();
    init_logging();

    let config: Config = Config::new().context("Failed to load configuration")?;
    let addr = config.server.socket_addr();
    info!(environment = ?config.server.environment, "starting quill");

    let app = initialize_app(config).context("Failed to initialize application")?;

    let listener: tokio::net::TcpListener = tokio::net::TcpListener
        ::bind(addr).await
        .with_context(|| format!("Failed to bind {}", addr))?;
    info!("Server running on http://{}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
