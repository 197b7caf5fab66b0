use crate::api::{self, AppState};
use crate::config::ServerConfig;
use anyhow::Context;
use luckydraw_core::Storage;
use std::sync::Arc;

pub async fn serve(config: &ServerConfig, storage: Arc<Storage>) -> anyhow::Result<()> {
    config.validate()?;

    let settlement = luckydraw_game::settlement_for(storage, config.game.clone())?;
    let app = api::router(AppState::new(Arc::new(settlement)));

    let listener = tokio::net::TcpListener::bind(config.bind)
        .await
        .with_context(|| format!("failed to bind {}", config.bind))?;
    tracing::info!(
        "Listening on {} (numbers 1-{})",
        config.bind,
        config.game.max_number
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    tracing::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
    }
}
