mod bootstrap;
mod health;
mod webhook;

use std::time::Duration;

use anyhow::Result;
use campusbot_core::config::{AppConfig, LoadOptions};

fn init_logging(config: &AppConfig) {
    use campusbot_core::config::LogFormat::*;
    use tracing::Level;

    let log_level = config.logging.level.parse::<Level>().unwrap_or(Level::INFO);

    match config.logging.format {
        Compact => {
            tracing_subscriber::fmt().with_target(false).with_max_level(log_level).compact().init();
        }
        Pretty => {
            tracing_subscriber::fmt().with_target(false).with_max_level(log_level).pretty().init();
        }
        Json => {
            tracing_subscriber::fmt().with_target(false).with_max_level(log_level).json().init();
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    run().await
}

pub async fn run() -> Result<()> {
    // Load config and initialize logging before any other operations
    let config = AppConfig::load(LoadOptions::default())?;
    init_logging(&config);

    let app = bootstrap::bootstrap_with_config(config);
    let drain_window = Duration::from_secs(app.config.server.graceful_shutdown_secs);
    let address = format!("{}:{}", app.config.server.bind_address, app.config.server.port);

    let router = webhook::router(app.registry.clone()).merge(health::router(&app));
    let listener = tokio::net::TcpListener::bind(&address).await?;

    tracing::info!(
        event_name = "system.server.started",
        correlation_id = "bootstrap",
        bind_address = %address,
        actions = app.registry.len(),
        "campusbot action server listening"
    );

    let (shutdown_tx, shutdown_rx) = tokio::sync::oneshot::channel::<()>();
    let server = tokio::spawn(async move {
        axum::serve(listener, router)
            .with_graceful_shutdown(async move {
                let _ = shutdown_rx.await;
            })
            .await
    });

    tokio::signal::ctrl_c().await?;
    tracing::info!(
        event_name = "system.server.stopping",
        correlation_id = "shutdown",
        "campusbot action server stopping"
    );

    let _ = shutdown_tx.send(());
    match tokio::time::timeout(drain_window, server).await {
        Ok(joined) => joined??,
        Err(_) => {
            tracing::warn!(
                event_name = "system.server.drain_timeout",
                correlation_id = "shutdown",
                drain_secs = drain_window.as_secs(),
                "in-flight requests did not drain in time; exiting"
            );
        }
    }

    Ok(())
}
