//! # Taskdeck Server
//!
//! Serves the todo REST API from an in-memory store. Configuration comes
//! from `taskdeck.toml` (optional), `.env` and the process environment;
//! `--host` and `--port` override both.

use std::{path::PathBuf, sync::Arc};

use anyhow::Context;
use clap::Parser;
use taskdeck_config::{ConfigLoad, ConfigLoader};
use taskdeck_core::{InMemoryTodoStore, TodoStore, demo};
use taskdeck_server::{
    AppState, create_app, infra::startup::log_config_warnings,
};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// CLI entry point
#[derive(Parser, Debug)]
#[command(name = "taskdeck-server")]
#[command(about = "Todo service with paged, sorted and filtered listings")]
struct Cli {
    /// Server port (overrides config)
    #[arg(short, long, env = "SERVER_PORT")]
    port: Option<u16>,

    /// Server host (overrides config)
    #[arg(long, env = "SERVER_HOST")]
    host: Option<String>,

    /// Path to a TOML configuration file
    #[arg(long, env = "TASKDECK_CONFIG_PATH")]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut loader = ConfigLoader::new();
    if let Some(path) = cli.config.clone() {
        loader = loader.with_config_path(path);
    }
    let ConfigLoad {
        mut config,
        warnings,
    } = loader.load().context("failed to load configuration")?;

    if let Some(port) = cli.port {
        config.server.port = port;
    }
    if let Some(host) = cli.host {
        config.server.host = host;
    }

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,tower_http=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    if config.metadata.env_file_loaded {
        info!("loaded .env file");
    }
    if let Some(path) = config.metadata.config_path.as_ref() {
        info!(path = %path.display(), "configuration file loaded");
    }
    log_config_warnings(&warnings);
    info!(
        sortable_access = ?config.listing.sortable_access,
        "list sorting contract"
    );

    let store = Arc::new(InMemoryTodoStore::new());
    if config.demo.seed {
        demo::seed(store.as_ref())
            .await
            .context("failed to seed demo todos")?;
    }
    let store: Arc<dyn TodoStore> = store;

    let bind_address = config.server.bind_address();
    let state = AppState::new(Arc::new(config), store);
    let app = create_app(state);

    let listener = tokio::net::TcpListener::bind(&bind_address)
        .await
        .with_context(|| format!("failed to bind {bind_address}"))?;
    info!("Starting Taskdeck Server on {}", bind_address);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    info!("Taskdeck Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        warn!(error = %err, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    info!("shutdown signal received");
}
