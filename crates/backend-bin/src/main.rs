// ============================
// crates/backend-bin/src/main.rs
// ============================
//! Server entry point: load settings, load the model, serve until Ctrl+C.
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

use arbor_backend_lib::{
    config::{Settings, DEFAULT_CONFIG_FILE},
    model,
    router::create_router,
    AppState,
};

/// Token-guarded HTTP service around a pre-trained decision-tree classifier.
#[derive(Parser, Debug)]
#[command(name = "arbor", version)]
struct Args {
    /// Path to the TOML configuration file.
    #[arg(long, default_value = DEFAULT_CONFIG_FILE)]
    config: PathBuf,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();

    let settings = Settings::load_from(&args.config).with_context(|| {
        format!(
            "failed to load configuration from {} \
             (auth.username, auth.password and auth.secret have no defaults)",
            args.config.display()
        )
    })?;

    // A missing or broken artifact is not fatal; the server comes up and
    // refuses prediction requests instead.
    let loaded = model::load_or_warn(&settings.model.path);

    let addr = settings.bind_addr();
    let state = AppState::new(settings, loaded);
    let app = create_router(state);

    let listener = TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    tracing::info!(%addr, "listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    Ok(())
}

async fn shutdown_signal() {
    tokio::signal::ctrl_c()
        .await
        .expect("failed to install Ctrl+C handler");
    tracing::info!("shutting down");
}
