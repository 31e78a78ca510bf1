use std::path::PathBuf;
use std::sync::Arc;

use clap::Parser;
use dixi_config::Config;
use tokio::signal;
use tracing_subscriber::EnvFilter;

pub mod controller;
pub mod events;
pub mod io;
pub mod render;
pub mod state;
pub mod view;

#[cfg(test)]
mod tests;

use self::controller::AppController;
use self::state::AppState;

/// Terminal client for the Aromanian dictionary
#[derive(Parser, Debug)]
#[command(name = "dixi", version, about)]
struct Args {
    /// Dictionary API base URL, overrides DIXI_API_URL
    #[arg(long)]
    api_url: Option<String>,

    /// Directory for the theme and recent searches, overrides DIXI_DATA_DIR
    #[arg(long)]
    data_dir: Option<PathBuf>,

    /// Emit logs as JSON lines
    #[arg(long)]
    log_json: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let args = Args::parse();
    init_tracing(args.log_json);

    let mut config = Config::new();
    if let Some(url) = args.api_url {
        config.network.api_url = url.trim_end_matches('/').to_string();
    }
    if let Some(dir) = args.data_dir {
        config.storage.data_dir = Some(dir);
    }
    tracing::info!("Using dictionary API at {}", config.network.api_url);

    let state = Arc::new(AppState::new(config)?);
    let app = AppController::new(state);
    let mut tasks = app.spawn_tasks();

    tokio::select! {
        _ = signal::ctrl_c() => {
            tracing::info!("Shutdown requested");
        }
        Some(result) = tasks.join_next() => {
            match result {
                Ok(Ok(())) => tracing::debug!("task finished"),
                Ok(Err(e)) => tracing::error!("task failed: {e}"),
                Err(e) => tracing::error!("task panicked: {e}"),
            }
        }
    }

    app.shutdown();
    while let Some(result) = tasks.join_next().await {
        match result {
            Ok(Ok(())) => {}
            Ok(Err(e)) => tracing::error!("task failed during shutdown: {e}"),
            Err(e) => tracing::error!("task panicked during shutdown: {e}"),
        }
    }

    Ok(())
}

/// Logs go to stderr so they never interleave with rendered output
fn init_tracing(json: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("dixi=info"));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);

    if json {
        builder.json().init();
    } else {
        builder.with_target(false).init();
    }
}
