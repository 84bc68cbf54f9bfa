mod adapters;
mod cli;
mod config;
mod watch;

use std::io::Stdout;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use staytics_widget::{adapters::StaticInstanceRegistry, RenderTrigger, WidgetDispatcher};
use tracing_subscriber::{fmt::time::LocalTime, EnvFilter};

use adapters::{FileSnapshotProvider, JsonLinesRenderer};
use cli::{Cli, Commands};
use crate::config::Settings;

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    init_tracing();

    let cli = Cli::parse();

    match cli.command {
        Commands::ConfigPath => {
            let path = match cli.config {
                Some(path) => path,
                None => config::config_path()?,
            };
            println!("{}", path.display());
        }
        Commands::Render => {
            let settings = config::read_config(cli.config.as_deref())?;
            let (dispatcher, _) = build_dispatcher(&settings);
            let report = dispatcher
                .refresh(RenderTrigger::Refresh)
                .context("Render cycle abandoned")?;
            for skipped in &report.skipped {
                eprintln!("Skipped: {}", skipped);
            }
            for failed in &report.failed {
                eprintln!("Failed: {}", failed);
            }
        }
        Commands::Watch => {
            let settings = config::read_config(cli.config.as_deref())?;
            let (dispatcher, snapshots) = build_dispatcher(&settings);
            let shutdown = async {
                if let Err(e) = tokio::signal::ctrl_c().await {
                    tracing::error!("Failed to listen for ctrl-c: {}", e);
                }
            };
            let stats = watch::watch(
                dispatcher,
                snapshots,
                settings.refresh_interval(),
                settings.state_poll_interval(),
                shutdown,
            )
            .await;
            tracing::info!(
                cycles = stats.cycles,
                state_changes = stats.state_changes,
                abandoned = stats.abandoned,
                "watch finished"
            );
        }
    }

    Ok(())
}

type HostDispatcher =
    WidgetDispatcher<FileSnapshotProvider, StaticInstanceRegistry, JsonLinesRenderer<Stdout>>;

fn build_dispatcher(settings: &Settings) -> (HostDispatcher, Arc<FileSnapshotProvider>) {
    let snapshots = Arc::new(FileSnapshotProvider::new(&settings.snapshot_path));
    let registry = Arc::new(StaticInstanceRegistry::new(settings.widgets.clone()));
    let renderer = Arc::new(JsonLinesRenderer::stdout());
    (
        WidgetDispatcher::new(Arc::clone(&snapshots), registry, renderer),
        snapshots,
    )
}

/// Logs go to stderr; stdout carries rendered views.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_timer(LocalTime::rfc_3339())
        .with_writer(std::io::stderr)
        .init();
}
