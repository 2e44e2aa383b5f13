use std::path::PathBuf;

mod backend_bridge;
mod controller;
mod media;
mod ui;

use anyhow::Context as _;
use clap::Parser;
use crossbeam_channel::bounded;
use eframe::egui;
use site_core::config::parse_endpoint;
use site_core::load_settings;
use tracing_subscriber::EnvFilter;

use crate::backend_bridge::commands::BackendCommand;
use crate::controller::events::UiEvent;
use crate::controller::reducer::SiteState;
use crate::ui::SiteApp;

#[derive(Parser, Debug)]
#[command(name = "businesslogics-site", about = "BusinessLogics site as a desktop app")]
struct Cli {
    /// Lead collection endpoint, overriding settings and environment.
    #[arg(long)]
    endpoint: Option<String>,
    /// Settings file. Defaults to `site.toml` in the working directory when present.
    #[arg(long)]
    config: Option<PathBuf>,
    /// Initial route, e.g. `/work`.
    #[arg(long, default_value = "/")]
    path: String,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();
    let cli = Cli::parse();

    let mut settings = load_settings(cli.config.as_deref()).context("failed to load site settings")?;
    if let Some(raw) = cli.endpoint.as_deref() {
        settings.endpoint_url = parse_endpoint(raw).context("invalid --endpoint")?;
    }
    tracing::info!(
        endpoint = %settings.endpoint_url,
        reset_delay_ms = settings.reset_delay.as_millis() as u64,
        path = %cli.path,
        "starting site"
    );

    let (cmd_tx, cmd_rx) = bounded::<BackendCommand>(256);
    let (ui_tx, ui_rx) = bounded::<UiEvent>(2048);
    let backend = backend_bridge::runtime::launch(&settings, cmd_rx, ui_tx);

    let state = SiteState::new(&settings, &cli.path, cmd_tx);
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("BusinessLogics")
            .with_inner_size([1280.0, 820.0])
            .with_min_inner_size([360.0, 560.0]),
        ..Default::default()
    };
    eframe::run_native(
        "BusinessLogics",
        options,
        Box::new(move |cc| Ok(Box::new(SiteApp::new(cc, state, ui_rx)))),
    )
    .map_err(|err| anyhow::anyhow!("site window failed: {err}"))?;

    if backend.join().is_err() {
        tracing::error!("backend worker panicked");
    }
    Ok(())
}
