mod app;
mod config;
mod data;
mod grid;
mod state;
mod ui;

use anyhow::anyhow;
use app::MoneyDashApp;
use config::DashConfig;
use data::fetch::Fetcher;
use eframe::egui;

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let config = DashConfig::default();
    let fetcher = Fetcher::from_config(&config)?;

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size(config.window_size)
            .with_min_inner_size(config.min_window_size),
        ..Default::default()
    };

    log::info!(
        "Starting with MTL={} MAL={}",
        config.mtl_url,
        config.mal_url
    );

    eframe::run_native(
        "Money Dash",
        options,
        Box::new(move |_cc| Ok(Box::new(MoneyDashApp::new(&config, fetcher)))),
    )
    .map_err(|e| anyhow!("UI error: {e}"))
}
