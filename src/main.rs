//! Shopdash
//!
//! Catalogue administration dashboard.
//!
//! This is the main entry point for the Dioxus desktop application.

use shopdash_core::DashboardConfig;
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    let (config, source) = DashboardConfig::discover()?;

    // RUST_LOG overrides the configured filter
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log_filter));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    tracing::info!(
        source = %source,
        locale = %config.locale,
        data_path = ?config.data_path,
        "configuration loaded"
    );

    shopdash_ui::launch(config);
    Ok(())
}
