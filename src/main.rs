use anyhow::{Context, Result};
use taskpad::{config::Config, logger, ui};

#[tokio::main]
async fn main() -> Result<()> {
    // Generate a config file and exit when asked to
    if std::env::args().any(|arg| arg == "--init-config") {
        let path = Config::get_default_config_path()?;
        Config::generate_default_config(&path)?;
        return Ok(());
    }

    let config = Config::load().context("Failed to load configuration")?;
    logger::init(&config.logging).context("Failed to initialize logging")?;

    log::info!("Starting taskpad");

    // Run the TUI application
    ui::run_app(config).await?;

    log::info!("Exiting taskpad");

    Ok(())
}
