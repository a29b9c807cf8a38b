use anyhow::Context;
use tracing::info;

use heartchase::{app::App, config::Config, logging};

fn main() -> anyhow::Result<()> {
    logging::setup_logging().context("Could not set global default subscriber")?;

    let config = Config::load()?;
    info!(?config, "Configuration loaded");

    let mut app = App::new(&config)?;
    app.run();

    Ok(())
}
