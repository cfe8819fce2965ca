use std::io;

use anyhow::Result;
use log::info;

mod demo;
mod heroes;

fn main() -> Result<()> {
    // Initialize logger
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    info!("Starting Hero Factory...");

    let stdout = io::stdout();
    demo::run(&mut stdout.lock())?;

    info!("Showcase finished, shutting down...");
    Ok(())
}
