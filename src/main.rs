// src/main.rs

mod demo;

use anyhow::Context; // For context on Results
use log::{info, warn};

use glyphgrid::config::CONFIG;
use glyphgrid::{Renderer, Screen};

/// Main entry point for the `glyphgrid` demo.
fn main() -> anyhow::Result<()> {
    // Initialize the logger. Default filter is "info" if RUST_LOG is not set.
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_micros()
        .init();

    info!("Starting glyphgrid...");
    let config = &*CONFIG;
    info!(
        "Configuration loaded (backend {:?}, resolution {:?}).",
        config.renderer.backend, config.screen
    );

    let screen = Screen::new(config.screen);
    let mut renderer = Renderer::from_config(&config.renderer, &config.colors)
        .context("Failed to open the configured renderer")?;
    info!("Renderer ready: {:?} driver.", renderer.kind());

    demo::run(&screen, &mut renderer, &config.demo);

    let failures = renderer.error_count();
    if failures > 0 {
        warn!("{} frames failed to render.", failures);
    }
    renderer
        .shutdown()
        .context("Failed to shut the renderer down")?;

    info!("glyphgrid exiting.");
    Ok(())
}
