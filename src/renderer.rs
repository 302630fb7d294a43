// src/renderer.rs

//! This module defines the `Renderer`, the front every frame goes through.
//!
//! The `Renderer` owns the active `Driver`. A failing frame never stops the
//! program: it is logged and counted, and the next frame is tried as usual.
//! `shutdown` releases the driver and falls back to the `NullDriver`, so a
//! renderer stays usable (as a no-op) for its whole lifetime.

use anyhow::{anyhow, Result};
use log::{debug, error, info, warn};
use std::mem;

use crate::backends::{
    open_output, stdout_is_terminal, Driver, DriverKind, NullDriver, PpmDriver,
    PseudoGraphicsDriver,
};
use crate::canvas::Canvas;
use crate::config::{BackendSelection, ColorScheme, RendererConfig};

pub struct Renderer {
    driver: Box<dyn Driver>,
    // Failed frames, wrapping.
    errors: u32,
    shutdown_error: Option<anyhow::Error>,
}

impl Renderer {
    /// A renderer over the `NullDriver`.
    pub fn new() -> Self {
        Renderer::with_driver(Box::new(NullDriver))
    }

    pub fn with_driver(driver: Box<dyn Driver>) -> Self {
        debug!("Renderer using {:?} driver", driver.kind());
        Renderer {
            driver,
            errors: 0,
            shutdown_error: None,
        }
    }

    /// Opens the driver selected by `config`.
    pub fn from_config(config: &RendererConfig, colors: &ColorScheme) -> Result<Self> {
        Ok(Renderer::with_driver(open_driver(config, colors)?))
    }

    /// Replaces the active driver, shutting the previous one down first.
    pub fn set_driver(&mut self, driver: Box<dyn Driver>) -> Result<()> {
        let result = self.shutdown();
        debug!("Renderer switching to {:?} driver", driver.kind());
        self.driver = driver;
        result
    }

    /// Renders one frame. Failures are logged and counted.
    pub fn render(&mut self, canvas: &Canvas) {
        if let Err(e) = self.driver.render(canvas) {
            self.errors = self.errors.wrapping_add(1);
            warn!(
                "Renderer: {:?} frame failed ({} failures so far): {:#}",
                self.driver.kind(),
                self.errors,
                e
            );
        }
    }

    /// Number of failed frames since creation, wrapping at `u32::MAX`.
    pub fn error_count(&self) -> u32 {
        self.errors
    }

    pub fn kind(&self) -> DriverKind {
        self.driver.kind()
    }

    /// Shuts the active driver down and switches to the `NullDriver`.
    ///
    /// A shutdown error is returned and also kept, see
    /// [`Renderer::take_shutdown_error`].
    pub fn shutdown(&mut self) -> Result<()> {
        let mut driver = mem::replace(&mut self.driver, Box::new(NullDriver));
        if driver.kind() == DriverKind::Null {
            return Ok(());
        }
        info!("Renderer: shutting down {:?} driver.", driver.kind());
        match driver.shutdown() {
            Ok(()) => Ok(()),
            Err(e) => {
                let report =
                    anyhow!("Renderer: {:?} driver shutdown failed: {:#}", driver.kind(), e);
                error!("{:#}", report);
                self.shutdown_error = Some(e);
                Err(report)
            }
        }
    }

    /// The error of the last failed shutdown, if any, clearing it.
    pub fn take_shutdown_error(&mut self) -> Option<anyhow::Error> {
        self.shutdown_error.take()
    }
}

impl Default for Renderer {
    fn default() -> Self {
        Renderer::new()
    }
}

impl Drop for Renderer {
    fn drop(&mut self) {
        // Errors are already logged by shutdown.
        let _ = self.shutdown();
    }
}

/// Opens the driver `config` selects.
pub fn open_driver(config: &RendererConfig, colors: &ColorScheme) -> Result<Box<dyn Driver>> {
    match config.backend {
        BackendSelection::Null => Ok(Box::new(NullDriver)),
        BackendSelection::Ppm => ppm_driver(config, colors),
        BackendSelection::PseudoGraphics => pseudographics_driver(config),
        BackendSelection::Window => window_driver(config, colors),
        BackendSelection::Auto => auto_driver(config, colors),
    }
}

fn ppm_driver(config: &RendererConfig, colors: &ColorScheme) -> Result<Box<dyn Driver>> {
    let ppm = &config.ppm;
    let out = open_output(ppm.output.as_deref())?;
    Ok(Box::new(PpmDriver::new(out, ppm.zoom_x, ppm.zoom_y, colors)))
}

fn pseudographics_driver(config: &RendererConfig) -> Result<Box<dyn Driver>> {
    let pg = &config.pseudographics;
    let out = open_output(pg.output.as_deref())?;
    let terminal = (pg.output.is_none() && stdout_is_terminal()).then_some(libc::STDOUT_FILENO);
    Ok(Box::new(PseudoGraphicsDriver::new(
        out,
        pg.mode,
        pg.clear_terminal,
        terminal,
    )))
}

#[cfg(feature = "x11")]
fn window_driver(config: &RendererConfig, colors: &ColorScheme) -> Result<Box<dyn Driver>> {
    Ok(Box::new(crate::backends::WindowDriver::new(&config.window, colors)?))
}

#[cfg(not(feature = "x11"))]
fn window_driver(_config: &RendererConfig, _colors: &ColorScheme) -> Result<Box<dyn Driver>> {
    anyhow::bail!("window backend not available: built without the `x11` feature")
}

fn auto_driver(config: &RendererConfig, colors: &ColorScheme) -> Result<Box<dyn Driver>> {
    #[cfg(feature = "x11")]
    if crate::backends::window::display_available() {
        match window_driver(config, colors) {
            Ok(driver) => return Ok(driver),
            Err(e) => warn!("Renderer: no window ({:#}), trying the terminal", e),
        }
    }
    if stdout_is_terminal() {
        pseudographics_driver(config)
    } else {
        ppm_driver(config, colors)
    }
}
