// src/backends/mod.rs
// Declares the output drivers and the trait they share.

pub mod null;
pub mod ppm;
pub mod pseudographics;
#[cfg(feature = "x11")]
pub mod window;

// --- Re-export specific driver implementations ---
pub use null::NullDriver;
pub use ppm::PpmDriver;
pub use pseudographics::{PseudoGraphicsDriver, PseudoGraphicsMode};
#[cfg(feature = "x11")]
pub use window::WindowDriver;

use anyhow::{Context, Result};
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use crate::canvas::Canvas;

/// Identifies a driver implementation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DriverKind {
    Null,
    Ppm,
    PseudoGraphics,
    Window,
}

/// Paints a canvas somewhere: a file, a terminal, a window.
///
/// A driver is created ready to render and released by `shutdown`, which must
/// be safe to call more than once.
pub trait Driver {
    fn kind(&self) -> DriverKind;

    /// Paints one frame showing the whole `canvas`.
    fn render(&mut self, canvas: &Canvas) -> Result<()>;

    /// Releases the resources held by the driver.
    fn shutdown(&mut self) -> Result<()> {
        Ok(())
    }
}

/// Opens the stream a driver writes to: the file at `path`, or stdout.
pub fn open_output(path: Option<&Path>) -> Result<Box<dyn Write>> {
    match path {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("Failed to create output file {}", path.display()))?;
            Ok(Box::new(BufWriter::new(file)))
        }
        None => Ok(Box::new(io::stdout())),
    }
}

/// True if stdout is attached to a terminal.
pub fn stdout_is_terminal() -> bool {
    // SAFETY: isatty only inspects the descriptor.
    unsafe { libc::isatty(libc::STDOUT_FILENO) == 1 }
}
