// src/backends/null.rs

use anyhow::Result;
use log::trace;

use crate::backends::{Driver, DriverKind};
use crate::canvas::Canvas;

/// Renders nothing. This is the driver of a renderer before a real one is
/// selected and after it is shut down.
#[derive(Debug, Default)]
pub struct NullDriver;

impl Driver for NullDriver {
    fn kind(&self) -> DriverKind {
        DriverKind::Null
    }

    fn render(&mut self, canvas: &Canvas) -> Result<()> {
        trace!("NullDriver: discarding {}x{} frame", canvas.width(), canvas.height());
        Ok(())
    }
}
