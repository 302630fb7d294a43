// src/backends/ppm.rs

//! Writes every frame as a binary PPM (P6) image, each canvas pixel scaled to
//! a `zoom_x` by `zoom_y` block of foreground or background color.
//!
//! Frames are written back to back, so the output of several frames is a
//! valid PPM stream (e.g. for `ffmpeg -f image2pipe`).

use anyhow::{Context, Result};
use log::{debug, info, warn};
use std::io::{self, Write};

use crate::backends::{Driver, DriverKind};
use crate::canvas::Canvas;
use crate::color::Rgb;
use crate::config::ColorScheme;
use crate::glyph::GLYPH_WIDTH;

/// Zoom factor used when the requested one is out of range.
pub const DEFAULT_ZOOM: u32 = 3;
/// Largest accepted zoom factor.
pub const MAX_ZOOM: u32 = 20;

pub struct PpmDriver<W: Write> {
    out: W,
    zoom_x: u32,
    zoom_y: u32,
    foreground: Rgb,
    background: Rgb,
    frames: u64,
}

impl<W: Write> PpmDriver<W> {
    /// Zoom factors outside `1..=MAX_ZOOM` are replaced by `DEFAULT_ZOOM`.
    pub fn new(out: W, zoom_x: u32, zoom_y: u32, colors: &ColorScheme) -> Self {
        let zoom_x = sanitize_zoom(zoom_x);
        let zoom_y = sanitize_zoom(zoom_y);
        info!("Creating new PpmDriver (zoom {}x{}).", zoom_x, zoom_y);
        PpmDriver {
            out,
            zoom_x,
            zoom_y,
            foreground: colors.foreground.to_rgb(),
            background: colors.background.to_rgb(),
            frames: 0,
        }
    }

    pub fn zoom(&self) -> (u32, u32) {
        (self.zoom_x, self.zoom_y)
    }

    /// Gives back the output stream.
    pub fn into_inner(self) -> W {
        self.out
    }
}

fn sanitize_zoom(zoom: u32) -> u32 {
    if (1..=MAX_ZOOM).contains(&zoom) {
        zoom
    } else {
        warn!("PpmDriver: zoom {} out of range 1..={}, using {}", zoom, MAX_ZOOM, DEFAULT_ZOOM);
        DEFAULT_ZOOM
    }
}

impl<W: Write> Driver for PpmDriver<W> {
    fn kind(&self) -> DriverKind {
        DriverKind::Ppm
    }

    fn render(&mut self, canvas: &Canvas) -> Result<()> {
        encode_ppm(
            &mut self.out,
            canvas,
            self.zoom_x as usize,
            self.zoom_y as usize,
            self.foreground,
            self.background,
        )
        .context("PpmDriver: Failed to write frame")?;
        self.out
            .flush()
            .context("PpmDriver: Failed to flush output")?;
        self.frames += 1;
        debug!("PpmDriver: frame {} written", self.frames);
        Ok(())
    }

    fn shutdown(&mut self) -> Result<()> {
        info!("PpmDriver: shutting down after {} frames.", self.frames);
        self.out
            .flush()
            .context("PpmDriver: Failed to flush output on shutdown")
    }
}

/// Encodes `canvas` as one P6 image.
pub fn encode_ppm<W: Write>(
    out: &mut W,
    canvas: &Canvas,
    zoom_x: usize,
    zoom_y: usize,
    foreground: Rgb,
    background: Rgb,
) -> io::Result<()> {
    let width = canvas.pixel_width() * zoom_x;
    let height = canvas.pixel_height() * zoom_y;
    write!(out, "P6\n{} {}\n255\n", width, height)?;

    let (fg, bg) = (foreground.to_bytes(), background.to_bytes());
    let mut line = Vec::with_capacity(width * 3);
    for y in 0..canvas.height() {
        for row in 0..GLYPH_WIDTH {
            line.clear();
            for glyph in canvas.row(y) {
                let bits = glyph.line(row);
                for x in (0..GLYPH_WIDTH).rev() {
                    let color = if bits & (1 << x) != 0 { &fg } else { &bg };
                    for _ in 0..zoom_x {
                        line.extend_from_slice(color);
                    }
                }
            }
            for _ in 0..zoom_y {
                out.write_all(&line)?;
            }
        }
    }
    Ok(())
}
