// src/backends/pseudographics.rs

//! Draws frames in a terminal with Unicode block, sextant and braille
//! characters. Each character covers a small block of canvas pixels, whose
//! size depends on the mode, from 1x1 (one full block per pixel) to 2x4
//! (braille dots).

use anyhow::{Context, Result};
use libc::{winsize, TIOCGWINSZ};
use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::io::{self, Write};
use std::mem;
use std::os::unix::io::RawFd;

use crate::backends::{Driver, DriverKind};
use crate::canvas::Canvas;
use crate::glyph::{GLYPH_HEIGHT, GLYPH_WIDTH};

const CLEAR_SCREEN_AND_HOME: &str = "\x1b[H\x1b[J";

const SPACE: char = ' ';
const FULL_BLOCK: char = '\u{2588}';
const UPPER_HALF_BLOCK: char = '\u{2580}';
const LOWER_HALF_BLOCK: char = '\u{2584}';
const LEFT_HALF_BLOCK: char = '\u{258c}';
const RIGHT_HALF_BLOCK: char = '\u{2590}';

// Indexed by top-left << 3 | top-right << 2 | bottom-left << 1 | bottom-right.
const QUADRANT_BLOCKS: [char; 16] = [
    SPACE, '\u{2597}', '\u{2596}', '\u{2584}', '\u{259d}', '\u{2590}', '\u{259e}', '\u{259f}',
    '\u{2598}', '\u{259a}', '\u{258c}', '\u{2599}', '\u{2580}', '\u{259c}', '\u{259b}', '\u{2588}',
];

const SEXTANT_BASE: u32 = 0x1fb00;
const BRAILLE_BASE: u32 = 0x2800;
// Dot weights of a braille cell, by row then column.
const BRAILLE_DOTS: [[u8; 2]; 4] = [[0x01, 0x08], [0x02, 0x10], [0x04, 0x20], [0x40, 0x80]];

/// How many canvas pixels one terminal character covers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum PseudoGraphicsMode {
    /// One full block per pixel.
    #[serde(rename = "1x1")]
    FullBlocks,
    /// Upper/lower half blocks: 1 pixel wide, 2 tall.
    #[serde(rename = "1x2")]
    HorizontalHalves,
    /// Left/right half blocks: 2 pixels wide, 1 tall.
    #[serde(rename = "2x1")]
    VerticalHalves,
    /// Quadrant blocks: 2x2 pixels.
    #[serde(rename = "2x2")]
    Quadrants,
    /// Sextants: 2x3 pixels.
    #[serde(rename = "2x3")]
    Sextants,
    /// Braille patterns: 2x4 pixels.
    #[default]
    #[serde(rename = "2x4", alias = "braille")]
    Braille,
}

impl PseudoGraphicsMode {
    /// Pixels covered by one character, `(columns, rows)`.
    pub const fn cell_size(self) -> (usize, usize) {
        match self {
            PseudoGraphicsMode::FullBlocks => (1, 1),
            PseudoGraphicsMode::HorizontalHalves => (1, 2),
            PseudoGraphicsMode::VerticalHalves => (2, 1),
            PseudoGraphicsMode::Quadrants => (2, 2),
            PseudoGraphicsMode::Sextants => (2, 3),
            PseudoGraphicsMode::Braille => (2, 4),
        }
    }

    /// Terminal size, in characters, needed to show a canvas of the given
    /// pixel size.
    pub fn frame_size(self, pixel_width: usize, pixel_height: usize) -> (usize, usize) {
        let (cw, ch) = self.cell_size();
        (pixel_width.div_ceil(cw), pixel_height.div_ceil(ch))
    }

    // The character showing the block of pixels whose top-left pixel is
    // (x, y). `pixel` reads outside the canvas as unset.
    fn character(self, pixel: impl Fn(usize, usize) -> bool, x: usize, y: usize) -> char {
        let bit = |dx: usize, dy: usize| u32::from(pixel(x + dx, y + dy));
        match self {
            PseudoGraphicsMode::FullBlocks => {
                if bit(0, 0) != 0 {
                    FULL_BLOCK
                } else {
                    SPACE
                }
            }
            PseudoGraphicsMode::HorizontalHalves => match (bit(0, 0), bit(0, 1)) {
                (0, 0) => SPACE,
                (1, 0) => UPPER_HALF_BLOCK,
                (0, _) => LOWER_HALF_BLOCK,
                _ => FULL_BLOCK,
            },
            PseudoGraphicsMode::VerticalHalves => match (bit(0, 0), bit(1, 0)) {
                (0, 0) => SPACE,
                (1, 0) => LEFT_HALF_BLOCK,
                (0, _) => RIGHT_HALF_BLOCK,
                _ => FULL_BLOCK,
            },
            PseudoGraphicsMode::Quadrants => {
                let index = bit(0, 0) << 3 | bit(1, 0) << 2 | bit(0, 1) << 1 | bit(1, 1);
                QUADRANT_BLOCKS[index as usize]
            }
            PseudoGraphicsMode::Sextants => {
                let mut n = 0;
                for row in 0..3 {
                    n |= bit(0, row) << (2 * row) | bit(1, row) << (2 * row + 1);
                }
                sextant(n)
            }
            PseudoGraphicsMode::Braille => {
                let mut dots = 0u32;
                for (row, weights) in BRAILLE_DOTS.iter().enumerate() {
                    for (column, &weight) in weights.iter().enumerate() {
                        dots |= bit(column, row) * u32::from(weight);
                    }
                }
                char::from_u32(BRAILLE_BASE + dots).unwrap_or(SPACE)
            }
        }
    }
}

// Sextant character for a 2x3 block, bit 2*row + column set for each lit
// pixel. The Unicode sextant range leaves out the four patterns that already
// exist as block elements: empty, left half, right half and full.
fn sextant(n: u32) -> char {
    match n {
        0 => SPACE,
        0b010101 => LEFT_HALF_BLOCK,
        0b101010 => RIGHT_HALF_BLOCK,
        0b111111 => FULL_BLOCK,
        _ => {
            let skipped = 1 + u32::from(n > 0b010101) + u32::from(n > 0b101010);
            char::from_u32(SEXTANT_BASE + n - skipped).unwrap_or(SPACE)
        }
    }
}

/// Encodes `canvas` as lines of text, one line per character row.
pub fn encode_pseudographics<W: Write>(
    out: &mut W,
    canvas: &Canvas,
    mode: PseudoGraphicsMode,
) -> io::Result<()> {
    let (pixel_width, pixel_height) = (canvas.pixel_width(), canvas.pixel_height());
    let (gw, gh) = (GLYPH_WIDTH as usize, GLYPH_HEIGHT as usize);
    let pixel = |x: usize, y: usize| {
        x < pixel_width
            && y < pixel_height
            && canvas.glyph(x / gw, y / gh).pixel_value((x % gw) as u32, (y % gh) as u32) != 0
    };

    let (cw, ch) = mode.cell_size();
    let mut line = String::new();
    for y in (0..pixel_height).step_by(ch) {
        line.clear();
        for x in (0..pixel_width).step_by(cw) {
            line.push(mode.character(pixel, x, y));
        }
        line.push('\n');
        out.write_all(line.as_bytes())?;
    }
    Ok(())
}

pub struct PseudoGraphicsDriver<W: Write> {
    out: W,
    mode: PseudoGraphicsMode,
    clear_terminal: bool,
    // Terminal to check the frame size against, if the output is one.
    terminal: Option<RawFd>,
    size_checked: bool,
    frame: Vec<u8>,
}

impl<W: Write> PseudoGraphicsDriver<W> {
    /// `terminal` is the descriptor of the terminal `out` writes to, if any.
    pub fn new(
        out: W,
        mode: PseudoGraphicsMode,
        clear_terminal: bool,
        terminal: Option<RawFd>,
    ) -> Self {
        info!(
            "Creating new PseudoGraphicsDriver (mode {:?}, clear {}).",
            mode, clear_terminal
        );
        PseudoGraphicsDriver {
            out,
            mode,
            clear_terminal,
            terminal,
            size_checked: false,
            frame: Vec::new(),
        }
    }

    pub fn mode(&self) -> PseudoGraphicsMode {
        self.mode
    }

    /// Gives back the output stream.
    pub fn into_inner(self) -> W {
        self.out
    }

    fn check_terminal_size(&mut self, canvas: &Canvas) {
        self.size_checked = true;
        let Some(fd) = self.terminal else {
            return;
        };
        let (columns, rows) = self.mode.frame_size(canvas.pixel_width(), canvas.pixel_height());
        match get_terminal_size_cells(fd) {
            Ok((cols, lines)) if usize::from(cols) < columns || usize::from(lines) < rows => warn!(
                "PseudoGraphicsDriver: terminal is {}x{} but frames need {}x{} characters",
                cols, lines, columns, rows
            ),
            Ok((cols, lines)) => debug!("PseudoGraphicsDriver: terminal size {}x{}", cols, lines),
            Err(e) => warn!("PseudoGraphicsDriver: cannot query terminal size: {:#}", e),
        }
    }
}

impl<W: Write> Driver for PseudoGraphicsDriver<W> {
    fn kind(&self) -> DriverKind {
        DriverKind::PseudoGraphics
    }

    fn render(&mut self, canvas: &Canvas) -> Result<()> {
        if !self.size_checked {
            self.check_terminal_size(canvas);
        }
        // The frame is built in memory so it reaches the terminal in one write.
        self.frame.clear();
        if self.clear_terminal {
            self.frame.extend_from_slice(CLEAR_SCREEN_AND_HOME.as_bytes());
        }
        encode_pseudographics(&mut self.frame, canvas, self.mode)
            .context("PseudoGraphicsDriver: Failed to encode frame")?;
        self.out
            .write_all(&self.frame)
            .context("PseudoGraphicsDriver: Failed to write frame")?;
        self.out
            .flush()
            .context("PseudoGraphicsDriver: Failed to flush output")
    }

    fn shutdown(&mut self) -> Result<()> {
        info!("PseudoGraphicsDriver: shutting down.");
        self.out
            .flush()
            .context("PseudoGraphicsDriver: Failed to flush output on shutdown")
    }
}

fn get_terminal_size_cells(fd: RawFd) -> Result<(u16, u16)> {
    // SAFETY: winsize is plain data and the ioctl only writes into it.
    unsafe {
        let mut winsz: winsize = mem::zeroed();
        if libc::ioctl(fd, TIOCGWINSZ, &mut winsz) == -1 {
            return Err(anyhow::Error::from(io::Error::last_os_error())
                .context("PseudoGraphicsDriver: ioctl(TIOCGWINSZ) failed"));
        }
        Ok((winsz.ws_col, winsz.ws_row))
    }
}
