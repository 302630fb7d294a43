// src/canvas.rs

//! `Canvas`: a 2D grid of glyphs viewed through a strided window over a
//! shared glyph buffer.
//!
//! Cell `(x, y)` of a canvas lives at `offset + x + y * stride` in its buffer.
//! Cropping a canvas yields a new view on the *same* buffer, so writes through
//! a crop are visible through its parent and the other way round. The buffer is
//! reference counted: a view keeps its storage alive, so a crop can never
//! outlive the glyphs it points to.
//!
//! Cells are `Cell<Glyph>`, which lets every view write through `&self`. This
//! also makes canvases `!Send`: a buffer and all its views belong to one thread.
//!
//! Two coordinate spaces are used:
//! - glyph coordinates address cells (`0 <= x < width`, `0 <= y < height`);
//! - pixel coordinates are 8 times finer (`0 <= x < 8 * width`, ...).

use std::cell::Cell;
use std::fmt;
use std::rc::Rc;

use log::trace;

use crate::glyph::{Glyph, GLYPH_HEIGHT, GLYPH_WIDTH};
use crate::rect::Rect;

/// Shared backing storage for canvases.
pub type GlyphBuffer = Rc<[Cell<Glyph>]>;

/// Allocates a buffer of `len` empty glyphs.
pub fn glyph_buffer(len: usize) -> GlyphBuffer {
    (0..len).map(|_| Cell::new(Glyph::EMPTY)).collect()
}

/// A view over a rectangular region of a glyph buffer.
///
/// The null canvas has no buffer and a 0x0 size. Cloning a canvas is cheap and
/// yields another view on the same storage.
#[derive(Clone, Default)]
pub struct Canvas {
    buffer: Option<GlyphBuffer>,
    offset: usize,
    width: usize,
    height: usize,
    stride: usize,
}

impl fmt::Debug for Canvas {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Canvas")
            .field("buffer_len", &self.storage().len())
            .field("offset", &self.offset)
            .field("width", &self.width)
            .field("height", &self.height)
            .field("stride", &self.stride)
            .finish()
    }
}

impl Canvas {
    /// The canvas with no storage.
    pub const NULL: Canvas = Canvas {
        buffer: None,
        offset: 0,
        width: 0,
        height: 0,
        stride: 0,
    };

    /// A canvas over a freshly allocated buffer of `width * height` empty
    /// glyphs. A zero dimension gives the null canvas.
    pub fn new(width: usize, height: usize) -> Canvas {
        if width == 0 || height == 0 {
            return Canvas::NULL;
        }
        Canvas::from_buffer(glyph_buffer(width * height), width, height, width)
    }

    /// A view over a caller supplied buffer, starting at its first glyph.
    ///
    /// `stride` must be at least `width` and the buffer must hold the last
    /// cell, `(height - 1) * stride + width` glyphs. A zero dimension gives
    /// the null canvas.
    pub fn from_buffer(buffer: GlyphBuffer, width: usize, height: usize, stride: usize) -> Canvas {
        if width == 0 || height == 0 {
            return Canvas::NULL;
        }
        debug_assert!(stride >= width, "stride {} < width {}", stride, width);
        debug_assert!(
            (height - 1) * stride + width <= buffer.len(),
            "{}x{} canvas with stride {} does not fit in {} glyphs",
            width,
            height,
            stride,
            buffer.len()
        );
        Canvas {
            buffer: Some(buffer),
            offset: 0,
            width,
            height,
            stride,
        }
    }

    // --- Geometry ---

    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    #[inline]
    pub fn stride(&self) -> usize {
        self.stride
    }

    /// Width in pixels.
    #[inline]
    pub fn pixel_width(&self) -> usize {
        self.width * GLYPH_WIDTH as usize
    }

    /// Height in pixels.
    #[inline]
    pub fn pixel_height(&self) -> usize {
        self.height * GLYPH_HEIGHT as usize
    }

    /// True if the canvas has no storage or no cells.
    #[inline]
    pub fn is_null(&self) -> bool {
        self.buffer.is_none() || self.width == 0 || self.height == 0
    }

    /// Whether both canvases are views on the same buffer.
    pub fn shares_storage_with(&self, other: &Canvas) -> bool {
        match (&self.buffer, &other.buffer) {
            (Some(a), Some(b)) => Rc::ptr_eq(a, b),
            _ => false,
        }
    }

    #[inline]
    fn storage(&self) -> &[Cell<Glyph>] {
        self.buffer.as_deref().unwrap_or(&[])
    }

    #[inline]
    fn index(&self, x: usize, y: usize) -> usize {
        self.offset + x + y * self.stride
    }

    // Converts checked coordinates, `None` when outside the canvas.
    #[inline]
    fn cell_coords(&self, x: i32, y: i32) -> Option<(usize, usize)> {
        let (x, y) = (usize::try_from(x).ok()?, usize::try_from(y).ok()?);
        (!self.is_null() && x < self.width && y < self.height).then_some((x, y))
    }

    // --- Unchecked cell access ---
    // Coordinates must be inside the canvas. Out-of-range coordinates either
    // panic or address a neighbouring cell of the buffer.

    /// The cell holding glyph `(x, y)`.
    #[inline]
    pub fn glyph_cell(&self, x: usize, y: usize) -> &Cell<Glyph> {
        debug_assert!(
            x < self.width && y < self.height,
            "({}, {}) outside {}x{}",
            x,
            y,
            self.width,
            self.height
        );
        &self.storage()[self.index(x, y)]
    }

    #[inline]
    pub fn glyph(&self, x: usize, y: usize) -> Glyph {
        self.glyph_cell(x, y).get()
    }

    #[inline]
    pub fn set_glyph(&self, x: usize, y: usize, glyph: Glyph) {
        self.glyph_cell(x, y).set(glyph);
    }

    /// Replaces glyph `(x, y)` by `f` applied to it.
    #[inline]
    pub fn update_glyph(&self, x: usize, y: usize, f: impl FnOnce(Glyph) -> Glyph) {
        let cell = self.glyph_cell(x, y);
        cell.set(f(cell.get()));
    }

    // --- Checked cell access ---

    /// Glyph `(x, y)`, or the empty glyph if the canvas is null or the
    /// coordinates are outside of it.
    ///
    /// An empty result does not tell an empty cell from a miss; use
    /// [`Canvas::get`] when the difference matters.
    #[inline]
    pub fn at(&self, x: i32, y: i32) -> Glyph {
        self.get(x, y).unwrap_or(Glyph::EMPTY)
    }

    /// Glyph `(x, y)`, or `None` if the canvas is null or the coordinates are
    /// outside of it.
    #[inline]
    pub fn get(&self, x: i32, y: i32) -> Option<Glyph> {
        self.cell_coords(x, y).map(|(x, y)| self.glyph(x, y))
    }

    /// Writes `glyph` at `(x, y)`. Returns false, writing nothing, if the
    /// canvas is null or the coordinates are outside of it.
    pub fn put_glyph(&self, x: i32, y: i32, glyph: Glyph) -> bool {
        match self.cell_coords(x, y) {
            Some((x, y)) => {
                self.set_glyph(x, y, glyph);
                true
            }
            None => false,
        }
    }

    // --- Views ---

    /// A view on the part of this canvas covered by `area` (in glyph
    /// coordinates), sharing this canvas' storage and stride.
    ///
    /// Returns the null canvas if `area` does not intersect the canvas.
    pub fn crop(&self, area: Rect) -> Canvas {
        if self.is_null() {
            return Canvas::NULL;
        }
        let width = i32::try_from(self.width).unwrap_or(i32::MAX);
        let height = i32::try_from(self.height).unwrap_or(i32::MAX);
        let Some(clipped) = area.clipped(width, height) else {
            trace!("crop {:?} misses {}x{} canvas", area, self.width, self.height);
            return Canvas::NULL;
        };
        // Clipping guarantees non-negative position and positive size.
        let (x, y) = (clipped.x as usize, clipped.y as usize);
        let crop = Canvas {
            buffer: self.buffer.clone(),
            offset: self.index(x, y),
            width: clipped.w as usize,
            height: clipped.h as usize,
            stride: self.stride,
        };
        trace!("crop {:?} -> {:?}", area, crop);
        crop
    }

    /// Iterates over the glyphs of row `y`, left to right.
    pub fn row(&self, y: usize) -> impl Iterator<Item = Glyph> + '_ {
        debug_assert!(self.is_null() || y < self.height);
        (0..self.width).map(move |x| self.glyph(x, y))
    }

    /// Iterates over the rows of the canvas, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = impl Iterator<Item = Glyph> + '_> + '_ {
        (0..self.height).map(move |y| self.row(y))
    }

    // --- Drawing ---

    /// Fills every cell with `glyph`.
    pub fn set(&self, glyph: Glyph) {
        for y in 0..self.height {
            for x in 0..self.width {
                self.set_glyph(x, y, glyph);
            }
        }
    }

    /// Draws a one pixel wide line from `(x0, y0)` to `(x1, y1)`, both ends
    /// included, in pixel coordinates.
    ///
    /// Bresenham stepping on both axes at once. Points of the line falling
    /// outside the canvas are skipped.
    pub fn line(&self, x0: i32, y0: i32, x1: i32, y1: i32) {
        trace!("line ({}, {}) -> ({}, {}) on {:?}", x0, y0, x1, y1, self);
        if self.is_null() {
            return;
        }
        let (mut x, mut y) = (i64::from(x0), i64::from(y0));
        let (x1, y1) = (i64::from(x1), i64::from(y1));
        let dx = (x1 - x).abs();
        let dy = (y1 - y).abs();
        let sx = if x < x1 { 1 } else { -1 };
        let sy = if y < y1 { 1 } else { -1 };
        let mut err = (if dx > dy { dx } else { -dy }) / 2;

        let pixel_width = self.pixel_width() as i64;
        let pixel_height = self.pixel_height() as i64;
        let glyph_width = i64::from(GLYPH_WIDTH);
        let glyph_height = i64::from(GLYPH_HEIGHT);
        loop {
            if x >= 0 && x < pixel_width && y >= 0 && y < pixel_height {
                let bit = Glyph::from_pixel((x % glyph_width) as u32, (y % glyph_height) as u32);
                let (cx, cy) = ((x / glyph_width) as usize, (y / glyph_height) as usize);
                self.update_glyph(cx, cy, |g| g | bit);
            }
            if x == x1 && y == y1 {
                break;
            }
            let e2 = err;
            if e2 > -dx {
                err -= dy;
                x += sx;
            }
            if e2 < dy {
                err += dx;
                y += sy;
            }
        }
    }

    // --- Pixels ---

    // The cell holding pixel (x, y) and the bit of that pixel in it.
    fn pixel_cell(&self, x: i32, y: i32) -> Option<(&Cell<Glyph>, Glyph)> {
        let (px, py) = (usize::try_from(x).ok()?, usize::try_from(y).ok()?);
        if self.is_null() || px >= self.pixel_width() || py >= self.pixel_height() {
            return None;
        }
        let (gw, gh) = (GLYPH_WIDTH as usize, GLYPH_HEIGHT as usize);
        let bit = Glyph::from_pixel((px % gw) as u32, (py % gh) as u32);
        Some((self.glyph_cell(px / gw, py / gh), bit))
    }

    /// Whether pixel `(x, y)` is set. Pixels outside the canvas read as unset.
    pub fn pixel(&self, x: i32, y: i32) -> bool {
        self.pixel_cell(x, y)
            .map_or(false, |(cell, bit)| !(cell.get() & bit).is_empty())
    }

    /// Sets pixel `(x, y)`. Returns false if it is outside the canvas.
    pub fn set_pixel(&self, x: i32, y: i32) -> bool {
        self.pixel_cell(x, y)
            .map(|(cell, bit)| cell.set(cell.get() | bit))
            .is_some()
    }

    /// Clears pixel `(x, y)`. Returns false if it is outside the canvas.
    pub fn unset_pixel(&self, x: i32, y: i32) -> bool {
        self.pixel_cell(x, y)
            .map(|(cell, bit)| cell.set(cell.get() & !bit))
            .is_some()
    }

    /// Inverts pixel `(x, y)`. Returns false if it is outside the canvas.
    pub fn toggle_pixel(&self, x: i32, y: i32) -> bool {
        self.pixel_cell(x, y)
            .map(|(cell, bit)| cell.set(cell.get() ^ bit))
            .is_some()
    }
}
