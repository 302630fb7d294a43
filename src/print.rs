// src/print.rs

//! Writes text into a canvas using the mini-font.
//!
//! Text can be laid out at four granularities. The cursor moves in units of
//! the chosen layout: whole glyphs, wide halves (two rows per glyph), tall
//! halves (two columns per glyph) or quadrants (two of each). Each character
//! only replaces its part of a cell; the rest of the cell is kept.
//!
//! When the cursor passes the right edge it moves to the start of the next
//! line, and after the last line it goes back to the first one. `'\n'` starts
//! a new line. Every print function returns the cursor position after the
//! last character, so consecutive calls continue where the previous stopped.

use crate::canvas::Canvas;
use crate::font;
use crate::glyph::Glyph;
use crate::half::{TallHalf, WideHalf};
use crate::quadrant::Quadrant;

/// Granularity of the text cursor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextLayout {
    /// One 8x8 character per glyph.
    Glyph,
    /// 8x4 characters, two per glyph stacked vertically.
    WideHalf,
    /// 4x8 characters, two per glyph side by side.
    TallHalf,
    /// 4x4 characters, four per glyph.
    Quadrant,
}

impl TextLayout {
    /// Character columns per glyph.
    pub const fn columns_per_cell(self) -> usize {
        match self {
            TextLayout::Glyph | TextLayout::WideHalf => 1,
            TextLayout::TallHalf | TextLayout::Quadrant => 2,
        }
    }

    /// Character rows per glyph.
    pub const fn rows_per_cell(self) -> usize {
        match self {
            TextLayout::Glyph | TextLayout::TallHalf => 1,
            TextLayout::WideHalf | TextLayout::Quadrant => 2,
        }
    }

    // The shape of `c` placed in the part of a cell given by the sub-cell
    // position, and the mask of that part.
    fn stamp(self, c: char, column: usize, row: usize) -> (Glyph, Glyph) {
        match self {
            TextLayout::Glyph => (font::chr(c), Glyph::FULL),
            TextLayout::WideHalf => {
                let half = font::chr_widehalf(c);
                if row == 0 {
                    (Glyph::glyph2_wide(half, WideHalf::EMPTY), Glyph::TOP)
                } else {
                    (Glyph::glyph2_wide(WideHalf::EMPTY, half), Glyph::BOTTOM)
                }
            }
            TextLayout::TallHalf => {
                let half = font::chr_tallhalf(c);
                if column == 0 {
                    (Glyph::glyph2_tall(half, TallHalf::EMPTY), Glyph::LEFT)
                } else {
                    (Glyph::glyph2_tall(TallHalf::EMPTY, half), Glyph::RIGHT)
                }
            }
            TextLayout::Quadrant => {
                let q = font::chr_quadrant(c);
                let e = Quadrant::EMPTY;
                match (column, row) {
                    (0, 0) => (Glyph::glyph4(q, e, e, e), Glyph::TOP_LEFT),
                    (_, 0) => (Glyph::glyph4(e, q, e, e), Glyph::TOP_RIGHT),
                    (0, _) => (Glyph::glyph4(e, e, q, e), Glyph::BOTTOM_LEFT),
                    (_, _) => (Glyph::glyph4(e, e, e, q), Glyph::BOTTOM_RIGHT),
                }
            }
        }
    }
}

/// Prints `text` with the cursor at `(x, y)`, in units of `layout`.
///
/// Negative coordinates are clamped to 0. Returns the cursor position after
/// the last character. On a null canvas nothing is printed and the cursor is
/// returned unchanged.
pub fn print_with(canvas: &Canvas, layout: TextLayout, x: i32, y: i32, text: &str) -> (i32, i32) {
    if canvas.is_null() {
        return (x, y);
    }
    let (cpc, rpc) = (layout.columns_per_cell(), layout.rows_per_cell());
    let columns = canvas.width() * cpc;
    let rows = canvas.height() * rpc;
    let mut cx = usize::try_from(x).unwrap_or(0);
    let mut cy = usize::try_from(y).unwrap_or(0);

    for c in text.chars() {
        if c == '\n' {
            cx = 0;
            cy += 1;
            continue;
        }
        if cx >= columns {
            cx = 0;
            cy += 1;
        }
        if cy >= rows {
            cy = 0;
        }
        let (stamp, mask) = layout.stamp(c, cx % cpc, cy % rpc);
        canvas.update_glyph(cx / cpc, cy / rpc, |g| g.merge(stamp, mask));
        cx += 1;
    }
    (saturating_i32(cx), saturating_i32(cy))
}

fn saturating_i32(n: usize) -> i32 {
    i32::try_from(n).unwrap_or(i32::MAX)
}

/// Prints one character per glyph, `(x, y)` in glyph coordinates.
pub fn print(canvas: &Canvas, x: i32, y: i32, text: &str) -> (i32, i32) {
    print_with(canvas, TextLayout::Glyph, x, y, text)
}

/// Prints 8x4 characters, `x` in glyphs and `y` in half glyphs.
pub fn print_widehalf(canvas: &Canvas, x: i32, y: i32, text: &str) -> (i32, i32) {
    print_with(canvas, TextLayout::WideHalf, x, y, text)
}

/// Prints 4x8 characters, `x` in half glyphs and `y` in glyphs.
pub fn print_tallhalf(canvas: &Canvas, x: i32, y: i32, text: &str) -> (i32, i32) {
    print_with(canvas, TextLayout::TallHalf, x, y, text)
}

/// Prints 4x4 characters, `(x, y)` in half glyphs.
pub fn print_quadrant(canvas: &Canvas, x: i32, y: i32, text: &str) -> (i32, i32) {
    print_with(canvas, TextLayout::Quadrant, x, y, text)
}
