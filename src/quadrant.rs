// src/quadrant.rs

//! `Quadrant`: a 4x4 bitmap packed into a `u16`, the smallest building block
//! of a glyph. Four quadrants make a glyph, two make a half.

use crate::bitmap::packed_bitmap;

packed_bitmap! {
    /// A 4x4 monochrome bitmap, one nibble per row, top row in the most
    /// significant nibble.
    Quadrant, u16, 4, 4
}

impl Quadrant {
    /// Selects the top-left 2x2 pixels.
    pub const TOP_LEFT: Quadrant = Quadrant(0xcc00);
    /// Selects the top-right 2x2 pixels.
    pub const TOP_RIGHT: Quadrant = Quadrant(0x3300);
    /// Selects the bottom-left 2x2 pixels.
    pub const BOTTOM_LEFT: Quadrant = Quadrant(0x00cc);
    /// Selects the bottom-right 2x2 pixels.
    pub const BOTTOM_RIGHT: Quadrant = Quadrant(0x0033);
    /// Selects the top two rows.
    pub const TOP: Quadrant = Quadrant(Self::TOP_LEFT.0 | Self::TOP_RIGHT.0);
    /// Selects the bottom two rows.
    pub const BOTTOM: Quadrant = Quadrant(Self::BOTTOM_LEFT.0 | Self::BOTTOM_RIGHT.0);
    /// Selects the left two columns.
    pub const LEFT: Quadrant = Quadrant(Self::TOP_LEFT.0 | Self::BOTTOM_LEFT.0);
    /// Selects the right two columns.
    pub const RIGHT: Quadrant = Quadrant(Self::TOP_RIGHT.0 | Self::BOTTOM_RIGHT.0);

    /// A solid block with a one pixel margin.
    pub const PLACEHOLDER: Quadrant = Quadrant(0x0660);

    /// Spreads the four row nibbles into the low nibble of four bytes, so the
    /// rows line up with the rows of an 8 pixel wide bitmap.
    #[inline]
    pub(crate) const fn spread_rows(self) -> u32 {
        let q = self.0 as u32;
        ((q & 0xf000) << 12) | ((q & 0x0f00) << 8) | ((q & 0x00f0) << 4) | (q & 0x000f)
    }

    /// Inverse of `spread_rows`: gathers the low nibble of four bytes.
    #[inline]
    pub(crate) const fn gather_rows(bits: u32) -> Quadrant {
        let mut x = bits & 0x0f0f_0f0f;
        x = (x | (x >> 4)) & 0x00ff_00ff;
        x = (x | (x >> 8)) & 0x0000_ffff;
        Quadrant(x as u16)
    }
}
