// src/glyph.rs

//! Defines the `Glyph` type, an 8x8 monochrome bitmap packed into a `u64`,
//! and the bit-level algebra on it: composition from quadrants and halves,
//! flips, transposition, rotations, measurements, shifts and masked merges.
//!
//! Layout: bit `63 - x - 8*y` holds pixel `(x, y)`. Row 0 is the most
//! significant byte, and within a row the leftmost pixel is the most
//! significant bit:
//!
//! ```text
//!  bit 63 -> (0,0) (1,0) ... (7,0) <- bit 56
//!             ...
//!  bit  7 -> (0,7) (1,7) ... (7,7) <- bit 0
//! ```
//!
//! Every transform is a bit-parallel swap network; nothing loops over
//! individual pixels.

use crate::bitmap::packed_bitmap;
use crate::half::{TallHalf, WideHalf};
use crate::quadrant::Quadrant;

packed_bitmap! {
    /// An 8x8 monochrome bitmap. Glyphs are plain values: copy them freely.
    Glyph, u64, 8, 8
}

/// Width of a glyph in pixels.
pub const GLYPH_WIDTH: u32 = 8;
/// Height of a glyph in pixels.
pub const GLYPH_HEIGHT: u32 = 8;

// Lowest bit of every row.
const COLUMN_7: u64 = 0x0101_0101_0101_0101;

impl Glyph {
    // --- Masks ---

    /// Selects the top-left 4x4 quadrant.
    pub const TOP_LEFT: Glyph = Glyph(0xf0f0_f0f0_0000_0000);
    /// Selects the top-right 4x4 quadrant.
    pub const TOP_RIGHT: Glyph = Glyph(0x0f0f_0f0f_0000_0000);
    /// Selects the bottom-left 4x4 quadrant.
    pub const BOTTOM_LEFT: Glyph = Glyph(0x0000_0000_f0f0_f0f0);
    /// Selects the bottom-right 4x4 quadrant.
    pub const BOTTOM_RIGHT: Glyph = Glyph(0x0000_0000_0f0f_0f0f);
    /// Selects the top wide half.
    pub const TOP: Glyph = Glyph(Self::TOP_LEFT.0 | Self::TOP_RIGHT.0);
    /// Selects the bottom wide half.
    pub const BOTTOM: Glyph = Glyph(Self::BOTTOM_LEFT.0 | Self::BOTTOM_RIGHT.0);
    /// Selects the left tall half.
    pub const LEFT: Glyph = Glyph(Self::TOP_LEFT.0 | Self::BOTTOM_LEFT.0);
    /// Selects the right tall half.
    pub const RIGHT: Glyph = Glyph(Self::TOP_RIGHT.0 | Self::BOTTOM_RIGHT.0);

    // --- Well-known glyphs ---

    /// A solid block with a one pixel margin.
    pub const PLACEHOLDER: Glyph = Glyph(0x007e_7e7e_7e7e_7e00);
    /// The word "TODO" squeezed into one glyph.
    pub const TODO: Glyph = Glyph(0xee4a_4e00_ceaa_ce00);
    /// Checkerboard pattern.
    pub const CHECKER: Glyph = Glyph(0xaa55_aa55_aa55_aa55);

    // --- Composition ---

    /// Builds a glyph from its four 4x4 quadrants.
    #[inline]
    pub const fn glyph4(
        top_left: Quadrant,
        top_right: Quadrant,
        bottom_left: Quadrant,
        bottom_right: Quadrant,
    ) -> Glyph {
        Glyph::glyph2_wide(
            WideHalf::from_quadrants(top_left, top_right),
            WideHalf::from_quadrants(bottom_left, bottom_right),
        )
    }

    /// Stacks two wide halves.
    #[inline]
    pub const fn glyph2_wide(top: WideHalf, bottom: WideHalf) -> Glyph {
        Glyph((top.0 as u64) << 32 | bottom.0 as u64)
    }

    /// Places two tall halves side by side.
    #[inline]
    pub const fn glyph2_tall(left: TallHalf, right: TallHalf) -> Glyph {
        Glyph(left.spread_rows() << 4 | right.spread_rows())
    }

    // --- Decomposition ---

    #[inline]
    pub const fn top_half(self) -> WideHalf {
        WideHalf((self.0 >> 32) as u32)
    }

    #[inline]
    pub const fn bottom_half(self) -> WideHalf {
        WideHalf(self.0 as u32)
    }

    #[inline]
    pub const fn left_half(self) -> TallHalf {
        TallHalf::gather_rows(self.0 >> 4)
    }

    #[inline]
    pub const fn right_half(self) -> TallHalf {
        TallHalf::gather_rows(self.0)
    }

    #[inline]
    pub const fn top_left(self) -> Quadrant {
        self.top_half().left()
    }

    #[inline]
    pub const fn top_right(self) -> Quadrant {
        self.top_half().right()
    }

    #[inline]
    pub const fn bottom_left(self) -> Quadrant {
        self.bottom_half().left()
    }

    #[inline]
    pub const fn bottom_right(self) -> Quadrant {
        self.bottom_half().right()
    }

    /// The four quadrants, in `glyph4` argument order.
    #[inline]
    pub const fn quadrants(self) -> [Quadrant; 4] {
        [
            self.top_left(),
            self.top_right(),
            self.bottom_left(),
            self.bottom_right(),
        ]
    }

    // --- Measurements ---

    /// Number of empty rows above the content (8 for an empty glyph).
    #[inline]
    pub const fn margin_top(self) -> u32 {
        if self.0 == 0 {
            GLYPH_HEIGHT
        } else {
            self.0.leading_zeros() / GLYPH_WIDTH
        }
    }

    /// Number of empty rows below the content (8 for an empty glyph).
    #[inline]
    pub const fn margin_bottom(self) -> u32 {
        if self.0 == 0 {
            GLYPH_HEIGHT
        } else {
            self.0.trailing_zeros() / GLYPH_WIDTH
        }
    }

    /// Number of empty columns left of the content (8 for an empty glyph).
    #[inline]
    pub const fn margin_left(self) -> u32 {
        self.flatten().leading_zeros()
    }

    /// Number of empty columns right of the content (8 for an empty glyph).
    #[inline]
    pub const fn margin_right(self) -> u32 {
        self.flatten().trailing_zeros()
    }

    /// Height of the content's bounding box (0 for an empty glyph).
    #[inline]
    pub const fn height(self) -> u32 {
        if self.0 == 0 {
            0
        } else {
            GLYPH_HEIGHT - self.margin_top() - self.margin_bottom()
        }
    }

    /// Width of the content's bounding box (0 for an empty glyph).
    #[inline]
    pub const fn width(self) -> u32 {
        if self.0 == 0 {
            0
        } else {
            GLYPH_WIDTH - self.margin_left() - self.margin_right()
        }
    }

    /// ORs all eight rows together: bit set for every non-empty column.
    #[inline]
    pub const fn flatten(self) -> u8 {
        let mut g = self.0;
        g |= g >> 32;
        g |= g >> 16;
        g |= g >> 8;
        g as u8
    }

    // --- Flips, transposition, rotations ---
    // Angles are counterclockwise.

    /// Mirror across the horizontal axis (top row becomes bottom row).
    #[inline]
    pub const fn flip(self) -> Glyph {
        let mut g = self.0;
        g = ((g & 0xffff_ffff_0000_0000) >> 32) | ((g & 0x0000_0000_ffff_ffff) << 32);
        g = ((g & 0xffff_0000_ffff_0000) >> 16) | ((g & 0x0000_ffff_0000_ffff) << 16);
        g = ((g & 0xff00_ff00_ff00_ff00) >> 8) | ((g & 0x00ff_00ff_00ff_00ff) << 8);
        Glyph(g)
    }

    /// Mirror across the vertical axis (leftmost column becomes rightmost).
    #[inline]
    pub const fn mirror(self) -> Glyph {
        let mut g = self.0;
        g = ((g & 0xf0f0_f0f0_f0f0_f0f0) >> 4) | ((g & 0x0f0f_0f0f_0f0f_0f0f) << 4);
        g = ((g & 0xcccc_cccc_cccc_cccc) >> 2) | ((g & 0x3333_3333_3333_3333) << 2);
        g = ((g & 0xaaaa_aaaa_aaaa_aaaa) >> 1) | ((g & 0x5555_5555_5555_5555) << 1);
        Glyph(g)
    }

    /// Reflection across the main diagonal: pixel `(x, y)` moves to `(y, x)`.
    ///
    /// Three rounds of bit interchange (2x2, 4x4 then 8x8 blocks), from
    /// Hacker's Delight.
    #[inline]
    pub const fn transpose(self) -> Glyph {
        let mut g = self.0;
        g = (g & 0xaa55_aa55_aa55_aa55)
            | ((g & 0x00aa_00aa_00aa_00aa) << 7)
            | ((g >> 7) & 0x00aa_00aa_00aa_00aa);
        g = (g & 0xcccc_3333_cccc_3333)
            | ((g & 0x0000_cccc_0000_cccc) << 14)
            | ((g >> 14) & 0x0000_cccc_0000_cccc);
        g = (g & 0xf0f0_f0f0_0f0f_0f0f)
            | ((g & 0x0000_0000_f0f0_f0f0) << 28)
            | ((g >> 28) & 0x0000_0000_f0f0_f0f0);
        Glyph(g)
    }

    #[inline]
    pub const fn rotate90(self) -> Glyph {
        self.mirror().transpose()
    }

    #[inline]
    pub const fn rotate180(self) -> Glyph {
        self.flip().mirror()
    }

    #[inline]
    pub const fn rotate270(self) -> Glyph {
        self.flip().transpose()
    }

    /// Exchanges the top and bottom wide halves.
    #[inline]
    pub const fn swap_wide_halves(self) -> Glyph {
        Glyph(self.0.rotate_left(32))
    }

    /// Exchanges the left and right tall halves.
    #[inline]
    pub const fn swap_tall_halves(self) -> Glyph {
        Glyph(((self.0 & Self::LEFT.0) >> 4) | ((self.0 & Self::RIGHT.0) << 4))
    }

    // --- Shifts ---
    // `n` must be below 8. Shifts clear the vacated pixels, cycles wrap the
    // pixels pushed out around to the other side.

    /// Moves the content `n` columns to the left.
    #[inline]
    pub const fn shift_left(self, n: u32) -> Glyph {
        debug_assert!(n < GLYPH_WIDTH);
        let keep = COLUMN_7 * ((0xff << n) & 0xff);
        Glyph((self.0 << n) & keep)
    }

    /// Moves the content `n` columns to the right.
    #[inline]
    pub const fn shift_right(self, n: u32) -> Glyph {
        debug_assert!(n < GLYPH_WIDTH);
        let keep = COLUMN_7 * (0xff >> n);
        Glyph((self.0 >> n) & keep)
    }

    /// Moves the content `n` rows up.
    #[inline]
    pub const fn shift_up(self, n: u32) -> Glyph {
        debug_assert!(n < GLYPH_HEIGHT);
        Glyph(self.0 << (GLYPH_WIDTH * n))
    }

    /// Moves the content `n` rows down.
    #[inline]
    pub const fn shift_down(self, n: u32) -> Glyph {
        debug_assert!(n < GLYPH_HEIGHT);
        Glyph(self.0 >> (GLYPH_WIDTH * n))
    }

    /// Rotates every row `n` columns to the left.
    #[inline]
    pub const fn cycle_left(self, n: u32) -> Glyph {
        debug_assert!(n < GLYPH_WIDTH);
        if n == 0 {
            return self;
        }
        let wrapped = COLUMN_7 * ((1 << n) - 1);
        Glyph(self.shift_left(n).0 | ((self.0 >> (GLYPH_WIDTH - n)) & wrapped))
    }

    /// Rotates every row `n` columns to the right.
    #[inline]
    pub const fn cycle_right(self, n: u32) -> Glyph {
        debug_assert!(n < GLYPH_WIDTH);
        self.cycle_left((GLYPH_WIDTH - n) % GLYPH_WIDTH)
    }

    /// Rotates the rows `n` positions up (`n = 4` swaps the wide halves).
    #[inline]
    pub const fn cycle_up(self, n: u32) -> Glyph {
        debug_assert!(n < GLYPH_HEIGHT);
        Glyph(self.0.rotate_left(GLYPH_WIDTH * n))
    }

    /// Rotates the rows `n` positions down.
    #[inline]
    pub const fn cycle_down(self, n: u32) -> Glyph {
        debug_assert!(n < GLYPH_HEIGHT);
        Glyph(self.0.rotate_right(GLYPH_WIDTH * n))
    }
}

/// Glyph from four quadrants. See [`Glyph::glyph4`].
#[inline]
pub const fn glyph4(
    top_left: Quadrant,
    top_right: Quadrant,
    bottom_left: Quadrant,
    bottom_right: Quadrant,
) -> Glyph {
    Glyph::glyph4(top_left, top_right, bottom_left, bottom_right)
}

/// Masked merge of two glyphs. See [`Glyph::merge`].
#[inline]
pub const fn glyph_merge(a: Glyph, b: Glyph, mask: Glyph) -> Glyph {
    a.merge(b, mask)
}

#[cfg(test)]
mod tests;
