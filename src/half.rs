// src/half.rs

//! Half glyphs: `TallHalf` (4x8) and `WideHalf` (8x4), both packed into a
//! `u32`. A half is made of two quadrants and two halves make a glyph.

use crate::bitmap::packed_bitmap;
use crate::quadrant::Quadrant;

packed_bitmap! {
    /// A 4 pixel wide, 8 pixel tall bitmap: eight nibble rows.
    TallHalf, u32, 4, 8
}

packed_bitmap! {
    /// An 8 pixel wide, 4 pixel tall bitmap: four byte rows.
    WideHalf, u32, 8, 4
}

impl TallHalf {
    /// Selects the top quadrant.
    pub const TOP: TallHalf = TallHalf(0xffff_0000);
    /// Selects the bottom quadrant.
    pub const BOTTOM: TallHalf = TallHalf(0x0000_ffff);
    /// A solid block with a one pixel margin.
    pub const PLACEHOLDER: TallHalf = TallHalf(0x0666_6660);

    /// Stacks two quadrants vertically.
    #[inline]
    pub const fn from_quadrants(top: Quadrant, bottom: Quadrant) -> TallHalf {
        TallHalf((top.0 as u32) << 16 | bottom.0 as u32)
    }

    #[inline]
    pub const fn top(self) -> Quadrant {
        Quadrant((self.0 >> 16) as u16)
    }

    #[inline]
    pub const fn bottom(self) -> Quadrant {
        Quadrant(self.0 as u16)
    }

    /// Spreads the eight row nibbles into the low nibble of eight bytes,
    /// lining them up with the rows of a glyph.
    #[inline]
    pub(crate) const fn spread_rows(self) -> u64 {
        let mut x = self.0 as u64;
        x = (x | (x << 16)) & 0x0000_ffff_0000_ffff;
        x = (x | (x << 8)) & 0x00ff_00ff_00ff_00ff;
        x = (x | (x << 4)) & 0x0f0f_0f0f_0f0f_0f0f;
        x
    }

    /// Inverse of `spread_rows`: gathers the low nibble of eight bytes.
    #[inline]
    pub(crate) const fn gather_rows(bits: u64) -> TallHalf {
        let mut x = bits & 0x0f0f_0f0f_0f0f_0f0f;
        x = (x | (x >> 4)) & 0x00ff_00ff_00ff_00ff;
        x = (x | (x >> 8)) & 0x0000_ffff_0000_ffff;
        x = (x | (x >> 16)) & 0x0000_0000_ffff_ffff;
        TallHalf(x as u32)
    }
}

impl WideHalf {
    /// Selects the left quadrant.
    pub const LEFT: WideHalf = WideHalf(0xf0f0_f0f0);
    /// Selects the right quadrant.
    pub const RIGHT: WideHalf = WideHalf(0x0f0f_0f0f);
    /// A solid block with a one pixel margin.
    pub const PLACEHOLDER: WideHalf = WideHalf(0x007e_7e00);

    /// Places two quadrants side by side, interleaving their row nibbles.
    #[inline]
    pub const fn from_quadrants(left: Quadrant, right: Quadrant) -> WideHalf {
        WideHalf(left.spread_rows() << 4 | right.spread_rows())
    }

    #[inline]
    pub const fn left(self) -> Quadrant {
        Quadrant::gather_rows(self.0 >> 4)
    }

    #[inline]
    pub const fn right(self) -> Quadrant {
        Quadrant::gather_rows(self.0)
    }
}

/// Tall half made of a `top` and a `bottom` quadrant.
#[inline]
pub const fn tallhalf2(top: Quadrant, bottom: Quadrant) -> TallHalf {
    TallHalf::from_quadrants(top, bottom)
}

/// Wide half made of a `left` and a `right` quadrant.
#[inline]
pub const fn widehalf2(left: Quadrant, right: Quadrant) -> WideHalf {
    WideHalf::from_quadrants(left, right)
}
