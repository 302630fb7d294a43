// src/pair.rs

//! Bitmaps larger than one glyph: `TallPair` (8x16), `WidePair` (16x8) and
//! `Tetra` (16x16). They are plain aggregates of glyphs and every transform
//! is built from the glyph transforms plus a permutation of the parts.
//!
//! Rotating a tall pair by a quarter turn yields a wide pair and vice versa.

use std::fmt;

use crate::bitmap::Bitmap;
use crate::glyph::Glyph;

/// Two glyphs stacked vertically.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct TallPair {
    pub top: Glyph,
    pub bottom: Glyph,
}

/// Two glyphs side by side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct WidePair {
    pub left: Glyph,
    pub right: Glyph,
}

/// Four glyphs in a 2x2 arrangement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Tetra {
    pub top_left: Glyph,
    pub top_right: Glyph,
    pub bottom_left: Glyph,
    pub bottom_right: Glyph,
}

// Field-wise bitwise operators, merge and pixel counting for the aggregates.
macro_rules! glyph_aggregate {
    ($name:ident { $($field:ident),+ }) => {
        impl $name {
            /// Masked merge applied part by part.
            #[inline]
            pub const fn merge(self, other: Self, mask: Self) -> Self {
                $name { $($field: self.$field.merge(other.$field, mask.$field)),+ }
            }

            #[inline]
            pub const fn is_empty(self) -> bool {
                true $(&& self.$field.is_empty())+
            }

            #[inline]
            pub const fn count_pixels(self) -> u32 {
                0 $(+ self.$field.count_pixels())+
            }
        }

        impl ::std::ops::Not for $name {
            type Output = Self;
            #[inline]
            fn not(self) -> Self {
                $name { $($field: !self.$field),+ }
            }
        }

        impl ::std::ops::BitAnd for $name {
            type Output = Self;
            #[inline]
            fn bitand(self, rhs: Self) -> Self {
                $name { $($field: self.$field & rhs.$field),+ }
            }
        }

        impl ::std::ops::BitOr for $name {
            type Output = Self;
            #[inline]
            fn bitor(self, rhs: Self) -> Self {
                $name { $($field: self.$field | rhs.$field),+ }
            }
        }

        impl ::std::ops::BitXor for $name {
            type Output = Self;
            #[inline]
            fn bitxor(self, rhs: Self) -> Self {
                $name { $($field: self.$field ^ rhs.$field),+ }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                let (width, height) = (<Self as Bitmap>::WIDTH, <Self as Bitmap>::HEIGHT);
                for y in 0..height {
                    if y > 0 {
                        writeln!(f)?;
                    }
                    for x in 0..width {
                        let c = if self.pixel(x, y) { '#' } else { '.' };
                        write!(f, "{}", c)?;
                    }
                }
                Ok(())
            }
        }
    };
}

glyph_aggregate!(TallPair { top, bottom });
glyph_aggregate!(WidePair { left, right });
glyph_aggregate!(Tetra { top_left, top_right, bottom_left, bottom_right });

// --- TallPair ---

impl TallPair {
    pub const EMPTY: TallPair = TallPair::new(Glyph::EMPTY, Glyph::EMPTY);
    pub const FULL: TallPair = TallPair::new(Glyph::FULL, Glyph::FULL);
    /// A solid 8x16 block with a one pixel margin.
    pub const PLACEHOLDER: TallPair = TallPair::new(
        Glyph(0x007e_7e7e_7e7e_7e7e),
        Glyph(0x7e7e_7e7e_7e7e_7e00),
    );

    #[inline]
    pub const fn new(top: Glyph, bottom: Glyph) -> TallPair {
        TallPair { top, bottom }
    }

    #[inline]
    pub const fn flip(self) -> TallPair {
        TallPair::new(self.bottom.flip(), self.top.flip())
    }

    #[inline]
    pub const fn mirror(self) -> TallPair {
        TallPair::new(self.top.mirror(), self.bottom.mirror())
    }

    #[inline]
    pub const fn transpose(self) -> WidePair {
        WidePair::new(self.top.transpose(), self.bottom.transpose())
    }

    #[inline]
    pub const fn rotate90(self) -> WidePair {
        WidePair::new(self.top.rotate90(), self.bottom.rotate90())
    }

    #[inline]
    pub const fn rotate180(self) -> TallPair {
        TallPair::new(self.bottom.rotate180(), self.top.rotate180())
    }

    #[inline]
    pub const fn rotate270(self) -> WidePair {
        WidePair::new(self.bottom.rotate270(), self.top.rotate270())
    }
}

impl Bitmap for TallPair {
    const WIDTH: u32 = 8;
    const HEIGHT: u32 = 16;

    fn from_pixel(x: u32, y: u32) -> Self {
        if y < 8 {
            TallPair::new(Glyph::from_pixel(x, y), Glyph::EMPTY)
        } else {
            TallPair::new(Glyph::EMPTY, Glyph::from_pixel(x, y - 8))
        }
    }

    fn pixel_value(self, x: u32, y: u32) -> u8 {
        if y < 8 {
            self.top.pixel_value(x, y)
        } else {
            self.bottom.pixel_value(x, y - 8)
        }
    }

    fn is_empty(self) -> bool {
        TallPair::is_empty(self)
    }

    fn count_pixels(self) -> u32 {
        TallPair::count_pixels(self)
    }
}

// --- WidePair ---

impl WidePair {
    pub const EMPTY: WidePair = WidePair::new(Glyph::EMPTY, Glyph::EMPTY);
    pub const FULL: WidePair = WidePair::new(Glyph::FULL, Glyph::FULL);
    /// A solid 16x8 block with a one pixel margin.
    pub const PLACEHOLDER: WidePair = WidePair::new(
        Glyph(0x007f_7f7f_7f7f_7f00),
        Glyph(0x00fe_fefe_fefe_fe00),
    );

    #[inline]
    pub const fn new(left: Glyph, right: Glyph) -> WidePair {
        WidePair { left, right }
    }

    #[inline]
    pub const fn flip(self) -> WidePair {
        WidePair::new(self.left.flip(), self.right.flip())
    }

    #[inline]
    pub const fn mirror(self) -> WidePair {
        WidePair::new(self.right.mirror(), self.left.mirror())
    }

    #[inline]
    pub const fn transpose(self) -> TallPair {
        TallPair::new(self.left.transpose(), self.right.transpose())
    }

    #[inline]
    pub const fn rotate90(self) -> TallPair {
        TallPair::new(self.right.rotate90(), self.left.rotate90())
    }

    #[inline]
    pub const fn rotate180(self) -> WidePair {
        WidePair::new(self.right.rotate180(), self.left.rotate180())
    }

    #[inline]
    pub const fn rotate270(self) -> TallPair {
        TallPair::new(self.left.rotate270(), self.right.rotate270())
    }
}

impl Bitmap for WidePair {
    const WIDTH: u32 = 16;
    const HEIGHT: u32 = 8;

    fn from_pixel(x: u32, y: u32) -> Self {
        if x < 8 {
            WidePair::new(Glyph::from_pixel(x, y), Glyph::EMPTY)
        } else {
            WidePair::new(Glyph::EMPTY, Glyph::from_pixel(x - 8, y))
        }
    }

    fn pixel_value(self, x: u32, y: u32) -> u8 {
        if x < 8 {
            self.left.pixel_value(x, y)
        } else {
            self.right.pixel_value(x - 8, y)
        }
    }

    fn is_empty(self) -> bool {
        WidePair::is_empty(self)
    }

    fn count_pixels(self) -> u32 {
        WidePair::count_pixels(self)
    }
}

// --- Tetra ---

impl Tetra {
    pub const EMPTY: Tetra = Tetra::new(Glyph::EMPTY, Glyph::EMPTY, Glyph::EMPTY, Glyph::EMPTY);
    pub const FULL: Tetra = Tetra::new(Glyph::FULL, Glyph::FULL, Glyph::FULL, Glyph::FULL);
    /// A solid 16x16 block with a one pixel margin.
    pub const PLACEHOLDER: Tetra = Tetra::new(
        Glyph(0x007f_7f7f_7f7f_7f7f),
        Glyph(0x00fe_fefe_fefe_fefe),
        Glyph(0x7f7f_7f7f_7f7f_7f00),
        Glyph(0xfefe_fefe_fefe_fe00),
    );

    #[inline]
    pub const fn new(
        top_left: Glyph,
        top_right: Glyph,
        bottom_left: Glyph,
        bottom_right: Glyph,
    ) -> Tetra {
        Tetra {
            top_left,
            top_right,
            bottom_left,
            bottom_right,
        }
    }

    /// Builds a tetra from its top and bottom wide pairs.
    #[inline]
    pub const fn from_rows(top: WidePair, bottom: WidePair) -> Tetra {
        Tetra::new(top.left, top.right, bottom.left, bottom.right)
    }

    /// Builds a tetra from its left and right tall pairs.
    #[inline]
    pub const fn from_columns(left: TallPair, right: TallPair) -> Tetra {
        Tetra::new(left.top, right.top, left.bottom, right.bottom)
    }

    #[inline]
    pub const fn top(self) -> WidePair {
        WidePair::new(self.top_left, self.top_right)
    }

    #[inline]
    pub const fn bottom(self) -> WidePair {
        WidePair::new(self.bottom_left, self.bottom_right)
    }

    #[inline]
    pub const fn left(self) -> TallPair {
        TallPair::new(self.top_left, self.bottom_left)
    }

    #[inline]
    pub const fn right(self) -> TallPair {
        TallPair::new(self.top_right, self.bottom_right)
    }

    #[inline]
    pub const fn flip(self) -> Tetra {
        Tetra::new(
            self.bottom_left.flip(),
            self.bottom_right.flip(),
            self.top_left.flip(),
            self.top_right.flip(),
        )
    }

    #[inline]
    pub const fn mirror(self) -> Tetra {
        Tetra::new(
            self.top_right.mirror(),
            self.top_left.mirror(),
            self.bottom_right.mirror(),
            self.bottom_left.mirror(),
        )
    }

    #[inline]
    pub const fn transpose(self) -> Tetra {
        Tetra::new(
            self.top_left.transpose(),
            self.bottom_left.transpose(),
            self.top_right.transpose(),
            self.bottom_right.transpose(),
        )
    }

    #[inline]
    pub const fn rotate90(self) -> Tetra {
        self.mirror().transpose()
    }

    #[inline]
    pub const fn rotate180(self) -> Tetra {
        self.flip().mirror()
    }

    #[inline]
    pub const fn rotate270(self) -> Tetra {
        self.flip().transpose()
    }
}

impl Bitmap for Tetra {
    const WIDTH: u32 = 16;
    const HEIGHT: u32 = 16;

    fn from_pixel(x: u32, y: u32) -> Self {
        let mut t = Tetra::EMPTY;
        *t.part_mut(x, y) = Glyph::from_pixel(x % 8, y % 8);
        t
    }

    fn pixel_value(self, x: u32, y: u32) -> u8 {
        self.part(x, y).pixel_value(x % 8, y % 8)
    }

    fn is_empty(self) -> bool {
        Tetra::is_empty(self)
    }

    fn count_pixels(self) -> u32 {
        Tetra::count_pixels(self)
    }
}

impl Tetra {
    // The glyph holding pixel (x, y).
    fn part(self, x: u32, y: u32) -> Glyph {
        match (x < 8, y < 8) {
            (true, true) => self.top_left,
            (false, true) => self.top_right,
            (true, false) => self.bottom_left,
            (false, false) => self.bottom_right,
        }
    }

    fn part_mut(&mut self, x: u32, y: u32) -> &mut Glyph {
        match (x < 8, y < 8) {
            (true, true) => &mut self.top_left,
            (false, true) => &mut self.top_right,
            (true, false) => &mut self.bottom_left,
            (false, false) => &mut self.bottom_right,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Pixel mapping of a quarter turn counterclockwise on a w x h bitmap.
    fn rotated90(x: u32, y: u32, w: u32) -> (u32, u32) {
        (y, w - 1 - x)
    }

    #[test]
    fn tall_pair_rotations_move_pixels_counterclockwise() {
        for y in 0..16 {
            for x in 0..8 {
                let p = TallPair::from_pixel(x, y);
                let (rx, ry) = rotated90(x, y, 8);
                assert_eq!(p.rotate90(), WidePair::from_pixel(rx, ry));
                assert_eq!(p.rotate180(), TallPair::from_pixel(7 - x, 15 - y));
                assert_eq!(p.rotate270(), WidePair::from_pixel(15 - y, x));
                assert_eq!(p.transpose(), WidePair::from_pixel(y, x));
                assert_eq!(p.flip(), TallPair::from_pixel(x, 15 - y));
                assert_eq!(p.mirror(), TallPair::from_pixel(7 - x, y));
            }
        }
    }

    #[test]
    fn wide_pair_rotations_move_pixels_counterclockwise() {
        for y in 0..8 {
            for x in 0..16 {
                let p = WidePair::from_pixel(x, y);
                let (rx, ry) = rotated90(x, y, 16);
                assert_eq!(p.rotate90(), TallPair::from_pixel(rx, ry));
                assert_eq!(p.rotate180(), WidePair::from_pixel(15 - x, 7 - y));
                assert_eq!(p.rotate270(), TallPair::from_pixel(7 - y, x));
                assert_eq!(p.transpose(), TallPair::from_pixel(y, x));
                assert_eq!(p.flip(), WidePair::from_pixel(x, 7 - y));
                assert_eq!(p.mirror(), WidePair::from_pixel(15 - x, y));
            }
        }
    }

    #[test]
    fn tetra_rotations_move_pixels_counterclockwise() {
        for y in 0..16 {
            for x in 0..16 {
                let p = Tetra::from_pixel(x, y);
                let (rx, ry) = rotated90(x, y, 16);
                assert_eq!(p.rotate90(), Tetra::from_pixel(rx, ry));
                assert_eq!(p.rotate180(), Tetra::from_pixel(15 - x, 15 - y));
                assert_eq!(p.rotate270(), Tetra::from_pixel(15 - y, x));
                assert_eq!(p.transpose(), Tetra::from_pixel(y, x));
            }
        }
    }

    #[test]
    fn pair_transforms_are_involutions() {
        let tall = TallPair::new(Glyph::TODO, Glyph(0x7c02_2a02_04a8_a800));
        assert_eq!(tall.flip().flip(), tall);
        assert_eq!(tall.mirror().mirror(), tall);
        assert_eq!(tall.transpose().transpose(), tall);
        assert_eq!(tall.rotate90().rotate270(), tall);

        let wide = WidePair::new(Glyph::PLACEHOLDER, Glyph::TODO);
        assert_eq!(wide.mirror().mirror(), wide);
        assert_eq!(wide.rotate90().rotate90(), wide.rotate180());

        let tetra = Tetra::from_columns(tall, tall.mirror());
        assert_eq!(tetra.rotate90().rotate90().rotate90().rotate90(), tetra);
        assert_eq!(tetra.flip().mirror(), tetra.mirror().flip());
    }

    #[test]
    fn placeholders_have_a_one_pixel_margin() {
        fn check<B: Bitmap>(b: B) {
            for y in 0..B::HEIGHT {
                for x in 0..B::WIDTH {
                    let border = x == 0 || y == 0 || x == B::WIDTH - 1 || y == B::HEIGHT - 1;
                    assert_eq!(b.pixel(x, y), !border, "pixel ({}, {})", x, y);
                }
            }
        }
        check(TallPair::PLACEHOLDER);
        check(WidePair::PLACEHOLDER);
        check(Tetra::PLACEHOLDER);
    }

    #[test]
    fn parts_and_merge() {
        let t = Tetra::new(Glyph(1), Glyph(2), Glyph(3), Glyph(4));
        assert_eq!(Tetra::from_rows(t.top(), t.bottom()), t);
        assert_eq!(Tetra::from_columns(t.left(), t.right()), t);
        assert_eq!(t.merge(Tetra::FULL, Tetra::EMPTY), t);
        assert_eq!(t.merge(Tetra::FULL, Tetra::FULL), Tetra::FULL);
        assert_eq!(t ^ t, Tetra::EMPTY);
        assert!(Tetra::EMPTY.is_empty());
        assert_eq!(Tetra::FULL.count_pixels(), 256);
        assert_eq!(!TallPair::EMPTY, TallPair::FULL);
    }
}
