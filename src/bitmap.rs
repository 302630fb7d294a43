// src/bitmap.rs

//! The `Bitmap` trait shared by every size of monochrome bitmap in the crate,
//! and the `packed_bitmap!` macro that generates the integer-backed sizes.
//!
//! All bitmaps use the same pixel ordering: pixel `(x, y)` of a `W`x`H` bitmap
//! lives at bit `W*H - 1 - x - W*y`. The most significant bit is the top-left
//! pixel and rows are stored most significant first, so each row of an 8 pixel
//! wide bitmap is one byte and each row of a 4 pixel wide bitmap is one nibble.
//!
//! ```text
//!  size       bitmap  storage
//!  Quadrant   4x4     u16
//!  TallHalf   4x8     u32
//!  WideHalf   8x4     u32
//!  Glyph      8x8     u64
//!  TallPair   8x16    two glyphs (top, bottom)
//!  WidePair   16x8    two glyphs (left, right)
//!  Tetra      16x16   four glyphs
//! ```

use std::fmt;

/// Operations every bitmap size supports, whatever its storage.
///
/// Coordinates are unchecked: `x` must be below `WIDTH` and `y` below
/// `HEIGHT`. Out-of-range coordinates are a caller error.
pub trait Bitmap: Copy + Default + PartialEq + fmt::Debug {
    /// Width in pixels.
    const WIDTH: u32;
    /// Height in pixels.
    const HEIGHT: u32;

    /// A bitmap with exactly one pixel set, at `(x, y)`.
    fn from_pixel(x: u32, y: u32) -> Self;

    /// The value (0 or 1) of pixel `(x, y)`.
    fn pixel_value(self, x: u32, y: u32) -> u8;

    /// Whether pixel `(x, y)` is set.
    fn pixel(self, x: u32, y: u32) -> bool {
        self.pixel_value(x, y) != 0
    }

    /// True if no pixel is set.
    fn is_empty(self) -> bool;

    /// Number of set pixels.
    fn count_pixels(self) -> u32;
}

/// Defines a bitmap stored in a single unsigned integer.
///
/// Generates the newtype, its pixel addressing, row extraction, masked merge,
/// the bitwise operators, conversions from/to the raw integer, a `Display`
/// implementation drawing the bitmap as ASCII art, and the `Bitmap` impl.
macro_rules! packed_bitmap {
    (@binop $name:ident, $tr:ident, $method:ident, $tr_assign:ident, $method_assign:ident, $op:tt) => {
        impl ::std::ops::$tr for $name {
            type Output = Self;
            #[inline]
            fn $method(self, rhs: Self) -> Self {
                Self(self.0 $op rhs.0)
            }
        }

        impl ::std::ops::$tr_assign for $name {
            #[inline]
            fn $method_assign(&mut self, rhs: Self) {
                self.0 = self.0 $op rhs.0;
            }
        }
    };

    ($(#[$meta:meta])* $name:ident, $bits:ty, $width:expr, $height:expr) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
        #[repr(transparent)]
        pub struct $name(pub $bits);

        impl $name {
            /// Width in pixels.
            pub const WIDTH: u32 = $width;
            /// Height in pixels.
            pub const HEIGHT: u32 = $height;
            /// No pixel set.
            pub const EMPTY: Self = Self(0);
            /// Every pixel set.
            pub const FULL: Self = Self(!0);

            // Bits of one row, right aligned.
            const ROW_MASK: $bits = ((1u16 << $width) - 1) as $bits;

            /// Index of the bit representing pixel `(x, y)`.
            #[inline]
            pub const fn pixel_index(x: u32, y: u32) -> u32 {
                (Self::WIDTH * Self::HEIGHT - 1) - x - Self::WIDTH * y
            }

            /// A bitmap with only pixel `(x, y)` set.
            #[inline]
            pub const fn from_pixel(x: u32, y: u32) -> Self {
                Self(1 << Self::pixel_index(x, y))
            }

            /// The value (0 or 1) of pixel `(x, y)`.
            #[inline]
            pub const fn pixel_value(self, x: u32, y: u32) -> u8 {
                ((self.0 >> Self::pixel_index(x, y)) & 1) as u8
            }

            /// Copy with pixel `(x, y)` set.
            #[inline]
            pub const fn with_pixel(self, x: u32, y: u32) -> Self {
                Self(self.0 | Self::from_pixel(x, y).0)
            }

            /// Copy with pixel `(x, y)` cleared.
            #[inline]
            pub const fn without_pixel(self, x: u32, y: u32) -> Self {
                Self(self.0 & !Self::from_pixel(x, y).0)
            }

            /// Copy with pixel `(x, y)` inverted.
            #[inline]
            pub const fn toggled_pixel(self, x: u32, y: u32) -> Self {
                Self(self.0 ^ Self::from_pixel(x, y).0)
            }

            /// The raw bits.
            #[inline]
            pub const fn bits(self) -> $bits {
                self.0
            }

            /// True if no pixel is set.
            #[inline]
            pub const fn is_empty(self) -> bool {
                self.0 == 0
            }

            /// Number of set pixels.
            #[inline]
            pub const fn count_pixels(self) -> u32 {
                self.0.count_ones()
            }

            /// Row `n` (0 = top), right aligned, one bit per pixel with the
            /// leftmost pixel in the most significant position.
            #[inline]
            pub const fn line(self, n: u32) -> u8 {
                ((self.0 >> (Self::WIDTH * (Self::HEIGHT - 1 - n))) & Self::ROW_MASK) as u8
            }

            /// Builds a bitmap from its rows, top first. Missing rows are
            /// empty, extra rows and bits outside the row width are ignored.
            pub fn from_lines(lines: &[u8]) -> Self {
                let mut bits: $bits = 0;
                for n in 0..Self::HEIGHT {
                    let row = lines.get(n as usize).copied().unwrap_or(0) as $bits;
                    bits |= (row & Self::ROW_MASK) << (Self::WIDTH * (Self::HEIGHT - 1 - n));
                }
                Self(bits)
            }

            /// Masked merge: takes the bits of `other` where `mask` is set and
            /// the bits of `self` elsewhere.
            ///
            /// Same result as `(self & !mask) | (other & mask)` with one less
            /// operation.
            #[inline]
            pub const fn merge(self, other: Self, mask: Self) -> Self {
                Self(self.0 ^ ((self.0 ^ other.0) & mask.0))
            }
        }

        impl $crate::bitmap::Bitmap for $name {
            const WIDTH: u32 = $width;
            const HEIGHT: u32 = $height;

            #[inline]
            fn from_pixel(x: u32, y: u32) -> Self {
                $name::from_pixel(x, y)
            }

            #[inline]
            fn pixel_value(self, x: u32, y: u32) -> u8 {
                $name::pixel_value(self, x, y)
            }

            #[inline]
            fn is_empty(self) -> bool {
                $name::is_empty(self)
            }

            #[inline]
            fn count_pixels(self) -> u32 {
                $name::count_pixels(self)
            }
        }

        impl From<$bits> for $name {
            #[inline]
            fn from(bits: $bits) -> Self {
                Self(bits)
            }
        }

        impl From<$name> for $bits {
            #[inline]
            fn from(bitmap: $name) -> Self {
                bitmap.0
            }
        }

        impl ::std::ops::Not for $name {
            type Output = Self;
            #[inline]
            fn not(self) -> Self {
                Self(!self.0)
            }
        }

        $crate::bitmap::packed_bitmap!(@binop $name, BitAnd, bitand, BitAndAssign, bitand_assign, &);
        $crate::bitmap::packed_bitmap!(@binop $name, BitOr, bitor, BitOrAssign, bitor_assign, |);
        $crate::bitmap::packed_bitmap!(@binop $name, BitXor, bitxor, BitXorAssign, bitxor_assign, ^);

        impl ::std::fmt::Display for $name {
            /// Draws the bitmap with `#` for set pixels and `.` for clear ones,
            /// one line per row.
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                for y in 0..Self::HEIGHT {
                    if y > 0 {
                        writeln!(f)?;
                    }
                    for x in 0..Self::WIDTH {
                        let c = if self.pixel_value(x, y) != 0 { '#' } else { '.' };
                        write!(f, "{}", c)?;
                    }
                }
                Ok(())
            }
        }
    };
}

pub(crate) use packed_bitmap;
