// src/rect.rs

//! Axis-aligned rectangles on an integer grid.
//!
//! A rectangle has two encodings:
//! - regular (`Rect`): a corner `(x, y)` and a vector `(w, h)` to the opposite
//!   corner. `w` and `h` may be negative; `|w|` and `|h|` are the dimensions.
//! - absolute (`AbsRect`): a corner `(x, y)` and the opposite corner `(x1, y1)`.
//!
//! The two are related by `x1 = x + w` and `y1 = y + h`. A rectangle is
//! normalized when `(x, y)` is its upper-left corner, i.e. `w >= 0 && h >= 0`
//! (regular) or `x1 >= x && y1 >= y` (absolute).

/// A rectangle in regular encoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub w: i32,
    pub h: i32,
}

/// A rectangle in absolute encoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct AbsRect {
    pub x: i32,
    pub y: i32,
    pub x1: i32,
    pub y1: i32,
}

impl Rect {
    #[inline]
    pub const fn new(x: i32, y: i32, w: i32, h: i32) -> Rect {
        Rect { x, y, w, h }
    }

    /// Same rectangle in absolute encoding.
    #[inline]
    pub const fn to_absolute(self) -> AbsRect {
        AbsRect {
            x: self.x,
            y: self.y,
            x1: self.x + self.w,
            y1: self.y + self.h,
        }
    }

    #[inline]
    pub const fn is_normalized(&self) -> bool {
        self.w >= 0 && self.h >= 0
    }

    /// Moves `(x, y)` to the upper-left corner, making `w` and `h`
    /// non-negative. The covered area is unchanged.
    pub fn normalize(&mut self) {
        if self.w < 0 {
            self.x += self.w;
            self.w = -self.w;
        }
        if self.h < 0 {
            self.y += self.h;
            self.h = -self.h;
        }
    }

    /// Normalized copy.
    #[inline]
    pub fn normalized(mut self) -> Rect {
        self.normalize();
        self
    }

    /// Normalizes and converts to absolute encoding in one step.
    pub const fn normalize_to_absolute(self) -> AbsRect {
        let (x, x1) = if self.w >= 0 {
            (self.x, self.x + self.w)
        } else {
            (self.x + self.w, self.x)
        };
        let (y, y1) = if self.h >= 0 {
            (self.y, self.y + self.h)
        } else {
            (self.y + self.h, self.y)
        };
        AbsRect { x, y, x1, y1 }
    }

    /// Clips the rectangle to the area `[0, width) x [0, height)`.
    ///
    /// Returns `true` if any part of the rectangle is visible in that area.
    /// The rectangle is then normalized and shrunk to its visible part, so
    /// that `x >= 0`, `y >= 0`, `0 < w <= width` and `0 < h <= height`.
    ///
    /// Returns `false` and leaves the rectangle untouched when nothing is
    /// visible, including when the area itself is empty.
    pub fn clip(&mut self, width: i32, height: i32) -> bool {
        match self.clipped(width, height) {
            Some(clipped) => {
                *self = clipped;
                true
            }
            None => false,
        }
    }

    /// The visible part of the rectangle, see [`Rect::clip`].
    pub fn clipped(self, width: i32, height: i32) -> Option<Rect> {
        if width <= 0 || height <= 0 {
            return None;
        }
        let a = self.normalize_to_absolute();
        if a.x >= width || a.y >= height || a.x1 <= 0 || a.y1 <= 0 {
            return None;
        }
        let clamped = AbsRect {
            x: a.x.max(0),
            y: a.y.max(0),
            x1: a.x1.min(width),
            y1: a.y1.min(height),
        };
        // A degenerate rectangle covers nothing, even inside the area.
        if clamped.x >= clamped.x1 || clamped.y >= clamped.y1 {
            return None;
        }
        Some(clamped.to_regular())
    }
}

impl AbsRect {
    #[inline]
    pub const fn new(x: i32, y: i32, x1: i32, y1: i32) -> AbsRect {
        AbsRect { x, y, x1, y1 }
    }

    /// Same rectangle in regular encoding.
    #[inline]
    pub const fn to_regular(self) -> Rect {
        Rect {
            x: self.x,
            y: self.y,
            w: self.x1 - self.x,
            h: self.y1 - self.y,
        }
    }

    #[inline]
    pub const fn is_normalized(&self) -> bool {
        self.x1 >= self.x && self.y1 >= self.y
    }

    /// Swaps the corners' coordinates so that `(x, y)` is the upper-left one.
    pub fn normalize(&mut self) {
        if self.x1 < self.x {
            std::mem::swap(&mut self.x, &mut self.x1);
        }
        if self.y1 < self.y {
            std::mem::swap(&mut self.y, &mut self.y1);
        }
    }

    /// Normalizes and converts to regular encoding in one step.
    pub const fn normalize_to_regular(self) -> Rect {
        Rect {
            x: if self.x1 < self.x { self.x1 } else { self.x },
            y: if self.y1 < self.y { self.y1 } else { self.y },
            w: (self.x1 - self.x).abs(),
            h: (self.y1 - self.y).abs(),
        }
    }
}

impl From<AbsRect> for Rect {
    fn from(a: AbsRect) -> Rect {
        a.to_regular()
    }
}

impl From<Rect> for AbsRect {
    fn from(r: Rect) -> AbsRect {
        r.to_absolute()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encodings_convert_both_ways() {
        let r = Rect::new(3, -2, -5, 7);
        let a = r.to_absolute();
        assert_eq!(a, AbsRect::new(3, -2, -2, 5));
        assert_eq!(a.to_regular(), r);
        assert_eq!(Rect::from(AbsRect::from(r)), r);
    }

    #[test]
    fn normalize_keeps_the_covered_area() {
        let mut r = Rect::new(10, 10, -4, -6);
        r.normalize();
        assert_eq!(r, Rect::new(6, 4, 4, 6));
        assert!(r.is_normalized());

        let mut a = AbsRect::new(10, 10, 6, 4);
        assert!(!a.is_normalized());
        a.normalize();
        assert_eq!(a, AbsRect::new(6, 4, 10, 10));
    }

    #[test]
    fn normalize_and_convert_in_one_step() {
        for r in [
            Rect::new(1, 2, 3, 4),
            Rect::new(1, 2, -3, 4),
            Rect::new(1, 2, 3, -4),
            Rect::new(-1, -2, -3, -4),
        ] {
            assert_eq!(r.normalize_to_absolute(), r.normalized().to_absolute());
            assert_eq!(r.to_absolute().normalize_to_regular(), r.normalized());
        }
    }

    #[test]
    fn clip_outside_returns_false_and_leaves_rect_alone() {
        for r in [
            Rect::new(10, 0, 5, 5),
            Rect::new(0, 10, 5, 5),
            Rect::new(-5, 0, 5, 5),
            Rect::new(0, -5, 5, 5),
            Rect::new(0, 0, 0, 5),
            Rect::new(3, 3, 2, 0),
        ] {
            let mut copy = r;
            assert!(!copy.clip(10, 10), "{:?}", r);
            assert_eq!(copy, r);
        }
        let mut r = Rect::new(0, 0, 4, 4);
        assert!(!r.clip(0, 10));
        assert!(!r.clip(10, -1));
        assert_eq!(r, Rect::new(0, 0, 4, 4));
    }

    #[test]
    fn clip_inside_is_a_no_op_up_to_normalization() {
        let mut r = Rect::new(2, 3, 4, 5);
        assert!(r.clip(10, 10));
        assert_eq!(r, Rect::new(2, 3, 4, 5));

        let mut r = Rect::new(6, 8, -4, -5);
        assert!(r.clip(10, 10));
        assert_eq!(r, Rect::new(2, 3, 4, 5));
    }

    #[test]
    fn clip_straddling_clamps_into_range() {
        let mut r = Rect::new(-3, 8, 6, 10);
        assert!(r.clip(10, 10));
        assert_eq!(r, Rect::new(0, 8, 3, 2));

        // Wider and taller than the area on both sides.
        let mut r = Rect::new(12, 4, -20, 80);
        assert!(r.clip(16, 9));
        assert_eq!(r, Rect::new(0, 4, 12, 5));
        assert!(r.x >= 0 && r.y >= 0);
        assert!(r.w > 0 && r.w <= 16 && r.h > 0 && r.h <= 9);
    }

    #[test]
    fn clipped_never_returns_an_empty_rect() {
        for x in -4..12 {
            for w in -6..6 {
                let r = Rect::new(x, 1, w, 2);
                if let Some(c) = r.clipped(8, 8) {
                    assert!(c.w > 0 && c.h > 0, "{:?} -> {:?}", r, c);
                    assert!(c.x >= 0 && c.x + c.w <= 8);
                } else {
                    let a = r.normalize_to_absolute();
                    assert!(a.x >= 8 || a.x1 <= 0 || w == 0, "{:?}", r);
                }
            }
        }
    }
}
