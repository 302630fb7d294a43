// src/screen.rs

//! The screen: the root canvas everything is drawn to, owning the only glyph
//! buffer of the program.
//!
//! The grid size comes from a `Resolution`: an aspect ratio multiplied by a
//! resolution mode. The default 16:9 ratio in mode 1 gives a 16x9 glyph grid,
//! that is 128x72 pixels.

use log::debug;
use serde::{Deserialize, Serialize};

use crate::canvas::Canvas;
use crate::glyph::{GLYPH_HEIGHT, GLYPH_WIDTH};

/// Screen resolution: glyph grid of `aspect_x * mode` by `aspect_y * mode`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Resolution {
    pub aspect_x: u16,
    pub aspect_y: u16,
    pub mode: u16,
}

impl Default for Resolution {
    fn default() -> Self {
        Resolution {
            aspect_x: 16,
            aspect_y: 9,
            mode: 1,
        }
    }
}

impl Resolution {
    /// Grid width in glyphs.
    pub fn grid_width(&self) -> usize {
        usize::from(self.aspect_x) * usize::from(self.mode)
    }

    /// Grid height in glyphs.
    pub fn grid_height(&self) -> usize {
        usize::from(self.aspect_y) * usize::from(self.mode)
    }

    /// Width in pixels.
    pub fn pixel_width(&self) -> usize {
        self.grid_width() * GLYPH_WIDTH as usize
    }

    /// Height in pixels.
    pub fn pixel_height(&self) -> usize {
        self.grid_height() * GLYPH_HEIGHT as usize
    }
}

/// Owns the root glyph buffer. Drawing code works on the views returned by
/// [`Screen::canvas`] and their crops.
#[derive(Debug)]
pub struct Screen {
    resolution: Resolution,
    canvas: Canvas,
}

impl Screen {
    /// Allocates a cleared screen. A resolution with a zero factor yields a
    /// screen over the null canvas.
    pub fn new(resolution: Resolution) -> Screen {
        let canvas = Canvas::new(resolution.grid_width(), resolution.grid_height());
        debug!(
            "Screen created: {}x{} glyphs ({}x{} pixels)",
            canvas.width(),
            canvas.height(),
            canvas.pixel_width(),
            canvas.pixel_height()
        );
        Screen { resolution, canvas }
    }

    /// A view over the whole screen.
    pub fn canvas(&self) -> Canvas {
        self.canvas.clone()
    }

    pub fn resolution(&self) -> Resolution {
        self.resolution
    }

    pub fn grid_width(&self) -> usize {
        self.canvas.width()
    }

    pub fn grid_height(&self) -> usize {
        self.canvas.height()
    }

    pub fn pixel_width(&self) -> usize {
        self.canvas.pixel_width()
    }

    pub fn pixel_height(&self) -> usize {
        self.canvas.pixel_height()
    }

    /// Empties every cell.
    pub fn clear(&self) {
        self.canvas.set(crate::glyph::Glyph::EMPTY);
    }
}

impl Default for Screen {
    fn default() -> Self {
        Screen::new(Resolution::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::glyph::Glyph;
    use crate::rect::Rect;

    #[test_log::test]
    fn default_resolution_is_16_by_9() {
        let screen = Screen::default();
        assert_eq!((screen.grid_width(), screen.grid_height()), (16, 9));
        assert_eq!((screen.pixel_width(), screen.pixel_height()), (128, 72));
    }

    #[test_log::test]
    fn mode_scales_the_grid() {
        let res = Resolution {
            aspect_x: 4,
            aspect_y: 3,
            mode: 5,
        };
        let screen = Screen::new(res);
        assert_eq!((screen.grid_width(), screen.grid_height()), (20, 15));
        assert_eq!(screen.resolution(), res);
    }

    #[test_log::test]
    fn views_share_the_screen_buffer() {
        let screen = Screen::default();
        let a = screen.canvas();
        let b = screen.canvas().crop(Rect::new(8, 4, 2, 2));
        assert!(a.shares_storage_with(&b));
        b.set(Glyph::FULL);
        assert_eq!(a.at(9, 5), Glyph::FULL);
        screen.clear();
        assert_eq!(b.at(1, 1), Glyph::EMPTY);
    }

    #[test_log::test]
    fn zero_mode_gives_a_null_screen() {
        let screen = Screen::new(Resolution {
            mode: 0,
            ..Resolution::default()
        });
        assert!(screen.canvas().is_null());
    }

    #[test_log::test]
    fn resolution_fields_default_individually() {
        let res: Resolution = serde_json::from_str(r#"{"mode": 2}"#).expect("valid json");
        assert_eq!(res.grid_width(), 32);
        assert_eq!(res.grid_height(), 18);
    }
}
