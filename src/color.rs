// src/color.rs

//! Colors used by the pixel-producing backends to paint set and unset pixels.

use serde::{Deserialize, Serialize};

/// Standard ANSI named colors (indices 0-15).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NamedColor {
    Black,
    Red,
    Green,
    Yellow,
    Blue,
    Magenta,
    Cyan,
    White,
    BrightBlack,
    BrightRed,
    BrightGreen,
    BrightYellow,
    BrightBlue,
    BrightMagenta,
    BrightCyan,
    BrightWhite,
}

impl NamedColor {
    /// The usual sRGB value of this color.
    pub fn to_rgb(self) -> Rgb {
        match self {
            NamedColor::Black => Rgb(0, 0, 0),
            NamedColor::Red => Rgb(205, 0, 0),
            NamedColor::Green => Rgb(0, 205, 0),
            NamedColor::Yellow => Rgb(205, 205, 0),
            NamedColor::Blue => Rgb(0, 0, 238),
            NamedColor::Magenta => Rgb(205, 0, 205),
            NamedColor::Cyan => Rgb(0, 205, 205),
            NamedColor::White => Rgb(229, 229, 229),
            NamedColor::BrightBlack => Rgb(127, 127, 127),
            NamedColor::BrightRed => Rgb(255, 0, 0),
            NamedColor::BrightGreen => Rgb(0, 255, 0),
            NamedColor::BrightYellow => Rgb(255, 255, 0),
            NamedColor::BrightBlue => Rgb(92, 92, 255),
            NamedColor::BrightMagenta => Rgb(255, 0, 255),
            NamedColor::BrightCyan => Rgb(0, 255, 255),
            NamedColor::BrightWhite => Rgb(255, 255, 255),
        }
    }
}

/// An RGB true color, each component from 0 to 255.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    /// The color as `[r, g, b]` bytes, the layout of a PPM pixel.
    pub const fn to_bytes(self) -> [u8; 3] {
        [self.0, self.1, self.2]
    }

    /// The color as `0x00RRGGBB`, the layout of a 24-bit X11 pixel.
    pub const fn to_xrgb(self) -> u32 {
        (self.0 as u32) << 16 | (self.1 as u32) << 8 | self.2 as u32
    }
}

/// A color as written in a configuration file: a named ANSI color or an
/// explicit RGB triple.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Color {
    Named(NamedColor),
    Rgb(u8, u8, u8),
}

impl Color {
    /// Resolves to a concrete RGB value.
    pub fn to_rgb(self) -> Rgb {
        match self {
            Color::Named(named) => named.to_rgb(),
            Color::Rgb(r, g, b) => Rgb(r, g, b),
        }
    }
}

impl From<Rgb> for Color {
    fn from(rgb: Rgb) -> Self {
        Color::Rgb(rgb.0, rgb.1, rgb.2)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn named_and_rgb_colors_resolve() {
        assert_eq!(Color::Named(NamedColor::BrightYellow).to_rgb(), Rgb(255, 255, 0));
        assert_eq!(Color::Rgb(1, 2, 3).to_rgb(), Rgb(1, 2, 3));
        assert_eq!(Rgb(0x12, 0x34, 0x56).to_xrgb(), 0x0012_3456);
        assert_eq!(Rgb(7, 8, 9).to_bytes(), [7, 8, 9]);
    }

    #[test]
    fn colors_deserialize_from_json() {
        let named: Color = serde_json::from_str(r#"{"Named":"Blue"}"#).expect("named color");
        assert_eq!(named, Color::Named(NamedColor::Blue));
        let rgb: Color = serde_json::from_str(r#"{"Rgb":[255,0,128]}"#).expect("rgb color");
        assert_eq!(rgb.to_rgb(), Rgb(255, 0, 128));
    }
}
