// src/lib.rs

//! `glyphgrid` is a small monochrome graphics toolkit built around 8x8 pixel
//! glyphs packed into `u64` words.
//!
//! The crate is organised leaf-first:
//! - `bitmap`, `quadrant`, `half`, `glyph`, `pair`: the bit-packed bitmap
//!   hierarchy and its transforms (rotations, mirrors, masked merges, ...).
//! - `rect`: rectangles with regular/absolute encodings and clipping.
//! - `canvas`: strided 2D views over a shared glyph buffer, with crops that
//!   alias their parent's storage.
//! - `screen`: the root canvas sized from a `Resolution`.
//! - `font` and `print`: a quadrant mini-font and text placement.
//! - `backends` and `renderer`: output drivers (PPM, Unicode pseudographics,
//!   optional X11 window) and the front that drives them.
//! - `config` and `color`: serde-backed configuration.

pub mod bitmap;
pub mod canvas;
pub mod color;
pub mod config;
pub mod font;
pub mod glyph;
pub mod half;
pub mod pair;
pub mod print;
pub mod quadrant;
pub mod rect;
pub mod renderer;
pub mod screen;

pub mod backends;

pub use crate::bitmap::Bitmap;
pub use crate::canvas::{Canvas, GlyphBuffer};
pub use crate::glyph::Glyph;
pub use crate::half::{TallHalf, WideHalf};
pub use crate::pair::{TallPair, Tetra, WidePair};
pub use crate::quadrant::Quadrant;
pub use crate::rect::{AbsRect, Rect};
pub use crate::renderer::Renderer;
pub use crate::screen::{Resolution, Screen};
