// src/font.rs

//! A 3x3 pixel mini-font stored as quadrants, covering printable ASCII.
//!
//! Letters only exist in one case: lowercase letters map to the uppercase
//! shapes. Characters outside `' '..='~'` map to the placeholder of the
//! requested size. Larger sizes are derived from the quadrant shape:
//! - wide half: the quadrant centered horizontally in 8x4 pixels;
//! - tall half: the quadrant stretched vertically to 4x8 pixels;
//! - glyph: the wide half stretched vertically to 8x8 pixels.

use crate::glyph::Glyph;
use crate::half::{TallHalf, WideHalf};
use crate::quadrant::Quadrant;

const FIRST_PRINTABLE: char = ' ';
const LAST_PRINTABLE: char = '~';

// Shapes of ' ' (0x20) through '~' (0x7e).
#[rustfmt::skip]
const QUADRANT_FONT: [u16; 95] = [
    0x0000, 0x44a0, 0xa000, 0x6f60, 0x76e0, 0xb6d0, 0x5ad0, 0x4400, //  !"#$%&'
    0xc8c0, 0x6260, 0xa4a0, 0x4e40, 0x0240, 0x0e00, 0x0040, 0x2480, // ()*+,-./
    0xeae0, 0xc4e0, 0xc460, 0xc6c0, 0xae20, 0x64c0, 0x8ee0, 0xe220, // 01234567
    0xeee0, 0xee20, 0x4040, 0x2060, 0x2420, 0xe0e0, 0x8480, 0xe640, // 89:;<=>?
    0xeac0, 0x4ea0, 0xcee0, 0x6860, 0xcac0, 0xece0, 0xec80, 0xcae0, // @ABCDEFG
    0xaea0, 0xe4e0, 0x22c0, 0xaca0, 0x88e0, 0xeea0, 0xcaa0, 0xeae0, // HIJKLMNO
    0xee80, 0xeac4, 0xcea0, 0x64c0, 0xe440, 0xaae0, 0xaac0, 0xaee0, // PQRSTUVW
    0xa4a0, 0xa440, 0xc460, 0x6460, 0x8420, 0xc4c0, 0x4a00, 0x00e0, // XYZ[\]^_
    0x8400, 0x4ea0, 0xcee0, 0x6860, 0xcac0, 0xece0, 0xec80, 0xcae0, // `abcdefg
    0xaea0, 0xe4e0, 0x22c0, 0xaca0, 0x88e0, 0xeea0, 0xcaa0, 0xeae0, // hijklmno
    0xee80, 0xeac4, 0xcea0, 0x64c0, 0xe440, 0xaae0, 0xaac0, 0xaee0, // pqrstuvw
    0xa4a0, 0xa440, 0xc460, 0x6c60, 0x4440, 0xc6c0, 0x2e80, // xyz{|}~
];

/// Quadrant shape of `c`.
pub fn chr_quadrant(c: char) -> Quadrant {
    if (FIRST_PRINTABLE..=LAST_PRINTABLE).contains(&c) {
        Quadrant(QUADRANT_FONT[c as usize - FIRST_PRINTABLE as usize])
    } else {
        Quadrant::PLACEHOLDER
    }
}

/// Wide half shape of `c`.
pub fn chr_widehalf(c: char) -> WideHalf {
    if !is_printable(c) {
        return WideHalf::PLACEHOLDER;
    }
    let q = chr_quadrant(c);
    let rows: [u8; 4] = std::array::from_fn(|r| q.line(r as u32) << 2);
    WideHalf::from_lines(&rows)
}

/// Tall half shape of `c`.
pub fn chr_tallhalf(c: char) -> TallHalf {
    if !is_printable(c) {
        return TallHalf::PLACEHOLDER;
    }
    let q = chr_quadrant(c);
    let rows: [u8; 8] = std::array::from_fn(|r| q.line(r as u32 / 2));
    TallHalf::from_lines(&rows)
}

/// Glyph shape of `c`.
pub fn chr(c: char) -> Glyph {
    if !is_printable(c) {
        return Glyph::PLACEHOLDER;
    }
    let half = chr_widehalf(c);
    let rows: [u8; 8] = std::array::from_fn(|r| half.line(r as u32 / 2));
    Glyph::from_lines(&rows)
}

/// Whether the font has a shape for `c`.
pub fn is_printable(c: char) -> bool {
    (FIRST_PRINTABLE..=LAST_PRINTABLE).contains(&c)
}
