// src/glyph/tests.rs

use super::*;
use crate::bitmap::Bitmap;

// A fixed set of glyphs with varied shapes plus a few hundred pseudo-random
// ones, so the algebraic laws are checked over more than hand-picked cases.
fn corpus() -> Vec<Glyph> {
    let mut glyphs = vec![
        Glyph::EMPTY,
        Glyph::FULL,
        Glyph::PLACEHOLDER,
        Glyph::TODO,
        Glyph::CHECKER,
        Glyph::TOP_LEFT,
        Glyph::BOTTOM_RIGHT,
        Glyph(0x8000_0000_0000_0000),
        Glyph(0x0000_0000_0000_0001),
        Glyph(0x7c02_2a02_04a8_a800),
        Glyph(0x1824_4281_8142_2418),
        Glyph(0x0102_0408_1020_4080),
    ];
    let mut state: u64 = 0x9e37_79b9_7f4a_7c15;
    for _ in 0..256 {
        state ^= state << 13;
        state ^= state >> 7;
        state ^= state << 17;
        glyphs.push(Glyph(state));
    }
    glyphs
}

fn quadrant_corpus() -> Vec<Quadrant> {
    vec![
        Quadrant::EMPTY,
        Quadrant::FULL,
        Quadrant(0xcc00),
        Quadrant(0x1234),
        Quadrant(0x8001),
        Quadrant(0xa5a5),
        Quadrant(0x0660),
    ]
}

#[test]
fn flip_mirror_and_transpose_are_involutions() {
    for g in corpus() {
        assert_eq!(g.flip().flip(), g);
        assert_eq!(g.mirror().mirror(), g);
        assert_eq!(g.transpose().transpose(), g);
    }
}

#[test]
fn rotations_compose() {
    for g in corpus() {
        assert_eq!(g.rotate90().rotate90(), g.rotate180());
        assert_eq!(g.rotate90().rotate180(), g.rotate270());
        assert_eq!(g.rotate270().rotate90(), g);
        assert_eq!(g.rotate90().rotate90().rotate90().rotate90(), g);
        assert_eq!(g.rotate180().rotate180(), g);
    }
}

#[test]
fn flip_and_mirror_commute() {
    for g in corpus() {
        assert_eq!(g.flip().mirror(), g.mirror().flip());
        assert_eq!(g.flip().mirror(), g.rotate180());
    }
}

#[test]
fn merge_identities() {
    for a in corpus() {
        let b = !a ^ Glyph(0x0f1e_2d3c_4b5a_6978);
        assert_eq!(a.merge(b, Glyph::EMPTY), a);
        assert_eq!(a.merge(b, Glyph::FULL), b);
        assert_eq!(glyph_merge(a, b, Glyph::TOP), (a & Glyph::BOTTOM) | (b & Glyph::TOP));
    }
}

#[test]
fn merge_takes_masked_bits_from_the_second_glyph() {
    let glyphs = corpus();
    for (i, &a) in glyphs.iter().enumerate() {
        for j in [1, 7, 31, 101] {
            let b = glyphs[(i + j) % glyphs.len()];
            let mask = glyphs[(i * 3 + j) % glyphs.len()];
            let expected = (a & !mask) | (b & mask);
            assert_eq!(glyph_merge(a, b, mask), expected);
            assert_eq!(a.merge(b, mask), expected);
        }
    }
}

#[test]
fn from_pixel_sets_a_single_bit() {
    for y in 0..8 {
        for x in 0..8 {
            let g = Glyph::from_pixel(x, y);
            assert_eq!(g.count_pixels(), 1);
            assert!(g.pixel(x, y));
            assert_eq!(g.0, 1u64 << (63 - x - 8 * y));
        }
    }
}

#[test]
fn transpose_swaps_coordinates() {
    for y in 0..8 {
        for x in 0..8 {
            assert_eq!(Glyph::from_pixel(x, y).transpose(), Glyph::from_pixel(y, x));
        }
    }
}

#[test]
fn rotations_are_counterclockwise() {
    for y in 0..8 {
        for x in 0..8 {
            let p = Glyph::from_pixel(x, y);
            assert_eq!(p.rotate90(), Glyph::from_pixel(y, 7 - x));
            assert_eq!(p.rotate180(), Glyph::from_pixel(7 - x, 7 - y));
            assert_eq!(p.rotate270(), Glyph::from_pixel(7 - y, x));
            assert_eq!(p.flip(), Glyph::from_pixel(x, 7 - y));
            assert_eq!(p.mirror(), Glyph::from_pixel(7 - x, y));
        }
    }
}

#[test]
fn glyph4_pixels_read_back_from_their_quadrant() {
    let qs = quadrant_corpus();
    for &tl in &qs {
        for &br in &qs {
            let tr = Quadrant(tl.0.rotate_left(3));
            let bl = Quadrant(!br.0);
            let g = glyph4(tl, tr, bl, br);
            for y in 0..4 {
                for x in 0..4 {
                    assert_eq!(g.pixel_value(x, y), tl.pixel_value(x, y));
                    assert_eq!(g.pixel_value(x + 4, y), tr.pixel_value(x, y));
                    assert_eq!(g.pixel_value(x, y + 4), bl.pixel_value(x, y));
                    assert_eq!(g.pixel_value(x + 4, y + 4), br.pixel_value(x, y));
                }
            }
            assert_eq!(g.quadrants(), [tl, tr, bl, br]);
        }
    }
}

#[test]
fn glyph4_of_a_top_left_square() {
    let q = Quadrant(0xcc00);
    let g = glyph4(q, Quadrant::EMPTY, Quadrant::EMPTY, Quadrant::EMPTY);
    assert_eq!(g, Glyph(0xc0c0_0000_0000_0000));
    assert_eq!(g.width(), 2);
    assert_eq!(g.height(), 2);
    assert_eq!(g.margin_top(), 0);
    assert_eq!(g.margin_left(), 0);
    assert_eq!(g.margin_right(), 6);
    assert_eq!(g.margin_bottom(), 6);
}

#[test]
fn empty_glyph_has_full_margins() {
    let g = Glyph::EMPTY;
    assert_eq!(g.margin_top(), 8);
    assert_eq!(g.margin_bottom(), 8);
    assert_eq!(g.margin_left(), 8);
    assert_eq!(g.margin_right(), 8);
    assert_eq!(g.width(), 0);
    assert_eq!(g.height(), 0);
}

#[test]
fn margins_of_placeholder_and_single_pixels() {
    let g = Glyph::PLACEHOLDER;
    assert_eq!(
        (g.margin_top(), g.margin_bottom(), g.margin_left(), g.margin_right()),
        (1, 1, 1, 1)
    );
    assert_eq!((g.width(), g.height()), (6, 6));

    let p = Glyph::from_pixel(5, 2);
    assert_eq!(p.margin_left(), 5);
    assert_eq!(p.margin_right(), 2);
    assert_eq!(p.margin_top(), 2);
    assert_eq!(p.margin_bottom(), 5);
    assert_eq!((p.width(), p.height()), (1, 1));
    assert_eq!(p.flatten(), 0b0000_0100);
}

#[test]
fn halves_round_trip_through_composition() {
    for g in corpus() {
        assert_eq!(Glyph::glyph2_wide(g.top_half(), g.bottom_half()), g);
        assert_eq!(Glyph::glyph2_tall(g.left_half(), g.right_half()), g);
        let [tl, tr, bl, br] = g.quadrants();
        assert_eq!(glyph4(tl, tr, bl, br), g);
    }
}

#[test]
fn half_masks_partition_the_glyph() {
    assert_eq!(Glyph::TOP | Glyph::BOTTOM, Glyph::FULL);
    assert_eq!(Glyph::LEFT | Glyph::RIGHT, Glyph::FULL);
    assert!((Glyph::TOP & Glyph::BOTTOM).is_empty());
    assert!((Glyph::LEFT & Glyph::RIGHT).is_empty());
    assert_eq!(Glyph::TOP_LEFT.count_pixels(), 16);
}

#[test]
fn swapping_halves() {
    for g in corpus() {
        assert_eq!(g.swap_wide_halves().top_half(), g.bottom_half());
        assert_eq!(g.swap_tall_halves().left_half(), g.right_half());
        assert_eq!(g.swap_wide_halves(), g.cycle_up(4));
        assert_eq!(g.swap_tall_halves(), g.cycle_left(4));
    }
}

#[test]
fn shifts_move_content_and_drop_overflow() {
    let p = Glyph::from_pixel(3, 3);
    assert_eq!(p.shift_left(2), Glyph::from_pixel(1, 3));
    assert_eq!(p.shift_right(4), Glyph::from_pixel(7, 3));
    assert_eq!(p.shift_up(3), Glyph::from_pixel(3, 0));
    assert_eq!(p.shift_down(4), Glyph::from_pixel(3, 7));

    // Pixels pushed past an edge disappear instead of bleeding into the
    // neighbouring row.
    assert_eq!(Glyph::from_pixel(0, 2).shift_left(1), Glyph::EMPTY);
    assert_eq!(Glyph::from_pixel(7, 2).shift_right(1), Glyph::EMPTY);
    assert_eq!(Glyph::FULL.shift_left(3).flatten(), 0b1111_1000);
    assert_eq!(Glyph::FULL.shift_right(3).flatten(), 0b0001_1111);
    assert_eq!(Glyph::FULL.shift_down(5).margin_top(), 5);

    for g in corpus() {
        assert_eq!(g.shift_left(0), g);
        assert_eq!(g.shift_right(0), g);
    }
}

#[test]
fn cycles_wrap_around() {
    assert_eq!(Glyph::from_pixel(0, 5).cycle_left(1), Glyph::from_pixel(7, 5));
    assert_eq!(Glyph::from_pixel(7, 5).cycle_right(1), Glyph::from_pixel(0, 5));
    assert_eq!(Glyph::from_pixel(4, 0).cycle_up(1), Glyph::from_pixel(4, 7));
    assert_eq!(Glyph::from_pixel(4, 7).cycle_down(2), Glyph::from_pixel(4, 1));

    for g in corpus() {
        for n in 0..8 {
            assert_eq!(g.cycle_left(n).cycle_right(n), g);
            assert_eq!(g.cycle_up(n).cycle_down(n), g);
            assert_eq!(g.cycle_left(n).count_pixels(), g.count_pixels());
        }
    }
}

#[test]
fn display_draws_rows() {
    let g = Glyph::from_lines(&[0x81, 0, 0, 0, 0, 0, 0, 0xff]);
    let text = g.to_string();
    let rows: Vec<&str> = text.lines().collect();
    assert_eq!(rows.len(), 8);
    assert_eq!(rows[0], "#......#");
    assert_eq!(rows[1], "........");
    assert_eq!(rows[7], "########");
}
