// src/demo.rs

//! Scenes shown by the `glyphgrid` binary. Each scene redraws the whole
//! screen; `run` cycles through them for the configured number of frames.

use log::{debug, info};
use std::thread;
use std::time::Duration;

use glyphgrid::config::DemoConfig;
use glyphgrid::print::{print, print_quadrant, print_tallhalf, print_widehalf};
use glyphgrid::{Canvas, Glyph, Rect, Renderer, Screen, Tetra};

/// A small ship, pointing up.
const SHIP: Glyph = Glyph(0x7c02_2a02_04a8_a800);
/// Fill pattern of the cropped area.
const CROP_FILL: Glyph = Glyph(0x5fbe_5fbe_5fbe_5fbe);

type Scene = fn(&Canvas);

const SCENES: [(&str, Scene); 4] = [
    ("text", draw_text),
    ("transforms", draw_transforms),
    ("lines", draw_lines),
    ("crop", draw_crop),
];

/// Renders `config.frames` frames, one scene per frame.
pub fn run(screen: &Screen, renderer: &mut Renderer, config: &DemoConfig) {
    let delay = Duration::from_millis(config.frame_delay_ms);
    info!(
        "Demo: {} frames on a {}x{} screen",
        config.frames,
        screen.grid_width(),
        screen.grid_height()
    );
    for (frame, (name, scene)) in SCENES.iter().cycle().take(config.frames as usize).enumerate() {
        debug!("Demo: frame {} shows {}", frame, name);
        screen.clear();
        scene(&screen.canvas());
        renderer.render(&screen.canvas());
        if !delay.is_zero() {
            thread::sleep(delay);
        }
    }
}

fn draw_text(canvas: &Canvas) {
    let (x, y) = print(canvas, 0, 0, "GLYPHGRID");
    print(canvas, x, y, " 8X8");
    print_widehalf(canvas, 0, 3, "WIDE HALVES");
    print_tallhalf(canvas, 0, 3, "TALL HALVES");
    print_quadrant(canvas, 0, 10, "QUADRANT TEXT\nWRAPS AND\nKEEPS GOING");
}

fn draw_transforms(canvas: &Canvas) {
    let width = canvas.width() as i32;
    let height = canvas.height() as i32;
    for x in 0..width {
        canvas.put_glyph(x, 0, Glyph::CHECKER);
        canvas.put_glyph(x, height - 1, Glyph::CHECKER);
    }

    let variants = [
        ("N", SHIP),
        ("I", !SHIP),
        ("M", SHIP.mirror()),
        ("F", SHIP.flip()),
        ("R1", SHIP.rotate90()),
        ("R2", SHIP.rotate180()),
        ("R3", SHIP.rotate270()),
        ("T", SHIP.transpose()),
    ];
    for (i, (label, glyph)) in (0..).zip(variants) {
        canvas.put_glyph(2 * i, 2, glyph);
        print_quadrant(canvas, 4 * i, 6, label);
    }

    // The placeholder block, turned a quarter.
    put_tetra(canvas, 2, 5, Tetra::PLACEHOLDER.rotate90());
}

fn put_tetra(canvas: &Canvas, x: i32, y: i32, tetra: Tetra) {
    canvas.put_glyph(x, y, tetra.top_left);
    canvas.put_glyph(x + 1, y, tetra.top_right);
    canvas.put_glyph(x, y + 1, tetra.bottom_left);
    canvas.put_glyph(x + 1, y + 1, tetra.bottom_right);
}

fn draw_lines(canvas: &Canvas) {
    let right = canvas.pixel_width() as i32 - 1;
    let bottom = canvas.pixel_height() as i32 - 1;
    canvas.line(0, 0, right, 0);
    canvas.line(right, 0, right, bottom);
    canvas.line(right, bottom, 0, bottom);
    canvas.line(0, bottom, 0, 0);
    // Starts off-canvas; only the visible part is drawn.
    canvas.line(-8, 8, 100, 64);
}

fn draw_crop(canvas: &Canvas) {
    // Clipped against the screen to whatever part of it is visible.
    let area = canvas.crop(Rect::new(12, 4, -20, 80));
    area.set(CROP_FILL);
    print(canvas, 0, 0, "CROP");
}

#[cfg(test)]
mod tests {
    use super::*;
    use glyphgrid::Resolution;

    fn cells_equal_to(canvas: &Canvas, glyph: Glyph) -> usize {
        canvas.rows().flatten().filter(|&g| g == glyph).count()
    }

    #[test_log::test]
    fn crop_scene_fills_the_visible_part() {
        let screen = Screen::new(Resolution::default());
        draw_crop(&screen.canvas());
        // 16x9 screen: columns 0..12, rows 4..9.
        assert_eq!(cells_equal_to(&screen.canvas(), CROP_FILL), 12 * 5);
        assert_eq!(screen.canvas().at(11, 8), CROP_FILL);
        assert_eq!(screen.canvas().at(12, 4), Glyph::EMPTY);
    }

    #[test_log::test]
    fn transforms_scene_frames_the_screen() {
        let screen = Screen::new(Resolution::default());
        let canvas = screen.canvas();
        draw_transforms(&canvas);
        assert_eq!(canvas.at(0, 0), Glyph::CHECKER);
        assert_eq!(canvas.at(15, 8), Glyph::CHECKER);
        assert_eq!(canvas.at(0, 2), SHIP);
        assert_eq!(canvas.at(2, 2), !SHIP);
        assert_eq!(canvas.at(14, 2), SHIP.transpose());
    }

    #[test_log::test]
    fn lines_scene_draws_the_border() {
        let screen = Screen::new(Resolution::default());
        let canvas = screen.canvas();
        draw_lines(&canvas);
        assert!(canvas.pixel(0, 0));
        assert!(canvas.pixel(127, 71));
        assert!(canvas.pixel(64, 0));
        assert!(!canvas.pixel(64, 30));
    }

    #[test_log::test]
    fn run_renders_the_configured_number_of_frames() {
        let screen = Screen::new(Resolution::default());
        let mut renderer = Renderer::new();
        let config = DemoConfig {
            frame_delay_ms: 0,
            frames: 5,
        };
        run(&screen, &mut renderer, &config);
        assert_eq!(renderer.error_count(), 0);
        // The fifth frame is the text scene again.
        assert!(!screen.canvas().at(0, 0).is_empty());
    }
}
