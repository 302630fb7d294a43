// src/config.rs

//! Defines the configuration structures for `glyphgrid`.
//!
//! Every struct deserializes with `#[serde(default)]`, so a configuration
//! file only needs the settings it changes. Files are JSON. The binary reads
//! the file named by `GLYPHGRID_CONFIG` once, through [`CONFIG`].

use anyhow::{Context, Result};
use log::{info, warn};
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use crate::backends::PseudoGraphicsMode;
use crate::color::Color;
use crate::screen::Resolution;

/// Environment variable naming the configuration file.
pub const CONFIG_ENV_VAR: &str = "GLYPHGRID_CONFIG";

/// Process-wide configuration, loaded on first use.
pub static CONFIG: Lazy<Config> = Lazy::new(Config::load_or_default);

// --- Top-Level Configuration Structure ---

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Screen geometry.
    pub screen: Resolution,
    /// Output driver selection and per-driver settings.
    pub renderer: RendererConfig,
    /// Colors of set and unset pixels.
    pub colors: ColorScheme,
    /// Settings of the demo binary.
    pub demo: DemoConfig,
}

impl Config {
    /// Reads a JSON configuration file.
    pub fn load(path: &Path) -> Result<Config> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let config = serde_json::from_str(&text)
            .with_context(|| format!("Failed to parse config file {}", path.display()))?;
        info!("Loaded configuration from {}", path.display());
        Ok(config)
    }

    /// Loads the file named by `GLYPHGRID_CONFIG`. Without the variable, or
    /// if the file cannot be used, the defaults apply.
    pub fn load_or_default() -> Config {
        match env::var_os(CONFIG_ENV_VAR) {
            Some(path) => Config::load(Path::new(&path)).unwrap_or_else(|e| {
                warn!("{:#}; using default configuration", e);
                Config::default()
            }),
            None => Config::default(),
        }
    }
}

// --- Renderer Configuration ---

/// Which driver the renderer opens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BackendSelection {
    /// A window if a display is available, else pseudographics on a
    /// terminal, else PPM.
    #[default]
    Auto,
    Null,
    Ppm,
    #[serde(alias = "terminal")]
    PseudoGraphics,
    Window,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RendererConfig {
    pub backend: BackendSelection,
    pub ppm: PpmConfig,
    pub pseudographics: PseudoGraphicsConfig,
    pub window: WindowConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PpmConfig {
    /// Image pixels per canvas pixel, horizontally.
    pub zoom_x: u32,
    /// Image pixels per canvas pixel, vertically.
    pub zoom_y: u32,
    /// Output file; stdout if `None`.
    pub output: Option<PathBuf>,
}

impl Default for PpmConfig {
    fn default() -> Self {
        PpmConfig {
            zoom_x: 3,
            zoom_y: 3,
            output: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PseudoGraphicsConfig {
    pub mode: PseudoGraphicsMode,
    /// Home the cursor and clear the terminal before each frame.
    pub clear_terminal: bool,
    /// Output file; stdout if `None`.
    pub output: Option<PathBuf>,
}

impl Default for PseudoGraphicsConfig {
    fn default() -> Self {
        PseudoGraphicsConfig {
            mode: PseudoGraphicsMode::default(),
            clear_terminal: true,
            output: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    pub title: String,
    /// Initial size in screen pixels.
    pub width: u32,
    pub height: u32,
}

impl Default for WindowConfig {
    fn default() -> Self {
        WindowConfig {
            title: "glyphgrid".to_string(),
            width: 768,
            height: 432,
        }
    }
}

// --- Colors ---

/// Colors the pixel-producing drivers paint with.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ColorScheme {
    /// Color of set pixels.
    pub foreground: Color,
    /// Color of unset pixels.
    pub background: Color,
}

impl Default for ColorScheme {
    fn default() -> Self {
        // Yellow on navy.
        ColorScheme {
            foreground: Color::Rgb(0xff, 0xff, 0x00),
            background: Color::Rgb(0x00, 0x00, 0x80),
        }
    }
}

// --- Demo ---

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DemoConfig {
    /// Pause after each frame.
    pub frame_delay_ms: u64,
    /// Number of frames shown; the demo cycles through its scenes.
    pub frames: u32,
}

impl Default for DemoConfig {
    fn default() -> Self {
        DemoConfig {
            frame_delay_ms: 250,
            frames: 8,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::NamedColor;
    use std::io::Write;

    #[test_log::test]
    fn empty_document_gives_defaults() {
        let config: Config = serde_json::from_str("{}").expect("valid config");
        assert_eq!(config, Config::default());
        assert_eq!(config.screen, Resolution::default());
        assert_eq!(config.renderer.backend, BackendSelection::Auto);
        assert_eq!(config.renderer.ppm.zoom_x, 3);
        assert!(config.renderer.pseudographics.clear_terminal);
        assert_eq!(config.demo.frames, 8);
    }

    #[test_log::test]
    fn partial_documents_override_only_what_they_name() {
        let config: Config = serde_json::from_str(
            r#"{
                "screen": { "mode": 2 },
                "renderer": {
                    "backend": "pseudographics",
                    "pseudographics": { "mode": "2x3" },
                    "ppm": { "zoom_y": 5, "output": "frames.ppm" }
                },
                "colors": { "foreground": { "Named": "BrightGreen" } }
            }"#,
        )
        .expect("valid config");

        assert_eq!(config.screen.mode, 2);
        assert_eq!(config.screen.aspect_x, 16);
        assert_eq!(config.renderer.backend, BackendSelection::PseudoGraphics);
        assert_eq!(config.renderer.pseudographics.mode, PseudoGraphicsMode::Sextants);
        assert!(config.renderer.pseudographics.clear_terminal);
        assert_eq!(config.renderer.ppm.zoom_x, 3);
        assert_eq!(config.renderer.ppm.zoom_y, 5);
        assert_eq!(config.renderer.ppm.output, Some(PathBuf::from("frames.ppm")));
        assert_eq!(config.colors.foreground, Color::Named(NamedColor::BrightGreen));
        assert_eq!(config.colors.background, ColorScheme::default().background);
    }

    #[test_log::test]
    fn backend_names_are_lowercase() {
        for (name, backend) in [
            ("\"auto\"", BackendSelection::Auto),
            ("\"null\"", BackendSelection::Null),
            ("\"ppm\"", BackendSelection::Ppm),
            ("\"terminal\"", BackendSelection::PseudoGraphics),
            ("\"window\"", BackendSelection::Window),
        ] {
            let parsed: BackendSelection = serde_json::from_str(name).expect("known backend");
            assert_eq!(parsed, backend);
        }
        assert!(serde_json::from_str::<BackendSelection>("\"Window\"").is_err());
    }

    #[test_log::test]
    fn load_reads_a_file_and_reports_bad_ones() {
        let dir = env::temp_dir();
        let good = dir.join(format!("glyphgrid-config-{}-good.json", std::process::id()));
        let bad = dir.join(format!("glyphgrid-config-{}-bad.json", std::process::id()));
        fs::File::create(&good)
            .and_then(|mut f| f.write_all(br#"{ "demo": { "frames": 2 } }"#))
            .expect("write temp config");
        fs::write(&bad, "{ not json").expect("write temp config");

        let config = Config::load(&good).expect("good config loads");
        assert_eq!(config.demo.frames, 2);
        assert_eq!(config.demo.frame_delay_ms, 250);

        let err = Config::load(&bad).expect_err("bad config fails");
        assert!(format!("{:#}", err).contains("Failed to parse config file"));
        let err = Config::load(&dir.join("glyphgrid-no-such-config.json")).expect_err("missing");
        assert!(format!("{:#}", err).contains("Failed to read config file"));

        let _ = fs::remove_file(good);
        let _ = fs::remove_file(bad);
    }

    #[test_log::test]
    fn default_colors_are_yellow_on_navy() {
        let colors = ColorScheme::default();
        assert_eq!(colors.foreground.to_rgb().to_bytes(), [0xff, 0xff, 0x00]);
        assert_eq!(colors.background.to_rgb().to_bytes(), [0x00, 0x00, 0x80]);
    }
}
