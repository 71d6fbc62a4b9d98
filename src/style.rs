//! Icon style presets and their optional JSON overrides.

use crate::font::{FontCandidate, FontScale};
use anyhow::{Context, Result};
use image::Rgba;
use serde::Deserialize;
use std::{
    path::{Path, PathBuf},
    str::FromStr,
};

pub const DEFAULT_TEXT: &str = "TK";

pub const LAUNCHER_PINK: Rgba<u8> = Rgba([236, 72, 153, 255]);
pub const WEB_GRADIENT_TOP: Rgba<u8> = Rgba([233, 30, 99, 255]);
pub const WEB_GRADIENT_BOTTOM: Rgba<u8> = Rgba([173, 20, 87, 255]);
pub const WHITE: Rgba<u8> = Rgba([255, 255, 255, 255]);

/// How the canvas is filled before the monogram is drawn.
#[derive(Debug, Clone, PartialEq)]
pub enum Background {
    /// Opaque disc inset from the canvas edge by `margin` pixels.
    RadialSolid { color: Rgba<u8>, margin: u32 },
    /// Top-to-bottom blend with a frame of width `max(1, edge / border_divisor)`.
    VerticalGradient {
        top: Rgba<u8>,
        bottom: Rgba<u8>,
        border: Rgba<u8>,
        border_divisor: u32,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShadowOffset {
    Fixed(u32),
    /// `max(1, edge / divisor)`
    Proportional { divisor: u32 },
}

impl ShadowOffset {
    pub fn pixels(self, edge: u32) -> u32 {
        match self {
            ShadowOffset::Fixed(px) => px,
            ShadowOffset::Proportional { divisor } => (edge / divisor.max(1)).max(1),
        }
    }
}

/// Everything about an icon except its size.
#[derive(Debug, Clone, PartialEq)]
pub struct IconStyle {
    pub background: Background,
    pub text: String,
    pub fonts: Vec<FontCandidate>,
    pub text_color: Rgba<u8>,
    pub shadow_color: Rgba<u8>,
    pub shadow_offset: ShadowOffset,
    /// Upward nudge of the text, in percent of the edge length.
    pub lift_percent: u32,
}

impl IconStyle {
    /// Round pink launcher icon used for the Android mipmaps.
    pub fn launcher() -> Self {
        Self {
            background: Background::RadialSolid {
                color: LAUNCHER_PINK,
                margin: 2,
            },
            text: DEFAULT_TEXT.to_string(),
            fonts: vec![
                FontCandidate::file("C:/Windows/Fonts/IMPRISHA.TTF", FontScale::new(2, 5)),
                FontCandidate::file("arial.ttf", FontScale::new(7, 20)),
                FontCandidate::builtin(FontScale::new(1, 3)),
            ],
            text_color: WHITE,
            shadow_color: Rgba([0, 0, 0, 100]),
            shadow_offset: ShadowOffset::Fixed(1),
            lift_percent: 2,
        }
    }

    /// Square gradient icon used for the web manifest icons and favicon.
    pub fn web() -> Self {
        Self {
            background: Background::VerticalGradient {
                top: WEB_GRADIENT_TOP,
                bottom: WEB_GRADIENT_BOTTOM,
                border: WHITE,
                border_divisor: 64,
            },
            text: DEFAULT_TEXT.to_string(),
            fonts: vec![
                FontCandidate::file("arial.ttf", FontScale::new(1, 2)),
                FontCandidate::builtin(FontScale::new(1, 3)),
            ],
            text_color: WHITE,
            shadow_color: Rgba([0, 0, 0, 128]),
            shadow_offset: ShadowOffset::Proportional { divisor: 128 },
            lift_percent: 0,
        }
    }

    /// Tries `paths` before the existing chain, at the scale of its first entry.
    pub fn prefer_fonts(&mut self, paths: &[PathBuf]) {
        if paths.is_empty() {
            return;
        }
        let scale = self
            .fonts
            .first()
            .map(|candidate| candidate.scale)
            .unwrap_or(crate::font::BUILTIN_FALLBACK_SCALE);
        let mut fonts: Vec<FontCandidate> = paths
            .iter()
            .map(|path| FontCandidate::file(path.clone(), scale))
            .collect();
        fonts.append(&mut self.fonts);
        self.fonts = fonts;
    }

    /// Applies one section of a style file.
    pub fn apply(&mut self, overrides: &StyleOverrides) -> Result<()> {
        if let Some(primary) = &overrides.primary {
            let color = parse_color(primary)?;
            match &mut self.background {
                Background::RadialSolid { color: fill, .. } => *fill = color,
                Background::VerticalGradient { top, .. } => *top = color,
            }
        }

        if let Some(secondary) = &overrides.secondary {
            let color = parse_color(secondary)?;
            match &mut self.background {
                Background::VerticalGradient { bottom, .. } => *bottom = color,
                Background::RadialSolid { .. } => {
                    anyhow::bail!("`secondary` only applies to the gradient style")
                }
            }
        }

        if let Some(text) = &overrides.text {
            self.text = text.clone();
        }

        self.prefer_fonts(&overrides.fonts);
        Ok(())
    }
}

/// Contents of a `--config` style file.
#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct StyleFile {
    pub android: StyleOverrides,
    pub web: StyleOverrides,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct StyleOverrides {
    /// CSS color of the disc, or the top of the gradient.
    pub primary: Option<String>,
    /// CSS color of the bottom of the gradient.
    pub secondary: Option<String>,
    pub text: Option<String>,
    pub fonts: Vec<PathBuf>,
}

impl StyleFile {
    pub fn load(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read style file {}", path.display()))?;
        Self::from_json(&raw).with_context(|| format!("Invalid style file {}", path.display()))
    }

    /// Loads the file when one was given, otherwise no overrides.
    pub fn load_optional(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }

    pub fn from_json(raw: &str) -> Result<Self> {
        serde_json::from_str(raw).context("Failed to parse style JSON")
    }
}

/// Parses a CSS color into an opaque pixel.
pub fn parse_color(value: &str) -> Result<Rgba<u8>> {
    let color = css_color::Srgb::from_str(value)
        .map_err(|_| anyhow::anyhow!("Invalid color: {}", value))?;
    Ok(Rgba([
        (color.red * 255.).round() as u8,
        (color.green * 255.).round() as u8,
        (color.blue * 255.).round() as u8,
        255,
    ]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::font::FontSource;

    #[test]
    fn shadow_offsets() {
        assert_eq!(ShadowOffset::Fixed(1).pixels(512), 1);
        assert_eq!(ShadowOffset::Proportional { divisor: 128 }.pixels(16), 1);
        assert_eq!(ShadowOffset::Proportional { divisor: 128 }.pixels(512), 4);
    }

    #[test]
    fn parses_hex_colors() {
        assert_eq!(parse_color("#ec4899").unwrap(), LAUNCHER_PINK);
        assert_eq!(parse_color("#fff").unwrap(), WHITE);
        assert!(parse_color("not-a-color").is_err());
    }

    #[test]
    fn style_file_overrides_launcher() {
        let file = StyleFile::from_json(
            r##"{ "android": { "primary": "#000000", "text": "AB", "fonts": ["Custom.ttf"] } }"##,
        )
        .unwrap();

        let mut style = IconStyle::launcher();
        style.apply(&file.android).unwrap();

        assert_eq!(
            style.background,
            Background::RadialSolid {
                color: Rgba([0, 0, 0, 255]),
                margin: 2
            }
        );
        assert_eq!(style.text, "AB");
        assert_eq!(style.fonts.len(), 4);
        assert_eq!(
            style.fonts[0].source,
            FontSource::File(PathBuf::from("Custom.ttf"))
        );
        assert_eq!(style.fonts[0].scale, FontScale::new(2, 5));
    }

    #[test]
    fn gradient_takes_both_colors() {
        let file = StyleFile::from_json(
            r##"{ "web": { "primary": "#ffffff", "secondary": "#000000" } }"##,
        )
        .unwrap();

        let mut style = IconStyle::web();
        style.apply(&file.web).unwrap();

        match style.background {
            Background::VerticalGradient { top, bottom, .. } => {
                assert_eq!(top, WHITE);
                assert_eq!(bottom, Rgba([0, 0, 0, 255]));
            }
            other => panic!("unexpected background {:?}", other),
        }
    }

    #[test]
    fn secondary_on_disc_is_rejected() {
        let overrides = StyleOverrides {
            secondary: Some("#000".to_string()),
            ..Default::default()
        };
        assert!(IconStyle::launcher().apply(&overrides).is_err());
    }

    #[test]
    fn unknown_keys_are_rejected() {
        assert!(StyleFile::from_json(r#"{ "ios": {} }"#).is_err());
        assert!(StyleFile::from_json(r#"{ "web": { "colour": "red" } }"#).is_err());
    }

    #[test]
    fn empty_file_changes_nothing() {
        let file = StyleFile::from_json("{}").unwrap();
        let mut style = IconStyle::web();
        style.apply(&file.web).unwrap();
        assert_eq!(style, IconStyle::web());
    }
}
