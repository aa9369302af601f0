//! Configuration types for Freebody diagram rendering.
//!
//! All types implement [`serde::Deserialize`] so they can be loaded from a
//! TOML file; every field has a default, so a partial file is fine.
//!
//! # Overview
//!
//! - [`AppConfig`] - Top-level configuration combining layout and style settings.
//! - [`LayoutConfig`] - Anchor ratio, incline height, block size and force length.
//! - [`StyleConfig`] - Background color and the [`PaletteConfig`].
//!
//! # Example
//!
//! ```
//! # use freebody::config::AppConfig;
//! let config = AppConfig::default();
//! assert_eq!(config.layout().incline_height(), 150.0);
//! assert!(config.style().background_color().unwrap().is_none());
//! ```

use serde::Deserialize;

use freebody_core::color::Color;

/// Top-level application configuration combining layout and style settings.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Layout configuration section.
    #[serde(default)]
    layout: LayoutConfig,

    /// Style configuration section.
    #[serde(default)]
    style: StyleConfig,
}

impl AppConfig {
    /// Creates a new [`AppConfig`] with the specified layout and style configurations.
    pub fn new(layout: LayoutConfig, style: StyleConfig) -> Self {
        Self { layout, style }
    }

    /// Returns the layout configuration.
    pub fn layout(&self) -> &LayoutConfig {
        &self.layout
    }

    /// Returns the style configuration.
    pub fn style(&self) -> &StyleConfig {
        &self.style
    }
}

/// Geometric constants of the inclined-plane layout.
///
/// | Key | Default | Meaning |
/// |-----|---------|---------|
/// | `anchor_y_ratio` | `0.7` | Vertical position of the incline base, as a fraction of surface height |
/// | `incline_height` | `150` | Height of the incline triangle |
/// | `block_size` | `40` | Side of the square block |
/// | `force_length` | `100` | Length of the gravity arrow; other forces are scaled from it |
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    anchor_y_ratio: f32,
    incline_height: f32,
    block_size: f32,
    force_length: f32,
}

impl LayoutConfig {
    /// Creates a layout configuration from explicit values.
    pub fn new(anchor_y_ratio: f32, incline_height: f32, block_size: f32, force_length: f32) -> Self {
        Self {
            anchor_y_ratio,
            incline_height,
            block_size,
            force_length,
        }
    }

    pub fn anchor_y_ratio(&self) -> f32 {
        self.anchor_y_ratio
    }

    pub fn incline_height(&self) -> f32 {
        self.incline_height
    }

    pub fn block_size(&self) -> f32 {
        self.block_size
    }

    pub fn force_length(&self) -> f32 {
        self.force_length
    }

    /// Checks that every value is usable for layout.
    ///
    /// # Errors
    ///
    /// Returns a message naming the first offending key.
    pub fn validate(&self) -> Result<(), String> {
        if !(0.0..=1.0).contains(&self.anchor_y_ratio) {
            return Err(format!(
                "layout.anchor_y_ratio must be between 0 and 1, got {}",
                self.anchor_y_ratio
            ));
        }

        for (key, value) in [
            ("incline_height", self.incline_height),
            ("block_size", self.block_size),
            ("force_length", self.force_length),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(format!("layout.{key} must be a positive number, got {value}"));
            }
        }

        Ok(())
    }
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            anchor_y_ratio: 0.7,
            incline_height: 150.0,
            block_size: 40.0,
            force_length: 100.0,
        }
    }
}

/// Visual styling configuration for rendered diagrams.
#[derive(Debug, Default, Clone, Deserialize)]
pub struct StyleConfig {
    /// Background color of the exported SVG, as a color string.
    #[serde(default)]
    background_color: Option<String>,

    /// Colors of the diagram elements.
    #[serde(default)]
    palette: PaletteConfig,
}

impl StyleConfig {
    /// Returns the parsed background [`Color`], or `None` if no color is configured.
    ///
    /// # Errors
    ///
    /// Returns an error if the configured color string cannot be parsed.
    pub fn background_color(&self) -> Result<Option<Color>, String> {
        self.background_color
            .as_ref()
            .map(|color| Color::new(color))
            .transpose()
            .map_err(|err| format!("Invalid background color in config: {err}"))
    }

    /// Returns the palette section.
    pub fn palette(&self) -> &PaletteConfig {
        &self.palette
    }
}

/// Color strings for each diagram element.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct PaletteConfig {
    incline_fill: String,
    incline_stroke: String,
    block_fill: String,
    block_stroke: String,
    gravity: String,
    normal: String,
    friction: String,
}

impl Default for PaletteConfig {
    fn default() -> Self {
        Self {
            incline_fill: "#ccc".to_string(),
            incline_stroke: "#555".to_string(),
            block_fill: "red".to_string(),
            block_stroke: "black".to_string(),
            gravity: "blue".to_string(),
            normal: "green".to_string(),
            friction: "orange".to_string(),
        }
    }
}

impl PaletteConfig {
    /// Parses every entry into a [`Palette`].
    ///
    /// # Errors
    ///
    /// Returns a message naming the first entry that is not a valid color.
    pub fn resolve(&self) -> Result<Palette, String> {
        let parse = |key: &str, value: &str| {
            Color::new(value).map_err(|err| format!("Invalid style.palette.{key}: {err}"))
        };

        Ok(Palette {
            incline_fill: parse("incline_fill", &self.incline_fill)?,
            incline_stroke: parse("incline_stroke", &self.incline_stroke)?,
            block_fill: parse("block_fill", &self.block_fill)?,
            block_stroke: parse("block_stroke", &self.block_stroke)?,
            gravity: parse("gravity", &self.gravity)?,
            normal: parse("normal", &self.normal)?,
            friction: parse("friction", &self.friction)?,
        })
    }
}

/// Parsed palette used while drawing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Palette {
    pub incline_fill: Color,
    pub incline_stroke: Color,
    pub block_fill: Color,
    pub block_stroke: Color,
    pub gravity: Color,
    pub normal: Color,
    pub friction: Color,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_layout() {
        let layout = LayoutConfig::default();
        assert_eq!(layout.anchor_y_ratio(), 0.7);
        assert_eq!(layout.incline_height(), 150.0);
        assert_eq!(layout.block_size(), 40.0);
        assert_eq!(layout.force_length(), 100.0);
        assert!(layout.validate().is_ok());
    }

    #[test]
    fn test_layout_validate_rejects_bad_values() {
        let err = LayoutConfig::new(1.5, 150.0, 40.0, 100.0)
            .validate()
            .unwrap_err();
        assert!(err.contains("anchor_y_ratio"));

        let err = LayoutConfig::new(0.5, 0.0, 40.0, 100.0)
            .validate()
            .unwrap_err();
        assert!(err.contains("incline_height"));

        let err = LayoutConfig::new(0.5, 150.0, 40.0, f32::NAN)
            .validate()
            .unwrap_err();
        assert!(err.contains("force_length"));
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let config: AppConfig = toml::from_str(
            r##"
            [layout]
            anchor_y_ratio = 0.5

            [style]
            background_color = "white"

            [style.palette]
            gravity = "#123456"
            "##,
        )
        .unwrap();

        assert_eq!(config.layout().anchor_y_ratio(), 0.5);
        assert_eq!(config.layout().incline_height(), 150.0);
        assert!(config.style().background_color().unwrap().is_some());

        let palette = config.style().palette().resolve().unwrap();
        assert_eq!(palette.gravity, Color::new("#123456").unwrap());
        assert_eq!(palette.normal, Color::new("green").unwrap());
    }

    #[test]
    fn test_palette_resolve_reports_key() {
        let config: AppConfig = toml::from_str(
            r#"
            [style.palette]
            friction = "definitely-not-a-color"
            "#,
        )
        .unwrap();

        let err = config.style().palette().resolve().unwrap_err();
        assert!(err.contains("style.palette.friction"));
    }

    #[test]
    fn test_invalid_background_color() {
        let config: AppConfig = toml::from_str("[style]\nbackground_color = \"nope\"").unwrap();
        assert!(config.style().background_color().is_err());
    }
}
