//! Resolver configuration: unit scales, named colors and the gradient pair.
//!
//! The defaults reproduce the built-in constants. A configuration can also be
//! read from TOML, where every key is optional:
//!
//! ```
//! use horizon_classname::ResolverConfig;
//!
//! let config = ResolverConfig::from_toml_str(r##"
//! radius_unit = 2.0
//!
//! [colors]
//! brand = "#FF112233"
//! "##).unwrap();
//!
//! assert_eq!(config.spacing_unit, 4.0);
//! assert_eq!(config.radius_unit, 2.0);
//! assert!(config.palette.contains("brand"));
//! assert!(config.palette.contains("primary"));
//! ```

use std::collections::{BTreeMap, HashMap};
use std::path::Path;

use serde::Deserialize;

use crate::logging::targets;
use crate::types::{Color, ColorStop};
use crate::{Error, Result};

/// Multiplier for integer spacing counts (`p-4` is 16 units).
pub const SPACE_UNIT: f32 = 4.0;

/// Multiplier for integer radius counts (`r-2` is 8 units).
pub const RADIUS_UNIT: f32 = 4.0;

/// Named colors available to `bg-<name>` tokens.
#[derive(Debug, Clone, PartialEq)]
pub struct ColorPalette {
    colors: HashMap<String, Color>,
}

impl ColorPalette {
    /// Create a palette with no named colors.
    pub fn empty() -> Self {
        Self {
            colors: HashMap::new(),
        }
    }

    /// The built-in palette.
    pub fn builtin() -> Self {
        let mut palette = Self::empty();
        palette.insert("black", Color::BLACK);
        palette.insert("white", Color::WHITE);
        palette.insert("red", Color::RED);
        palette.insert("blue", Color::from_argb_u32(0xFF3B82F6));
        palette.insert("green", Color::from_argb_u32(0xFF22C55E));
        palette.insert("primary", Color::from_argb_u32(0xFF6366F1));
        palette
    }

    /// Add or replace a named color.
    pub fn insert(&mut self, name: impl Into<String>, color: Color) {
        self.colors.insert(name.into(), color);
    }

    /// Look up a named color. Names are case-sensitive.
    pub fn get(&self, name: &str) -> Option<Color> {
        self.colors.get(name).copied()
    }

    /// Check if a name is defined.
    pub fn contains(&self, name: &str) -> bool {
        self.colors.contains_key(name)
    }

    /// Number of named colors.
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    /// Check if the palette has no colors.
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    /// Iterate over all named colors, in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, Color)> {
        self.colors.iter().map(|(k, v)| (k.as_str(), *v))
    }
}

impl Default for ColorPalette {
    fn default() -> Self {
        Self::builtin()
    }
}

/// The two colors used by the `bg-gradient-to-*` tokens.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GradientColors {
    /// Color at the start of the gradient.
    pub from: Color,
    /// Color at the end of the gradient.
    pub to: Color,
}

impl GradientColors {
    /// Create a gradient pair.
    pub const fn new(from: Color, to: Color) -> Self {
        Self { from, to }
    }

    /// Stops spread evenly from `from` to `to`.
    pub fn stops(&self) -> Vec<ColorStop> {
        ColorStop::evenly_spaced(&[self.from, self.to])
    }
}

impl Default for GradientColors {
    fn default() -> Self {
        Self::new(
            Color::from_argb_u32(0xFF6366F1),
            Color::from_argb_u32(0xFFEC4899),
        )
    }
}

/// Everything a [`Resolver`](crate::Resolver) needs besides the grammar.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolverConfig {
    /// Multiplier for padding and offset counts.
    pub spacing_unit: f32,
    /// Multiplier for corner radius counts.
    pub radius_unit: f32,
    /// Named colors for `bg-<name>`.
    pub palette: ColorPalette,
    /// Colors for the gradient tokens.
    pub gradient: GradientColors,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            spacing_unit: SPACE_UNIT,
            radius_unit: RADIUS_UNIT,
            palette: ColorPalette::builtin(),
            gradient: GradientColors::default(),
        }
    }
}

/// On-disk shape of a configuration document.
#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct ConfigFile {
    spacing_unit: Option<f32>,
    radius_unit: Option<f32>,
    colors: BTreeMap<String, String>,
    gradient: Option<GradientFile>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct GradientFile {
    from: Option<String>,
    to: Option<String>,
}

impl ResolverConfig {
    /// Parse a TOML document, layering it over the defaults.
    ///
    /// Entries under `[colors]` extend the built-in palette and replace
    /// built-in names they collide with.
    pub fn from_toml_str(source: &str) -> Result<Self> {
        let file: ConfigFile = toml::from_str(source)?;
        let mut config = Self::default();

        if let Some(unit) = file.spacing_unit {
            config.spacing_unit = unit;
        }
        if let Some(unit) = file.radius_unit {
            config.radius_unit = unit;
        }

        for (name, value) in &file.colors {
            if !is_color_name(name) {
                return Err(Error::config(format!("invalid color name '{}'", name)));
            }
            config.palette.insert(name.clone(), parse_config_color(name, value)?);
        }

        if let Some(gradient) = &file.gradient {
            if let Some(from) = &gradient.from {
                config.gradient.from = parse_config_color("gradient.from", from)?;
            }
            if let Some(to) = &gradient.to {
                config.gradient.to = parse_config_color("gradient.to", to)?;
            }
        }

        config.validate()?;

        tracing::debug!(
            target: targets::CONFIG,
            spacing_unit = config.spacing_unit,
            radius_unit = config.radius_unit,
            colors = config.palette.len(),
            "loaded resolver configuration"
        );

        Ok(config)
    }

    /// Read and parse a TOML configuration file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
        Self::from_toml_str(&source)
    }

    /// Check that unit scales are finite and positive.
    pub fn validate(&self) -> Result<()> {
        for (name, value) in [
            ("spacing_unit", self.spacing_unit),
            ("radius_unit", self.radius_unit),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(Error::invalid_unit(name, value));
            }
        }
        Ok(())
    }
}

/// A name must be addressable from a token: non-empty, no whitespace, and
/// free of the characters the `bg-` grammar reserves.
fn is_color_name(name: &str) -> bool {
    !name.is_empty()
        && !name
            .chars()
            .any(|c| c.is_whitespace() || matches!(c, '/' | '[' | ']' | '#'))
}

fn parse_config_color(name: &str, value: &str) -> Result<Color> {
    if !value.starts_with('#') {
        return Err(Error::invalid_color(name, value));
    }
    Color::from_hex(value).ok_or_else(|| Error::invalid_color(name, value))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_palette() {
        let palette = ColorPalette::builtin();
        assert_eq!(palette.len(), 6);
        assert_eq!(palette.get("red"), Some(Color::RED));
        assert_eq!(palette.get("blue"), Color::from_hex("#3B82F6"));
        assert_eq!(palette.get("Red"), None);

        let mut names: Vec<_> = palette.iter().map(|(name, _)| name).collect();
        names.sort_unstable();
        assert_eq!(names, ["black", "blue", "green", "primary", "red", "white"]);
    }

    #[test]
    fn default_gradient_stops() {
        let stops = GradientColors::default().stops();
        assert_eq!(stops.len(), 2);
        assert_eq!(stops[0].offset, 0.0);
        assert_eq!(stops[0].color, Color::from_hex("#6366F1").unwrap());
        assert_eq!(stops[1].offset, 1.0);
        assert_eq!(stops[1].color, Color::from_hex("#EC4899").unwrap());
    }

    #[test]
    fn empty_document_is_default() {
        let config = ResolverConfig::from_toml_str("").unwrap();
        assert_eq!(config, ResolverConfig::default());
    }

    #[test]
    fn integer_units_are_accepted() {
        let config = ResolverConfig::from_toml_str("spacing_unit = 8").unwrap();
        assert_eq!(config.spacing_unit, 8.0);
    }

    #[test]
    fn palette_overrides_builtin() {
        let config = ResolverConfig::from_toml_str(
            r##"
            [colors]
            red = "#CC0000"
            "##,
        )
        .unwrap();
        assert_eq!(config.palette.get("red"), Color::from_hex("#CC0000"));
    }

    #[test]
    fn gradient_override() {
        let config = ResolverConfig::from_toml_str(
            r##"
            [gradient]
            from = "#000000"
            to = "#FFFFFF"
            "##,
        )
        .unwrap();
        assert_eq!(config.gradient, GradientColors::new(Color::BLACK, Color::WHITE));
    }

    #[test]
    fn gradient_single_end_override() {
        let config = ResolverConfig::from_toml_str(
            r##"
            [gradient]
            from = "#000000"
            "##,
        )
        .unwrap();
        assert_eq!(config.gradient.from, Color::BLACK);
        assert_eq!(config.gradient.to, GradientColors::default().to);

        let config = ResolverConfig::from_toml_str("[gradient]").unwrap();
        assert_eq!(config.gradient, GradientColors::default());
    }

    #[test]
    fn rejects_bad_color() {
        let err = ResolverConfig::from_toml_str(
            r##"
            [colors]
            brand = "rgb(1, 2, 3)"
            "##,
        )
        .unwrap_err();
        assert!(matches!(err, Error::InvalidColor { ref name, .. } if name == "brand"));
    }

    #[test]
    fn first_invalid_color_is_reported() {
        for _ in 0..8 {
            let err = ResolverConfig::from_toml_str(
                r##"
                [colors]
                zeta = "nope"
                alpha = "#XYZ"
                mid = "also-bad"
                "##,
            )
            .unwrap_err();
            assert!(matches!(err, Error::InvalidColor { ref name, .. } if name == "alpha"));
        }
    }

    #[test]
    fn rejects_reserved_color_name() {
        let err = ResolverConfig::from_toml_str(
            r##"
            [colors]
            "a/b" = "#000000"
            "##,
        )
        .unwrap_err();
        assert!(matches!(err, Error::Config { .. }));
    }

    #[test]
    fn rejects_non_positive_unit() {
        let err = ResolverConfig::from_toml_str("radius_unit = 0.0").unwrap_err();
        assert!(matches!(err, Error::InvalidUnit { ref name, .. } if name == "radius_unit"));
    }

    #[test]
    fn rejects_unknown_keys() {
        let err = ResolverConfig::from_toml_str("breakpoints = 3").unwrap_err();
        assert!(matches!(err, Error::Config { .. }));
    }
}
