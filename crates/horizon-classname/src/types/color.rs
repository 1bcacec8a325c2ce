//! Straight-alpha RGBA colors.

use std::fmt;

/// An RGBA color with straight (non-premultiplied) alpha.
///
/// All channels are in the `0.0..=1.0` range. Changing the alpha with
/// [`with_alpha`](Self::with_alpha) leaves the color channels untouched.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    /// Create a color from RGBA components (0.0-1.0 range).
    #[inline]
    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Create an opaque color from RGB components.
    #[inline]
    pub const fn from_rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    /// Create a color from 8-bit RGBA components (0-255 range).
    #[inline]
    pub fn from_rgba8(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self::new(
            r as f32 / 255.0,
            g as f32 / 255.0,
            b as f32 / 255.0,
            a as f32 / 255.0,
        )
    }

    /// Create an opaque color from 8-bit RGB components.
    #[inline]
    pub fn from_rgb8(r: u8, g: u8, b: u8) -> Self {
        Self::from_rgba8(r, g, b, 255)
    }

    /// Create a color from a 32-bit ARGB value (0xAARRGGBB).
    #[inline]
    pub fn from_argb_u32(argb: u32) -> Self {
        Self::from_rgba8(
            ((argb >> 16) & 0xFF) as u8,
            ((argb >> 8) & 0xFF) as u8,
            (argb & 0xFF) as u8,
            ((argb >> 24) & 0xFF) as u8,
        )
    }

    /// Create a color from a hex string.
    ///
    /// Accepts `#RRGGBB` and `#AARRGGBB`; the leading `#` is optional.
    ///
    /// ```
    /// use horizon_classname::types::Color;
    ///
    /// assert_eq!(Color::from_hex("#FF0000"), Some(Color::RED));
    /// assert_eq!(Color::from_hex("#80000000").map(|c| c.a), Some(128.0 / 255.0));
    /// assert_eq!(Color::from_hex("#F00"), None);
    /// ```
    pub fn from_hex(hex: &str) -> Option<Self> {
        let hex = hex.strip_prefix('#').unwrap_or(hex);
        if !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
            return None;
        }

        let value = u32::from_str_radix(hex, 16).ok()?;
        match hex.len() {
            6 => Some(Self::from_argb_u32(0xFF00_0000 | value)),
            8 => Some(Self::from_argb_u32(value)),
            _ => None,
        }
    }

    /// Format as `#RRGGBB`, or `#AARRGGBB` when not fully opaque.
    pub fn to_hex(&self) -> String {
        let [r, g, b, a] = self.to_rgba8();
        if a == 255 {
            format!("#{:02X}{:02X}{:02X}", r, g, b)
        } else {
            format!("#{:02X}{:02X}{:02X}{:02X}", a, r, g, b)
        }
    }

    /// Quantize to 8-bit `[r, g, b, a]`.
    pub fn to_rgba8(&self) -> [u8; 4] {
        let q = |c: f32| (c.clamp(0.0, 1.0) * 255.0).round() as u8;
        [q(self.r), q(self.g), q(self.b), q(self.a)]
    }

    /// Return the same color with its alpha replaced.
    #[inline]
    pub fn with_alpha(self, alpha: f32) -> Self {
        Self { a: alpha, ..self }
    }

    /// Check if the color is fully opaque.
    #[inline]
    pub fn is_opaque(&self) -> bool {
        self.a >= 1.0
    }

    // Common colors
    pub const TRANSPARENT: Self = Self::new(0.0, 0.0, 0.0, 0.0);
    pub const BLACK: Self = Self::from_rgb(0.0, 0.0, 0.0);
    pub const WHITE: Self = Self::from_rgb(1.0, 1.0, 1.0);
    pub const RED: Self = Self::from_rgb(1.0, 0.0, 0.0);
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

/// A gradient color stop.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColorStop {
    /// Position along the gradient (0.0 to 1.0).
    pub offset: f32,
    /// Color at this stop.
    pub color: Color,
}

impl ColorStop {
    /// Create a new color stop.
    #[inline]
    pub const fn new(offset: f32, color: Color) -> Self {
        Self { offset, color }
    }

    /// Spread colors evenly from offset 0.0 to 1.0.
    pub fn evenly_spaced(colors: &[Color]) -> Vec<Self> {
        match colors.len() {
            0 => Vec::new(),
            1 => vec![Self::new(0.0, colors[0])],
            n => {
                let step = 1.0 / (n - 1) as f32;
                colors
                    .iter()
                    .enumerate()
                    .map(|(i, &color)| Self::new(i as f32 * step, color))
                    .collect()
            }
        }
    }
}
