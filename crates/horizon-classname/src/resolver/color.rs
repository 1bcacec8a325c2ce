//! Background color and opacity parsing.

use super::length::bracketed;
use crate::config::ColorPalette;
use crate::types::Color;

/// Parse the suffix of a `bg-` token: `<color>[/<opacity>]`.
///
/// The opacity is an integer percentage clamped to `0..=100`. A missing or
/// non-integer opacity means fully opaque. The computed alpha replaces the
/// alpha of the base color.
pub(crate) fn parse_background(palette: &ColorPalette, value: &str) -> Option<Color> {
    let (color_part, opacity_part) = match value.split_once('/') {
        Some((color, opacity)) => (color, Some(opacity)),
        None => (value, None),
    };

    let base = match bracketed(color_part) {
        Some(raw) => parse_raw_color(raw)?,
        None => palette
            .get(color_part)
            .or_else(|| parse_raw_color(color_part))?,
    };

    let alpha = opacity_part.and_then(parse_opacity).unwrap_or(1.0);
    Some(base.with_alpha(alpha))
}

fn parse_opacity(value: &str) -> Option<f32> {
    let percent = value.parse::<i32>().ok()?;
    Some(percent.clamp(0, 100) as f32 / 100.0)
}

/// Parse `#RRGGBB`, `#AARRGGBB` or `rgb(r, g, b)`.
pub(crate) fn parse_raw_color(raw: &str) -> Option<Color> {
    if raw.starts_with('#') {
        return Color::from_hex(raw);
    }

    let channels = raw.strip_prefix("rgb(")?.strip_suffix(')')?;
    let channels = channels
        .split(',')
        .map(|c| c.trim().parse::<u8>().ok())
        .collect::<Option<Vec<_>>>()?;

    match channels[..] {
        [r, g, b] => Some(Color::from_rgb8(r, g, b)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bg(value: &str) -> Option<Color> {
        parse_background(&ColorPalette::builtin(), value)
    }

    #[test]
    fn named_colors() {
        assert_eq!(bg("red"), Some(Color::RED));
        assert_eq!(bg("primary"), Color::from_hex("#6366F1"));
        assert_eq!(bg("magenta"), None);
    }

    #[test]
    fn raw_colors() {
        assert_eq!(bg("[#112233]"), Some(Color::from_rgb8(0x11, 0x22, 0x33)));
        assert_eq!(bg("[rgb(1,2,3)]"), Some(Color::from_rgb8(1, 2, 3)));
        assert_eq!(bg("[rgb( 1 , 2 ,3 )]"), Some(Color::from_rgb8(1, 2, 3)));
    }

    #[test]
    fn bracketed_names_are_not_looked_up() {
        assert_eq!(bg("[red]"), None);
    }

    #[test]
    fn rgb_needs_three_channels_in_range() {
        assert_eq!(parse_raw_color("rgb(1,2)"), None);
        assert_eq!(parse_raw_color("rgb(1,2,3,4)"), None);
        assert_eq!(parse_raw_color("rgb(-1,2,3)"), None);
        assert_eq!(parse_raw_color("rgb(1,2,256)"), None);
        assert_eq!(parse_raw_color("rgb(1,2,3"), None);
        assert_eq!(parse_raw_color("rgba(1,2,3)"), None);
    }

    #[test]
    fn opacity_replaces_alpha() {
        assert_eq!(bg("red/50").map(|c| c.a), Some(0.5));
        assert_eq!(bg("red/0").map(|c| c.a), Some(0.0));
        assert_eq!(bg("[#80FF0000]").map(|c| c.a), Some(1.0));
        assert_eq!(bg("[#80FF0000]/25").map(|c| c.a), Some(0.25));
    }

    #[test]
    fn opacity_is_clamped() {
        assert_eq!(bg("red/150").map(|c| c.a), Some(1.0));
        assert_eq!(bg("red/-20").map(|c| c.a), Some(0.0));
    }

    #[test]
    fn bad_opacity_means_opaque() {
        assert_eq!(bg("red/half"), Some(Color::RED));
        assert_eq!(bg("red/"), Some(Color::RED));
        assert_eq!(bg("red/50/50"), Some(Color::RED));
    }

    #[test]
    fn opacity_does_not_rescue_bad_color() {
        assert_eq!(bg("nope/50"), None);
        assert_eq!(bg("/50"), None);
    }
}
