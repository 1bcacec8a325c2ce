//! Length literal parsing shared by the padding, offset and radius families.

use crate::types::Dp;

/// Whether a length family accepts negative values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Sign {
    NonNegative,
    Signed,
}

/// Strip the `[` `]` delimiters of a raw value.
pub(crate) fn bracketed(value: &str) -> Option<&str> {
    value.strip_prefix('[')?.strip_suffix(']')
}

/// Parse a length suffix.
///
/// `[12.5dp]` and `[12.5]` are exact lengths; a bare integer is a count
/// multiplied by `unit`. Other unit suffixes are not recognized.
pub(crate) fn parse_length(value: &str, unit: f32, sign: Sign) -> Option<Dp> {
    let dp = match bracketed(value) {
        Some(raw) => parse_raw_dp(raw)?,
        None => Dp(value.parse::<i32>().ok()? as f32 * unit),
    };

    if !dp.get().is_finite() || (sign == Sign::NonNegative && dp.is_negative()) {
        return None;
    }
    // Adding +0.0 turns -0.0 into +0.0.
    Some(Dp(dp.get() + 0.0))
}

fn parse_raw_dp(raw: &str) -> Option<Dp> {
    let number = raw.strip_suffix("dp").unwrap_or(raw);
    number.parse::<f32>().ok().map(Dp)
}
