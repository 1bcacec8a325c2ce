//! Length and geometry value types.
//!
//! # Example
//!
//! ```
//! use horizon_classname::types::Dp;
//!
//! let spacing = Dp::new(4.0) * 3.0;
//! assert_eq!(spacing, Dp(12.0));
//! assert_eq!(-spacing, Dp(-12.0));
//! ```

use std::fmt;
use std::ops::{Mul, Neg};

/// A length in density-independent units.
///
/// Padding and corner radii are always non-negative; offsets may be signed.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default)]
pub struct Dp(pub f32);

impl Dp {
    /// Zero length.
    pub const ZERO: Self = Self(0.0);

    /// Create a length from a raw unit value.
    #[inline]
    pub const fn new(value: f32) -> Self {
        Self(value)
    }

    /// The raw unit value.
    #[inline]
    pub const fn get(self) -> f32 {
        self.0
    }

    /// Check if this length is exactly zero.
    #[inline]
    pub fn is_zero(self) -> bool {
        self.0 == 0.0
    }

    /// Check if this length is negative.
    #[inline]
    pub fn is_negative(self) -> bool {
        self.0 < 0.0
    }
}

impl Neg for Dp {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        Self(-self.0)
    }
}

impl Mul<f32> for Dp {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: f32) -> Self {
        Self(self.0 * rhs)
    }
}

impl fmt::Display for Dp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}dp", self.0)
    }
}

/// A layout axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    /// The x axis (start/end).
    Horizontal,
    /// The y axis (top/bottom).
    Vertical,
}

/// A single edge of a box.
///
/// `Start` and `End` follow the layout direction rather than left/right.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    /// Top edge.
    Top,
    /// Bottom edge.
    Bottom,
    /// Leading edge.
    Start,
    /// Trailing edge.
    End,
}

impl Side {
    /// The axis this edge lies across.
    pub fn axis(self) -> Axis {
        match self {
            Side::Top | Side::Bottom => Axis::Vertical,
            Side::Start | Side::End => Axis::Horizontal,
        }
    }
}

/// Direction of a linear gradient.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Left to right.
    ToRight,
    /// Top to bottom.
    ToBottom,
}

impl Direction {
    /// The axis the gradient runs along.
    pub fn axis(self) -> Axis {
        match self {
            Direction::ToRight => Axis::Horizontal,
            Direction::ToBottom => Axis::Vertical,
        }
    }
}
