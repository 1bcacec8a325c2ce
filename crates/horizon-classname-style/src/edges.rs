//! Resolved box edges and positional offsets.

use horizon_classname::types::{Axis, Side};

/// Per-edge lengths in density-independent units.
///
/// # Example
///
/// ```
/// use horizon_classname_style::Edges;
///
/// let padding = Edges::symmetric(8.0, 4.0);
/// assert_eq!(padding.horizontal(), 8.0); // start + end
/// assert_eq!(padding.vertical(), 16.0);  // top + bottom
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Edges {
    /// Top edge.
    pub top: f32,
    /// Bottom edge.
    pub bottom: f32,
    /// Leading edge.
    pub start: f32,
    /// Trailing edge.
    pub end: f32,
}

impl Edges {
    /// Zero on every edge.
    pub const ZERO: Self = Self::uniform(0.0);

    /// Same value on every edge.
    pub const fn uniform(value: f32) -> Self {
        Self {
            top: value,
            bottom: value,
            start: value,
            end: value,
        }
    }

    /// Create symmetric edges (vertical, horizontal).
    pub const fn symmetric(vertical: f32, horizontal: f32) -> Self {
        Self {
            top: vertical,
            bottom: vertical,
            start: horizontal,
            end: horizontal,
        }
    }

    /// Replace both edges of one axis.
    pub fn set_axis(&mut self, axis: Axis, value: f32) {
        match axis {
            Axis::Horizontal => {
                self.start = value;
                self.end = value;
            }
            Axis::Vertical => {
                self.top = value;
                self.bottom = value;
            }
        }
    }

    /// Replace a single edge.
    pub fn set_side(&mut self, side: Side, value: f32) {
        match side {
            Side::Top => self.top = value,
            Side::Bottom => self.bottom = value,
            Side::Start => self.start = value,
            Side::End => self.end = value,
        }
    }

    /// Total horizontal space (start + end).
    pub fn horizontal(&self) -> f32 {
        self.start + self.end
    }

    /// Total vertical space (top + bottom).
    pub fn vertical(&self) -> f32 {
        self.top + self.bottom
    }
}

/// A 2D positional offset.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Offset {
    pub x: f32,
    pub y: f32,
}

impl Offset {
    /// No offset.
    pub const ZERO: Self = Self::new(0.0, 0.0);

    /// Create an offset.
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Replace the component along one axis.
    pub fn set_axis(&mut self, axis: Axis, value: f32) {
        match axis {
            Axis::Horizontal => self.x = value,
            Axis::Vertical => self.y = value,
        }
    }
}
