//! Reference style value built by folding directives.

use horizon_classname::StyleDirective;
use horizon_classname::types::{Axis, Color, ColorStop, Direction, Side};

use crate::edges::{Edges, Offset};
use crate::modifier::StyleModifier;

/// Background fill of a composed style.
#[derive(Debug, Clone, PartialEq)]
pub enum Background {
    /// Solid color fill (alpha is blended by the renderer).
    Solid(Color),
    /// Linear gradient fill.
    LinearGradient {
        /// Direction the gradient runs in.
        direction: Direction,
        /// Color stops, at least two.
        stops: Vec<ColorStop>,
    },
}

/// A fully resolved element style.
///
/// Same-kind directives are last-wins: a later `p-*` replaces the padding
/// edges it names, a later `bg-*` replaces the background, and so on. Edges
/// and axes a directive does not name keep their earlier values.
///
/// ```
/// use horizon_classname_style::prelude::*;
///
/// let style = ComposedStyle::new().classname("p-4 px-1 bg-red bg-white");
///
/// assert_eq!(style.padding, Edges::symmetric(16.0, 4.0));
/// assert_eq!(style.background, Some(Background::Solid(Color::WHITE)));
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ComposedStyle {
    /// Inner spacing.
    pub padding: Edges,
    /// Positional offset used as a margin approximation.
    pub offset: Offset,
    /// Uniform corner radius, if set.
    pub corner_radius: Option<f32>,
    /// Background fill, if set.
    pub background: Option<Background>,
}

impl ComposedStyle {
    /// Create an identity style.
    pub fn new() -> Self {
        Self::default()
    }

    // === Box Model ===

    /// Set uniform padding on all sides.
    pub fn padding_all(mut self, value: f32) -> Self {
        self.padding = Edges::uniform(value);
        self
    }

    /// Set padding on both edges of an axis.
    pub fn padding_axis(mut self, axis: Axis, value: f32) -> Self {
        self.padding.set_axis(axis, value);
        self
    }

    /// Set padding on a single edge.
    pub fn padding_side(mut self, side: Side, value: f32) -> Self {
        self.padding.set_side(side, value);
        self
    }

    /// Set the offset on both axes.
    pub fn offset(mut self, x: f32, y: f32) -> Self {
        self.offset = Offset::new(x, y);
        self
    }

    /// Set the offset along one axis.
    pub fn offset_axis(mut self, axis: Axis, value: f32) -> Self {
        self.offset.set_axis(axis, value);
        self
    }

    /// Set the corner radius.
    pub fn corner_radius(mut self, radius: f32) -> Self {
        self.corner_radius = Some(radius);
        self
    }

    // === Background ===

    /// Set a solid background color.
    pub fn background_color(mut self, color: Color) -> Self {
        self.background = Some(Background::Solid(color));
        self
    }

    /// Set a linear gradient background.
    pub fn linear_gradient(mut self, direction: Direction, stops: Vec<ColorStop>) -> Self {
        self.background = Some(Background::LinearGradient { direction, stops });
        self
    }
}

impl StyleModifier for ComposedStyle {
    fn then(self, directive: &StyleDirective) -> Self {
        match directive {
            StyleDirective::PaddingAll(v) => self.padding_all(v.get()),
            StyleDirective::PaddingAxis(axis, v) => self.padding_axis(*axis, v.get()),
            StyleDirective::PaddingSide(side, v) => self.padding_side(*side, v.get()),
            StyleDirective::OffsetAll(x, y) => self.offset(x.get(), y.get()),
            StyleDirective::OffsetAxis(axis, v) => self.offset_axis(*axis, v.get()),
            StyleDirective::CornerRadius(v) => self.corner_radius(v.get()),
            StyleDirective::Background(color) => self.background_color(*color),
            StyleDirective::Gradient(direction, stops) => {
                self.linear_gradient(*direction, stops.clone())
            }
            StyleDirective::Identity => self,
        }
    }
}
