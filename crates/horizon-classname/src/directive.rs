//! Resolved style directives and ordered directive sequences.

use crate::types::{Axis, Color, ColorStop, Direction, Dp, Side};

/// One resolved style effect, produced from a single token.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum StyleDirective {
    /// Uniform padding on every edge.
    PaddingAll(Dp),
    /// Padding on both edges of one axis.
    PaddingAxis(Axis, Dp),
    /// Padding on a single edge.
    PaddingSide(Side, Dp),
    /// Positional offset `(x, y)`, used as a margin approximation.
    OffsetAll(Dp, Dp),
    /// Signed positional offset along one axis.
    OffsetAxis(Axis, Dp),
    /// Uniform corner rounding.
    CornerRadius(Dp),
    /// Solid background fill.
    Background(Color),
    /// Linear gradient background fill.
    Gradient(Direction, Vec<ColorStop>),
    /// No effect.
    #[default]
    Identity,
}

impl StyleDirective {
    /// Check if this directive has no effect.
    pub fn is_identity(&self) -> bool {
        matches!(self, StyleDirective::Identity)
    }

    /// Short name of the directive kind, for diagnostics.
    pub fn kind(&self) -> &'static str {
        match self {
            StyleDirective::PaddingAll(_) => "padding-all",
            StyleDirective::PaddingAxis(..) => "padding-axis",
            StyleDirective::PaddingSide(..) => "padding-side",
            StyleDirective::OffsetAll(..) => "offset-all",
            StyleDirective::OffsetAxis(..) => "offset-axis",
            StyleDirective::CornerRadius(_) => "corner-radius",
            StyleDirective::Background(_) => "background",
            StyleDirective::Gradient(..) => "gradient",
            StyleDirective::Identity => "identity",
        }
    }
}

/// Ordered directives, one per input token.
///
/// Order matches the token order of the class string. Later directives may
/// override earlier ones once composed; the sequence itself only preserves
/// emission order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct StyleSequence {
    directives: Vec<StyleDirective>,
}

impl StyleSequence {
    /// Create an empty sequence.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a directive.
    pub fn push(&mut self, directive: StyleDirective) {
        self.directives.push(directive);
    }

    /// Number of directives, including `Identity` entries.
    pub fn len(&self) -> usize {
        self.directives.len()
    }

    /// Check if the sequence is empty.
    pub fn is_empty(&self) -> bool {
        self.directives.is_empty()
    }

    /// Number of directives that have an effect.
    pub fn resolved_count(&self) -> usize {
        self.directives.iter().filter(|d| !d.is_identity()).count()
    }

    /// Iterate over all directives in emission order.
    pub fn iter(&self) -> std::slice::Iter<'_, StyleDirective> {
        self.directives.iter()
    }

    /// Iterate over directives that have an effect.
    pub fn without_identity(&self) -> impl Iterator<Item = &StyleDirective> {
        self.directives.iter().filter(|d| !d.is_identity())
    }

    /// Borrow the directives as a slice.
    pub fn as_slice(&self) -> &[StyleDirective] {
        &self.directives
    }

    /// Consume the sequence, returning the directives.
    pub fn into_vec(self) -> Vec<StyleDirective> {
        self.directives
    }
}

impl From<Vec<StyleDirective>> for StyleSequence {
    fn from(directives: Vec<StyleDirective>) -> Self {
        Self { directives }
    }
}

impl FromIterator<StyleDirective> for StyleSequence {
    fn from_iter<I: IntoIterator<Item = StyleDirective>>(iter: I) -> Self {
        Self {
            directives: iter.into_iter().collect(),
        }
    }
}

impl IntoIterator for StyleSequence {
    type Item = StyleDirective;
    type IntoIter = std::vec::IntoIter<StyleDirective>;

    fn into_iter(self) -> Self::IntoIter {
        self.directives.into_iter()
    }
}

impl<'a> IntoIterator for &'a StyleSequence {
    type Item = &'a StyleDirective;
    type IntoIter = std::slice::Iter<'a, StyleDirective>;

    fn into_iter(self) -> Self::IntoIter {
        self.directives.iter()
    }
}
