//! The style composition contract and the `classname` entry points.

use horizon_classname::{Resolver, StyleDirective, StyleSequence, default_resolver};

use crate::logging::targets;

/// A style value that directives can be layered onto.
///
/// Implementations fold directives left to right: `base.then(a).then(b)`.
/// [`StyleDirective::Identity`] must leave the value unchanged.
pub trait StyleModifier: Sized {
    /// Layer one directive on top of `self`.
    fn then(self, directive: &StyleDirective) -> Self;

    /// Layer every directive of a sequence, in order.
    fn then_all<'a>(self, directives: impl IntoIterator<Item = &'a StyleDirective>) -> Self {
        directives.into_iter().fold(self, |style, d| style.then(d))
    }
}

/// Apply a class string to any [`StyleModifier`].
///
/// # Example
///
/// ```
/// use horizon_classname_style::prelude::*;
///
/// let style = ComposedStyle::new().classname("p-4 bg-red/50 r-2");
///
/// assert_eq!(style.padding, Edges::uniform(16.0));
/// assert_eq!(style.corner_radius, Some(8.0));
/// ```
pub trait Classname: StyleModifier {
    /// Parse with the default resolver and fold the result onto `self`.
    fn classname(self, class_name: &str) -> Self {
        self.classname_with(default_resolver(), class_name)
    }

    /// Parse with a custom resolver and fold the result onto `self`.
    fn classname_with(self, resolver: &Resolver, class_name: &str) -> Self {
        let sequence = resolver.parse(class_name);
        tracing::trace!(
            target: targets::COMPOSE,
            class_name,
            directives = sequence.len(),
            resolved = sequence.resolved_count(),
            "applying class string"
        );
        self.then_all(&sequence)
    }
}

impl<T: StyleModifier> Classname for T {}

/// Recording modifier: keeps every directive it is given, in order.
impl StyleModifier for StyleSequence {
    fn then(mut self, directive: &StyleDirective) -> Self {
        self.push(directive.clone());
        self
    }
}
