//! Token resolution.
//!
//! A [`Resolver`] maps each token to exactly one [`StyleDirective`]. It never
//! fails: unknown prefixes and malformed values become
//! [`StyleDirective::Identity`] and are reported at `trace` level under
//! [`targets::RESOLVER`](crate::logging::targets::RESOLVER).

mod color;
mod length;
mod rules;

use std::sync::OnceLock;

pub use rules::{Pattern, RULES, Rule};

use crate::config::ResolverConfig;
use crate::directive::{StyleDirective, StyleSequence};
use crate::logging::targets;
use crate::tokenizer::tokens;
use crate::Result;

/// Resolves utility-class tokens against a [`ResolverConfig`].
///
/// # Example
///
/// ```
/// use horizon_classname::{Resolver, ResolverConfig, StyleDirective};
/// use horizon_classname::types::Dp;
///
/// let config = ResolverConfig {
///     spacing_unit: 8.0,
///     ..ResolverConfig::default()
/// };
/// let resolver = Resolver::new(config);
///
/// assert_eq!(resolver.resolve("p-2"), StyleDirective::PaddingAll(Dp(16.0)));
/// ```
#[derive(Debug, Clone, Default)]
pub struct Resolver {
    config: ResolverConfig,
}

impl Resolver {
    /// Create a resolver with the given configuration.
    pub fn new(config: ResolverConfig) -> Self {
        Self { config }
    }

    /// Create a resolver, rejecting invalid unit scales.
    pub fn try_new(config: ResolverConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self::new(config))
    }

    /// The configuration in use.
    pub fn config(&self) -> &ResolverConfig {
        &self.config
    }

    /// The rule that claims a token, if any.
    ///
    /// A claimed token can still resolve to `Identity` when its value is
    /// malformed.
    pub fn matching_rule(&self, token: &str) -> Option<&'static Rule> {
        RULES.iter().find(|rule| rule.matches(token))
    }

    /// Resolve a single token.
    pub fn resolve(&self, token: &str) -> StyleDirective {
        for rule in RULES {
            let Some(value) = rule.pattern().strip(token) else {
                continue;
            };

            return match rule.apply(&self.config, value) {
                Some(directive) => directive,
                None => {
                    tracing::trace!(
                        target: targets::RESOLVER,
                        token,
                        rule = rule.name(),
                        "malformed value, token ignored"
                    );
                    StyleDirective::Identity
                }
            };
        }

        tracing::trace!(target: targets::RESOLVER, token, "unknown token ignored");
        StyleDirective::Identity
    }

    /// Tokenize a class string and resolve every token, in order.
    #[tracing::instrument(skip(self), target = "horizon_classname::resolver", level = "trace")]
    pub fn parse(&self, class_name: &str) -> StyleSequence {
        tokens(class_name)
            .map(|token| self.resolve(token.as_str()))
            .collect()
    }
}

/// The process-wide resolver using [`ResolverConfig::default`].
pub fn default_resolver() -> &'static Resolver {
    static DEFAULT: OnceLock<Resolver> = OnceLock::new();
    DEFAULT.get_or_init(Resolver::default)
}

/// Resolve a single token with the default configuration.
///
/// ```
/// use horizon_classname::{resolve, StyleDirective};
/// use horizon_classname::types::Dp;
///
/// assert_eq!(resolve("r-2"), StyleDirective::CornerRadius(Dp(8.0)));
/// assert_eq!(resolve("shadow-lg"), StyleDirective::Identity);
/// ```
pub fn resolve(token: &str) -> StyleDirective {
    default_resolver().resolve(token)
}

/// Parse a class string with the default configuration.
pub fn parse(class_name: &str) -> StyleSequence {
    default_resolver().parse(class_name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GradientColors;
    use crate::types::{Axis, Color, Direction, Dp, Side};

    #[test]
    fn padding_family() {
        use StyleDirective::{PaddingAll, PaddingAxis, PaddingSide};

        assert_eq!(resolve("p-4"), PaddingAll(Dp(16.0)));
        assert_eq!(resolve("px-1"), PaddingAxis(Axis::Horizontal, Dp(4.0)));
        assert_eq!(resolve("py-[3dp]"), PaddingAxis(Axis::Vertical, Dp(3.0)));
        assert_eq!(resolve("pt-2"), PaddingSide(Side::Top, Dp(8.0)));
        assert_eq!(resolve("pb-2"), PaddingSide(Side::Bottom, Dp(8.0)));
        assert_eq!(resolve("pl-2"), PaddingSide(Side::Start, Dp(8.0)));
        assert_eq!(resolve("pr-2"), PaddingSide(Side::End, Dp(8.0)));
    }

    #[test]
    fn margin_family() {
        use StyleDirective::{OffsetAll, OffsetAxis};

        assert_eq!(resolve("m-3"), OffsetAll(Dp(12.0), Dp(12.0)));
        assert_eq!(resolve("mx-1"), OffsetAxis(Axis::Horizontal, Dp(4.0)));
        assert_eq!(resolve("my-1"), OffsetAxis(Axis::Vertical, Dp(4.0)));
        assert_eq!(resolve("mt-2"), OffsetAxis(Axis::Vertical, Dp(8.0)));
        assert_eq!(resolve("mb-2"), OffsetAxis(Axis::Vertical, Dp(-8.0)));
        assert_eq!(resolve("ml-2"), OffsetAxis(Axis::Horizontal, Dp(8.0)));
        assert_eq!(resolve("mr-2"), OffsetAxis(Axis::Horizontal, Dp(-8.0)));
    }

    #[test]
    fn radius_family() {
        use StyleDirective::{CornerRadius, Identity};

        assert_eq!(resolve("r-2"), CornerRadius(Dp(8.0)));
        assert_eq!(resolve("r-[6dp]"), CornerRadius(Dp(6.0)));
        assert_eq!(resolve("r-[2.5]"), CornerRadius(Dp(2.5)));
        assert_eq!(resolve("r--1"), Identity);
        assert_eq!(resolve("r-abc"), Identity);
        assert_eq!(resolve("r-1.5"), Identity);

        let StyleDirective::CornerRadius(zero) = resolve("r-[-0]") else {
            panic!("r-[-0] should resolve to a radius");
        };
        assert!(zero.get().is_sign_positive());
    }

    #[test]
    fn signed_offsets() {
        use StyleDirective::{Identity, OffsetAll, OffsetAxis};

        assert_eq!(resolve("m--1"), OffsetAll(Dp(-4.0), Dp(-4.0)));
        assert_eq!(resolve("mr-[-2.5]"), OffsetAxis(Axis::Horizontal, Dp(2.5)));
        assert_eq!(resolve("p--1"), Identity);
    }

    #[test]
    fn gradients() {
        let stops = GradientColors::default().stops();
        assert_eq!(
            resolve("bg-gradient-to-r"),
            StyleDirective::Gradient(Direction::ToRight, stops.clone())
        );
        assert_eq!(
            resolve("bg-gradient-to-b"),
            StyleDirective::Gradient(Direction::ToBottom, stops)
        );
        assert_eq!(resolve("bg-gradient-to-l"), StyleDirective::Identity);
    }

    #[test]
    fn background() {
        assert_eq!(resolve("bg-white"), StyleDirective::Background(Color::WHITE));
        assert_eq!(
            resolve("bg-[#112233]/50"),
            StyleDirective::Background(Color::from_rgb8(0x11, 0x22, 0x33).with_alpha(0.5))
        );
    }

    #[test]
    fn matching_rule_reports_claims() {
        let resolver = Resolver::default();
        assert_eq!(
            resolver.matching_rule("p-abc").map(Rule::name),
            Some("padding")
        );
        assert_eq!(resolver.resolve("p-abc"), StyleDirective::Identity);
        assert!(resolver.matching_rule("hidden").is_none());
    }

    #[test]
    fn custom_palette() {
        let mut config = ResolverConfig::default();
        config.palette.insert("brand", Color::from_rgb8(1, 2, 3));
        let resolver = Resolver::new(config);

        assert_eq!(
            resolver.resolve("bg-brand/10"),
            StyleDirective::Background(Color::from_rgb8(1, 2, 3).with_alpha(0.1))
        );
        assert_eq!(resolve("bg-brand"), StyleDirective::Identity);
    }

    #[test]
    fn try_new_validates() {
        let config = ResolverConfig {
            radius_unit: f32::NAN,
            ..ResolverConfig::default()
        };
        assert!(Resolver::try_new(config).is_err());
    }

    #[test]
    fn total_on_garbage() {
        for token in ["", "-", "p-", "bg-", "bg-/", "r-[", "m-[]", "\u{0}", "p-99999999999"] {
            assert_eq!(resolve(token), StyleDirective::Identity, "{token:?}");
        }
    }
}
