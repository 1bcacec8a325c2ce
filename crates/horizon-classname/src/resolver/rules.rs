//! The ordered dispatch table.
//!
//! Rules are tried top to bottom and the first whose pattern matches claims
//! the token. Longer prefixes (`px-`, `mt-`, ...) sit above the shorter
//! family prefix (`p-`, `m-`), and the exact gradient tokens sit above `bg-`.

use super::color::parse_background;
use super::length::{Sign, parse_length};
use crate::config::ResolverConfig;
use crate::directive::StyleDirective;
use crate::types::{Axis, Direction, Side};

/// How a rule recognizes its tokens.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pattern {
    /// The whole token must equal the literal.
    Exact(&'static str),
    /// The token must start with the literal; the rest is the value.
    Prefix(&'static str),
}

impl Pattern {
    /// The literal this pattern matches on.
    pub fn literal(&self) -> &'static str {
        match self {
            Pattern::Exact(s) | Pattern::Prefix(s) => s,
        }
    }

    /// If the token matches, return the value part after the literal.
    pub fn strip<'a>(&self, token: &'a str) -> Option<&'a str> {
        match self {
            Pattern::Exact(s) => (token == *s).then_some(""),
            Pattern::Prefix(s) => token.strip_prefix(*s),
        }
    }
}

type Handler = fn(&ResolverConfig, &str) -> Option<StyleDirective>;

/// One entry of the dispatch table.
#[derive(Clone, Copy)]
pub struct Rule {
    name: &'static str,
    pattern: Pattern,
    handler: Handler,
}

impl Rule {
    const fn exact(name: &'static str, literal: &'static str, handler: Handler) -> Self {
        Self {
            name,
            pattern: Pattern::Exact(literal),
            handler,
        }
    }

    const fn prefix(name: &'static str, literal: &'static str, handler: Handler) -> Self {
        Self {
            name,
            pattern: Pattern::Prefix(literal),
            handler,
        }
    }

    /// Rule name, used in diagnostics.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// The pattern this rule dispatches on.
    pub fn pattern(&self) -> Pattern {
        self.pattern
    }

    /// Check if this rule claims the token.
    pub fn matches(&self, token: &str) -> bool {
        self.pattern.strip(token).is_some()
    }

    /// Resolve the value part of a claimed token.
    pub(crate) fn apply(&self, config: &ResolverConfig, value: &str) -> Option<StyleDirective> {
        (self.handler)(config, value)
    }
}

impl std::fmt::Debug for Rule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Rule")
            .field("name", &self.name)
            .field("pattern", &self.pattern)
            .finish()
    }
}

/// The dispatch table, in priority order.
pub static RULES: &[Rule] = &[
    Rule::exact("gradient-to-r", "bg-gradient-to-r", gradient_to_right),
    Rule::exact("gradient-to-b", "bg-gradient-to-b", gradient_to_bottom),
    Rule::prefix("padding-x", "px-", padding_x),
    Rule::prefix("padding-y", "py-", padding_y),
    Rule::prefix("padding-top", "pt-", padding_top),
    Rule::prefix("padding-bottom", "pb-", padding_bottom),
    Rule::prefix("padding-start", "pl-", padding_start),
    Rule::prefix("padding-end", "pr-", padding_end),
    Rule::prefix("padding", "p-", padding_all),
    Rule::prefix("margin-x", "mx-", margin_x),
    Rule::prefix("margin-y", "my-", margin_y),
    Rule::prefix("margin-top", "mt-", margin_top),
    Rule::prefix("margin-bottom", "mb-", margin_bottom),
    Rule::prefix("margin-start", "ml-", margin_start),
    Rule::prefix("margin-end", "mr-", margin_end),
    Rule::prefix("margin", "m-", margin_all),
    Rule::prefix("radius", "r-", radius),
    Rule::prefix("background", "bg-", background),
];

// === Padding ===

fn spacing(config: &ResolverConfig, value: &str) -> Option<crate::types::Dp> {
    parse_length(value, config.spacing_unit, Sign::NonNegative)
}

fn padding_all(config: &ResolverConfig, value: &str) -> Option<StyleDirective> {
    spacing(config, value).map(StyleDirective::PaddingAll)
}

fn padding_x(config: &ResolverConfig, value: &str) -> Option<StyleDirective> {
    spacing(config, value).map(|v| StyleDirective::PaddingAxis(Axis::Horizontal, v))
}

fn padding_y(config: &ResolverConfig, value: &str) -> Option<StyleDirective> {
    spacing(config, value).map(|v| StyleDirective::PaddingAxis(Axis::Vertical, v))
}

fn padding_top(config: &ResolverConfig, value: &str) -> Option<StyleDirective> {
    spacing(config, value).map(|v| StyleDirective::PaddingSide(Side::Top, v))
}

fn padding_bottom(config: &ResolverConfig, value: &str) -> Option<StyleDirective> {
    spacing(config, value).map(|v| StyleDirective::PaddingSide(Side::Bottom, v))
}

fn padding_start(config: &ResolverConfig, value: &str) -> Option<StyleDirective> {
    spacing(config, value).map(|v| StyleDirective::PaddingSide(Side::Start, v))
}

fn padding_end(config: &ResolverConfig, value: &str) -> Option<StyleDirective> {
    spacing(config, value).map(|v| StyleDirective::PaddingSide(Side::End, v))
}

// === Margin (offset-based) ===

fn offset(config: &ResolverConfig, value: &str) -> Option<crate::types::Dp> {
    parse_length(value, config.spacing_unit, Sign::Signed)
}

fn margin_all(config: &ResolverConfig, value: &str) -> Option<StyleDirective> {
    offset(config, value).map(|v| StyleDirective::OffsetAll(v, v))
}

fn margin_x(config: &ResolverConfig, value: &str) -> Option<StyleDirective> {
    offset(config, value).map(|v| StyleDirective::OffsetAxis(Axis::Horizontal, v))
}

fn margin_y(config: &ResolverConfig, value: &str) -> Option<StyleDirective> {
    offset(config, value).map(|v| StyleDirective::OffsetAxis(Axis::Vertical, v))
}

fn margin_top(config: &ResolverConfig, value: &str) -> Option<StyleDirective> {
    offset(config, value).map(|v| StyleDirective::OffsetAxis(Axis::Vertical, v))
}

// Bottom and end margins move the element the opposite way.
fn margin_bottom(config: &ResolverConfig, value: &str) -> Option<StyleDirective> {
    offset(config, value).map(|v| StyleDirective::OffsetAxis(Axis::Vertical, -v))
}

fn margin_start(config: &ResolverConfig, value: &str) -> Option<StyleDirective> {
    offset(config, value).map(|v| StyleDirective::OffsetAxis(Axis::Horizontal, v))
}

fn margin_end(config: &ResolverConfig, value: &str) -> Option<StyleDirective> {
    offset(config, value).map(|v| StyleDirective::OffsetAxis(Axis::Horizontal, -v))
}

// === Radius ===

fn radius(config: &ResolverConfig, value: &str) -> Option<StyleDirective> {
    parse_length(value, config.radius_unit, Sign::NonNegative).map(StyleDirective::CornerRadius)
}

// === Background ===

fn background(config: &ResolverConfig, value: &str) -> Option<StyleDirective> {
    parse_background(&config.palette, value).map(StyleDirective::Background)
}

fn gradient_to_right(config: &ResolverConfig, _: &str) -> Option<StyleDirective> {
    Some(StyleDirective::Gradient(Direction::ToRight, config.gradient.stops()))
}

fn gradient_to_bottom(config: &ResolverConfig, _: &str) -> Option<StyleDirective> {
    Some(StyleDirective::Gradient(Direction::ToBottom, config.gradient.stops()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn first_match(token: &str) -> Option<&'static str> {
        RULES.iter().find(|r| r.matches(token)).map(Rule::name)
    }

    #[test]
    fn specific_prefixes_win() {
        assert_eq!(first_match("px-2"), Some("padding-x"));
        assert_eq!(first_match("p-2"), Some("padding"));
        assert_eq!(first_match("mb-2"), Some("margin-bottom"));
        assert_eq!(first_match("m-2"), Some("margin"));
        assert_eq!(first_match("bg-gradient-to-r"), Some("gradient-to-r"));
        assert_eq!(first_match("bg-gradient-to-l"), Some("background"));
        assert_eq!(first_match("rounded"), None);
    }

    #[test]
    fn every_rule_is_reachable() {
        for (i, later) in RULES.iter().enumerate() {
            let literal = later.pattern().literal();
            for earlier in &RULES[..i] {
                assert!(
                    !earlier.matches(literal),
                    "{} shadows {}",
                    earlier.name(),
                    later.name()
                );
            }
        }
    }

    #[test]
    fn exact_pattern_yields_empty_value() {
        assert_eq!(Pattern::Exact("a").strip("a"), Some(""));
        assert_eq!(Pattern::Exact("a").strip("ab"), None);
        assert_eq!(Pattern::Prefix("p-").strip("p-4"), Some("4"));
    }
}
