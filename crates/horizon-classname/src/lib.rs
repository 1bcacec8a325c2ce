//! Utility-class DSL parser for Horizon Lattice style modifiers.
//!
//! This crate turns a class string such as `"p-4 bg-[#112233]/50 r-2"` into
//! an ordered [`StyleSequence`] of [`StyleDirective`]s:
//!
//! - **Tokenizer**: splits the class string on runs of whitespace
//! - **Resolver**: maps each token to one directive through an ordered rule
//!   table; unknown or malformed tokens become [`StyleDirective::Identity`]
//! - **Configuration**: unit scales, named colors and the gradient pair,
//!   optionally loaded from TOML
//!
//! Resolution is total: it never returns an error and never panics. Applying
//! the directives to an element is left to a style collaborator, which folds
//! them left to right.
//!
//! # Example
//!
//! ```
//! use horizon_classname::prelude::*;
//!
//! let sequence = parse("p-4 bg-red/50 r-2 nonsense");
//!
//! assert_eq!(sequence.len(), 4);
//! assert_eq!(sequence.resolved_count(), 3);
//! assert_eq!(
//!     sequence.as_slice()[0],
//!     StyleDirective::PaddingAll(Dp(16.0)),
//! );
//! assert_eq!(
//!     sequence.as_slice()[1],
//!     StyleDirective::Background(Color::RED.with_alpha(0.5)),
//! );
//! ```

pub mod types;
pub mod config;
pub mod directive;
pub mod logging;
pub mod resolver;
pub mod tokenizer;

mod error;

pub use config::ResolverConfig;
pub use directive::{StyleDirective, StyleSequence};
pub use error::{Error, Result};
pub use resolver::{Resolver, default_resolver, parse, resolve};
pub use tokenizer::{Token, tokenize};

/// Prelude module with commonly used types.
pub mod prelude {
    pub use crate::config::{ColorPalette, GradientColors, ResolverConfig};
    pub use crate::directive::{StyleDirective, StyleSequence};
    pub use crate::resolver::{Resolver, parse, resolve};
    pub use crate::tokenizer::{Token, tokenize};
    pub use crate::types::{Axis, Color, ColorStop, Direction, Dp, Side};
}

static_assertions::assert_impl_all!(Resolver: Send, Sync);
static_assertions::assert_impl_all!(StyleDirective: Send, Sync);
static_assertions::assert_impl_all!(StyleSequence: Send, Sync);
static_assertions::assert_impl_all!(Token<'static>: Send, Sync, Copy);
