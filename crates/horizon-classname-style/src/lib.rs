//! Composable style values driven by `horizon-classname` directives.
//!
//! `horizon-classname` only guarantees the order of the directives it emits.
//! This crate supplies the other half of the contract:
//!
//! - [`StyleModifier`]: a value directives are folded onto, left to right
//! - [`Classname`]: `.classname("p-4 bg-red")` for every modifier
//! - [`ComposedStyle`]: a reference modifier with last-wins semantics
//!
//! # Example
//!
//! ```
//! use horizon_classname_style::prelude::*;
//!
//! let card = ComposedStyle::new().classname("p-4 mt-2 r-[6dp] bg-[#112233]/80");
//!
//! assert_eq!(card.padding, Edges::uniform(16.0));
//! assert_eq!(card.offset, Offset::new(0.0, 8.0));
//! assert_eq!(card.corner_radius, Some(6.0));
//! assert_eq!(
//!     card.background,
//!     Some(Background::Solid(Color::from_rgb8(0x11, 0x22, 0x33).with_alpha(0.8))),
//! );
//! ```

pub mod logging;

mod composed;
mod edges;
mod modifier;

pub use composed::{Background, ComposedStyle};
pub use edges::{Edges, Offset};
pub use modifier::{Classname, StyleModifier};

/// Prelude module with commonly used types.
pub mod prelude {
    pub use crate::composed::{Background, ComposedStyle};
    pub use crate::edges::{Edges, Offset};
    pub use crate::modifier::{Classname, StyleModifier};
    pub use horizon_classname::prelude::*;
}

static_assertions::assert_impl_all!(ComposedStyle: Send, Sync);
