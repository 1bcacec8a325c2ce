//! Value types carried by style directives.

mod color;
mod value;

pub use color::{Color, ColorStop};
pub use value::{Axis, Direction, Dp, Side};
