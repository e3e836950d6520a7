//! Pure math/data for geometry & painting in pagescroll
//!
//! This crate contains the geometry primitives, color definitions, and draw
//! primitives shared by the rest of the workspace. It owns no state and does
//! no rendering; a host renderer consumes the `DrawPrimitive` values.

mod brush;
mod color;
mod geometry;

pub use brush::*;
pub use color::*;
pub use geometry::*;

pub mod prelude {
    pub use crate::brush::Brush;
    pub use crate::color::Color;
    pub use crate::geometry::{CornerRadii, DrawPrimitive, EdgeInsets, Point, Rect, Size};
}
