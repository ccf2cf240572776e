//! Pure math/data for drawing & units in Paddock
//!
//! Geometry primitives, color definitions and unit types shared by the
//! gesture, animation and list crates.

mod color;
mod geometry;
mod unit;

pub use color::*;
pub use geometry::*;
pub use unit::*;

pub mod prelude {
    pub use crate::color::Color;
    pub use crate::geometry::{Point, Size};
    pub use crate::unit::Dp;
}
