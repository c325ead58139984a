//! Numeric utilities shared by the Projector crates.

pub mod angle;
pub mod num;

pub use angle::{Angle, Degrees, Radians};
pub use num::Float;
