//! Representation of axis-aligned rectangles.

use nalgebra::{Point2, Vector2};
use projector_math::Float;

/// A 2D rectangle with sides aligned with the coordinate axes, represented by
/// the corner with the smallest coordinates and the size along each axis.
///
/// Used for addressing a sub-region of a texture in normalized texture
/// coordinates, like the area of a shadow atlas assigned to a single light.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Rect<F: Float> {
    origin: Point2<F>,
    size: Vector2<F>,
}

impl<F: Float> Rect<F> {
    /// Creates a new rectangle with its origin at `(x, y)` and the given width
    /// and height.
    pub fn new(x: F, y: F, width: F, height: F) -> Self {
        Self {
            origin: Point2::new(x, y),
            size: Vector2::new(width, height),
        }
    }

    pub fn x(&self) -> F {
        self.origin.x
    }

    pub fn y(&self) -> F {
        self.origin.y
    }

    pub fn width(&self) -> F {
        self.size.x
    }

    pub fn height(&self) -> F {
        self.size.y
    }
}
