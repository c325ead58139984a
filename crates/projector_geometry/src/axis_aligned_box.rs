//! Representation of axis-aligned boxes.

use nalgebra::{self as na, Point3, Vector3, point};
use projector_math::Float;

use Corner::{Lower, Upper};

/// A box with orientation aligned with the coordinate system axes. The width,
/// height and depth axes are aligned with the x-, y- and z-axis respectively.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Debug, PartialEq)]
pub struct AxisAlignedBox<F: Float> {
    corners: [Point3<F>; 2],
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum Corner {
    Lower = 0,
    Upper = 1,
}

const ALL_CORNER_COMPONENTS: [[Corner; 3]; 8] = [
    [Lower, Lower, Lower],
    [Lower, Lower, Upper],
    [Lower, Upper, Lower],
    [Lower, Upper, Upper],
    [Upper, Lower, Lower],
    [Upper, Lower, Upper],
    [Upper, Upper, Lower],
    [Upper, Upper, Upper],
];

impl<F: Float> AxisAlignedBox<F> {
    /// Creates a new box with the given lower and upper corner points.
    pub fn new(lower_corner: Point3<F>, upper_corner: Point3<F>) -> Self {
        Self {
            corners: [lower_corner, upper_corner],
        }
    }

    /// Creates a new box with the given lower corner and extents along each
    /// axis.
    pub fn from_lower_corner_and_extents(lower_corner: Point3<F>, extents: Vector3<F>) -> Self {
        Self::new(lower_corner, lower_corner + extents)
    }

    /// Creates the axis-aligned bounding box for the set of points in the given
    /// slice.
    ///
    /// # Panics
    /// If the point slice is empty.
    pub fn aabb_for_points(points: &[Point3<F>]) -> Self {
        assert!(
            !points.is_empty(),
            "Tried to create AABB for empty point slice"
        );

        let first_point = points[0];

        let lower_corner = points
            .iter()
            .skip(1)
            .fold(first_point, |lower_corner, point| lower_corner.inf(point));

        let upper_corner = points
            .iter()
            .skip(1)
            .fold(first_point, |upper_corner, point| upper_corner.sup(point));

        Self::new(lower_corner, upper_corner)
    }

    /// Returns a reference to the lower corner of the box.
    pub fn lower_corner(&self) -> &Point3<F> {
        &self.corners[0]
    }

    /// Returns a reference to the upper corner of the box.
    pub fn upper_corner(&self) -> &Point3<F> {
        &self.corners[1]
    }

    /// Calculates and returns the center point of the box.
    pub fn center(&self) -> Point3<F> {
        na::center(self.lower_corner(), self.upper_corner())
    }

    /// Returns the extents of the box along all three axes.
    pub fn extents(&self) -> Vector3<F> {
        self.upper_corner() - self.lower_corner()
    }

    /// Returns the box corner with the given index. The corners are ordered
    /// from smaller to larger coordinates, with the z-component varying
    /// fastest.
    ///
    /// # Panics
    /// If the given index exceeds 7.
    pub fn corner(&self, corner_idx: usize) -> Point3<F> {
        let corner_components = &ALL_CORNER_COMPONENTS[corner_idx];
        point![
            self.corners[corner_components[0] as usize].x,
            self.corners[corner_components[1] as usize].y,
            self.corners[corner_components[2] as usize].z
        ]
    }

    /// Whether the given point lies inside the box or on its boundary.
    pub fn contains_point(&self, point: &Point3<F>) -> bool {
        (0..3).all(|dim| {
            point[dim] >= self.lower_corner()[dim] && point[dim] <= self.upper_corner()[dim]
        })
    }
}
