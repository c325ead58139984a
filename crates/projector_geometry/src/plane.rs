//! Representation of planes.

use nalgebra::{Point3, UnitVector3, Vector3};
use projector_math::Float;

/// A plane in 3D, represented by a unit normal and
/// a displacement.
///
/// The displacement `d` can be determined from the
/// normal `n` and any point `p` lying on the plane
/// as `d = -n.dot(p)`. By storing the displacement
/// instead of the point, we remove redundant degrees
/// of freedom.
///
/// The plane divides space into two halfspaces, the
/// positive and negative halfspace. The positive one
/// is defined as the halfspace the unit normal is
/// pointing into.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Plane<F: Float> {
    unit_normal: UnitVector3<F>,
    displacement: F,
}

impl<F: Float> Plane<F> {
    /// Creates the plane satisfying `a*x + b*y + c*z + d = 0` for the given
    /// coefficients, which need not be normalized.
    ///
    /// The normal `(a, b, c)` must be nonzero, otherwise the resulting plane
    /// is not finite.
    pub fn from_unnormalized_coefficients(a: F, b: F, c: F, d: F) -> Self {
        let (unit_normal, magnitude) = UnitVector3::new_and_get(Vector3::new(a, b, c));
        Self {
            unit_normal,
            displacement: d / magnitude,
        }
    }

    /// Returns the unit normal vector of the plane.
    pub fn unit_normal(&self) -> &UnitVector3<F> {
        &self.unit_normal
    }

    /// Returns the displacement of the plane.
    pub fn displacement(&self) -> F {
        self.displacement
    }

    /// Computes the signed distance from the plane to the given
    /// point. If the signed distance is negative, the point lies
    /// in the negative halfspace of the plane.
    pub fn compute_signed_distance(&self, point: &Point3<F>) -> F {
        self.unit_normal().dot(&point.coords) + self.displacement
    }

    /// Whether the given point is strictly in the positive
    /// halfspace of the plane.
    pub fn point_lies_in_positive_halfspace(&self, point: &Point3<F>) -> bool {
        self.compute_signed_distance(point) > F::ZERO
    }

    /// Whether the given point is strictly in the negative
    /// halfspace of the plane.
    pub fn point_lies_in_negative_halfspace(&self, point: &Point3<F>) -> bool {
        self.compute_signed_distance(point) < F::ZERO
    }

    /// Computes the single point shared by this and the two given planes, or
    /// [`None`] if two of the planes are parallel.
    pub fn compute_intersection_with_planes(
        &self,
        second: &Self,
        third: &Self,
    ) -> Option<Point3<F>> {
        let n1 = self.unit_normal.as_ref();
        let n2 = second.unit_normal.as_ref();
        let n3 = third.unit_normal.as_ref();

        let n2_cross_n3 = n2.cross(n3);
        let denom = n1.dot(&n2_cross_n3);

        if denom.abs() <= F::default_epsilon() {
            return None;
        }

        let numerator = n2_cross_n3 * (-self.displacement)
            + n3.cross(n1) * (-second.displacement)
            + n1.cross(n2) * (-third.displacement);

        Some(Point3::from(numerator / denom))
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use approx::assert_abs_diff_eq;
    use nalgebra::{point, vector};

    #[test]
    fn signed_distance_is_correct() {
        // y = 2
        let plane = Plane::from_unnormalized_coefficients(0.0, 1.0, 0.0, -2.0);
        assert_abs_diff_eq!(
            plane.compute_signed_distance(&point![-1.2, 0.0, 42.4]),
            -2.0
        );
        assert_abs_diff_eq!(
            plane.compute_signed_distance(&point![-2.1, 10.0, 4.42]),
            8.0
        );
        assert!(plane.point_lies_in_positive_halfspace(&point![0.0, 3.0, 0.0]));
        assert!(plane.point_lies_in_negative_halfspace(&point![0.0, 1.0, 0.0]));
    }

    #[test]
    fn creating_plane_from_unnormalized_coefficients_normalizes_them() {
        let plane = Plane::from_unnormalized_coefficients(0.0, 0.0, -4.0, 2.0);
        assert_abs_diff_eq!(plane.unit_normal().into_inner(), vector![0.0, 0.0, -1.0]);
        assert_abs_diff_eq!(plane.displacement(), 0.5);
        assert_abs_diff_eq!(plane.compute_signed_distance(&point![0.0, 0.0, 0.5]), 0.0);
    }

    #[test]
    fn intersection_of_coordinate_offset_planes_is_correct() {
        // x = 1, y = -2 and z = 3
        let x_plane = Plane::from_unnormalized_coefficients(1.0, 0.0, 0.0, -1.0);
        let y_plane = Plane::from_unnormalized_coefficients(0.0, 2.0, 0.0, 4.0);
        let z_plane = Plane::from_unnormalized_coefficients(0.0, 0.0, -1.0, 3.0);

        let intersection = x_plane
            .compute_intersection_with_planes(&y_plane, &z_plane)
            .unwrap();

        assert_abs_diff_eq!(intersection, point![1.0, -2.0, 3.0], epsilon = 1e-12);
    }

    #[test]
    fn intersection_with_parallel_planes_is_none() {
        let a = Plane::from_unnormalized_coefficients(1.0, 0.0, 0.0, -1.0);
        let b = Plane::from_unnormalized_coefficients(2.0, 0.0, 0.0, -4.0);
        let c = Plane::from_unnormalized_coefficients(0.0, 1.0, 0.0, 0.0);

        assert!(a.compute_intersection_with_planes(&b, &c).is_none());
    }
}
