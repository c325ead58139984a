//! Projection matrices.

use crate::{AxisAlignedBox, Plane, Rect};
use anyhow::{Result, bail};
use approx::{AbsDiffEq, RelativeEq};
use bitflags::bitflags;
use bytemuck::{Pod, Zeroable};
use nalgebra::{Affine3, Matrix4, Point3, Vector2, Vector3, Vector4, point};
use projector_math::{Angle, Degrees, Float, Radians, num::convert_f64};
use std::{
    array, fmt,
    ops::{Index, IndexMut, Mul},
};

/// A homogeneous 4x4 transformation from view (or light) space into clip
/// space, stored as four column vectors so that `columns[c][r]` is the entry
/// in column `c` and row `r`.
///
/// The projections created here follow the convention of a camera looking
/// down the negative z-axis, with the visible volume mapped into the cube
/// spanning from -1 to 1 along each axis of clip space. Backends with other
/// clip space conventions can be targeted by multiplying with
/// [`Self::depth_correction`].
///
/// The matrix is a plain value. It compares exactly with [`PartialEq`] and
/// approximately with the [`approx`] traits.
#[repr(C)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ProjectionMatrix<F: Float> {
    pub columns: [Vector4<F>; 4],
}

bitflags! {
    /// Adjustments from the default clip space conventions of a
    /// [`ProjectionMatrix`] to the conventions of a rendering backend.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
    pub struct DepthCorrection: u8 {
        /// Invert the y-axis of clip space.
        const FLIP_Y    = 1 << 0;
        /// Map the near plane to the largest depth and the far plane to the
        /// smallest.
        const REVERSE_Z = 1 << 1;
        /// Map depth from the range [-1, 1] to [0, 1].
        const REMAP_Z   = 1 << 2;
    }
}

/// Which eye a stereo perspective projection is created for.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum StereoEye {
    Mono,
    Left,
    Right,
}

impl<F: Float> ProjectionMatrix<F> {
    /// Creates a new matrix with the given columns.
    pub const fn new(
        column_0: Vector4<F>,
        column_1: Vector4<F>,
        column_2: Vector4<F>,
        column_3: Vector4<F>,
    ) -> Self {
        Self {
            columns: [column_0, column_1, column_2, column_3],
        }
    }

    /// Creates a new matrix with the same entries as the given [`Matrix4`].
    pub fn from_matrix(matrix: &Matrix4<F>) -> Self {
        Self::new(
            matrix.column(0).into_owned(),
            matrix.column(1).into_owned(),
            matrix.column(2).into_owned(),
            matrix.column(3).into_owned(),
        )
    }

    /// Returns the matrix as a [`Matrix4`].
    pub fn to_matrix(&self) -> Matrix4<F> {
        Matrix4::from_columns(&self.columns)
    }

    /// Creates the identity matrix.
    pub fn identity() -> Self {
        Self::new(Vector4::x(), Vector4::y(), Vector4::z(), Vector4::w())
    }

    /// Creates a matrix with all entries zero.
    pub fn zeros() -> Self {
        Self::new(
            Vector4::zeros(),
            Vector4::zeros(),
            Vector4::zeros(),
            Vector4::zeros(),
        )
    }

    /// Creates a matrix scaling each of the three spatial axes by the
    /// corresponding component of the given vector.
    pub fn scaling(scale: &Vector3<F>) -> Self {
        Self::new(
            Vector4::x() * scale.x,
            Vector4::y() * scale.y,
            Vector4::z() * scale.z,
            Vector4::w(),
        )
    }

    /// Creates a symmetric perspective projection with the given vertical
    /// field of view, ratio of width to height of the view plane and near and
    /// far distance.
    ///
    /// The entries are not finite if the field of view or the aspect ratio is
    /// zero, or if the near and far distances are equal. Use
    /// [`Self::try_perspective`] to have the parameters validated.
    pub fn perspective<A: Angle<F>>(
        vertical_field_of_view: A,
        aspect_ratio: F,
        near_distance: F,
        far_distance: F,
    ) -> Self {
        let half_fov = F::ONE_HALF * vertical_field_of_view.radians();
        let cotangent = half_fov.cos() / half_fov.sin();
        let depth_span = far_distance - near_distance;

        Self::new(
            Vector4::x() * (cotangent / aspect_ratio),
            Vector4::y() * cotangent,
            Vector4::new(
                F::ZERO,
                F::ZERO,
                -(far_distance + near_distance) / depth_span,
                F::NEG_ONE,
            ),
            Vector4::z() * (F::NEG_TWO * near_distance * far_distance / depth_span),
        )
    }

    /// Like [`Self::perspective`], but validates the parameters first.
    ///
    /// # Errors
    /// If the vertical field of view is not between 0 and 180 degrees, the
    /// aspect ratio is not positive or the near and far distances do not
    /// satisfy `0 < near < far`.
    pub fn try_perspective<A: Angle<F>>(
        vertical_field_of_view: A,
        aspect_ratio: F,
        near_distance: F,
        far_distance: F,
    ) -> Result<Self> {
        let fov = vertical_field_of_view.radians();
        if !(fov > F::ZERO && fov < F::PI()) {
            bail!(
                "Invalid vertical field of view for perspective projection: {} degrees",
                vertical_field_of_view.degrees()
            );
        }
        if !(aspect_ratio > F::ZERO) {
            bail!(
                "Invalid aspect ratio for perspective projection: {}",
                aspect_ratio
            );
        }
        ensure_valid_perspective_depth_range(near_distance, far_distance)?;

        Ok(Self::perspective(
            vertical_field_of_view,
            aspect_ratio,
            near_distance,
            far_distance,
        ))
    }

    /// Creates a symmetric perspective projection like [`Self::perspective`],
    /// but with the field of view specified along the horizontal axis.
    pub fn perspective_with_horizontal_fov<A: Angle<F>>(
        horizontal_field_of_view: A,
        aspect_ratio: F,
        near_distance: F,
        far_distance: F,
    ) -> Self {
        Self::perspective(
            Self::vertical_fov_from_horizontal(horizontal_field_of_view, aspect_ratio),
            aspect_ratio,
            near_distance,
            far_distance,
        )
    }

    /// Creates the perspective projection for one eye of a stereo camera whose
    /// eyes are separated by `intraocular_distance` and whose lines of sight
    /// converge at `convergence_distance`.
    ///
    /// The view frustum of each eye is shifted horizontally so that the two
    /// frustums coincide at the convergence distance, and the eye is offset
    /// from the camera center by half the intraocular distance. For
    /// [`StereoEye::Mono`] the result is the same as for
    /// [`Self::perspective`].
    pub fn stereo_perspective<A: Angle<F>>(
        vertical_field_of_view: A,
        aspect_ratio: F,
        near_distance: F,
        far_distance: F,
        eye: StereoEye,
        intraocular_distance: F,
        convergence_distance: F,
    ) -> Self {
        let y_max = near_distance * (F::ONE_HALF * vertical_field_of_view.radians()).tan();
        let x_max = y_max * aspect_ratio;
        let frustum_shift =
            F::ONE_HALF * intraocular_distance * near_distance / convergence_distance;

        let (left, right, eye_offset) = match eye {
            StereoEye::Mono => (-x_max, x_max, F::ZERO),
            StereoEye::Left => (
                -x_max + frustum_shift,
                x_max + frustum_shift,
                F::ONE_HALF * intraocular_distance,
            ),
            StereoEye::Right => (
                -x_max - frustum_shift,
                x_max - frustum_shift,
                -F::ONE_HALF * intraocular_distance,
            ),
        };

        let mut eye_translation = Self::identity();
        eye_translation.columns[3].x = eye_offset;

        Self::frustum(left, right, -y_max, y_max, near_distance, far_distance) * eye_translation
    }

    /// Creates a perspective projection of the (possibly off-center) view
    /// frustum whose near plane spans the given left, right, bottom and top
    /// coordinates.
    ///
    /// The entries are not finite if left equals right, bottom equals top or
    /// near equals far.
    pub fn frustum(
        left: F,
        right: F,
        bottom: F,
        top: F,
        near_distance: F,
        far_distance: F,
    ) -> Self {
        let width = right - left;
        let height = top - bottom;
        let depth_span = far_distance - near_distance;

        Self::new(
            Vector4::x() * (F::TWO * near_distance / width),
            Vector4::y() * (F::TWO * near_distance / height),
            Vector4::new(
                (right + left) / width,
                (top + bottom) / height,
                -(far_distance + near_distance) / depth_span,
                F::NEG_ONE,
            ),
            Vector4::z() * (F::NEG_TWO * far_distance * near_distance / depth_span),
        )
    }

    /// Like [`Self::frustum`], but validates the parameters first.
    ///
    /// # Errors
    /// If the frustum has zero width or height, or if the near and far
    /// distances do not satisfy `0 < near < far`.
    pub fn try_frustum(
        left: F,
        right: F,
        bottom: F,
        top: F,
        near_distance: F,
        far_distance: F,
    ) -> Result<Self> {
        ensure_nonempty_span("left and right", left, right)?;
        ensure_nonempty_span("bottom and top", bottom, top)?;
        ensure_valid_perspective_depth_range(near_distance, far_distance)?;

        Ok(Self::frustum(
            left,
            right,
            bottom,
            top,
            near_distance,
            far_distance,
        ))
    }

    /// Creates an orthographic projection of the box spanning the given left,
    /// right, bottom, top, near and far coordinates.
    ///
    /// The entries are not finite if any pair of opposite bounds is equal.
    pub fn orthogonal(left: F, right: F, bottom: F, top: F, near: F, far: F) -> Self {
        let width = right - left;
        let height = top - bottom;
        let depth_span = far - near;

        Self::new(
            Vector4::x() * (F::TWO / width),
            Vector4::y() * (F::TWO / height),
            Vector4::z() * (F::NEG_TWO / depth_span),
            Vector4::new(
                -(right + left) / width,
                -(top + bottom) / height,
                -(far + near) / depth_span,
                F::ONE,
            ),
        )
    }

    /// Like [`Self::orthogonal`], but validates the parameters first.
    ///
    /// # Errors
    /// If the box has zero extent along any axis.
    pub fn try_orthogonal(left: F, right: F, bottom: F, top: F, near: F, far: F) -> Result<Self> {
        ensure_nonempty_span("left and right", left, right)?;
        ensure_nonempty_span("bottom and top", bottom, top)?;
        ensure_nonempty_span("near and far", near, far)?;

        Ok(Self::orthogonal(left, right, bottom, top, near, far))
    }

    /// Creates an orthographic projection of a box centered on the view axis
    /// with the given height and ratio of width to height.
    pub fn orthogonal_with_height(height: F, aspect_ratio: F, near: F, far: F) -> Self {
        let half_height = F::ONE_HALF * height;
        let half_width = half_height * aspect_ratio;
        Self::orthogonal(
            -half_width,
            half_width,
            -half_height,
            half_height,
            near,
            far,
        )
    }

    /// Creates the matrix mapping clip space coordinates in the range [-1, 1]
    /// to texture coordinates in the range [0, 1], used for looking up the
    /// shadow map location of a point projected by a light.
    pub fn light_bias() -> Self {
        Self::new(
            Vector4::x() * F::ONE_HALF,
            Vector4::y() * F::ONE_HALF,
            Vector4::z() * F::ONE_HALF,
            Vector4::new(F::ONE_HALF, F::ONE_HALF, F::ONE_HALF, F::ONE),
        )
    }

    /// Creates the matrix mapping texture coordinates in the range [0, 1] into
    /// the given sub-rectangle of a shadow atlas.
    pub fn light_atlas_rect(rect: &Rect<F>) -> Self {
        Self::new(
            Vector4::x() * rect.width(),
            Vector4::y() * rect.height(),
            Vector4::z(),
            Vector4::new(rect.x(), rect.y(), F::ZERO, F::ONE),
        )
    }

    /// Creates the matrix converting clip space from the default conventions
    /// to those of a backend with clip space depth in [0, 1], optionally with
    /// an inverted y-axis.
    pub fn depth_correction(flip_y: bool) -> Self {
        let mut correction = DepthCorrection::REMAP_Z;
        correction.set(DepthCorrection::FLIP_Y, flip_y);
        Self::depth_correction_for(correction)
    }

    /// Creates the matrix converting clip space from the default conventions
    /// according to the given corrections.
    pub fn depth_correction_for(correction: DepthCorrection) -> Self {
        let reverse_z = correction.contains(DepthCorrection::REVERSE_Z);

        let (depth_scale, depth_offset) = if correction.contains(DepthCorrection::REMAP_Z) {
            let scale = if reverse_z { -F::ONE_HALF } else { F::ONE_HALF };
            (scale, F::ONE_HALF)
        } else {
            let scale = if reverse_z { F::NEG_ONE } else { F::ONE };
            (scale, F::ZERO)
        };

        let y_scale = if correction.contains(DepthCorrection::FLIP_Y) {
            F::NEG_ONE
        } else {
            F::ONE
        };

        Self::new(
            Vector4::x(),
            Vector4::y() * y_scale,
            Vector4::z() * depth_scale,
            Vector4::new(F::ZERO, F::ZERO, depth_offset, F::ONE),
        )
    }

    /// Creates the matrix mapping the given axis-aligned box into the cube
    /// spanning from -1 to 1 along each axis, with the center of the box
    /// mapped to the origin.
    ///
    /// The entries are not finite if the box has zero extent along any axis.
    pub fn scale_translate_to_fit(aabb: &AxisAlignedBox<F>) -> Self {
        let lower = aabb.lower_corner();
        let upper = aabb.upper_corner();

        let scale = |dim: usize| F::TWO / (upper[dim] - lower[dim]);
        let translation = |dim: usize| -(upper[dim] + lower[dim]) / (upper[dim] - lower[dim]);

        Self::new(
            Vector4::x() * scale(0),
            Vector4::y() * scale(1),
            Vector4::z() * scale(2),
            Vector4::new(translation(0), translation(1), translation(2), F::ONE),
        )
    }

    /// Like [`Self::scale_translate_to_fit`], but validates the box first.
    ///
    /// # Errors
    /// If the box has zero or non-finite extent along any axis.
    pub fn try_scale_translate_to_fit(aabb: &AxisAlignedBox<F>) -> Result<Self> {
        let extents = aabb.extents();
        if !extents
            .iter()
            .all(|extent| extent.is_finite() && *extent != F::ZERO)
        {
            bail!(
                "Tried to fit projection to box with zero extent: {} x {} x {}",
                extents.x,
                extents.y,
                extents.z
            );
        }
        Ok(Self::scale_translate_to_fit(aabb))
    }

    /// Computes the vertical field of view corresponding to the given
    /// horizontal field of view for a view plane with the given ratio of
    /// width to height.
    pub fn vertical_fov_from_horizontal<A: Angle<F>>(
        horizontal_field_of_view: A,
        aspect_ratio: F,
    ) -> Degrees<F> {
        let half_tangent = (F::ONE_HALF * horizontal_field_of_view.radians()).tan();
        Radians(F::TWO * (half_tangent / aspect_ratio).atan()).as_degrees()
    }

    /// Offsets the projected x- and y-coordinates by the given amounts in
    /// clip space, leaving all other entries intact. Used for sub-pixel
    /// jittering of the projection for temporal antialiasing.
    pub fn add_jitter_offset(&mut self, offset: &Vector2<F>) {
        self.columns[3].x += offset.x;
        self.columns[3].y += offset.y;
    }

    /// Negates every coefficient contributed by the y-axis.
    pub fn flip_y(&mut self) {
        self.columns[1] = -self.columns[1];
    }

    /// Sets the ratio of width to height of the view plane, keeping the
    /// vertical extent. Only meaningful for projections that are symmetric
    /// about the view axis.
    pub fn set_aspect_ratio(&mut self, aspect_ratio: F) {
        self.columns[0].x = self.columns[1].y / aspect_ratio;
    }

    /// Returns a copy of this perspective projection with the near distance
    /// replaced by the given one, keeping the field of view, aspect ratio and
    /// far distance.
    pub fn with_adjusted_z_near(&self, near_distance: F) -> Self {
        let far_distance = self.z_far();
        let depth_span = far_distance - near_distance;

        let mut adjusted = *self;
        adjusted.columns[2].z = -(far_distance + near_distance) / depth_span;
        adjusted.columns[3].z = F::NEG_TWO * near_distance * far_distance / depth_span;
        adjusted
    }

    /// Computes the determinant of the matrix.
    pub fn determinant(&self) -> F {
        let [c0, c1, c2, c3] = &self.columns;

        // 2x2 minors of the two upper and the two lower rows
        let s0 = c0.x * c1.y - c0.y * c1.x;
        let s1 = c0.x * c2.y - c0.y * c2.x;
        let s2 = c0.x * c3.y - c0.y * c3.x;
        let s3 = c1.x * c2.y - c1.y * c2.x;
        let s4 = c1.x * c3.y - c1.y * c3.x;
        let s5 = c2.x * c3.y - c2.y * c3.x;

        let k0 = c0.z * c1.w - c0.w * c1.z;
        let k1 = c0.z * c2.w - c0.w * c2.z;
        let k2 = c0.z * c3.w - c0.w * c3.z;
        let k3 = c1.z * c2.w - c1.w * c2.z;
        let k4 = c1.z * c3.w - c1.w * c3.z;
        let k5 = c2.z * c3.w - c2.w * c3.z;

        s0 * k5 - s1 * k4 + s2 * k3 + s3 * k2 - s4 * k1 + s5 * k0
    }

    /// Computes the inverse of the matrix, or returns [`None`] if it is
    /// singular.
    pub fn try_inverse(&self) -> Option<Self> {
        self.to_matrix()
            .try_inverse()
            .map(|inverse| Self::from_matrix(&inverse))
    }

    /// Replaces the matrix with its inverse if it has one.
    ///
    /// # Returns
    /// Whether the matrix was inverted. A singular matrix is left unchanged.
    pub fn invert(&mut self) -> bool {
        if let Some(inverse) = self.try_inverse() {
            *self = inverse;
            true
        } else {
            log::debug!("Tried to invert singular projection matrix:{}", self);
            false
        }
    }

    /// Whether this is an orthographic projection, meaning that the
    /// homogeneous coordinate of projected points is not affected by their
    /// depth.
    pub fn is_orthogonal(&self) -> bool {
        self.columns[3].w == F::ONE
    }

    /// Returns the vertical field of view of a perspective projection.
    pub fn fov(&self) -> Degrees<F> {
        Radians(F::TWO * (F::ONE / self.columns[1].y).atan()).as_degrees()
    }

    /// Returns the horizontal field of view of a perspective projection.
    pub fn horizontal_fov(&self) -> Degrees<F> {
        Radians(F::TWO * (F::ONE / self.columns[0].x).atan()).as_degrees()
    }

    /// Returns the ratio of width to height of the view plane.
    pub fn aspect_ratio(&self) -> F {
        self.columns[1].y / self.columns[0].x
    }

    /// Returns the factor to multiply level of detail distance thresholds
    /// with to make detail selection independent of the field of view.
    ///
    /// This is the width of the view plane at unit distance from the camera
    /// for a perspective projection, and unity for an orthographic projection.
    pub fn lod_multiplier(&self) -> F {
        if self.is_orthogonal() {
            F::ONE
        } else {
            // 2 * tan(horizontal_fov / 2)
            F::TWO / self.columns[0].x
        }
    }

    /// Computes how many pixels a horizontal distance of one meter at unit
    /// depth covers when the projection fills the given pixel width.
    ///
    /// The result saturates at the bounds of [`i32`], and is zero if the
    /// projected position is not finite.
    pub fn pixels_per_meter(&self, pixel_width: u32) -> i32 {
        let projected = self.transform_point(&point![F::ONE, F::ZERO, F::NEG_ONE]);
        let pixels = (projected.x * F::ONE_HALF + F::ONE_HALF)
            * convert_f64::<F>(f64::from(pixel_width));
        pixels.to_f64().map_or(0, |pixels| pixels as i32)
    }

    /// Returns the distance to the near clipping plane.
    pub fn z_near(&self) -> F {
        -self.compute_clip_planes()[4].displacement()
    }

    /// Returns the distance to the far clipping plane.
    pub fn z_far(&self) -> F {
        self.compute_clip_planes()[5].displacement()
    }

    /// Computes the horizontal and vertical distance from the view axis to the
    /// upper right corner of the near plane, or returns [`None`] if the corner
    /// is not well defined. Only meaningful for projections that are
    /// symmetric about the view axis.
    pub fn viewport_half_extents(&self) -> Option<Vector2<F>> {
        let [_, right, _, top, near, _] = self.compute_clip_planes();
        near.compute_intersection_with_planes(&right, &top).map(|corner| corner.xy().coords)
    }

    /// Like [`Self::viewport_half_extents`], but for the far plane.
    pub fn far_plane_half_extents(&self) -> Option<Vector2<F>> {
        let [_, right, _, top, _, far] = self.compute_clip_planes();
        far.compute_intersection_with_planes(&right, &top).map(|corner| corner.xy().coords)
    }

    /// Computes the planes bounding the volume that is mapped into clip space,
    /// in the order left, right, bottom, top, near and far. The negative
    /// halfspace of each plane lies outside the volume.
    ///
    /// The planes are expressed in the space the matrix transforms from, so
    /// for the product of a projection and a view transform they are in world
    /// space.
    ///
    /// This function uses the method of Gribb and Hartmann (2001)
    /// "Fast Extraction of Viewing Frustum Planes from the
    /// World-View-Projection Matrix".
    pub fn compute_clip_planes(&self) -> [Plane<F>; 6] {
        let [x, y, z, w] = array::from_fn(|row| self.row(row));
        let plane = |c: Vector4<F>| Plane::from_unnormalized_coefficients(c.x, c.y, c.z, c.w);

        [
            plane(w + x),
            plane(w - x),
            plane(w + y),
            plane(w - y),
            plane(w + z),
            plane(w - z),
        ]
    }

    /// Computes the eight corners of the volume that is mapped into clip
    /// space, ordered like the corners of an [`AxisAlignedBox`] in clip space.
    /// Returns [`None`] if the matrix is singular.
    pub fn compute_frustum_corners(&self) -> Option<[Point3<F>; 8]> {
        let Some(inverse) = self.try_inverse() else {
            log::debug!("Tried to compute frustum corners for singular projection matrix");
            return None;
        };
        let clip_cube = AxisAlignedBox::new(
            point![F::NEG_ONE, F::NEG_ONE, F::NEG_ONE],
            point![F::ONE, F::ONE, F::ONE],
        );
        Some(array::from_fn(|idx| {
            inverse.transform_point(&clip_cube.corner(idx))
        }))
    }

    /// Transforms the given point and performs the perspective division.
    pub fn transform_point(&self, point: &Point3<F>) -> Point3<F> {
        let homogeneous = self * point.to_homogeneous();
        Point3::from(homogeneous.xyz() / homogeneous.w)
    }

    fn row(&self, row: usize) -> Vector4<F> {
        Vector4::new(
            self.columns[0][row],
            self.columns[1][row],
            self.columns[2][row],
            self.columns[3][row],
        )
    }
}

fn ensure_nonempty_span<F: Float>(bounds: &str, lower: F, upper: F) -> Result<()> {
    if !(lower.is_finite() && upper.is_finite() && lower != upper) {
        bail!(
            "Invalid projection bounds for {}: {} and {}",
            bounds,
            lower,
            upper
        );
    }
    Ok(())
}

fn ensure_valid_perspective_depth_range<F: Float>(near_distance: F, far_distance: F) -> Result<()> {
    if !(near_distance > F::ZERO && far_distance > near_distance) {
        bail!(
            "Invalid near and far distance for perspective projection: {} and {}",
            near_distance,
            far_distance
        );
    }
    Ok(())
}

unsafe impl<F: Float> Zeroable for ProjectionMatrix<F> {}
unsafe impl<F: Float> Pod for ProjectionMatrix<F> {}

impl<F: Float> Default for ProjectionMatrix<F> {
    fn default() -> Self {
        Self::identity()
    }
}

impl<F: Float> From<Matrix4<F>> for ProjectionMatrix<F> {
    fn from(matrix: Matrix4<F>) -> Self {
        Self::from_matrix(&matrix)
    }
}

impl<F: Float> From<ProjectionMatrix<F>> for Matrix4<F> {
    fn from(projection: ProjectionMatrix<F>) -> Self {
        projection.to_matrix()
    }
}

impl<F: Float> From<Affine3<F>> for ProjectionMatrix<F> {
    fn from(transform: Affine3<F>) -> Self {
        Self::from_matrix(transform.matrix())
    }
}

impl<F: Float> From<&Affine3<F>> for ProjectionMatrix<F> {
    fn from(transform: &Affine3<F>) -> Self {
        Self::from_matrix(transform.matrix())
    }
}

impl<F: Float> Index<usize> for ProjectionMatrix<F> {
    type Output = Vector4<F>;

    fn index(&self, column: usize) -> &Vector4<F> {
        &self.columns[column]
    }
}

impl<F: Float> IndexMut<usize> for ProjectionMatrix<F> {
    fn index_mut(&mut self, column: usize) -> &mut Vector4<F> {
        &mut self.columns[column]
    }
}

impl<F: Float> Mul<Vector4<F>> for ProjectionMatrix<F> {
    type Output = Vector4<F>;

    fn mul(self, vector: Vector4<F>) -> Vector4<F> {
        self.columns[0] * vector.x
            + self.columns[1] * vector.y
            + self.columns[2] * vector.z
            + self.columns[3] * vector.w
    }
}

impl<F: Float> Mul<Vector4<F>> for &ProjectionMatrix<F> {
    type Output = Vector4<F>;

    fn mul(self, vector: Vector4<F>) -> Vector4<F> {
        *self * vector
    }
}

impl<F: Float> Mul for ProjectionMatrix<F> {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        Self {
            columns: rhs.columns.map(|column| self * column),
        }
    }
}

impl<F: Float> Mul<&ProjectionMatrix<F>> for &ProjectionMatrix<F> {
    type Output = ProjectionMatrix<F>;

    fn mul(self, rhs: &ProjectionMatrix<F>) -> ProjectionMatrix<F> {
        *self * *rhs
    }
}

impl<F: Float> Mul<Affine3<F>> for ProjectionMatrix<F> {
    type Output = Self;

    fn mul(self, transform: Affine3<F>) -> Self {
        self * Self::from(transform)
    }
}

impl<F: Float> Mul<&Affine3<F>> for &ProjectionMatrix<F> {
    type Output = ProjectionMatrix<F>;

    fn mul(self, transform: &Affine3<F>) -> ProjectionMatrix<F> {
        *self * ProjectionMatrix::from(transform)
    }
}

impl<F: Float> fmt::Display for ProjectionMatrix<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..4 {
            write!(
                f,
                "\n{}, {}, {}, {}",
                self.columns[0][row],
                self.columns[1][row],
                self.columns[2][row],
                self.columns[3][row]
            )?;
        }
        Ok(())
    }
}

impl<F: Float> AbsDiffEq for ProjectionMatrix<F> {
    type Epsilon = F;

    fn default_epsilon() -> F {
        F::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: F) -> bool {
        self.columns
            .iter()
            .zip(&other.columns)
            .all(|(a, b)| a.abs_diff_eq(b, epsilon))
    }
}

impl<F: Float> RelativeEq for ProjectionMatrix<F> {
    fn default_max_relative() -> F {
        F::default_max_relative()
    }

    fn relative_eq(&self, other: &Self, epsilon: F, max_relative: F) -> bool {
        self.columns
            .iter()
            .zip(&other.columns)
            .all(|(a, b)| a.relative_eq(b, epsilon, max_relative))
    }
}
