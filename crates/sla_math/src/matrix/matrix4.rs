use log::{debug, trace, warn};

use super::{Matrix3, SquareMatrix};
use crate::error::{MathError, Result};
use crate::number_traits::Float;
use crate::vector::{are_parallel, Vector, Vector3, Vector4};

pub type Matrix4f = Matrix4<f32>;
pub type Matrix4d = Matrix4<f64>;

#[repr(C)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Copy, PartialEq)]
pub struct Matrix4<T = f32> {
    columns: [Vector4<T>; 4],
}

impl<T> Matrix4<T> {
    pub const fn new(a: Vector4<T>, b: Vector4<T>, c: Vector4<T>, d: Vector4<T>) -> Self {
        Self {
            columns: [a, b, c, d],
        }
    }
}

square_matrix_ops!(Matrix4, Vector4, 4);

impl<T> SquareMatrix for Matrix4<T>
where
    T: Float,
{
    type Scalar = T;
    type Column = Vector4<T>;

    const DIMENSION: usize = 4;

    fn columns(&self) -> &[Vector4<T>] {
        &self.columns
    }

    fn columns_mut(&mut self) -> &mut [Vector4<T>] {
        &mut self.columns
    }

    fn zero() -> Self {
        Self {
            columns: [Vector4::zero(); 4],
        }
    }

    /// Only the `xyz` part of `axis` is used.
    fn make_rotation(radians: T, axis: Vector4<T>) -> Self {
        Matrix3::make_rotation(radians, axis.xyz()).into()
    }

    fn determinant(&self) -> T {
        let (s, c) = self.sub_determinants();
        s[0] * c[5] - s[1] * c[4] + s[2] * c[3] + s[3] * c[2] - s[4] * c[1] + s[5] * c[0]
    }

    #[rustfmt::skip]
    fn inverse(&self) -> Option<Self> {
        let (s, c) = self.sub_determinants();
        let determinant =
            s[0] * c[5] - s[1] * c[4] + s[2] * c[3] + s[3] * c[2] - s[4] * c[1] + s[5] * c[0];
        if determinant == T::zero() {
            trace!("Matrix4 has a zero determinant, no inverse");
            return None;
        }

        let inv_det = T::one() / determinant;
        let a = |row: usize, col: usize| self.columns[col][row];

        Some(Self::new(
            Vector4::new(
                (a(1, 1) * c[5] - a(1, 2) * c[4] + a(1, 3) * c[3]) * inv_det,
                (-a(1, 0) * c[5] + a(1, 2) * c[2] - a(1, 3) * c[1]) * inv_det,
                (a(1, 0) * c[4] - a(1, 1) * c[2] + a(1, 3) * c[0]) * inv_det,
                (-a(1, 0) * c[3] + a(1, 1) * c[1] - a(1, 2) * c[0]) * inv_det,
            ),
            Vector4::new(
                (-a(0, 1) * c[5] + a(0, 2) * c[4] - a(0, 3) * c[3]) * inv_det,
                (a(0, 0) * c[5] - a(0, 2) * c[2] + a(0, 3) * c[1]) * inv_det,
                (-a(0, 0) * c[4] + a(0, 1) * c[2] - a(0, 3) * c[0]) * inv_det,
                (a(0, 0) * c[3] - a(0, 1) * c[1] + a(0, 2) * c[0]) * inv_det,
            ),
            Vector4::new(
                (a(3, 1) * s[5] - a(3, 2) * s[4] + a(3, 3) * s[3]) * inv_det,
                (-a(3, 0) * s[5] + a(3, 2) * s[2] - a(3, 3) * s[1]) * inv_det,
                (a(3, 0) * s[4] - a(3, 1) * s[2] + a(3, 3) * s[0]) * inv_det,
                (-a(3, 0) * s[3] + a(3, 1) * s[1] - a(3, 2) * s[0]) * inv_det,
            ),
            Vector4::new(
                (-a(2, 1) * s[5] + a(2, 2) * s[4] - a(2, 3) * s[3]) * inv_det,
                (a(2, 0) * s[5] - a(2, 2) * s[2] + a(2, 3) * s[1]) * inv_det,
                (-a(2, 0) * s[4] + a(2, 1) * s[2] - a(2, 3) * s[0]) * inv_det,
                (a(2, 0) * s[3] - a(2, 1) * s[1] + a(2, 2) * s[0]) * inv_det,
            ),
        ))
    }
}

impl<T> Matrix4<T>
where
    T: Float,
{
    /// 2×2 determinants of the two upper rows (`s`) and of the two lower
    /// rows (`c`), shared by the determinant and the inverse.
    fn sub_determinants(&self) -> ([T; 6], [T; 6]) {
        let a = |row: usize, col: usize| self.columns[col][row];
        let s = [
            a(0, 0) * a(1, 1) - a(1, 0) * a(0, 1),
            a(0, 0) * a(1, 2) - a(1, 0) * a(0, 2),
            a(0, 0) * a(1, 3) - a(1, 0) * a(0, 3),
            a(0, 1) * a(1, 2) - a(1, 1) * a(0, 2),
            a(0, 1) * a(1, 3) - a(1, 1) * a(0, 3),
            a(0, 2) * a(1, 3) - a(1, 2) * a(0, 3),
        ];
        let c = [
            a(2, 0) * a(3, 1) - a(3, 0) * a(2, 1),
            a(2, 0) * a(3, 2) - a(3, 0) * a(2, 2),
            a(2, 0) * a(3, 3) - a(3, 0) * a(2, 3),
            a(2, 1) * a(3, 2) - a(3, 1) * a(2, 2),
            a(2, 1) * a(3, 3) - a(3, 1) * a(2, 3),
            a(2, 2) * a(3, 3) - a(3, 2) * a(2, 3),
        ];
        (s, c)
    }

    pub fn make_translation(translation: Vector3<T>) -> Self {
        let mut result = Self::identity();
        result.set_column(3, Vector4::from_xyz(translation, T::one()));
        result
    }

    /// Transforms `point` as a position (`w = 1`) and drops the resulting `w`.
    pub fn transform_point(&self, point: &Vector3<T>) -> Vector3<T> {
        (*self * Vector4::from_xyz(*point, T::one())).xyz()
    }

    /// Right-handed view matrix. Rows 0 to 2 hold the right, up and view
    /// axes, so `target` lands on the positive z axis of view space.
    ///
    /// Returns the identity when `eye == target`.
    ///
    /// # Errors
    ///
    /// [`MathError::DegenerateBasis`] when the view direction is parallel to
    /// `up_axis`, or `up_axis` is zero.
    pub fn look_at_rh(
        eye: &Vector3<T>,
        target: &Vector3<T>,
        up_axis: &Vector3<T>,
    ) -> Result<Self> {
        Self::look_at(eye, target, up_axis, |forward, up_axis| {
            let right = forward.cross(up_axis).normalized();
            (right, right.cross(forward))
        })
    }

    /// Left-handed view matrix. Same degenerate cases as [`Matrix4::look_at_rh`].
    ///
    /// # Errors
    ///
    /// [`MathError::DegenerateBasis`] when the view direction is parallel to
    /// `up_axis`, or `up_axis` is zero.
    pub fn look_at_lh(
        eye: &Vector3<T>,
        target: &Vector3<T>,
        up_axis: &Vector3<T>,
    ) -> Result<Self> {
        Self::look_at(eye, target, up_axis, |forward, up_axis| {
            let right = up_axis.cross(forward).normalized();
            (right, forward.cross(&right))
        })
    }

    fn look_at<F>(
        eye: &Vector3<T>,
        target: &Vector3<T>,
        up_axis: &Vector3<T>,
        basis: F,
    ) -> Result<Self>
    where
        F: Fn(&Vector3<T>, &Vector3<T>) -> (Vector3<T>, Vector3<T>),
    {
        if eye == target {
            debug!("look-at with eye == target ({eye}), using the identity");
            return Ok(Self::identity());
        }

        let forward = (*target - *eye).normalized();
        if up_axis.norm2() == T::zero() || are_parallel(&forward, up_axis) {
            warn!("look-at direction {forward} and up axis {up_axis} do not span a basis");
            return Err(MathError::DegenerateBasis);
        }

        let (right, third) = basis(&forward, up_axis);
        let orientation = Self::new(
            Vector4::from_xyz(right, T::zero()),
            Vector4::from_xyz(third, T::zero()),
            Vector4::from_xyz(forward, T::zero()),
            Vector4::zero(),
        );

        let mut look_at = orientation.transposed();
        look_at.set_column(
            3,
            Vector4::new(-right.dot(eye), -third.dot(eye), -forward.dot(eye), T::one()),
        );
        Ok(look_at)
    }

    /// # Panics
    ///
    /// Panics if `aspect_ratio <= 0` or `far <= near`.
    pub fn perspective_rh(fovy: T, aspect_ratio: T, near: T, far: T) -> Self {
        assert_valid_frustum(aspect_ratio, near, far);
        let k = far / (near - far);
        Self::perspective(fovy, aspect_ratio, k, -T::one(), near * k)
    }

    /// # Panics
    ///
    /// Panics if `aspect_ratio <= 0` or `far <= near`.
    pub fn perspective_lh(fovy: T, aspect_ratio: T, near: T, far: T) -> Self {
        assert_valid_frustum(aspect_ratio, near, far);
        let k = far / (far - near);
        Self::perspective(fovy, aspect_ratio, k, T::one(), -near * k)
    }

    /// Maps the near plane to depth 1 and the far plane to depth 0.
    ///
    /// # Panics
    ///
    /// Panics if `aspect_ratio <= 0` or `far <= near`.
    pub fn perspective_reversed_rh(fovy: T, aspect_ratio: T, near: T, far: T) -> Self {
        assert_valid_frustum(aspect_ratio, near, far);
        let k = near / (far - near);
        Self::perspective(fovy, aspect_ratio, k, -T::one(), far * k)
    }

    /// Maps the near plane to depth 1 and the far plane to depth 0.
    ///
    /// # Panics
    ///
    /// Panics if `aspect_ratio <= 0` or `far <= near`.
    pub fn perspective_reversed_lh(fovy: T, aspect_ratio: T, near: T, far: T) -> Self {
        assert_valid_frustum(aspect_ratio, near, far);
        let k = near / (near - far);
        Self::perspective(fovy, aspect_ratio, k, T::one(), -far * k)
    }

    fn perspective(fovy: T, aspect_ratio: T, depth_scale: T, w_sign: T, depth_offset: T) -> Self {
        let g = T::one() / fovy.half().tan();

        let mut result = Self::zero();
        result.set(0, 0, g / aspect_ratio);
        result.set(1, 1, g);
        result.set(2, 2, depth_scale);
        result.set(2, 3, w_sign);
        result.set(3, 2, depth_offset);
        result
    }

    /// # Panics
    ///
    /// Panics if `width <= 0`, `height <= 0` or `far <= near`.
    pub fn orthographic_rh(width: T, height: T, near: T, far: T) -> Self {
        assert_valid_volume(width, height, near, far);
        Self::orthographic(width, height, T::one() / (near - far), near / (near - far))
    }

    /// # Panics
    ///
    /// Panics if `width <= 0`, `height <= 0` or `far <= near`.
    pub fn orthographic_lh(width: T, height: T, near: T, far: T) -> Self {
        assert_valid_volume(width, height, near, far);
        Self::orthographic(width, height, T::one() / (far - near), near / (near - far))
    }

    fn orthographic(width: T, height: T, depth_scale: T, depth_offset: T) -> Self {
        let mut result = Self::zero();
        result.set(0, 0, T::two() / width);
        result.set(1, 1, T::two() / height);
        result.set(2, 2, depth_scale);
        result.set(3, 2, depth_offset);
        result.set(3, 3, T::one());
        result
    }
}

fn assert_valid_frustum<T: Float>(aspect_ratio: T, near: T, far: T) {
    assert!(
        aspect_ratio > T::zero(),
        "aspect ratio must be positive, got {aspect_ratio}"
    );
    assert!(far > near, "far ({far}) must be greater than near ({near})");
}

fn assert_valid_volume<T: Float>(width: T, height: T, near: T, far: T) {
    assert!(
        width > T::zero() && height > T::zero(),
        "orthographic extents must be positive, got {width}x{height}"
    );
    assert!(far > near, "far ({far}) must be greater than near ({near})");
}

impl<T> From<Matrix3<T>> for Matrix4<T>
where
    T: Float,
{
    fn from(matrix: Matrix3<T>) -> Self {
        Self::new(
            Vector4::from_xyz(matrix[0], T::zero()),
            Vector4::from_xyz(matrix[1], T::zero()),
            Vector4::from_xyz(matrix[2], T::zero()),
            Vector4::new(T::zero(), T::zero(), T::zero(), T::one()),
        )
    }
}
