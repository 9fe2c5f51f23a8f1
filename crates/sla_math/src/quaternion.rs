use std::fmt::{Display, Formatter};
use std::ops::{Add, Div, Mul, Neg, Sub};

use log::trace;

use crate::error::{MathError, Result};
use crate::matrix::Matrix3;
use crate::number_traits::Float;
use crate::vector::{Vector, Vector3, Vector4};

pub type Quaternionf = Quaternion<f32>;
pub type Quaterniond = Quaternion<f64>;

/// Vector part `(x, y, z)` and scalar part `w`.
///
/// A unit quaternion represents a rotation of `2 * acos(w)` radians around
/// `(x, y, z)`. `q` and `-q` represent the same rotation.
#[must_use]
#[repr(C)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct Quaternion<T = f32> {
    data: Vector4<T>,
}

impl<T> Quaternion<T> {
    pub const fn new(x: T, y: T, z: T, w: T) -> Self {
        Self {
            data: Vector4::new(x, y, z, w),
        }
    }

    pub fn from_parts(vector_part: Vector3<T>, scalar_part: T) -> Self {
        Self {
            data: Vector4::from_xyz(vector_part, scalar_part),
        }
    }
}

impl<T> Quaternion<T>
where
    T: Copy,
{
    pub fn vector_part(&self) -> Vector3<T> {
        self.data.xyz()
    }

    pub fn scalar_part(&self) -> T {
        self.data.w
    }
}

impl<T> Quaternion<T>
where
    T: Float,
{
    pub fn zero() -> Self {
        Self {
            data: Vector4::zero(),
        }
    }

    pub fn identity() -> Self {
        Self::new(T::zero(), T::zero(), T::zero(), T::one())
    }

    /// Rotation of `radians` around `axis`, which must be a unit vector.
    pub fn make_rotation(radians: T, axis: Vector3<T>) -> Self {
        let half_angle = radians.half();
        Self::from_parts(axis * half_angle.sin(), half_angle.cos())
    }

    /// Rotation angle of a unit quaternion, in `[0, 2π]`.
    pub fn angle(&self) -> T {
        let w = self.scalar_part();
        let w = if w > T::one() {
            T::one()
        } else if w < -T::one() {
            -T::one()
        } else {
            w
        };
        T::two() * w.acos()
    }

    pub fn conjugate(&self) -> Self {
        Self::from_parts(-self.vector_part(), self.scalar_part())
    }

    pub fn magnitude(&self) -> T {
        self.data.norm()
    }

    /// Scalar part of `self * self.conjugate()`.
    pub fn magnitude2(&self) -> T {
        (*self * self.conjugate()).scalar_part()
    }

    pub fn normalize(&mut self) {
        self.data.normalize();
    }

    pub fn normalized(&self) -> Self {
        Self {
            data: self.data.normalized(),
        }
    }

    /// `None` when the squared magnitude is exactly zero.
    pub fn inverse(&self) -> Option<Self> {
        let magnitude2 = self.magnitude2();
        if magnitude2 == T::zero() {
            trace!("quaternion {self} has a zero magnitude, no inverse");
            return None;
        }

        Some(self.conjugate() / magnitude2)
    }

    /// Sandwich product `self * (vector, 0) * self⁻¹`.
    ///
    /// # Errors
    ///
    /// [`MathError::NoInverse`] when `self` is the zero quaternion.
    pub fn rotate(&self, vector: &Vector3<T>) -> Result<Vector3<T>> {
        let inverse = self.inverse().ok_or(MathError::NoInverse)?;
        let pure = Self::from_parts(*vector, T::zero());
        Ok((*self * pure * inverse).vector_part())
    }

    #[allow(clippy::similar_names)]
    pub fn rotation_matrix(&self) -> Matrix3<T> {
        let Vector4 { x, y, z, w } = self.data;
        let two = T::two();
        let (xx, yy, zz) = (x * x, y * y, z * z);
        let (xy, xz, yz) = (x * y, x * z, y * z);
        let (wx, wy, wz) = (w * x, w * y, w * z);

        Matrix3::new(
            Vector3::new(
                T::one() - two * (yy + zz),
                two * (xy + wz),
                two * (xz - wy),
            ),
            Vector3::new(
                two * (xy - wz),
                T::one() - two * (xx + zz),
                two * (yz + wx),
            ),
            Vector3::new(
                two * (xz + wy),
                two * (yz - wx),
                T::one() - two * (xx + yy),
            ),
        )
    }

    /// Unit quaternion of a pure rotation matrix. Either of the two
    /// quaternions representing the rotation may be returned.
    #[allow(clippy::many_single_char_names)]
    pub fn from_rotation_matrix(matrix: &Matrix3<T>) -> Self {
        let m = |row: usize, col: usize| matrix[col][row];
        let quarter = T::from_f64(0.25);
        let trace = m(0, 0) + m(1, 1) + m(2, 2);

        let (x, y, z, w) = if trace > T::zero() {
            let s = (trace + T::one()).sqrt() * T::two();
            (
                (m(2, 1) - m(1, 2)) / s,
                (m(0, 2) - m(2, 0)) / s,
                (m(1, 0) - m(0, 1)) / s,
                quarter * s,
            )
        } else if m(0, 0) > m(1, 1) && m(0, 0) > m(2, 2) {
            let s = (T::one() + m(0, 0) - m(1, 1) - m(2, 2)).sqrt() * T::two();
            (
                quarter * s,
                (m(0, 1) + m(1, 0)) / s,
                (m(0, 2) + m(2, 0)) / s,
                (m(2, 1) - m(1, 2)) / s,
            )
        } else if m(1, 1) > m(2, 2) {
            let s = (T::one() + m(1, 1) - m(0, 0) - m(2, 2)).sqrt() * T::two();
            (
                (m(0, 1) + m(1, 0)) / s,
                quarter * s,
                (m(1, 2) + m(2, 1)) / s,
                (m(0, 2) - m(2, 0)) / s,
            )
        } else {
            let s = (T::one() + m(2, 2) - m(0, 0) - m(1, 1)).sqrt() * T::two();
            (
                (m(0, 2) + m(2, 0)) / s,
                (m(1, 2) + m(2, 1)) / s,
                quarter * s,
                (m(1, 0) - m(0, 1)) / s,
            )
        };

        Self::new(x, y, z, w)
    }

    pub fn almost_equals(&self, other: &Self) -> bool {
        self.data.almost_equals(&other.data)
    }
}

/// Rotates `vector` by `quaternion`, see [`Quaternion::rotate`].
///
/// # Errors
///
/// [`MathError::NoInverse`] when `quaternion` is the zero quaternion.
pub fn rotate<T: Float>(vector: &Vector3<T>, quaternion: &Quaternion<T>) -> Result<Vector3<T>> {
    quaternion.rotate(vector)
}

// SAFETY: `repr(C)` wrapper around a single padding-free `Vector4<T>`.
unsafe impl<T: bytemuck::Zeroable> bytemuck::Zeroable for Quaternion<T> {}
unsafe impl<T: bytemuck::Pod> bytemuck::Pod for Quaternion<T> {}

impl<T> Display for Quaternion<T>
where
    T: Display,
{
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "({} + {} i + {} j + {} k)",
            self.data.w, self.data.x, self.data.y, self.data.z
        )
    }
}

impl<T> From<Quaternion<T>> for Matrix3<T>
where
    T: Float,
{
    fn from(quaternion: Quaternion<T>) -> Self {
        quaternion.rotation_matrix()
    }
}

impl<T> Add for Quaternion<T>
where
    T: Float,
{
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self {
            data: self.data + rhs.data,
        }
    }
}

impl<T> Add<Vector3<T>> for Quaternion<T>
where
    T: Float,
{
    type Output = Self;

    fn add(self, rhs: Vector3<T>) -> Self::Output {
        Self::from_parts(self.vector_part() + rhs, self.scalar_part())
    }
}

impl<T> Sub for Quaternion<T>
where
    T: Float,
{
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Self {
            data: self.data - rhs.data,
        }
    }
}

impl<T> Sub<Vector3<T>> for Quaternion<T>
where
    T: Float,
{
    type Output = Self;

    fn sub(self, rhs: Vector3<T>) -> Self::Output {
        Self::from_parts(self.vector_part() - rhs, self.scalar_part())
    }
}

impl<T> Mul for Quaternion<T>
where
    T: Float,
{
    type Output = Self;

    /// Hamilton product.
    fn mul(self, rhs: Self) -> Self::Output {
        let (v1, s1) = (self.vector_part(), self.scalar_part());
        let (v2, s2) = (rhs.vector_part(), rhs.scalar_part());

        Self::from_parts(v1.cross(&v2) + v2 * s1 + v1 * s2, s1 * s2 - v1.dot(&v2))
    }
}

impl<T> Mul<T> for Quaternion<T>
where
    T: Float,
{
    type Output = Self;

    fn mul(self, rhs: T) -> Self::Output {
        Self {
            data: self.data * rhs,
        }
    }
}

impl Mul<Quaternion<f32>> for f32 {
    type Output = Quaternion<f32>;

    fn mul(self, rhs: Quaternion<f32>) -> Self::Output {
        rhs * self
    }
}

impl Mul<Quaternion<f64>> for f64 {
    type Output = Quaternion<f64>;

    fn mul(self, rhs: Quaternion<f64>) -> Self::Output {
        rhs * self
    }
}

impl<T> Div<T> for Quaternion<T>
where
    T: Float,
{
    type Output = Self;

    fn div(self, rhs: T) -> Self::Output {
        Self {
            data: self.data / rhs,
        }
    }
}

impl<T> Neg for Quaternion<T>
where
    T: Float,
{
    type Output = Self;

    fn neg(self) -> Self::Output {
        Self { data: -self.data }
    }
}
