use std::fmt::{Display, Formatter};
use std::ops::{
    Add, AddAssign, Div, DivAssign, Index, IndexMut, Mul, MulAssign, Neg, Sub, SubAssign,
};

use crate::number_traits::{Float, Number, One, Zero};
use crate::scalar::are_almost_equal;

pub type Vector2f = Vector2<f32>;
pub type Vector3f = Vector3<f32>;
pub type Vector4f = Vector4<f32>;
pub type Vector2d = Vector2<f64>;
pub type Vector3d = Vector3<f64>;
pub type Vector4d = Vector4<f64>;

/// Operations shared by every fixed-length vector.
///
/// Implementors only expose their components; everything else is written
/// once here. Mixing lengths is a type error, so no operation needs a runtime
/// length check.
pub trait Vector: Copy + PartialEq {
    type Scalar: Number;

    const LENGTH: usize;

    /// Vector with every component set to `value`.
    fn splat(value: Self::Scalar) -> Self;

    /// # Panics
    ///
    /// Panics if `index` is not lower than [`Vector::LENGTH`].
    fn component(&self, index: usize) -> Self::Scalar;

    /// # Panics
    ///
    /// Panics if `index` is not lower than [`Vector::LENGTH`].
    fn component_mut(&mut self, index: usize) -> &mut Self::Scalar;

    #[must_use]
    fn zero() -> Self {
        Self::splat(Self::Scalar::zero())
    }

    /// All ones. A convenient "unit" literal, not a multiplicative identity.
    #[must_use]
    fn identity() -> Self {
        Self::splat(Self::Scalar::one())
    }

    fn length(&self) -> usize {
        Self::LENGTH
    }

    #[must_use]
    fn map<F>(mut self, f: F) -> Self
    where
        F: Fn(Self::Scalar) -> Self::Scalar,
    {
        for i in 0..Self::LENGTH {
            let component = self.component_mut(i);
            *component = f(*component);
        }
        self
    }

    #[must_use]
    fn zip_map<F>(mut self, other: Self, f: F) -> Self
    where
        F: Fn(Self::Scalar, Self::Scalar) -> Self::Scalar,
    {
        for i in 0..Self::LENGTH {
            let component = self.component_mut(i);
            *component = f(*component, other.component(i));
        }
        self
    }

    fn clamp(&mut self, min: Self::Scalar, max: Self::Scalar) {
        for i in 0..Self::LENGTH {
            let component = self.component_mut(i);
            if *component < min {
                *component = min;
            }
            if *component > max {
                *component = max;
            }
        }
    }

    fn dot(&self, other: &Self) -> Self::Scalar
    where
        Self::Scalar: Float,
    {
        let mut result = Self::Scalar::zero();
        for i in 0..Self::LENGTH {
            result += self.component(i) * other.component(i);
        }
        result
    }

    fn norm2(&self) -> Self::Scalar
    where
        Self::Scalar: Float,
    {
        self.dot(self)
    }

    fn norm(&self) -> Self::Scalar
    where
        Self::Scalar: Float,
    {
        self.norm2().sqrt()
    }

    /// Unit vector pointing in the same direction, or [`Vector::zero`] for a
    /// zero vector.
    #[must_use]
    fn normalized(&self) -> Self
    where
        Self::Scalar: Float,
    {
        let norm2 = self.norm2();
        if norm2 > Self::Scalar::zero() {
            let norm = norm2.sqrt();
            self.map(|component| component / norm)
        } else {
            Self::zero()
        }
    }

    fn normalize(&mut self)
    where
        Self::Scalar: Float,
    {
        *self = self.normalized();
    }

    fn is_normalized(&self) -> bool
    where
        Self::Scalar: Float,
    {
        are_almost_equal(self.norm2(), Self::Scalar::one())
    }

    /// Projection of `self` onto the direction of `b`.
    ///
    /// `b` must not be zero: the division by its squared norm is not guarded
    /// and yields NaN or infinite components.
    #[must_use]
    fn project_onto(&self, b: &Self) -> Self
    where
        Self::Scalar: Float,
    {
        let factor = self.dot(b) / b.norm2();
        b.map(|component| component * factor)
    }

    /// Component of `self` orthogonal to `b`. Same precondition as
    /// [`Vector::project_onto`].
    #[must_use]
    fn reject(&self, b: &Self) -> Self
    where
        Self::Scalar: Float,
    {
        self.zip_map(self.project_onto(b), |a, p| a - p)
    }

    /// Linear interpolation, clamped: `from` for `t <= 0` and `to` for `t >= 1`.
    #[must_use]
    fn lerp(from: Self, to: Self, t: Self::Scalar) -> Self
    where
        Self::Scalar: Float,
    {
        if t <= Self::Scalar::zero() {
            from
        } else if t >= Self::Scalar::one() {
            to
        } else {
            from.zip_map(to, |a, b| a + (b - a) * t)
        }
    }

    fn almost_equals(&self, other: &Self) -> bool
    where
        Self::Scalar: Float,
    {
        (0..Self::LENGTH).all(|i| are_almost_equal(self.component(i), other.component(i)))
    }
}

/// Whether `a` and `b` point along the same line, in either direction.
///
/// The test runs on the normalized directions and tolerates
/// [`crate::scalar::FLOAT_EPSILON`]. A zero vector is parallel to nothing.
pub fn are_parallel<V>(a: &V, b: &V) -> bool
where
    V: Vector,
    V::Scalar: Float,
{
    let cosine = a.normalized().dot(&b.normalized());
    are_almost_equal(cosine.abs(), V::Scalar::one())
}

macro_rules! struct_vec {
    ($name:ident : $display_fmt:literal, $len:literal, ($($dim:ident : $TY:ty => $idx:tt,)*)) => {
        #[must_use]
        #[repr(C)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        #[derive(Clone, Copy, PartialEq, Eq, Debug)]
        pub struct $name<T = f32> {
            $(pub $dim: T,)*
        }

        impl<T> $name<T> {
            pub const fn new($($dim: T),*) -> Self {
                Self {
                    $($dim),*
                }
            }
        }

        impl<T> Vector for $name<T>
        where
            T: Number,
        {
            type Scalar = T;

            const LENGTH: usize = $len;

            fn splat(value: T) -> Self {
                Self {
                    $($dim: value),*
                }
            }

            fn component(&self, index: usize) -> T {
                self[index]
            }

            fn component_mut(&mut self, index: usize) -> &mut T {
                &mut self[index]
            }
        }

        impl<T> Index<usize> for $name<T> {
            type Output = T;

            fn index(&self, index: usize) -> &Self::Output {
                match index {
                    $($idx => &self.$dim,)*
                    _ => panic!(
                        "index {index} is out of bounds for {}",
                        stringify!($name)
                    ),
                }
            }
        }

        impl<T> IndexMut<usize> for $name<T> {
            fn index_mut(&mut self, index: usize) -> &mut Self::Output {
                match index {
                    $($idx => &mut self.$dim,)*
                    _ => panic!(
                        "index {index} is out of bounds for {}",
                        stringify!($name)
                    ),
                }
            }
        }

        impl<T> $name<T>
        where
            T: bytemuck::Pod,
        {
            /// Components in order, without padding.
            #[must_use]
            pub fn as_packed_array(&self) -> &[T] {
                bytemuck::cast_slice(std::slice::from_ref(self))
            }
        }

        // SAFETY: `repr(C)` struct made only of `T` fields, so it has no padding
        // and every bit pattern valid for `T` is valid for it.
        unsafe impl<T: bytemuck::Zeroable> bytemuck::Zeroable for $name<T> {}
        unsafe impl<T: bytemuck::Pod> bytemuck::Pod for $name<T> {}

        impl<T> Default for $name<T>
        where T: Zero {
            fn default() -> Self {
                Self {
                    $($dim: T::zero(),)*
                }
            }
        }

        impl<T> Add for $name<T>
        where
            T: Copy + Add<Output = T>, {
            type Output = Self;

            fn add(self, rhs: Self) -> Self::Output {
                Self {
                    $($dim: self.$dim + rhs.$dim),*
                }
            }
        }

        impl<T> Add<T> for $name<T>
        where
            T: Copy + Add<Output = T>, {
            type Output = Self;

            fn add(self, rhs: T) -> Self::Output {
                Self {
                    $($dim: self.$dim + rhs),*
                }
            }
        }

        impl<T> AddAssign for $name<T>
        where
            T: Copy + Add<Output = T>, {
            fn add_assign(&mut self, rhs: Self) {
                *self = *self + rhs;
            }
        }

        impl<T> AddAssign<T> for $name<T>
        where
            T: Copy + Add<Output = T>, {
            fn add_assign(&mut self, rhs: T) {
                *self = *self + rhs;
            }
        }

        impl<T> Sub for $name<T>
        where
            T: Copy + Sub<Output = T>, {
            type Output = Self;

            fn sub(self, rhs: Self) -> Self::Output {
                Self {
                    $($dim: self.$dim - rhs.$dim),*
                }
            }
        }

        impl<T> Sub<T> for $name<T>
        where
            T: Copy + Sub<Output = T>, {
            type Output = Self;

            fn sub(self, rhs: T) -> Self::Output {
                Self {
                    $($dim: self.$dim - rhs),*
                }
            }
        }

        impl<T> SubAssign for $name<T>
        where
            T: Copy + Sub<Output = T>, {
            fn sub_assign(&mut self, rhs: Self) {
                *self = *self - rhs;
            }
        }

        impl<T> SubAssign<T> for $name<T>
        where
            T: Copy + Sub<Output = T>, {
            fn sub_assign(&mut self, rhs: T) {
                *self = *self - rhs;
            }
        }

        impl<T> Mul for $name<T>
        where
            T: Copy + Mul<Output = T>, {
            type Output = Self;

            fn mul(self, rhs: Self) -> Self::Output {
                Self {
                    $($dim: self.$dim * rhs.$dim),*
                }
            }
        }

        impl<T> Mul<T> for $name<T>
        where
            T: Copy + Mul<Output = T>, {
            type Output = Self;

            fn mul(self, rhs: T) -> Self::Output {
                Self {
                    $($dim: self.$dim * rhs),*
                }
            }
        }

        impl<T> MulAssign for $name<T>
        where
            T: Copy + Mul<Output = T>, {
            fn mul_assign(&mut self, rhs: Self) {
                *self = *self * rhs;
            }
        }

        impl<T> MulAssign<T> for $name<T>
        where
            T: Copy + Mul<Output = T>, {
            fn mul_assign(&mut self, rhs: T) {
                *self = *self * rhs;
            }
        }

        impl<T> Div for $name<T>
        where
            T: Copy + Div<Output = T>, {
            type Output = Self;

            fn div(self, rhs: Self) -> Self::Output {
                Self {
                    $($dim: self.$dim / rhs.$dim),*
                }
            }
        }

        impl<T> Div<T> for $name<T>
        where
            T: Copy + Div<Output = T>, {
            type Output = Self;

            fn div(self, rhs: T) -> Self::Output {
                Self {
                    $($dim: self.$dim / rhs),*
                }
            }
        }

        impl<T> DivAssign for $name<T>
        where
            T: Copy + Div<Output = T>, {
            fn div_assign(&mut self, rhs: Self) {
                *self = *self / rhs;
            }
        }

        impl<T> DivAssign<T> for $name<T>
        where
            T: Copy + Div<Output = T>, {
            fn div_assign(&mut self, rhs: T) {
                *self = *self / rhs;
            }
        }

        impl<T> Neg for $name<T>
        where
            T: Copy + Neg<Output = T>,
        {
            type Output = Self;

            fn neg(self) -> Self::Output {
                Self {
                    $($dim: -self.$dim),*
                }
            }
        }

        impl<T> Display for $name<T>
        where
            T: Display,
        {
            fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
                write!(f, $display_fmt, $(self.$dim),*)
            }
        }

        impl<T> From<($($TY),*)> for $name<T>
        where
            T: Copy {
            fn from(tuple: ($($TY),*)) -> Self {
                Self {
                    $($dim: tuple.$idx),*
                }
            }
        }

        impl<T> From<$name<T>> for ($($TY),*)
        where
            T: Copy,
        {
            fn from(vector: $name<T>) -> Self {
                ($(vector.$dim),*)
            }
        }

        impl<T> From<[T; $len]> for $name<T>
        where
            T: Copy,
        {
            fn from(array: [T; $len]) -> Self {
                Self {
                    $($dim: array[$idx]),*
                }
            }
        }

        impl<T> From<$name<T>> for [T; $len] {
            fn from(vector: $name<T>) -> Self {
                [$(vector.$dim),*]
            }
        }
    };
}

struct_vec!(Vector2: "({}, {})", 2, (x: T => 0, y: T => 1,));
struct_vec!(Vector3: "({}, {}, {})", 3, (x: T => 0, y: T => 1, z: T => 2,));
struct_vec!(Vector4: "({}, {}, {}, {})", 4, (x: T => 0, y: T => 1, z: T => 2, w: T => 3,));

impl<T> Vector3<T>
where
    T: Number,
{
    /// Right-handed cross product. Zero exactly when the operands are
    /// parallel, anti-parallel, or one of them is zero.
    pub fn cross(&self, other: &Vector3<T>) -> Vector3<T> {
        Vector3::new(
            self.y * other.z - self.z * other.y,
            self.z * other.x - self.x * other.z,
            self.x * other.y - self.y * other.x,
        )
    }
}

impl<T> Vector4<T> {
    pub fn from_xyz(xyz: Vector3<T>, w: T) -> Self {
        Self::new(xyz.x, xyz.y, xyz.z, w)
    }
}

impl<T> Vector4<T>
where
    T: Copy,
{
    pub fn xyz(&self) -> Vector3<T> {
        Vector3::new(self.x, self.y, self.z)
    }
}
