//! Column-major square matrices.
//!
//! A matrix is stored as `N` column vectors: `m[col][row]`, or
//! [`SquareMatrix::get`] with the same argument order.

use crate::number_traits::{Float, One, Zero};
use crate::vector::Vector;

macro_rules! square_matrix_ops {
    ($name:ident, $column:ident, $dimension:literal) => {
        impl<T> $name<T> {
            pub const fn from_columns(columns: [$column<T>; $dimension]) -> Self {
                Self { columns }
            }
        }

        impl<T> $name<T>
        where
            T: bytemuck::Pod,
        {
            /// Elements column after column, rows in order within a column,
            /// without padding.
            #[must_use]
            pub fn as_packed_array(&self) -> &[T] {
                bytemuck::cast_slice(&self.columns)
            }
        }

        // SAFETY: `repr(C)` wrapper around an array of padding-free vectors.
        unsafe impl<T: bytemuck::Zeroable> bytemuck::Zeroable for $name<T> {}
        unsafe impl<T: bytemuck::Pod> bytemuck::Pod for $name<T> {}

        impl<T> std::fmt::Debug for $name<T>
        where
            T: std::fmt::Display,
        {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                writeln!(f, "[")?;
                for row in 0..$dimension {
                    write!(f, "\t")?;
                    for col in 0..$dimension {
                        write!(f, "{}, ", self.columns[col][row])?;
                    }
                    writeln!(f)?;
                }
                writeln!(f, "]")
            }
        }

        impl<T> std::ops::Index<usize> for $name<T> {
            type Output = $column<T>;

            fn index(&self, index: usize) -> &Self::Output {
                &self.columns[index]
            }
        }

        impl<T> std::ops::IndexMut<usize> for $name<T> {
            fn index_mut(&mut self, index: usize) -> &mut Self::Output {
                &mut self.columns[index]
            }
        }

        impl<T> std::ops::Add for $name<T>
        where
            T: $crate::number_traits::Float,
        {
            type Output = Self;

            fn add(self, rhs: Self) -> Self::Output {
                Self {
                    columns: std::array::from_fn(|i| self.columns[i] + rhs.columns[i]),
                }
            }
        }

        impl<T> std::ops::AddAssign for $name<T>
        where
            T: $crate::number_traits::Float,
        {
            fn add_assign(&mut self, rhs: Self) {
                *self = *self + rhs;
            }
        }

        impl<T> std::ops::Sub for $name<T>
        where
            T: $crate::number_traits::Float,
        {
            type Output = Self;

            fn sub(self, rhs: Self) -> Self::Output {
                Self {
                    columns: std::array::from_fn(|i| self.columns[i] - rhs.columns[i]),
                }
            }
        }

        impl<T> std::ops::SubAssign for $name<T>
        where
            T: $crate::number_traits::Float,
        {
            fn sub_assign(&mut self, rhs: Self) {
                *self = *self - rhs;
            }
        }

        impl<T> std::ops::Mul for $name<T>
        where
            T: $crate::number_traits::Float,
        {
            type Output = Self;

            fn mul(self, rhs: Self) -> Self::Output {
                $crate::matrix::SquareMatrix::mul_matrix(&self, &rhs)
            }
        }

        impl<T> std::ops::MulAssign for $name<T>
        where
            T: $crate::number_traits::Float,
        {
            fn mul_assign(&mut self, rhs: Self) {
                *self = $crate::matrix::SquareMatrix::mul_matrix(self, &rhs);
            }
        }

        impl<T> std::ops::Mul<$column<T>> for $name<T>
        where
            T: $crate::number_traits::Float,
        {
            type Output = $column<T>;

            fn mul(self, rhs: $column<T>) -> Self::Output {
                $crate::matrix::SquareMatrix::mul_vector(&self, &rhs)
            }
        }

        impl<T> std::ops::Mul<T> for $name<T>
        where
            T: $crate::number_traits::Float,
        {
            type Output = Self;

            fn mul(self, rhs: T) -> Self::Output {
                Self {
                    columns: self.columns.map(|column| column * rhs),
                }
            }
        }

        impl<T> std::ops::MulAssign<T> for $name<T>
        where
            T: $crate::number_traits::Float,
        {
            fn mul_assign(&mut self, rhs: T) {
                *self = *self * rhs;
            }
        }

        impl<T> std::ops::Div<T> for $name<T>
        where
            T: $crate::number_traits::Float,
        {
            type Output = Self;

            fn div(self, rhs: T) -> Self::Output {
                self * (<T as $crate::number_traits::One>::one() / rhs)
            }
        }

        impl<T> std::ops::DivAssign<T> for $name<T>
        where
            T: $crate::number_traits::Float,
        {
            fn div_assign(&mut self, rhs: T) {
                *self = *self / rhs;
            }
        }
    };
}

mod matrix3;
mod matrix4;

pub use matrix3::{Matrix3, Matrix3d, Matrix3f};
pub use matrix4::{Matrix4, Matrix4d, Matrix4f};

/// Operations shared by every square matrix.
pub trait SquareMatrix: Copy + PartialEq {
    type Scalar: Float;
    type Column: Vector<Scalar = Self::Scalar>;

    const DIMENSION: usize;

    fn columns(&self) -> &[Self::Column];
    fn columns_mut(&mut self) -> &mut [Self::Column];

    #[must_use]
    fn zero() -> Self;

    /// Rotation of `radians` around `axis` (Rodrigues' formula).
    ///
    /// The axis is not normalized: a non-unit axis yields a scaled, incorrect
    /// rotation.
    #[must_use]
    fn make_rotation(radians: Self::Scalar, axis: Self::Column) -> Self;

    fn determinant(&self) -> Self::Scalar;

    /// `None` when the determinant is exactly zero.
    fn inverse(&self) -> Option<Self>;

    #[must_use]
    fn identity() -> Self {
        let mut identity = Self::zero();
        for i in 0..Self::DIMENSION {
            identity.set(i, i, Self::Scalar::one());
        }
        identity
    }

    /// # Panics
    ///
    /// Panics if `col` or `row` is not lower than [`SquareMatrix::DIMENSION`].
    fn get(&self, col: usize, row: usize) -> Self::Scalar {
        assert!(col < Self::DIMENSION, "column {col} is out of bounds");
        assert!(row < Self::DIMENSION, "row {row} is out of bounds");
        self.columns()[col].component(row)
    }

    /// # Panics
    ///
    /// Panics if `col` or `row` is not lower than [`SquareMatrix::DIMENSION`].
    fn set(&mut self, col: usize, row: usize, value: Self::Scalar) {
        assert!(col < Self::DIMENSION, "column {col} is out of bounds");
        assert!(row < Self::DIMENSION, "row {row} is out of bounds");
        *self.columns_mut()[col].component_mut(row) = value;
    }

    /// # Panics
    ///
    /// Panics if `index` is not lower than [`SquareMatrix::DIMENSION`].
    fn column(&self, index: usize) -> Self::Column {
        assert!(index < Self::DIMENSION, "column {index} is out of bounds");
        self.columns()[index]
    }

    /// # Panics
    ///
    /// Panics if `index` is not lower than [`SquareMatrix::DIMENSION`].
    fn set_column(&mut self, index: usize, value: Self::Column) {
        assert!(index < Self::DIMENSION, "column {index} is out of bounds");
        self.columns_mut()[index] = value;
    }

    #[must_use]
    fn transposed(&self) -> Self {
        let mut transposed = Self::zero();
        for col in 0..Self::DIMENSION {
            for row in 0..Self::DIMENSION {
                transposed.set(row, col, self.get(col, row));
            }
        }
        transposed
    }

    /// Matrix product `self * rhs`.
    #[must_use]
    fn mul_matrix(&self, rhs: &Self) -> Self {
        let mut result = Self::zero();
        for i in 0..Self::DIMENSION {
            for j in 0..Self::DIMENSION {
                let mut accumulated = Self::Scalar::zero();
                for k in 0..Self::DIMENSION {
                    accumulated += self.get(k, j) * rhs.get(i, k);
                }
                result.set(i, j, accumulated);
            }
        }
        result
    }

    /// Transforms the column vector `vector`.
    fn mul_vector(&self, vector: &Self::Column) -> Self::Column {
        let mut result = Self::Column::zero();
        for i in 0..Self::DIMENSION {
            for j in 0..Self::DIMENSION {
                *result.component_mut(i) += self.get(j, i) * vector.component(j);
            }
        }
        result
    }

    /// Identity with its diagonal replaced by `scale_per_axis`.
    #[must_use]
    fn make_scale(scale_per_axis: Self::Column) -> Self {
        let mut scale = Self::identity();
        for i in 0..Self::DIMENSION {
            scale.set(i, i, scale_per_axis.component(i));
        }
        scale
    }

    #[must_use]
    fn scaled(&self, scale_per_axis: Self::Column) -> Self {
        Self::make_scale(scale_per_axis).mul_matrix(self)
    }

    /// Applies `rotation` after the current transform: `self = rotation * self`.
    fn rotate(&mut self, rotation: &Self) {
        *self = rotation.mul_matrix(self);
    }

    fn almost_equals(&self, other: &Self) -> bool {
        self.columns()
            .iter()
            .zip(other.columns())
            .all(|(a, b)| a.almost_equals(b))
    }
}
