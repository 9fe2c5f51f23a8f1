use log::trace;

use super::SquareMatrix;
use crate::number_traits::Float;
use crate::vector::{Vector, Vector3};

pub type Matrix3f = Matrix3<f32>;
pub type Matrix3d = Matrix3<f64>;

#[repr(C)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Copy, PartialEq)]
pub struct Matrix3<T = f32> {
    columns: [Vector3<T>; 3],
}

impl<T> Matrix3<T> {
    pub const fn new(a: Vector3<T>, b: Vector3<T>, c: Vector3<T>) -> Self {
        Self {
            columns: [a, b, c],
        }
    }
}

square_matrix_ops!(Matrix3, Vector3, 3);

impl<T> SquareMatrix for Matrix3<T>
where
    T: Float,
{
    type Scalar = T;
    type Column = Vector3<T>;

    const DIMENSION: usize = 3;

    fn columns(&self) -> &[Vector3<T>] {
        &self.columns
    }

    fn columns_mut(&mut self) -> &mut [Vector3<T>] {
        &mut self.columns
    }

    fn zero() -> Self {
        Self {
            columns: [Vector3::zero(); 3],
        }
    }

    #[allow(clippy::similar_names)]
    fn make_rotation(radians: T, axis: Vector3<T>) -> Self {
        let sin = radians.sin();
        let cos = radians.cos();
        let one_minus_cos = T::one() - cos;

        let x = axis.x * one_minus_cos;
        let y = axis.y * one_minus_cos;
        let z = axis.z * one_minus_cos;
        let xy = x * axis.y;
        let xz = x * axis.z;
        let yz = y * axis.z;
        let sin_x = sin * axis.x;
        let sin_y = sin * axis.y;
        let sin_z = sin * axis.z;

        Self::new(
            Vector3::new(cos + x * axis.x, xy + sin_z, xz - sin_y),
            Vector3::new(xy - sin_z, cos + y * axis.y, yz + sin_x),
            Vector3::new(xz + sin_y, yz - sin_x, cos + z * axis.z),
        )
    }

    fn determinant(&self) -> T {
        let [a, b, c] = self.columns;
        a.cross(&b).dot(&c)
    }

    fn inverse(&self) -> Option<Self> {
        let determinant = self.determinant();
        if determinant == T::zero() {
            trace!("Matrix3 has a zero determinant, no inverse");
            return None;
        }

        let [a, b, c] = self.columns;
        let row0 = b.cross(&c) / determinant;
        let row1 = c.cross(&a) / determinant;
        let row2 = a.cross(&b) / determinant;

        Some(Self::new(
            Vector3::new(row0.x, row1.x, row2.x),
            Vector3::new(row0.y, row1.y, row2.y),
            Vector3::new(row0.z, row1.z, row2.z),
        ))
    }
}

#[cfg(test)]
mod tests {
    use std::f64::consts::PI;

    use assert_float_eq::*;

    use super::*;

    fn matrix_a() -> Matrix3d {
        Matrix3::new(
            Vector3::new(2.0, 0.0, 1.0),
            Vector3::new(1.0, 3.0, 2.0),
            Vector3::new(1.0, 1.0, 3.0),
        )
    }

    fn matrix_b() -> Matrix3d {
        Matrix3::new(
            Vector3::new(1.0, 2.0, 0.0),
            Vector3::new(0.0, 1.0, 3.0),
            Vector3::new(4.0, 0.0, 1.0),
        )
    }

    fn singular() -> Matrix3d {
        Matrix3::new(
            Vector3::new(1.0, 2.0, 3.0),
            Vector3::new(4.0, 5.0, 6.0),
            Vector3::new(7.0, 8.0, 9.0),
        )
    }

    #[test]
    fn equals() {
        let mut m = Matrix3f::identity();

        assert_eq!(m, Matrix3f::identity());

        m.set(2, 1, 0.5);

        assert_ne!(m, Matrix3f::identity());
    }

    #[test]
    fn identity() {
        let m = Matrix3f::identity();

        for col in 0..3 {
            for row in 0..3 {
                if col == row {
                    assert_eq!(m[col][row], 1.0);
                } else {
                    assert_eq!(m[col][row], 0.0);
                }
            }
        }
    }

    #[test]
    fn single_element_accessor() {
        let m = matrix_b();

        assert_eq!(m.get(0, 1), 2.0);
        assert_eq!(m.get(1, 2), 3.0);
        assert_eq!(m.get(2, 0), 4.0);
        assert_eq!(m.get(2, 0), m[2][0]);
    }

    #[test]
    fn set_single_element() {
        let mut m = Matrix3d::zero();

        m.set(1, 2, 7.0);
        m[0][1] = 3.0;

        assert_eq!(m.column(1), Vector3::new(0.0, 0.0, 7.0));
        assert_eq!(m.column(0), Vector3::new(0.0, 3.0, 0.0));
    }

    #[test]
    fn set_column() {
        let mut m = Matrix3d::identity();

        m.set_column(2, Vector3::new(4.0, 5.0, 6.0));

        assert_eq!(m[2], Vector3::new(4.0, 5.0, 6.0));
        assert_eq!(m.get(2, 1), 5.0);
    }

    #[test]
    #[should_panic(expected = "out of bounds")]
    fn get_out_of_bounds() {
        let m = Matrix3f::identity();
        let _element = m.get(3, 0);
    }

    #[test]
    fn packed_array() {
        let m = Matrix3::new(
            Vector3::new(0.0f32, 1.0, 2.0),
            Vector3::new(3.0, 4.0, 5.0),
            Vector3::new(6.0, 7.0, 8.0),
        );

        assert_eq!(
            m.as_packed_array(),
            &[0.0, 1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0]
        );
        assert_eq!(std::mem::size_of::<Matrix3f>(), 36);
    }

    #[test]
    fn multiplication_by_identity() {
        let m = matrix_a();
        let identity = Matrix3d::identity();

        assert_eq!(identity * m, m);
        assert_eq!(m * identity, m);
    }

    #[test]
    fn multiplication_of_vector_by_identity() {
        let v = Vector3::new(0.0, 1.0, 2.0);

        assert_eq!(Matrix3d::identity() * v, v);
    }

    #[test]
    fn mul_vector() {
        let v = Vector3::new(1.0, 0.0, -1.0);

        assert_eq!(singular() * v, Vector3::new(-6.0, -6.0, -6.0));
    }

    #[test]
    fn mul() {
        let result = matrix_a() * matrix_b();

        assert_eq!(result[0], Vector3::new(4.0, 6.0, 5.0));
        assert_eq!(result[1], Vector3::new(4.0, 6.0, 11.0));
        assert_eq!(result[2], Vector3::new(9.0, 1.0, 7.0));
    }

    #[test]
    fn mul_assign() {
        let mut m = matrix_a();

        m *= matrix_b();

        assert_eq!(m, matrix_a() * matrix_b());
    }

    #[test]
    fn add_and_sub() {
        let sum = matrix_a() + matrix_b();

        assert_eq!(sum[1], Vector3::new(1.0, 4.0, 5.0));
        assert_eq!(sum - matrix_b(), matrix_a());

        let mut m = matrix_a();
        m += matrix_b();
        m -= matrix_a();

        assert_eq!(m, matrix_b());
    }

    #[test]
    fn scalar_mul_and_div() {
        let m = matrix_a();

        let doubled = m * 2.0;

        assert_eq!(doubled[1], Vector3::new(2.0, 6.0, 4.0));
        assert_eq!(doubled / 2.0, m);

        let mut assigned = m;
        assigned *= 4.0;
        assigned /= 2.0;

        assert_eq!(assigned, doubled);
    }

    #[test]
    fn rotation_matrix_in_x() {
        let rotation = Matrix3d::make_rotation(PI / 2.0, Vector3::new(1.0, 0.0, 0.0));

        let rotated = rotation * Vector3::new(0.0, 1.0, 0.0);

        assert!(rotated.almost_equals(&Vector3::new(0.0, 0.0, 1.0)));
    }

    #[test]
    fn rotation_matrix_in_y() {
        let rotation = Matrix3d::make_rotation(PI / 2.0, Vector3::new(0.0, 1.0, 0.0));

        let rotated = rotation * Vector3::new(0.0, 0.0, 1.0);

        assert!(rotated.almost_equals(&Vector3::new(1.0, 0.0, 0.0)));
    }

    #[test]
    fn rotation_matrix_in_z() {
        let rotation =
            Matrix3f::make_rotation(std::f32::consts::FRAC_PI_2, Vector3::new(0.0, 0.0, 1.0));

        let rotated = rotation * Vector3::new(1.0, 0.0, 0.0);

        assert!(rotated.almost_equals(&Vector3::new(0.0, 1.0, 0.0)));
    }

    #[test]
    fn rotate_left_multiplies() {
        let rotation = Matrix3d::make_rotation(0.3, Vector3::new(0.0, 0.0, 1.0));
        let mut m = matrix_a();

        m.rotate(&rotation);

        assert_eq!(m, rotation * matrix_a());
    }

    #[test]
    fn transposition() {
        let m = matrix_a();

        let transposed = m.transposed();

        assert_eq!(transposed.get(0, 1), m.get(1, 0));
        assert_eq!(transposed.get(2, 0), m.get(0, 2));
        assert_eq!(transposed.transposed(), m);
    }

    #[test]
    fn transposition_of_identity() {
        assert_eq!(Matrix3f::identity().transposed(), Matrix3f::identity());
    }

    #[test]
    fn scale() {
        let scale = Matrix3d::make_scale(Vector3::new(2.0, 3.0, 4.0));

        assert_eq!(scale * Vector3::new(1.0, 1.0, 1.0), Vector3::new(2.0, 3.0, 4.0));
        assert_eq!(matrix_a().scaled(Vector3::new(2.0, 3.0, 4.0)), scale * matrix_a());
    }

    #[test]
    fn determinant() {
        assert_float_absolute_eq!(Matrix3d::identity().determinant(), 1.0, 1e-12);
        assert_float_absolute_eq!(matrix_a().determinant(), 12.0, 1e-12);
        assert_float_absolute_eq!(matrix_b().determinant(), 25.0, 1e-12);
        assert_float_absolute_eq!(singular().determinant(), 0.0, 1e-12);
    }

    #[test]
    fn determinant_of_transposed() {
        let m = matrix_a();

        assert_float_absolute_eq!(m.transposed().determinant(), m.determinant(), 1e-9);
    }

    #[test]
    fn determinant_of_product() {
        let a = matrix_a();
        let b = matrix_b();

        assert_float_absolute_eq!(
            (a * b).determinant(),
            a.determinant() * b.determinant(),
            1e-9
        );
        assert_float_absolute_eq!((a * b).determinant(), 300.0, 1e-9);
    }

    #[test]
    fn determinant_of_scaled() {
        let m = matrix_a();

        assert_float_relative_eq!(
            (m * 42.0).determinant(),
            42.0f64.powi(3) * m.determinant(),
            1e-9
        );
    }

    #[test]
    fn inverse() {
        let m = matrix_a();

        let inverse = m.inverse().unwrap();

        assert!((m * inverse).almost_equals(&Matrix3d::identity()));
        assert!((inverse * m).almost_equals(&Matrix3d::identity()));
    }

    #[test]
    fn inverse_of_rotation() {
        let rotation = Matrix3d::make_rotation(12.34, Vector3::new(1.0, 0.0, 0.0));

        let inverse = rotation.inverse().unwrap();

        assert!((rotation * inverse).almost_equals(&Matrix3d::identity()));
        assert!(inverse.almost_equals(&rotation.transposed()));
    }

    #[test]
    fn inverse_of_singular() {
        assert!(singular().inverse().is_none());
        assert!(Matrix3d::zero().inverse().is_none());
    }

    #[test]
    fn debug_prints_rows() {
        let m = Matrix3::new(
            Vector3::new(1, 2, 3),
            Vector3::new(4, 5, 6),
            Vector3::new(7, 8, 9),
        );

        assert_eq!(
            format!("{m:?}"),
            "[\n\t1, 4, 7, \n\t2, 5, 8, \n\t3, 6, 9, \n]\n"
        );
    }
}
