//! Angle conversions and tolerance-based scalar comparison.

use crate::number_traits::Float;

pub const PI: f64 = std::f64::consts::PI;
pub const TAU: f64 = PI * 2.0;

/// Fixed tolerance of every approximate comparison in this crate.
///
/// Invertibility checks are the exception: they compare the determinant (or
/// the squared magnitude) against exactly zero, so a nearly singular matrix
/// is still inverted, with the numerical instability that implies.
pub const FLOAT_EPSILON: f64 = 2e-6;

#[must_use]
pub fn deg2rad<T: Float>(degrees: T) -> T {
    degrees * T::tau() / T::from_f64(360.0)
}

#[must_use]
pub fn rad2deg<T: Float>(radians: T) -> T {
    radians * T::from_f64(360.0) / T::tau()
}

#[must_use]
pub fn are_almost_equal<T: Float>(a: T, b: T) -> bool {
    (a - b).abs() <= T::epsilon()
}
