use std::fmt::Display;
use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};

use crate::scalar::FLOAT_EPSILON;

pub trait Zero {
    fn zero() -> Self;
}

impl Zero for i32 {
    fn zero() -> Self {
        0
    }
}

impl Zero for f32 {
    fn zero() -> Self {
        0.0
    }
}

impl Zero for f64 {
    fn zero() -> Self {
        0.0
    }
}

pub trait One {
    fn one() -> Self;
}

impl One for i32 {
    fn one() -> Self {
        1
    }
}

impl One for f32 {
    fn one() -> Self {
        1.0
    }
}

impl One for f64 {
    fn one() -> Self {
        1.0
    }
}

pub trait Two {
    fn two() -> Self;
}

impl Two for i32 {
    fn two() -> Self {
        2
    }
}

impl Two for f32 {
    fn two() -> Self {
        2.0
    }
}

impl Two for f64 {
    fn two() -> Self {
        2.0
    }
}

pub trait NumericOps:
    Sized
    + Add<Output = Self>
    + AddAssign
    + Sub<Output = Self>
    + SubAssign
    + Mul<Output = Self>
    + MulAssign
    + Div<Output = Self>
    + DivAssign
    + Neg<Output = Self>
    + PartialOrd
{
}

impl NumericOps for i32 {}

impl NumericOps for f32 {}

impl NumericOps for f64 {}

/// Scalars every vector, matrix and quaternion operator works with.
pub trait Number: Copy + Display + Zero + One + NumericOps {}

impl Number for i32 {}

impl Number for f32 {}

impl Number for f64 {}

/// Scalars supporting square roots, trigonometry and tolerance comparisons.
pub trait Float: Number + Two {
    fn sin(self) -> Self;
    fn cos(self) -> Self;
    fn tan(self) -> Self;
    fn acos(self) -> Self;
    fn sqrt(self) -> Self;
    fn abs(self) -> Self;
    fn half(self) -> Self;
    fn squared(self) -> Self;
    fn from_f64(value: f64) -> Self;
    fn pi() -> Self;
    fn tau() -> Self;

    /// Tolerance used by every approximate comparison of the crate.
    fn epsilon() -> Self {
        Self::from_f64(FLOAT_EPSILON)
    }
}

impl Float for f32 {
    fn sin(self) -> Self {
        self.sin()
    }

    fn cos(self) -> Self {
        self.cos()
    }

    fn tan(self) -> Self {
        self.tan()
    }

    fn acos(self) -> Self {
        self.acos()
    }

    fn sqrt(self) -> Self {
        self.sqrt()
    }

    fn abs(self) -> Self {
        self.abs()
    }

    fn half(self) -> Self {
        self * 0.5
    }

    fn squared(self) -> Self {
        self * self
    }

    #[allow(clippy::cast_possible_truncation)]
    fn from_f64(value: f64) -> Self {
        value as f32
    }

    fn pi() -> Self {
        std::f32::consts::PI
    }

    fn tau() -> Self {
        std::f32::consts::TAU
    }
}

impl Float for f64 {
    fn sin(self) -> Self {
        self.sin()
    }

    fn cos(self) -> Self {
        self.cos()
    }

    fn tan(self) -> Self {
        self.tan()
    }

    fn acos(self) -> Self {
        self.acos()
    }

    fn sqrt(self) -> Self {
        self.sqrt()
    }

    fn abs(self) -> Self {
        self.abs()
    }

    fn half(self) -> Self {
        self * 0.5
    }

    fn squared(self) -> Self {
        self * self
    }

    fn from_f64(value: f64) -> Self {
        value
    }

    fn pi() -> Self {
        std::f64::consts::PI
    }

    fn tau() -> Self {
        std::f64::consts::TAU
    }
}
