#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

mod error;
pub mod matrix;
pub mod number_traits;
pub mod quaternion;
pub mod scalar;
pub mod vector;

pub use error::{MathError, Result};
