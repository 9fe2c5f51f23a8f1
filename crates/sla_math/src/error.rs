use std::fmt::{Display, Formatter};

pub type Result<T> = std::result::Result<T, MathError>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MathError {
    /// The quaternion has a squared magnitude of exactly zero.
    NoInverse,
    /// The look-at direction is parallel to the up axis, or the up axis is zero.
    DegenerateBasis,
}

impl Display for MathError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            MathError::NoInverse => write!(f, "the quaternion has no inverse"),
            MathError::DegenerateBasis => {
                write!(f, "the view direction and the up axis do not span a basis")
            }
        }
    }
}

impl std::error::Error for MathError {}
