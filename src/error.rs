use std::error::Error;
use std::fmt;

/// Errors raised while building or addressing arrays.
#[derive(Debug, Clone, PartialEq)]
pub enum ArrayError {
    /// The flat buffer length does not equal the element count of the shape.
    ShapeMismatch { shape: Vec<usize>, len: usize },
    /// The product of the shape does not fit in `usize`.
    ShapeOverflow { shape: Vec<usize> },
    RankMismatch { expected: usize, found: usize },
    IndexOutOfBounds { index: Vec<usize>, shape: Vec<usize> },
    LengthMismatch { left: usize, right: usize },
    InvalidRange { low: f64, high: f64 },
}

impl fmt::Display for ArrayError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ArrayError::ShapeMismatch { shape, len } => write!(
                f,
                "invalid shape {:?} for buffer of length {}",
                shape, len
            ),
            ArrayError::ShapeOverflow { shape } => {
                write!(f, "element count of shape {:?} overflows usize", shape)
            }
            ArrayError::RankMismatch { expected, found } => write!(
                f,
                "expected an index of rank {}, found rank {}",
                expected, found
            ),
            ArrayError::IndexOutOfBounds { index, shape } => {
                write!(f, "index {:?} is out of bounds for shape {:?}", index, shape)
            }
            ArrayError::LengthMismatch { left, right } => write!(
                f,
                "operands must have equal length, got {} and {}",
                left, right
            ),
            ArrayError::InvalidRange { low, high } => {
                write!(f, "invalid sampling range [{}, {})", low, high)
            }
        }
    }
}

impl Error for ArrayError {}
