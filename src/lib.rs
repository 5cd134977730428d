//! dense-array: an owned N-dimensional array with validated construction.
//!
//! The crate provides `DenseArray`, a shape plus a single row-major buffer
//! whose length is checked against the shape, a one dimensional `Vector`,
//! text rendering for both, and the logging setup used by the `dense-array`
//! binary.
pub mod config;
pub mod error;
pub mod math;
pub mod report;
pub mod utils;

pub use error::ArrayError;
pub use math::{DenseArray, Shape, Vector};
