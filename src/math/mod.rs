//! Owned, contiguous array types.
//!
//! `DenseArray` stores any number of dimensions in one row-major buffer and
//! validates its shape on construction. `Vector` is the one dimensional
//! companion with a few numeric helpers. Both release their storage when they
//! go out of scope.
pub mod dense;
pub mod shape;
pub mod vector;

pub use dense::DenseArray;
pub use shape::Shape;
pub use vector::Vector;
