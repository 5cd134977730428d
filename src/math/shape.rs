use serde::{Deserialize, Serialize};

use crate::error::ArrayError;

/// Per-dimension sizes of a dense array.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Shape {
    dims: Vec<usize>,
}

impl Shape {
    pub fn new(dims: Vec<usize>) -> Self {
        Self { dims }
    }

    pub fn from_slice(dims: &[usize]) -> Self {
        Self {
            dims: dims.to_vec(),
        }
    }

    /// The rank 0 shape, which holds no elements.
    pub fn empty() -> Self {
        Self { dims: Vec::new() }
    }

    pub fn rank(&self) -> usize {
        self.dims.len()
    }

    pub fn dims(&self) -> &[usize] {
        &self.dims
    }

    /// Number of elements a buffer of this shape must hold.
    ///
    /// A rank 0 shape holds nothing, so this is 0 rather than the empty product.
    pub fn element_count(&self) -> Result<usize, ArrayError> {
        if self.dims.is_empty() {
            return Ok(0);
        }
        self.dims
            .iter()
            .try_fold(1usize, |acc, &dim| acc.checked_mul(dim))
            .ok_or_else(|| ArrayError::ShapeOverflow {
                shape: self.dims.clone(),
            })
    }

    /// Contiguous row-major strides, in elements.
    pub fn strides(&self) -> Vec<usize> {
        let n = self.dims.len();
        if n == 0 {
            return Vec::new();
        }
        let mut strides = vec![0usize; n];
        strides[n - 1] = 1;
        for i in (0..n - 1).rev() {
            strides[i] = strides[i + 1] * self.dims[i + 1];
        }
        strides
    }

    /// Flat buffer offset of a multi-index.
    pub fn offset(&self, index: &[usize]) -> Result<usize, ArrayError> {
        if index.len() != self.dims.len() {
            return Err(ArrayError::RankMismatch {
                expected: self.dims.len(),
                found: index.len(),
            });
        }
        if self.dims.is_empty() || index.iter().zip(&self.dims).any(|(i, d)| i >= d) {
            return Err(ArrayError::IndexOutOfBounds {
                index: index.to_vec(),
                shape: self.dims.clone(),
            });
        }
        Ok(index
            .iter()
            .zip(self.strides())
            .map(|(i, stride)| i * stride)
            .sum())
    }
}

impl From<Vec<usize>> for Shape {
    fn from(dims: Vec<usize>) -> Self {
        Shape::new(dims)
    }
}

impl std::ops::Index<usize> for Shape {
    type Output = usize;

    fn index(&self, axis: usize) -> &usize {
        &self.dims[axis]
    }
}
