use std::fmt;
use std::iter::FromIterator;
use std::ops::{Index, IndexMut};
use std::slice::{Iter, IterMut};

use num_traits::Zero;

use crate::error::ArrayError;
use crate::math::dense::DenseArray;

/// A vector with an arbitrary number of components.
#[derive(Clone, Debug, PartialEq)]
pub struct Vector<T = f64> {
    components: Vec<T>,
}

impl<T> Vector<T> {
    pub fn from_vec(components: Vec<T>) -> Self {
        Self { components }
    }

    pub fn len(&self) -> usize {
        self.components.len()
    }

    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }

    pub fn iter(&self) -> Iter<'_, T> {
        self.components.iter()
    }

    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        self.components.iter_mut()
    }

    pub fn as_slice(&self) -> &[T] {
        &self.components
    }

    pub fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.components.clone()
    }
}

impl<T: Clone> Vector<T> {
    /// Copy `components` into a new vector.
    pub fn from_slice(components: &[T]) -> Self {
        Self::from_vec(components.to_vec())
    }
}

impl<T: Clone + Zero> Vector<T> {
    pub fn zeros(len: usize) -> Self {
        Self::from_vec(vec![T::zero(); len])
    }
}

impl Vector<f64> {
    pub fn dot(&self, other: &Vector<f64>) -> Result<f64, ArrayError> {
        if self.len() != other.len() {
            return Err(ArrayError::LengthMismatch {
                left: self.len(),
                right: other.len(),
            });
        }
        Ok(self.iter().zip(other.iter()).map(|(a, b)| a * b).sum())
    }

    /// Euclidean length.
    pub fn norm(&self) -> f64 {
        self.iter().map(|v| v * v).sum::<f64>().sqrt()
    }

    pub fn mean(&self) -> Option<f64> {
        if self.is_empty() {
            None
        } else {
            Some(self.iter().sum::<f64>() / self.len() as f64)
        }
    }
}

impl<T> From<Vec<T>> for Vector<T> {
    fn from(value: Vec<T>) -> Self {
        Vector::from_vec(value)
    }
}

impl<T> From<Vector<T>> for Vec<T> {
    fn from(value: Vector<T>) -> Self {
        value.components
    }
}

impl<T> FromIterator<T> for Vector<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Vector::from_vec(iter.into_iter().collect())
    }
}

impl<T> From<Vector<T>> for DenseArray<T> {
    fn from(value: Vector<T>) -> Self {
        let len = value.len();
        match DenseArray::from_shape_vec(vec![len], value.components) {
            Ok(array) => array,
            // A rank 1 shape always holds exactly `len` elements.
            Err(err) => unreachable!("{}", err),
        }
    }
}

impl<T> TryFrom<DenseArray<T>> for Vector<T> {
    type Error = ArrayError;

    fn try_from(value: DenseArray<T>) -> Result<Self, Self::Error> {
        if value.rank() != 1 {
            return Err(ArrayError::RankMismatch {
                expected: 1,
                found: value.rank(),
            });
        }
        Ok(Vector::from_vec(value.into_vec()))
    }
}

impl<T> Index<usize> for Vector<T> {
    type Output = T;

    fn index(&self, index: usize) -> &Self::Output {
        &self.components[index]
    }
}

impl<T> IndexMut<usize> for Vector<T> {
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        &mut self.components[index]
    }
}

impl<T: fmt::Display> fmt::Display for Vector<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (idx, value) in self.components.iter().enumerate() {
            write!(f, "{}", value)?;
            if idx + 1 != self.components.len() {
                write!(f, ", ")?;
            }
        }
        write!(f, "]")
    }
}
