use std::fmt;
use std::ops::{Index, IndexMut};
use std::slice::{Iter, IterMut};

use ndarray::{ArrayD, IxDyn};
use num_traits::Zero;
use rand::Rng;
use serde::{Deserialize, Deserializer, Serialize};

use crate::config::PrintConfig;
use crate::error::ArrayError;
use crate::math::shape::Shape;
use crate::report::print::write_array;

/// An N-dimensional array owning a single row-major buffer.
///
/// The buffer length always equals the element count of the shape. The rank 0
/// array is the empty array: no dimensions and no storage.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct DenseArray<T = f64> {
    shape: Shape,
    data: Vec<T>,
}

impl<T> DenseArray<T> {
    /// Rank 0 array with no storage.
    pub fn empty() -> Self {
        Self {
            shape: Shape::empty(),
            data: Vec::new(),
        }
    }

    /// Take ownership of `data` as the buffer for `shape`.
    pub fn from_shape_vec(shape: Vec<usize>, data: Vec<T>) -> Result<Self, ArrayError> {
        let shape = Shape::from(shape);
        let expected = check_len(&shape, data.len())?;
        log::trace!("allocated {} elements for shape {:?}", expected, shape.dims());
        Ok(Self { shape, data })
    }

    pub fn rank(&self) -> usize {
        self.shape.rank()
    }

    pub fn shape(&self) -> &[usize] {
        self.shape.dims()
    }

    pub fn strides(&self) -> Vec<usize> {
        self.shape.strides()
    }

    /// Number of stored elements.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.data
    }

    pub fn iter(&self) -> Iter<'_, T> {
        self.data.iter()
    }

    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        self.data.iter_mut()
    }

    pub fn get(&self, index: &[usize]) -> Result<&T, ArrayError> {
        let offset = self.shape.offset(index)?;
        Ok(&self.data[offset])
    }

    pub fn get_mut(&mut self, index: &[usize]) -> Result<&mut T, ArrayError> {
        let offset = self.shape.offset(index)?;
        Ok(&mut self.data[offset])
    }

    /// Reinterpret the buffer under a new shape with the same element count.
    pub fn reshape(self, shape: Vec<usize>) -> Result<Self, ArrayError> {
        Self::from_shape_vec(shape, self.data)
    }

    pub fn mapv<U, F>(&self, mut f: F) -> DenseArray<U>
    where
        F: FnMut(&T) -> U,
    {
        DenseArray {
            shape: self.shape.clone(),
            data: self.data.iter().map(|v| f(v)).collect(),
        }
    }

    /// Drop the storage now and return to the empty state.
    ///
    /// Releasing an empty array does nothing, so repeated calls are harmless.
    pub fn release(&mut self) {
        if self.shape.rank() == 0 && self.data.capacity() == 0 {
            return;
        }
        log::trace!(
            "releasing {} elements of shape {:?}",
            self.data.len(),
            self.shape.dims()
        );
        self.data = Vec::new();
        self.shape = Shape::empty();
    }

    pub fn into_vec(self) -> Vec<T> {
        self.data
    }

    fn offset_or_panic(&self, index: &[usize]) -> usize {
        match self.shape.offset(index) {
            Ok(offset) => offset,
            Err(err) => panic!("{}", err),
        }
    }
}

impl<T: Clone> DenseArray<T> {
    /// Copy `values` into a new array of the given shape.
    pub fn new(shape: &[usize], values: &[T]) -> Result<Self, ArrayError> {
        // Check before copying so a bad call never allocates.
        let shape = Shape::from_slice(shape);
        let expected = check_len(&shape, values.len())?;
        log::trace!("allocated {} elements for shape {:?}", expected, shape.dims());
        Ok(Self {
            shape,
            data: values.to_vec(),
        })
    }

    pub fn from_elem(shape: &[usize], value: T) -> Result<Self, ArrayError> {
        let len = Shape::from_slice(shape).element_count()?;
        Self::from_shape_vec(shape.to_vec(), vec![value; len])
    }

    /// Convert into an `ndarray` dynamic-rank array.
    ///
    /// The empty array becomes a one dimensional array of length zero.
    pub fn to_ndarray(&self) -> Result<ArrayD<T>, ArrayError> {
        let dims: &[usize] = if self.rank() == 0 { &[0] } else { self.shape() };
        ArrayD::from_shape_vec(IxDyn(dims), self.data.clone()).map_err(|_| {
            ArrayError::ShapeMismatch {
                shape: dims.to_vec(),
                len: self.data.len(),
            }
        })
    }

    /// Copy an `ndarray` array in logical (row-major) order.
    ///
    /// A zero dimensional `ndarray` scalar becomes an array of shape `[1]`.
    pub fn from_ndarray(array: &ArrayD<T>) -> Result<Self, ArrayError> {
        let shape = if array.ndim() == 0 {
            vec![1]
        } else {
            array.shape().to_vec()
        };
        let data: Vec<T> = array.iter().cloned().collect();
        Self::from_shape_vec(shape, data)
    }
}

impl<T: Clone + Zero> DenseArray<T> {
    pub fn zeros(shape: &[usize]) -> Result<Self, ArrayError> {
        Self::from_elem(shape, T::zero())
    }
}

impl DenseArray<f64> {
    /// Fill a new array with samples drawn uniformly from `[low, high)`.
    pub fn random_uniform<R: Rng + ?Sized>(
        shape: &[usize],
        low: f64,
        high: f64,
        rng: &mut R,
    ) -> Result<Self, ArrayError> {
        // A finite pair can still span more than f64::MAX, which rand rejects.
        if !(low < high && (high - low).is_finite()) {
            return Err(ArrayError::InvalidRange { low, high });
        }
        let len = Shape::from_slice(shape).element_count()?;
        let data = (0..len).map(|_| rng.gen_range(low..high)).collect();
        Self::from_shape_vec(shape.to_vec(), data)
    }
}

/// Element count of `shape`, or `ShapeMismatch` if a buffer of `len` cannot fill it.
fn check_len(shape: &Shape, len: usize) -> Result<usize, ArrayError> {
    let expected = shape.element_count()?;
    if len != expected {
        log::debug!(
            "rejecting buffer of length {} for shape {:?} ({} elements)",
            len,
            shape.dims(),
            expected
        );
        return Err(ArrayError::ShapeMismatch {
            shape: shape.dims().to_vec(),
            len,
        });
    }
    Ok(expected)
}

impl<T> Default for DenseArray<T> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<'a, T> Index<&'a [usize]> for DenseArray<T> {
    type Output = T;

    fn index(&self, index: &'a [usize]) -> &Self::Output {
        let offset = self.offset_or_panic(index);
        &self.data[offset]
    }
}

impl<'a, T> IndexMut<&'a [usize]> for DenseArray<T> {
    fn index_mut(&mut self, index: &'a [usize]) -> &mut Self::Output {
        let offset = self.offset_or_panic(index);
        &mut self.data[offset]
    }
}

impl<T, const N: usize> Index<[usize; N]> for DenseArray<T> {
    type Output = T;

    fn index(&self, index: [usize; N]) -> &Self::Output {
        let offset = self.offset_or_panic(&index);
        &self.data[offset]
    }
}

impl<T, const N: usize> IndexMut<[usize; N]> for DenseArray<T> {
    fn index_mut(&mut self, index: [usize; N]) -> &mut Self::Output {
        let offset = self.offset_or_panic(&index);
        &mut self.data[offset]
    }
}

impl<'a, T> IntoIterator for &'a DenseArray<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.iter()
    }
}

#[derive(Deserialize)]
struct RawDenseArray<T> {
    shape: Vec<usize>,
    data: Vec<T>,
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for DenseArray<T> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = RawDenseArray::<T>::deserialize(deserializer)?;
        DenseArray::from_shape_vec(raw.shape, raw.data).map_err(serde::de::Error::custom)
    }
}

impl<T: fmt::Display + fmt::LowerExp> fmt::Display for DenseArray<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_array(f, self, &PrintConfig::default())
    }
}
