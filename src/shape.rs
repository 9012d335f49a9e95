//! Shape and row-major offset computation.

use std::fmt;

use crate::error::{ArrayError, Result};

/// Represents the shape (dimensions) of an array.
///
/// Axis 0 is the row axis for filtering purposes; the remaining axes are
/// flattened columns. The addressing convention is row-major: the last axis
/// varies fastest.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Shape(Vec<usize>);

impl Shape {
    /// Creates a new shape from dimensions.
    pub fn new(dims: impl Into<Vec<usize>>) -> Self {
        Shape(dims.into())
    }

    /// Returns the dimensions as a slice.
    pub fn dims(&self) -> &[usize] {
        &self.0
    }

    /// Returns the number of dimensions (rank).
    pub fn rank(&self) -> usize {
        self.0.len()
    }

    /// Returns the size of the i-th dimension.
    pub fn dim(&self, i: usize) -> usize {
        self.0[i]
    }

    /// Returns the total number of elements, or `None` on product overflow.
    ///
    /// A shape with any zero axis has zero elements; that is the canonical
    /// empty state, not an error.
    pub fn checked_numel(&self) -> Option<usize> {
        self.0
            .iter()
            .try_fold(1usize, |acc, &d| acc.checked_mul(d))
    }

    /// Returns the total number of elements.
    ///
    /// Only meaningful for shapes that already passed the overflow check at
    /// allocation time.
    pub fn numel(&self) -> usize {
        self.0.iter().product()
    }

    /// Returns strides for a contiguous row-major layout.
    pub fn strides(&self) -> Vec<usize> {
        if self.0.is_empty() {
            return vec![];
        }
        let mut strides = vec![1; self.rank()];
        for i in (0..self.rank() - 1).rev() {
            strides[i] = strides[i + 1] * self.0[i + 1];
        }
        strides
    }

    /// Computes the flat row-major offset of a multi-dimensional index.
    ///
    /// Folds over axes from first to last: `offset = offset * extent + index`,
    /// equivalent to the recursive definition but with no recursion depth.
    /// Fails with [`ArrayError::IndexOutOfBounds`] if the index has the wrong
    /// rank or any component is not strictly below its axis extent.
    pub fn offset_of(&self, index: &[usize]) -> Result<usize> {
        if index.len() != self.rank() {
            return Err(ArrayError::DimensionMismatch {
                expected: self.rank(),
                actual: index.len(),
            });
        }
        let mut offset = 0usize;
        for (&i, &extent) in index.iter().zip(self.0.iter()) {
            if i >= extent {
                return Err(ArrayError::IndexOutOfBounds {
                    index: index.to_vec(),
                    shape: self.0.clone(),
                });
            }
            offset = offset * extent + i;
        }
        Ok(offset)
    }

}

impl fmt::Debug for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Shape({:?})", self.0)
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(")?;
        for (i, d) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", d)?;
        }
        if self.0.len() == 1 {
            write!(f, ",")?;
        }
        write!(f, ")")
    }
}

impl From<Vec<usize>> for Shape {
    fn from(v: Vec<usize>) -> Self {
        Shape(v)
    }
}

impl From<&[usize]> for Shape {
    fn from(v: &[usize]) -> Self {
        Shape(v.to_vec())
    }
}

impl<const N: usize> From<[usize; N]> for Shape {
    fn from(v: [usize; N]) -> Self {
        Shape(v.to_vec())
    }
}
