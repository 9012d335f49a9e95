//! Reductions over array contents.
//!
//! All reducers accumulate as `f32` regardless of the element kind, matching
//! the element-to-float widening in [`crate::dtype::ScalarValue::to_f32`].

use std::ops::Range;

use crate::array::Array;
use crate::error::{ArrayError, Result};

impl Array {
    /// Sums every element as `f32`. An unallocated or empty array sums to 0.
    pub fn sum(&self) -> f32 {
        if !self.is_allocated() {
            return 0.0;
        }
        (0..self.numel())
            .map(|flat| {
                // allocation and range were checked above
                self.get_flat(flat).map_or(0.0, |v| v.to_f32())
            })
            .sum()
    }

    /// Sums the elements in a flat row-major position range.
    ///
    /// This is the bounded-range variant of [`Array::sum`]; the row and
    /// column reducers are built on it.
    pub fn sum_range(&self, range: Range<usize>) -> Result<f32> {
        if !self.is_allocated() {
            return Err(ArrayError::NotAllocated);
        }
        if range.end > self.numel() {
            return Err(ArrayError::IndexOutOfBounds {
                index: vec![range.end],
                shape: self.shape().to_vec(),
            });
        }
        let mut sum = 0.0;
        for flat in range {
            sum += self.get_flat(flat)?.to_f32();
        }
        Ok(sum)
    }

    /// Sums one row of a rank-2 array.
    pub fn sum_row(&self, row: usize) -> Result<f32> {
        let (rows, cols) = self.rank2_dims()?;
        if row >= rows {
            return Err(ArrayError::IndexOutOfBounds {
                index: vec![row],
                shape: self.shape().to_vec(),
            });
        }
        self.sum_range(row * cols..(row + 1) * cols)
    }

    /// Sums one column of a rank-2 array.
    pub fn sum_column(&self, col: usize) -> Result<f32> {
        let (rows, cols) = self.rank2_dims()?;
        if col >= cols {
            return Err(ArrayError::IndexOutOfBounds {
                index: vec![col],
                shape: self.shape().to_vec(),
            });
        }
        let mut sum = 0.0;
        for row in 0..rows {
            let flat = self.shape_model().offset_of(&[row, col])?;
            sum += self.get_flat(flat)?.to_f32();
        }
        Ok(sum)
    }

    fn rank2_dims(&self) -> Result<(usize, usize)> {
        if !self.is_allocated() {
            return Err(ArrayError::NotAllocated);
        }
        if self.ndim() != 2 {
            return Err(ArrayError::DimensionMismatch {
                expected: 2,
                actual: self.ndim(),
            });
        }
        let shape = self.shape_model();
        Ok((shape.dim(0), shape.dim(1)))
    }
}
