//! Axis-aligned sub-array extraction.

use log::debug;

use crate::array::Array;
use crate::error::{ArrayError, Result};
use crate::iter::{combination_count, JaggedIter};

impl Array {
    /// Extracts a sub-array by picking explicit positions per axis.
    ///
    /// `picks` holds, for each axis, the ordered list of source positions to
    /// take; the result shape is the list lengths. Picks need not be
    /// contiguous or sorted. The result is freshly allocated with the same
    /// element kind; the source is untouched.
    ///
    /// # Example
    /// ```
    /// use ndarr::{Array, DType};
    ///
    /// let mut arr = Array::new([3, 3], DType::I32).unwrap();
    /// arr.fill(10);
    /// let sub = arr.slice(&[vec![0, 1, 2], vec![0]]).unwrap();
    /// assert_eq!(sub.shape(), &[3, 1]);
    /// assert_eq!(sub.sum(), 30.0);
    /// ```
    pub fn slice(&self, picks: &[Vec<usize>]) -> Result<Array> {
        if !self.is_allocated() {
            return Err(ArrayError::NotAllocated);
        }
        if picks.len() != self.ndim() {
            return Err(ArrayError::DimensionMismatch {
                expected: self.ndim(),
                actual: picks.len(),
            });
        }
        for (axis, list) in picks.iter().enumerate() {
            if let Some(&bad) = list.iter().find(|&&p| p >= self.shape()[axis]) {
                let mut index = vec![0; self.ndim()];
                index[axis] = bad;
                return Err(ArrayError::IndexOutOfBounds {
                    index,
                    shape: self.shape().to_vec(),
                });
            }
        }

        let new_dims: Vec<usize> = picks.iter().map(|l| l.len()).collect();
        let total = combination_count(&new_dims)?;
        debug!("slicing {} elements into shape {:?}", total, new_dims);

        // The jagged enumeration yields source indices in the destination's
        // row-major order, so the destination is written sequentially.
        let mut dest = Array::new(new_dims, self.dtype())?;
        for (cursor, src_idx) in JaggedIter::new(picks).enumerate() {
            dest.set_flat(cursor, self.get(&src_idx)?)?;
        }
        Ok(dest)
    }
}
