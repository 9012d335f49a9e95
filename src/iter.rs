//! Odometer-style enumeration of multi-dimensional index spaces.
//!
//! [`IndexIter`] walks the Cartesian product of `[0, bounds[i])` in row-major
//! order (last axis increments fastest, carrying into earlier axes), the same
//! convention [`crate::shape::Shape::offset_of`] addresses by. [`JaggedIter`]
//! is the variant used by slicing: each axis visits an explicit list of
//! source positions instead of a dense range.

use crate::error::{ArrayError, Result};

/// Returns the number of index combinations over the given bounds.
///
/// Empty bounds count as zero combinations, matching [`IndexIter`]; shapes
/// always have rank >= 1 so the degenerate case is never reached through the
/// array API. Fails with [`ArrayError::AllocationFailure`] if the product
/// overflows, so callers can pre-size destinations safely.
pub fn combination_count(bounds: &[usize]) -> Result<usize> {
    if bounds.is_empty() {
        return Ok(0);
    }
    bounds
        .iter()
        .try_fold(1usize, |acc, &b| acc.checked_mul(b))
        .ok_or_else(|| ArrayError::AllocationFailure {
            shape: bounds.to_vec(),
        })
}

/// Iterator over every index vector in `[0, bounds[0]) x ... x [0, bounds[n-1])`.
///
/// Row-major order: `[0,0]`, `[0,1]`, ..., `[1,0]`, ... The iteration is
/// finite; any zero bound (or an empty bounds list) yields nothing.
pub struct IndexIter {
    bounds: Vec<usize>,
    current: Vec<usize>,
    done: bool,
}

impl IndexIter {
    pub fn new(bounds: &[usize]) -> Self {
        let done = bounds.is_empty() || bounds.iter().any(|&b| b == 0);
        IndexIter {
            bounds: bounds.to_vec(),
            current: vec![0; bounds.len()],
            done,
        }
    }

    /// Advances `current` by one in the last axis, carrying on overflow.
    /// Returns false once every axis has wrapped back to zero.
    fn advance(&mut self) -> bool {
        for i in (0..self.bounds.len()).rev() {
            self.current[i] += 1;
            if self.current[i] < self.bounds[i] {
                return true;
            }
            self.current[i] = 0;
        }
        false
    }
}

impl Iterator for IndexIter {
    type Item = Vec<usize>;

    fn next(&mut self) -> Option<Vec<usize>> {
        if self.done {
            return None;
        }
        let item = self.current.clone();
        if !self.advance() {
            self.done = true;
        }
        Some(item)
    }
}

/// Iterator over index combinations drawn from explicit per-axis lists.
///
/// For `lists = [[1, 2, 3], [2]]` the yielded source indices are `[1, 2]`,
/// `[2, 2]`, `[3, 2]`: position `d[i]` of the dense odometer is substituted
/// with `lists[i][d[i]]`. Yield order is row-major over the dense positions,
/// so a destination written sequentially ends up row-major as well.
pub struct JaggedIter {
    lists: Vec<Vec<usize>>,
    inner: IndexIter,
}

impl JaggedIter {
    pub fn new(lists: &[Vec<usize>]) -> Self {
        let bounds: Vec<usize> = lists.iter().map(|l| l.len()).collect();
        JaggedIter {
            lists: lists.to_vec(),
            inner: IndexIter::new(&bounds),
        }
    }
}

impl Iterator for JaggedIter {
    type Item = Vec<usize>;

    fn next(&mut self) -> Option<Vec<usize>> {
        let dense = self.inner.next()?;
        Some(
            dense
                .iter()
                .zip(self.lists.iter())
                .map(|(&d, list)| list[d])
                .collect(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_iter_order() {
        let all: Vec<_> = IndexIter::new(&[2, 3]).collect();
        assert_eq!(
            all,
            vec![
                vec![0, 0],
                vec![0, 1],
                vec![0, 2],
                vec![1, 0],
                vec![1, 1],
                vec![1, 2],
            ]
        );
    }

    #[test]
    fn test_index_iter_single_axis() {
        let all: Vec<_> = IndexIter::new(&[3]).collect();
        assert_eq!(all, vec![vec![0], vec![1], vec![2]]);
    }

    #[test]
    fn test_index_iter_zero_bound() {
        assert_eq!(IndexIter::new(&[2, 0, 3]).count(), 0);
        assert_eq!(IndexIter::new(&[]).count(), 0);
    }

    #[test]
    fn test_index_iter_restartable() {
        let first: Vec<_> = IndexIter::new(&[2, 2]).collect();
        let second: Vec<_> = IndexIter::new(&[2, 2]).collect();
        assert_eq!(first, second);
        assert_eq!(first.len(), 4);
    }

    #[test]
    fn test_jagged_iter() {
        let lists = vec![vec![1, 2, 3], vec![2]];
        let all: Vec<_> = JaggedIter::new(&lists).collect();
        assert_eq!(all, vec![vec![1, 2], vec![2, 2], vec![3, 2]]);
    }

    #[test]
    fn test_jagged_iter_empty_axis() {
        let lists = vec![vec![0, 1], vec![]];
        assert_eq!(JaggedIter::new(&lists).count(), 0);
    }

    #[test]
    fn test_combination_count() {
        assert_eq!(combination_count(&[2, 3, 4]).unwrap(), 24);
        assert_eq!(combination_count(&[2, 0]).unwrap(), 0);
        assert!(matches!(
            combination_count(&[usize::MAX, 2]),
            Err(ArrayError::AllocationFailure { .. })
        ));
    }

    #[test]
    fn test_count_matches_iteration() {
        for bounds in [vec![3, 2, 4], vec![2, 0], vec![1], vec![]] {
            assert_eq!(
                IndexIter::new(&bounds).count(),
                combination_count(&bounds).unwrap(),
                "bounds {:?}",
                bounds
            );
        }
    }
}
