//! Row filtering with ANY/ALL aggregation.
//!
//! A filter walks the full index space of an array in row-major order,
//! evaluates a predicate on selected last-axis positions, and keeps or
//! discards whole rows (all elements sharing an axis-0 index). The result is
//! a freshly allocated array; the source is never modified.

use log::debug;

use crate::array::Array;
use crate::dtype::ScalarValue;
use crate::error::{ArrayError, Result};
use crate::iter::IndexIter;

/// Policy combining per-position predicate results into one row decision.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterMode {
    /// Keep the row if the predicate holds for at least one evaluated position.
    Any,
    /// Keep the row only if the predicate holds for every evaluated position.
    All,
}

impl FilterMode {
    /// Aggregates a row's tally. An empty tally (no position evaluated) is
    /// vacuously true under `All` and false under `Any`.
    fn keep(&self, tally: &[bool]) -> bool {
        match self {
            FilterMode::Any => tally.iter().any(|&b| b),
            FilterMode::All => tally.iter().all(|&b| b),
        }
    }
}

/// One filter to apply in [`Array::filter_many`].
pub struct FilterSpec {
    /// Predicate over a single element value.
    pub predicate: Box<dyn Fn(ScalarValue) -> bool>,
    /// Last-axis positions to evaluate; `None` evaluates all of them.
    pub positions: Option<Vec<usize>>,
    /// ANY/ALL aggregation policy.
    pub mode: FilterMode,
}

impl FilterSpec {
    pub fn new<F>(predicate: F, positions: Option<Vec<usize>>, mode: FilterMode) -> Self
    where
        F: Fn(ScalarValue) -> bool + 'static,
    {
        FilterSpec {
            predicate: Box::new(predicate),
            positions,
            mode,
        }
    }
}

impl Array {
    /// Keeps the rows whose selected last-axis elements satisfy `predicate`
    /// under the given aggregation, returning them as a new array.
    ///
    /// `positions` restricts evaluation to a subset of last-axis positions;
    /// it is normalized (sorted, de-duplicated) and every member must be
    /// within the last axis extent. Rows where no position is evaluated are
    /// kept under [`FilterMode::All`] and dropped under [`FilterMode::Any`].
    ///
    /// If no row is kept the result has every axis set to 0, the canonical
    /// empty sentinel; callers should treat it as "no match", not an error.
    ///
    /// # Example
    /// ```
    /// use ndarr::{Array, FilterMode};
    ///
    /// let arr = Array::from_vec([3, 2], &[43i32, 8, 25, 26, 13, 44]).unwrap();
    /// // keep rows whose second column exceeds 10
    /// let kept = arr
    ///     .filter(|v| v.to_f32() > 10.0, Some(&[1]), FilterMode::Any)
    ///     .unwrap();
    /// assert_eq!(kept.shape(), &[2, 2]);
    /// assert_eq!(kept.to_vec::<i32>().unwrap(), vec![25, 26, 13, 44]);
    /// ```
    pub fn filter<F>(
        &self,
        predicate: F,
        positions: Option<&[usize]>,
        mode: FilterMode,
    ) -> Result<Array>
    where
        F: Fn(ScalarValue) -> bool,
    {
        if !self.is_allocated() {
            return Err(ArrayError::NotAllocated);
        }
        let dims = self.shape().to_vec();
        let rank = dims.len();
        let last = rank - 1;
        if dims[0] == 0 {
            return Err(ArrayError::InvalidShape {
                shape: dims,
                reason: "filter requires a non-empty row axis",
            });
        }

        // Normalize the selection so membership is a binary search.
        let selected = match positions {
            Some(raw) => {
                let mut sel = raw.to_vec();
                sel.sort_unstable();
                sel.dedup();
                if let Some(&bad) = sel.iter().find(|&&p| p >= dims[last]) {
                    return Err(ArrayError::IndexOutOfBounds {
                        index: vec![bad],
                        shape: dims,
                    });
                }
                Some(sel)
            }
            None => None,
        };

        // Pass 1: one keep/discard decision per row. The tally grows by one
        // slot per last-axis position actually visited within the row.
        let mut row_kept: Vec<bool> = Vec::with_capacity(dims[0]);
        let mut tally: Vec<bool> = Vec::new();
        let mut current_row = 0usize;
        for idx in IndexIter::new(&dims) {
            if idx[0] != current_row {
                row_kept.push(mode.keep(&tally));
                tally.clear();
                current_row = idx[0];
            }
            if let Some(sel) = &selected {
                if sel.binary_search(&idx[last]).is_err() {
                    continue;
                }
            }
            tally.push(predicate(self.get(&idx)?));
        }
        // Finalize the last row; with a zero-size trailing axis the scan
        // visits nothing and every row decision is the vacuous one.
        while row_kept.len() < dims[0] {
            row_kept.push(mode.keep(&tally));
            tally.clear();
        }

        let kept = row_kept.iter().filter(|&&k| k).count();
        debug!("filter kept {}/{} rows", kept, dims[0]);
        if kept == 0 {
            return Array::new(vec![0; rank], self.dtype());
        }

        // Pass 2: re-enumerate the source and copy kept rows. Source order
        // and destination layout are both row-major, so the destination
        // advances as a flat cursor.
        let mut new_dims = dims.clone();
        new_dims[0] = kept;
        let mut dest = Array::new(new_dims, self.dtype())?;
        let mut cursor = 0usize;
        for idx in IndexIter::new(&dims) {
            if row_kept[idx[0]] {
                dest.set_flat(cursor, self.get(&idx)?)?;
                cursor += 1;
            }
        }
        Ok(dest)
    }

    /// Applies several independent filters to this array, each starting from
    /// the original source and producing its own result array.
    pub fn filter_many(&self, specs: &[FilterSpec]) -> Result<Vec<Array>> {
        specs
            .iter()
            .map(|spec| self.filter(&*spec.predicate, spec.positions.as_deref(), spec.mode))
            .collect()
    }
}
