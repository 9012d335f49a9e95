//! Row-grouped textual rendering of array contents.
//!
//! Elements print space-separated in row-major order with one newline per
//! completed axis, so a rank-3 array renders as blank-line-separated blocks
//! of rows.

use std::fmt;

use crate::array::Array;

impl fmt::Display for Array {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let data_present = self.is_allocated();
        if !data_present {
            return write!(f, "<unallocated array {:?}>", self.shape());
        }
        if self.is_empty() {
            return write!(f, "<empty array {:?}>", self.shape());
        }

        // strides[a] is the product of extents behind axis a; an element
        // position divisible by one marks a completed axis.
        let rank = self.ndim();
        let strides = self.shape_model().strides();

        for flat in 0..self.numel() {
            match self.get_flat(flat) {
                Ok(v) => write!(f, "{} ", v)?,
                Err(_) => return Err(fmt::Error),
            }
            // one newline per trailing axis that wrapped, skipping the final
            // full wrap of axis 0
            if flat + 1 < self.numel() {
                for a in 1..rank {
                    if (flat + 1) % strides[a - 1] == 0 {
                        writeln!(f)?;
                    }
                }
            }
        }
        Ok(())
    }
}
