//! Error types for array operations.

use crate::dtype::DType;
use thiserror::Error;

/// Array operation error.
#[derive(Debug, Error)]
pub enum ArrayError {
    /// Shape rejected at construction or by an engine precondition.
    #[error("invalid shape {shape:?}: {reason}")]
    InvalidShape {
        shape: Vec<usize>,
        reason: &'static str,
    },

    /// An index component is not strictly below its axis extent.
    #[error("index {index:?} out of bounds for shape {shape:?}")]
    IndexOutOfBounds { index: Vec<usize>, shape: Vec<usize> },

    /// Element-count or byte-size product overflowed.
    #[error("allocation failure: element count overflows for shape {shape:?}")]
    AllocationFailure { shape: Vec<usize> },

    /// Read-type access to a released or never-initialized buffer.
    #[error("array is not allocated")]
    NotAllocated,

    /// Wrong number of axes supplied to an operation.
    #[error("dimension mismatch: expected {expected}, got {actual}")]
    DimensionMismatch { expected: usize, actual: usize },

    /// Host import/export type does not match the array's element kind.
    #[error("dtype mismatch: expected {expected}, got {actual}")]
    DTypeMismatch { expected: DType, actual: DType },
}

pub type Result<T> = std::result::Result<T, ArrayError>;
