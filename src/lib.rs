//! ndarr: a minimal N-dimensional typed array library.
//!
//! Arrays own a flat byte buffer addressed through a shape vector in
//! row-major order. On top of element access, fill and sum, the crate
//! provides two engines that materialize new arrays from a source:
//!
//! - **filter**: keep or discard whole rows (axis-0 groups) by evaluating a
//!   predicate over selected last-axis positions with ANY/ALL aggregation
//! - **slice**: extract an axis-aligned sub-array from explicit per-axis
//!   position lists
//!
//! # Modules
//!
//! - **dtype**: element kinds and scalar conversions
//! - **shape**: shape vectors and row-major offset computation
//! - **iter**: odometer-style index enumeration
//! - **array**: the [`Array`] type, allocation and element access
//! - **filter**: row filtering with ANY/ALL aggregation
//! - **slice**: sub-array extraction
//!
//! # Example
//!
//! ```
//! use ndarr::{Array, FilterMode};
//!
//! let arr = Array::from_vec([3, 2], &[43i32, 8, 25, 26, 13, 44]).unwrap();
//! let kept = arr
//!     .filter(|v| v.to_f32() > 10.0, Some(&[1]), FilterMode::Any)
//!     .unwrap();
//! assert_eq!(kept.shape(), &[2, 2]);
//! ```

// ============================================================================
// Core Modules
// ============================================================================

pub mod array;
pub mod dtype;
pub mod error;
pub mod filter;
pub mod iter;
pub mod shape;

mod display;
mod math;
mod slice;

// ============================================================================
// Re-exports
// ============================================================================

pub use array::Array;
pub use dtype::{DType, Scalar, ScalarValue};
pub use error::{ArrayError, Result};
pub use filter::{FilterMode, FilterSpec};
pub use iter::{IndexIter, JaggedIter};
pub use shape::Shape;

// ============================================================================
// Prelude
// ============================================================================

/// Prelude module with commonly used types
pub mod prelude {
    pub use crate::array::Array;
    pub use crate::dtype::{DType, Scalar, ScalarValue};
    pub use crate::error::{ArrayError, Result};
    pub use crate::filter::{FilterMode, FilterSpec};
    pub use crate::shape::Shape;
}
