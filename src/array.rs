//! The `Array` type: allocation, element access, fill.
//!
//! An array owns a flat byte buffer addressed through its shape in row-major
//! order. The buffer is either allocated or absent; `release` drops it and
//! the array can later be re-initialized with a different shape or kind.

use log::{debug, trace};

use crate::dtype::{DType, Scalar, ScalarValue};
use crate::error::{ArrayError, Result};
use crate::shape::Shape;

/// An N-dimensional typed array backed by a flat byte buffer.
///
/// Elements are stored contiguously in row-major order. The element kind is
/// fixed at construction; values written with a different kind are cast.
///
/// # Example
/// ```
/// use ndarr::{Array, DType};
///
/// let mut arr = Array::new([3, 3], DType::I32).unwrap();
/// arr.fill(10);
/// arr.set(&[2, 1], 20).unwrap();
/// assert_eq!(arr.get(&[2, 1]).unwrap().to_f32(), 20.0);
/// assert_eq!(arr.sum(), 100.0);
/// ```
pub struct Array {
    shape: Shape,
    dtype: DType,
    data: Option<Vec<u8>>,
}

impl Array {
    /// Allocates a zero-initialized array of the given shape and kind.
    ///
    /// A shape with a zero axis is valid and allocates a zero-length buffer.
    /// Fails with [`ArrayError::InvalidShape`] on a zero-rank shape and with
    /// [`ArrayError::AllocationFailure`] if the element count or byte size
    /// overflows.
    pub fn new(shape: impl Into<Shape>, dtype: DType) -> Result<Self> {
        let shape = shape.into();
        if shape.rank() == 0 {
            return Err(ArrayError::InvalidShape {
                shape: shape.dims().to_vec(),
                reason: "shape must have at least one axis",
            });
        }
        let numel = shape
            .checked_numel()
            .and_then(|n| n.checked_mul(dtype.size_bytes()).map(|_| n))
            .ok_or_else(|| ArrayError::AllocationFailure {
                shape: shape.dims().to_vec(),
            })?;
        debug!(
            "allocating {} x {} ({} bytes) for shape {}",
            numel,
            dtype,
            numel * dtype.size_bytes(),
            shape
        );
        Ok(Array {
            data: Some(vec![0u8; numel * dtype.size_bytes()]),
            shape,
            dtype,
        })
    }

    /// Builds an array from host values laid out in row-major order.
    ///
    /// The value count must equal the shape's element count.
    pub fn from_vec<T: Scalar>(shape: impl Into<Shape>, values: &[T]) -> Result<Self> {
        let mut arr = Array::new(shape, T::DTYPE)?;
        if values.len() != arr.numel() {
            return Err(ArrayError::DimensionMismatch {
                expected: arr.numel(),
                actual: values.len(),
            });
        }
        // new() always allocates, so the buffer is present here
        let width = T::DTYPE.size_bytes();
        if let Some(data) = arr.data.as_mut() {
            for (chunk, value) in data.chunks_exact_mut(width).zip(values.iter()) {
                chunk.copy_from_slice(&value.to_bytes());
            }
        }
        Ok(arr)
    }

    /// Returns the dimensions as a slice.
    pub fn shape(&self) -> &[usize] {
        self.shape.dims()
    }

    /// Returns the shape model. Engine-internal; the public surface exposes
    /// dimensions as a plain slice.
    pub(crate) fn shape_model(&self) -> &Shape {
        &self.shape
    }

    /// Returns the number of dimensions (rank).
    pub fn ndim(&self) -> usize {
        self.shape.rank()
    }

    /// Returns the total number of elements.
    pub fn numel(&self) -> usize {
        self.shape.numel()
    }

    /// Returns the buffer size in bytes, or 0 when unallocated.
    pub fn size_bytes(&self) -> usize {
        self.data.as_ref().map_or(0, |d| d.len())
    }

    /// Returns the element type tag.
    pub fn dtype(&self) -> DType {
        self.dtype
    }

    /// Returns true if the buffer is currently allocated.
    pub fn is_allocated(&self) -> bool {
        self.data.is_some()
    }

    /// Returns true if the array holds no elements.
    pub fn is_empty(&self) -> bool {
        self.numel() == 0
    }

    /// Drops the buffer. Idempotent; element access afterwards follows the
    /// unallocated contract (`get` fails, `set`/`fill` are no-ops) until the
    /// array is re-initialized.
    pub fn release(&mut self) {
        if self.data.take().is_some() {
            trace!("released buffer for shape {}", self.shape);
        }
    }

    /// Releases the current buffer and allocates a fresh one, possibly with a
    /// different shape and kind. On failure the array keeps its old state.
    pub fn reinit(&mut self, shape: impl Into<Shape>, dtype: DType) -> Result<()> {
        *self = Array::new(shape, dtype)?;
        Ok(())
    }

    /// Reads the element at the given multi-dimensional index.
    ///
    /// Fails with [`ArrayError::NotAllocated`] on a released buffer and
    /// [`ArrayError::IndexOutOfBounds`] on a bad index.
    pub fn get(&self, index: &[usize]) -> Result<ScalarValue> {
        let data = self.data.as_ref().ok_or(ArrayError::NotAllocated)?;
        let offset = self.shape.offset_of(index)? * self.dtype.size_bytes();
        Ok(ScalarValue::from_bytes(self.dtype, &data[offset..]))
    }

    /// Writes one element at the given multi-dimensional index, casting the
    /// value to the array's kind.
    ///
    /// Writing to an unallocated buffer is a silent no-op; a bad index on an
    /// allocated buffer is [`ArrayError::IndexOutOfBounds`].
    pub fn set(&mut self, index: &[usize], value: impl Into<ScalarValue>) -> Result<()> {
        let offset = match &self.data {
            Some(_) => self.shape.offset_of(index)? * self.dtype.size_bytes(),
            None => return Ok(()),
        };
        let bytes = value.into().cast(self.dtype).to_bytes();
        if let Some(data) = self.data.as_mut() {
            data[offset..offset + bytes.len()].copy_from_slice(&bytes);
        }
        Ok(())
    }

    /// Writes `value` into every element. No-op on an unallocated buffer.
    pub fn fill(&mut self, value: impl Into<ScalarValue>) {
        let bytes = value.into().cast(self.dtype).to_bytes();
        if let Some(data) = self.data.as_mut() {
            for chunk in data.chunks_exact_mut(bytes.len()) {
                chunk.copy_from_slice(&bytes);
            }
        }
    }

    /// Copies the contents out as a host vector of the matching type.
    pub fn to_vec<T: Scalar>(&self) -> Result<Vec<T>> {
        if T::DTYPE != self.dtype {
            return Err(ArrayError::DTypeMismatch {
                expected: self.dtype,
                actual: T::DTYPE,
            });
        }
        let data = self.data.as_ref().ok_or(ArrayError::NotAllocated)?;
        Ok(data
            .chunks_exact(self.dtype.size_bytes())
            .map(T::from_bytes)
            .collect())
    }

    /// Reads the element at a flat row-major position. Engine-internal; the
    /// caller has already validated allocation and bounds.
    pub(crate) fn get_flat(&self, flat: usize) -> Result<ScalarValue> {
        let data = self.data.as_ref().ok_or(ArrayError::NotAllocated)?;
        let offset = flat * self.dtype.size_bytes();
        Ok(ScalarValue::from_bytes(self.dtype, &data[offset..]))
    }

    /// Writes the element at a flat row-major position. Engine-internal.
    pub(crate) fn set_flat(&mut self, flat: usize, value: ScalarValue) -> Result<()> {
        let dtype = self.dtype;
        let data = self.data.as_mut().ok_or(ArrayError::NotAllocated)?;
        let offset = flat * dtype.size_bytes();
        let bytes = value.cast(dtype).to_bytes();
        data[offset..offset + bytes.len()].copy_from_slice(&bytes);
        Ok(())
    }
}

impl std::fmt::Debug for Array {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Array")
            .field("shape", &self.shape)
            .field("dtype", &self.dtype)
            .field("allocated", &self.is_allocated())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_zero_initialized() {
        let arr = Array::new([2, 3], DType::I32).unwrap();
        assert_eq!(arr.shape(), &[2, 3]);
        assert_eq!(arr.numel(), 6);
        assert_eq!(arr.size_bytes(), 24);
        for i in 0..2 {
            for j in 0..3 {
                assert_eq!(arr.get(&[i, j]).unwrap(), ScalarValue::I32(0));
            }
        }
    }

    #[test]
    fn test_zero_rank_rejected() {
        let empty: Vec<usize> = vec![];
        assert!(matches!(
            Array::new(empty, DType::F32),
            Err(ArrayError::InvalidShape { .. })
        ));
    }

    #[test]
    fn test_zero_axis_allowed() {
        let arr = Array::new([0, 4], DType::F32).unwrap();
        assert!(arr.is_allocated());
        assert!(arr.is_empty());
        assert_eq!(arr.size_bytes(), 0);
    }

    #[test]
    fn test_overflow_rejected() {
        assert!(matches!(
            Array::new([usize::MAX, 2], DType::I32),
            Err(ArrayError::AllocationFailure { .. })
        ));
        // element count fits but byte size would overflow
        assert!(matches!(
            Array::new([usize::MAX / 2], DType::I32),
            Err(ArrayError::AllocationFailure { .. })
        ));
    }

    #[test]
    fn test_set_get_roundtrip() {
        let mut arr = Array::new([3, 3, 3], DType::I32).unwrap();
        arr.set(&[2, 1, 1], 20).unwrap();
        assert_eq!(arr.get(&[2, 1, 1]).unwrap(), ScalarValue::I32(20));
        assert_eq!(arr.get(&[2, 1, 0]).unwrap(), ScalarValue::I32(0));
    }

    #[test]
    fn test_set_casts_to_dtype() {
        let mut arr = Array::new([2], DType::F32).unwrap();
        arr.set(&[0], 7).unwrap();
        assert_eq!(arr.get(&[0]).unwrap(), ScalarValue::F32(7.0));
    }

    #[test]
    fn test_out_of_bounds() {
        let mut arr = Array::new([2, 2], DType::I32).unwrap();
        assert!(matches!(
            arr.get(&[2, 0]),
            Err(ArrayError::IndexOutOfBounds { .. })
        ));
        assert!(matches!(
            arr.set(&[0, 5], 1),
            Err(ArrayError::IndexOutOfBounds { .. })
        ));
    }

    #[test]
    fn test_release_contract() {
        let mut arr = Array::new([2, 2], DType::I32).unwrap();
        arr.release();
        arr.release(); // idempotent
        assert!(!arr.is_allocated());
        assert!(matches!(arr.get(&[0, 0]), Err(ArrayError::NotAllocated)));
        // writes on a released buffer are silent no-ops
        assert!(arr.set(&[0, 0], 1).is_ok());
        arr.fill(5);
        assert!(!arr.is_allocated());
    }

    #[test]
    fn test_reinit_after_release() {
        let mut arr = Array::new([2, 2], DType::I32).unwrap();
        arr.fill(9);
        arr.release();
        arr.reinit([4], DType::F32).unwrap();
        assert_eq!(arr.shape(), &[4]);
        assert_eq!(arr.dtype(), DType::F32);
        assert_eq!(arr.get(&[3]).unwrap(), ScalarValue::F32(0.0));
    }

    #[test]
    fn test_from_vec_to_vec() {
        let arr = Array::from_vec([2, 2], &[1i32, 2, 3, 4]).unwrap();
        assert_eq!(arr.get(&[1, 0]).unwrap(), ScalarValue::I32(3));
        assert_eq!(arr.to_vec::<i32>().unwrap(), vec![1, 2, 3, 4]);
        assert!(matches!(
            arr.to_vec::<f32>(),
            Err(ArrayError::DTypeMismatch { .. })
        ));
    }

    #[test]
    fn test_from_vec_length_mismatch() {
        assert!(matches!(
            Array::from_vec([2, 2], &[1i32, 2, 3]),
            Err(ArrayError::DimensionMismatch { .. })
        ));
    }

    #[test]
    fn test_element_width_follows_dtype() {
        for dtype in [DType::I32, DType::F32] {
            let arr = Array::new([2, 3], dtype).unwrap();
            assert_eq!(arr.size_bytes(), arr.numel() * dtype.size_bytes());
        }
        let arr = Array::from_vec([3], &[1i32, 2, 3]).unwrap();
        assert_eq!(arr.size_bytes(), 3 * DType::I32.size_bytes());
        assert_eq!(arr.to_vec::<i32>().unwrap().len(), arr.numel());
    }

    #[test]
    fn test_fill_idempotent() {
        let mut arr = Array::new([2, 3], DType::F32).unwrap();
        arr.fill(1.25f32);
        arr.fill(1.25f32);
        assert_eq!(arr.to_vec::<f32>().unwrap(), vec![1.25; 6]);
    }
}
