//! Data type definitions for array elements.
//!
//! Arrays carry a runtime [`DType`] tag and store elements as raw bytes;
//! [`ScalarValue`] is the dynamically typed view of a single element and
//! [`Scalar`] is the trait for the concrete Rust types that can back it.

use std::fmt;

/// Element type tag for arrays.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DType {
    /// 32-bit signed integer
    I32,
    /// 32-bit floating point
    F32,
}

impl DType {
    /// Returns the element width in bytes.
    pub fn size_bytes(&self) -> usize {
        match self {
            DType::I32 | DType::F32 => 4,
        }
    }

    /// Check if this is a floating point type
    pub fn is_float(&self) -> bool {
        matches!(self, DType::F32)
    }

    /// Check if this is an integer type
    pub fn is_integer(&self) -> bool {
        matches!(self, DType::I32)
    }
}

impl fmt::Display for DType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DType::I32 => write!(f, "i32"),
            DType::F32 => write!(f, "f32"),
        }
    }
}

/// A single element value tagged with its type.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ScalarValue {
    I32(i32),
    F32(f32),
}

impl ScalarValue {
    /// Returns the corresponding type tag.
    pub fn dtype(&self) -> DType {
        match self {
            ScalarValue::I32(_) => DType::I32,
            ScalarValue::F32(_) => DType::F32,
        }
    }

    /// Widens the value to f32, the accumulator type used by reductions.
    pub fn to_f32(&self) -> f32 {
        match self {
            ScalarValue::I32(v) => *v as f32,
            ScalarValue::F32(v) => *v,
        }
    }

    /// Converts the value to the given type tag, numerically.
    pub fn cast(self, dtype: DType) -> ScalarValue {
        match (self, dtype) {
            (v @ ScalarValue::I32(_), DType::I32) => v,
            (v @ ScalarValue::F32(_), DType::F32) => v,
            (ScalarValue::I32(v), DType::F32) => ScalarValue::F32(v as f32),
            (ScalarValue::F32(v), DType::I32) => ScalarValue::I32(v as i32),
        }
    }

    /// Encodes the element into its little-endian byte representation.
    pub(crate) fn to_bytes(self) -> [u8; 4] {
        match self {
            ScalarValue::I32(v) => v.to_le_bytes(),
            ScalarValue::F32(v) => v.to_le_bytes(),
        }
    }

    /// Decodes one element of the given type from the front of `bytes`.
    pub(crate) fn from_bytes(dtype: DType, bytes: &[u8]) -> ScalarValue {
        match dtype {
            DType::I32 => ScalarValue::I32(i32::from_bytes(bytes)),
            DType::F32 => ScalarValue::F32(f32::from_bytes(bytes)),
        }
    }
}

impl fmt::Display for ScalarValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScalarValue::I32(v) => write!(f, "{}", v),
            ScalarValue::F32(v) => write!(f, "{}", v),
        }
    }
}

impl From<i32> for ScalarValue {
    fn from(v: i32) -> Self {
        ScalarValue::I32(v)
    }
}

impl From<f32> for ScalarValue {
    fn from(v: f32) -> Self {
        ScalarValue::F32(v)
    }
}

/// Trait for concrete Rust types that can be stored as array elements.
pub trait Scalar: Copy + Send + Sync + 'static {
    /// The corresponding DType enum variant
    const DTYPE: DType;

    /// Decodes one value from the front of `bytes`.
    fn from_bytes(bytes: &[u8]) -> Self;

    /// Encodes the value into its little-endian byte representation.
    fn to_bytes(self) -> [u8; 4];

    /// Wraps the value in a [`ScalarValue`].
    fn to_value(self) -> ScalarValue;
}

impl Scalar for i32 {
    const DTYPE: DType = DType::I32;

    fn from_bytes(bytes: &[u8]) -> Self {
        let mut buf = [0u8; 4];
        buf.copy_from_slice(&bytes[..4]);
        i32::from_le_bytes(buf)
    }

    fn to_bytes(self) -> [u8; 4] {
        self.to_le_bytes()
    }

    fn to_value(self) -> ScalarValue {
        ScalarValue::I32(self)
    }
}

impl Scalar for f32 {
    const DTYPE: DType = DType::F32;

    fn from_bytes(bytes: &[u8]) -> Self {
        let mut buf = [0u8; 4];
        buf.copy_from_slice(&bytes[..4]);
        f32::from_le_bytes(buf)
    }

    fn to_bytes(self) -> [u8; 4] {
        self.to_le_bytes()
    }

    fn to_value(self) -> ScalarValue {
        ScalarValue::F32(self)
    }
}
