use super::DType;

/// Error returned by the tensor runtime when building or reading a tensor.
#[derive(thiserror::Error, Debug)]
pub enum TensorError {
    /// The payload does not hold `shape.num_elements() * dtype.size()` bytes.
    #[error("Expected {expected} bytes for a {dtype} tensor of shape {shape:?}, found {found}")]
    ByteCountMismatch {
        /// Data type of the tensor.
        dtype: DType,
        /// Declared shape.
        shape: Vec<usize>,
        /// Number of bytes required by the shape.
        expected: usize,
        /// Number of bytes available.
        found: usize,
    },

    /// The number of elements does not match the shape.
    #[error("Shape {shape:?} holds {expected} elements, found {found}")]
    ShapeMismatch {
        /// Declared shape.
        shape: Vec<usize>,
        /// Number of elements required by the shape.
        expected: usize,
        /// Number of elements provided.
        found: usize,
    },

    /// The byte size of the tensor does not fit in memory.
    #[error("Size of a {dtype} tensor of shape {shape:?} overflows usize")]
    SizeOverflow {
        /// Data type of the tensor.
        dtype: DType,
        /// Declared shape.
        shape: Vec<usize>,
    },

    /// The requested element type differs from the tensor data type.
    #[error("Type mismatch: expected {expected}, found {found}")]
    DTypeMismatch {
        /// Requested data type.
        expected: DType,
        /// Actual data type.
        found: DType,
    },

    /// A dimension is negative.
    #[error("Invalid dimension {dim} at axis {axis}")]
    InvalidDimension {
        /// Axis of the dimension.
        axis: usize,
        /// Value of the dimension.
        dim: i64,
    },

    /// A dimension can't be represented as an `i64`.
    #[error("Dimension {dim} at axis {axis} does not fit in an i64")]
    DimensionOverflow {
        /// Axis of the dimension.
        axis: usize,
        /// Value of the dimension.
        dim: usize,
    },

    /// The payload holds a bit pattern that is not a valid element.
    #[error("Invalid bit pattern for a {0} element")]
    InvalidBitPattern(DType),

    /// Text tensors have no fixed-width byte layout.
    #[error("Text tensors have no raw byte contents")]
    TextContents,

    /// The tensor is not a text tensor.
    #[error("Tensor of type {0} is not a text tensor")]
    NotText(DType),

    /// IO error while streaming the tensor contents.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
