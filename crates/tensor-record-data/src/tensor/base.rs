use std::io::{Read, Write};

use super::data::expected_bytes;
use super::{DType, Element, Shape, TensorData, TensorError};

/// A tensor handle.
///
/// Numeric tensors own their values as raw bytes in native byte order. Text tensors hold a
/// single string and are always scalars.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tensor {
    dtype: DType,
    shape: Shape,
    storage: Storage,
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Storage {
    Bytes(Vec<u8>),
    Text(String),
}

/// Borrowed view of the value of a [tensor](Tensor).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TensorValue<'a> {
    /// Raw bytes of a numeric tensor.
    Bytes(&'a [u8]),
    /// String of a text tensor.
    Text(&'a str),
}

impl Tensor {
    /// Creates a numeric tensor from its data.
    pub fn from_data(data: TensorData) -> Self {
        Self {
            dtype: data.dtype,
            shape: Shape::from(data.shape),
            storage: Storage::Bytes(data.bytes),
        }
    }

    /// Creates a numeric tensor from a vector of elements and a shape.
    pub fn from_elems<E: Element, S: Into<Shape>>(
        value: Vec<E>,
        shape: S,
    ) -> Result<Self, TensorError> {
        TensorData::new(value, shape).map(Self::from_data)
    }

    /// Creates a scalar text tensor.
    pub fn from_text<T: Into<String>>(text: T) -> Self {
        Self {
            dtype: DType::Text,
            shape: Shape::scalar(),
            storage: Storage::Text(text.into()),
        }
    }

    /// Reads the contents of a numeric tensor from the given reader.
    ///
    /// The reader is consumed until the end and must hold exactly
    /// `shape.num_elements() * dtype.size()` bytes.
    pub fn read_tensor<R: Read, S: Into<Shape>>(
        dtype: DType,
        shape: S,
        reader: &mut R,
    ) -> Result<Self, TensorError> {
        let shape = shape.into();
        let expected = expected_bytes(dtype, &shape)?;

        let mut bytes = Vec::new();
        reader.read_to_end(&mut bytes)?;

        if bytes.len() != expected {
            return Err(TensorError::ByteCountMismatch {
                dtype,
                shape: shape.dims,
                expected,
                found: bytes.len(),
            });
        }

        Ok(Self {
            dtype,
            shape,
            storage: Storage::Bytes(bytes),
        })
    }

    /// Writes the raw contents of a numeric tensor to the given writer.
    ///
    /// Returns the number of bytes written.
    pub fn write_contents_to<W: Write>(&self, writer: &mut W) -> Result<usize, TensorError> {
        match &self.storage {
            Storage::Bytes(bytes) => {
                writer.write_all(bytes)?;
                Ok(bytes.len())
            }
            Storage::Text(_) => Err(TensorError::TextContents),
        }
    }

    /// The data type of the tensor.
    pub fn dtype(&self) -> DType {
        self.dtype
    }

    /// The shape of the tensor.
    pub fn shape(&self) -> &Shape {
        &self.shape
    }

    /// Returns the number of elements of the tensor.
    pub fn num_elements(&self) -> usize {
        self.shape.num_elements()
    }

    /// Borrowed view of the tensor value.
    pub fn value(&self) -> TensorValue<'_> {
        match &self.storage {
            Storage::Bytes(bytes) => TensorValue::Bytes(bytes),
            Storage::Text(text) => TensorValue::Text(text),
        }
    }

    /// The string of a text tensor.
    pub fn text(&self) -> Result<&str, TensorError> {
        match &self.storage {
            Storage::Text(text) => Ok(text.as_str()),
            Storage::Bytes(_) => Err(TensorError::NotText(self.dtype)),
        }
    }

    /// Copies the values of a numeric tensor into a [`TensorData`].
    pub fn to_data(&self) -> Result<TensorData, TensorError> {
        match &self.storage {
            Storage::Bytes(bytes) => Ok(TensorData {
                bytes: bytes.clone(),
                shape: self.shape.to_vec(),
                dtype: self.dtype,
            }),
            Storage::Text(_) => Err(TensorError::TextContents),
        }
    }

    /// Returns the values of a numeric tensor as a vector of elements.
    pub fn to_vec<E: Element>(&self) -> Result<Vec<E>, TensorError> {
        self.to_data()?.to_vec()
    }
}

impl From<TensorData> for Tensor {
    fn from(data: TensorData) -> Self {
        Self::from_data(data)
    }
}
