use core::fmt;
use std::borrow::Cow;

use serde::{
    Deserialize, Deserializer, Serialize, Serializer,
    de::{self, DeserializeSeed, SeqAccess, Visitor},
    ser::{self, SerializeTuple},
};
use tensor_record_data::{DType, Shape, Tensor, TensorError};

use super::Record;

/// This struct implements serde to serialize and deserialize a tensor as the sequence
/// `(dtype, shape, payload)`.
///
/// The shape is written as signed 64-bit dimensions. The payload is a byte blob for numeric
/// tensors and a string for text tensors; which one is expected is decided by the dtype alone.
#[derive(Debug, Clone)]
pub struct TensorSerde<'a> {
    tensor: Cow<'a, Tensor>,
}

impl<'a> TensorSerde<'a> {
    /// Wraps a borrowed tensor, used when encoding without taking ownership.
    pub fn borrowed(tensor: &'a Tensor) -> Self {
        Self {
            tensor: Cow::Borrowed(tensor),
        }
    }

    /// Returns the wrapped tensor.
    pub fn tensor(&self) -> &Tensor {
        &self.tensor
    }

    /// Returns the owned tensor, cloning it if it was borrowed.
    pub fn into_tensor(self) -> Tensor {
        self.tensor.into_owned()
    }
}

impl TensorSerde<'static> {
    /// Wraps an owned tensor.
    pub fn owned(tensor: Tensor) -> Self {
        Self {
            tensor: Cow::Owned(tensor),
        }
    }
}

/// Payload of a tensor record, selected by the dtype.
#[derive(Debug)]
enum Payload<'a> {
    Numeric(Cow<'a, [u8]>),
    Text(Cow<'a, str>),
}

impl<'a> Payload<'a> {
    fn read_from(tensor: &'a Tensor) -> Result<Self, TensorError> {
        if tensor.dtype().is_text() {
            return tensor.text().map(|text| Payload::Text(Cow::Borrowed(text)));
        }

        let mut bytes = Vec::new();
        tensor.write_contents_to(&mut bytes)?;

        Ok(Payload::Numeric(Cow::Owned(bytes)))
    }

    /// Builds the tensor from the payload.
    ///
    /// Text tensors are scalars, so the decoded shape is not applied to them.
    fn into_tensor(self, dtype: DType, shape: Shape) -> Result<Tensor, TensorError> {
        match self {
            Payload::Numeric(bytes) => {
                let mut reader: &[u8] = &bytes;
                Tensor::read_tensor(dtype, shape, &mut reader)
            }
            Payload::Text(text) => Ok(Tensor::from_text(text.into_owned())),
        }
    }
}

impl Serialize for Payload<'_> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Payload::Numeric(bytes) => serializer.serialize_bytes(bytes),
            Payload::Text(text) => serializer.serialize_str(text),
        }
    }
}

/// Deserializes the payload matching an already decoded dtype.
///
/// The payload borrows from the input when the data format allows it, so a length prefix
/// larger than the input fails before anything is allocated.
struct PayloadSeed {
    dtype: DType,
}

impl<'de> DeserializeSeed<'de> for PayloadSeed {
    type Value = Payload<'de>;

    fn deserialize<D>(self, deserializer: D) -> Result<Self::Value, D::Error>
    where
        D: Deserializer<'de>,
    {
        if self.dtype.is_text() {
            deserializer.deserialize_str(TextVisitor).map(Payload::Text)
        } else {
            serde_bytes::deserialize::<Cow<'de, [u8]>, _>(deserializer).map(Payload::Numeric)
        }
    }
}

struct TextVisitor;

impl<'de> Visitor<'de> for TextVisitor {
    type Value = Cow<'de, str>;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a string")
    }

    fn visit_borrowed_str<E>(self, v: &'de str) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        Ok(Cow::Borrowed(v))
    }

    fn visit_str<E>(self, v: &str) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        Ok(Cow::Owned(v.to_owned()))
    }

    fn visit_string<E>(self, v: String) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        Ok(Cow::Owned(v))
    }
}

impl Serialize for TensorSerde<'_> {
    fn serialize<Se>(&self, serializer: Se) -> Result<Se::Ok, Se::Error>
    where
        Se: Serializer,
    {
        let tensor = self.tensor.as_ref();
        let shape = tensor
            .shape()
            .to_i64_dims()
            .map_err(ser::Error::custom)?;
        let payload = Payload::read_from(tensor).map_err(ser::Error::custom)?;

        let mut tuple = serializer.serialize_tuple(3)?;
        tuple.serialize_element(&tensor.dtype())?;
        tuple.serialize_element(&shape)?;
        tuple.serialize_element(&payload)?;
        tuple.end()
    }
}

struct TensorVisitor;

impl<'de> Visitor<'de> for TensorVisitor {
    type Value = Tensor;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a tensor record (dtype, shape, payload)")
    }

    fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
    where
        A: SeqAccess<'de>,
    {
        let dtype: DType = seq
            .next_element()?
            .ok_or_else(|| de::Error::invalid_length(0, &self))?;
        let dims: Vec<i64> = seq
            .next_element()?
            .ok_or_else(|| de::Error::invalid_length(1, &self))?;
        let shape = Shape::from_i64_dims(&dims).map_err(de::Error::custom)?;
        let payload = seq
            .next_element_seed(PayloadSeed { dtype })?
            .ok_or_else(|| de::Error::invalid_length(2, &self))?;

        payload.into_tensor(dtype, shape).map_err(de::Error::custom)
    }
}

impl<'de> Deserialize<'de> for TensorSerde<'static> {
    fn deserialize<De>(deserializer: De) -> Result<Self, De::Error>
    where
        De: Deserializer<'de>,
    {
        deserializer
            .deserialize_tuple(3, TensorVisitor)
            .map(TensorSerde::owned)
    }
}

/// Serialize and deserialize a [tensor](Tensor) field with `#[serde(with = "...")]`.
///
/// ```rust
/// use serde::{Deserialize, Serialize};
/// use tensor_record::Tensor;
///
/// #[derive(Serialize, Deserialize)]
/// struct Checkpoint {
///     step: u64,
///     #[serde(with = "tensor_record::record::serde_tensor")]
///     weights: Tensor,
/// }
/// ```
pub mod serde_tensor {
    use super::*;

    /// Serializes the tensor as a `(dtype, shape, payload)` sequence.
    pub fn serialize<S>(tensor: &Tensor, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        TensorSerde::borrowed(tensor).serialize(serializer)
    }

    /// Deserializes a tensor written by [serialize].
    pub fn deserialize<'de, D>(deserializer: D) -> Result<Tensor, D::Error>
    where
        D: Deserializer<'de>,
    {
        TensorSerde::deserialize(deserializer).map(TensorSerde::into_tensor)
    }
}

// --- RECORD IMPLEMENTATIONS --- //

impl Record for Tensor {
    type Item = TensorSerde<'static>;

    fn into_item(self) -> Self::Item {
        TensorSerde::owned(self)
    }

    fn from_item(item: Self::Item) -> Self {
        item.into_tensor()
    }
}
