use tensor_record_data::Tensor;

use super::{BinBytesRecorder, DecodeError, DefaultRecorder, EncodeError, Recorder, TensorSerde};

/// Encodes a tensor into bytes.
///
/// The record is written with the [default recorder](DefaultRecorder):
///
/// | field   | encoding                                                     |
/// |---------|--------------------------------------------------------------|
/// | dtype   | `u32` little-endian variant index of [`DType`](tensor_record_data::DType) |
/// | shape   | `u64` length, then one `i64` per dimension                   |
/// | payload | `u64` length, then the raw bytes, or the UTF-8 text for text tensors |
///
/// All integers are little-endian. The tensor is only borrowed.
pub fn encode(tensor: &Tensor) -> Result<Vec<u8>, EncodeError> {
    DefaultRecorder::new().save_item(TensorSerde::borrowed(tensor), ())
}

/// Decodes a tensor from bytes written by [encode].
///
/// The bytes must hold exactly one record. Text tensors are always decoded as scalars, the
/// shape stored in the record is read but not applied to them.
pub fn decode(bytes: &[u8]) -> Result<Tensor, DecodeError> {
    let item: TensorSerde<'static> = BinBytesRecorder::<&[u8]>::new().load_item(bytes)?;

    Ok(item.into_tensor())
}
