#![warn(missing_docs)]

//! Binary records for typed tensors.
//!
//! A tensor is written as the sequence `(dtype, shape, payload)` through any serde data format.
//! Numeric tensors carry their raw bytes as the payload while text tensors carry their string.
//!
//! ```rust
//! use tensor_record::{Tensor, TensorData, decode, encode};
//!
//! let tensor = Tensor::from_data(TensorData::from([[1.0f32, 2.0, 3.0], [4.0, 5.0, 6.0]]));
//! let bytes = encode(&tensor).unwrap();
//!
//! assert_eq!(decode(&bytes).unwrap(), tensor);
//! ```

#[macro_use]
extern crate derive_new;

/// Re-export serde for downstream derives.
pub use serde;

/// Module for the recorder.
pub mod record;

pub use record::{DecodeError, EncodeError, decode, encode};

/// Tensor runtime types.
pub use tensor_record_data as data;
pub use tensor_record_data::{DType, Element, Shape, Tensor, TensorData, TensorError, TensorValue};
