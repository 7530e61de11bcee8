#![warn(missing_docs)]

//! Tensor runtime types used by `tensor-record`.
//!
//! A [`Tensor`] is an owned handle with an element type, a shape and either a fixed-width byte
//! payload or, for [text](DType::Text) tensors, a single string.

mod tensor;

pub use tensor::*;

// Re-exported types
pub use half::{bf16, f16};
