use core::fmt;
use serde::{Deserialize, Serialize};

/// Element type of a tensor.
///
/// The binary recorders write the variant index as the type tag, so new variants must be
/// appended at the end.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DType {
    /// 64-bit floating point
    F64,
    /// 32-bit floating point
    F32,
    /// 16-bit floating point
    F16,
    /// Brain floating point
    BF16,
    /// 64-bit integer
    I64,
    /// 32-bit integer
    I32,
    /// 16-bit integer
    I16,
    /// 8-bit integer
    I8,
    /// 64-bit unsigned integer
    U64,
    /// 32-bit unsigned integer
    U32,
    /// 16-bit unsigned integer
    U16,
    /// 8-bit unsigned integer
    U8,
    /// Boolean, one byte per element
    Bool,
    /// UTF-8 text
    Text,
}

impl DType {
    /// Returns the size of a single element in bytes, or `None` for [text](DType::Text) which
    /// has no fixed-width layout.
    pub const fn size(&self) -> Option<usize> {
        match self {
            DType::F64 | DType::I64 | DType::U64 => Some(8),
            DType::F32 | DType::I32 | DType::U32 => Some(4),
            DType::F16 | DType::BF16 | DType::I16 | DType::U16 => Some(2),
            DType::I8 | DType::U8 | DType::Bool => Some(1),
            DType::Text => None,
        }
    }

    /// Returns true if the data type is text.
    pub const fn is_text(&self) -> bool {
        matches!(self, DType::Text)
    }

    /// Returns true if the data type is a floating point type.
    pub const fn is_float(&self) -> bool {
        matches!(self, DType::F64 | DType::F32 | DType::F16 | DType::BF16)
    }

    /// Returns true if the data type is a signed integer type.
    pub const fn is_int(&self) -> bool {
        matches!(self, DType::I64 | DType::I32 | DType::I16 | DType::I8)
    }

    /// Returns true if the data type is an unsigned integer type.
    pub const fn is_uint(&self) -> bool {
        matches!(self, DType::U64 | DType::U32 | DType::U16 | DType::U8)
    }

    /// Returns the short lowercase name of the data type.
    pub const fn name(&self) -> &'static str {
        match self {
            DType::F64 => "f64",
            DType::F32 => "f32",
            DType::F16 => "f16",
            DType::BF16 => "bf16",
            DType::I64 => "i64",
            DType::I32 => "i32",
            DType::I16 => "i16",
            DType::I8 => "i8",
            DType::U64 => "u64",
            DType::U32 => "u32",
            DType::U16 => "u16",
            DType::U8 => "u8",
            DType::Bool => "bool",
            DType::Text => "text",
        }
    }
}

impl fmt::Display for DType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
