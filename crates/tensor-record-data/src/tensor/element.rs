use core::fmt::Debug;

use bytemuck::{CheckedBitPattern, NoUninit};
use half::{bf16, f16};

use super::DType;

/// Scalar type that can be stored in a numeric tensor.
///
/// Elements are stored in native byte order and read back with a checked bit pattern, so a
/// corrupted `bool` payload is reported instead of producing an invalid value.
pub trait Element: NoUninit + CheckedBitPattern + Debug + Send + Sync + 'static {
    /// The data type matching this element.
    fn dtype() -> DType;
}

macro_rules! make_element {
    (
        $($type:ty => $dtype:ident),* $(,)?
    ) => {
        $(
            impl Element for $type {
                fn dtype() -> DType {
                    DType::$dtype
                }
            }
        )*
    };
}

make_element!(
    f64 => F64,
    f32 => F32,
    f16 => F16,
    bf16 => BF16,
    i64 => I64,
    i32 => I32,
    i16 => I16,
    i8 => I8,
    u64 => U64,
    u32 => U32,
    u16 => U16,
    u8 => U8,
    bool => Bool,
);
