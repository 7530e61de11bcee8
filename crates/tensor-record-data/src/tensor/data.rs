use super::{DType, Element, Shape, TensorError};

/// Numeric data of a tensor stored as raw bytes in native byte order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TensorData {
    /// The values of the tensor, as bytes.
    pub bytes: Vec<u8>,

    /// The shape of the tensor.
    pub shape: Vec<usize>,

    /// The data type of the tensor.
    pub dtype: DType,
}

impl TensorData {
    /// Creates a new tensor data structure.
    pub fn new<E: Element, S: Into<Shape>>(value: Vec<E>, shape: S) -> Result<Self, TensorError> {
        let shape = shape.into();
        let expected = shape
            .checked_num_elements()
            .ok_or_else(|| TensorError::SizeOverflow {
                dtype: E::dtype(),
                shape: shape.to_vec(),
            })?;

        if value.len() != expected {
            return Err(TensorError::ShapeMismatch {
                shape: shape.dims,
                expected,
                found: value.len(),
            });
        }

        Ok(Self::init(value, shape.dims))
    }

    /// Creates a new tensor data structure from raw bytes.
    ///
    /// The number of bytes must match `shape.num_elements() * dtype.size()`.
    pub fn from_bytes<S: Into<Shape>>(
        bytes: Vec<u8>,
        shape: S,
        dtype: DType,
    ) -> Result<Self, TensorError> {
        let shape = shape.into();
        let expected = expected_bytes(dtype, &shape)?;

        if bytes.len() != expected {
            return Err(TensorError::ByteCountMismatch {
                dtype,
                shape: shape.dims,
                expected,
                found: bytes.len(),
            });
        }

        Ok(Self {
            bytes,
            shape: shape.dims,
            dtype,
        })
    }

    fn init<E: Element>(value: Vec<E>, shape: Vec<usize>) -> Self {
        Self {
            bytes: bytemuck::cast_slice(value.as_slice()).to_vec(),
            shape,
            dtype: E::dtype(),
        }
    }

    /// Returns the tensor data as a vector of elements.
    pub fn to_vec<E: Element>(&self) -> Result<Vec<E>, TensorError> {
        if E::dtype() != self.dtype {
            return Err(TensorError::DTypeMismatch {
                expected: E::dtype(),
                found: self.dtype,
            });
        }

        self.bytes
            .chunks_exact(core::mem::size_of::<E>())
            .map(|chunk| {
                bytemuck::checked::try_pod_read_unaligned::<E>(chunk)
                    .map_err(|_| TensorError::InvalidBitPattern(self.dtype))
            })
            .collect()
    }

    /// Returns the total number of elements of the tensor data.
    pub fn num_elements(&self) -> usize {
        Shape::from(self.shape.as_slice()).num_elements()
    }

    /// Returns the data as a slice of bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }
}

/// Number of bytes a numeric tensor of the given type and shape occupies.
pub(crate) fn expected_bytes(dtype: DType, shape: &Shape) -> Result<usize, TensorError> {
    let size = dtype.size().ok_or(TensorError::TextContents)?;

    shape
        .checked_num_elements()
        .and_then(|num_elements| num_elements.checked_mul(size))
        .ok_or_else(|| TensorError::SizeOverflow {
            dtype,
            shape: shape.to_vec(),
        })
}

impl<E: Element, const A: usize> From<[E; A]> for TensorData {
    fn from(elems: [E; A]) -> Self {
        TensorData::init(elems.to_vec(), vec![A])
    }
}

impl<E: Element, const A: usize, const B: usize> From<[[E; B]; A]> for TensorData {
    fn from(elems: [[E; B]; A]) -> Self {
        let data: Vec<E> = elems.iter().flatten().copied().collect();

        TensorData::init(data, vec![A, B])
    }
}

impl<E: Element, const A: usize, const B: usize, const C: usize> From<[[[E; C]; B]; A]>
    for TensorData
{
    fn from(elems: [[[E; C]; B]; A]) -> Self {
        let data: Vec<E> = elems.iter().flatten().flatten().copied().collect();

        TensorData::init(data, vec![A, B, C])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::f16;

    #[test]
    fn should_have_right_shape() {
        let data = TensorData::from([[3.0f32, 5.0, 6.0]]);
        assert_eq!(data.shape, vec![1, 3]);

        let data = TensorData::from([[4.0f32, 5.0, 8.0], [3.0, 5.0, 6.0]]);
        assert_eq!(data.shape, vec![2, 3]);

        let data = TensorData::from([3.0f32, 5.0, 6.0]);
        assert_eq!(data.shape, vec![3]);

        let data = TensorData::from([[[1u8], [2]], [[3], [4]]]);
        assert_eq!(data.shape, vec![2, 2, 1]);
    }

    #[test]
    fn should_have_right_num_elements() {
        let data = TensorData::new(vec![1i64; 24], [2, 3, 4]).unwrap();
        assert_eq!(data.num_elements(), 24);
        assert_eq!(data.bytes.len(), 24 * 8);
        assert_eq!(data.dtype, DType::I64);
    }

    #[test]
    fn new_rejects_wrong_element_count() {
        let err = TensorData::new(vec![1.0f32; 5], [2, 3]).unwrap_err();
        assert!(matches!(
            err,
            TensorError::ShapeMismatch {
                expected: 6,
                found: 5,
                ..
            }
        ));
    }

    #[test]
    #[cfg(target_pointer_width = "64")]
    fn new_accepts_zero_sized_shape_with_huge_dimensions() {
        let data = TensorData::new(Vec::<i64>::new(), [1 << 40, 1 << 40, 0]).unwrap();

        assert_eq!(data.num_elements(), 0);
        assert!(data.bytes.is_empty());
    }

    #[test]
    fn new_rejects_overflowing_shape() {
        let err = TensorData::new(vec![1u8], [usize::MAX, 2]).unwrap_err();
        assert!(matches!(
            err,
            TensorError::SizeOverflow {
                dtype: DType::U8,
                ..
            }
        ));
    }

    #[test]
    fn to_vec_reads_elements_back() {
        let values = vec![f16::from_f32(1.5), f16::from_f32(-2.0)];
        let data = TensorData::new(values.clone(), [2]).unwrap();

        assert_eq!(data.to_vec::<f16>().unwrap(), values);
    }

    #[test]
    fn to_vec_rejects_other_dtype() {
        let data = TensorData::from([1i32, 2, 3]);
        let err = data.to_vec::<f32>().unwrap_err();

        assert!(matches!(
            err,
            TensorError::DTypeMismatch {
                expected: DType::F32,
                found: DType::I32
            }
        ));
    }

    #[test]
    fn to_vec_rejects_invalid_bool() {
        let data = TensorData::from_bytes(vec![0, 1, 2], [3], DType::Bool).unwrap();
        let err = data.to_vec::<bool>().unwrap_err();

        assert!(matches!(err, TensorError::InvalidBitPattern(DType::Bool)));
    }

    #[test]
    fn from_bytes_checks_byte_count() {
        let err = TensorData::from_bytes(vec![0; 7], [2], DType::F32).unwrap_err();
        assert!(matches!(
            err,
            TensorError::ByteCountMismatch {
                expected: 8,
                found: 7,
                ..
            }
        ));
    }

    #[test]
    fn from_bytes_rejects_text() {
        let err = TensorData::from_bytes(vec![], [0], DType::Text).unwrap_err();
        assert!(matches!(err, TensorError::TextContents));
    }
}
