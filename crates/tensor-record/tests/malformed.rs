use tensor_record::{DType, DecodeError, EncodeError, Shape, Tensor, decode, encode};

/// Writes a record by hand, following the binary layout of `encode`.
#[derive(Default)]
struct RecordBuilder {
    bytes: Vec<u8>,
}

impl RecordBuilder {
    fn tag(mut self, tag: u32) -> Self {
        self.bytes.extend_from_slice(&tag.to_le_bytes());
        self
    }

    fn shape(mut self, dims: &[i64]) -> Self {
        self.bytes
            .extend_from_slice(&(dims.len() as u64).to_le_bytes());
        for dim in dims {
            self.bytes.extend_from_slice(&dim.to_le_bytes());
        }
        self
    }

    fn payload(mut self, payload: &[u8]) -> Self {
        self.bytes
            .extend_from_slice(&(payload.len() as u64).to_le_bytes());
        self.bytes.extend_from_slice(payload);
        self
    }

    fn build(self) -> Vec<u8> {
        self.bytes
    }
}

const F32_TAG: u32 = 1;
const I64_TAG: u32 = 4;
const U8_TAG: u32 = 11;
const TEXT_TAG: u32 = 13;

#[test]
fn hand_built_record_decodes() {
    let bytes = RecordBuilder::default()
        .tag(F32_TAG)
        .shape(&[2])
        .payload(&[0; 8])
        .build();

    let tensor = decode(&bytes).unwrap();

    assert_eq!(tensor.dtype(), DType::F32);
    assert_eq!(tensor.to_vec::<f32>().unwrap(), vec![0.0, 0.0]);
}

#[test]
fn unknown_type_tag_is_rejected() {
    let bytes = RecordBuilder::default()
        .tag(99)
        .shape(&[])
        .payload(&[0; 4])
        .build();

    let err = decode(&bytes).unwrap_err();

    assert!(matches!(err, DecodeError::Bincode(_)));
}

#[test]
fn truncated_shape_is_rejected() {
    let tensor = Tensor::from_elems(vec![1.0f32; 6], [2, 3]).unwrap();
    let bytes = encode(&tensor).unwrap();

    // Tag, shape length, and half of the first dimension.
    let err = decode(&bytes[..4 + 8 + 4]).unwrap_err();
    assert!(matches!(err, DecodeError::Bincode(_)));

    // Tag and a shape length without any dimension.
    let err = decode(&bytes[..4 + 8]).unwrap_err();
    assert!(matches!(err, DecodeError::Bincode(_)));
}

#[test]
fn truncated_payload_is_rejected() {
    let tensor = Tensor::from_elems(vec![7u32; 4], [4]).unwrap();
    let bytes = encode(&tensor).unwrap();

    let err = decode(&bytes[..bytes.len() - 1]).unwrap_err();

    assert!(matches!(err, DecodeError::Bincode(_)));
}

#[test]
fn payload_size_must_match_shape() {
    let bytes = RecordBuilder::default()
        .tag(F32_TAG)
        .shape(&[2, 3])
        .payload(&[0; 20])
        .build();

    let err = decode(&bytes).unwrap_err();

    assert!(matches!(err, DecodeError::Bincode(_)));
    assert!(err.to_string().contains("Expected 24 bytes"), "{err}");
}

#[test]
fn negative_dimension_is_rejected() {
    let bytes = RecordBuilder::default()
        .tag(F32_TAG)
        .shape(&[-2])
        .payload(&[])
        .build();

    let err = decode(&bytes).unwrap_err();

    assert!(err.to_string().contains("Invalid dimension -2"), "{err}");
}

#[test]
fn invalid_utf8_text_is_rejected() {
    let bytes = RecordBuilder::default()
        .tag(TEXT_TAG)
        .shape(&[])
        .payload(&[0xff, 0xfe])
        .build();

    assert!(decode(&bytes).is_err());
}

#[test]
fn three_bytes_are_not_a_record() {
    for bytes in [[0x00, 0x00, 0x00], [0x0d, 0x00, 0x00], [0xa7, 0x3c, 0x91]] {
        let err = decode(&bytes).unwrap_err();
        assert!(matches!(err, DecodeError::Bincode(_)));
    }
}

#[test]
fn empty_input_is_rejected() {
    assert!(decode(&[]).is_err());
}

#[test]
fn trailing_bytes_are_rejected() {
    let mut bytes = encode(&Tensor::from_text("hello")).unwrap();
    let len = bytes.len();
    bytes.extend_from_slice(&[1, 2, 3]);

    let err = decode(&bytes).unwrap_err();

    assert!(matches!(
        err,
        DecodeError::TrailingBytes { read, len: total } if read == len && total == len + 3
    ));
}

#[test]
fn text_record_shape_is_read_but_not_applied() {
    let bytes = RecordBuilder::default()
        .tag(TEXT_TAG)
        .shape(&[2, 3])
        .payload(b"hello")
        .build();

    let tensor = decode(&bytes).unwrap();

    assert_eq!(tensor.dtype(), DType::Text);
    assert_eq!(tensor.shape(), &Shape::scalar());
    assert_eq!(tensor.text().unwrap(), "hello");

    // Encoding again writes the scalar shape of the runtime tensor.
    assert_ne!(encode(&tensor).unwrap(), bytes);
}

#[test]
fn text_record_with_invalid_shape_is_still_rejected() {
    let bytes = RecordBuilder::default()
        .tag(TEXT_TAG)
        .shape(&[-1])
        .payload(b"hello")
        .build();

    assert!(decode(&bytes).is_err());
}

#[test]
fn oversized_payload_length_is_an_error() {
    for (tag, len) in [
        (U8_TAG, u64::MAX),
        (TEXT_TAG, u64::MAX),
        (U8_TAG, 1 << 40),
        (TEXT_TAG, 1 << 40),
    ] {
        let mut bytes = RecordBuilder::default().tag(tag).shape(&[]).build();
        bytes.extend_from_slice(&len.to_le_bytes());
        bytes.extend_from_slice(&[1, 2, 3]);

        let err = decode(&bytes).unwrap_err();
        assert!(matches!(err, DecodeError::Bincode(_)), "{err}");
    }
}

#[test]
fn oversized_shape_length_is_an_error() {
    let mut bytes = RecordBuilder::default().tag(F32_TAG).build();
    bytes.extend_from_slice(&u64::MAX.to_le_bytes());
    bytes.extend_from_slice(&[0; 8]);

    let err = decode(&bytes).unwrap_err();
    assert!(matches!(err, DecodeError::Bincode(_)), "{err}");
}

#[test]
#[cfg(target_pointer_width = "64")]
fn zero_sized_shape_with_huge_dimensions_decodes() {
    let bytes = RecordBuilder::default()
        .tag(I64_TAG)
        .shape(&[1 << 40, 1 << 40, 0])
        .payload(&[])
        .build();

    let tensor = decode(&bytes).unwrap();

    assert_eq!(tensor.dtype(), DType::I64);
    assert_eq!(tensor.num_elements(), 0);
    assert_eq!(encode(&tensor).unwrap(), bytes);
}

#[test]
#[cfg(target_pointer_width = "64")]
fn dimension_beyond_i64_fails_to_encode() {
    let tensor = Tensor::from_elems(Vec::<u8>::new(), [usize::MAX, 0]).unwrap();

    let err = encode(&tensor).unwrap_err();

    assert!(matches!(err, EncodeError::Bincode(_)));
    assert!(err.to_string().contains("does not fit in an i64"), "{err}");
}
