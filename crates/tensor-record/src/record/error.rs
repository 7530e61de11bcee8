/// Error returned when a tensor record can't be encoded.
///
/// Failures raised while serializing the tensor itself (a dimension that does not fit in an
/// `i64`, a runtime IO error while streaming the payload) are reported by the data format
/// and surface through its variant.
#[derive(thiserror::Error, Debug)]
pub enum EncodeError {
    /// Bincode error.
    #[error("Bincode encode error: {0}")]
    Bincode(#[from] bincode::error::EncodeError),

    /// MessagePack error.
    #[error("MessagePack encode error: {0}")]
    MsgPack(#[from] rmp_serde::encode::Error),

    /// Json error.
    #[error("Json encode error: {0}")]
    Json(#[from] serde_json::Error),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Error returned when a tensor record can't be decoded.
///
/// Unknown type tags, truncated fields and payloads whose size does not match the declared
/// shape are reported by the data format and surface through its variant.
#[derive(thiserror::Error, Debug)]
pub enum DecodeError {
    /// Bincode error.
    #[error("Bincode decode error: {0}")]
    Bincode(#[from] bincode::error::DecodeError),

    /// MessagePack error.
    #[error("MessagePack decode error: {0}")]
    MsgPack(#[from] rmp_serde::decode::Error),

    /// Json error.
    #[error("Json decode error: {0}")]
    Json(#[from] serde_json::Error),

    /// File not found.
    #[error("File not found: {0}")]
    FileNotFound(String),

    /// Bytes left over after a complete record.
    #[error("Record is {len} bytes long but only {read} bytes were decoded")]
    TrailingBytes {
        /// Number of bytes consumed by the record.
        read: usize,
        /// Number of bytes given to the decoder.
        len: usize,
    },

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
