//! Field codec error type.

use thiserror::Error;

/// Error type for field decoding and encoding.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ProtoError {
    /// A varint or length-delimited value runs past the end of the blob.
    #[error("record at offset {offset} is truncated")]
    Truncated { offset: usize },
    /// A varint does not fit 64 bits.
    #[error("varint at offset {offset} exceeds 64 bits")]
    VarintOverflow { offset: usize },
    /// A string field is not valid UTF-8.
    #[error("field {field} is not valid UTF-8")]
    InvalidText { field: u32 },
    /// A field cannot be represented on the wire.
    #[error("field {field} cannot be encoded in a single tag byte")]
    InvalidValue { field: u32 },
    /// A wire type with no decoding rule was met.
    #[error("unsupported wire type {wire_type} at offset {offset}")]
    UnsupportedWireType { wire_type: u8, offset: usize },
}
