//! Protobuf-style field codec (strings and varints only).

pub mod decoder;
pub mod encoder;
pub mod error;
pub mod types;

pub use decoder::ProtoDecoder;
pub use encoder::ProtoEncoder;
pub use error::ProtoError;
pub use types::{
    DecodeOptions, FieldMap, UnknownWireTypePolicy, Utf8Policy, WireType, MAX_FIELD_NUMBER,
};

/// Decodes `blob` with the default (legacy) options.
pub fn decode_fields(blob: &[u8]) -> Result<FieldMap, ProtoError> {
    ProtoDecoder::new().decode(blob)
}

/// Decodes `blob` with explicit options.
pub fn decode_fields_with(blob: &[u8], options: DecodeOptions) -> Result<FieldMap, ProtoError> {
    ProtoDecoder::with_options(options).decode(blob)
}

/// Encodes every field in ascending field-number order.
pub fn encode_fields(fields: &FieldMap) -> Result<Vec<u8>, ProtoError> {
    ProtoEncoder::new().encode(fields)
}
