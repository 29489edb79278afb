//! Binary field codec for card template configs.
//!
//! Template configs are stored as a flat sequence of tag/value records in
//! the protobuf wire format. Only the parts the patcher needs are modelled:
//! length-delimited UTF-8 strings are kept, varints are read past, and
//! everything else is handled according to [`UnknownWireTypePolicy`].

pub mod proto;

pub use proto::{
    decode_fields, decode_fields_with, encode_fields, DecodeOptions, FieldMap, ProtoDecoder,
    ProtoEncoder, ProtoError, UnknownWireTypePolicy, Utf8Policy, WireType, MAX_FIELD_NUMBER,
};
