//! Field codec types and options.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Field number to string value, in the order fields were first seen.
///
/// Equality ignores order, so a decoded map compares equal to one built in
/// any other order.
pub type FieldMap = IndexMap<u32, String>;

/// Largest field number that fits a one-byte tag.
pub const MAX_FIELD_NUMBER: u32 = 0x1f;

/// Low three bits of a tag byte.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WireType {
    Varint,
    Fixed64,
    Len,
    StartGroup,
    EndGroup,
    Fixed32,
    Reserved(u8),
}

impl WireType {
    /// Splits a tag byte into its field number and wire type.
    pub fn split_tag(tag: u8) -> (u32, WireType) {
        ((tag >> 3) as u32, WireType::from(tag & 0x7))
    }

    /// Raw three-bit code.
    pub fn code(self) -> u8 {
        match self {
            WireType::Varint => 0,
            WireType::Fixed64 => 1,
            WireType::Len => 2,
            WireType::StartGroup => 3,
            WireType::EndGroup => 4,
            WireType::Fixed32 => 5,
            WireType::Reserved(code) => code,
        }
    }

    /// Payload size for fixed-width wire types.
    pub fn fixed_width(self) -> Option<usize> {
        match self {
            WireType::Fixed64 => Some(8),
            WireType::Fixed32 => Some(4),
            _ => None,
        }
    }
}

impl From<u8> for WireType {
    fn from(code: u8) -> Self {
        match code & 0x7 {
            0 => WireType::Varint,
            1 => WireType::Fixed64,
            2 => WireType::Len,
            3 => WireType::StartGroup,
            4 => WireType::EndGroup,
            5 => WireType::Fixed32,
            other => WireType::Reserved(other),
        }
    }
}

/// What the decoder does on a wire type other than varint or length-delimited.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum UnknownWireTypePolicy {
    /// Stop and return the fields read so far.
    #[default]
    Stop,
    /// Skip fixed-width values; fail on wire types without a length rule.
    Skip,
    /// Fail immediately.
    Reject,
}

/// How string payloads that are not valid UTF-8 are handled.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Utf8Policy {
    /// Fail with [`ProtoError::InvalidText`](super::ProtoError::InvalidText).
    #[default]
    Strict,
    /// Substitute U+FFFD for invalid sequences.
    Lossy,
}

/// Decoder configuration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct DecodeOptions {
    pub unknown_wire_type: UnknownWireTypePolicy,
    pub utf8: Utf8Policy,
}
