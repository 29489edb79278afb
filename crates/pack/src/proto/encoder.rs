//! Field encoder.
//!
//! Encoding rules:
//! - tag: one byte, `(field << 3) | wire_type`
//! - string: tag(2) + varint(byte length) + UTF-8 bytes
//! - varint: tag(0) + varint(value)

use sentence_links_buffers::Writer;

use super::error::ProtoError;
use super::types::{FieldMap, WireType, MAX_FIELD_NUMBER};

/// Field encoder writing into a growable buffer.
pub struct ProtoEncoder {
    pub writer: Writer,
}

impl Default for ProtoEncoder {
    fn default() -> Self {
        Self::new()
    }
}

impl ProtoEncoder {
    pub fn new() -> Self {
        Self {
            writer: Writer::new(),
        }
    }

    fn tag(field: u32, wire_type: WireType) -> Result<u8, ProtoError> {
        if field > MAX_FIELD_NUMBER {
            return Err(ProtoError::InvalidValue { field });
        }
        Ok(((field as u8) << 3) | wire_type.code())
    }

    /// Writes a length-delimited string record.
    pub fn write_str_field(&mut self, field: u32, value: &str) -> Result<(), ProtoError> {
        let tag = Self::tag(field, WireType::Len)?;
        self.writer.u8(tag);
        self.writer.varint(value.len() as u64);
        self.writer.utf8(value);
        Ok(())
    }

    /// Writes a varint record.
    pub fn write_varint_field(&mut self, field: u32, value: u64) -> Result<(), ProtoError> {
        let tag = Self::tag(field, WireType::Varint)?;
        self.writer.u8(tag);
        self.writer.varint(value);
        Ok(())
    }

    /// Encodes every field of `fields`, sorted by field number.
    ///
    /// Nothing is written when any field number is out of range.
    pub fn encode(&mut self, fields: &FieldMap) -> Result<Vec<u8>, ProtoError> {
        let mut keys: Vec<u32> = fields.keys().copied().collect();
        keys.sort_unstable();
        if let Some(&field) = keys.last().filter(|&&f| f > MAX_FIELD_NUMBER) {
            return Err(ProtoError::InvalidValue { field });
        }
        for field in keys {
            self.write_str_field(field, &fields[&field])?;
        }
        Ok(self.writer.flush())
    }
}
