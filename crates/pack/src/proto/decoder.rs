//! Field decoder.

use sentence_links_buffers::{BufferError, Reader};
use tracing::warn;

use super::error::ProtoError;
use super::types::{DecodeOptions, FieldMap, UnknownWireTypePolicy, Utf8Policy, WireType};

fn map_read_error(err: BufferError, offset: usize) -> ProtoError {
    match err {
        BufferError::VarintOverflow => ProtoError::VarintOverflow { offset },
        _ => ProtoError::Truncated { offset },
    }
}

/// Decodes a blob into a [`FieldMap`].
///
/// Length-delimited records are stored as strings (a repeated field number
/// keeps its first position and takes the last value). Varint records are
/// read and dropped.
#[derive(Debug, Clone, Default)]
pub struct ProtoDecoder {
    options: DecodeOptions,
}

impl ProtoDecoder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(options: DecodeOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> DecodeOptions {
        self.options
    }

    pub fn decode(&self, blob: &[u8]) -> Result<FieldMap, ProtoError> {
        let mut reader = Reader::new(blob);
        let mut fields = FieldMap::new();
        while !reader.is_empty() {
            let offset = reader.x;
            let tag = reader.try_u8().map_err(|e| map_read_error(e, offset))?;
            let (field, wire_type) = WireType::split_tag(tag);
            match wire_type {
                WireType::Len => {
                    let len = reader
                        .try_varint()
                        .map_err(|e| map_read_error(e, offset))?;
                    let len = usize::try_from(len).map_err(|_| ProtoError::Truncated { offset })?;
                    let bytes = reader
                        .try_buf(len)
                        .map_err(|e| map_read_error(e, offset))?;
                    fields.insert(field, self.read_text(field, bytes)?);
                }
                WireType::Varint => {
                    reader
                        .try_varint()
                        .map_err(|e| map_read_error(e, offset))?;
                }
                other => match self.options.unknown_wire_type {
                    UnknownWireTypePolicy::Stop => {
                        warn!(
                            offset,
                            wire_type = other.code(),
                            remaining = blob.len() - offset,
                            "stopping at unsupported wire type"
                        );
                        break;
                    }
                    UnknownWireTypePolicy::Skip => match other.fixed_width() {
                        Some(width) => reader
                            .try_skip(width)
                            .map_err(|e| map_read_error(e, offset))?,
                        None => {
                            return Err(ProtoError::UnsupportedWireType {
                                wire_type: other.code(),
                                offset,
                            })
                        }
                    },
                    UnknownWireTypePolicy::Reject => {
                        return Err(ProtoError::UnsupportedWireType {
                            wire_type: other.code(),
                            offset,
                        })
                    }
                },
            }
        }
        Ok(fields)
    }

    fn read_text(&self, field: u32, bytes: &[u8]) -> Result<String, ProtoError> {
        match self.options.utf8 {
            Utf8Policy::Strict => std::str::from_utf8(bytes)
                .map(str::to_owned)
                .map_err(|_| ProtoError::InvalidText { field }),
            Utf8Policy::Lossy => Ok(String::from_utf8_lossy(bytes).into_owned()),
        }
    }
}
