//! Byte buffer utilities for sentence-links.
//!
//! # Overview
//!
//! - [`Reader`] - Reads binary data from a byte slice with cursor tracking
//! - [`Writer`] - Writes binary data to an auto-growing buffer
//! - [`varint`] - Unsigned base-128 varints (7 data bits per byte, high bit = more)
//!
//! # Example
//!
//! ```
//! use sentence_links_buffers::{Reader, Writer};
//!
//! let mut writer = Writer::new();
//! writer.u8(0x0a);
//! writer.varint(300);
//! writer.utf8("hello");
//! let data = writer.flush();
//!
//! let mut reader = Reader::new(&data);
//! assert_eq!(reader.try_u8(), Ok(0x0a));
//! assert_eq!(reader.try_varint(), Ok(300));
//! assert_eq!(reader.try_utf8(5), Ok("hello"));
//! ```

mod reader;
pub mod varint;
mod writer;

pub use reader::Reader;
pub use varint::{decode_varint, encode_varint, encode_varint_i64, varint_len, MAX_VARINT_LEN};
pub use writer::Writer;

/// Error type for buffer operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BufferError {
    /// Attempted to read past the end of the buffer.
    EndOfBuffer,
    /// Invalid UTF-8 sequence.
    InvalidUtf8,
    /// A varint did not terminate within 64 bits.
    VarintOverflow,
    /// A negative integer was handed to the unsigned varint encoder.
    NegativeVarint(i64),
}

impl std::fmt::Display for BufferError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BufferError::EndOfBuffer => write!(f, "end of buffer"),
            BufferError::InvalidUtf8 => write!(f, "invalid UTF-8 sequence"),
            BufferError::VarintOverflow => write!(f, "varint exceeds 64 bits"),
            BufferError::NegativeVarint(n) => write!(f, "cannot encode negative varint: {n}"),
        }
    }
}

impl std::error::Error for BufferError {}
