//! sentence-links-util - text helpers shared by the segmenter and renderer.

pub mod strings;

pub use strings::{
    contains_han, decode_entities, encode_uri_component, is_han, strip_tags, text_content,
};
