//! String utilities.
//!
//! Character classification for Chinese text, markup stripping and
//! URI-component escaping.

mod han;
mod html;
mod uri;

pub use han::{contains_han, is_han};
pub use html::{decode_entities, strip_tags, text_content};
pub use uri::encode_uri_component;
