//! Pinyin-aligned segmentation of Chinese sentences.
//!
//! A sentence is split into words by estimating, for each space-delimited
//! pinyin token, how many characters it spells. The estimate is a heuristic;
//! [`Alignment`] reports where it drifted.

mod render;
mod segment;
mod syllables;

pub use render::{link_sentence, pleco_link, render_links, PLECO_SEARCH_URL};
pub use segment::{segment, segment_counts, Alignment, Segment, SegmentKind, Segmentation};
pub use syllables::{syllable_count, syllable_counts, tokenize};
