//! Idempotent insertion of generated blocks into host text.

mod block;

pub use block::{
    has_unclosed_block, insert_block, remove_all_blocks, remove_block, Anchor, GeneratedBlock,
};
