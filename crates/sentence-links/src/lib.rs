//! sentence-links - pinyin-aligned dictionary links for card templates.
//!
//! Segments a Chinese sentence into words using its pinyin, renders the
//! words as Pleco search links, and keeps the script that does this at
//! review time patched into stored card templates exactly once.

pub mod pinyin;
pub mod patch;
pub mod script;

pub mod config;
pub mod note;
pub mod template;

pub mod cli;

pub use config::{ConfigError, PatchConfig, TemplateRule};
pub use patch::{
    has_unclosed_block, insert_block, remove_all_blocks, remove_block, Anchor, GeneratedBlock,
};
pub use pinyin::{link_sentence, segment, syllable_count, Alignment, Segment, Segmentation};
pub use script::SentenceScript;
pub use template::{
    patch_config_blob, MemoryStore, PatchError, PatchReport, StoreError, TemplatePatcher,
    TemplateRecord, TemplateStore,
};
