//! Patching of stored card templates.

mod pipeline;
mod store;

pub use pipeline::{
    patch_config_blob, patch_fields, FailedTemplate, PatchError, PatchReport, SlotChanges,
    TemplatePatcher, ANSWER_FIELD, QUESTION_FIELD,
};
pub use store::{MemoryStore, StoreError, TemplateRecord, TemplateStore};
