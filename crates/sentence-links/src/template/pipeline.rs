//! Decode, patch and re-encode template configs.

use std::borrow::Cow;

use sentence_links_pack::{decode_fields_with, encode_fields, FieldMap, ProtoError};
use thiserror::Error;
use tracing::{info, warn};

use super::store::{StoreError, TemplateRecord, TemplateStore};
use crate::config::{PatchConfig, TemplateRule};
use crate::patch::{has_unclosed_block, insert_block, remove_block, Anchor, GeneratedBlock};
use crate::script::SentenceScript;

/// Field holding the question (front) HTML.
pub const QUESTION_FIELD: u32 = 1;
/// Field holding the answer (back) HTML.
pub const ANSWER_FIELD: u32 = 2;

#[derive(Debug, Error)]
pub enum PatchError {
    #[error("cannot decode template config: {0}")]
    Decode(#[source] ProtoError),
    #[error("cannot encode template config: {0}")]
    Encode(#[source] ProtoError),
    #[error(transparent)]
    Store(#[from] StoreError),
}

/// What [`patch_fields`] changed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SlotChanges {
    /// Stale blocks removed across both slots.
    pub removed: usize,
    /// Blocks inserted across both slots.
    pub inserted: usize,
}

fn strip_stale(html: &str, config: &PatchConfig) -> (String, usize) {
    let mut current = html.to_owned();
    let mut removed = 0;
    loop {
        let next = match remove_block(&current, &config.open_marker, &config.close_marker) {
            Cow::Owned(next) => next,
            Cow::Borrowed(_) => break,
        };
        current = next;
        removed += 1;
        if !config.remove_all {
            break;
        }
    }
    (current, removed)
}

fn patch_slot(
    fields: &mut FieldMap,
    field: u32,
    block: Option<(GeneratedBlock, &Anchor)>,
    config: &PatchConfig,
    changes: &mut SlotChanges,
) {
    let existing = fields.get(&field);
    if existing.is_some_and(|html| {
        has_unclosed_block(html, &config.open_marker, &config.close_marker)
    }) {
        warn!(field, "unclosed sentence script marker, leaving slot as is");
        return;
    }
    let present = existing.is_some();
    let (mut html, removed) = strip_stale(existing.map_or("", String::as_str), config);
    if removed > 0 {
        info!(field, removed, "removed stale sentence script");
        changes.removed += removed;
    }
    if let Some((block, anchor)) = block {
        html = insert_block(&html, &block.body, anchor);
        changes.inserted += 1;
    }
    if present || !html.is_empty() {
        fields.insert(field, html);
    }
}

/// Replaces the sentence scripts in the question and answer slots.
///
/// Stale blocks are always removed from both slots; new ones are inserted
/// only where `rule` asks for them. Other fields are left alone.
pub fn patch_fields(
    fields: &mut FieldMap,
    rule: &TemplateRule,
    config: &PatchConfig,
) -> SlotChanges {
    let mut changes = SlotChanges::default();
    let front = rule
        .question
        .then(|| (config.script_block(SentenceScript::Front), &config.question_anchor));
    patch_slot(fields, QUESTION_FIELD, front, config, &mut changes);
    let back = rule
        .answer
        .then(|| (config.script_block(SentenceScript::Back), &config.answer_anchor));
    patch_slot(fields, ANSWER_FIELD, back, config, &mut changes);
    changes
}

/// Decodes `blob`, applies [`patch_fields`] and re-encodes it.
pub fn patch_config_blob(
    blob: &[u8],
    rule: &TemplateRule,
    config: &PatchConfig,
) -> Result<Vec<u8>, PatchError> {
    let mut fields = decode_fields_with(blob, config.decode).map_err(PatchError::Decode)?;
    patch_fields(&mut fields, rule, config);
    encode_fields(&fields).map_err(PatchError::Encode)
}

/// A template left unmodified because its config could not be patched.
#[derive(Debug)]
pub struct FailedTemplate {
    pub note_type_id: i64,
    pub ordinal: u32,
    pub name: String,
    pub error: PatchError,
}

#[derive(Debug, Default)]
pub struct PatchReport {
    pub updated: Vec<String>,
    pub failed: Vec<FailedTemplate>,
}

impl PatchReport {
    pub fn is_empty(&self) -> bool {
        self.updated.is_empty() && self.failed.is_empty()
    }
}

/// Applies a [`PatchConfig`] to every matching template of a store.
pub struct TemplatePatcher<'c> {
    config: &'c PatchConfig,
}

impl<'c> TemplatePatcher<'c> {
    pub fn new(config: &'c PatchConfig) -> Self {
        Self { config }
    }

    fn patch_record(
        &self,
        record: &TemplateRecord,
        now: i64,
    ) -> Result<TemplateRecord, PatchError> {
        let Some(rule) = self.config.rule(&record.name) else {
            // fetch_templates only returns configured names
            return Ok(record.clone());
        };
        let config = patch_config_blob(&record.config, rule, self.config)?;
        Ok(TemplateRecord {
            config,
            mtime_secs: now,
            usn: record.usn.wrapping_add(1),
            ..record.clone()
        })
    }

    /// Patches, persists and commits each template in turn.
    ///
    /// A config that fails to decode or encode is skipped and reported;
    /// store failures abort the run.
    pub fn run<S: TemplateStore + ?Sized>(
        &self,
        store: &mut S,
        now: i64,
    ) -> Result<PatchReport, PatchError> {
        let names = self.config.template_names();
        let records = store.fetch_templates(&names)?;
        let mut report = PatchReport::default();
        if records.is_empty() {
            info!(?names, "no templates found");
            return Ok(report);
        }
        for record in records {
            info!(name = %record.name, "processing template");
            match self.patch_record(&record, now) {
                Ok(updated) => {
                    store.persist_template(&updated)?;
                    store.commit()?;
                    info!(name = %record.name, usn = updated.usn, "updated template");
                    report.updated.push(record.name);
                }
                Err(error) => {
                    warn!(name = %record.name, %error, "skipping template");
                    report.failed.push(FailedTemplate {
                        note_type_id: record.note_type_id,
                        ordinal: record.ordinal,
                        name: record.name,
                        error,
                    });
                }
            }
        }
        Ok(report)
    }
}
