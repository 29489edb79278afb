//! Storage seam for card templates.

use thiserror::Error;

/// One card template row as seen by the patcher.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateRecord {
    pub note_type_id: i64,
    pub ordinal: u32,
    pub name: String,
    /// Encoded template config (see `sentence_links_pack`).
    pub config: Vec<u8>,
    pub mtime_secs: i64,
    /// Update sequence number; bumped on every write.
    pub usn: i32,
}

impl TemplateRecord {
    pub fn key(&self) -> (i64, u32) {
        (self.note_type_id, self.ordinal)
    }
}

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("template {note_type_id}/{ordinal} does not exist")]
    NotFound { note_type_id: i64, ordinal: u32 },
    #[error("template store failed: {0}")]
    Backend(String),
}

/// Read/write/commit operations the patcher needs from a template store.
pub trait TemplateStore {
    /// Templates whose name is one of `names`, in store order.
    fn fetch_templates(&mut self, names: &[&str]) -> Result<Vec<TemplateRecord>, StoreError>;

    /// Stages an update of the record with the same key.
    fn persist_template(&mut self, record: &TemplateRecord) -> Result<(), StoreError>;

    /// Makes staged updates durable.
    fn commit(&mut self) -> Result<(), StoreError>;
}

/// In-memory [`TemplateStore`]. Updates become visible on commit.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    records: Vec<TemplateRecord>,
    staged: Vec<TemplateRecord>,
    commits: usize,
}

impl MemoryStore {
    pub fn new(records: Vec<TemplateRecord>) -> Self {
        Self {
            records,
            ..Self::default()
        }
    }

    pub fn insert(&mut self, record: TemplateRecord) {
        self.records.push(record);
    }

    pub fn records(&self) -> &[TemplateRecord] {
        &self.records
    }

    pub fn get(&self, note_type_id: i64, ordinal: u32) -> Option<&TemplateRecord> {
        self.records
            .iter()
            .find(|r| r.key() == (note_type_id, ordinal))
    }

    pub fn commits(&self) -> usize {
        self.commits
    }

    pub fn into_records(self) -> Vec<TemplateRecord> {
        self.records
    }
}

impl TemplateStore for MemoryStore {
    fn fetch_templates(&mut self, names: &[&str]) -> Result<Vec<TemplateRecord>, StoreError> {
        Ok(self
            .records
            .iter()
            .filter(|r| names.contains(&r.name.as_str()))
            .cloned()
            .collect())
    }

    fn persist_template(&mut self, record: &TemplateRecord) -> Result<(), StoreError> {
        if self.get(record.note_type_id, record.ordinal).is_none() {
            return Err(StoreError::NotFound {
                note_type_id: record.note_type_id,
                ordinal: record.ordinal,
            });
        }
        self.staged.push(record.clone());
        Ok(())
    }

    fn commit(&mut self) -> Result<(), StoreError> {
        for update in self.staged.drain(..) {
            if let Some(slot) = self.records.iter_mut().find(|r| r.key() == update.key()) {
                *slot = update;
            }
        }
        self.commits += 1;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(id: i64, ord: u32, name: &str) -> TemplateRecord {
        TemplateRecord {
            note_type_id: id,
            ordinal: ord,
            name: name.to_owned(),
            config: vec![],
            mtime_secs: 0,
            usn: 0,
        }
    }

    #[test]
    fn test_fetch_filters_by_name() {
        let mut store = MemoryStore::new(vec![
            record(1, 0, "Recognition "),
            record(1, 1, "Writing"),
            record(2, 0, "Recognition"),
        ]);
        let names: Vec<_> = store
            .fetch_templates(&["Recognition ", "Writing"])
            .unwrap()
            .into_iter()
            .map(|r| r.key())
            .collect();
        assert_eq!(names, [(1, 0), (1, 1)]);
    }

    #[test]
    fn test_updates_visible_after_commit() {
        let mut store = MemoryStore::new(vec![record(1, 0, "Writing")]);
        let mut updated = record(1, 0, "Writing");
        updated.usn = 7;
        store.persist_template(&updated).unwrap();
        assert_eq!(store.get(1, 0).unwrap().usn, 0);
        store.commit().unwrap();
        assert_eq!(store.get(1, 0).unwrap().usn, 7);
        assert_eq!(store.commits(), 1);
    }

    #[test]
    fn test_persist_unknown_record() {
        let mut store = MemoryStore::default();
        let err = store.persist_template(&record(9, 3, "x")).unwrap_err();
        assert!(matches!(
            err,
            StoreError::NotFound {
                note_type_id: 9,
                ordinal: 3
            }
        ));
    }
}
