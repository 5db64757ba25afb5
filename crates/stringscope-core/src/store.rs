//! Store — keeps analysed [`StringRecord`]s keyed by their content hash.
//!
//! [`StringStore`] is the seam the HTTP layer talks to. [`InMemoryStore`] is
//! the bundled implementation: a `RwLock`-guarded map, optionally mirrored to
//! a JSON snapshot file after every mutation.

use crate::analyzer::{analyze, content_hash};
use crate::error::StoreError;
use crate::filter::matches;
use crate::types::{PredicateSet, StringRecord};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::RwLock;

/// Result of inserting a record whose id may already be present.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PutOutcome {
    /// The record was new and has been stored.
    Created(StringRecord),
    /// A record with the same id already existed; it is returned unchanged.
    Existing(StringRecord),
}

impl PutOutcome {
    pub fn is_created(&self) -> bool {
        matches!(self, PutOutcome::Created(_))
    }

    pub fn record(&self) -> &StringRecord {
        match self {
            PutOutcome::Created(r) | PutOutcome::Existing(r) => r,
        }
    }

    pub fn into_record(self) -> StringRecord {
        match self {
            PutOutcome::Created(r) | PutOutcome::Existing(r) => r,
        }
    }
}

/// Storage collaborator for analysed strings.
///
/// Lookup keys accept either a record id or the original value.
pub trait StringStore: Send + Sync {
    /// Insert `record` unless its id is already stored.
    fn put(&self, record: StringRecord) -> Result<PutOutcome, StoreError>;

    fn get(&self, key: &str) -> Result<StringRecord, StoreError>;

    /// Remove and return the record. Irreversible.
    fn delete(&self, key: &str) -> Result<StringRecord, StoreError>;

    /// Every stored record matching `predicate`, oldest first.
    fn query(&self, predicate: &PredicateSet) -> Result<Vec<StringRecord>, StoreError>;

    fn len(&self) -> Result<usize, StoreError>;

    fn is_empty(&self) -> Result<bool, StoreError> {
        Ok(self.len()? == 0)
    }

    /// Analyse `value` and store it, or return the record already stored for it.
    fn create(&self, value: &str) -> Result<PutOutcome, StoreError> {
        self.put(analyze(value))
    }
}

// ---------------------------------------------------------------------------
// InMemoryStore
// ---------------------------------------------------------------------------

/// Map-backed [`StringStore`].
///
/// With a snapshot path, every mutation rewrites the snapshot while the write
/// lock is held, and a failed write rolls the mutation back. Those writes are
/// blocking `std::fs` calls; async callers should go through
/// `tokio::task::spawn_blocking`.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    records: RwLock<HashMap<String, StringRecord>>,
    snapshot: Option<PathBuf>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Open a store mirrored to `path`. Existing snapshot contents are loaded;
    /// a missing file starts an empty store and is created on first write.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let path = path.into();
        let records = if path.exists() {
            let bytes = std::fs::read(&path)?;
            let list: Vec<StringRecord> = serde_json::from_slice(&bytes)?;
            list.into_iter().map(|r| (r.id.clone(), r)).collect()
        } else {
            HashMap::new()
        };
        tracing::info!(path = %path.display(), records = records.len(), "opened snapshot store");
        Ok(Self {
            records: RwLock::new(records),
            snapshot: Some(path),
        })
    }

    pub fn snapshot_path(&self) -> Option<&Path> {
        self.snapshot.as_deref()
    }

    fn persist(&self, records: &HashMap<String, StringRecord>) -> Result<(), StoreError> {
        let Some(path) = &self.snapshot else {
            return Ok(());
        };
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }
        let mut list: Vec<&StringRecord> = records.values().collect();
        list.sort_by(|a, b| (a.created_at, &a.id).cmp(&(b.created_at, &b.id)));

        // Write-then-rename so a crash never leaves a truncated snapshot.
        let tmp = path.with_extension("json.tmp");
        std::fs::write(&tmp, serde_json::to_vec_pretty(&list)?)?;
        std::fs::rename(&tmp, path)?;
        Ok(())
    }
}

/// Map a lookup key to a stored record id. The key is read as a value first,
/// then as an id, so a stored value always shadows an id that spells it.
fn resolve(records: &HashMap<String, StringRecord>, key: &str) -> Option<String> {
    let by_value = content_hash(key);
    if records.contains_key(&by_value) {
        Some(by_value)
    } else if records.contains_key(key) {
        Some(key.to_string())
    } else {
        None
    }
}

impl StringStore for InMemoryStore {
    fn put(&self, record: StringRecord) -> Result<PutOutcome, StoreError> {
        let mut records = self.records.write().map_err(|_| StoreError::Poisoned)?;
        if let Some(existing) = records.get(&record.id) {
            tracing::debug!(id = %record.id, "string already stored");
            return Ok(PutOutcome::Existing(existing.clone()));
        }
        records.insert(record.id.clone(), record.clone());
        if let Err(err) = self.persist(&records) {
            records.remove(&record.id);
            return Err(err);
        }
        tracing::info!(id = %record.id, length = record.properties.length, "stored string");
        Ok(PutOutcome::Created(record))
    }

    fn get(&self, key: &str) -> Result<StringRecord, StoreError> {
        let records = self.records.read().map_err(|_| StoreError::Poisoned)?;
        resolve(&records, key)
            .and_then(|id| records.get(&id).cloned())
            .ok_or_else(|| StoreError::not_found(key))
    }

    fn delete(&self, key: &str) -> Result<StringRecord, StoreError> {
        let mut records = self.records.write().map_err(|_| StoreError::Poisoned)?;
        let id = resolve(&records, key).ok_or_else(|| StoreError::not_found(key))?;
        let removed = records.remove(&id).ok_or_else(|| StoreError::not_found(key))?;
        if let Err(err) = self.persist(&records) {
            records.insert(id, removed);
            return Err(err);
        }
        tracing::info!(id = %id, "deleted string");
        Ok(removed)
    }

    fn query(&self, predicate: &PredicateSet) -> Result<Vec<StringRecord>, StoreError> {
        let records = self.records.read().map_err(|_| StoreError::Poisoned)?;
        let mut hits: Vec<StringRecord> = records
            .values()
            .filter(|r| matches(&r.properties, predicate))
            .cloned()
            .collect();
        hits.sort_by(|a, b| (a.created_at, &a.id).cmp(&(b.created_at, &b.id)));
        tracing::debug!(?predicate, hits = hits.len(), "query evaluated");
        Ok(hits)
    }

    fn len(&self) -> Result<usize, StoreError> {
        Ok(self.records.read().map_err(|_| StoreError::Poisoned)?.len())
    }
}
