//! stringscope — content-addressed string analysis with structured and
//! natural-language filtering.
//!
//! This crate re-exports the engine and the HTTP layer so that integration
//! tests and the binary import them from one place.
//!
//! # Architecture
//!
//! ```text
//! POST /strings ──► Analyzer ──► StringStore
//! GET  /strings ──────────────► PredicateSet ──► FilterEvaluator
//! NL query ──► Translator ────► PredicateSet ──┘
//! ```

use std::sync::Arc;

pub use stringscope_core::{
    analyze, analyze_at, analyzer, config, content_hash, error, filter, matches, store,
    translate, translator, types, InMemoryStore, PredicateSet, PropertySet, PutOutcome,
    StoreError, StringRecord, StringStore,
};
pub use stringscope_server as server;

use stringscope_core::config::StorageConfig;

/// Open the store described by `[storage]`: snapshot-backed when a path is
/// configured, purely in-memory otherwise.
pub fn open_store(storage: &StorageConfig) -> Result<Arc<dyn StringStore>, StoreError> {
    let store = match &storage.snapshot_path {
        Some(path) => InMemoryStore::open(path)?,
        None => InMemoryStore::new(),
    };
    Ok(Arc::new(store))
}
