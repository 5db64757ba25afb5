//! Test builders — ergonomic constructors for records, stores and routers.
//!
//! These builders are designed for readability in test assertions, not for
//! production use. They panic on invalid input rather than returning `Result`.

use std::sync::Arc;

use chrono::{DateTime, Duration, TimeZone, Utc};
use stringscope::server::{router, AppState};
use stringscope::{analyze_at, InMemoryStore, StringRecord, StringStore};

/// A fixed instant used as the base for every fixture timestamp.
pub fn epoch() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 1, 15, 10, 0, 0).unwrap()
}

/// Analyse `value` with a deterministic `created_at` offset by `seconds`.
pub fn record_at(value: &str, seconds: i64) -> StringRecord {
    analyze_at(value, epoch() + Duration::seconds(seconds))
}

/// Fluent builder for a populated [`InMemoryStore`].
///
/// ```rust
/// let store = StoreBuilder::new().values(CORPUS_MIXED).build();
/// ```
#[derive(Default)]
pub struct StoreBuilder {
    records: Vec<StringRecord>,
}

impl StoreBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `value`, timestamped one second after the previous record.
    pub fn value(mut self, value: &str) -> Self {
        let offset = self.records.len() as i64;
        self.records.push(record_at(value, offset));
        self
    }

    pub fn values(self, values: &[&str]) -> Self {
        values.iter().fold(self, |b, v| b.value(v))
    }

    pub fn build(self) -> InMemoryStore {
        let store = InMemoryStore::new();
        for record in self.records {
            store.put(record).expect("in-memory put cannot fail");
        }
        store
    }

    pub fn build_shared(self) -> Arc<dyn StringStore> {
        Arc::new(self.build())
    }
}

/// Router over a store pre-populated with `values`.
pub fn app_with(values: &[&str]) -> axum::Router {
    router(AppState::new(StoreBuilder::new().values(values).build_shared()))
}

/// Router over an empty store.
pub fn empty_app() -> axum::Router {
    app_with(&[])
}
