//! stringscope-core — string analysis and filtering engine.
//!
//! This crate exposes the analysis pipeline layers as public modules, plus the
//! shared types used across all layers.
//!
//! # Architecture
//!
//! ```text
//! value ──► Analyzer ──► Store
//!                          ▲
//! query ──► Translator ──► PredicateSet ──► FilterEvaluator
//! ```
//!
//! Everything except [`store`] is pure: no I/O, no shared mutable state.

pub mod analyzer;
pub mod config;
pub mod error;
pub mod filter;
pub mod store;
pub mod translator;
pub mod types;

pub use analyzer::{analyze, analyze_at, content_hash};
pub use error::StoreError;
pub use filter::matches;
pub use store::{InMemoryStore, PutOutcome, StringStore};
pub use translator::translate;
pub use types::{PredicateSet, PropertySet, StringRecord};
