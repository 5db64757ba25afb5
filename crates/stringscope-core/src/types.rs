//! Core types for stringscope-core.
//!
//! This module defines the fundamental data structures shared across all
//! layers: the analysed [`StringRecord`], its derived [`PropertySet`], and the
//! [`PredicateSet`] used to select records.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// An analysed string as persisted by the store and returned over the API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StringRecord {
    /// SHA-256 hex digest of `value`. Unique key of the record.
    pub id: String,
    /// Original input, byte-for-byte as received.
    pub value: String,
    pub properties: PropertySet,
    /// Assigned once, when the value is first analysed.
    pub created_at: chrono::DateTime<chrono::Utc>,
}

/// Measurements derived from a string by the analyzer.
///
/// Field names on the wire follow the public record shape, so `content_hash`
/// serialises as `sha256_hash` and `character_frequency` as
/// `character_frequency_map`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PropertySet {
    /// Number of `char`s, not bytes.
    pub length: usize,
    pub is_palindrome: bool,
    pub unique_characters: usize,
    pub word_count: usize,
    #[serde(rename = "sha256_hash")]
    pub content_hash: String,
    /// Occurrence count per distinct character. Counts are always >= 1 and sum
    /// to `length`.
    #[serde(rename = "character_frequency_map")]
    pub character_frequency: BTreeMap<char, usize>,
}

/// Optional filter criteria, combined by logical AND.
///
/// `None` means "no constraint on this axis". Absent fields are skipped on
/// serialisation so the empty set renders as `{}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PredicateSet {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_palindrome: Option<bool>,
    /// Inclusive lower bound on `length`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_length: Option<usize>,
    /// Inclusive upper bound on `length`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_length: Option<usize>,
    /// Exact word count.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub word_count: Option<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contains_character: Option<char>,
}

impl PredicateSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn palindrome(mut self, is_palindrome: bool) -> Self {
        self.is_palindrome = Some(is_palindrome);
        self
    }

    pub fn min_length(mut self, min_length: usize) -> Self {
        self.min_length = Some(min_length);
        self
    }

    pub fn max_length(mut self, max_length: usize) -> Self {
        self.max_length = Some(max_length);
        self
    }

    pub fn word_count(mut self, word_count: usize) -> Self {
        self.word_count = Some(word_count);
        self
    }

    pub fn contains(mut self, c: char) -> Self {
        self.contains_character = Some(c);
        self
    }

    /// True when no field is set, i.e. the set matches every record.
    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }

    /// Shorthand for [`crate::filter::matches`].
    pub fn matches(&self, properties: &PropertySet) -> bool {
        crate::filter::matches(properties, self)
    }
}
