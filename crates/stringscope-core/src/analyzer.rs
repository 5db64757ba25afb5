//! Analyzer — derives a [`PropertySet`] and content-addressed id from a string.
//!
//! Every function here is total over `&str` and free of side effects. The only
//! impure input is the clock read by [`analyze`]; use [`analyze_at`] when the
//! timestamp must be controlled.

use crate::types::{PropertySet, StringRecord};
use chrono::{DateTime, Utc};
use sha2::{Digest, Sha256};
use std::collections::BTreeMap;

/// Analyse `value` and stamp the record with the current UTC time.
pub fn analyze(value: &str) -> StringRecord {
    analyze_at(value, Utc::now())
}

/// Analyse `value` with an explicit `created_at`.
pub fn analyze_at(value: &str, created_at: DateTime<Utc>) -> StringRecord {
    let properties = properties(value);
    StringRecord {
        id: properties.content_hash.clone(),
        value: value.to_string(),
        properties,
        created_at,
    }
}

/// Compute the property set of `value`.
pub fn properties(value: &str) -> PropertySet {
    let character_frequency = character_frequency(value);
    PropertySet {
        length: character_frequency.values().sum(),
        is_palindrome: is_palindrome(value),
        unique_characters: character_frequency.len(),
        word_count: word_count(value),
        content_hash: content_hash(value),
        character_frequency,
    }
}

/// Lowercase hex SHA-256 of the UTF-8 bytes of `value`.
pub fn content_hash(value: &str) -> String {
    hex::encode(Sha256::digest(value.as_bytes()))
}

/// Case-folded palindrome check. Whitespace and punctuation are significant.
pub fn is_palindrome(value: &str) -> bool {
    let folded: Vec<char> = value.chars().flat_map(char::to_lowercase).collect();
    folded.iter().eq(folded.iter().rev())
}

/// Number of non-empty whitespace-separated tokens.
pub fn word_count(value: &str) -> usize {
    value.split_whitespace().count()
}

pub fn character_frequency(value: &str) -> BTreeMap<char, usize> {
    let mut freq = BTreeMap::new();
    for c in value.chars() {
        *freq.entry(c).or_insert(0) += 1;
    }
    freq
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn empty_string() {
        let p = properties("");
        assert_eq!(p.length, 0);
        assert_eq!(p.word_count, 0);
        assert_eq!(p.unique_characters, 0);
        assert!(p.is_palindrome);
        assert!(p.character_frequency.is_empty());
    }

    #[test]
    fn known_sha256_digest() {
        assert_eq!(
            content_hash("hello"),
            "2cf24dba5fb0a30e26e83b2ac5b9e29e1b161e5c1fa7425e73043362938b9824"
        );
        assert_eq!(
            content_hash(""),
            "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
        );
    }

    #[test]
    fn id_matches_content_hash() {
        let record = analyze("racecar");
        assert_eq!(record.id, record.properties.content_hash);
        assert_eq!(record.id, content_hash("racecar"));
    }

    #[test]
    fn length_counts_chars_not_bytes() {
        let p = properties("héllo");
        assert_eq!(p.length, 5);
        assert_eq!("héllo".len(), 6);
    }

    #[test]
    fn value_is_stored_untrimmed() {
        let record = analyze("  padded  ");
        assert_eq!(record.value, "  padded  ");
        assert_eq!(record.properties.length, 10);
        assert_eq!(record.properties.word_count, 1);
    }

    #[test]
    fn unique_characters_are_case_sensitive() {
        assert_eq!(properties("aA").unique_characters, 2);
        assert_eq!(properties("a a").unique_characters, 2);
    }

    #[test]
    fn palindrome_policy() {
        assert!(is_palindrome(""));
        assert!(is_palindrome("a"));
        assert!(is_palindrome("aba"));
        assert!(!is_palindrome("ab"));
        assert!(is_palindrome("Aba"));
        assert!(is_palindrome("ab ba"));
        assert!(!is_palindrome("A man a plan"));
        assert!(!is_palindrome("race car"));
    }

    #[test]
    fn frequency_tally() {
        let freq = character_frequency("hello");
        assert_eq!(freq.get(&'l'), Some(&2));
        assert_eq!(freq.get(&'h'), Some(&1));
        assert_eq!(freq.get(&'z'), None);
    }
}
