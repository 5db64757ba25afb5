//! Filter evaluation — decides whether a [`PropertySet`] satisfies a
//! [`PredicateSet`].

use crate::types::{PredicateSet, PropertySet};

/// Logical AND of every predicate field that is present. An empty set matches
/// everything.
pub fn matches(properties: &PropertySet, predicate: &PredicateSet) -> bool {
    predicate
        .is_palindrome
        .is_none_or(|want| properties.is_palindrome == want)
        && predicate
            .min_length
            .is_none_or(|min| properties.length >= min)
        && predicate
            .max_length
            .is_none_or(|max| properties.length <= max)
        && predicate
            .word_count
            .is_none_or(|n| properties.word_count == n)
        && predicate
            .contains_character
            .is_none_or(|c| properties.character_frequency.get(&c).is_some_and(|&n| n > 0))
}
