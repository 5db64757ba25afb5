//! Request and response bodies for the HTTP API.

use serde::{Deserialize, Serialize};
use stringscope_core::{PredicateSet, StringRecord};
use thiserror::Error;

/// Query parameters accepted by `GET /strings`.
///
/// `contains_character` is taken as a string so that multi-character input
/// can be rejected with a readable message instead of a generic parse error.
#[derive(Debug, Default, Deserialize)]
pub struct FilterParams {
    pub is_palindrome: Option<bool>,
    pub min_length: Option<usize>,
    pub max_length: Option<usize>,
    pub word_count: Option<usize>,
    pub contains_character: Option<String>,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum FilterError {
    #[error("contains_character must be exactly one character, got {0:?}")]
    ContainsCharacter(String),
    #[error("min_length ({min}) cannot exceed max_length ({max})")]
    LengthRange { min: usize, max: usize },
}

impl TryFrom<FilterParams> for PredicateSet {
    type Error = FilterError;

    fn try_from(params: FilterParams) -> Result<Self, Self::Error> {
        let contains_character = match params.contains_character {
            None => None,
            Some(raw) => {
                let mut chars = raw.chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) => Some(c),
                    _ => return Err(FilterError::ContainsCharacter(raw)),
                }
            }
        };
        if let (Some(min), Some(max)) = (params.min_length, params.max_length) {
            if min > max {
                return Err(FilterError::LengthRange { min, max });
            }
        }
        Ok(PredicateSet {
            is_palindrome: params.is_palindrome,
            min_length: params.min_length,
            max_length: params.max_length,
            word_count: params.word_count,
            contains_character,
        })
    }
}

/// Query parameters accepted by `GET /strings/filter-by-natural-language`.
#[derive(Debug, Default, Deserialize)]
pub struct NaturalLanguageParams {
    pub query: Option<String>,
}

/// Body of `GET /strings`.
#[derive(Debug, Serialize, Deserialize)]
pub struct ListResponse {
    pub data: Vec<StringRecord>,
    pub count: usize,
    pub filters_applied: PredicateSet,
}

/// Body of `GET /strings/filter-by-natural-language`.
#[derive(Debug, Serialize, Deserialize)]
pub struct NaturalLanguageResponse {
    pub data: Vec<StringRecord>,
    pub count: usize,
    pub interpreted_query: InterpretedQuery,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct InterpretedQuery {
    pub original: String,
    /// Empty when no phrase rule fired; the result then holds every record.
    pub parsed_filters: PredicateSet,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn params_convert_to_predicate() {
        let params = FilterParams {
            is_palindrome: Some(true),
            min_length: Some(2),
            contains_character: Some("é".to_string()),
            ..Default::default()
        };
        assert_eq!(
            PredicateSet::try_from(params).unwrap(),
            PredicateSet::new().palindrome(true).min_length(2).contains('é')
        );
    }

    #[test]
    fn multi_character_contains_is_rejected() {
        let params = FilterParams {
            contains_character: Some("ab".to_string()),
            ..Default::default()
        };
        assert_eq!(
            PredicateSet::try_from(params).unwrap_err(),
            FilterError::ContainsCharacter("ab".to_string())
        );

        let empty = FilterParams {
            contains_character: Some(String::new()),
            ..Default::default()
        };
        assert!(PredicateSet::try_from(empty).is_err());
    }

    #[test]
    fn inverted_length_range_is_rejected() {
        let params = FilterParams {
            min_length: Some(5),
            max_length: Some(2),
            ..Default::default()
        };
        assert_eq!(
            PredicateSet::try_from(params).unwrap_err(),
            FilterError::LengthRange { min: 5, max: 2 }
        );
    }
}
