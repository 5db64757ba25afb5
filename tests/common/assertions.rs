//! Domain-specific assertion macros for stringscope harnesses.
//!
//! These wrap `pretty_assertions` and add failure messages that make it clear
//! *which* record broke *which* predicate.

/// Assert that every record in `$records` satisfies `$predicate`.
#[macro_export]
macro_rules! assert_all_match {
    ($records:expr, $predicate:expr) => {{
        let predicate: &stringscope::PredicateSet = &$predicate;
        for record in $records.iter() {
            let record: &stringscope::StringRecord = record;
            if !stringscope::matches(&record.properties, predicate) {
                panic!(
                    "assert_all_match! failed:\n  value:     {:?}\n  predicate: {:?}\n  properties: {:?}",
                    record.value, predicate, record.properties
                );
            }
        }
    }};
}

/// Assert that a list of records holds exactly `$values`, ignoring order.
#[macro_export]
macro_rules! assert_values {
    ($records:expr, $values:expr) => {{
        let mut actual: Vec<String> = $records.iter().map(|r| r.value.clone()).collect();
        let mut expected: Vec<String> = $values.iter().map(|v| v.to_string()).collect();
        actual.sort();
        expected.sort();
        pretty_assertions::assert_eq!(actual, expected, "record values differ");
    }};
}

/// Assert the frequency-map invariants for one analysed value: counts sum to
/// `length`, keys are exactly the distinct chars, and no count is zero.
pub fn assert_frequency_invariants(value: &str) {
    let props = stringscope::analyzer::properties(value);
    let sum: usize = props.character_frequency.values().sum();
    assert_eq!(sum, props.length, "frequency sum != length for {value:?}");

    let distinct: std::collections::BTreeSet<char> = value.chars().collect();
    let keys: std::collections::BTreeSet<char> = props.character_frequency.keys().copied().collect();
    assert_eq!(keys, distinct, "frequency keys != distinct chars for {value:?}");
    assert_eq!(props.unique_characters, distinct.len());
    assert!(
        props.character_frequency.values().all(|&n| n > 0),
        "zero count in frequency map for {value:?}"
    );
}
