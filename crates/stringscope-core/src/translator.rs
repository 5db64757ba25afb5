//! Natural-language translator — maps free-text queries onto a [`PredicateSet`].
//!
//! The translator is an ordered table of independent phrase rules evaluated
//! against the normalised query (lower-cased, number words replaced by
//! digits). Each rule contributes at most one [`Clause`]; clauses are merged
//! into the result in rule order and the first clause to claim a field wins.
//!
//! | Phrase                                        | Clause                    |
//! |-----------------------------------------------|---------------------------|
//! | `palindrome`, `palindromic`                   | `is_palindrome = true`    |
//! | `single word`, `one word`                     | `word_count = 1`          |
//! | `exactly N words`                             | `word_count = N`          |
//! | `longer than N`                               | `min_length = N + 1`      |
//! | `at least N characters`                       | `min_length = N`          |
//! | `shorter than N`                              | `max_length = N - 1`      |
//! | `at most N characters`                        | `max_length = N`          |
//! | `containing the letter X`, `contains X`       | `contains_character = X`  |
//! | `first vowel`                                 | `contains_character = 'a'`|
//!
//! A query that fires no rule yields the empty set, never an error.

use crate::types::PredicateSet;
use regex::{Captures, Regex};
use std::sync::LazyLock;

static NUMBER_WORDS: phf::Map<&'static str, u8> = phf::phf_map! {
    "zero" => 0,
    "one" => 1,
    "two" => 2,
    "three" => 3,
    "four" => 4,
    "five" => 5,
    "six" => 6,
    "seven" => 7,
    "eight" => 8,
    "nine" => 9,
    "ten" => 10,
    "eleven" => 11,
    "twelve" => 12,
    "thirteen" => 13,
    "fourteen" => 14,
    "fifteen" => 15,
    "sixteen" => 16,
    "seventeen" => 17,
    "eighteen" => 18,
    "nineteen" => 19,
    "twenty" => 20,
};

static NUMBER_WORD_RE: LazyLock<Regex> = LazyLock::new(|| {
    let mut words: Vec<&str> = NUMBER_WORDS.keys().copied().collect();
    // Longest first so "seventeen" is not shadowed by "seven".
    words.sort_by_key(|w| std::cmp::Reverse(w.len()));
    Regex::new(&format!(r"\b(?:{})\b", words.join("|"))).expect("number-word regex must compile")
});

static RULES: LazyLock<Vec<PhraseRule>> = LazyLock::new(build_rules);

/// A single-field contribution produced by one phrase rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Clause {
    Palindrome(bool),
    WordCount(usize),
    MinLength(usize),
    MaxLength(usize),
    Contains(char),
}

impl Clause {
    /// Apply to `set` unless the field is already claimed. Returns whether the
    /// clause was applied.
    fn merge_into(self, set: &mut PredicateSet) -> bool {
        fn claim<T>(slot: &mut Option<T>, value: T) -> bool {
            if slot.is_some() {
                return false;
            }
            *slot = Some(value);
            true
        }
        match self {
            Clause::Palindrome(v) => claim(&mut set.is_palindrome, v),
            Clause::WordCount(v) => claim(&mut set.word_count, v),
            Clause::MinLength(v) => claim(&mut set.min_length, v),
            Clause::MaxLength(v) => claim(&mut set.max_length, v),
            Clause::Contains(v) => claim(&mut set.contains_character, v),
        }
    }
}

struct PhraseRule {
    name: &'static str,
    regex: Regex,
    extract: fn(&Captures) -> Option<Clause>,
}

fn rule(name: &'static str, pattern: &str, extract: fn(&Captures) -> Option<Clause>) -> PhraseRule {
    PhraseRule {
        name,
        regex: Regex::new(pattern).expect("phrase rule regex must compile"),
        extract,
    }
}

fn number(caps: &Captures) -> Option<usize> {
    caps.get(1)?.as_str().parse().ok()
}

fn letter(caps: &Captures) -> Option<char> {
    caps.get(1)?.as_str().chars().next()
}

fn build_rules() -> Vec<PhraseRule> {
    vec![
        rule("palindrome", r"palindrom(?:e|ic)", |_| {
            Some(Clause::Palindrome(true))
        }),
        rule("single_word", r"\b(?:single|one|1)\s+word\b", |_| {
            Some(Clause::WordCount(1))
        }),
        rule("exact_words", r"\bexactly\s+(\d+)\s+words?\b", |caps| {
            number(caps).map(Clause::WordCount)
        }),
        rule("longer_than", r"\blonger\s+than\s+(\d+)", |caps| {
            number(caps)?.checked_add(1).map(Clause::MinLength)
        }),
        rule(
            "at_least",
            r"\bat\s+least\s+(\d+)\s+char(?:acter)?s?\b",
            |caps| number(caps).map(Clause::MinLength),
        ),
        rule("shorter_than", r"\bshorter\s+than\s+(\d+)", |caps| {
            number(caps)?.checked_sub(1).map(Clause::MaxLength)
        }),
        rule(
            "at_most",
            r"\bat\s+most\s+(\d+)\s+char(?:acter)?s?\b",
            |caps| number(caps).map(Clause::MaxLength),
        ),
        rule(
            "containing_letter",
            r"\bcontain(?:s|ing)?\s+the\s+(?:letter|character)\s+(\p{Alphabetic})",
            |caps| letter(caps).map(Clause::Contains),
        ),
        rule(
            "contains",
            // The letter must close the clause, so "containing a space" is skipped.
            r"\bcontain(?:s|ing)?\s+(?:the\s+)?(\p{Alphabetic})(?:\s*$|\s*[,.;!?]|\s+(?:and|or)\b)",
            |caps| letter(caps).map(Clause::Contains),
        ),
        rule("first_vowel", r"\bfirst\s+vowel\b", |_| {
            Some(Clause::Contains('a'))
        }),
    ]
}

/// Lower-case `query` and replace whole-word English numbers with digits.
pub fn normalize(query: &str) -> String {
    let lowered = query.to_lowercase();
    NUMBER_WORD_RE
        .replace_all(&lowered, |caps: &Captures| {
            NUMBER_WORDS
                .get(&caps[0])
                .map(u8::to_string)
                .unwrap_or_else(|| caps[0].to_string())
        })
        .into_owned()
}

/// Translate a free-text query into a [`PredicateSet`].
pub fn translate(query: &str) -> PredicateSet {
    let text = normalize(query);
    let mut set = PredicateSet::default();

    for rule in RULES.iter() {
        let Some(clause) = rule.regex.captures(&text).and_then(|caps| (rule.extract)(&caps))
        else {
            continue;
        };
        if clause.merge_into(&mut set) {
            tracing::debug!(rule = rule.name, ?clause, "phrase rule applied");
        } else {
            tracing::debug!(rule = rule.name, ?clause, "phrase rule shadowed by earlier rule");
        }
    }

    set
}
