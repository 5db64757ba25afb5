//! Static string corpora used across harnesses.

/// Single-word palindromes in assorted cases.
pub const CORPUS_PALINDROMES: &[&str] = &["racecar", "level", "noon", "Kayak", "a", "Abba"];

/// Multi-word phrases, none of which are palindromes under case folding.
pub const CORPUS_PHRASES: &[&str] = &[
    "hello world",
    "the quick brown fox",
    "A man a plan",
    "zebra crossing ahead",
    "one two  three",
];

/// A mixed corpus combining palindromes, phrases and odd whitespace.
pub const CORPUS_MIXED: &[&str] = &[
    "racecar",
    "hello world",
    "noon",
    "zebra",
    "ab ba",
    "the quick brown fox jumps",
    "  padded  ",
    "Madam",
    "xyz",
    "aaaaaaaaaaaa",
];

/// Values whose char count differs from their byte length.
pub const CORPUS_UNICODE: &[&str] = &["héllo", "日本語", "ñandú", "👍👍", "άλφα βήτα"];
