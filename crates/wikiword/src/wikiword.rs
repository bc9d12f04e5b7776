//! Whole-string and whole-text WikiWord matching.
//!
//! These helpers use a regular expression, not the scanner. They agree with
//! the scanner on ordinary prose but may differ at edges: the pattern matches
//! ASCII letters only and ignores what precedes a match, so `fooBarBaz`
//! contains the match `BarBaz` here while the scanner sees plain text.

use std::{collections::BTreeSet, sync::LazyLock};

use regex::{Regex, bytes};

/// Two or more groups, each an uppercase run followed by word characters.
const WIKI_WORD: &str = "([A-Z]+[A-Za-z0-9_]*){2,}";

static WIKI_WORD_ONLY_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!("^(?:{WIKI_WORD})$")).expect("anchored WikiWord pattern compiles")
});

static WIKI_WORD_RE: LazyLock<bytes::Regex> = LazyLock::new(|| {
    bytes::Regex::new(WIKI_WORD).expect("WikiWord pattern compiles")
});

/// Returns `true` if the whole of `candidate` is a WikiWord.
///
/// Used to validate page names.
///
/// ```rust
/// assert!(wikiword::is_wiki_word("FrontPage"));
/// assert!(!wikiword::is_wiki_word("Frontpage"));
/// assert!(!wikiword::is_wiki_word("see FrontPage"));
/// ```
#[must_use]
pub fn is_wiki_word(candidate: &str) -> bool {
    WIKI_WORD_ONLY_RE.is_match(candidate)
}

/// Collects every distinct WikiWord-shaped substring of `text`.
///
/// Matches are leftmost and non-overlapping. The set borrows from `text`.
#[must_use]
pub fn extract_wiki_words(text: &[u8]) -> BTreeSet<&[u8]> {
    WIKI_WORD_RE
        .find_iter(text)
        .map(|m| m.as_bytes())
        .collect()
}
