use quickcheck::{QuickCheck, TestResult};
use quickcheck_macros::quickcheck;

use crate::{Kind, Tokens, expand};

fn tests() -> u64 {
    #[cfg(not(miri))]
    let tests = if is_ci::cached() { 10_000 } else { 1_000 };
    #[cfg(miri)]
    let tests = 10;
    tests
}

/// Property: the token values of a scan are contiguous. A clean scan
/// reproduces the input; a failed one covers a prefix of it.
#[test]
fn tokens_reassemble_the_input_quickcheck() {
    #[allow(clippy::needless_pass_by_value)]
    fn prop(input: String) -> bool {
        let bytes = input.as_bytes();
        let tokens: Vec<_> = Tokens::new(bytes).collect();
        let Some(last) = tokens.last() else {
            return false;
        };
        let joined: Vec<u8> = tokens.iter().flat_map(|t| t.value()).copied().collect();
        let terminals = tokens.iter().filter(|t| t.kind().is_terminal()).count();
        terminals == 1
            && match last.kind() {
                Kind::EndOfInput => joined == bytes,
                Kind::Error => bytes.starts_with(&joined),
                _ => false,
            }
    }

    QuickCheck::new()
        .tests(tests())
        .quickcheck(prop as fn(String) -> bool);
}

/// Property: every emitted WikiWord starts with an uppercase letter, holds at
/// least two of them and nothing but word characters.
#[test]
fn wiki_words_are_well_formed_quickcheck() {
    #[allow(clippy::needless_pass_by_value)]
    fn prop(input: String) -> bool {
        Tokens::new(input.as_bytes())
            .filter(|t| t.kind() == Kind::WikiWord)
            .all(|t| {
                let word = std::str::from_utf8(t.value()).unwrap();
                word.chars().next().is_some_and(char::is_uppercase)
                    && word.chars().filter(|c| c.is_uppercase()).count() >= 2
                    && word.chars().all(|c| c.is_alphanumeric() || c == '_')
            })
    }

    QuickCheck::new()
        .tests(tests())
        .quickcheck(prop as fn(String) -> bool);
}

/// Property: text without uppercase letters or brackets expands to itself.
#[test]
fn expansion_leaves_plain_text_alone_quickcheck() {
    #[allow(clippy::needless_pass_by_value)]
    fn prop(input: String) -> TestResult {
        if input.chars().any(|c| c.is_uppercase() || c == '[') {
            return TestResult::discard();
        }
        TestResult::from_bool(expand(input.as_bytes()) == input.as_bytes())
    }

    QuickCheck::new()
        .tests(tests())
        .quickcheck(prop as fn(String) -> TestResult);
}

/// Property: expansion only ever adds bytes, and only around WikiWords.
#[test]
fn expansion_grows_by_the_link_markup_quickcheck() {
    #[allow(clippy::needless_pass_by_value)]
    fn prop(words: Vec<bool>) -> bool {
        let mut input = String::new();
        let mut expected = String::new();
        for (i, is_wiki) in words.iter().enumerate() {
            let word = if *is_wiki { format!("Page{i}Name") } else { format!("word{i}") };
            if *is_wiki {
                expected.push_str(&format!("[{word}](/{word}/)"));
            } else {
                expected.push_str(&word);
            }
            input.push_str(&word);
            input.push(' ');
            expected.push(' ');
        }
        expand(input.as_bytes()) == expected.as_bytes()
    }

    QuickCheck::new()
        .tests(tests())
        .quickcheck(prop as fn(Vec<bool>) -> bool);
}

/// Property: a trailing `!` with nothing after it stays in the text token.
#[quickcheck]
#[allow(clippy::needless_pass_by_value)]
fn trailing_bang_is_text(prefix: String) -> TestResult {
    if prefix.chars().any(|c| c.is_uppercase() || c == '[') {
        return TestResult::discard();
    }
    let input = format!("{prefix}!");
    let tokens: Vec<_> = Tokens::new(input.as_bytes()).collect();
    TestResult::from_bool(
        tokens.len() == 2
            && tokens[0].kind() == Kind::Text
            && tokens[0].value() == input.as_bytes()
            && tokens[1].kind() == Kind::EndOfInput,
    )
}
