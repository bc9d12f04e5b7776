#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use wikiword::{Kind, State, Tokens, expand};

#[derive(Debug, Arbitrary)]
enum Start {
    Text,
    Link,
    Image,
}

#[derive(Debug, Arbitrary)]
struct Input<'a> {
    start: Start,
    bytes: &'a [u8],
}

fuzz_target!(|input: Input<'_>| {
    let state = match input.start {
        Start::Text => State::Text,
        Start::Link => State::Link,
        Start::Image => State::Image,
    };

    let mut tokens = Tokens::starting_in(input.bytes, state);
    let mut covered = 0usize;
    let mut last = None;
    while let Some(token) = tokens.next() {
        assert!(tokens.queued() < 4, "handoff queue overflow");
        assert!(last.is_none_or(|k: Kind| !k.is_terminal()), "token after terminal");
        assert_eq!(
            &input.bytes[covered..covered + token.value().len()],
            token.value(),
            "tokens must be contiguous"
        );
        covered += token.value().len();
        last = Some(token.kind());
    }

    match last {
        Some(Kind::EndOfInput) => {
            assert_eq!(covered, input.bytes.len());
            assert!(tokens.error().is_none());
        }
        Some(Kind::Error) => assert!(tokens.error().is_some()),
        other => panic!("stream ended on {other:?}"),
    }

    let expanded = expand(input.bytes);
    if Tokens::new(input.bytes).all(|t| t.kind() != Kind::Error) {
        assert!(expanded.len() >= input.bytes.len(), "expansion lost input");
    }
});
