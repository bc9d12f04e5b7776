//! Expansion of WikiWords into markdown links.

use crate::{
    options::ExpandOptions,
    pipeline::Tokens,
    token::{Kind, Token},
    trace,
};

/// Rewrites every WikiWord in `input` as `[W](/W/)`.
///
/// Text, links and images are copied through unchanged. If the scan hits a
/// malformed bracket construct or invalid UTF‑8, expansion stops there and
/// everything produced up to that point is returned.
///
/// ```rust
/// assert_eq!(
///     wikiword::expand(b"There is only\nOneWikiWord in this text."),
///     b"There is only\n[OneWikiWord](/OneWikiWord/) in this text."
/// );
/// ```
#[must_use]
pub fn expand(input: &[u8]) -> Vec<u8> {
    expand_with(input, &ExpandOptions::default())
}

/// Like [`expand`], with a configurable link target.
#[must_use]
pub fn expand_with(input: &[u8], options: &ExpandOptions) -> Vec<u8> {
    let mut out = Vec::with_capacity(input.len());
    let mut tokens = Tokens::new(input);
    for token in tokens.by_ref() {
        if !write_token(&mut out, &token, options) {
            break;
        }
    }
    debug_assert!(tokens.is_finished(), "expansion must drain the scan");
    if let Some(error) = tokens.error() {
        trace::expansion_stopped(error, out.len());
    }
    out
}

/// Appends the markup for one token; returns `false` on a terminal token.
fn write_token(out: &mut Vec<u8>, token: &Token<'_>, options: &ExpandOptions) -> bool {
    match token.kind() {
        Kind::Text | Kind::Link | Kind::Image => out.extend_from_slice(token.value()),
        Kind::WikiWord => {
            let word = token.value();
            out.push(b'[');
            out.extend_from_slice(word);
            out.extend_from_slice(b"](");
            out.extend_from_slice(options.link_prefix.as_bytes());
            out.extend_from_slice(word);
            out.extend_from_slice(options.link_suffix.as_bytes());
            out.push(b')');
        }
        Kind::Error | Kind::EndOfInput => return false,
    }
    true
}
