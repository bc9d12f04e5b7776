//! Structured log hooks for the scanner.
//!
//! With the `tracing` feature disabled every hook is an empty inline function,
//! so the scanner pays nothing for them. Token output is identical either way.

#[cfg(feature = "tracing")]
use tracing::{debug, trace};

use crate::{error::ScanError, scanner::State, token::Token};

#[inline]
pub(crate) fn state_entered(state: State, offset: usize) {
    #[cfg(feature = "tracing")]
    trace!(target: "wikiword::scanner", ?state, offset, "state entered");
    #[cfg(not(feature = "tracing"))]
    let _ = (state, offset);
}

#[inline]
pub(crate) fn token_emitted(token: &Token<'_>, offset: usize) {
    #[cfg(feature = "tracing")]
    trace!(
        target: "wikiword::scanner",
        kind = %token.kind(),
        value = ?token.as_bstr(),
        offset,
        "token emitted"
    );
    #[cfg(not(feature = "tracing"))]
    let _ = (token, offset);
}

#[inline]
pub(crate) fn expansion_stopped(error: &ScanError, written: usize) {
    #[cfg(feature = "tracing")]
    debug!(
        target: "wikiword::expand",
        %error,
        written,
        "expansion stopped on scan error"
    );
    #[cfg(not(feature = "tracing"))]
    let _ = (error, written);
}
