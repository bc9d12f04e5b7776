//! Token pipeline: a pull-based handoff between the scanner and its consumer.
//!
//! The scanner is the single producer and the caller of [`Tokens::next`] the
//! single consumer. Tokens travel through a small FIFO queue. The scanner only
//! runs a state transition when the consumer asks for a token and the queue is
//! empty, and one transition emits at most three tokens, so the queue never
//! grows past [`QUEUE_CAPACITY`]. Dropping a [`Tokens`] mid-stream leaves
//! nothing suspended behind it.

use core::iter::FusedIterator;
use std::collections::VecDeque;

use crate::{
    error::ScanError,
    scanner::{Scanner, State},
    token::Token,
};

/// Fixed capacity of the handoff queue.
pub(crate) const QUEUE_CAPACITY: usize = 4;

#[derive(Debug, Default)]
pub(crate) struct Handoff<'src> {
    queue: VecDeque<Token<'src>>,
}

impl<'src> Handoff<'src> {
    fn with_capacity() -> Self {
        Self {
            queue: VecDeque::with_capacity(QUEUE_CAPACITY),
        }
    }

    pub(crate) fn push(&mut self, token: Token<'src>) {
        debug_assert!(
            self.queue.len() < QUEUE_CAPACITY,
            "handoff queue overflow: a single transition emitted too many tokens"
        );
        self.queue.push_back(token);
    }

    fn pop(&mut self) -> Option<Token<'src>> {
        self.queue.pop_front()
    }

    fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    #[cfg(test)]
    pub(crate) fn drain(&mut self) -> std::collections::vec_deque::Drain<'_, Token<'src>> {
        self.queue.drain(..)
    }
}

/// An ordered stream of [`Token`]s scanned lazily from a byte buffer.
///
/// The stream ends with exactly one terminal token, either
/// [`Kind::EndOfInput`](crate::Kind::EndOfInput) or
/// [`Kind::Error`](crate::Kind::Error), and yields `None` forever after.
///
/// ```rust
/// use wikiword::{Kind, Tokens};
///
/// let kinds: Vec<Kind> = Tokens::new(b"see FrontPage").map(|t| t.kind()).collect();
/// assert_eq!(kinds, [Kind::Text, Kind::WikiWord, Kind::EndOfInput]);
/// ```
#[derive(Debug)]
pub struct Tokens<'src> {
    scanner: Scanner<'src>,
    state: Option<State>,
    handoff: Handoff<'src>,
}

impl<'src> Tokens<'src> {
    /// Starts a scan of `input` in the default text state.
    #[must_use]
    pub fn new(input: &'src [u8]) -> Self {
        Self::starting_in(input, State::Text)
    }

    /// Starts a scan of `input` in an arbitrary state.
    ///
    /// Mostly useful to drive the link or image sub-scanner directly on input
    /// that starts with a bracket construct.
    #[must_use]
    pub fn starting_in(input: &'src [u8], state: State) -> Self {
        Self {
            scanner: Scanner::new(input),
            state: Some(state),
            handoff: Handoff::with_capacity(),
        }
    }

    /// The reason the scan stopped, once an `Error` token has been produced.
    #[must_use]
    pub fn error(&self) -> Option<&ScanError> {
        self.scanner.error()
    }

    /// Returns `true` once the terminal token has been handed out.
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.state.is_none() && self.handoff.is_empty()
    }

    /// Number of tokens scanned but not yet handed out.
    #[cfg(any(test, feature = "fuzzing"))]
    #[must_use]
    pub fn queued(&self) -> usize {
        self.handoff.queue.len()
    }
}

impl<'src> Iterator for Tokens<'src> {
    type Item = Token<'src>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(token) = self.handoff.pop() {
                return Some(token);
            }
            let state = self.state.take()?;
            self.state = self.scanner.step(state, &mut self.handoff);
        }
    }
}

impl FusedIterator for Tokens<'_> {}
