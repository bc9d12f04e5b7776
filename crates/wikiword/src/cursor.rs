//! Cursor: UTF‑8 decoding with bounded pushback over a borrowed buffer.
//!
//! The cursor owns two offsets into the input:
//! - the emission boundary (`start`), everything before it has already been
//!   cut into tokens;
//! - the read offset (`pos`), everything between the two is pending.
//!
//! Invariants
//! - `start <= pos <= input.len()` at all times.
//! - Pushback and seeks never move `pos` before `start`.
//! - `last` is the start offset of the code point most recently returned by
//!   `next`, cleared by pushback, seeks and emission. Reversal lands only on
//!   that offset, never on a boundary reconstructed from raw bytes, so at most
//!   one code point can be pushed back at a time.

use bstr::decode_utf8;

use crate::{
    error::{CursorError, ScanError},
    token::{Kind, Token},
};

#[derive(Debug)]
pub(crate) struct Cursor<'src> {
    input: &'src [u8],
    start: usize,
    pos: usize,
    last: Option<usize>,
}

impl<'src> Cursor<'src> {
    pub(crate) fn new(input: &'src [u8]) -> Self {
        Self {
            input,
            start: 0,
            pos: 0,
            last: None,
        }
    }

    /// Current read offset.
    #[inline]
    pub(crate) fn offset(&self) -> usize {
        self.pos
    }

    /// Offset up to which input has been cut into tokens.
    #[inline]
    pub(crate) fn boundary(&self) -> usize {
        self.start
    }

    /// Decodes and consumes one code point.
    ///
    /// Returns `Ok(None)` once the input is exhausted. Invalid UTF‑8 is
    /// reported without consuming anything.
    #[allow(clippy::should_implement_trait)]
    pub(crate) fn next(&mut self) -> Result<Option<char>, ScanError> {
        let Some((ch, len)) = self.decode_at(self.pos)? else {
            return Ok(None);
        };
        self.last = Some(self.pos);
        self.pos += len;
        Ok(Some(ch))
    }

    /// Decodes the next code point without consuming it.
    pub(crate) fn peek(&self) -> Result<Option<char>, ScanError> {
        Ok(self.decode_at(self.pos)?.map(|(ch, _)| ch))
    }

    /// Pushes `ch` back, moving the read offset back by its encoded width.
    pub(crate) fn reverse(&mut self, ch: char) -> Result<(), CursorError> {
        let width = ch.len_utf8();
        let fault = CursorError::InsufficientBuffer {
            offset: self.pos,
            width,
        };
        let target = self.pos.checked_sub(width).ok_or(fault)?;
        if target < self.start || self.last != Some(target) {
            return Err(fault);
        }
        self.last = None;
        self.pos = target;
        Ok(())
    }

    /// Saves the read offset for a later [`seek`](Self::seek).
    #[inline]
    pub(crate) fn mark(&self) -> usize {
        self.pos
    }

    /// Moves the read offset to a previously visited position.
    pub(crate) fn seek(&mut self, target: usize) -> Result<(), CursorError> {
        if target < self.start || target > self.input.len() {
            return Err(CursorError::OutOfRange {
                target,
                start: self.start,
                end: self.input.len(),
            });
        }
        self.last = None;
        self.pos = target;
        Ok(())
    }

    /// Cuts the pending bytes into a token and advances the boundary.
    pub(crate) fn emit(&mut self, kind: Kind) -> Token<'src> {
        let token = Token::new(kind, &self.input[self.start..self.pos]);
        self.start = self.pos;
        self.last = None;
        token
    }

    fn decode_at(&self, offset: usize) -> Result<Option<(char, usize)>, ScanError> {
        if offset >= self.input.len() {
            return Ok(None);
        }
        match decode_utf8(&self.input[offset..]) {
            (Some(ch), len) => Ok(Some((ch, len))),
            (None, _) => Err(ScanError::InvalidUtf8 { offset }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn next_walks_code_points_then_signals_end() {
        let mut c = Cursor::new("ab\u{e5}".as_bytes());
        assert_eq!(c.next(), Ok(Some('a')));
        assert_eq!(c.next(), Ok(Some('b')));
        assert_eq!(c.next(), Ok(Some('\u{e5}')));
        assert_eq!(c.offset(), 4);
        assert_eq!(c.next(), Ok(None));
        assert_eq!(c.next(), Ok(None));
    }

    #[test]
    fn invalid_utf8_is_reported_without_consuming() {
        let mut c = Cursor::new(b"a\xffb");
        assert_eq!(c.next(), Ok(Some('a')));
        assert_eq!(c.next(), Err(ScanError::InvalidUtf8 { offset: 1 }));
        assert_eq!(c.offset(), 1);
        assert_eq!(c.peek(), Err(ScanError::InvalidUtf8 { offset: 1 }));
    }

    #[test]
    fn reverse_stops_at_the_start_of_input() {
        let mut c = Cursor::new(b"abc");
        c.next().unwrap();
        assert_eq!(c.reverse('a'), Ok(()));
        assert_eq!(
            c.reverse('a'),
            Err(CursorError::InsufficientBuffer {
                offset: 0,
                width: 1
            })
        );
    }

    #[test]
    fn reverse_cannot_cross_the_emission_boundary() {
        let mut c = Cursor::new(b"abc");
        c.next().unwrap();
        c.next().unwrap();
        let token = c.emit(Kind::Text);
        assert_eq!(token.value(), b"ab");
        assert_eq!(c.boundary(), 2);
        assert!(c.reverse('b').is_err());
        assert_eq!(c.next(), Ok(Some('c')));
        assert_eq!(c.reverse('c'), Ok(()));
        assert_eq!(c.offset(), 2);
    }

    #[test]
    fn reverse_rejects_widths_that_split_a_code_point() {
        // 'é' is two bytes; pushing back a one byte char would land mid-sequence.
        let mut c = Cursor::new("\u{e9}".as_bytes());
        assert_eq!(c.next(), Ok(Some('\u{e9}')));
        assert!(c.reverse('x').is_err());
        assert_eq!(c.reverse('\u{e9}'), Ok(()));
        assert_eq!(c.next(), Ok(Some('\u{e9}')));
    }

    #[test]
    fn seek_is_bounded_by_boundary_and_input() {
        let mut c = Cursor::new(b"abcd");
        c.next().unwrap();
        c.next().unwrap();
        let mark = c.mark();
        c.next().unwrap();
        assert_eq!(c.seek(mark), Ok(()));
        assert_eq!(c.next(), Ok(Some('c')));

        c.emit(Kind::Text);
        assert_eq!(
            c.seek(1),
            Err(CursorError::OutOfRange {
                target: 1,
                start: 3,
                end: 4
            })
        );
        assert!(c.seek(5).is_err());
        assert_eq!(c.seek(4), Ok(()));
    }

    #[test]
    fn only_the_last_code_point_can_be_pushed_back() {
        let mut c = Cursor::new("a\u{e9}b".as_bytes());
        c.next().unwrap();
        c.next().unwrap();
        assert_eq!(c.reverse('\u{e9}'), Ok(()));
        assert_eq!(
            c.reverse('a'),
            Err(CursorError::InsufficientBuffer {
                offset: 1,
                width: 1
            })
        );
        assert_eq!(c.next(), Ok(Some('\u{e9}')));
        assert_eq!(c.next(), Ok(Some('b')));
        assert_eq!(c.offset(), 4);
    }

    #[test]
    fn split_emission_after_pushback() {
        let mut c = Cursor::new(b"ab CdEf!");
        while c.next().unwrap() != Some('!') {}
        c.reverse('!').unwrap();
        let end = c.mark();
        c.seek(3).unwrap();
        assert_eq!(c.emit(Kind::Text).value(), b"ab ");
        c.seek(end).unwrap();
        assert!(c.reverse('f').is_err());
        assert_eq!(c.emit(Kind::WikiWord).value(), b"CdEf");
        assert_eq!(c.next(), Ok(Some('!')));
        assert_eq!(c.reverse('!'), Ok(()));
        assert_eq!(c.offset(), 7);
    }

    #[test]
    fn long_pending_text_keeps_constant_pushback_state() {
        let input = "lorem ipsum ".repeat(10_000);
        let mut c = Cursor::new(input.as_bytes());
        while c.next().unwrap().is_some() {}
        assert_eq!(c.boundary(), 0);
        assert_eq!(c.last, Some(input.len() - 1));
        assert_eq!(c.reverse(' '), Ok(()));
        assert_eq!(c.last, None);
    }
}
