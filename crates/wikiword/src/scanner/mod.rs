//! Scanner: the WikiWord / link / image state machine.
//!
//! The scanner walks the input one code point at a time and cuts it into
//! [`Token`](crate::Token)s. It has three states; each transition function
//! consumes input, pushes zero or more tokens into the pipeline and returns the
//! next state, or `None` once a terminal token has been emitted.
//!
//! Text state
//! - A WikiWord candidate starts at an uppercase letter that follows the start
//!   of the state, whitespace or punctuation. Symbols like `+` or `$` do not
//!   count. It extends over letters, digits and underscores and is confirmed
//!   when it holds two or more uppercase letters.
//! - Text seen before a confirmed candidate is flushed separately, then the
//!   candidate itself. The character that ended the candidate is pushed back
//!   and classified again by a fresh text state.
//! - `[` and `![` flush pending text (possibly empty) and hand over to the
//!   link or image state. A `!` followed by anything else is text.
//!
//! Link and image states
//! - `[A](B)` and `[A][B]`, optionally prefixed with `!`. Each segment ends at
//!   the first matching closing delimiter; there is no nesting.
//! - `[A]:` is a reference definition: `[A]` becomes text and the text state
//!   resumes at the `:`.
//! - Anything else is an error and halts the scan.
//!
//! Invariants
//! - Every state is entered with the cursor sitting on the emission boundary.
//! - Pushback and seeks only ever undo input read within the current state, so
//!   a cursor fault is a bug in this module and panics.

use unicode_categories::UnicodeCategories;

use crate::{
    cursor::Cursor,
    error::{CursorError, ScanError},
    pipeline::Handoff,
    token::Kind,
    trace,
};


/// A state of the scanner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum State {
    /// Plain text and WikiWords. The state every scan starts in.
    Text,
    /// A link construct starting at `[`.
    Link,
    /// An image construct starting at `!`.
    Image,
}

#[derive(Debug)]
pub(crate) struct Scanner<'src> {
    cursor: Cursor<'src>,
    error: Option<ScanError>,
}

/// Bookkeeping for a run that may turn out to be a WikiWord.
#[derive(Debug)]
struct CandidateRun {
    active: bool,
    can_start: bool,
    uppercase: usize,
    /// Offset right before the candidate; text up to here is flushed
    /// separately when the candidate is confirmed.
    before: usize,
}

impl CandidateRun {
    fn new(offset: usize) -> Self {
        Self {
            active: false,
            can_start: true,
            uppercase: 0,
            before: offset,
        }
    }

    fn arm(&mut self, offset: usize) {
        self.can_start = true;
        self.before = offset;
    }

    fn begin(&mut self) {
        self.active = true;
        self.uppercase = 1;
    }

    fn absorb(&mut self) {
        self.active = false;
        self.uppercase = 0;
    }

    fn is_confirmed(&self) -> bool {
        self.active && self.uppercase >= 2
    }
}

/// Outcome of matching a bracket construct.
enum Brackets {
    Complete,
    /// `[A]:`, the cursor sits on the `:`.
    Reference,
}

#[inline]
fn is_word_char(ch: char) -> bool {
    ch.is_alphanumeric() || ch == '_'
}

/// Whitespace and punctuation: the characters after which a WikiWord may start.
///
/// `_` is punctuation to Unicode but a word character here. Symbols such as
/// `+`, `$` or `<` are neither, so a WikiWord cannot start right after them.
#[inline]
fn is_separator(ch: char) -> bool {
    ch.is_whitespace() || (ch.is_punctuation() && !is_word_char(ch))
}

#[cold]
#[track_caller]
fn invariant_violated(fault: CursorError) -> ! {
    panic!("scanner invariant violated: {fault}")
}

impl<'src> Scanner<'src> {
    pub(crate) fn new(input: &'src [u8]) -> Self {
        Self {
            cursor: Cursor::new(input),
            error: None,
        }
    }

    pub(crate) fn error(&self) -> Option<&ScanError> {
        self.error.as_ref()
    }

    /// Runs one transition from `state`.
    pub(crate) fn step(&mut self, state: State, out: &mut Handoff<'src>) -> Option<State> {
        trace::state_entered(state, self.cursor.offset());
        match state {
            State::Text => self.scan_text(out),
            State::Link => self.scan_link(out),
            State::Image => self.scan_image(out),
        }
    }

    fn emit(&mut self, kind: Kind, out: &mut Handoff<'src>) {
        let token = self.cursor.emit(kind);
        trace::token_emitted(&token, self.cursor.offset());
        out.push(token);
    }

    fn fail(&mut self, error: ScanError, out: &mut Handoff<'src>) -> Option<State> {
        self.error = Some(error);
        self.emit(Kind::Error, out);
        None
    }

    fn push_back(&mut self, ch: char) {
        if let Err(fault) = self.cursor.reverse(ch) {
            invariant_violated(fault);
        }
    }

    fn jump(&mut self, offset: usize) {
        if let Err(fault) = self.cursor.seek(offset) {
            invariant_violated(fault);
        }
    }

    fn scan_text(&mut self, out: &mut Handoff<'src>) -> Option<State> {
        let mut run = CandidateRun::new(self.cursor.offset());
        loop {
            let ch = match self.cursor.next() {
                Ok(Some(ch)) => ch,
                Ok(None) => {
                    if run.is_confirmed() {
                        self.emit_candidate(&run, out);
                    } else {
                        self.emit(Kind::Text, out);
                    }
                    self.emit(Kind::EndOfInput, out);
                    return None;
                }
                Err(error) => return self.fail(error, out),
            };

            if run.active {
                if is_word_char(ch) {
                    if ch.is_uppercase() {
                        run.uppercase += 1;
                    }
                    continue;
                }
                if run.is_confirmed() {
                    self.push_back(ch);
                    self.emit_candidate(&run, out);
                    return Some(State::Text);
                }
                run.absorb();
            }

            if is_separator(ch) {
                run.arm(self.cursor.offset());
            } else if run.can_start && ch.is_uppercase() {
                run.begin();
            } else {
                run.can_start = false;
            }

            match ch {
                '[' => {
                    self.push_back(ch);
                    self.emit(Kind::Text, out);
                    return Some(State::Link);
                }
                // Decode errors after the `!` surface on the next read.
                '!' if matches!(self.cursor.peek(), Ok(Some('['))) => {
                    self.push_back(ch);
                    self.emit(Kind::Text, out);
                    return Some(State::Image);
                }
                _ => {}
            }
        }
    }

    /// Emits a confirmed candidate, preceded by the text in front of it.
    fn emit_candidate(&mut self, run: &CandidateRun, out: &mut Handoff<'src>) {
        if run.before > self.cursor.boundary() {
            let end = self.cursor.mark();
            self.jump(run.before);
            self.emit(Kind::Text, out);
            self.jump(end);
        }
        self.emit(Kind::WikiWord, out);
    }

    fn scan_link(&mut self, out: &mut Handoff<'src>) -> Option<State> {
        let opened_at = self.cursor.offset();
        let matched = self.match_brackets(opened_at);
        self.finish_brackets(Kind::Link, matched, out)
    }

    fn scan_image(&mut self, out: &mut Handoff<'src>) -> Option<State> {
        let opened_at = self.cursor.offset();
        let matched = match self.expect('!', opened_at, "'!'") {
            Ok(()) => self.match_brackets(opened_at),
            Err(error) => Err(error),
        };
        self.finish_brackets(Kind::Image, matched, out)
    }

    fn finish_brackets(
        &mut self,
        kind: Kind,
        matched: Result<Brackets, ScanError>,
        out: &mut Handoff<'src>,
    ) -> Option<State> {
        match matched {
            Ok(Brackets::Complete) => {
                self.emit(kind, out);
                Some(State::Text)
            }
            Ok(Brackets::Reference) => {
                self.emit(Kind::Text, out);
                Some(State::Text)
            }
            Err(error) => self.fail(error, out),
        }
    }

    fn match_brackets(&mut self, opened_at: usize) -> Result<Brackets, ScanError> {
        self.expect('[', opened_at, "'['")?;
        self.skip_past(']', opened_at)?;

        let offset = self.cursor.offset();
        let close = match self.read(opened_at)? {
            '(' => ')',
            '[' => ']',
            ':' => {
                self.push_back(':');
                return Ok(Brackets::Reference);
            }
            found => {
                return Err(ScanError::UnexpectedDelimiter {
                    found,
                    offset,
                    expected: "'(', '[' or ':'",
                });
            }
        };
        self.skip_past(close, opened_at)?;
        Ok(Brackets::Complete)
    }

    fn read(&mut self, opened_at: usize) -> Result<char, ScanError> {
        self.cursor
            .next()?
            .ok_or(ScanError::UnexpectedEndOfInput { opened_at })
    }

    fn expect(
        &mut self,
        want: char,
        opened_at: usize,
        expected: &'static str,
    ) -> Result<(), ScanError> {
        let offset = self.cursor.offset();
        match self.read(opened_at)? {
            found if found == want => Ok(()),
            found => Err(ScanError::UnexpectedDelimiter {
                found,
                offset,
                expected,
            }),
        }
    }

    fn skip_past(&mut self, close: char, opened_at: usize) -> Result<(), ScanError> {
        while self.read(opened_at)? != close {}
        Ok(())
    }
}
