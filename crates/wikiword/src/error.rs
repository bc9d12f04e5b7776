use thiserror::Error;

/// Misuse of the scanner cursor's rewind operations.
///
/// The scanner never triggers these on any input; seeing one means the state
/// machine itself is broken.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum CursorError {
    /// Reversing would cross the emission boundary or would not land on a
    /// code point the cursor decoded.
    #[error("insufficient buffer to reverse cursor by {width} byte(s) at offset {offset}")]
    InsufficientBuffer {
        /// Read offset at the time of the call.
        offset: usize,
        /// Encoded width of the code point being pushed back.
        width: usize,
    },
    /// A seek target lies before the emission boundary or past the input.
    #[error("seek target {target} outside {start}..={end}")]
    OutOfRange {
        /// Requested offset.
        target: usize,
        /// Current emission boundary.
        start: usize,
        /// Length of the input.
        end: usize,
    },
}

/// Why a scan ended with a [`Kind::Error`](crate::Kind::Error) token.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ScanError {
    /// The input is not valid UTF-8 at `offset`.
    #[error("invalid UTF-8 at byte {offset}")]
    InvalidUtf8 {
        /// Byte offset of the first undecodable byte.
        offset: usize,
    },
    /// A bracket construct continued with the wrong character.
    #[error("unexpected '{found}' at byte {offset}, expected {expected}")]
    UnexpectedDelimiter {
        /// The offending character.
        found: char,
        /// Byte offset of `found`.
        offset: usize,
        /// Human readable description of what was acceptable.
        expected: &'static str,
    },
    /// Input ended inside or between the segments of a bracket construct.
    #[error("unexpected end of input in bracket construct opened at byte {opened_at}")]
    UnexpectedEndOfInput {
        /// Byte offset of the `[` or `!` that opened the construct.
        opened_at: usize,
    },
}

/// Failures reported by a [`PageStore`](crate::PageStore).
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// Page names must be WikiWords.
    #[error("invalid page name '{0}'")]
    InvalidPageName(String),
    /// Attachment names are limited to `[0-9A-Za-z_-]` with one optional
    /// extension.
    #[error("invalid attachment name '{0}'")]
    InvalidAttachmentName(String),
    /// No page with that name has been written yet.
    #[error("page '{0}' not found")]
    PageNotFound(String),
    /// The requested revision does not exist.
    #[error("revision {revision} of page '{page}' not found")]
    RevisionNotFound {
        /// Page name.
        page: String,
        /// Requested revision.
        revision: usize,
    },
    /// The page has no attachment with that name.
    #[error("attachment '{attachment}' of page '{page}' not found")]
    AttachmentNotFound {
        /// Page name.
        page: String,
        /// Requested attachment.
        attachment: String,
    },
}
