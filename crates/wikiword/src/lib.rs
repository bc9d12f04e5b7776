//! WikiWord scanning and expansion for markdown wiki pages.
//!
//! A WikiWord is a run of letters, digits and underscores that starts with an
//! uppercase letter and holds at least two of them, like `FrontPage` or `CD`.
//! [`expand`] turns every WikiWord in a page into a markdown link to the page of
//! that name while leaving existing links, images and reference definitions
//! alone.
//!
//! ```rust
//! assert_eq!(
//!     wikiword::expand(b"See RecentChanges or [the docs](/docs/)."),
//!     b"See [RecentChanges](/RecentChanges/) or [the docs](/docs/)."
//! );
//! ```
//!
//! The scan is exposed as a lazy [`Tokens`] iterator for callers that need the
//! individual pieces. Token values borrow from the input, and the values of a
//! scan that ends in [`Kind::EndOfInput`] concatenate back to the input.
//!
//! # Features
//!
//! - `serde`: `Serialize` for [`Kind`] and [`Token`].
//! - `tracing`: state transitions and emitted tokens as `trace` events under
//!   the `wikiword::scanner` target, stopped expansions under
//!   `wikiword::expand`.

mod cursor;
mod error;
mod expand;
mod options;
mod page;
mod pipeline;
mod scanner;
mod token;
mod trace;
mod wikiword;

#[cfg(test)]
mod tests;

pub use error::{CursorError, ScanError, StoreError};
pub use expand::{expand, expand_with};
pub use options::ExpandOptions;
pub use page::{MemoryStore, PageStore, RevisionWindow, is_attachment_name, render_source};
pub use pipeline::Tokens;
pub use scanner::State;
pub use token::{Kind, Token};
pub use wikiword::{extract_wiki_words, is_wiki_word};
