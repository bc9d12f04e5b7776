use std::borrow::Cow;

/// Configuration for [`expand_with`](crate::expand_with).
///
/// A WikiWord `W` is rewritten as `[W](<link_prefix>W<link_suffix>)`.
///
/// # Examples
///
/// ```rust
/// use wikiword::{ExpandOptions, expand_with};
///
/// let options = ExpandOptions {
///     link_prefix: "/wiki/".into(),
///     link_suffix: "".into(),
/// };
/// assert_eq!(expand_with(b"See FrontPage", &options), b"See [FrontPage](/wiki/FrontPage)");
/// ```
///
/// # Default
///
/// `[W](/W/)`, the page route of the wiki.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExpandOptions {
    /// Bytes written between `](` and the WikiWord.
    ///
    /// # Default
    ///
    /// `"/"`
    pub link_prefix: Cow<'static, str>,

    /// Bytes written between the WikiWord and the closing `)`.
    ///
    /// # Default
    ///
    /// `"/"`
    pub link_suffix: Cow<'static, str>,
}

impl Default for ExpandOptions {
    fn default() -> Self {
        Self {
            link_prefix: Cow::Borrowed("/"),
            link_suffix: Cow::Borrowed("/"),
        }
    }
}
