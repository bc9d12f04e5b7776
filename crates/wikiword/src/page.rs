//! Page storage seam and the page rendering preamble.
//!
//! The wiki keeps pages as an append-only list of revisions plus a set of
//! named attachments. Persistent backends live outside this crate and plug in
//! through [`PageStore`]; [`MemoryStore`] is the in-process implementation.

use std::{collections::BTreeMap, ops::RangeInclusive, sync::LazyLock};

use regex::Regex;

use crate::{error::StoreError, expand::expand, wikiword::is_wiki_word};

static ATTACHMENT_NAME_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[0-9A-Za-z\-_]*(\.[0-9A-Za-z\-_]+)?$").expect("attachment pattern compiles")
});

/// Returns `true` if `name` may be used as an attachment name.
#[must_use]
pub fn is_attachment_name(name: &str) -> bool {
    ATTACHMENT_NAME_RE.is_match(name)
}

/// Access to wiki pages, their revisions and attachments.
///
/// Page names must be WikiWords; implementations reject anything else with
/// [`StoreError::InvalidPageName`].
pub trait PageStore {
    /// Whether `page` has at least one revision.
    fn page_exists(&self, page: &str) -> Result<bool, StoreError>;

    /// Number of revisions stored for `page`, `0` if it was never written.
    fn revision_count(&self, page: &str) -> Result<usize, StoreError>;

    /// Text of revision `revision` of `page`, counting from `0`.
    fn text_at(&self, page: &str, revision: usize) -> Result<Vec<u8>, StoreError>;

    /// Text of the latest revision of `page`.
    fn current_text(&self, page: &str) -> Result<Vec<u8>, StoreError> {
        match self.revision_count(page)? {
            0 => Err(StoreError::PageNotFound(page.to_owned())),
            count => self.text_at(page, count - 1),
        }
    }

    /// Appends a revision and returns its number.
    fn add_revision(&mut self, page: &str, text: &[u8]) -> Result<usize, StoreError>;

    /// Names of the attachments of `page`, sorted.
    fn attachment_names(&self, page: &str) -> Result<Vec<String>, StoreError>;

    /// Contents of one attachment.
    fn attachment(&self, page: &str, attachment: &str) -> Result<Vec<u8>, StoreError>;

    /// Stores an attachment, replacing any previous one with the same name.
    fn add_attachment(
        &mut self,
        page: &str,
        attachment: &str,
        data: &[u8],
    ) -> Result<(), StoreError>;

    /// Names of all pages with at least one revision, sorted.
    fn list_pages(&self) -> Result<Vec<String>, StoreError>;
}

#[derive(Debug, Default, Clone)]
struct MemoryPage {
    revisions: Vec<Vec<u8>>,
    attachments: BTreeMap<String, Vec<u8>>,
}

/// A [`PageStore`] held entirely in memory.
#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    pages: BTreeMap<String, MemoryPage>,
}

impl MemoryStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn page(&self, page: &str) -> Result<Option<&MemoryPage>, StoreError> {
        check_page_name(page)?;
        Ok(self.pages.get(page))
    }
}

fn check_page_name(page: &str) -> Result<(), StoreError> {
    if is_wiki_word(page) {
        Ok(())
    } else {
        Err(StoreError::InvalidPageName(page.to_owned()))
    }
}

impl PageStore for MemoryStore {
    fn page_exists(&self, page: &str) -> Result<bool, StoreError> {
        Ok(self.page(page)?.is_some_and(|p| !p.revisions.is_empty()))
    }

    fn revision_count(&self, page: &str) -> Result<usize, StoreError> {
        Ok(self.page(page)?.map_or(0, |p| p.revisions.len()))
    }

    fn text_at(&self, page: &str, revision: usize) -> Result<Vec<u8>, StoreError> {
        let stored = self
            .page(page)?
            .ok_or_else(|| StoreError::PageNotFound(page.to_owned()))?;
        stored
            .revisions
            .get(revision)
            .cloned()
            .ok_or_else(|| StoreError::RevisionNotFound {
                page: page.to_owned(),
                revision,
            })
    }

    fn add_revision(&mut self, page: &str, text: &[u8]) -> Result<usize, StoreError> {
        check_page_name(page)?;
        let stored = self.pages.entry(page.to_owned()).or_default();
        stored.revisions.push(text.to_vec());
        Ok(stored.revisions.len() - 1)
    }

    fn attachment_names(&self, page: &str) -> Result<Vec<String>, StoreError> {
        Ok(self
            .page(page)?
            .map(|p| p.attachments.keys().cloned().collect())
            .unwrap_or_default())
    }

    fn attachment(&self, page: &str, attachment: &str) -> Result<Vec<u8>, StoreError> {
        self.page(page)?
            .and_then(|p| p.attachments.get(attachment))
            .cloned()
            .ok_or_else(|| StoreError::AttachmentNotFound {
                page: page.to_owned(),
                attachment: attachment.to_owned(),
            })
    }

    fn add_attachment(
        &mut self,
        page: &str,
        attachment: &str,
        data: &[u8],
    ) -> Result<(), StoreError> {
        check_page_name(page)?;
        if !is_attachment_name(attachment) {
            return Err(StoreError::InvalidAttachmentName(attachment.to_owned()));
        }
        self.pages
            .entry(page.to_owned())
            .or_default()
            .attachments
            .insert(attachment.to_owned(), data.to_vec());
        Ok(())
    }

    fn list_pages(&self) -> Result<Vec<String>, StoreError> {
        Ok(self
            .pages
            .iter()
            .filter(|(_, p)| !p.revisions.is_empty())
            .map(|(name, _)| name.clone())
            .collect())
    }
}

/// Builds the markdown source for the current revision of `page`.
///
/// WikiWords in the page text are expanded, then one reference definition
/// `[name]: ./name` per attachment is placed in front so the text can link to
/// attachments by name.
///
/// # Errors
///
/// Whatever the store reports for `page`, most often
/// [`StoreError::PageNotFound`] or [`StoreError::InvalidPageName`].
pub fn render_source<S: PageStore + ?Sized>(
    store: &S,
    page: &str,
) -> Result<Vec<u8>, StoreError> {
    let text = store.current_text(page)?;
    let attachments = store.attachment_names(page)?;

    let mut out = Vec::with_capacity(text.len() + attachments.len() * 16);
    for name in &attachments {
        out.push(b'[');
        out.extend_from_slice(name.as_bytes());
        out.extend_from_slice(b"]: ./");
        out.extend_from_slice(name.as_bytes());
        out.push(b'\n');
    }
    out.extend(expand(&text));
    Ok(out)
}

/// Number of revisions shown on either side of the selected one.
const REVISION_SPAN: usize = 5;

/// A window of revision numbers around a selected revision.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RevisionWindow {
    /// The selected revision.
    pub current: usize,
    /// Oldest revision in the window.
    pub first: usize,
    /// Newest revision in the window.
    pub last: usize,
}

impl RevisionWindow {
    /// Centers a window on `current`, or on `latest` when `current` is `None`.
    ///
    /// The window reaches five revisions back and forth and never leaves
    /// `0..=latest`. A `current` past `latest` is clamped.
    #[must_use]
    pub fn around(current: Option<usize>, latest: usize) -> Self {
        let current = current.map_or(latest, |c| c.min(latest));
        Self {
            current,
            first: current.saturating_sub(REVISION_SPAN),
            last: (current + REVISION_SPAN).min(latest),
        }
    }

    /// The revision numbers in the window, oldest first.
    #[must_use]
    pub fn revisions(&self) -> RangeInclusive<usize> {
        self.first..=self.last
    }
}
