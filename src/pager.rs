//! Create-and-render boundary for paged replies.
//!
//! The [`Pager`] composes the splitter and the page store behind the two
//! operations the platform handlers need: `create` for a fresh reply and
//! `navigate` for a button press. Callers attach the returned controls to
//! the rendered message; transport failures (e.g. markup rejected by the
//! platform) and plain-text fallback retries live with the caller.

use crate::core::new_response_id;
use crate::error::{Result, SplitError};
use crate::nav::{NavAction, NavButton, page_controls};
use crate::split::MarkupSplitter;
use crate::store::PageStore;
use serde::Serialize;

/// Result of caching a freshly split reply.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CreatedPage {
    /// Identifier referencing the cached response.
    pub id: String,
    /// First chunk, ready to render.
    pub first_chunk: String,
    /// Total page count.
    pub total_pages: usize,
    /// Control row for page 0; `None` for single-page replies.
    pub controls: Option<Vec<NavButton>>,
}

/// Result of handling a navigation action.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum NavOutcome {
    /// A page to re-render in place.
    Page {
        /// Chunk content for the clamped page.
        chunk: String,
        /// Clamped page index actually served.
        index: usize,
        /// Total page count of the response.
        total: usize,
        /// Fresh control row for the new position.
        controls: Option<Vec<NavButton>>,
    },
    /// The referenced response is unknown or already swept; surface an
    /// "expired" notice instead of rendering.
    Expired,
    /// A recognized no-effect action; acknowledge and do nothing.
    Noop,
}

/// Pagination engine: splitter plus response cache.
///
/// # Examples
///
/// ```
/// use reply_pager::pager::{NavOutcome, Pager};
///
/// let mut pager = Pager::new();
/// let created = pager.create(&"long reply line\n".repeat(300)).unwrap();
/// assert!(created.total_pages > 1);
///
/// let data = format!("pg:{}:1", created.id);
/// match pager.navigate(&data).unwrap() {
///     NavOutcome::Page { index, .. } => assert_eq!(index, 1),
///     _ => unreachable!("response was just cached"),
/// }
/// ```
#[derive(Debug, Default)]
pub struct Pager {
    splitter: MarkupSplitter,
    store: PageStore,
}

impl Pager {
    /// Creates a pager with wire-contract defaults.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a pager from explicit parts, e.g. a store with a manual
    /// clock or a splitter with a custom budget.
    #[must_use]
    pub const fn with_parts(splitter: MarkupSplitter, store: PageStore) -> Self {
        Self { splitter, store }
    }

    /// Returns the underlying page store.
    #[must_use]
    pub const fn store(&self) -> &PageStore {
        &self.store
    }

    /// Splits `text`, caches it under a fresh identifier, and returns the
    /// first page with its controls.
    ///
    /// # Errors
    ///
    /// Returns [`SplitError::EmptyInput`] for empty or whitespace-only
    /// text, or a configuration error from the splitter.
    pub fn create(&mut self, text: &str) -> Result<CreatedPage> {
        if text.trim().is_empty() {
            return Err(SplitError::EmptyInput.into());
        }

        let chunks = self.splitter.split(text)?;
        let Some(first_chunk) = chunks.first().cloned() else {
            return Err(SplitError::EmptyInput.into());
        };

        let id = new_response_id();
        let total_pages = chunks.len();
        self.store.put(&id, chunks);

        let controls = page_controls(&id, 0, total_pages);

        Ok(CreatedPage {
            id,
            first_chunk,
            total_pages,
            controls,
        })
    }

    /// Handles a navigation callback string.
    ///
    /// Absence of the referenced response is an outcome
    /// ([`NavOutcome::Expired`]), not an error; only malformed callback
    /// data fails.
    ///
    /// # Errors
    ///
    /// Returns [`crate::error::ActionError`] variants when `data` matches
    /// no known action pattern.
    pub fn navigate(&mut self, data: &str) -> Result<NavOutcome> {
        match NavAction::parse(data)? {
            NavAction::Noop => Ok(NavOutcome::Noop),
            NavAction::Page { id, index } => {
                let Some(chunk) = self.store.get_page(&id, index).map(ToString::to_string) else {
                    return Ok(NavOutcome::Expired);
                };

                let index = self.store.current_page(&id).unwrap_or(0);
                let total = self.store.page_count(&id).unwrap_or(1);

                Ok(NavOutcome::Page {
                    chunk,
                    index,
                    total,
                    controls: page_controls(&id, index, total),
                })
            }
        }
    }
}
