//! Cached paged response.
//!
//! A paged response is the unit held by the page store: the ordered chunk
//! sequence produced by the splitter, the last page rendered for it, and
//! its creation time for expiry.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Generates an opaque response identifier.
///
/// A 128-bit random value, hyphen-free. Collision resistance is what makes
/// identifier uniqueness a safe precondition of the store.
#[must_use]
pub fn new_response_id() -> String {
    Uuid::new_v4().simple().to_string()
}

/// A paginated reply held in the page store.
///
/// `chunks` is immutable after creation; only `current_page` is updated as
/// the user navigates. The record carries no access control — the
/// identifier's unguessability is the only barrier.
///
/// # Examples
///
/// ```
/// use reply_pager::core::PagedResponse;
///
/// let response = PagedResponse::new(
///     "abc123".to_string(),
///     vec!["page one".to_string(), "page two".to_string()],
///     1_000,
/// );
/// assert_eq!(response.page_count(), 2);
/// assert_eq!(response.current_page(), 0);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PagedResponse {
    /// Opaque unique identifier, the external reference key.
    id: String,

    /// Ordered, tag-balanced fragments of the original reply.
    chunks: Vec<String>,

    /// Last page index rendered (0-based). Bookkeeping only.
    current_page: usize,

    /// Creation time in epoch milliseconds, used only for expiry.
    created_at: u64,
}

impl PagedResponse {
    /// Creates a response record.
    ///
    /// # Arguments
    ///
    /// * `id` - Identifier, unique among currently cached responses.
    /// * `chunks` - Chunk sequence from the splitter; callers pass a
    ///   non-empty sequence.
    /// * `created_at` - Clock reading in epoch milliseconds.
    #[must_use]
    pub const fn new(id: String, chunks: Vec<String>, created_at: u64) -> Self {
        Self {
            id,
            chunks,
            current_page: 0,
            created_at,
        }
    }

    /// Returns the response identifier.
    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Returns the number of pages.
    #[must_use]
    pub const fn page_count(&self) -> usize {
        self.chunks.len()
    }

    /// Returns the last page index rendered.
    #[must_use]
    pub const fn current_page(&self) -> usize {
        self.current_page
    }

    /// Returns the creation time in epoch milliseconds.
    #[must_use]
    pub const fn created_at(&self) -> u64 {
        self.created_at
    }

    /// Returns the chunk at `index`, if in range.
    #[must_use]
    pub fn chunk(&self, index: usize) -> Option<&str> {
        self.chunks.get(index).map(String::as_str)
    }

    /// Clamps an arbitrary integer index into `[0, page_count - 1]`.
    ///
    /// Negative becomes the first page, overflow becomes the last.
    /// Clamping, not rejecting, is the store's leniency policy.
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn clamp_index(&self, index: i64) -> usize {
        let last = self.chunks.len().saturating_sub(1);
        if index < 0 {
            0
        } else {
            (index as usize).min(last)
        }
    }

    /// Fetches a page by arbitrary index, clamping into range and
    /// recording the clamped value as the current page.
    pub fn fetch_page(&mut self, index: i64) -> &str {
        let clamped = self.clamp_index(index);
        self.current_page = clamped;
        // In range by construction
        self.chunks.get(clamped).map_or("", String::as_str)
    }

    /// Returns the age of this record in milliseconds at `now`.
    #[must_use]
    pub const fn age_at(&self, now: u64) -> u64 {
        now.saturating_sub(self.created_at)
    }
}
