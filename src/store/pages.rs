//! Keyed, time-limited storage of paged responses.
//!
//! Expiry is lazy: a sweep runs as a side effect of each `put`, and
//! `get_page` never expires records on its own. There is no background
//! timer — abandoned entries live until the next `put` (or an explicit
//! `sweep`, which stays independently callable for tests and schedulers).

use crate::core::PagedResponse;
use crate::store::clock::{Clock, SystemClock};
use crate::store::CACHE_TTL_MS;
use std::collections::HashMap;
use std::sync::Arc;

/// In-memory store of [`PagedResponse`] records with TTL expiry.
///
/// All methods take `&mut self`; the surrounding handler runtime invokes
/// at most one core operation at a time. A genuinely multi-threaded
/// embedding must wrap the store in a mutex, since `put`, `get_page`, and
/// `sweep` all read-modify the same keyed collection.
///
/// # Examples
///
/// ```
/// use reply_pager::store::PageStore;
///
/// let mut store = PageStore::new();
/// store.put("r1", vec!["page one".to_string(), "page two".to_string()]);
/// assert_eq!(store.get_page("r1", 1), Some("page two"));
/// assert_eq!(store.get_page("unknown", 0), None);
/// ```
pub struct PageStore {
    responses: HashMap<String, PagedResponse>,
    ttl_ms: u64,
    clock: Arc<dyn Clock>,
}

impl Default for PageStore {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for PageStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PageStore")
            .field("responses", &self.responses.len())
            .field("ttl_ms", &self.ttl_ms)
            .finish_non_exhaustive()
    }
}

impl PageStore {
    /// Creates a store with the wall clock and the wire-contract TTL
    /// (one hour).
    #[must_use]
    pub fn new() -> Self {
        Self::with_clock(Arc::new(SystemClock), CACHE_TTL_MS)
    }

    /// Creates a store with an injected clock and TTL.
    ///
    /// # Arguments
    ///
    /// * `clock` - Time source for `created_at` and expiry.
    /// * `ttl_ms` - Record lifetime in milliseconds.
    #[must_use]
    pub fn with_clock(clock: Arc<dyn Clock>, ttl_ms: u64) -> Self {
        Self {
            responses: HashMap::new(),
            ttl_ms,
            clock,
        }
    }

    /// Returns the configured TTL in milliseconds.
    #[must_use]
    pub const fn ttl_ms(&self) -> u64 {
        self.ttl_ms
    }

    /// Stores a new response under `id` and runs an opportunistic sweep.
    ///
    /// Identifier uniqueness is the caller's precondition (satisfied by
    /// [`crate::core::new_response_id`]); a duplicate `id` replaces the
    /// previous record.
    ///
    /// # Arguments
    ///
    /// * `id` - Response identifier.
    /// * `chunks` - Chunk sequence; callers pass a non-empty sequence.
    pub fn put(&mut self, id: &str, chunks: Vec<String>) {
        let now = self.clock.now();
        tracing::debug!(id, pages = chunks.len(), "caching paged response");
        self.responses
            .insert(id.to_string(), PagedResponse::new(id.to_string(), chunks, now));
        self.sweep();
    }

    /// Fetches a page, clamping `index` into range and recording it as
    /// the response's current page.
    ///
    /// Returns `None` for an unknown (or already swept) identifier; the
    /// caller translates absence into a user-facing "expired" notice.
    /// Never fails for out-of-range indices.
    pub fn get_page(&mut self, id: &str, index: i64) -> Option<&str> {
        let response = self.responses.get_mut(id)?;
        tracing::trace!(id, page = response.clamp_index(index), "page fetch");
        Some(response.fetch_page(index))
    }

    /// Returns the page count of a stored response.
    #[must_use]
    pub fn page_count(&self, id: &str) -> Option<usize> {
        self.responses.get(id).map(PagedResponse::page_count)
    }

    /// Returns the last page index rendered for a stored response.
    #[must_use]
    pub fn current_page(&self, id: &str) -> Option<usize> {
        self.responses.get(id).map(PagedResponse::current_page)
    }

    /// Returns `true` if `id` is currently cached.
    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        self.responses.contains_key(id)
    }

    /// Returns the number of cached responses.
    #[must_use]
    pub fn len(&self) -> usize {
        self.responses.len()
    }

    /// Returns `true` if no responses are cached.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.responses.is_empty()
    }

    /// Removes every record older than the TTL. Returns the eviction
    /// count.
    pub fn sweep(&mut self) -> usize {
        let now = self.clock.now();
        let ttl = self.ttl_ms;
        let before = self.responses.len();
        self.responses.retain(|_, r| r.age_at(now) <= ttl);
        let evicted = before - self.responses.len();
        if evicted > 0 {
            tracing::info!(evicted, remaining = self.responses.len(), "swept expired responses");
        }
        evicted
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::ManualClock;

    fn manual_store(ttl_ms: u64) -> (PageStore, Arc<ManualClock>) {
        let clock = Arc::new(ManualClock::new(0));
        let store = PageStore::with_clock(clock.clone(), ttl_ms);
        (store, clock)
    }

    fn pages(n: usize) -> Vec<String> {
        (0..n).map(|i| format!("page {i}")).collect()
    }

    #[test]
    fn test_put_and_get() {
        let (mut store, _clock) = manual_store(1_000);
        store.put("r1", pages(3));

        assert_eq!(store.len(), 1);
        assert!(store.contains("r1"));
        assert_eq!(store.get_page("r1", 0), Some("page 0"));
        assert_eq!(store.get_page("r1", 2), Some("page 2"));
        assert_eq!(store.page_count("r1"), Some(3));
    }

    #[test]
    fn test_get_unknown_id() {
        let (mut store, _clock) = manual_store(1_000);
        assert_eq!(store.get_page("missing", 0), None);
        assert_eq!(store.page_count("missing"), None);
        assert_eq!(store.current_page("missing"), None);
    }

    #[test]
    fn test_index_clamping_never_fails() {
        let (mut store, _clock) = manual_store(1_000);
        store.put("r1", pages(3));

        assert_eq!(store.get_page("r1", -1), Some("page 0"));
        assert_eq!(store.get_page("r1", -999), Some("page 0"));
        assert_eq!(store.get_page("r1", 99), Some("page 2"));
        assert_eq!(store.get_page("r1", i64::MAX), Some("page 2"));
        assert_eq!(store.get_page("r1", i64::MIN), Some("page 0"));
    }

    #[test]
    fn test_current_page_tracks_clamped_fetch() {
        let (mut store, _clock) = manual_store(1_000);
        store.put("r1", pages(3));
        assert_eq!(store.current_page("r1"), Some(0));

        store.get_page("r1", 99);
        assert_eq!(store.current_page("r1"), Some(2));

        store.get_page("r1", 1);
        assert_eq!(store.current_page("r1"), Some(1));
    }

    #[test]
    fn test_get_page_idempotent() {
        let (mut store, _clock) = manual_store(1_000);
        store.put("r1", pages(2));

        let first = store.get_page("r1", 1).map(ToString::to_string);
        let second = store.get_page("r1", 1).map(ToString::to_string);
        assert_eq!(first, second);
    }

    #[test]
    fn test_expiry_boundary() {
        let (mut store, clock) = manual_store(1_000);
        store.put("r1", pages(2));

        // Retrievable right up to the TTL
        clock.set(999);
        assert_eq!(store.sweep(), 0);
        assert!(store.get_page("r1", 0).is_some());

        // Age == TTL is still alive; strictly older is swept
        clock.set(1_000);
        assert_eq!(store.sweep(), 0);
        clock.set(1_001);
        assert_eq!(store.sweep(), 1);
        assert_eq!(store.get_page("r1", 0), None);
    }

    #[test]
    fn test_get_page_does_not_expire() {
        // Expiry is lazy: only a sweep removes records
        let (mut store, clock) = manual_store(1_000);
        store.put("r1", pages(2));

        clock.set(5_000);
        assert!(store.get_page("r1", 0).is_some());

        store.sweep();
        assert_eq!(store.get_page("r1", 0), None);
    }

    #[test]
    fn test_put_sweeps_opportunistically() {
        let (mut store, clock) = manual_store(1_000);
        store.put("old", pages(1));

        clock.set(2_000);
        store.put("new", pages(1));

        assert!(!store.contains("old"));
        assert!(store.contains("new"));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_sweep_keeps_fresh_records() {
        let (mut store, clock) = manual_store(1_000);
        store.put("a", pages(1));
        clock.set(600);
        store.put("b", pages(1));
        clock.set(1_200);

        // "a" is 1200ms old, "b" 600ms
        assert_eq!(store.sweep(), 1);
        assert!(!store.contains("a"));
        assert!(store.contains("b"));
    }

    #[test]
    fn test_default_store_uses_wire_ttl() {
        let store = PageStore::new();
        assert_eq!(store.ttl_ms(), CACHE_TTL_MS);
        assert!(store.is_empty());
    }
}
