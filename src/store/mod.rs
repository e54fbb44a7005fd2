//! In-memory stores for reply-pager.
//!
//! Holds paged responses under generated identifiers with lazy TTL expiry,
//! and per-user session preferences. Both stores are transient: nothing
//! survives a restart, which is the point — a paged reply only needs to
//! outlive the conversation that produced it.

pub mod clock;
pub mod pages;
pub mod sessions;

pub use clock::{Clock, ManualClock, SystemClock};
pub use pages::PageStore;
pub use sessions::SessionStore;

/// Time-to-live for cached paged responses, in milliseconds (one hour).
pub const CACHE_TTL_MS: u64 = 3_600_000;
