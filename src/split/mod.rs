//! Reply splitting for size-limited transports.
//!
//! Converts one long marked-up reply into an ordered sequence of bounded
//! fragments, each independently valid markup. Splitting prefers line and
//! word boundaries and keeps preformatted code blocks renderable across
//! chunk boundaries by re-closing and re-opening them.

pub mod splitter;

pub use splitter::MarkupSplitter;

/// Default chunk budget in bytes. Sized safely under the transport's
/// message limit to leave headroom for entities and padding.
pub const CHUNK_BUDGET: usize = 2000;

/// Bytes reserved within the budget while continuing an open preformatted
/// block, covering the closing sequence that must be re-inserted.
pub const PRE_RESERVE: usize = 40;

/// Newline preference floor: a newline earlier than this percentage of the
/// effective limit is rejected to avoid pathologically short chunks.
pub const NEWLINE_FLOOR_PERCENT: usize = 70;

/// Hard per-message limit of the transport. Budgets above this are
/// rejected as configuration errors.
pub const TRANSPORT_LIMIT: usize = 4096;
