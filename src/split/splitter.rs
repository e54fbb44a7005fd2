//! Markup-aware reply splitter.
//!
//! Splits at the last newline before the budget (unless it falls too
//! early), then the last space, then hard-cuts at a UTF-8 character
//! boundary. A chunk that ends inside a preformatted block is closed with
//! `</code></pre>` and the block is reopened, original attributes
//! preserved, at the head of the next chunk.

use crate::error::{Result, SplitError};
use crate::io::unicode::{find_char_boundary, find_char_boundary_forward};
use crate::markup::{self, ends_inside_pre, last_pre_open_tag};
use crate::split::{CHUNK_BUDGET, NEWLINE_FLOOR_PERCENT, PRE_RESERVE, TRANSPORT_LIMIT};

/// Splitter that bounds chunks by a byte budget while preserving
/// preformatted-block validity across split points.
///
/// Splitting is assumed to run on well-formed input; the splitter's job is
/// to keep that property across the boundaries it introduces, not to
/// repair malformed markup. A split landing inside a bold, italic, or
/// spoiler tag is an accepted limitation.
///
/// # Examples
///
/// ```
/// use reply_pager::split::MarkupSplitter;
///
/// let splitter = MarkupSplitter::with_budget(100);
/// let text = "one line of reply text\n".repeat(20);
/// let chunks = splitter.split(&text).unwrap();
/// for chunk in &chunks {
///     assert!(chunk.len() <= 100);
/// }
/// ```
#[derive(Debug, Clone)]
pub struct MarkupSplitter {
    /// Target chunk size in bytes.
    budget: usize,
    /// Bytes reserved for the synthesized closing sequence while a
    /// preformatted block continues across chunks.
    reserve: usize,
}

impl Default for MarkupSplitter {
    fn default() -> Self {
        Self::new()
    }
}

impl MarkupSplitter {
    /// Creates a splitter with the wire-contract defaults
    /// (budget 2000, reserve 40).
    #[must_use]
    pub const fn new() -> Self {
        Self {
            budget: CHUNK_BUDGET,
            reserve: PRE_RESERVE,
        }
    }

    /// Creates a splitter with a custom budget and the default reserve.
    ///
    /// # Arguments
    ///
    /// * `budget` - Target size for each chunk in bytes.
    #[must_use]
    pub const fn with_budget(budget: usize) -> Self {
        Self {
            budget,
            reserve: PRE_RESERVE,
        }
    }

    /// Creates a splitter with custom budget and reserve.
    #[must_use]
    pub const fn with_budget_and_reserve(budget: usize, reserve: usize) -> Self {
        Self { budget, reserve }
    }

    /// Returns the chunk budget in bytes.
    #[must_use]
    pub const fn budget(&self) -> usize {
        self.budget
    }

    /// Returns the continuation reserve in bytes.
    #[must_use]
    pub const fn reserve(&self) -> usize {
        self.reserve
    }

    /// Splits `text` into an ordered sequence of bounded, individually
    /// valid chunks. Empty input yields an empty vector.
    ///
    /// # Errors
    ///
    /// Returns [`SplitError::InvalidConfig`] for a zero or oversized
    /// budget, [`SplitError::ReserveTooLarge`] when the reserve leaves no
    /// room for content.
    pub fn split(&self, text: &str) -> Result<Vec<String>> {
        self.validate()?;

        if text.is_empty() {
            return Ok(vec![]);
        }

        let mut chunks = Vec::new();
        let mut remaining = text;
        // Reopening tag for the next chunk while inside a preformatted block.
        let mut reopen: Option<String> = None;

        while !remaining.is_empty() {
            let (limit, prefix) = match reopen.take() {
                Some(tag) => {
                    // The prepended tag counts against the reduced budget.
                    let room = (self.budget - self.reserve).saturating_sub(tag.len());
                    (room.max(1), Some(tag))
                }
                None => (self.budget, None),
            };

            let (head, rest) = if remaining.len() <= limit {
                (remaining, "")
            } else {
                remaining.split_at(self.split_point(remaining, limit))
            };

            let mut chunk = match prefix {
                Some(tag) => {
                    let mut assembled =
                        String::with_capacity(tag.len() + head.len() + markup::PRE_CLOSE.len());
                    assembled.push_str(&tag);
                    assembled.push_str(head);
                    assembled
                }
                None => head.to_string(),
            };

            if ends_inside_pre(&chunk) {
                reopen = Some(last_pre_open_tag(&chunk));
                chunk.push_str(markup::PRE_CLOSE);
            }

            chunks.push(chunk);
            remaining = rest;
        }

        tracing::debug!(
            chunks = chunks.len(),
            input_bytes = text.len(),
            budget = self.budget,
            "reply split"
        );

        Ok(chunks)
    }

    /// Chooses the split point for `text` given an effective `limit`
    /// strictly below `text.len()`.
    ///
    /// Preference order: last newline at or before the limit (unless
    /// earlier than 70% of it), last space at or before the limit, hard
    /// cut at the limit snapped to a character boundary. The separator
    /// stays at the head of the remainder so concatenation reconstructs
    /// the input.
    fn split_point(&self, text: &str, limit: usize) -> usize {
        let floor = limit * NEWLINE_FLOOR_PERCENT / 100;

        let cut = match rfind_byte(text, b'\n', limit) {
            Some(pos) if pos >= floor => pos,
            _ => rfind_byte(text, b' ', limit).unwrap_or(limit),
        };

        // Newline and space positions are ASCII and already boundaries;
        // only the hard cut can land mid-character.
        let cut = find_char_boundary(text, cut);
        if cut == 0 {
            // Progress guard for degenerate limits (e.g. a multi-byte
            // character wider than the limit).
            find_char_boundary_forward(text, limit.max(1)).min(text.len())
        } else {
            cut
        }
    }

    /// Validates the configuration.
    fn validate(&self) -> Result<()> {
        if self.budget == 0 {
            return Err(SplitError::InvalidConfig {
                reason: "budget must be > 0".to_string(),
            }
            .into());
        }
        if self.budget > TRANSPORT_LIMIT {
            return Err(SplitError::InvalidConfig {
                reason: format!(
                    "budget {} exceeds transport limit {TRANSPORT_LIMIT}",
                    self.budget
                ),
            }
            .into());
        }
        if self.reserve >= self.budget {
            return Err(SplitError::ReserveTooLarge {
                reserve: self.reserve,
                budget: self.budget,
            }
            .into());
        }
        Ok(())
    }
}

/// Finds the last occurrence of an ASCII byte at or before `upto`.
fn rfind_byte(text: &str, needle: u8, upto: usize) -> Option<usize> {
    let bytes = text.as_bytes();
    let end = upto.min(bytes.len() - 1);
    bytes[..=end].iter().rposition(|&b| b == needle)
}
