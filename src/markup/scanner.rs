//! Tag scanner for the restricted markup vocabulary.
//!
//! A small explicit counter over literal tag patterns. Keeping the balance
//! check a pure function makes "is this chunk self-contained" testable
//! independently of the splitting logic that relies on it.

use regex::Regex;
use std::sync::LazyLock;

/// Matches a full preformatted-block opening sequence with attributes,
/// e.g. `<pre><code class="language-rust">`.
#[allow(clippy::expect_used)]
static PRE_OPEN_RE: LazyLock<Regex> = LazyLock::new(|| {
    // The pattern is a literal and always compiles
    Regex::new(r"<pre[^>]*><code[^>]*>").expect("static pattern compiles")
});

/// Tags in the restricted vocabulary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tag {
    /// `<b>` emphasis.
    Bold,
    /// `<i>` tone.
    Italic,
    /// `<tg-spoiler>` hidden text.
    Spoiler,
    /// `<pre>` preformatted block.
    Pre,
    /// `<code>` element, nested inside `<pre>` for code blocks.
    Code,
}

impl Tag {
    /// All tags in the vocabulary.
    pub const ALL: [Self; 5] = [
        Self::Bold,
        Self::Italic,
        Self::Spoiler,
        Self::Pre,
        Self::Code,
    ];

    /// Opening pattern. `Pre` and `Code` may carry attributes, so their
    /// pattern is a prefix; the others are exact tags.
    #[must_use]
    pub const fn open_pattern(self) -> &'static str {
        match self {
            Self::Bold => "<b>",
            Self::Italic => "<i>",
            Self::Spoiler => "<tg-spoiler>",
            Self::Pre => "<pre",
            Self::Code => "<code",
        }
    }

    /// Closing pattern, always exact.
    #[must_use]
    pub const fn close_pattern(self) -> &'static str {
        match self {
            Self::Bold => "</b>",
            Self::Italic => "</i>",
            Self::Spoiler => "</tg-spoiler>",
            Self::Pre => "</pre>",
            Self::Code => "</code>",
        }
    }
}

/// Open/close tally for the preformatted-block tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PreBalance {
    /// Number of `<pre` opening occurrences.
    pub opens: usize,
    /// Number of `</pre>` closing occurrences.
    pub closes: usize,
}

/// Counts preformatted-block openings and closings in `text`.
///
/// # Examples
///
/// ```
/// use reply_pager::markup::pre_balance;
///
/// let balance = pre_balance("<pre><code>fn main() {}</code></pre>");
/// assert_eq!(balance.opens, 1);
/// assert_eq!(balance.closes, 1);
/// ```
#[must_use]
pub fn pre_balance(text: &str) -> PreBalance {
    PreBalance {
        opens: count_occurrences(text, Tag::Pre.open_pattern()),
        closes: count_occurrences(text, Tag::Pre.close_pattern()),
    }
}

/// Returns `true` if `text` ends with an unterminated preformatted block.
#[must_use]
pub fn ends_inside_pre(text: &str) -> bool {
    let balance = pre_balance(text);
    balance.opens > balance.closes
}

/// Extracts the last preformatted-block opening sequence from `text`,
/// attributes included, for reopening the block in the next chunk.
///
/// Falls back to the bare pair when no full `<pre…><code…>` match exists
/// (e.g. a block written without a `<code>` element).
#[must_use]
pub fn last_pre_open_tag(text: &str) -> String {
    PRE_OPEN_RE
        .find_iter(text)
        .last()
        .map_or_else(|| super::PRE_OPEN_FALLBACK.to_string(), |m| m.as_str().to_string())
}

/// Open/close tally for a single tag.
#[must_use]
pub fn tag_balance(text: &str, tag: Tag) -> (usize, usize) {
    (
        count_occurrences(text, tag.open_pattern()),
        count_occurrences(text, tag.close_pattern()),
    )
}

/// Returns `true` if every tag in the vocabulary has matching open and
/// close counts in `text`.
///
/// This is a counting check, not a parser: nesting order is not verified.
/// Well-formed input split at safe points keeps counts sufficient.
#[must_use]
pub fn is_balanced(text: &str) -> bool {
    Tag::ALL.iter().all(|&tag| {
        let (opens, closes) = tag_balance(text, tag);
        opens == closes
    })
}

/// Counts non-overlapping occurrences of `pattern` in `text`.
fn count_occurrences(text: &str, pattern: &str) -> usize {
    if pattern.is_empty() {
        return 0;
    }
    let mut count = 0;
    let mut rest = text;
    while let Some(pos) = rest.find(pattern) {
        count += 1;
        rest = &rest[pos + pattern.len()..];
    }
    count
}
