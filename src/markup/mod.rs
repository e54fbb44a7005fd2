//! Restricted markup vocabulary for chat replies.
//!
//! Replies use a small HTML subset accepted by the messaging transport:
//! bold, italic, spoiler, and a preformatted code block whose `<code>`
//! element may carry a language attribute. Input markup is assumed
//! well-formed; this module exists so the splitter can keep it well-formed
//! across the artificial boundaries it introduces.

pub mod scanner;

pub use scanner::{PreBalance, Tag, ends_inside_pre, is_balanced, last_pre_open_tag, pre_balance};

/// Closing sequence appended to a chunk that ends inside a preformatted block.
pub const PRE_CLOSE: &str = "</code></pre>";

/// Reopening sequence used when the original opening tag cannot be recovered.
pub const PRE_OPEN_FALLBACK: &str = "<pre><code>";
