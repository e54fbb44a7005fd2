//! # reply-pager
//!
//! Pagination engine for chat-bot replies.
//!
//! AI-generated replies routinely exceed a messaging platform's message
//! size limit. reply-pager splits HTML-formatted reply text into bounded,
//! tag-balanced pages, caches them under opaque identifiers with a lazy
//! TTL, and drives the inline prev/indicator/next navigation protocol
//! over the cached pages.
//!
//! ## Features
//!
//! - **Splitting**: line- and word-boundary-preferring splits that keep
//!   preformatted code blocks valid across page boundaries
//! - **Page cache**: keyed in-memory store with injected clock and lazy
//!   one-hour expiry
//! - **Navigation protocol**: `pg:<id>:<index>` callback encoding, inert
//!   `noop` sentinel, boundary-aware control rows
//! - **Sessions**: lazily created per-user model/mode preferences

#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![warn(missing_docs)]
// Note: unsafe is needed for memory-mapped I/O (memmap2)
#![warn(unsafe_code)]

pub mod cli;
pub mod core;
pub mod error;
pub mod io;
pub mod markup;
pub mod nav;
pub mod pager;
pub mod split;
pub mod store;

// Re-export commonly used types at crate root
pub use error::{Error, Result};

// Re-export core domain types
pub use core::{ChatMode, ImageModel, PagedResponse, UserSession, new_response_id};

// Re-export splitting types
pub use split::{CHUNK_BUDGET, MarkupSplitter, PRE_RESERVE};

// Re-export store types
pub use store::{CACHE_TTL_MS, Clock, ManualClock, PageStore, SessionStore, SystemClock};

// Re-export navigation types
pub use nav::{NOOP_ACTION, NavAction, NavButton, PAGE_ACTION_PREFIX, page_controls};

// Re-export the composition layer
pub use pager::{CreatedPage, NavOutcome, Pager};

// Re-export CLI types
pub use cli::{Cli, Commands, OutputFormat};
