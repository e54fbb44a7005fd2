//! Core domain models for reply-pager.
//!
//! This module contains the fundamental data structures used throughout
//! the pagination engine: cached paged responses and per-user session
//! records. These are pure domain models with no I/O dependencies.

pub mod response;
pub mod session;

pub use response::{PagedResponse, new_response_id};
pub use session::{ChatMode, ImageModel, UserSession};
