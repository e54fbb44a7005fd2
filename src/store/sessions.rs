//! Per-user session storage.
//!
//! One record per user identifier, created lazily on first access.
//! In-memory only; preferences reset on restart.

use crate::core::{ChatMode, ImageModel, UserSession};
use std::collections::HashMap;

/// In-memory map of user sessions.
///
/// # Examples
///
/// ```
/// use reply_pager::core::ChatMode;
/// use reply_pager::store::SessionStore;
///
/// let mut sessions = SessionStore::new();
/// sessions.set_mode(42, ChatMode::ImageGen);
/// assert_eq!(sessions.session(42).mode, ChatMode::ImageGen);
/// ```
#[derive(Debug, Default)]
pub struct SessionStore {
    sessions: HashMap<i64, UserSession>,
}

impl SessionStore {
    /// Creates an empty session store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the session for `user_id`, creating it with defaults on
    /// first access.
    pub fn session(&mut self, user_id: i64) -> &mut UserSession {
        self.sessions.entry(user_id).or_default()
    }

    /// Updates the user's text-model preference.
    pub fn set_model(&mut self, user_id: i64, model: &str) {
        self.session(user_id).model = model.to_string();
    }

    /// Updates the user's interaction mode.
    pub fn set_mode(&mut self, user_id: i64, mode: ChatMode) {
        self.session(user_id).mode = mode;
    }

    /// Updates the user's image-model preference.
    pub fn set_image_model(&mut self, user_id: i64, model: ImageModel) {
        self.session(user_id).image_model = model;
    }

    /// Returns the number of known users.
    #[must_use]
    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    /// Returns `true` if no sessions exist yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }
}
