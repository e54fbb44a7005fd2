//! Per-user session preferences.
//!
//! A flat record per user: selected text model, interaction mode, and
//! image-generation model. Created lazily on first access, lost on
//! restart.

use serde::{Deserialize, Serialize};

/// Default text-completion model for new sessions.
pub const DEFAULT_TEXT_MODEL: &str = "openai/gpt-3.5-turbo";

/// What the user's next message is routed to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChatMode {
    /// Text completion chat.
    #[default]
    Chat,
    /// Image generation from a prompt.
    ImageGen,
}

/// Image-generation backend model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ImageModel {
    /// Default diffusion model.
    #[default]
    Flux,
    /// Faster, lower-quality variant.
    Turbo,
    /// Alternative art-leaning model.
    Pixart,
}

impl ImageModel {
    /// Model name as sent to the image provider.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Flux => "flux",
            Self::Turbo => "turbo",
            Self::Pixart => "pixart",
        }
    }
}

/// Preferences for one user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserSession {
    /// Selected text-completion model identifier.
    pub model: String,
    /// Current interaction mode.
    pub mode: ChatMode,
    /// Selected image-generation model.
    pub image_model: ImageModel,
}

impl Default for UserSession {
    fn default() -> Self {
        Self {
            model: DEFAULT_TEXT_MODEL.to_string(),
            mode: ChatMode::default(),
            image_model: ImageModel::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_session_defaults() {
        let session = UserSession::default();
        assert_eq!(session.model, DEFAULT_TEXT_MODEL);
        assert_eq!(session.mode, ChatMode::Chat);
        assert_eq!(session.image_model, ImageModel::Flux);
    }

    #[test]
    fn test_image_model_names() {
        assert_eq!(ImageModel::Flux.as_str(), "flux");
        assert_eq!(ImageModel::Turbo.as_str(), "turbo");
        assert_eq!(ImageModel::Pixart.as_str(), "pixart");
    }

    #[test]
    fn test_session_serialization() {
        let session = UserSession {
            model: "google/gemini-flash".to_string(),
            mode: ChatMode::ImageGen,
            image_model: ImageModel::Turbo,
        };
        let json = serde_json::to_string(&session).unwrap();
        let back: UserSession = serde_json::from_str(&json).unwrap();
        assert_eq!(back, session);
    }
}
