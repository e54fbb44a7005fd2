//! Error types for reply-pager operations.
//!
//! This module provides the error hierarchy using `thiserror` for splitting,
//! navigation parsing, I/O, and CLI commands.
//!
//! Absence of a cached response is deliberately NOT an error: an expired or
//! unknown identifier surfaces as `None` (or [`crate::pager::NavOutcome::Expired`])
//! so callers can translate it into a user-facing notice. Out-of-range page
//! indices are clamped, never rejected.

use thiserror::Error;

/// Result type alias for reply-pager operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level error type for reply-pager operations.
#[derive(Error, Debug)]
pub enum Error {
    /// Splitting-related errors (text pagination).
    #[error("split error: {0}")]
    Split(#[from] SplitError),

    /// Navigation action errors (callback-data parsing).
    #[error("action error: {0}")]
    Action(#[from] ActionError),

    /// I/O errors (file operations in the CLI).
    #[error("I/O error: {0}")]
    Io(#[from] IoError),

    /// CLI command errors.
    #[error("command error: {0}")]
    Command(#[from] CommandError),
}

/// Splitting-specific errors for reply pagination.
#[derive(Error, Debug)]
pub enum SplitError {
    /// Empty or whitespace-only input text.
    ///
    /// Callers are expected to pre-filter degenerate input; the pager
    /// refuses it rather than caching an empty response.
    #[error("input text is empty")]
    EmptyInput,

    /// Invalid splitter configuration.
    #[error("invalid splitter configuration: {reason}")]
    InvalidConfig {
        /// Reason the configuration is invalid.
        reason: String,
    },

    /// Reserve leaves no room for content within the budget.
    #[error("reserve {reserve} must be less than budget {budget}")]
    ReserveTooLarge {
        /// Continuation reserve in bytes.
        reserve: usize,
        /// Chunk budget in bytes.
        budget: usize,
    },
}

/// Navigation action errors for the wire protocol.
#[derive(Error, Debug)]
pub enum ActionError {
    /// Callback data does not match any known action pattern.
    #[error("malformed navigation action: {data}")]
    Malformed {
        /// The callback data that failed to parse.
        data: String,
    },

    /// Page index component is not a valid integer.
    #[error("invalid page index in navigation action: {value}")]
    InvalidIndex {
        /// The index component that failed to parse.
        value: String,
    },
}

/// I/O-specific errors for file operations.
#[derive(Error, Debug)]
pub enum IoError {
    /// File not found.
    #[error("file not found: {path}")]
    FileNotFound {
        /// Path to the file that was not found.
        path: String,
    },

    /// Failed to read file.
    #[error("failed to read file: {path}: {reason}")]
    ReadFailed {
        /// Path to the file.
        path: String,
        /// Reason for failure.
        reason: String,
    },

    /// Memory mapping error.
    #[error("memory mapping failed: {path}: {reason}")]
    MmapFailed {
        /// Path to the file.
        path: String,
        /// Reason for failure.
        reason: String,
    },

    /// Generic I/O error wrapper.
    #[error("I/O error: {0}")]
    Generic(String),
}

/// CLI command-specific errors.
#[derive(Error, Debug)]
pub enum CommandError {
    /// Invalid argument provided.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// Command execution failed.
    #[error("command execution failed: {0}")]
    ExecutionFailed(String),

    /// Output format error.
    #[error("output format error: {0}")]
    OutputFormat(String),
}

// Implement From traits for standard library errors

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Self::Io(IoError::Generic(err.to_string()))
    }
}

impl From<serde_json::Error> for CommandError {
    fn from(err: serde_json::Error) -> Self {
        Self::OutputFormat(err.to_string())
    }
}
