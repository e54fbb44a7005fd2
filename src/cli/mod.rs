//! CLI layer for reply-pager.
//!
//! Provides the command-line interface using clap, with commands for
//! splitting replies, checking tag balance, replaying the navigation
//! protocol, and rendering the model menu.

pub mod commands;
pub mod output;
pub mod parser;

pub use commands::execute;
pub use output::OutputFormat;
pub use parser::{Cli, Commands};
