//! Command-line argument parsing.
//!
//! Defines the CLI structure using clap derive macros.

use clap::{Parser, Subcommand};

/// reply-pager: pagination engine for chat-bot replies.
///
/// Splits HTML-formatted reply text into transport-sized, tag-balanced
/// pages and drives the inline navigation protocol over them.
#[derive(Parser, Debug)]
#[command(name = "reply-pager")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Enable verbose logging to stderr.
    #[arg(short, long, global = true, env = "REPLY_PAGER_VERBOSE")]
    pub verbose: bool,

    /// Output format (text, json).
    #[arg(long, default_value = "text", global = true)]
    pub format: String,

    /// The subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

/// Available CLI commands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Split a reply into transport-sized pages.
    Split {
        /// Path to the reply file, or `-` for stdin.
        file: String,

        /// Chunk budget in bytes.
        #[arg(long, default_value = "2000")]
        budget: usize,

        /// Bytes reserved for re-closing a continued code block.
        #[arg(long, default_value = "40")]
        reserve: usize,
    },

    /// Check tag balance of a reply fragment.
    Check {
        /// Path to the fragment file, or `-` for stdin.
        file: String,
    },

    /// Cache a reply and replay its navigation protocol page by page.
    Walk {
        /// Path to the reply file, or `-` for stdin.
        file: String,

        /// Chunk budget in bytes.
        #[arg(long, default_value = "2000")]
        budget: usize,

        /// Extra callback data to replay after the page walk (repeatable).
        #[arg(long = "action")]
        actions: Vec<String>,
    },

    /// Render the paginated model-selection menu.
    Menu {
        /// Menu page to render (clamped into range).
        #[arg(long, default_value = "0")]
        page: usize,

        /// Model identifier to mark as selected.
        #[arg(long)]
        current: Option<String>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_parse() {
        // Test that CLI can be created
        Cli::command().debug_assert();
    }

    #[test]
    fn test_split_defaults() {
        let cli = Cli::parse_from(["reply-pager", "split", "reply.html"]);
        match cli.command {
            Commands::Split {
                file,
                budget,
                reserve,
            } => {
                assert_eq!(file, "reply.html");
                assert_eq!(budget, 2000);
                assert_eq!(reserve, 40);
            }
            other => unreachable!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_walk_repeatable_actions() {
        let cli = Cli::parse_from([
            "reply-pager",
            "walk",
            "-",
            "--action",
            "pg:x:1",
            "--action",
            "noop",
        ]);
        match cli.command {
            Commands::Walk { actions, .. } => {
                assert_eq!(actions, vec!["pg:x:1".to_string(), "noop".to_string()]);
            }
            other => unreachable!("unexpected command: {other:?}"),
        }
    }
}
