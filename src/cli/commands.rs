//! CLI command implementations.
//!
//! Contains the business logic for each CLI command.

use crate::cli::output::{
    OutputFormat, TagBalanceRow, WalkStep, format_balance, format_chunks, format_menu,
    format_walk,
};
use crate::cli::parser::{Cli, Commands};
use crate::error::{CommandError, Result};
use crate::io::read_input;
use crate::markup::{self, Tag};
use crate::nav::{ModelEntry, NavAction, model_menu};
use crate::pager::{NavOutcome, Pager};
use crate::split::MarkupSplitter;
use crate::store::PageStore;

/// Demo model catalog for the `menu` command.
const DEMO_MODELS: [(&str, &str); 8] = [
    ("openai/gpt-3.5-turbo", "GPT-3.5 Turbo"),
    ("openai/gpt-4o-mini", "GPT-4o Mini"),
    ("google/gemini-flash", "Gemini Flash"),
    ("google/gemini-pro", "Gemini Pro"),
    ("anthropic/claude-haiku", "Claude Haiku"),
    ("meta/llama-3-8b", "Llama 3 8B"),
    ("mistral/mistral-small", "Mistral Small"),
    ("qwen/qwen-2-7b", "Qwen 2 7B"),
];

/// Executes the CLI command.
///
/// # Arguments
///
/// * `cli` - Parsed CLI arguments.
///
/// # Returns
///
/// Result with output string on success.
///
/// # Errors
///
/// Returns an error if the command fails to execute.
pub fn execute(cli: &Cli) -> Result<String> {
    let format = OutputFormat::parse(&cli.format);

    match &cli.command {
        Commands::Split {
            file,
            budget,
            reserve,
        } => cmd_split(file, *budget, *reserve, format),
        Commands::Check { file } => cmd_check(file, format),
        Commands::Walk {
            file,
            budget,
            actions,
        } => cmd_walk(file, *budget, actions, format),
        Commands::Menu { page, current } => cmd_menu(*page, current.as_deref(), format),
    }
}

/// Splits a reply file and prints the resulting pages.
fn cmd_split(file: &str, budget: usize, reserve: usize, format: OutputFormat) -> Result<String> {
    let text = read_input(file)?;
    let splitter = MarkupSplitter::with_budget_and_reserve(budget, reserve);
    let chunks = splitter.split(&text)?;
    Ok(format_chunks(&chunks, budget, format))
}

/// Reports per-tag balance of a fragment.
fn cmd_check(file: &str, format: OutputFormat) -> Result<String> {
    let text = read_input(file)?;

    let rows: Vec<TagBalanceRow> = Tag::ALL
        .iter()
        .map(|&tag| {
            let (opens, closes) = markup::scanner::tag_balance(&text, tag);
            TagBalanceRow {
                tag: tag.open_pattern(),
                opens,
                closes,
            }
        })
        .collect();

    Ok(format_balance(&rows, markup::is_balanced(&text), format))
}

/// Caches a reply and replays the navigation protocol over it.
fn cmd_walk(
    file: &str,
    budget: usize,
    extra_actions: &[String],
    format: OutputFormat,
) -> Result<String> {
    let text = read_input(file)?;
    let mut pager = Pager::with_parts(MarkupSplitter::with_budget(budget), PageStore::new());

    let created = pager.create(&text)?;

    // Follow the "next" control until it goes inert, exactly as a user
    // paging forward would
    let mut steps = Vec::new();
    let mut controls = created.controls.clone();
    while let Some(row) = controls.take() {
        let next = row.last().ok_or_else(|| {
            CommandError::ExecutionFailed("control row missing next button".to_string())
        })?;
        if next.action == NavAction::Noop.encode() {
            break;
        }
        let outcome = pager.navigate(&next.action)?;
        if let NavOutcome::Page {
            controls: fresh, ..
        } = &outcome
        {
            controls = fresh.clone();
        }
        steps.push(WalkStep {
            action: next.action.clone(),
            outcome,
        });
    }

    // Then any explicitly requested actions (clamped indices, noop, ...)
    for action in extra_actions {
        let outcome = pager.navigate(action)?;
        steps.push(WalkStep {
            action: action.clone(),
            outcome,
        });
    }

    Ok(format_walk(&created, &steps, format))
}

/// Renders the paginated model menu.
fn cmd_menu(page: usize, current: Option<&str>, format: OutputFormat) -> Result<String> {
    let models: Vec<ModelEntry> = DEMO_MODELS
        .iter()
        .map(|(id, name)| ModelEntry::new(id, name))
        .collect();

    let rows = model_menu(&models, current.unwrap_or(""), page);
    Ok(format_menu(&rows, format))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_temp(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "{content}").unwrap();
        file
    }

    fn cli_for(command: Commands) -> Cli {
        Cli {
            verbose: false,
            format: "text".to_string(),
            command,
        }
    }

    #[test]
    fn test_cmd_split() {
        let file = write_temp(&"a line of text\n".repeat(30));
        let cli = cli_for(Commands::Split {
            file: file.path().to_string_lossy().to_string(),
            budget: 100,
            reserve: 40,
        });
        let output = execute(&cli).unwrap();
        assert!(output.contains("pages (budget 100 bytes)"));
        assert!(output.contains("page 1/"));
    }

    #[test]
    fn test_cmd_split_missing_file() {
        let cli = cli_for(Commands::Split {
            file: "/nonexistent/reply.html".to_string(),
            budget: 100,
            reserve: 40,
        });
        assert!(execute(&cli).is_err());
    }

    #[test]
    fn test_cmd_check_balanced() {
        let file = write_temp("<b>ok</b> and <pre><code>x</code></pre>");
        let cli = cli_for(Commands::Check {
            file: file.path().to_string_lossy().to_string(),
        });
        let output = execute(&cli).unwrap();
        assert!(output.contains("Balance: ok"));
    }

    #[test]
    fn test_cmd_check_unbalanced() {
        let file = write_temp("<pre><code>half open");
        let cli = cli_for(Commands::Check {
            file: file.path().to_string_lossy().to_string(),
        });
        let output = execute(&cli).unwrap();
        assert!(output.contains("UNBALANCED"));
    }

    #[test]
    fn test_cmd_walk_visits_every_page() {
        let file = write_temp(&"sentence by sentence \n".repeat(30));
        let cli = cli_for(Commands::Walk {
            file: file.path().to_string_lossy().to_string(),
            budget: 100,
            actions: vec![],
        });
        let output = execute(&cli).unwrap();
        assert!(output.contains("Cached response"));
        // Walk ends on the last page
        assert!(output.contains("controls:"));
    }

    #[test]
    fn test_cmd_walk_extra_noop_action() {
        let file = write_temp(&"short text \n".repeat(30));
        let cli = cli_for(Commands::Walk {
            file: file.path().to_string_lossy().to_string(),
            budget: 100,
            actions: vec!["noop".to_string()],
        });
        let output = execute(&cli).unwrap();
        assert!(output.contains("no-op"));
    }

    #[test]
    fn test_cmd_menu() {
        let cli = cli_for(Commands::Menu {
            page: 0,
            current: Some("openai/gpt-3.5-turbo".to_string()),
        });
        let output = execute(&cli).unwrap();
        assert!(output.contains("✅ GPT-3.5 Turbo"));
        assert!(output.contains("menu_model_page:1"));
        assert!(output.contains("back_home"));
    }
}
