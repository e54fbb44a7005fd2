//! Output formatting for CLI commands.
//!
//! Supports text and JSON output formats.

use crate::error::Error;
use crate::io::unicode::grapheme_count;
use crate::nav::NavButton;
use crate::pager::{CreatedPage, NavOutcome};
use serde::Serialize;
use std::fmt::Write;

/// Output format options.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Human-readable text output.
    Text,
    /// JSON output.
    Json,
}

impl OutputFormat {
    /// Parses format from string.
    #[must_use]
    pub fn parse(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "json" => Self::Json,
            _ => Self::Text,
        }
    }
}

/// Formats an error for the selected output format.
#[must_use]
pub fn format_error(err: &Error, format: OutputFormat) -> String {
    match format {
        OutputFormat::Text => err.to_string(),
        OutputFormat::Json => {
            #[derive(Serialize)]
            struct ErrorOutput {
                error: String,
            }
            format_json(&ErrorOutput {
                error: err.to_string(),
            })
        }
    }
}

/// Formats a split chunk sequence.
#[must_use]
pub fn format_chunks(chunks: &[String], budget: usize, format: OutputFormat) -> String {
    match format {
        OutputFormat::Text => format_chunks_text(chunks, budget),
        OutputFormat::Json => {
            #[derive(Serialize)]
            struct ChunkOutput<'a> {
                index: usize,
                bytes: usize,
                graphemes: usize,
                content: &'a str,
            }
            let rows: Vec<ChunkOutput<'_>> = chunks
                .iter()
                .enumerate()
                .map(|(index, chunk)| ChunkOutput {
                    index,
                    bytes: chunk.len(),
                    graphemes: grapheme_count(chunk),
                    content: chunk,
                })
                .collect();
            format_json(&rows)
        }
    }
}

fn format_chunks_text(chunks: &[String], budget: usize) -> String {
    let mut output = String::new();
    let _ = writeln!(output, "{} pages (budget {budget} bytes)", chunks.len());

    for (index, chunk) in chunks.iter().enumerate() {
        let _ = writeln!(
            output,
            "--- page {}/{} ({} bytes, {} graphemes) ---",
            index + 1,
            chunks.len(),
            chunk.len(),
            grapheme_count(chunk)
        );
        output.push_str(chunk);
        if !chunk.ends_with('\n') {
            output.push('\n');
        }
    }

    output
}

/// Per-tag balance row for the `check` command.
#[derive(Debug, Clone, Serialize)]
pub struct TagBalanceRow {
    /// Tag opening pattern.
    pub tag: &'static str,
    /// Opening occurrences.
    pub opens: usize,
    /// Closing occurrences.
    pub closes: usize,
}

/// Formats a tag balance report.
#[must_use]
pub fn format_balance(rows: &[TagBalanceRow], balanced: bool, format: OutputFormat) -> String {
    match format {
        OutputFormat::Text => {
            let mut output = String::new();
            let _ = writeln!(
                output,
                "Balance: {}",
                if balanced { "ok" } else { "UNBALANCED" }
            );
            for row in rows {
                let marker = if row.opens == row.closes { " " } else { "!" };
                let _ = writeln!(
                    output,
                    "{marker} {:<14} opens: {:<4} closes: {}",
                    row.tag, row.opens, row.closes
                );
            }
            output
        }
        OutputFormat::Json => {
            #[derive(Serialize)]
            struct BalanceOutput<'a> {
                balanced: bool,
                tags: &'a [TagBalanceRow],
            }
            format_json(&BalanceOutput {
                balanced,
                tags: rows,
            })
        }
    }
}

/// One replayed navigation step of the `walk` command.
#[derive(Debug, Clone, Serialize)]
pub struct WalkStep {
    /// Callback data replayed.
    pub action: String,
    /// Outcome of the navigation.
    pub outcome: NavOutcome,
}

/// Formats a walk through a paged response.
#[must_use]
pub fn format_walk(created: &CreatedPage, steps: &[WalkStep], format: OutputFormat) -> String {
    match format {
        OutputFormat::Text => format_walk_text(created, steps),
        OutputFormat::Json => {
            #[derive(Serialize)]
            struct WalkOutput<'a> {
                created: &'a CreatedPage,
                steps: &'a [WalkStep],
            }
            format_json(&WalkOutput { created, steps })
        }
    }
}

fn format_walk_text(created: &CreatedPage, steps: &[WalkStep]) -> String {
    let mut output = String::new();
    let _ = writeln!(
        output,
        "Cached response {} ({} pages)",
        created.id, created.total_pages
    );
    let _ = writeln!(output, "--- page 1/{} ---", created.total_pages);
    output.push_str(&created.first_chunk);
    if !created.first_chunk.ends_with('\n') {
        output.push('\n');
    }
    if let Some(row) = &created.controls {
        let _ = writeln!(output, "controls: {}", format_control_row(row));
    }

    for step in steps {
        let _ = writeln!(output, "\n>> {}", step.action);
        match &step.outcome {
            NavOutcome::Page {
                chunk,
                index,
                total,
                controls,
            } => {
                let _ = writeln!(output, "--- page {}/{total} ---", index + 1);
                output.push_str(chunk);
                if !chunk.ends_with('\n') {
                    output.push('\n');
                }
                if let Some(row) = controls {
                    let _ = writeln!(output, "controls: {}", format_control_row(row));
                }
            }
            NavOutcome::Expired => {
                output.push_str("response expired\n");
            }
            NavOutcome::Noop => {
                output.push_str("no-op\n");
            }
        }
    }

    output
}

/// Formats the model menu keyboard.
#[must_use]
pub fn format_menu(rows: &[Vec<NavButton>], format: OutputFormat) -> String {
    match format {
        OutputFormat::Text => {
            let mut output = String::new();
            for row in rows {
                for button in row {
                    let _ = write!(output, "[{} -> {}] ", button.label, button.action);
                }
                output.push('\n');
            }
            output
        }
        OutputFormat::Json => format_json(&rows),
    }
}

fn format_control_row(row: &[NavButton]) -> String {
    row.iter()
        .map(|b| format!("[{} -> {}]", b.label, b.action))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Formats a value as JSON.
fn format_json<T: Serialize>(value: &T) -> String {
    serde_json::to_string_pretty(value).unwrap_or_else(|_| "{}".to_string())
}
