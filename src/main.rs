//! Markform - Markdown toolbar actions from the command line.
//!
//! # Usage
//!
//! ```bash
//! markform bold notes.md --anchor 3:9 --cursor 3:13
//! cat notes.md | markform h2 --anchor 2:1 --cursor 4:1
//! markform code-block --fence '~~~' --save notes.md
//! ```
//!
//! The edited text goes to stdout; the input file is never rewritten.

use std::io::{Read, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;

use markform::config::{
    clear_config_flags, global_config_path, load_config_flags, local_override_path,
    parse_flag_tokens, save_config_flags, ConfigFlags,
};
use markform::editor::{apply_and_commit_with, Cursor, EditorBuffer};
use markform::selection::Position;
use markform::transform::{Action, Markers};

/// Apply a Markdown toolbar action to a selection
#[derive(Parser, Debug)]
#[command(name = "markform", version, about, long_about = None)]
struct Cli {
    /// Action to apply
    #[arg(value_enum, value_name = "ACTION")]
    action: Action,

    /// Markdown file to read (stdin when omitted)
    #[arg(value_name = "FILE")]
    file: Option<PathBuf>,

    /// Cursor position as ROW:COL, counting from 1
    #[arg(long, value_name = "ROW:COL", default_value = "1:1")]
    cursor: Position,

    /// Selection start as ROW:COL (defaults to the cursor, selecting nothing)
    #[arg(long, value_name = "ROW:COL")]
    anchor: Option<Position>,

    /// Delimiter row for code blocks
    #[arg(long, value_name = "STR")]
    fence: Option<String>,

    /// Row inserted for page breaks
    #[arg(long, value_name = "STR", allow_hyphen_values = true)]
    page_break: Option<String>,

    /// Log each applied action to stderr
    #[arg(short, long)]
    verbose: bool,

    /// Save current command-line flags as defaults
    #[arg(long)]
    save: bool,

    /// Clear saved defaults
    #[arg(long)]
    clear: bool,
}

fn read_input(file: Option<&Path>, mut stdin: impl Read) -> Result<String> {
    if let Some(path) = file {
        return std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()));
    }
    let mut text = String::new();
    stdin
        .read_to_string(&mut text)
        .context("Failed to read stdin")?;
    Ok(text)
}

/// Select `anchor` to `cursor` in `buffer`. Returns true when either end
/// had to be clamped into the text.
fn select_clamped(buffer: &mut EditorBuffer, anchor: Position, cursor: Position) -> bool {
    let (anchor, cursor) = (Cursor::from(anchor), Cursor::from(cursor));
    buffer.select(anchor, cursor);
    buffer.cursor() != cursor || buffer.anchor() != Some(anchor)
}

/// Apply the requested action to `text` and return the edited text.
fn run(cli: &Cli, markers: &Markers, text: &str) -> Result<String> {
    let mut buffer = EditorBuffer::from_text(text);
    if select_clamped(&mut buffer, cli.anchor.unwrap_or(cli.cursor), cli.cursor) {
        tracing::warn!(
            cursor = %buffer.cursor().position(),
            anchor = ?buffer.anchor().map(Cursor::position),
            "selection clamped to the text"
        );
    }

    apply_and_commit_with(&mut buffer, cli.action, markers)
        .with_context(|| format!("{} failed", cli.action.label()))?;
    Ok(buffer.text())
}

fn main() -> Result<()> {
    let raw_args = std::env::args().collect::<Vec<_>>();
    let cli = Cli::parse();
    let global_path = global_config_path();
    let local_path = local_override_path();
    let cli_flags = parse_flag_tokens(&raw_args);

    if cli.clear {
        clear_config_flags(&global_path)?;
    }
    if cli.save {
        save_config_flags(&global_path, &cli_flags)?;
    }

    let file_flags = if cli.clear {
        ConfigFlags::default()
    } else {
        let global_flags = load_config_flags(&global_path)?;
        let local_flags = load_config_flags(&local_path)?;
        global_flags.union(&local_flags)
    };
    let effective = file_flags.union(&cli_flags);

    // Initialize logging
    let level = if effective.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::WARN
    };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into()),
        )
        .init();
    tracing::debug!(?effective, "loaded config");

    let text = read_input(cli.file.as_deref(), std::io::stdin().lock())?;
    let output = run(&cli, &effective.markers(), &text)?;

    let mut stdout = std::io::stdout().lock();
    stdout
        .write_all(output.as_bytes())
        .context("Failed to write output")?;
    stdout.flush().context("Failed to write output")
}
