//! CLI definitions using clap derive API
//!
//! This module is organized into submodules for each command's argument types:
//! - generate: Generate command arguments
//! - completions: Completions command arguments

use clap::builder::{Styles, styling::AnsiColor};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

pub mod completions;
pub mod generate;

pub use completions::CompletionsArgs;
pub use generate::GenerateArgs;

/// Baler - packaging tool
///
/// Maintain a tool-managed internal copy of the bale manifest with metadata
/// overridden at build or publish time.
#[derive(Parser, Debug)]
#[command(
    name = "baler",
    author,
    version,
    color = clap::ColorChoice::Always,
    styles = Styles::styled()
        .header(AnsiColor::Green.on_default().bold())
        .usage(AnsiColor::Green.on_default().bold())
        .literal(AnsiColor::Cyan.on_default().bold())
        .placeholder(AnsiColor::Cyan.on_default()),
    about = "Packaging tool that generates the internal copy of a bale manifest",
    long_about = "Baler maintains a tool-managed copy of the user's bale manifest under \
                  .baler/app/, with selected metadata fields (name, version) overridden \
                  dynamically so the source manifest never needs hand-editing.",
    after_help = "\x1b[1m\x1b[32mExamples:\x1b[0m\n   \
                  baler generate                      \x1b[90m# Copy baler.yaml as-is\x1b[0m\n   \
                  baler generate --name mybale        \x1b[90m# Override the bale name\x1b[0m\n   \
                  baler generate --version 1.2.0      \x1b[90m# Override the bale version\x1b[0m\n   \
                  baler completions zsh               \x1b[90m# Generate shell completions\x1b[0m\n\n\
                  "
)]
pub struct Cli {
    /// Workspace directory (defaults to current directory)
    #[arg(long, short = 'w', global = true, env = "BALER_WORKSPACE")]
    pub workspace: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Generate the internal manifest with metadata overrides applied
    Generate(GenerateArgs),

    /// Show version information
    #[command(hide = true)]
    Version,

    /// Generate shell completions
    Completions(CompletionsArgs),
}
