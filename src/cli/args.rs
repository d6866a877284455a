//! CLI argument definitions using clap.
//!
//! ## Commands
//!
//! - `extract`: Scan a C# project and print the localizable strings found,
//!   or write them to a POT template with `--output`.

use std::path::PathBuf;

use clap::{Args, CommandFactory, Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Arguments {
    #[command(subcommand)]
    pub command: Option<Command>,
}

impl Arguments {
    /// Check if a command was provided, otherwise print help and return None.
    pub fn with_command_or_help(self) -> Option<Self> {
        if self.command.is_none() {
            Self::command().print_help().ok();
            None
        } else {
            Some(self)
        }
    }
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Extract localizable strings from a C# project
    Extract(ExtractCommand),
}

#[derive(Debug, Args)]
pub struct ExtractCommand {
    /// Project root directory to scan
    pub project: PathBuf,

    /// Base path for relative source locations (defaults to the project root)
    #[arg(long)]
    pub base_path: Option<PathBuf>,

    /// Write a POT template to this file instead of printing a summary
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Verify localizer types instead of matching `T[..]` by name convention
    #[arg(long)]
    pub semantic: bool,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}
