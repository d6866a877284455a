//! Main entry point for the po-extract CLI.
//!
//! Dispatches to the command handler based on the parsed arguments.

use std::fs::File;
use std::io::{BufWriter, Write};

use anyhow::{Context, Result};
use colored::Colorize;

use super::args::{Arguments, Command, ExtractCommand};
use super::exit_status::ExitStatus;
use crate::occurrence::LocalizableStringCollection;
use crate::po::write_pot;
use crate::processor::{ExtractionMode, ProjectProcessor};
use crate::report::{SUCCESS_MARK, print_summary};

pub fn run_cli(args: Arguments) -> Result<ExitStatus> {
    let Some(Arguments {
        command: Some(command),
    }) = args.with_command_or_help()
    else {
        return Ok(ExitStatus::Success);
    };

    match command {
        Command::Extract(cmd) => extract(cmd),
    }
}

fn extract(cmd: ExtractCommand) -> Result<ExitStatus> {
    let base_path = cmd.base_path.clone().unwrap_or_else(|| cmd.project.clone());
    let mode = if cmd.semantic {
        ExtractionMode::Semantic
    } else {
        ExtractionMode::Syntactic
    };

    let processor = ProjectProcessor::new(&base_path, mode);
    let mut strings = LocalizableStringCollection::new();
    processor
        .process(&cmd.project, &mut strings)
        .with_context(|| format!("failed to scan {}", cmd.project.display()))?;

    match &cmd.output {
        Some(output) => {
            let file = File::create(output)
                .with_context(|| format!("failed to create {}", output.display()))?;
            let mut writer = BufWriter::new(file);
            write_pot(&strings, &mut writer)
                .and_then(|_| writer.flush())
                .with_context(|| format!("failed to write {}", output.display()))?;
            println!(
                "{} Wrote {} localizable strings to {}",
                SUCCESS_MARK.green(),
                strings.len(),
                output.display()
            );
        }
        None => print_summary(&strings, cmd.verbose),
    }

    Ok(ExitStatus::Success)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_command_prints_help_and_succeeds() {
        let status = run_cli(Arguments { command: None }).unwrap();
        assert_eq!(status, ExitStatus::Success);
    }
}
