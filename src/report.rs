//! Scan summary formatting and printing.
//!
//! Kept separate from the extraction core so the library can be used
//! without printing side effects.

use colored::Colorize;

use crate::occurrence::LocalizableStringCollection;

/// Success mark for consistent output formatting
pub const SUCCESS_MARK: &str = "\u{2713}"; // ✓

/// Print a per-entry listing and a closing count line.
///
/// Verbose mode lists every recorded location; the default shows the first
/// location plus a count.
pub fn print_summary(strings: &LocalizableStringCollection, verbose: bool) {
    for entry in strings.entries() {
        let id = match &entry.plural_id {
            Some(plural) => format!("\"{}\" / \"{}\"", entry.msg_id, plural),
            None => format!("\"{}\"", entry.msg_id),
        };
        match &entry.context {
            Some(context) => println!("{}  {}", id.bold(), context.dimmed().cyan()),
            None => println!("{}", id.bold()),
        }

        if verbose {
            for location in &entry.locations {
                println!("  {} {}:{}", "-->".blue(), location.file, location.line);
            }
        } else if let Some(first) = entry.locations.first() {
            let more = entry.locations.len() - 1;
            if more > 0 {
                println!(
                    "  {} {}:{} {}",
                    "-->".blue(),
                    first.file,
                    first.line,
                    format!("(+{} more)", more).dimmed()
                );
            } else {
                println!("  {} {}:{}", "-->".blue(), first.file, first.line);
            }
        }
    }

    if !strings.is_empty() {
        println!();
    }
    println!(
        "{} {} localizable {} ({} {})",
        SUCCESS_MARK.green(),
        strings.len(),
        if strings.len() == 1 { "string" } else { "strings" },
        strings.occurrence_count(),
        if strings.occurrence_count() == 1 {
            "occurrence"
        } else {
            "occurrences"
        },
    );
}
