// File: src/terminal.rs
// Purpose: Status region rendered on stdout

use colored::Colorize;
use relay_forms::{StatusKind, StatusSurface};

/// Prints each status message as it is shown
pub struct TerminalStatus;

impl StatusSurface for TerminalStatus {
    fn show(&self, kind: StatusKind, message: &str) {
        match kind {
            StatusKind::Success => println!("{} {}", "✓".green().bold(), message.green()),
            StatusKind::Error => println!("{} {}", "✗".red().bold(), message.red()),
        }
    }

    fn focus(&self) {}
}

/// Print per-field errors in rule order
pub fn print_field_errors<'a>(errors: impl IntoIterator<Item = (&'a str, &'a str)>) {
    for (field, message) in errors {
        println!("  {} {}", format!("{}:", field).yellow(), message);
    }
}
