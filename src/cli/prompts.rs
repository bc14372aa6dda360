//! Centralized warning and prompt messages for CLI output.

use std::io::Write;
use std::path::Path;

use crossterm::style::{Color, Stylize};

use super::quiet;

/// Warning on stderr (yellow). Suppressed in quiet mode.
pub fn warn(msg: &str) {
    if !quiet::enabled() {
        eprintln!("{}", msg.with(Color::Yellow));
    }
}

/// Error on stderr (red). Always shown.
pub fn error(msg: &str) {
    eprintln!("{}", msg.with(Color::Red));
}

pub fn clipboard_copied(count: usize) {
    if !quiet::enabled() {
        println!("*** {count} password(s) copied to clipboard ***");
    }
}

/// Ask whether to print instead when the clipboard is unavailable.
/// Non-interactive and quiet runs fall back to printing.
pub fn clipboard_fallback_prompt(reason: &str) -> bool {
    if quiet::skip_prompt() {
        return true;
    }

    eprintln!("{}", format!("Clipboard unavailable: {reason}").with(Color::Yellow));
    eprint!("Print to terminal instead? [Y/n]: ");
    let _ = std::io::stderr().flush();

    let mut input = String::new();
    if std::io::stdin().read_line(&mut input).is_err() {
        return true;
    }
    let input = input.trim().to_lowercase();
    if input.is_empty() || input == "y" || input == "yes" {
        return true;
    }

    eprintln!("Aborted.");
    false
}

pub fn passwords_saved(count: usize, path: &Path) {
    if !quiet::enabled() {
        let full_path = std::fs::canonicalize(path)
            .map(|p| p.display().to_string())
            .unwrap_or_else(|_| path.display().to_string());
        eprintln!("{count} record(s) \u{2192} {full_path}");
        eprintln!(
            "{}",
            "Saved passwords are stored as plain text.".with(Color::Yellow)
        );
    }
}

pub fn defaults_saved(path: &Path) {
    if !quiet::enabled() {
        eprintln!("Defaults saved to {}", path.display());
    }
}
