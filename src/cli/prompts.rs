//! Centralized warning and prompt messages for CLI output.

use std::io::Write;
use std::path::Path;

use super::quiet;

// ANSI color codes
const YELLOW: &str = "\x1b[33m";
const RED: &str = "\x1b[31m";
const RESET: &str = "\x1b[0m";

/// Yellow warning on stderr, suppressed in quiet mode.
pub fn warn(msg: &str) {
    if !quiet::enabled() {
        eprintln!("{YELLOW}{msg}{RESET}");
    }
}

/// Red error on stderr, always shown.
pub fn error(msg: &str) {
    eprintln!("{RED}{msg}{RESET}");
}

pub fn weak_source(name: &str) {
    warn(&format!(
        "Warning: using non-cryptographic entropy ({name}); do not use these passwords for anything important."
    ));
}

pub fn clipboard_copied() {
    if !quiet::enabled() {
        println!("*** -COPIED TO CLIPBOARD- ***");
    }
}

/// Ask whether to print instead when the clipboard is unavailable.
/// Non-interactive and quiet runs fall back to the terminal silently.
pub fn clipboard_fallback_prompt() -> bool {
    if quiet::skip_prompt() {
        return true;
    }

    eprint!("Clipboard unavailable. Print to terminal instead? [Y/n]: ");
    let _ = std::io::stderr().flush();

    let mut input = String::new();
    if std::io::stdin().read_line(&mut input).is_err() {
        return true;
    }
    let accepted = matches!(input.trim().to_ascii_lowercase().as_str(), "" | "y" | "yes");
    if !accepted {
        eprintln!("Aborted.");
    }
    accepted
}

pub fn passwords_written(count: usize, path: &Path) {
    if !quiet::enabled() {
        let full = std::fs::canonicalize(path).unwrap_or_else(|_| path.to_path_buf());
        println!("{count} password(s) \u{2192} {}", full.display());
    }
}

pub fn settings_saved(path: &Path) {
    if !quiet::enabled() {
        eprintln!("Settings saved to {}", path.display());
    }
}

pub fn output_written(path: &Path) {
    if !quiet::enabled() {
        eprintln!("Output written to {}", path.display());
    }
}
