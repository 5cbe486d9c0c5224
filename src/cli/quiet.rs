//! Global quiet mode and tty checks for the CLI.

use std::sync::atomic::{AtomicBool, Ordering};

/// Suppresses warnings, summaries and prompts.
static QUIET: AtomicBool = AtomicBool::new(false);

pub fn set(quiet: bool) {
    QUIET.store(quiet, Ordering::SeqCst);
}

pub fn enabled() -> bool {
    QUIET.load(Ordering::Relaxed)
}

pub fn stdin_is_tty() -> bool {
    unsafe { libc::isatty(libc::STDIN_FILENO) == 1 }
}

/// True when quiet mode is on or stdin cannot answer a prompt.
pub fn skip_prompt() -> bool {
    enabled() || !stdin_is_tty()
}
