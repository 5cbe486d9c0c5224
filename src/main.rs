use std::env;
use std::process::ExitCode;

use tracing_subscriber::EnvFilter;

mod cli;
mod csv;
mod error;
mod pass;
mod rand;
mod settings;
mod terminal;

use error::Error;

fn init_logging() {
    let filter = EnvFilter::try_from_env("SWISSKIT_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

fn main() -> ExitCode {
    #[cfg(target_os = "linux")]
    unsafe {
        libc::prctl(libc::PR_SET_DUMPABLE, 0);
    }

    init_logging();

    let args: Vec<String> = env::args().collect();
    match cli::run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e @ Error::Usage(_)) => {
            cli::prompts::error(&e.to_string());
            cli::prompts::error("Try 'swisskit --help' for more information.");
            ExitCode::from(2)
        }
        Err(e) => {
            cli::prompts::error(&format!("Error: {e}"));
            ExitCode::FAILURE
        }
    }
}
