mod check;
mod context;
mod convert;
mod flags;
mod help;
mod parse;
pub mod prompts;
mod quiet;

pub use parse::ParseError;

use context::Context;
use flags::Command;
use help::print_help;

/// Parse `args` and run the selected command.
pub fn run(args: Vec<String>) -> crate::error::Result<()> {
    let cli = parse::parse(&args)?;
    quiet::set(cli.quiet);

    match cli.command {
        Command::Help => print_help(),
        Command::Version => println!("swisskit {}", env!("CARGO_PKG_VERSION")),
        Command::Pass(flags) => Context::new(flags).run()?,
        Command::Csv(flags) => convert::run(&flags)?,
        Command::Strength(flags) => check::run(flags)?,
    }
    Ok(())
}
