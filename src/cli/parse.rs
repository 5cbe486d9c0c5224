use thiserror::Error;

use super::flags::{Cli, Command, CsvFlags, CsvMode, PassFlags, StrengthFlags};
use crate::csv::Delimiter;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    #[error("Invalid number: {0}")]
    InvalidNumber(String),

    #[error("Unknown argument: {0}")]
    UnknownArg(String),

    #[error("{0} must be at least 1")]
    ZeroCount(String),

    #[error("Missing value for {0}")]
    MissingValue(String),

    #[error("{0}")]
    InvalidPreset(String),

    #[error("{0}")]
    InvalidDelimiter(String),

    #[error("Unknown csv mode: {0} (expected to-json, from-json or rows)")]
    UnknownMode(String),
}

/// Walks the arguments after the subcommand.
struct Args<'a> {
    args: &'a [String],
    i: usize,
}

impl<'a> Args<'a> {
    fn next(&mut self) -> Option<&'a str> {
        let arg = self.args.get(self.i)?;
        self.i += 1;
        Some(arg.as_str())
    }

    fn value(&mut self, flag: &str) -> Result<&'a str, ParseError> {
        self.next()
            .ok_or_else(|| ParseError::MissingValue(flag.to_string()))
    }

    fn number(&mut self, flag: &str) -> Result<usize, ParseError> {
        let raw = self.value(flag)?;
        raw.parse()
            .map_err(|_| ParseError::InvalidNumber(raw.to_string()))
    }
}

/// Parse `args` (program name first).
///
/// The first argument may name a subcommand (`pass`, `csv`, `strength`);
/// anything else is read as `pass` options.
pub fn parse(args: &[String]) -> Result<Cli, ParseError> {
    let rest = args.get(1..).unwrap_or_default();
    let (name, rest) = match rest.first().map(String::as_str) {
        Some(cmd @ ("pass" | "csv" | "strength")) => (cmd, &rest[1..]),
        _ => ("pass", rest),
    };

    let mut cli = Cli {
        command: Command::Help,
        quiet: false,
    };
    let mut args = Args { args: rest, i: 0 };

    cli.command = match name {
        "csv" => parse_csv(&mut args, &mut cli.quiet)?,
        "strength" => parse_strength(&mut args, &mut cli.quiet)?,
        _ => parse_pass(&mut args, &mut cli.quiet)?,
    };
    Ok(cli)
}

fn parse_pass(args: &mut Args, quiet: &mut bool) -> Result<Command, ParseError> {
    let mut flags = PassFlags::default();

    while let Some(arg) = args.next() {
        match arg {
            "-h" | "--help" => return Ok(Command::Help),
            "-v" | "--version" => return Ok(Command::Version),
            "-q" | "--quiet" => *quiet = true,
            "-l" | "--length" => flags.length = Some(args.number(arg)?),
            "-n" | "--number" => match args.number(arg)? {
                0 => return Err(ParseError::ZeroCount(arg.to_string())),
                n => flags.number = Some(n),
            },
            "-p" | "--preset" => {
                let name = args.value(arg)?;
                flags.preset = Some(name.parse().map_err(ParseError::InvalidPreset)?);
            }
            "--no-lower" => flags.no_lower = true,
            "--no-upper" => flags.no_upper = true,
            "--no-digits" => flags.no_digits = true,
            "--no-symbols" => flags.no_symbols = true,
            "--symbols" => flags.symbols = Some(args.value(arg)?.to_string()),
            "--allow-similar" => flags.allow_similar = true,
            "--no-ambiguous" => flags.no_ambiguous = true,
            "-o" | "--output" => flags.output = Some(args.value(arg)?.to_string()),
            "-b" | "--board" => flags.clipboard = true,
            "--stats" => flags.stats = true,
            "-s" | "--saved" => flags.saved = true,
            "--save" => flags.save = true,
            "--hw" => flags.hw = true,
            other => return Err(ParseError::UnknownArg(other.to_string())),
        }
    }

    Ok(Command::Pass(flags))
}

fn parse_csv(args: &mut Args, quiet: &mut bool) -> Result<Command, ParseError> {
    let mut mode = None;
    let mut flags = CsvFlags {
        mode: CsvMode::ToJson,
        delimiter: Delimiter::default(),
        compact: false,
        output: None,
        input: None,
    };

    while let Some(arg) = args.next() {
        match arg {
            "-h" | "--help" => return Ok(Command::Help),
            "-v" | "--version" => return Ok(Command::Version),
            "-q" | "--quiet" => *quiet = true,
            "-d" | "--delimiter" => {
                flags.delimiter = args
                    .value(arg)?
                    .parse()
                    .map_err(|e: crate::error::CsvError| ParseError::InvalidDelimiter(e.to_string()))?;
            }
            "--compact" => flags.compact = true,
            "-o" | "--output" => flags.output = Some(args.value(arg)?.to_string()),
            "to-json" if mode.is_none() => mode = Some(CsvMode::ToJson),
            "from-json" if mode.is_none() => mode = Some(CsvMode::FromJson),
            "rows" if mode.is_none() => mode = Some(CsvMode::Rows),
            other if other.starts_with('-') && other != "-" => {
                return Err(ParseError::UnknownArg(other.to_string()));
            }
            other if mode.is_none() => return Err(ParseError::UnknownMode(other.to_string())),
            path if flags.input.is_none() => flags.input = Some(path.to_string()),
            other => return Err(ParseError::UnknownArg(other.to_string())),
        }
    }

    flags.mode = mode.ok_or_else(|| ParseError::MissingValue("csv".to_string()))?;
    Ok(Command::Csv(flags))
}

fn parse_strength(args: &mut Args, quiet: &mut bool) -> Result<Command, ParseError> {
    let mut flags = StrengthFlags::default();
    let mut options = true;

    while let Some(arg) = args.next() {
        match arg {
            "--" if options => options = false,
            "-h" | "--help" if options => return Ok(Command::Help),
            "-q" | "--quiet" if options => *quiet = true,
            password if flags.password.is_none() => flags.password = Some(password.to_string()),
            other => return Err(ParseError::UnknownArg(other.to_string())),
        }
    }

    Ok(Command::Strength(flags))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pass::Preset;

    fn argv(s: &str) -> Vec<String> {
        std::iter::once("swisskit")
            .chain(s.split_whitespace())
            .map(String::from)
            .collect()
    }

    fn pass_flags(s: &str) -> PassFlags {
        match parse(&argv(s)).unwrap().command {
            Command::Pass(f) => f,
            other => panic!("expected pass, got {other:?}"),
        }
    }

    #[test]
    fn test_no_args_is_default_pass() {
        assert_eq!(
            parse(&argv("")).unwrap(),
            Cli {
                command: Command::Pass(PassFlags::default()),
                quiet: false
            }
        );
    }

    #[test]
    fn test_pass_flags_with_and_without_subcommand() {
        let f = pass_flags("-l 20 -n 3 --no-symbols --allow-similar");
        assert_eq!(f.length, Some(20));
        assert_eq!(f.number, Some(3));
        assert!(f.no_symbols && f.allow_similar);
        assert_eq!(pass_flags("pass -l 20 -n 3 --no-symbols --allow-similar"), f);
    }

    #[test]
    fn test_zero_count_is_rejected() {
        assert_eq!(
            parse(&argv("-n 0")),
            Err(ParseError::ZeroCount("-n".into()))
        );
        assert_eq!(
            parse(&argv("pass --number 0")),
            Err(ParseError::ZeroCount("--number".into()))
        );
        assert_eq!(pass_flags("-n 1").number, Some(1));
    }

    #[test]
    fn test_preset_and_symbols() {
        let f = pass_flags("--preset extra-strong --symbols !?");
        assert_eq!(f.preset, Some(Preset::ExtraStrong));
        assert_eq!(f.symbols.as_deref(), Some("!?"));
    }

    #[test]
    fn test_quiet_anywhere() {
        assert!(parse(&argv("-q -l 4")).unwrap().quiet);
        assert!(parse(&argv("csv to-json -q")).unwrap().quiet);
    }

    #[test]
    fn test_pass_errors() {
        assert_eq!(
            parse(&argv("-l abc")),
            Err(ParseError::InvalidNumber("abc".into()))
        );
        assert_eq!(
            parse(&argv("-l")),
            Err(ParseError::MissingValue("-l".into()))
        );
        assert_eq!(
            parse(&argv("--bogus")),
            Err(ParseError::UnknownArg("--bogus".into()))
        );
        assert!(matches!(
            parse(&argv("--preset custom")),
            Err(ParseError::InvalidPreset(_))
        ));
    }

    #[test]
    fn test_help_and_version() {
        assert_eq!(parse(&argv("-h")).unwrap().command, Command::Help);
        assert_eq!(parse(&argv("--version")).unwrap().command, Command::Version);
        assert_eq!(parse(&argv("csv --help")).unwrap().command, Command::Help);
    }

    #[test]
    fn test_csv_modes() {
        let Command::Csv(f) = parse(&argv("csv from-json -d tab --compact data.json"))
            .unwrap()
            .command
        else {
            panic!("expected csv");
        };
        assert_eq!(f.mode, CsvMode::FromJson);
        assert_eq!(f.delimiter.as_char(), '\t');
        assert!(f.compact);
        assert_eq!(f.input.as_deref(), Some("data.json"));
    }

    #[test]
    fn test_csv_errors() {
        assert_eq!(
            parse(&argv("csv")),
            Err(ParseError::MissingValue("csv".into()))
        );
        assert_eq!(
            parse(&argv("csv sideways")),
            Err(ParseError::UnknownMode("sideways".into()))
        );
        assert!(matches!(
            parse(&argv("csv rows -d ab")),
            Err(ParseError::InvalidDelimiter(_))
        ));
        assert_eq!(
            parse(&argv("csv rows a.csv b.csv")),
            Err(ParseError::UnknownArg("b.csv".into()))
        );
    }

    #[test]
    fn test_strength() {
        assert_eq!(
            parse(&argv("strength hunter2")).unwrap().command,
            Command::Strength(StrengthFlags {
                password: Some("hunter2".into())
            })
        );
        assert_eq!(
            parse(&argv("strength")).unwrap().command,
            Command::Strength(StrengthFlags::default())
        );
    }

    #[test]
    fn test_double_dash_ends_options() {
        let cli = parse(&argv("strength -q -- -h")).unwrap();
        assert!(cli.quiet);
        assert_eq!(
            cli.command,
            Command::Strength(StrengthFlags {
                password: Some("-h".into())
            })
        );
        assert_eq!(
            parse(&argv("strength -- --")).unwrap().command,
            Command::Strength(StrengthFlags {
                password: Some("--".into())
            })
        );
        assert_eq!(
            parse(&argv("strength -- -q extra")),
            Err(ParseError::UnknownArg("extra".into()))
        );
    }
}
