//! `csv` subcommand: read, convert, write.

use std::fs;
use std::io::{self, Read, Write};
use std::path::Path;

use tracing::debug;

use super::flags::{CsvFlags, CsvMode};
use super::prompts;
use crate::csv;
use crate::error::{CsvError, Result};

pub fn run(flags: &CsvFlags) -> Result<()> {
    let input = read_input(flags.input.as_deref())?;
    let output = convert(flags, &input)?;

    match flags.output.as_deref() {
        Some(path) => {
            let path = Path::new(path);
            fs::write(path, format!("{output}\n"))?;
            prompts::output_written(path);
        }
        None => {
            let mut stdout = io::stdout().lock();
            writeln!(stdout, "{output}")?;
            stdout.flush()?;
        }
    }
    Ok(())
}

/// Convert `input` according to the selected mode.
pub fn convert(flags: &CsvFlags, input: &str) -> Result<String> {
    let pretty = !flags.compact;
    let out = match flags.mode {
        CsvMode::ToJson => {
            let records = csv::parse_records(input, flags.delimiter);
            csv::to_json(&records, pretty)?
        }
        CsvMode::FromJson => csv::from_json(input, flags.delimiter)?,
        CsvMode::Rows => {
            let rows = csv::tokenize(input, flags.delimiter);
            debug!(rows = rows.len(), "tokenized");
            let json = if pretty {
                serde_json::to_string_pretty(&rows)
            } else {
                serde_json::to_string(&rows)
            };
            json.map_err(CsvError::from)?
        }
    };
    Ok(out)
}

/// Read the named file, or stdin for `None` and `-`.
fn read_input(path: Option<&str>) -> io::Result<String> {
    match path {
        Some(p) if p != "-" => {
            debug!(path = p, "reading input file");
            fs::read_to_string(p)
        }
        _ => {
            let mut buf = String::new();
            io::stdin().read_to_string(&mut buf)?;
            Ok(buf)
        }
    }
}
