use crate::csv::Delimiter;
use crate::pass::Preset;

/// Parsed command line.
#[derive(Debug, PartialEq)]
pub struct Cli {
    pub command: Command,
    pub quiet: bool,
}

#[derive(Debug, PartialEq)]
pub enum Command {
    Help,
    Version,
    Pass(PassFlags),
    Csv(CsvFlags),
    Strength(StrengthFlags),
}

#[derive(Debug, Default, PartialEq)]
pub struct PassFlags {
    pub length: Option<usize>,
    pub number: Option<usize>,
    pub preset: Option<Preset>,
    pub no_lower: bool,
    pub no_upper: bool,
    pub no_digits: bool,
    pub no_symbols: bool,
    pub symbols: Option<String>,
    pub allow_similar: bool,
    pub no_ambiguous: bool,
    pub output: Option<String>,
    pub clipboard: bool,
    pub stats: bool,
    pub saved: bool,
    pub save: bool,
    pub hw: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CsvMode {
    ToJson,
    FromJson,
    Rows,
}

#[derive(Debug, PartialEq)]
pub struct CsvFlags {
    pub mode: CsvMode,
    pub delimiter: Delimiter,
    pub compact: bool,
    pub output: Option<String>,
    pub input: Option<String>,
}

#[derive(Debug, Default, PartialEq)]
pub struct StrengthFlags {
    pub password: Option<String>,
}
