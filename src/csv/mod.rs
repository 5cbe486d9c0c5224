//! CSV tokenizing and CSV/JSON conversion.

mod records;
mod tokenize;
mod write;

use std::fmt;
use std::str::FromStr;

use crate::error::CsvError;

pub use records::{parse_records, to_json};
pub use tokenize::tokenize;
pub use write::{from_json, write_row};

/// Single-character cell separator.
///
/// Quote and line-break characters are rejected here, which is what lets
/// [`tokenize`] be infallible.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Delimiter(char);

impl Delimiter {
    pub const COMMA: Delimiter = Delimiter(',');

    pub fn new(c: char) -> Result<Self, CsvError> {
        match c {
            '"' | '\n' | '\r' => Err(CsvError::InvalidDelimiter(c.to_string())),
            _ => Ok(Delimiter(c)),
        }
    }

    pub fn as_char(self) -> char {
        self.0
    }
}

impl Default for Delimiter {
    fn default() -> Self {
        Self::COMMA
    }
}

impl FromStr for Delimiter {
    type Err = CsvError;

    /// Accepts `comma`, `semicolon`, `tab`, `pipe`, `\t`, or one character.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "comma" => Ok(Delimiter(',')),
            "semicolon" => Ok(Delimiter(';')),
            "tab" | "\\t" => Ok(Delimiter('\t')),
            "pipe" => Ok(Delimiter('|')),
            _ => {
                let mut chars = s.chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) => Delimiter::new(c),
                    _ => Err(CsvError::InvalidDelimiter(s.to_string())),
                }
            }
        }
    }
}

impl fmt::Display for Delimiter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            '\t' => write!(f, "tab"),
            c => write!(f, "{c}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_named_delimiters() {
        assert_eq!("comma".parse::<Delimiter>().unwrap().as_char(), ',');
        assert_eq!("semicolon".parse::<Delimiter>().unwrap().as_char(), ';');
        assert_eq!("tab".parse::<Delimiter>().unwrap().as_char(), '\t');
        assert_eq!("\\t".parse::<Delimiter>().unwrap().as_char(), '\t');
        assert_eq!("pipe".parse::<Delimiter>().unwrap().as_char(), '|');
        assert_eq!(":".parse::<Delimiter>().unwrap().as_char(), ':');
    }

    #[test]
    fn test_rejects_quote_newline_and_multichar() {
        assert!(Delimiter::new('"').is_err());
        assert!(Delimiter::new('\n').is_err());
        assert!(Delimiter::new('\r').is_err());
        assert!("".parse::<Delimiter>().is_err());
        assert!(";;".parse::<Delimiter>().is_err());
    }

    #[test]
    fn test_default_is_comma() {
        assert_eq!(Delimiter::default(), Delimiter::COMMA);
        assert_eq!(Delimiter::default().to_string(), ",");
    }
}
