use thiserror::Error;

use crate::cli::ParseError;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum PassError {
    #[error("No usable characters: every enabled class is empty after filtering")]
    EmptyPool,

    #[error("Password length must be at least 1")]
    ZeroLength,

    #[error("Length {length} is shorter than the {classes} character classes that must appear")]
    LengthBelowClasses { length: usize, classes: usize },
}

#[derive(Debug, Error)]
pub enum CsvError {
    #[error("Invalid delimiter: {0:?}")]
    InvalidDelimiter(String),

    #[error("Invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Expected a JSON array of objects, found {0}")]
    NotAnArray(&'static str),
}

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Usage(#[from] ParseError),

    #[error(transparent)]
    Pass(#[from] PassError),

    #[error(transparent)]
    Csv(#[from] CsvError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Clipboard error: {0}")]
    Clipboard(String),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
