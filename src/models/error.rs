use crate::types::TickerSymbol;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Parser Error: {0}")]
    ParserError(String),

    #[error("Duplicate ticker symbol in catalog: {0}")]
    DuplicateSymbol(TickerSymbol),

    #[error("Catalog contains no company records")]
    EmptyCatalog,

    #[error("Invalid override rule: {0}")]
    InvalidOverrideRule(String),

    #[error("IO Error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Other Error: {0}")]
    Other(String),
}

impl From<csv::Error> for Error {
    fn from(err: csv::Error) -> Error {
        Error::ParserError(err.to_string())
    }
}
