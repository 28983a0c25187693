use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Fatal to a single load; whatever was loaded before stays in place.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("level file {path} does not exist")]
    Missing { path: PathBuf },
    #[error("could not read level file {path}")]
    Unreadable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("level {index} is not playable")]
    Invalid {
        index: usize,
        #[source]
        source: ParseError,
    },
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    #[error("level has no rows")]
    Empty,
    #[error("level has no agent start ('A')")]
    NoAgent,
}

/// Unrecognised character in a level file. The cell is loaded as `Empty`.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[error("invalid char: ({row}, {col}) = {ch}")]
pub struct MalformedCell {
    pub row: usize,
    pub col: usize,
    pub ch: char,
}
