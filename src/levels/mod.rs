mod errors;
mod parse;
mod source;

pub use errors::{LoadError, MalformedCell, ParseError};
pub use parse::{ParsedLevel, parse_level};
pub use source::{FileLevelSource, LevelSource};
