//! Errors raised when parsing grid dispatch arguments from text.

use std::fmt;

/// The only failure a grid operation can report.
///
/// Operations themselves take closed enums, so an invalid direction can only
/// come from text input (config, scripts, tests). Parsing fails fast instead
/// of picking a default.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    UnknownDirection(String),
    UnknownTurn(String),
    UnknownAxis(String),
    UnknownEdge(String),
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GridError::UnknownDirection(s) => write!(f, "invalid direction `{s}`"),
            GridError::UnknownTurn(s) => write!(f, "invalid rotation direction `{s}`"),
            GridError::UnknownAxis(s) => write!(f, "invalid axis `{s}`"),
            GridError::UnknownEdge(s) => write!(f, "invalid edge `{s}`"),
        }
    }
}

impl std::error::Error for GridError {}
