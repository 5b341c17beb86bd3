//! Error types for birth-date parsing.

use std::error::Error;
use std::fmt::{Display, Formatter};

/// Errors from parsing a loosely formatted birth date.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ParseError {
    /// Input was empty after trimming.
    Empty,
    /// Input contains neither `-` nor `/`.
    MissingSeparator,
    /// Splitting on the separator did not yield exactly 3 tokens.
    WrongTokenCount(usize),
    /// A token is not a decimal integer.
    NonNumeric(String),
}

impl Display for ParseError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Empty => write!(f, "birth date is empty"),
            Self::MissingSeparator => write!(
                f,
                "birth date must use '-' or '/' (e.g. 1992-03-13 or 13/03/1992)"
            ),
            Self::WrongTokenCount(n) => {
                write!(f, "birth date must have 3 parts, found {n}")
            }
            Self::NonNumeric(tok) => write!(f, "birth date part is not a number: '{tok}'"),
        }
    }
}

impl Error for ParseError {}
