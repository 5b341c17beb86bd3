//! Error types for profile resolution.

use std::error::Error;
use std::fmt::{Display, Formatter};

use phongthuy_time::ParseError;

/// Errors from cung mệnh resolution.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ProfileError {
    /// Gender literal is neither `nam` nor `nữ`.
    UnknownGender(String),
    /// Profile code outside 1..=9.
    UnknownCode(u8),
}

impl Display for ProfileError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnknownGender(g) => {
                write!(f, "unknown gender '{g}' (expected 'nam' or 'nữ')")
            }
            Self::UnknownCode(code) => write!(f, "no cung for profile code {code}"),
        }
    }
}

impl Error for ProfileError {}

/// Errors surfaced by any phong thủy calculation that starts from raw input.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum PhongThuyError {
    /// Malformed birth date.
    Parse(ParseError),
    /// Unknown gender or profile lookup miss.
    Profile(ProfileError),
}

impl Display for PhongThuyError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Parse(e) => write!(f, "parse error: {e}"),
            Self::Profile(e) => write!(f, "profile error: {e}"),
        }
    }
}

impl Error for PhongThuyError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Parse(e) => Some(e),
            Self::Profile(e) => Some(e),
        }
    }
}

impl From<ParseError> for PhongThuyError {
    fn from(e: ParseError) -> Self {
        Self::Parse(e)
    }
}

impl From<ProfileError> for PhongThuyError {
    fn from(e: ProfileError) -> Self {
        Self::Profile(e)
    }
}
