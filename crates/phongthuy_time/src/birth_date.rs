//! Solar birth date with loose parsing.
//!
//! Accepts `YYYY-MM-DD`, `DD-MM-YYYY`, `YYYY/MM/DD` and `DD/MM/YYYY`. The
//! field order is decided by the first token: anything above 31 can only be
//! a year. No calendar validation is done, so `40/02/1990` parses with
//! `day = 40`.

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::Serialize;

use crate::error::ParseError;

/// Gregorian birth date as entered by the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct BirthDate {
    pub year: i32,
    pub month: i32,
    pub day: i32,
}

impl BirthDate {
    pub fn new(year: i32, month: i32, day: i32) -> Self {
        Self { year, month, day }
    }
}

/// Canonical `YYYY-MM-DD` form.
impl Display for BirthDate {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:04}-{:02}-{:02}", self.year, self.month, self.day)
    }
}

impl FromStr for BirthDate {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_birth_date(s)
    }
}

/// Parse a birth date string.
///
/// `-` takes precedence over `/` when both are present, which then fails
/// the token count or numeric check.
pub fn parse_birth_date(raw: &str) -> Result<BirthDate, ParseError> {
    let s = raw.trim();
    if s.is_empty() {
        return Err(ParseError::Empty);
    }
    let sep = if s.contains('-') {
        '-'
    } else if s.contains('/') {
        '/'
    } else {
        return Err(ParseError::MissingSeparator);
    };

    let tokens: Vec<&str> = s.split(sep).collect();
    if tokens.len() != 3 {
        return Err(ParseError::WrongTokenCount(tokens.len()));
    }

    let mut parts = [0i32; 3];
    for (slot, tok) in parts.iter_mut().zip(&tokens) {
        *slot = tok
            .trim()
            .parse::<i32>()
            .map_err(|_| ParseError::NonNumeric((*tok).to_string()))?;
    }

    if parts[0] > 31 {
        Ok(BirthDate::new(parts[0], parts[1], parts[2]))
    } else {
        Ok(BirthDate::new(parts[2], parts[1], parts[0]))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn iso_order() {
        let d = parse_birth_date("1992-03-13").unwrap();
        assert_eq!(d, BirthDate::new(1992, 3, 13));
    }

    #[test]
    fn day_first_order() {
        let d = parse_birth_date("13/03/1992").unwrap();
        assert_eq!(d, BirthDate::new(1992, 3, 13));
    }

    #[test]
    fn day_first_with_dash() {
        let d = parse_birth_date("05-11-1988").unwrap();
        assert_eq!(d, BirthDate::new(1988, 11, 5));
    }

    #[test]
    fn surrounding_whitespace_trimmed() {
        let d = parse_birth_date("  1992/3/13 \n").unwrap();
        assert_eq!(d, BirthDate::new(1992, 3, 13));
    }

    #[test]
    fn empty_rejected() {
        assert_eq!(parse_birth_date("   "), Err(ParseError::Empty));
    }

    #[test]
    fn missing_separator_rejected() {
        assert_eq!(parse_birth_date("19920313"), Err(ParseError::MissingSeparator));
    }

    #[test]
    fn two_tokens_rejected() {
        assert_eq!(parse_birth_date("1992-03"), Err(ParseError::WrongTokenCount(2)));
    }

    #[test]
    fn non_numeric_rejected() {
        assert_eq!(
            parse_birth_date("1992-mar-13"),
            Err(ParseError::NonNumeric("mar".to_string()))
        );
    }

    #[test]
    fn implausible_day_accepted() {
        let d = parse_birth_date("40/02/1990").unwrap();
        assert_eq!(d.day, 40);
    }

    #[test]
    fn display_is_zero_padded() {
        assert_eq!(BirthDate::new(1992, 3, 5).to_string(), "1992-03-05");
    }

    #[test]
    fn from_str_matches_parse() {
        let d: BirthDate = "13/03/1992".parse().unwrap();
        assert_eq!(d, parse_birth_date("1992-03-13").unwrap());
    }
}
