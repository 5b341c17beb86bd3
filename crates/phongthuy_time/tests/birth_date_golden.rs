//! Integration tests for birth-date parsing and the effective birth year.

use phongthuy_time::{
    BirthDate, NewYearCutoff, ParseError, effective_birth_year, effective_birth_year_with,
    parse_birth_date,
};

#[test]
fn both_orders_agree() {
    let pairs = [
        ("1992-03-13", "13/03/1992"),
        ("1985/08/15", "15-08-1985"),
        ("2001-1-2", "2/1/2001"),
    ];
    for (a, b) in pairs {
        assert_eq!(parse_birth_date(a).unwrap(), parse_birth_date(b).unwrap(), "{a} vs {b}");
    }
}

#[test]
fn canonical_form_is_stable() {
    for raw in ["13/03/1992", "1985-8-15", " 01/01/2000 ", "31-12-1969"] {
        let first = parse_birth_date(raw).unwrap();
        let canonical = first.to_string();
        let second = parse_birth_date(&canonical).unwrap();
        assert_eq!(first, second, "{raw} -> {canonical}");
        assert_eq!(second.to_string(), canonical);
    }
}

#[test]
fn malformed_inputs() {
    assert_eq!(parse_birth_date(""), Err(ParseError::Empty));
    assert_eq!(parse_birth_date("13.03.1992"), Err(ParseError::MissingSeparator));
    assert_eq!(parse_birth_date("1992-03-13-01"), Err(ParseError::WrongTokenCount(4)));
    assert_eq!(parse_birth_date("1992--13"), Err(ParseError::NonNumeric(String::new())));
    assert!(matches!(parse_birth_date("13/03/19x2"), Err(ParseError::NonNumeric(_))));
}

#[test]
fn error_messages_are_descriptive() {
    let msg = parse_birth_date("abc").unwrap_err().to_string();
    assert!(msg.contains('-') && msg.contains('/'), "got: {msg}");
}

#[test]
fn effective_year_around_cutoff() {
    let cases = [
        ("1992-03-12", 1991),
        ("1992-03-13", 1991),
        ("1992-03-14", 1992),
        ("14/03/1992", 1992),
        ("1992-02-28", 1991),
        ("1992-04-01", 1992),
    ];
    for (raw, expected) in cases {
        let d = parse_birth_date(raw).unwrap();
        assert_eq!(effective_birth_year(&d), expected, "{raw}");
    }
}

#[test]
fn default_cutoff_matches_plain_function() {
    let cutoff = NewYearCutoff::default();
    for month in 1..=12 {
        for day in [1, 13, 14, 28] {
            let d = BirthDate::new(1990, month, day);
            assert_eq!(effective_birth_year(&d), effective_birth_year_with(&d, &cutoff));
        }
    }
}
