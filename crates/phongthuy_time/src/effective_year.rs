//! Effective birth year for numerology.
//!
//! Births before the solar-term cutoff in early March belong to the previous
//! year for every cung mệnh and taboo calculation. The traditional cutoff is
//! March 13 inclusive.

use serde::Serialize;

use crate::birth_date::BirthDate;

/// Last day (inclusive) that still counts toward the previous year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct NewYearCutoff {
    /// Cutoff month (1-12). Default: 3.
    pub month: i32,
    /// Last day of `month` that belongs to the previous year. Default: 13.
    pub day: i32,
}

impl Default for NewYearCutoff {
    fn default() -> Self {
        Self { month: 3, day: 13 }
    }
}

impl NewYearCutoff {
    pub fn new(month: i32, day: i32) -> Self {
        Self { month, day }
    }

    /// Whether `date` falls on or before the cutoff within its year.
    pub fn is_before(&self, date: &BirthDate) -> bool {
        date.month < self.month || (date.month == self.month && date.day <= self.day)
    }
}

/// Effective birth year using the default March 13 cutoff.
pub fn effective_birth_year(date: &BirthDate) -> i32 {
    effective_birth_year_with(date, &NewYearCutoff::default())
}

/// Effective birth year using a custom cutoff.
pub fn effective_birth_year_with(date: &BirthDate, cutoff: &NewYearCutoff) -> i32 {
    if cutoff.is_before(date) {
        // i32::MIN has no previous year; saturate rather than wrap
        date.year.saturating_sub(1)
    } else {
        date.year
    }
}
