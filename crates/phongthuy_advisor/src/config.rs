//! Evaluation configuration.

use serde::Serialize;

use phongthuy_time::NewYearCutoff;

/// Configurable parameters for [`crate::evaluate_all_with`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct EvaluationConfig {
    /// Births on or before this day count toward the previous year.
    /// Default: March 13.
    pub new_year_cutoff: NewYearCutoff,
}

impl EvaluationConfig {
    pub fn with_cutoff(month: i32, day: i32) -> Self {
        Self {
            new_year_cutoff: NewYearCutoff::new(month, day),
        }
    }
}
