//! Combined phong thủy advisory for a prospective builder.
//!
//! Runs every check from `phongthuy_base` for one owner, construction
//! year/month, house facing and site, and returns a single
//! [`EvaluationReport`] with typed year and month warnings. Rendering is left
//! to the caller; warnings implement `Display` with the traditional
//! Vietnamese wording.
//!
//! ```rust
//! use phongthuy_advisor::{Direction, evaluate_all};
//!
//! let report = evaluate_all("15/08/1985", "nữ", 2033, 4, &["cot-dien"], Direction::TayNam)?;
//! assert!(report.year_is_favorable);
//! assert_eq!(report.hazards.problems.len(), 1);
//! # Ok::<(), phongthuy_advisor::PhongThuyError>(())
//! ```

pub mod advisor_types;
pub mod config;
pub mod evaluate;

pub use advisor_types::{EvaluationReport, MonthWarning, YearWarning};
pub use config::EvaluationConfig;
pub use evaluate::{evaluate_all, evaluate_all_with, evaluate_profile};

// Re-export input and error types so callers can depend on this crate alone.
pub use phongthuy_base::{Direction, DirectionKind, Gender, PhongThuyError, ProfileError};
pub use phongthuy_time::{NewYearCutoff, ParseError};
