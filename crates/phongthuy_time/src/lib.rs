//! Birth-date handling for phong thủy calculations.
//!
//! This crate provides:
//! - Loose `YYYY-MM-DD` / `DD/MM/YYYY` birth-date parsing
//! - The effective birth year used by all numerology (solar-term cutoff)

pub mod birth_date;
pub mod effective_year;
pub mod error;

pub use birth_date::{BirthDate, parse_birth_date};
pub use effective_year::{NewYearCutoff, effective_birth_year, effective_birth_year_with};
pub use error::ParseError;
