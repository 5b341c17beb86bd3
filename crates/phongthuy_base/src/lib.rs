//! Phong thủy tables and numerology built on the effective birth year.
//!
//! This crate provides:
//! - Digital root and con giáp (12-branch) arithmetic
//! - Cung mệnh resolution from birth date and gender
//! - Kim Lâu, Hoang Ốc, Tam Tai and Xung Tuổi construction-year checks
//! - Ngũ hành year/month elements and the destructive cycle
//! - Good/bad house-facing directions per cung
//! - Site hazards and remedies
//!
//! Every function is a pure table lookup or small modular formula.

pub mod con_giap;
pub mod cung;
pub mod error;
pub mod hazard;
pub mod huong;
pub mod ngu_hanh;
pub mod numerology;
pub mod taboo;

pub use con_giap::{ALL_CON_GIAP, ConGiap, zodiac_index, zodiac_name, zodiac_name_from_year};
pub use cung::{
    ALL_CUNG, Cung, Gender, Profile, cung_from_code, profile_from_effective_year,
    resolve_profile, resolve_profile_with, so_cung,
};
pub use error::{PhongThuyError, ProfileError};
pub use hazard::{
    ALL_HAZARD_TAGS, HAZARD_TABLE, HazardReport, HazardRule, HazardTag, evaluate_hazards,
};
pub use huong::{
    ALL_DIRECTIONS, Direction, DirectionKind, DirectionParseError, DirectionSets,
    DirectionVerdict, direction_table, evaluate_direction,
};
pub use ngu_hanh::{ALL_NGU_HANH, NguHanh, element_of_month, element_of_year, is_element_conflict};
pub use numerology::digital_root;
pub use taboo::{
    ALL_HOANG_OC, HoangOcPhase, HoangOcVerdict, KimLauKind, KimLauVerdict, TamTaiVerdict,
    XungTuoiVerdict, check_hoang_oc, check_kim_lau, check_tam_tai, check_xung_tuoi, ritual_age,
};
