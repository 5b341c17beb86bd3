//! Cung mệnh (directional/elemental birth profile).
//!
//! The profile code (số cung) comes from the digital root of the effective
//! birth year: `(d + 2) mod 9` for men, `(d + 8) mod 9` for women, with 0
//! read as 9. Codes 1-9 map onto the 8 trigram palaces; code 9 shares Khôn
//! with code 6.

use std::str::FromStr;

use serde::Serialize;

use phongthuy_time::{NewYearCutoff, effective_birth_year_with, parse_birth_date};

use crate::error::{PhongThuyError, ProfileError};
use crate::ngu_hanh::NguHanh;
use crate::numerology::digital_root;

/// Gender as used by the profile formula.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Gender {
    Nam,
    Nu,
}

impl Gender {
    /// Vietnamese literal (`nam` / `nữ`).
    pub const fn name(self) -> &'static str {
        match self {
            Self::Nam => "nam",
            Self::Nu => "nữ",
        }
    }
}

impl FromStr for Gender {
    type Err = ProfileError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "nam" => Ok(Self::Nam),
            "nữ" => Ok(Self::Nu),
            other => Err(ProfileError::UnknownGender(other.to_string())),
        }
    }
}

/// The 8 palaces (cung).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Cung {
    Kham,
    Ly,
    Can,
    Doai,
    /// Càn, also read Kiền.
    Kien,
    Khon,
    Ton,
    Chan,
}

/// All 8 palaces in profile-code order (Khảm=1 .. Chấn=8).
pub const ALL_CUNG: [Cung; 8] = [
    Cung::Kham,
    Cung::Ly,
    Cung::Can,
    Cung::Doai,
    Cung::Kien,
    Cung::Khon,
    Cung::Ton,
    Cung::Chan,
];

impl Cung {
    /// Vietnamese name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Kham => "Khảm",
            Self::Ly => "Ly",
            Self::Can => "Cấn",
            Self::Doai => "Đoài",
            Self::Kien => "Càn",
            Self::Khon => "Khôn",
            Self::Ton => "Tốn",
            Self::Chan => "Chấn",
        }
    }

    /// Element of the palace.
    pub const fn element(self) -> NguHanh {
        match self {
            Self::Kham => NguHanh::Thuy,
            Self::Ly => NguHanh::Hoa,
            Self::Can => NguHanh::Tho,
            Self::Doai => NguHanh::Kim,
            Self::Kien => NguHanh::Tho,
            Self::Khon => NguHanh::Kim,
            Self::Ton => NguHanh::Tho,
            Self::Chan => NguHanh::Moc,
        }
    }

    /// Direction label of the palace itself.
    ///
    /// Chấn keeps its traditional "Bắc Tây" label, which is not one of the
    /// eight house-facing directions.
    pub const fn huong(self) -> &'static str {
        match self {
            Self::Kham => "Bắc",
            Self::Ly => "Nam",
            Self::Can => "Đông Bắc",
            Self::Doai => "Tây Nam",
            Self::Kien => "Đông",
            Self::Khon => "Tây",
            Self::Ton => "Đông Nam",
            Self::Chan => "Bắc Tây",
        }
    }
}

/// Palace for a profile code (1..=9).
pub fn cung_from_code(code: u8) -> Result<Cung, ProfileError> {
    match code {
        1..=8 => Ok(ALL_CUNG[(code - 1) as usize]),
        9 => Ok(Cung::Khon),
        _ => Err(ProfileError::UnknownCode(code)),
    }
}

/// Profile code from a digital root and gender. Always in 1..=9.
pub fn so_cung(so_dia_chi: u8, gender: Gender) -> u8 {
    let raw = match gender {
        Gender::Nam => (so_dia_chi % 9 + 2) % 9,
        Gender::Nu => (so_dia_chi % 9 + 8) % 9,
    };
    if raw == 0 { 9 } else { raw }
}

/// Resolved cung mệnh.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Profile {
    pub cung: Cung,
    pub element: NguHanh,
    /// Direction label of the palace (see [`Cung::huong`]).
    pub huong: &'static str,
    /// Digital root of the effective birth year.
    pub so_dia_chi: u8,
    /// Profile code (1..=9).
    pub so_cung: u8,
    pub effective_year: i32,
}

/// Profile from an already computed effective birth year.
pub fn profile_from_effective_year(effective_year: i32, gender: Gender) -> Profile {
    let so_dia_chi = digital_root(effective_year.unsigned_abs());
    let code = so_cung(so_dia_chi, gender);
    // so_cung never leaves 1..=9
    let cung = cung_from_code(code).unwrap_or(Cung::Khon);
    Profile {
        cung,
        element: cung.element(),
        huong: cung.huong(),
        so_dia_chi,
        so_cung: code,
        effective_year,
    }
}

/// Resolve the profile from a raw birth date string and gender literal.
pub fn resolve_profile(birth_date: &str, gender: &str) -> Result<Profile, PhongThuyError> {
    resolve_profile_with(birth_date, gender, &NewYearCutoff::default())
}

/// [`resolve_profile`] with a custom new-year cutoff.
pub fn resolve_profile_with(
    birth_date: &str,
    gender: &str,
    cutoff: &NewYearCutoff,
) -> Result<Profile, PhongThuyError> {
    let date = parse_birth_date(birth_date)?;
    let gender: Gender = gender.parse()?;
    let effective_year = effective_birth_year_with(&date, cutoff);
    Ok(profile_from_effective_year(effective_year, gender))
}
