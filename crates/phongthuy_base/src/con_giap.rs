//! Con giáp (12-animal year cycle).
//!
//! Year CE 4 is Tý (index 1); the cycle repeats every 12 years in both
//! directions.

use serde::Serialize;

/// The 12 earthly branches, starting from Tý.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ConGiap {
    Ty,
    Suu,
    Dan,
    Mao,
    Thin,
    Ti,
    Ngo,
    Mui,
    Than,
    Dau,
    Tuat,
    Hoi,
}

/// All 12 branches in cycle order (array index 0 = Tý).
pub const ALL_CON_GIAP: [ConGiap; 12] = [
    ConGiap::Ty,
    ConGiap::Suu,
    ConGiap::Dan,
    ConGiap::Mao,
    ConGiap::Thin,
    ConGiap::Ti,
    ConGiap::Ngo,
    ConGiap::Mui,
    ConGiap::Than,
    ConGiap::Dau,
    ConGiap::Tuat,
    ConGiap::Hoi,
];

impl ConGiap {
    /// Vietnamese name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Ty => "Tý",
            Self::Suu => "Sửu",
            Self::Dan => "Dần",
            Self::Mao => "Mão",
            Self::Thin => "Thìn",
            Self::Ti => "Tỵ",
            Self::Ngo => "Ngọ",
            Self::Mui => "Mùi",
            Self::Than => "Thân",
            Self::Dau => "Dậu",
            Self::Tuat => "Tuất",
            Self::Hoi => "Hợi",
        }
    }

    /// 1-based position in the cycle (Tý=1 .. Hợi=12).
    pub const fn index(self) -> u8 {
        match self {
            Self::Ty => 1,
            Self::Suu => 2,
            Self::Dan => 3,
            Self::Mao => 4,
            Self::Thin => 5,
            Self::Ti => 6,
            Self::Ngo => 7,
            Self::Mui => 8,
            Self::Than => 9,
            Self::Dau => 10,
            Self::Tuat => 11,
            Self::Hoi => 12,
        }
    }

    /// Branch for a 1-based index. Returns None outside 1..=12.
    pub fn from_index(index: u8) -> Option<Self> {
        match index {
            1..=12 => Some(ALL_CON_GIAP[(index - 1) as usize]),
            _ => None,
        }
    }

    /// Branch of a CE year.
    pub fn from_year(year: i32) -> Self {
        ALL_CON_GIAP[(zodiac_index(year) - 1) as usize]
    }
}

/// 1-based zodiac index of a CE year: `((year - 4) mod 12) + 1`.
pub fn zodiac_index(year: i32) -> u8 {
    (i64::from(year) - 4).rem_euclid(12) as u8 + 1
}

/// Name for a 1-based zodiac index. Returns None outside 1..=12.
pub fn zodiac_name(index: u8) -> Option<&'static str> {
    ConGiap::from_index(index).map(ConGiap::name)
}

/// Name of the branch ruling a CE year.
pub fn zodiac_name_from_year(year: i32) -> &'static str {
    ConGiap::from_year(year).name()
}

/// 1-based index `offset` steps after `index`, wrapping 12 → 1.
///
/// `index` is expected in 1..=12.
pub(crate) fn offset_index(index: u8, offset: u8) -> u8 {
    ((index as u16 + offset as u16 - 1) % 12) as u8 + 1
}
