//! Construction-year taboos: Kim Lâu, Hoang Ốc, Tam Tai and Xung Tuổi.
//!
//! Kim Lâu and Hoang Ốc are read from the ritual age (tuổi mụ, birth year
//! counted as age 1). Tam Tai and Xung Tuổi compare the owner's con giáp
//! with the construction year's.

use serde::Serialize;

use crate::con_giap::{ConGiap, offset_index, zodiac_index};

/// Ritual age (tuổi mụ) in the construction year.
///
/// Widened to `i64` so any pair of `i32` years has an age.
pub fn ritual_age(construction_year: i32, effective_year: i32) -> i64 {
    i64::from(construction_year) - i64::from(effective_year) + 1
}

// ---------------------------------------------------------------------------
// Kim Lâu
// ---------------------------------------------------------------------------

/// Kim Lâu subtype (whom the misfortune falls on).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum KimLauKind {
    /// Remainder 1: the owner.
    Than,
    /// Remainder 3: the spouse.
    The,
    /// Remainder 6: the children.
    Tu,
    /// Remainder 8: livestock.
    LucSuc,
}

impl KimLauKind {
    /// Full Vietnamese label, e.g. "Kim Lâu Thân".
    pub const fn name(self) -> &'static str {
        match self {
            Self::Than => "Kim Lâu Thân",
            Self::The => "Kim Lâu Thê",
            Self::Tu => "Kim Lâu Tử",
            Self::LucSuc => "Kim Lâu Lục Súc",
        }
    }

    fn from_remainder(rem: u8) -> Option<Self> {
        match rem {
            1 => Some(Self::Than),
            3 => Some(Self::The),
            6 => Some(Self::Tu),
            8 => Some(Self::LucSuc),
            _ => None,
        }
    }
}

/// Kim Lâu check result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct KimLauVerdict {
    pub is_kim_lau: bool,
    pub kind: Option<KimLauKind>,
    /// Ritual age mod 9, with 0 read as 9.
    pub remainder: u8,
}

/// Kim Lâu: ritual age mod 9 in {1, 3, 6, 8}.
///
/// An age below 1 (construction before birth) is never Kim Lâu; its
/// `remainder` is still the Euclidean position in the 9-cycle.
pub fn check_kim_lau(ritual_age: i64) -> KimLauVerdict {
    let rem = match ritual_age.rem_euclid(9) as u8 {
        0 => 9,
        r => r,
    };
    let kind = if ritual_age >= 1 {
        KimLauKind::from_remainder(rem)
    } else {
        None
    };
    KimLauVerdict {
        is_kim_lau: kind.is_some(),
        kind,
        remainder: rem,
    }
}

// ---------------------------------------------------------------------------
// Hoang Ốc
// ---------------------------------------------------------------------------

/// The six Hoang Ốc phases, in cycle order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum HoangOcPhase {
    NhatCat,
    NhiNghi,
    TamDiaSat,
    TuTanTai,
    NguThoTu,
    LucHoangOc,
}

/// All six phases (age mod 6 = 1 → Nhất Cát .. 0 → Lục Hoang Ốc).
pub const ALL_HOANG_OC: [HoangOcPhase; 6] = [
    HoangOcPhase::NhatCat,
    HoangOcPhase::NhiNghi,
    HoangOcPhase::TamDiaSat,
    HoangOcPhase::TuTanTai,
    HoangOcPhase::NguThoTu,
    HoangOcPhase::LucHoangOc,
];

impl HoangOcPhase {
    pub const fn name(self) -> &'static str {
        match self {
            Self::NhatCat => "Nhất Cát",
            Self::NhiNghi => "Nhì Nghi",
            Self::TamDiaSat => "Tam Địa Sát",
            Self::TuTanTai => "Tứ Tấn Tài",
            Self::NguThoTu => "Ngũ Thọ Tử",
            Self::LucHoangOc => "Lục Hoang Ốc",
        }
    }

    pub const fn is_bad(self) -> bool {
        matches!(self, Self::TamDiaSat | Self::NguThoTu | Self::LucHoangOc)
    }
}

/// Hoang Ốc check result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct HoangOcVerdict {
    pub phase: HoangOcPhase,
    pub is_bad: bool,
}

/// Hoang Ốc phase of a ritual age.
///
/// Ages below 1 still get a phase but are never bad.
pub fn check_hoang_oc(ritual_age: i64) -> HoangOcVerdict {
    let idx = match ritual_age.rem_euclid(6) {
        0 => 5,
        m => m - 1,
    };
    let phase = ALL_HOANG_OC[idx as usize];
    HoangOcVerdict {
        phase,
        is_bad: ritual_age >= 1 && phase.is_bad(),
    }
}

// ---------------------------------------------------------------------------
// Tam Tai
// ---------------------------------------------------------------------------

/// Tam Tai check result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TamTaiVerdict {
    pub is_tam_tai: bool,
    /// The three branches that are Tam Tai for the owner.
    pub tam_tai: [ConGiap; 3],
    /// Branch of the construction year.
    pub construction_chi: ConGiap,
}

/// Tam Tai: the construction year is 3, 4 or 5 branches after the owner's.
///
/// `owner_index` is the owner's 1-based zodiac index.
pub fn check_tam_tai(owner_index: u8, construction_year: i32) -> TamTaiVerdict {
    let c = zodiac_index(construction_year);
    let idx = [3, 4, 5].map(|off| offset_index(owner_index, off));
    TamTaiVerdict {
        is_tam_tai: idx.contains(&c),
        tam_tai: idx.map(branch),
        construction_chi: branch(c),
    }
}

// ---------------------------------------------------------------------------
// Xung Tuổi
// ---------------------------------------------------------------------------

/// Age-clash check result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct XungTuoiVerdict {
    pub is_xung: bool,
    pub construction_chi: ConGiap,
    /// Branch directly opposite the owner's (6 steps away).
    pub opposite_chi: ConGiap,
}

/// Xung Tuổi: the construction year's branch opposes the owner's.
pub fn check_xung_tuoi(owner_index: u8, construction_year: i32) -> XungTuoiVerdict {
    let c = zodiac_index(construction_year);
    let opposite = offset_index(owner_index, 6);
    XungTuoiVerdict {
        is_xung: c == opposite,
        construction_chi: branch(c),
        opposite_chi: branch(opposite),
    }
}

fn branch(index: u8) -> ConGiap {
    // indices here come from zodiac_index / offset_index, both 1..=12
    ConGiap::from_index(index).unwrap_or(ConGiap::Ty)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ritual_age_counts_birth_year() {
        assert_eq!(ritual_age(2024, 1990), 35);
        assert_eq!(ritual_age(1990, 1990), 1);
    }

    #[test]
    fn ritual_age_spans_full_year_range() {
        assert_eq!(ritual_age(i32::MIN, 1990), i64::from(i32::MIN) - 1989);
        assert_eq!(ritual_age(i32::MAX, i32::MIN), 1_i64 << 32);
    }

    #[test]
    fn kim_lau_than() {
        let v = check_kim_lau(37);
        assert!(v.is_kim_lau);
        assert_eq!(v.remainder, 1);
        assert_eq!(v.kind.map(KimLauKind::name), Some("Kim Lâu Thân"));
    }

    #[test]
    fn kim_lau_luc_suc() {
        let v = check_kim_lau(35);
        assert!(v.is_kim_lau);
        assert_eq!(v.kind, Some(KimLauKind::LucSuc));
        assert_eq!(v.kind.map(KimLauKind::name), Some("Kim Lâu Lục Súc"));
    }

    #[test]
    fn kim_lau_zero_remainder_is_nine() {
        let v = check_kim_lau(45);
        assert!(!v.is_kim_lau);
        assert_eq!(v.remainder, 9);
        assert_eq!(v.kind, None);
    }

    #[test]
    fn kim_lau_bad_set() {
        let bad: Vec<u8> = (1..=9)
            .filter(|r| check_kim_lau(i64::from(*r) + 27).is_kim_lau)
            .collect();
        assert_eq!(bad, vec![1, 3, 6, 8]);
    }

    #[test]
    fn age_before_birth_is_never_kim_lau() {
        // -1 sits on remainder 8 of the cycle but is not Lục Súc
        let v = check_kim_lau(-1);
        assert_eq!(v.remainder, 8);
        assert!(!v.is_kim_lau);
        assert_eq!(v.kind, None);
        assert!(!check_kim_lau(0).is_kim_lau);
        assert!(!check_kim_lau(i64::MIN).is_kim_lau);
    }

    #[test]
    fn age_before_birth_is_never_bad_hoang_oc() {
        let v = check_hoang_oc(0);
        assert_eq!(v.phase, HoangOcPhase::LucHoangOc);
        assert!(!v.is_bad);
        assert!(!check_hoang_oc(-3).is_bad);
    }

    #[test]
    fn hoang_oc_tam_dia_sat() {
        let v = check_hoang_oc(33);
        assert_eq!(v.phase, HoangOcPhase::TamDiaSat);
        assert_eq!(v.phase.name(), "Tam Địa Sát");
        assert!(v.is_bad);
    }

    #[test]
    fn hoang_oc_cycle() {
        assert_eq!(check_hoang_oc(31).phase, HoangOcPhase::NhatCat);
        assert_eq!(check_hoang_oc(32).phase, HoangOcPhase::NhiNghi);
        assert_eq!(check_hoang_oc(34).phase, HoangOcPhase::TuTanTai);
        assert_eq!(check_hoang_oc(35).phase, HoangOcPhase::NguThoTu);
        assert_eq!(check_hoang_oc(36).phase, HoangOcPhase::LucHoangOc);
        assert!(!check_hoang_oc(34).is_bad);
        assert!(check_hoang_oc(36).is_bad);
    }

    #[test]
    fn tam_tai_for_suu() {
        // Sửu (2): Tam Tai in Thìn, Tỵ, Ngọ
        let v = check_tam_tai(2, 2024);
        assert_eq!(v.tam_tai, [ConGiap::Thin, ConGiap::Ti, ConGiap::Ngo]);
        assert_eq!(v.construction_chi, ConGiap::Thin);
        assert!(v.is_tam_tai);
        assert!(check_tam_tai(2, 2026).is_tam_tai);
        assert!(!check_tam_tai(2, 2027).is_tam_tai);
    }

    #[test]
    fn tam_tai_wraps_past_hoi() {
        // Tuất (11): 11+3 → 2 (Sửu), 3 (Dần), 4 (Mão)
        let v = check_tam_tai(11, 2024);
        assert_eq!(v.tam_tai, [ConGiap::Suu, ConGiap::Dan, ConGiap::Mao]);
        assert!(!v.is_tam_tai);
    }

    #[test]
    fn xung_tuoi_opposite() {
        // Sửu opposes Mùi; 2027 is a Mùi year
        let v = check_xung_tuoi(2, 2027);
        assert!(v.is_xung);
        assert_eq!(v.opposite_chi, ConGiap::Mui);
        assert_eq!(v.construction_chi, ConGiap::Mui);
        assert!(!check_xung_tuoi(2, 2026).is_xung);
    }

    #[test]
    fn xung_tuoi_is_mutual() {
        for z in 1..=12u8 {
            assert_eq!(offset_index(offset_index(z, 6), 6), z);
        }
    }
}
