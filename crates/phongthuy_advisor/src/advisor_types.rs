//! Types for the combined advisory report.

use std::fmt::{Display, Formatter};

use serde::Serialize;

use phongthuy_base::{
    ConGiap, DirectionVerdict, HazardReport, HoangOcPhase, HoangOcVerdict, KimLauKind,
    KimLauVerdict, NguHanh, Profile, TamTaiVerdict, XungTuoiVerdict,
};

/// A reason the construction year is unfavourable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum YearWarning {
    KimLau {
        kind: KimLauKind,
    },
    TamTai {
        year: i32,
        construction_chi: ConGiap,
        tam_tai: [ConGiap; 3],
    },
    HoangOc {
        phase: HoangOcPhase,
    },
    XungTuoi {
        year: i32,
        construction_chi: ConGiap,
        opposite_chi: ConGiap,
    },
    /// The profile element and the year element destroy one another.
    ElementConflict {
        profile: NguHanh,
        year: NguHanh,
    },
}

/// Vietnamese advisory sentence.
impl Display for YearWarning {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::KimLau { kind } => write!(f, "PHẠM KIM LÂU ({})", kind.name()),
            Self::TamTai {
                year,
                construction_chi,
                tam_tai,
            } => write!(
                f,
                "PHẠM TAM TAI (năm {year} là năm {}; tam tai cho bạn: {})",
                construction_chi.name(),
                tam_tai.map(ConGiap::name).join(", ")
            ),
            Self::HoangOc { phase } => write!(f, "PHẠM HOANG ỐC ({})", phase.name()),
            Self::XungTuoi {
                year,
                construction_chi,
                opposite_chi,
            } => write!(
                f,
                "XUNG TUỔI với năm {year} (năm {} đối xung với {})",
                construction_chi.name(),
                opposite_chi.name()
            ),
            Self::ElementConflict { profile, year } => write!(
                f,
                "XUNG NGŨ HÀNH: Cung ({}) và Năm ({}) khắc nhau",
                profile.name(),
                year.name()
            ),
        }
    }
}

/// A reason the construction month is unfavourable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum MonthWarning {
    ElementConflict { month: i32, profile: NguHanh },
}

impl Display for MonthWarning {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ElementConflict { month, profile } => write!(
                f,
                "THÁNG {month} xung Ngũ Hành với Cung ({})",
                profile.name()
            ),
        }
    }
}

/// Everything derived for one owner, construction date and site.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EvaluationReport {
    pub profile: Profile,
    /// Tuổi mụ in the construction year.
    pub ritual_age: i64,
    pub construction_year: i32,
    pub construction_month: i32,
    pub kim_lau: KimLauVerdict,
    pub hoang_oc: HoangOcVerdict,
    pub tam_tai: TamTaiVerdict,
    pub xung_tuoi: XungTuoiVerdict,
    pub year_element: NguHanh,
    /// None when the month is outside 1..=12.
    pub month_element: Option<NguHanh>,
    pub year_warnings: Vec<YearWarning>,
    pub month_warnings: Vec<MonthWarning>,
    pub direction: DirectionVerdict,
    pub hazards: HazardReport,
    /// True iff `year_warnings` is empty.
    pub year_is_favorable: bool,
    /// True iff `month_warnings` is empty.
    pub month_is_favorable: bool,
}
