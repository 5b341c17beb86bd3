//! Ngũ hành (Five Elements) and the destructive (khắc) cycle.
//!
//! Years take the element of their heavenly stem, a 10-year cycle where each
//! element rules two consecutive years starting from Mộc at CE 4. Months use
//! a fixed 12-entry table.

use serde::Serialize;

/// The five elements.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum NguHanh {
    Moc,
    Hoa,
    Tho,
    Kim,
    Thuy,
}

/// All five elements in generating order.
pub const ALL_NGU_HANH: [NguHanh; 5] = [
    NguHanh::Moc,
    NguHanh::Hoa,
    NguHanh::Tho,
    NguHanh::Kim,
    NguHanh::Thuy,
];

impl NguHanh {
    /// Vietnamese name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Moc => "Mộc",
            Self::Hoa => "Hỏa",
            Self::Tho => "Thổ",
            Self::Kim => "Kim",
            Self::Thuy => "Thủy",
        }
    }

    /// The element this one destroys.
    ///
    /// Mộc→Thổ→Thủy→Hỏa→Kim→Mộc.
    pub const fn khac(self) -> Self {
        match self {
            Self::Moc => Self::Tho,
            Self::Tho => Self::Thuy,
            Self::Thuy => Self::Hoa,
            Self::Hoa => Self::Kim,
            Self::Kim => Self::Moc,
        }
    }

    /// True if either element destroys the other.
    pub const fn conflicts_with(self, other: Self) -> bool {
        self.khac() as u8 == other as u8 || other.khac() as u8 == self as u8
    }
}

/// Element of a CE year from its stem.
pub fn element_of_year(year: i32) -> NguHanh {
    match (i64::from(year) - 4).rem_euclid(10) {
        0 | 1 => NguHanh::Moc,
        2 | 3 => NguHanh::Hoa,
        4 | 5 => NguHanh::Tho,
        6 | 7 => NguHanh::Kim,
        _ => NguHanh::Thuy,
    }
}

/// Element of a calendar month (1-12). Returns None outside 1..=12.
pub fn element_of_month(month: i32) -> Option<NguHanh> {
    match month {
        1 | 6 | 11 => Some(NguHanh::Thuy),
        2 | 7 | 12 => Some(NguHanh::Hoa),
        3 | 8 => Some(NguHanh::Tho),
        4 | 9 => Some(NguHanh::Kim),
        5 | 10 => Some(NguHanh::Moc),
        _ => None,
    }
}

/// Symmetric destructive-cycle test. An absent element never conflicts.
pub fn is_element_conflict(a: Option<NguHanh>, b: Option<NguHanh>) -> bool {
    match (a, b) {
        (Some(a), Some(b)) => a.conflicts_with(b),
        _ => false,
    }
}
