//! Site hazards (yếu tố xấu của bất động sản) and their remedies.
//!
//! Recognized tags are fixed literals shared with the caller. The report is
//! ordered by the hazard table, not by the order tags were supplied.

use serde::Serialize;

/// Recognized location-feature tags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum HazardTag {
    BenhVien,
    ChuaNhaTho,
    TruongHoc,
    DuongDam,
    NgaBa,
    NgaTu,
    DuongDoc,
    CotDien,
}

pub const ALL_HAZARD_TAGS: [HazardTag; 8] = [
    HazardTag::BenhVien,
    HazardTag::ChuaNhaTho,
    HazardTag::TruongHoc,
    HazardTag::DuongDam,
    HazardTag::NgaBa,
    HazardTag::NgaTu,
    HazardTag::DuongDoc,
    HazardTag::CotDien,
];

impl HazardTag {
    /// Literal tag string.
    pub const fn tag(self) -> &'static str {
        match self {
            Self::BenhVien => "benh-vien",
            Self::ChuaNhaTho => "chua-nha-tho",
            Self::TruongHoc => "truong-hoc",
            Self::DuongDam => "duong-dam",
            Self::NgaBa => "nga-ba",
            Self::NgaTu => "nga-tu",
            Self::DuongDoc => "duong-doc",
            Self::CotDien => "cot-dien",
        }
    }

    /// Tag for a literal, or None if unrecognized.
    pub fn from_tag(s: &str) -> Option<Self> {
        ALL_HAZARD_TAGS.into_iter().find(|t| t.tag() == s)
    }
}

/// One row of the hazard table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HazardRule {
    /// The row fires if any of these tags is present.
    pub tags: &'static [HazardTag],
    pub problem: &'static str,
    pub solution: &'static str,
}

/// Hazard table in report order.
pub const HAZARD_TABLE: [HazardRule; 7] = [
    HazardRule {
        tags: &[HazardTag::BenhVien],
        problem: "Trước mặt là bệnh viện (âm khí nặng, ảnh hưởng sức khỏe).",
        solution: "Hóa giải: Trồng cây xanh, treo gương Bát Quái, đặt tượng Phật Di Lặc.",
    },
    HazardRule {
        tags: &[HazardTag::ChuaNhaTho],
        problem: "Trước mặt là chùa/nhà thờ (âm khí mạnh, ảnh hưởng tài lộc).",
        solution: "Hóa giải: Đặt tượng Quan Công, treo chuông gió, trồng cây Kim Ngân.",
    },
    HazardRule {
        tags: &[HazardTag::TruongHoc],
        problem: "Trước mặt là trường học (ảnh hưởng đến sự yên tĩnh).",
        solution: "Hóa giải: Đặt vách ngăn, treo rèm cửa, sử dụng vật phẩm phong thủy.",
    },
    HazardRule {
        tags: &[HazardTag::DuongDam],
        problem: "Đường đâm thẳng vào nhà (gây hao tán tài lộc, ảnh hưởng sức khỏe).",
        solution: "Hóa giải: Đặt đá phong thủy, trồng cây to, lắp gương Bát Quái.",
    },
    HazardRule {
        tags: &[HazardTag::NgaBa, HazardTag::NgaTu],
        problem: "Nằm ở ngã ba/ngã tư (khí lưu động mạnh, gây bất ổn).",
        solution: "Hóa giải: Đặt bể cá, trồng cây xanh, treo chuông gió.",
    },
    HazardRule {
        tags: &[HazardTag::DuongDoc],
        problem: "Đường ngang dốc trước nhà (khí không ổn định).",
        solution: "Hóa giải: Đặt đá Thạch Anh, trồng cây chắn gió.",
    },
    HazardRule {
        tags: &[HazardTag::CotDien],
        problem: "Có cột điện gần nhà (phá khí, ảnh hưởng sức khỏe).",
        solution: "Hóa giải: Đặt tượng Rồng, treo gương Bát Quái, trồng cây cao.",
    },
];

/// Problems found at a site and the matching remedies, pairwise aligned.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct HazardReport {
    pub problems: Vec<&'static str>,
    pub solutions: Vec<&'static str>,
}

impl HazardReport {
    pub fn is_empty(&self) -> bool {
        self.problems.is_empty()
    }
}

/// Evaluate a set of location-feature tags. Unknown tags are ignored.
pub fn evaluate_hazards(features: &[&str]) -> HazardReport {
    let present: Vec<HazardTag> = features
        .iter()
        .filter_map(|f| HazardTag::from_tag(f.trim()))
        .collect();

    let mut report = HazardReport::default();
    for rule in &HAZARD_TABLE {
        if rule.tags.iter().any(|t| present.contains(t)) {
            report.problems.push(rule.problem);
            report.solutions.push(rule.solution);
        }
    }
    report
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tags_round_trip() {
        for t in ALL_HAZARD_TAGS {
            assert_eq!(HazardTag::from_tag(t.tag()), Some(t));
        }
        assert_eq!(HazardTag::from_tag("hospital"), None);
    }

    #[test]
    fn every_tag_has_a_rule() {
        for t in ALL_HAZARD_TAGS {
            assert!(HAZARD_TABLE.iter().any(|r| r.tags.contains(&t)), "{t:?}");
        }
    }

    #[test]
    fn empty_input() {
        let r = evaluate_hazards(&[]);
        assert!(r.is_empty());
        assert!(r.solutions.is_empty());
    }

    #[test]
    fn table_order_not_input_order() {
        let a = evaluate_hazards(&["cot-dien", "benh-vien"]);
        let b = evaluate_hazards(&["benh-vien", "cot-dien"]);
        assert_eq!(a, b);
        assert_eq!(a.problems.len(), 2);
        assert_eq!(a.solutions.len(), 2);
        assert_eq!(a.problems[0], HAZARD_TABLE[0].problem);
        assert_eq!(a.problems[1], HAZARD_TABLE[6].problem);
    }

    #[test]
    fn junction_row_fires_once() {
        let r = evaluate_hazards(&["nga-ba", "nga-tu"]);
        assert_eq!(r.problems, vec![HAZARD_TABLE[4].problem]);
        assert_eq!(evaluate_hazards(&["nga-tu"]).problems.len(), 1);
    }

    #[test]
    fn unknown_and_duplicate_tags() {
        let r = evaluate_hazards(&["view-song", "truong-hoc", "truong-hoc"]);
        assert_eq!(r.problems, vec![HAZARD_TABLE[2].problem]);
        assert_eq!(r.solutions, vec![HAZARD_TABLE[2].solution]);
    }
}
