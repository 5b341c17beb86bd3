//! House-facing directions and the per-cung good/bad direction table.
//!
//! Each cung has exactly 3 favourable and 3 unfavourable facings among the 8
//! compass points; the remaining 2 are neutral.

use std::error::Error;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::Serialize;

use crate::cung::{Cung, Profile};

/// The 8 compass directions a house can face.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Direction {
    Bac,
    Nam,
    Dong,
    Tay,
    DongBac,
    TayBac,
    DongNam,
    TayNam,
}

/// All 8 directions (N, S, E, W, NE, NW, SE, SW).
pub const ALL_DIRECTIONS: [Direction; 8] = [
    Direction::Bac,
    Direction::Nam,
    Direction::Dong,
    Direction::Tay,
    Direction::DongBac,
    Direction::TayBac,
    Direction::DongNam,
    Direction::TayNam,
];

impl Direction {
    /// Vietnamese label.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Bac => "Bắc",
            Self::Nam => "Nam",
            Self::Dong => "Đông",
            Self::Tay => "Tây",
            Self::DongBac => "Đông Bắc",
            Self::TayBac => "Tây Bắc",
            Self::DongNam => "Đông Nam",
            Self::TayNam => "Tây Nam",
        }
    }

    /// English name.
    pub const fn english_name(self) -> &'static str {
        match self {
            Self::Bac => "North",
            Self::Nam => "South",
            Self::Dong => "East",
            Self::Tay => "West",
            Self::DongBac => "Northeast",
            Self::TayBac => "Northwest",
            Self::DongNam => "Southeast",
            Self::TayNam => "Southwest",
        }
    }

    const fn abbreviation(self) -> &'static str {
        match self {
            Self::Bac => "N",
            Self::Nam => "S",
            Self::Dong => "E",
            Self::Tay => "W",
            Self::DongBac => "NE",
            Self::TayBac => "NW",
            Self::DongNam => "SE",
            Self::TayNam => "SW",
        }
    }
}

impl Display for Direction {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Unrecognized direction literal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectionParseError(pub String);

impl Display for DirectionParseError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "unknown direction '{}' (expected Bắc, Nam, Đông, Tây, Đông Bắc, Tây Bắc, \
             Đông Nam, Tây Nam or North..Southwest)",
            self.0
        )
    }
}

impl Error for DirectionParseError {}

/// Accepts the Vietnamese label, the English name or its abbreviation.
/// English forms are case-insensitive.
impl FromStr for Direction {
    type Err = DirectionParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let t = s.trim();
        ALL_DIRECTIONS
            .into_iter()
            .find(|d| {
                d.name() == t
                    || d.english_name().eq_ignore_ascii_case(t)
                    || d.abbreviation().eq_ignore_ascii_case(t)
            })
            .ok_or_else(|| DirectionParseError(s.to_string()))
    }
}

/// Favourable and unfavourable facings of one cung.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DirectionSets {
    pub good: [Direction; 3],
    pub bad: [Direction; 3],
}

/// Good/bad facing table, keyed by cung.
pub const fn direction_table(cung: Cung) -> DirectionSets {
    use Direction::*;

    let (good, bad) = match cung {
        Cung::Kham => ([Bac, Dong, DongNam], [Nam, Tay, TayBac]),
        Cung::Ly => ([Nam, Dong, DongNam], [Bac, Tay, TayBac]),
        Cung::Can => ([DongBac, TayNam, Tay], [Dong, Nam, Bac]),
        Cung::Doai => ([TayNam, DongBac, Tay], [Dong, Nam, Bac]),
        Cung::Kien => ([Dong, Tay, TayBac], [Nam, Bac, DongNam]),
        Cung::Khon => ([Tay, TayNam, DongBac], [Dong, Bac, Nam]),
        Cung::Ton => ([DongNam, Bac, Nam], [Tay, TayBac, DongBac]),
        Cung::Chan => ([Dong, Bac, Nam], [Tay, TayBac, DongNam]),
    };
    DirectionSets { good, bad }
}

/// Classification of a facing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DirectionKind {
    Good,
    Bad,
    Neutral,
}

impl DirectionKind {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Good => "good",
            Self::Bad => "bad",
            Self::Neutral => "neutral",
        }
    }
}

/// House-facing verdict for a profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DirectionVerdict {
    pub direction: Direction,
    pub is_good: bool,
    pub is_bad: bool,
    pub kind: DirectionKind,
}

/// Classify `direction` against the profile's cung.
pub fn evaluate_direction(profile: &Profile, direction: Direction) -> DirectionVerdict {
    let sets = direction_table(profile.cung);
    let is_good = sets.good.contains(&direction);
    let is_bad = sets.bad.contains(&direction);
    let kind = if is_good {
        DirectionKind::Good
    } else if is_bad {
        DirectionKind::Bad
    } else {
        DirectionKind::Neutral
    };
    DirectionVerdict {
        direction,
        is_good,
        is_bad,
        kind,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cung::{ALL_CUNG, Gender, profile_from_effective_year};

    fn profile_for(cung: Cung) -> Profile {
        (1900..2000)
            .flat_map(|y| [Gender::Nam, Gender::Nu].map(|g| profile_from_effective_year(y, g)))
            .find(|p| p.cung == cung)
            .unwrap()
    }

    #[test]
    fn parse_vietnamese_and_english() {
        assert_eq!("Đông Bắc".parse::<Direction>(), Ok(Direction::DongBac));
        assert_eq!("southwest".parse::<Direction>(), Ok(Direction::TayNam));
        assert_eq!("NW".parse::<Direction>(), Ok(Direction::TayBac));
        assert_eq!(" Nam ".parse::<Direction>(), Ok(Direction::Nam));
        assert!("Bắc Tây".parse::<Direction>().is_err());
    }

    #[test]
    fn every_table_row_is_3_good_3_bad_disjoint() {
        for cung in ALL_CUNG {
            let sets = direction_table(cung);
            for g in sets.good {
                assert!(!sets.bad.contains(&g), "{cung:?} {g:?}");
            }
            let neutral = ALL_DIRECTIONS
                .iter()
                .filter(|d| !sets.good.contains(d) && !sets.bad.contains(d))
                .count();
            assert_eq!(neutral, 2, "{cung:?}");
        }
    }

    #[test]
    fn kham_north_south_northeast() {
        let p = profile_for(Cung::Kham);
        let north = evaluate_direction(&p, Direction::Bac);
        assert!(north.is_good);
        assert_eq!(north.kind, DirectionKind::Good);

        let south = evaluate_direction(&p, Direction::Nam);
        assert!(south.is_bad);
        assert_eq!(south.kind, DirectionKind::Bad);

        let ne = evaluate_direction(&p, Direction::DongBac);
        assert!(!ne.is_good && !ne.is_bad);
        assert_eq!(ne.kind, DirectionKind::Neutral);
    }
}
