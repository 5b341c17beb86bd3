//! Combined evaluation of owner, construction date, facing and site.

use tracing::debug;

use phongthuy_base::{
    Direction, PhongThuyError, Profile, check_hoang_oc, check_kim_lau, check_tam_tai,
    check_xung_tuoi, element_of_month, element_of_year, evaluate_direction, evaluate_hazards,
    is_element_conflict, resolve_profile_with, ritual_age, zodiac_index,
};

use crate::advisor_types::{EvaluationReport, MonthWarning, YearWarning};
use crate::config::EvaluationConfig;

/// Evaluate with the default configuration.
///
/// Fails only on a malformed birth date or an unknown gender literal.
/// Unknown location tags are ignored and an out-of-range month yields no
/// month element.
pub fn evaluate_all(
    birth_date: &str,
    gender: &str,
    construction_year: i32,
    construction_month: i32,
    location_features: &[&str],
    house_direction: Direction,
) -> Result<EvaluationReport, PhongThuyError> {
    evaluate_all_with(
        &EvaluationConfig::default(),
        birth_date,
        gender,
        construction_year,
        construction_month,
        location_features,
        house_direction,
    )
}

/// Evaluate with a custom configuration.
pub fn evaluate_all_with(
    config: &EvaluationConfig,
    birth_date: &str,
    gender: &str,
    construction_year: i32,
    construction_month: i32,
    location_features: &[&str],
    house_direction: Direction,
) -> Result<EvaluationReport, PhongThuyError> {
    let profile = resolve_profile_with(birth_date, gender, &config.new_year_cutoff)?;
    debug!(
        cung = profile.cung.name(),
        so_cung = profile.so_cung,
        effective_year = profile.effective_year,
        "resolved cung mệnh"
    );

    Ok(evaluate_profile(
        profile,
        construction_year,
        construction_month,
        location_features,
        house_direction,
    ))
}

/// Evaluate for an already resolved profile. Infallible.
pub fn evaluate_profile(
    profile: Profile,
    construction_year: i32,
    construction_month: i32,
    location_features: &[&str],
    house_direction: Direction,
) -> EvaluationReport {
    let age = ritual_age(construction_year, profile.effective_year);
    let owner_index = zodiac_index(profile.effective_year);

    let kim_lau = check_kim_lau(age);
    let hoang_oc = check_hoang_oc(age);
    let tam_tai = check_tam_tai(owner_index, construction_year);
    let xung_tuoi = check_xung_tuoi(owner_index, construction_year);
    debug!(
        ritual_age = age,
        kim_lau = kim_lau.is_kim_lau,
        hoang_oc = hoang_oc.phase.name(),
        tam_tai = tam_tai.is_tam_tai,
        xung_tuoi = xung_tuoi.is_xung,
        "checked year taboos"
    );

    let year_element = element_of_year(construction_year);
    let month_element = element_of_month(construction_month);
    let year_conflict = is_element_conflict(Some(profile.element), Some(year_element));
    let month_conflict = is_element_conflict(Some(profile.element), month_element);
    if month_element.is_none() {
        debug!(month = construction_month, "month outside 1..=12, no month element");
    }

    let direction = evaluate_direction(&profile, house_direction);
    let hazards = evaluate_hazards(location_features);
    debug!(
        direction = house_direction.name(),
        kind = direction.kind.name(),
        hazards = hazards.problems.len(),
        "evaluated site"
    );

    let mut year_warnings = Vec::new();
    if let Some(kind) = kim_lau.kind {
        year_warnings.push(YearWarning::KimLau { kind });
    }
    if tam_tai.is_tam_tai {
        year_warnings.push(YearWarning::TamTai {
            year: construction_year,
            construction_chi: tam_tai.construction_chi,
            tam_tai: tam_tai.tam_tai,
        });
    }
    if hoang_oc.is_bad {
        year_warnings.push(YearWarning::HoangOc {
            phase: hoang_oc.phase,
        });
    }
    if xung_tuoi.is_xung {
        year_warnings.push(YearWarning::XungTuoi {
            year: construction_year,
            construction_chi: xung_tuoi.construction_chi,
            opposite_chi: xung_tuoi.opposite_chi,
        });
    }
    if year_conflict {
        year_warnings.push(YearWarning::ElementConflict {
            profile: profile.element,
            year: year_element,
        });
    }

    let mut month_warnings = Vec::new();
    if month_conflict {
        month_warnings.push(MonthWarning::ElementConflict {
            month: construction_month,
            profile: profile.element,
        });
    }

    let year_is_favorable = year_warnings.is_empty();
    let month_is_favorable = month_warnings.is_empty();
    debug!(
        year_warnings = year_warnings.len(),
        month_warnings = month_warnings.len(),
        year_is_favorable,
        month_is_favorable,
        "evaluation complete"
    );

    EvaluationReport {
        profile,
        ritual_age: age,
        construction_year,
        construction_month,
        kim_lau,
        hoang_oc,
        tam_tai,
        xung_tuoi,
        year_element,
        month_element,
        year_warnings,
        month_warnings,
        direction,
        hazards,
        year_is_favorable,
        month_is_favorable,
    }
}
