//! Macro Split MCP Tools
//!
//! Tools for setting the percentage split, reading gram targets, and the
//! combined session summary.

use serde::Serialize;

use crate::models::{
    CalorieStatus, MacroGramTargets, MacroSplit, NutrientTotals, UserProfile,
};
use crate::nutrition::{allocation_issue, AllocationIssue};
use crate::session::Session;

/// Response for set_macro_split
#[derive(Debug, Serialize)]
pub struct SetMacroSplitResponse {
    pub split: MacroSplit,
    pub total: f64,
    pub valid: bool,
    pub message: Option<String>,
}

/// Response for get_targets
#[derive(Debug, Serialize)]
pub struct TargetsResponse {
    pub split: MacroSplit,
    pub threshold: u32,
    /// Gram targets, absent until split and threshold are both valid
    pub targets: Option<MacroGramTargets>,
    /// Calories the rounded targets add up to
    pub target_calories: Option<f64>,
    pub issue: Option<AllocationIssue>,
    pub message: Option<String>,
}

/// Response for get_summary
#[derive(Debug, Serialize)]
pub struct SummaryResponse {
    pub profile: UserProfile,
    pub threshold: u32,
    pub log: Vec<String>,
    pub totals: NutrientTotals,
    pub status: Option<CalorieStatus>,
    pub split: MacroSplit,
    pub targets: Option<MacroGramTargets>,
    pub issue: Option<AllocationIssue>,
}

/// Replace the split. Unbalanced splits are kept and reported as invalid.
pub fn set_macro_split(
    session: &Session,
    protein_pct: f64,
    carbs_pct: f64,
    fat_pct: f64,
) -> Result<SetMacroSplitResponse, String> {
    if [protein_pct, carbs_pct, fat_pct].iter().any(|p| !p.is_finite()) {
        return Err("Percentages must be finite numbers".to_string());
    }

    let split = MacroSplit::new(protein_pct, carbs_pct, fat_pct);
    session
        .with_state_mut(|state, _| {
            state.set_split(split);
            Ok(())
        })
        .map_err(|e| e.to_string())?;

    let valid = split.is_balanced();
    Ok(SetMacroSplitResponse {
        split,
        total: split.total(),
        valid,
        message: (!valid).then(|| "Percentages must total 100%".to_string()),
    })
}

/// Daily gram targets for the current split and threshold
pub fn get_targets(session: &Session) -> Result<TargetsResponse, String> {
    session
        .with_state(|state, _| {
            let targets = state.targets();
            let issue = allocation_issue(&state.split, state.threshold);

            Ok(TargetsResponse {
                split: state.split,
                threshold: state.threshold.kcal(),
                targets,
                target_calories: targets.map(|t| t.calories()),
                issue,
                message: issue.map(|i| i.to_string()),
            })
        })
        .map_err(|e| e.to_string())
}

/// Everything the session holds, plus derived totals and targets
pub fn get_summary(session: &Session) -> Result<SummaryResponse, String> {
    session
        .with_state(|state, catalog| {
            Ok(SummaryResponse {
                profile: state.profile,
                threshold: state.threshold.kcal(),
                log: state.log.entries().to_vec(),
                totals: state.totals(catalog)?,
                status: state.calorie_status(catalog)?,
                split: state.split,
                targets: state.targets(),
                issue: allocation_issue(&state.split, state.threshold),
            })
        })
        .map_err(|e| e.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::FoodCatalog;
    use crate::tools::{food_log, profile};

    #[test]
    fn test_targets_unavailable_until_threshold() {
        let session = Session::new(FoodCatalog::builtin());
        let resp = get_targets(&session).unwrap();
        assert_eq!(resp.targets, None);
        assert_eq!(resp.issue, Some(AllocationIssue::ThresholdUnset));
    }

    #[test]
    fn test_invalid_split_reported() {
        let session = Session::new(FoodCatalog::builtin());
        let resp = set_macro_split(&session, 30.0, 40.0, 20.0).unwrap();
        assert!(!resp.valid);
        assert_eq!(resp.total, 90.0);
        assert_eq!(resp.message.as_deref(), Some("Percentages must total 100%"));

        let targets = get_targets(&session).unwrap();
        assert_eq!(targets.issue, Some(AllocationIssue::InvalidSplit { total: 90.0 }));
        assert!(set_macro_split(&session, f64::NAN, 50.0, 50.0).is_err());
    }

    #[test]
    fn test_full_flow() {
        let session = Session::new(FoodCatalog::builtin());
        profile::set_profile(&session, Some(70.0), Some(175.0), Some(25), Some("Sedentary")).unwrap();
        profile::calculate_threshold(&session).unwrap();
        set_macro_split(&session, 40.0, 30.0, 30.0).unwrap();
        food_log::add_food(&session, "Chicken Breast (100g)").unwrap();

        let targets = get_targets(&session).unwrap();
        // 2009 kcal: 803.6/4, 602.7/4, 602.7/9
        assert_eq!(targets.targets, Some(MacroGramTargets { protein: 201, carbs: 151, fat: 67 }));
        assert_eq!(targets.issue, None);

        let summary = get_summary(&session).unwrap();
        assert_eq!(summary.threshold, 2009);
        assert_eq!(summary.log, vec!["Chicken Breast (100g)".to_string()]);
        assert_eq!(summary.status, Some(CalorieStatus::Under));
        assert_eq!(summary.targets, targets.targets);
    }
}
