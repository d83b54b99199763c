//! Macro allocation
//!
//! Converts a calorie budget and a percentage split into daily gram targets.

use serde::Serialize;

use crate::models::{CalorieStatus, CalorieThreshold, MacroGramTargets, MacroSplit, NutrientTotals};

use super::units::Macro;

/// Why gram targets cannot be computed yet
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "issue", rename_all = "snake_case")]
pub enum AllocationIssue {
    /// Percentages do not sum to 100
    InvalidSplit { total: f64 },
    /// No calorie threshold has been calculated
    ThresholdUnset,
}

impl std::fmt::Display for AllocationIssue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AllocationIssue::InvalidSplit { total } => {
                write!(f, "Percentages must total 100% (currently {}%)", total)
            }
            AllocationIssue::ThresholdUnset => write!(f, "Calorie threshold not calculated yet"),
        }
    }
}

/// Report the first reason allocation would be absent, checking the split
/// before the threshold.
pub fn allocation_issue(split: &MacroSplit, threshold: CalorieThreshold) -> Option<AllocationIssue> {
    if !split.is_balanced() {
        return Some(AllocationIssue::InvalidSplit { total: split.total() });
    }
    if !threshold.is_set() {
        return Some(AllocationIssue::ThresholdUnset);
    }
    None
}

/// Grams of one macro for its share of the budget, rounded independently
fn grams_for(threshold: CalorieThreshold, pct: f64, nutrient: Macro) -> i64 {
    let kcal = f64::from(threshold.kcal()) * (pct / 100.0);
    (kcal / nutrient.kcal_per_gram()).round() as i64
}

/// Daily gram targets for `split` at `threshold` kcal.
///
/// Returns None when the split does not sum to exactly 100 or the threshold
/// is unset. Each macro is rounded on its own, so the grams may miss the
/// threshold by a few kcal.
pub fn allocate(split: &MacroSplit, threshold: CalorieThreshold) -> Option<MacroGramTargets> {
    if let Some(issue) = allocation_issue(split, threshold) {
        tracing::debug!("Macro targets unavailable: {}", issue);
        return None;
    }

    Some(MacroGramTargets {
        protein: grams_for(threshold, split.protein_pct, Macro::Protein),
        carbs: grams_for(threshold, split.carbs_pct, Macro::Carbs),
        fat: grams_for(threshold, split.fat_pct, Macro::Fat),
    })
}

impl MacroGramTargets {
    /// Calories represented by the rounded gram targets
    pub fn calories(&self) -> f64 {
        self.protein as f64 * Macro::Protein.kcal_per_gram()
            + self.carbs as f64 * Macro::Carbs.kcal_per_gram()
            + self.fat as f64 * Macro::Fat.kcal_per_gram()
    }
}

/// Over/Under compared to the threshold; None while the threshold is unset
pub fn calorie_status(totals: &NutrientTotals, threshold: CalorieThreshold) -> Option<CalorieStatus> {
    if !threshold.is_set() {
        return None;
    }

    if totals.calories > f64::from(threshold.kcal()) {
        Some(CalorieStatus::Over)
    } else {
        Some(CalorieStatus::Under)
    }
}
