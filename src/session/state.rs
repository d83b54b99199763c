//! Session state
//!
//! The mutable inputs of the calculation core. Calculations read snapshots of
//! this state; only the methods here change it.

use serde::Serialize;

use crate::models::{
    CalorieStatus, CalorieThreshold, FoodCatalog, FoodLog, MacroGramTargets, MacroSplit,
    NutrientTotals, UserProfile,
};
use crate::nutrition::{aggregate, allocate, calorie_status, estimate_daily_calories};

use super::{SessionError, SessionResult};

/// Profile, food log, split and threshold for one user session
#[derive(Debug, Clone, Default, Serialize)]
pub struct SessionState {
    pub profile: UserProfile,
    pub log: FoodLog,
    pub split: MacroSplit,
    pub threshold: CalorieThreshold,
}

impl SessionState {
    pub fn set_profile(&mut self, profile: UserProfile) {
        tracing::info!(
            "Profile updated: weight={:?} height={:?} age={:?} activity={}",
            profile.weight,
            profile.height,
            profile.age,
            profile.activity.label()
        );
        self.profile = profile;
    }

    /// Recompute the threshold from the profile.
    ///
    /// The stored threshold only changes when an estimate is available; an
    /// incomplete profile leaves the previous value in place.
    pub fn calculate_threshold(&mut self) -> Option<CalorieThreshold> {
        let estimate = estimate_daily_calories(&self.profile)?;
        tracing::info!("Calorie threshold set to {}", estimate);
        self.threshold = estimate;
        Some(estimate)
    }

    /// Log one serving of a catalog food
    pub fn add_food(&mut self, catalog: &FoodCatalog, name: &str) -> SessionResult<()> {
        if !catalog.contains(name) {
            tracing::warn!("Rejected unknown food '{}'", name);
            return Err(SessionError::UnknownFood(name.to_string()));
        }
        self.log.append(name);
        tracing::info!("Logged '{}' ({} entries)", name, self.log.len());
        Ok(())
    }

    /// Remove the log entry at `index`, returning its name
    pub fn remove_food(&mut self, index: usize) -> SessionResult<String> {
        let len = self.log.len();
        let removed = self
            .log
            .remove_at(index)
            .ok_or(SessionError::IndexOutOfRange { index, len })?;
        tracing::info!("Removed '{}' from index {}", removed, index);
        Ok(removed)
    }

    pub fn clear_log(&mut self) -> usize {
        let removed = self.log.len();
        self.log.clear();
        tracing::info!("Cleared {} food log entries", removed);
        removed
    }

    /// Replace the split. Unbalanced splits are stored; they only block targets.
    pub fn set_split(&mut self, split: MacroSplit) {
        if !split.is_balanced() {
            tracing::warn!("Macro split totals {}%, targets unavailable", split.total());
        }
        self.split = split;
    }

    pub fn totals(&self, catalog: &FoodCatalog) -> SessionResult<NutrientTotals> {
        Ok(aggregate(&self.log, catalog)?)
    }

    pub fn calorie_status(&self, catalog: &FoodCatalog) -> SessionResult<Option<CalorieStatus>> {
        let totals = self.totals(catalog)?;
        Ok(calorie_status(&totals, self.threshold))
    }

    pub fn targets(&self) -> Option<MacroGramTargets> {
        allocate(&self.split, self.threshold)
    }
}
