//! Macro split and gram target models

use serde::{Deserialize, Serialize};

/// Target distribution of daily calories, in percent
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MacroSplit {
    pub protein_pct: f64,
    pub carbs_pct: f64,
    pub fat_pct: f64,
}

impl MacroSplit {
    pub fn new(protein_pct: f64, carbs_pct: f64, fat_pct: f64) -> Self {
        Self { protein_pct, carbs_pct, fat_pct }
    }

    pub fn total(&self) -> f64 {
        self.protein_pct + self.carbs_pct + self.fat_pct
    }

    /// True when the three percentages sum to exactly 100
    pub fn is_balanced(&self) -> bool {
        self.total() == 100.0
    }
}

impl Default for MacroSplit {
    fn default() -> Self {
        Self::new(30.0, 40.0, 30.0)
    }
}

/// Rounded daily gram targets per macro
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MacroGramTargets {
    pub protein: i64,
    pub carbs: i64,
    pub fat: i64,
}

/// Estimated daily calorie need. Zero means "not computed yet".
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CalorieThreshold(pub u32);

impl CalorieThreshold {
    pub const UNSET: CalorieThreshold = CalorieThreshold(0);

    pub fn kcal(&self) -> u32 {
        self.0
    }

    pub fn is_set(&self) -> bool {
        self.0 > 0
    }
}

impl std::fmt::Display for CalorieThreshold {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} kcal", self.0)
    }
}

/// Whether logged calories exceed the threshold
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CalorieStatus {
    Over,
    Under,
}
