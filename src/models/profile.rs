//! User profile model
//!
//! Body metrics and activity level used to estimate daily calories.

use serde::{Deserialize, Serialize};

use super::{ModelError, ModelResult};

/// Activity level, mapped to a fixed BMR multiplier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ActivityLevel {
    #[default]
    Sedentary,
    LightlyActive,
    ModeratelyActive,
    VeryActive,
}

impl ActivityLevel {
    pub const ALL: [ActivityLevel; 4] = [
        ActivityLevel::Sedentary,
        ActivityLevel::LightlyActive,
        ActivityLevel::ModeratelyActive,
        ActivityLevel::VeryActive,
    ];

    /// Multiplier applied to BMR
    pub fn factor(&self) -> f64 {
        match self {
            ActivityLevel::Sedentary => 1.2,
            ActivityLevel::LightlyActive => 1.375,
            ActivityLevel::ModeratelyActive => 1.55,
            ActivityLevel::VeryActive => 1.725,
        }
    }

    /// Display label
    pub fn label(&self) -> &'static str {
        match self {
            ActivityLevel::Sedentary => "Sedentary",
            ActivityLevel::LightlyActive => "Lightly Active",
            ActivityLevel::ModeratelyActive => "Moderately Active",
            ActivityLevel::VeryActive => "Very Active",
        }
    }

    /// Look up a level by its exact multiplier
    pub fn from_factor(factor: f64) -> ModelResult<Self> {
        Self::ALL
            .into_iter()
            .find(|level| level.factor() == factor)
            .ok_or(ModelError::UnknownActivityFactor(factor))
    }

    /// Parse a label such as "Lightly Active", "lightly_active" or "very-active"
    pub fn from_label(label: &str) -> ModelResult<Self> {
        let normalized: String = label
            .chars()
            .filter(|c| !matches!(c, ' ' | '_' | '-'))
            .flat_map(char::to_lowercase)
            .collect();

        match normalized.as_str() {
            "sedentary" => Ok(ActivityLevel::Sedentary),
            "lightlyactive" | "light" => Ok(ActivityLevel::LightlyActive),
            "moderatelyactive" | "moderate" => Ok(ActivityLevel::ModeratelyActive),
            "veryactive" => Ok(ActivityLevel::VeryActive),
            _ => Err(ModelError::UnknownActivityLabel(label.to_string())),
        }
    }

    /// Parse either a numeric multiplier ("1.55") or a label
    pub fn parse(input: &str) -> ModelResult<Self> {
        let trimmed = input.trim();
        match trimmed.parse::<f64>() {
            Ok(factor) => Self::from_factor(factor),
            Err(_) => Self::from_label(trimmed),
        }
    }
}

/// Body metrics for the energy estimate. Absent fields mean "not entered yet".
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    pub weight: Option<f64>, // kg
    pub height: Option<f64>, // cm
    pub age: Option<u32>,    // years
    #[serde(default)]
    pub activity: ActivityLevel,
}

impl UserProfile {
    pub fn new(weight: f64, height: f64, age: u32, activity: ActivityLevel) -> Self {
        Self {
            weight: Some(weight),
            height: Some(height),
            age: Some(age),
            activity,
        }
    }

    /// True when weight, height and age are all present and positive
    pub fn is_complete(&self) -> bool {
        self.metrics().is_some()
    }

    /// (weight, height, age) when the profile is complete
    pub fn metrics(&self) -> Option<(f64, f64, u32)> {
        let weight = self.weight.filter(|w| w.is_finite() && *w > 0.0)?;
        let height = self.height.filter(|h| h.is_finite() && *h > 0.0)?;
        let age = self.age.filter(|a| *a > 0)?;
        Some((weight, height, age))
    }
}
