//! Daily energy estimate
//!
//! BMR from body metrics, scaled by the activity multiplier.

use crate::models::{CalorieThreshold, UserProfile};

use super::units::{BMR_OFFSET, BMR_PER_CM, BMR_PER_KG, BMR_PER_YEAR};

/// Basal metabolic rate in kcal/day.
///
/// `10*weight + 6.25*height - 5*age + 5`. This is Mifflin-St Jeor with a fixed
/// offset in place of the sex term; keep it as is.
pub fn basal_metabolic_rate(weight_kg: f64, height_cm: f64, age_years: u32) -> f64 {
    BMR_PER_KG * weight_kg + BMR_PER_CM * height_cm - BMR_PER_YEAR * f64::from(age_years)
        + BMR_OFFSET
}

/// Estimate the daily calorie need for a profile.
///
/// Returns None while weight, height or age is missing or not positive, and
/// when the estimate does not round to a positive kcal value.
pub fn estimate_daily_calories(profile: &UserProfile) -> Option<CalorieThreshold> {
    let (weight, height, age) = profile.metrics()?;

    let bmr = basal_metabolic_rate(weight, height, age);
    let calories = (bmr * profile.activity.factor()).round();

    if !calories.is_finite() || calories <= 0.0 || calories > f64::from(u32::MAX) {
        tracing::debug!("Energy estimate out of range: {}", calories);
        return None;
    }

    tracing::debug!(
        "Estimated {} kcal (bmr {:.2}, {} x{})",
        calories,
        bmr,
        profile.activity.label(),
        profile.activity.factor()
    );
    Some(CalorieThreshold(calories as u32))
}
