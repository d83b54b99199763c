//! Profile and Threshold MCP Tools
//!
//! Tools for entering body metrics and calculating the calorie threshold.

use serde::Serialize;

use crate::models::{ActivityLevel, UserProfile};
use crate::nutrition::basal_metabolic_rate;
use crate::session::Session;

/// Response for set_profile
#[derive(Debug, Serialize)]
pub struct SetProfileResponse {
    pub profile: UserProfile,
    pub activity_label: &'static str,
    pub activity_factor: f64,
    pub complete: bool,
}

/// Response for calculate_threshold
#[derive(Debug, Serialize)]
pub struct CalculateThresholdResponse {
    pub calculated: bool,
    pub bmr: Option<f64>,
    /// Stored threshold in kcal, 0 when never calculated
    pub threshold: u32,
    pub message: String,
}

/// Activity option for list responses
#[derive(Debug, Serialize)]
pub struct ActivityOption {
    pub level: ActivityLevel,
    pub label: &'static str,
    pub factor: f64,
}

/// All accepted activity levels
pub fn activity_options() -> Vec<ActivityOption> {
    ActivityLevel::ALL
        .into_iter()
        .map(|level| ActivityOption {
            level,
            label: level.label(),
            factor: level.factor(),
        })
        .collect()
}

/// Replace the session profile.
///
/// `activity` may be a multiplier ("1.55") or a label ("Moderately Active");
/// when omitted the current activity level is kept.
pub fn set_profile(
    session: &Session,
    weight: Option<f64>,
    height: Option<f64>,
    age: Option<u32>,
    activity: Option<&str>,
) -> Result<SetProfileResponse, String> {
    let activity = activity
        .map(ActivityLevel::parse)
        .transpose()
        .map_err(|e| e.to_string())?;

    session
        .with_state_mut(|state, _| {
            let profile = UserProfile {
                weight,
                height,
                age,
                activity: activity.unwrap_or(state.profile.activity),
            };
            state.set_profile(profile);

            Ok(SetProfileResponse {
                profile,
                activity_label: profile.activity.label(),
                activity_factor: profile.activity.factor(),
                complete: profile.is_complete(),
            })
        })
        .map_err(|e| e.to_string())
}

/// Estimate calories from the stored profile and store the result
pub fn calculate_threshold(session: &Session) -> Result<CalculateThresholdResponse, String> {
    session
        .with_state_mut(|state, _| {
            let bmr = state
                .profile
                .metrics()
                .map(|(weight, height, age)| basal_metabolic_rate(weight, height, age));

            let response = match state.calculate_threshold() {
                Some(threshold) => CalculateThresholdResponse {
                    calculated: true,
                    bmr,
                    threshold: threshold.kcal(),
                    message: format!("Estimated daily calories: {}", threshold.kcal()),
                },
                None => CalculateThresholdResponse {
                    calculated: false,
                    bmr,
                    threshold: state.threshold.kcal(),
                    message: match bmr {
                        Some(_) => "Estimate is not a positive calorie value".to_string(),
                        None => "Weight, height and age are required for an estimate".to_string(),
                    },
                },
            };
            Ok(response)
        })
        .map_err(|e| e.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::FoodCatalog;

    #[test]
    fn test_set_profile_and_calculate() {
        let session = Session::new(FoodCatalog::builtin());

        let resp = set_profile(&session, Some(70.0), Some(175.0), Some(25), Some("1.2")).unwrap();
        assert!(resp.complete);
        assert_eq!(resp.activity_label, "Sedentary");

        let resp = calculate_threshold(&session).unwrap();
        assert!(resp.calculated);
        assert_eq!(resp.threshold, 2009);
        assert!((resp.bmr.unwrap() - 1673.75).abs() < 1e-9);
    }

    #[test]
    fn test_incomplete_profile_not_calculated() {
        let session = Session::new(FoodCatalog::builtin());
        set_profile(&session, Some(70.0), Some(175.0), None, None).unwrap();

        let resp = calculate_threshold(&session).unwrap();
        assert!(!resp.calculated);
        assert_eq!(resp.threshold, 0);
        assert_eq!(resp.bmr, None);
    }

    #[test]
    fn test_non_positive_estimate_not_calculated() {
        let session = Session::new(FoodCatalog::builtin());
        set_profile(&session, Some(70.0), Some(175.0), Some(25), None).unwrap();
        calculate_threshold(&session).unwrap();

        set_profile(&session, Some(1.0), Some(1.0), Some(100), None).unwrap();
        let resp = calculate_threshold(&session).unwrap();
        assert!(!resp.calculated);
        assert!((resp.bmr.unwrap() - -478.75).abs() < 1e-9);
        assert_eq!(resp.threshold, 2009);
        assert_eq!(resp.message, "Estimate is not a positive calorie value");
    }

    #[test]
    fn test_activity_kept_when_omitted() {
        let session = Session::new(FoodCatalog::builtin());
        set_profile(&session, None, None, None, Some("Very Active")).unwrap();
        let resp = set_profile(&session, Some(80.0), Some(180.0), Some(40), None).unwrap();
        assert_eq!(resp.profile.activity, ActivityLevel::VeryActive);
    }

    #[test]
    fn test_unknown_activity_rejected() {
        let session = Session::new(FoodCatalog::builtin());
        let err = set_profile(&session, Some(70.0), None, None, Some("2.5")).unwrap_err();
        assert!(err.contains("Unknown activity factor"));
        assert_eq!(session.snapshot().unwrap().profile, UserProfile::default());
    }

    #[test]
    fn test_activity_options() {
        let options = activity_options();
        assert_eq!(options.len(), 4);
        assert_eq!(options[2].label, "Moderately Active");
        assert_eq!(options[2].factor, 1.55);
    }
}
