//! Food Item model
//!
//! Per-serving nutrition for one catalog entry.

use serde::{Deserialize, Serialize};

use super::{ModelError, ModelResult};

/// Nutrition for a single serving of a food
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FoodItem {
    pub protein: f64,  // grams
    pub carbs: f64,    // grams
    pub fat: f64,      // grams
    pub calories: f64, // kcal
}

impl FoodItem {
    pub fn new(protein: f64, carbs: f64, fat: f64, calories: f64) -> Self {
        Self { protein, carbs, fat, calories }
    }

    /// Check that every field is finite and non-negative
    pub fn validate(&self, name: &str) -> ModelResult<()> {
        let fields = [
            ("protein", self.protein),
            ("carbs", self.carbs),
            ("fat", self.fat),
            ("calories", self.calories),
        ];

        for (field, value) in fields {
            if !value.is_finite() || value < 0.0 {
                return Err(ModelError::NegativeNutrient {
                    name: name.to_string(),
                    field,
                    value,
                });
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_accepts_zero_fields() {
        let water = FoodItem::new(0.0, 0.0, 0.0, 0.0);
        assert!(water.validate("Water").is_ok());
    }

    #[test]
    fn test_validate_rejects_negative() {
        let bad = FoodItem::new(1.0, -2.0, 0.0, 10.0);
        match bad.validate("Bad") {
            Err(ModelError::NegativeNutrient { name, field, .. }) => {
                assert_eq!(name, "Bad");
                assert_eq!(field, "carbs");
            }
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn test_validate_rejects_nan() {
        let bad = FoodItem::new(1.0, 2.0, f64::NAN, 10.0);
        assert!(bad.validate("Bad").is_err());
    }
}
