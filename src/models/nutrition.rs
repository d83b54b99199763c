//! Shared nutrition data structure
//!
//! Accumulated macro and calorie sums for a food log.

use serde::{Deserialize, Serialize};

use super::FoodItem;

/// Summed nutrition for a set of logged foods
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct NutrientTotals {
    pub protein: f64,  // grams
    pub carbs: f64,    // grams
    pub fat: f64,      // grams
    pub calories: f64, // kcal
}

impl NutrientTotals {
    /// Create totals with all zeros
    pub fn zero() -> Self {
        Self::default()
    }

    /// Add another set of totals to this one
    pub fn add(&self, other: &NutrientTotals) -> Self {
        Self {
            protein: self.protein + other.protein,
            carbs: self.carbs + other.carbs,
            fat: self.fat + other.fat,
            calories: self.calories + other.calories,
        }
    }

    /// Add one serving of a food item
    pub fn add_item(&self, item: &FoodItem) -> Self {
        self.add(&NutrientTotals::from(item))
    }
}

impl From<&FoodItem> for NutrientTotals {
    fn from(item: &FoodItem) -> Self {
        Self {
            protein: item.protein,
            carbs: item.carbs,
            fat: item.fat,
            calories: item.calories,
        }
    }
}

impl std::ops::Add for NutrientTotals {
    type Output = NutrientTotals;

    fn add(self, other: NutrientTotals) -> NutrientTotals {
        NutrientTotals::add(&self, &other)
    }
}

impl std::iter::Sum for NutrientTotals {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(NutrientTotals::zero(), |acc, n| acc + n)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero() {
        let zero = NutrientTotals::zero();
        assert_eq!(zero.protein, 0.0);
        assert_eq!(zero.carbs, 0.0);
        assert_eq!(zero.fat, 0.0);
        assert_eq!(zero.calories, 0.0);
    }

    #[test]
    fn test_add_item() {
        let egg = FoodItem { protein: 6.0, carbs: 0.6, fat: 5.0, calories: 78.0 };
        let totals = NutrientTotals::zero().add_item(&egg).add_item(&egg);
        assert!((totals.protein - 12.0).abs() < 1e-9);
        assert!((totals.carbs - 1.2).abs() < 1e-9);
        assert!((totals.fat - 10.0).abs() < 1e-9);
        assert!((totals.calories - 156.0).abs() < 1e-9);
    }

    #[test]
    fn test_sum() {
        let parts = vec![
            NutrientTotals { protein: 1.0, carbs: 2.0, fat: 3.0, calories: 4.0 },
            NutrientTotals { protein: 10.0, carbs: 20.0, fat: 30.0, calories: 40.0 },
        ];
        let total: NutrientTotals = parts.into_iter().sum();
        assert_eq!(total, NutrientTotals { protein: 11.0, carbs: 22.0, fat: 33.0, calories: 44.0 });
    }
}
