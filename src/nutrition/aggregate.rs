//! Food log aggregation
//!
//! Sums catalog nutrition over every logged entry.

use crate::models::{FoodCatalog, FoodLog, NutrientTotals};

use super::{NutritionError, NutritionResult};

/// Sum the nutrition of every entry in `log`.
///
/// Totals are recomputed from zero on each call. An entry that is not in the
/// catalog fails the whole aggregation with `MissingCatalogEntry`; no partial
/// totals are returned.
pub fn aggregate(log: &FoodLog, catalog: &FoodCatalog) -> NutritionResult<NutrientTotals> {
    log.entries()
        .iter()
        .enumerate()
        .try_fold(NutrientTotals::zero(), |totals, (index, name)| {
            match catalog.get(name) {
                Some(item) => Ok(totals.add_item(item)),
                None => {
                    tracing::warn!("Logged food '{}' (index {}) missing from catalog", name, index);
                    Err(NutritionError::MissingCatalogEntry {
                        name: name.clone(),
                        index,
                    })
                }
            }
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::FoodItem;

    fn assert_totals(actual: NutrientTotals, protein: f64, carbs: f64, fat: f64, calories: f64) {
        assert!((actual.protein - protein).abs() < 1e-9, "protein {}", actual.protein);
        assert!((actual.carbs - carbs).abs() < 1e-9, "carbs {}", actual.carbs);
        assert!((actual.fat - fat).abs() < 1e-9, "fat {}", actual.fat);
        assert!((actual.calories - calories).abs() < 1e-9, "calories {}", actual.calories);
    }

    #[test]
    fn test_empty_log() {
        let totals = aggregate(&FoodLog::new(), &FoodCatalog::builtin()).unwrap();
        assert_eq!(totals, NutrientTotals::zero());
    }

    #[test]
    fn test_chicken_and_egg() {
        let log: FoodLog = ["Chicken Breast (100g)", "Egg (1 large)"].into_iter().collect();
        let totals = aggregate(&log, &FoodCatalog::builtin()).unwrap();
        assert_totals(totals, 37.0, 0.6, 8.6, 243.0);
    }

    #[test]
    fn test_repeated_entries_count_each_time() {
        let log: FoodLog = ["Egg (1 large)", "Egg (1 large)", "Egg (1 large)"].into_iter().collect();
        let totals = aggregate(&log, &FoodCatalog::builtin()).unwrap();
        assert_totals(totals, 18.0, 1.8, 15.0, 234.0);
    }

    #[test]
    fn test_append_then_remove_restores_totals() {
        let catalog = FoodCatalog::builtin();
        let mut log: FoodLog = ["Brown Rice (100g)", "Broccoli (100g)"].into_iter().collect();
        let before = aggregate(&log, &catalog).unwrap();

        log.append("Avocado (100g)");
        let during = aggregate(&log, &catalog).unwrap();
        assert_totals(during, before.protein + 2.0, before.carbs + 9.0, before.fat + 15.0, before.calories + 160.0);

        log.remove_at(2);
        assert_eq!(aggregate(&log, &catalog).unwrap(), before);
    }

    #[test]
    fn test_missing_entry_fails_fast() {
        let log: FoodLog = ["Egg (1 large)", "Pizza", "Unicorn"].into_iter().collect();
        let err = aggregate(&log, &FoodCatalog::builtin()).unwrap_err();
        assert_eq!(
            err,
            NutritionError::MissingCatalogEntry { name: "Pizza".to_string(), index: 1 }
        );
    }

    #[test]
    fn test_custom_catalog() {
        let catalog: FoodCatalog = [("Shake", FoodItem::new(25.0, 3.0, 1.5, 130.0))].into_iter().collect();
        let log: FoodLog = ["Shake", "Shake"].into_iter().collect();
        let totals = aggregate(&log, &catalog).unwrap();
        assert_totals(totals, 50.0, 6.0, 3.0, 260.0);
    }

    #[test]
    fn test_idempotent() {
        let catalog = FoodCatalog::builtin();
        let log: FoodLog = ["Avocado (100g)", "Egg (1 large)"].into_iter().collect();
        assert_eq!(aggregate(&log, &catalog), aggregate(&log, &catalog));
    }
}
