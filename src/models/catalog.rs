//! Food catalog
//!
//! Read-only mapping from food name to per-serving nutrition. Supplied to the
//! calculation core by its caller, either built in or loaded from JSON.
//! Foods keep the order they were listed in.

use std::collections::HashMap;
use std::fmt;

use serde::de::{Deserialize, Deserializer, MapAccess, Visitor};

use super::{FoodItem, ModelError, ModelResult};

/// Mapping from unique food name to its nutrition, in listing order
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FoodCatalog {
    order: Vec<String>,
    items: HashMap<String, FoodItem>,
}

impl FoodCatalog {
    /// The default catalog shipped with the tracker
    pub fn builtin() -> Self {
        let items = [
            ("Chicken Breast (100g)", FoodItem::new(31.0, 0.0, 3.6, 165.0)),
            ("Brown Rice (100g)", FoodItem::new(2.6, 23.0, 0.9, 111.0)),
            ("Broccoli (100g)", FoodItem::new(2.8, 7.0, 0.4, 34.0)),
            ("Avocado (100g)", FoodItem::new(2.0, 9.0, 15.0, 160.0)),
            ("Egg (1 large)", FoodItem::new(6.0, 0.6, 5.0, 78.0)),
        ];

        items.into_iter().collect()
    }

    /// Parse and validate a catalog from a JSON object of `name -> item`.
    /// A name listed twice is rejected.
    pub fn from_json(json: &str) -> ModelResult<Self> {
        let entries: CatalogEntries = serde_json::from_str(json)?;

        let mut catalog = FoodCatalog::default();
        for (name, item) in entries.0 {
            if catalog.contains(&name) {
                return Err(ModelError::DuplicateFood(name));
            }
            catalog.insert(name, item);
        }

        catalog.validate()?;
        Ok(catalog)
    }

    /// Check every item for non-negative, finite values
    pub fn validate(&self) -> ModelResult<()> {
        for (name, item) in self.iter() {
            item.validate(name)?;
        }
        Ok(())
    }

    /// Add or replace a food; a replaced food keeps its position
    fn insert(&mut self, name: String, item: FoodItem) {
        if self.items.insert(name.clone(), item).is_none() {
            self.order.push(name);
        }
    }

    pub fn get(&self, name: &str) -> Option<&FoodItem> {
        self.items.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.items.contains_key(name)
    }

    /// Food names in listing order
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.order.iter().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &FoodItem)> {
        self.order
            .iter()
            .filter_map(|name| self.items.get(name).map(|item| (name.as_str(), item)))
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}

impl<S: Into<String>> FromIterator<(S, FoodItem)> for FoodCatalog {
    fn from_iter<I: IntoIterator<Item = (S, FoodItem)>>(iter: I) -> Self {
        let mut catalog = FoodCatalog::default();
        for (name, item) in iter {
            catalog.insert(name.into(), item);
        }
        catalog
    }
}

/// Raw JSON object entries, duplicates included
struct CatalogEntries(Vec<(String, FoodItem)>);

impl<'de> Deserialize<'de> for CatalogEntries {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct CatalogVisitor;

        impl<'de> Visitor<'de> for CatalogVisitor {
            type Value = CatalogEntries;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a map of food name to nutrition")
            }

            fn visit_map<V>(self, mut map: V) -> Result<CatalogEntries, V::Error>
            where
                V: MapAccess<'de>,
            {
                let mut entries = Vec::with_capacity(map.size_hint().unwrap_or(0));
                while let Some((name, item)) = map.next_entry::<String, FoodItem>()? {
                    entries.push((name, item));
                }
                Ok(CatalogEntries(entries))
            }
        }

        deserializer.deserialize_map(CatalogVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_catalog() {
        let catalog = FoodCatalog::builtin();
        assert_eq!(catalog.len(), 5);

        let chicken = catalog.get("Chicken Breast (100g)").unwrap();
        assert_eq!(chicken.protein, 31.0);
        assert_eq!(chicken.calories, 165.0);

        assert!(catalog.contains("Egg (1 large)"));
        assert!(!catalog.contains("Pizza"));
        assert!(catalog.validate().is_ok());
    }

    #[test]
    fn test_builtin_keeps_listing_order() {
        let catalog = FoodCatalog::builtin();
        let names: Vec<&str> = catalog.names().collect();
        assert_eq!(
            names,
            vec![
                "Chicken Breast (100g)",
                "Brown Rice (100g)",
                "Broccoli (100g)",
                "Avocado (100g)",
                "Egg (1 large)",
            ]
        );

        let first = catalog.iter().next().unwrap();
        assert_eq!(first.0, "Chicken Breast (100g)");
        assert_eq!(first.1.calories, 165.0);
    }

    #[test]
    fn test_from_json() {
        let json = r#"{
            "Oats (40g)": { "protein": 5.3, "carbs": 27.0, "fat": 2.8, "calories": 150 },
            "Banana": { "protein": 1.3, "carbs": 27.0, "fat": 0.4, "calories": 105 }
        }"#;

        let catalog = FoodCatalog::from_json(json).unwrap();
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.get("Banana").unwrap().calories, 105.0);

        let names: Vec<&str> = catalog.names().collect();
        assert_eq!(names, vec!["Oats (40g)", "Banana"]);
    }

    #[test]
    fn test_from_json_rejects_duplicate_names() {
        let json = r#"{
            "Banana": { "protein": 1.3, "carbs": 27.0, "fat": 0.4, "calories": 105 },
            "Banana": { "protein": 0, "carbs": 0, "fat": 0, "calories": 0 }
        }"#;

        match FoodCatalog::from_json(json) {
            Err(ModelError::DuplicateFood(name)) => assert_eq!(name, "Banana"),
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn test_from_json_rejects_negative_values() {
        let json = r#"{ "Mystery": { "protein": -1, "carbs": 0, "fat": 0, "calories": 0 } }"#;
        assert!(matches!(
            FoodCatalog::from_json(json),
            Err(ModelError::NegativeNutrient { .. })
        ));
    }

    #[test]
    fn test_from_json_rejects_missing_fields() {
        let json = r#"{ "Half": { "protein": 1, "carbs": 0 } }"#;
        assert!(matches!(FoodCatalog::from_json(json), Err(ModelError::Json(_))));
    }

    #[test]
    fn test_from_json_rejects_non_object() {
        assert!(matches!(FoodCatalog::from_json("[1, 2, 3]"), Err(ModelError::Json(_))));
    }
}
