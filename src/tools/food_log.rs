//! Food Log MCP Tools
//!
//! Tools for browsing the catalog, logging foods and reading totals.

use serde::Serialize;

use crate::models::{CalorieStatus, FoodItem, NutrientTotals};
use crate::session::Session;

/// Catalog entry for list_foods
#[derive(Debug, Serialize)]
pub struct CatalogFood {
    pub name: String,
    pub protein: f64,
    pub carbs: f64,
    pub fat: f64,
    pub calories: f64,
}

impl CatalogFood {
    fn new(name: &str, item: &FoodItem) -> Self {
        Self {
            name: name.to_string(),
            protein: item.protein,
            carbs: item.carbs,
            fat: item.fat,
            calories: item.calories,
        }
    }
}

/// Response for list_foods
#[derive(Debug, Serialize)]
pub struct ListFoodsResponse {
    pub foods: Vec<CatalogFood>,
    pub total: usize,
}

/// One logged entry with its display calories
#[derive(Debug, Serialize)]
pub struct FoodLogEntry {
    pub index: usize,
    pub name: String,
    pub calories: Option<f64>,
}

/// Response for get_food_log
#[derive(Debug, Serialize)]
pub struct FoodLogResponse {
    pub entries: Vec<FoodLogEntry>,
    pub count: usize,
}

/// Response for add_food
#[derive(Debug, Serialize)]
pub struct AddFoodResponse {
    pub success: bool,
    pub index: usize,
    pub name: String,
    pub calories: f64,
    pub log_size: usize,
}

/// Response for remove_food
#[derive(Debug, Serialize)]
pub struct RemoveFoodResponse {
    pub success: bool,
    pub removed_index: usize,
    pub removed_name: String,
    pub log_size: usize,
}

/// Response for clear_food_log
#[derive(Debug, Serialize)]
pub struct ClearFoodLogResponse {
    pub success: bool,
    pub removed: usize,
}

/// Response for get_totals
#[derive(Debug, Serialize)]
pub struct TotalsResponse {
    pub totals: NutrientTotals,
    pub threshold: u32,
    /// Over/Under, absent until a threshold is calculated
    pub status: Option<CalorieStatus>,
    pub entry_count: usize,
}

/// List every food in the catalog
pub fn list_foods(session: &Session) -> ListFoodsResponse {
    let foods: Vec<CatalogFood> = session
        .catalog()
        .iter()
        .map(|(name, item)| CatalogFood::new(name, item))
        .collect();
    let total = foods.len();

    ListFoodsResponse { foods, total }
}

/// Log one serving of a catalog food
pub fn add_food(session: &Session, name: &str) -> Result<AddFoodResponse, String> {
    let name = name.trim();
    if name.is_empty() {
        return Err("Food name cannot be empty".to_string());
    }

    session
        .with_state_mut(|state, catalog| {
            state.add_food(catalog, name)?;
            let calories = catalog.get(name).map(|item| item.calories).unwrap_or_default();

            Ok(AddFoodResponse {
                success: true,
                index: state.log.len() - 1,
                name: name.to_string(),
                calories,
                log_size: state.log.len(),
            })
        })
        .map_err(|e| e.to_string())
}

/// Remove the log entry at `index`
pub fn remove_food(session: &Session, index: usize) -> Result<RemoveFoodResponse, String> {
    session
        .with_state_mut(|state, _| {
            let removed_name = state.remove_food(index)?;
            Ok(RemoveFoodResponse {
                success: true,
                removed_index: index,
                removed_name,
                log_size: state.log.len(),
            })
        })
        .map_err(|e| e.to_string())
}

/// Remove every log entry
pub fn clear_food_log(session: &Session) -> Result<ClearFoodLogResponse, String> {
    session
        .with_state_mut(|state, _| {
            Ok(ClearFoodLogResponse {
                success: true,
                removed: state.clear_log(),
            })
        })
        .map_err(|e| e.to_string())
}

/// Logged entries in insertion order
pub fn get_food_log(session: &Session) -> Result<FoodLogResponse, String> {
    session
        .with_state(|state, catalog| {
            let entries: Vec<FoodLogEntry> = state
                .log
                .entries()
                .iter()
                .enumerate()
                .map(|(index, name)| FoodLogEntry {
                    index,
                    name: name.clone(),
                    calories: catalog.get(name).map(|item| item.calories),
                })
                .collect();
            let count = entries.len();

            Ok(FoodLogResponse { entries, count })
        })
        .map_err(|e| e.to_string())
}

/// Nutrition totals for the log, with Over/Under status
pub fn get_totals(session: &Session) -> Result<TotalsResponse, String> {
    session
        .with_state(|state, catalog| {
            let totals = state.totals(catalog)?;
            let status = state.calorie_status(catalog)?;

            Ok(TotalsResponse {
                totals,
                threshold: state.threshold.kcal(),
                status,
                entry_count: state.log.len(),
            })
        })
        .map_err(|e| e.to_string())
}
