//! Data models
//!
//! Plain value types passed into the calculation core.

mod catalog;
mod error;
mod food_item;
mod food_log;
mod macro_split;
mod nutrition;
mod profile;

pub use catalog::FoodCatalog;
pub use error::{ModelError, ModelResult};
pub use food_item::FoodItem;
pub use food_log::FoodLog;
pub use macro_split::{CalorieStatus, CalorieThreshold, MacroGramTargets, MacroSplit};
pub use nutrition::NutrientTotals;
pub use profile::{ActivityLevel, UserProfile};
