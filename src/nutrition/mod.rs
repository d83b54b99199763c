//! Nutrition calculation module
//!
//! Pure calculations: energy estimate, food log totals and macro targets.

pub mod aggregate;
pub mod allocate;
pub mod energy;
mod error;
pub mod units;

pub use aggregate::aggregate;
pub use allocate::{allocate, allocation_issue, calorie_status, AllocationIssue};
pub use energy::{basal_metabolic_rate, estimate_daily_calories};
pub use error::{NutritionError, NutritionResult};
pub use units::{Macro, KCAL_PER_GRAM_CARBS, KCAL_PER_GRAM_FAT, KCAL_PER_GRAM_PROTEIN};
