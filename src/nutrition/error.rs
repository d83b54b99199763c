//! Calculation errors

use thiserror::Error;

/// Hard failures from the calculation core.
///
/// Incomplete input (missing profile fields, unbalanced split, unset
/// threshold) is not an error; those calculations return `None`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NutritionError {
    #[error("Food '{name}' at log index {index} is not in the catalog")]
    MissingCatalogEntry { name: String, index: usize },
}

pub type NutritionResult<T> = Result<T, NutritionError>;
