//! Model validation errors

use thiserror::Error;

/// Errors raised while building or parsing model values
#[derive(Debug, Error)]
pub enum ModelError {
    #[error("Food '{name}' has an invalid {field} value: {value}")]
    NegativeNutrient {
        name: String,
        field: &'static str,
        value: f64,
    },

    #[error("Food '{0}' is listed more than once")]
    DuplicateFood(String),

    #[error("Unknown activity factor: {0} (expected 1.2, 1.375, 1.55 or 1.725)")]
    UnknownActivityFactor(f64),

    #[error("Unknown activity level: '{0}'")]
    UnknownActivityLabel(String),

    #[error("Catalog JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type ModelResult<T> = Result<T, ModelError>;
