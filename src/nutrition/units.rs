//! Energy constants
//!
//! Fixed coefficients for the BMR estimate and Atwater energy densities.

// ============================================================================
// BMR Coefficients
// ============================================================================

/// kcal per kilogram of body weight
pub const BMR_PER_KG: f64 = 10.0;
/// kcal per centimeter of height
pub const BMR_PER_CM: f64 = 6.25;
/// kcal subtracted per year of age
pub const BMR_PER_YEAR: f64 = 5.0;
/// Constant offset (no sex term)
pub const BMR_OFFSET: f64 = 5.0;

// ============================================================================
// Atwater Factors (kcal per gram)
// ============================================================================

pub const KCAL_PER_GRAM_PROTEIN: f64 = 4.0;
pub const KCAL_PER_GRAM_CARBS: f64 = 4.0;
pub const KCAL_PER_GRAM_FAT: f64 = 9.0;

/// One of the three tracked macronutrients
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Macro {
    Protein,
    Carbs,
    Fat,
}

impl Macro {
    pub fn kcal_per_gram(&self) -> f64 {
        match self {
            Macro::Protein => KCAL_PER_GRAM_PROTEIN,
            Macro::Carbs => KCAL_PER_GRAM_CARBS,
            Macro::Fat => KCAL_PER_GRAM_FAT,
        }
    }
}
