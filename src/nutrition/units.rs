//! Nutrient codes and portion conversion constants

/// Portions whose description contains this give grams per cup
pub const CUP_PORTION_MARKER: &str = "1 cup";

/// Portion description for a single egg
pub const EGG_PORTION: &str = "1 egg";

/// Large eggs per cup, used when an egg record has no cup portion
pub const EGGS_PER_CUP: f64 = 4.5;

/// Nutrient amounts in the catalog are per this many grams
pub const GRAMS_PER_NUTRIENT_BASIS: f64 = 100.0;

/// Nutrients carried into the macro result
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MacroNutrient {
    /// Energy in kcal
    Energy,
    Protein,
    /// Total lipid (fat)
    Fat,
    /// Carbohydrate, by difference
    Carbohydrate,
}

impl MacroNutrient {
    /// Map a nutrient code to the tracked nutrient, if any
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "208" => Some(MacroNutrient::Energy),
            "203" => Some(MacroNutrient::Protein),
            "204" => Some(MacroNutrient::Fat),
            "205" => Some(MacroNutrient::Carbohydrate),
            _ => None,
        }
    }
}
