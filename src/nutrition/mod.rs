//! Nutrition calculation module
//!
//! Maps recognized food labels to catalog records and converts cup volumes
//! into gram weights and macronutrient totals.

pub mod catalog;
pub mod converter;
pub mod error;
pub mod lookup;
pub mod units;

pub use catalog::{description_for, recognized_foods};
pub use converter::{
    compute, compute_or_missing, resolve_cup_grams, scale_nutrients, ConversionSource,
    CupConversion,
};
pub use error::MacroError;
pub use lookup::FoodLookup;
pub use units::{MacroNutrient, CUP_PORTION_MARKER, EGGS_PER_CUP, EGG_PORTION};
