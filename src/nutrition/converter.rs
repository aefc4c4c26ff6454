//! Volume to weight to macro conversion
//!
//! A cup volume becomes grams through the record's "1 cup" portion (or, for
//! eggs only, through the single-egg weight), and grams scale the per-100g
//! nutrient amounts.

use tracing::{debug, warn};

use super::error::MacroError;
use super::units::{
    MacroNutrient, CUP_PORTION_MARKER, EGGS_PER_CUP, EGG_PORTION, GRAMS_PER_NUTRIENT_BASIS,
};
use crate::models::{FoodRecord, MacroData, Macros, Nutrient};

/// Where a grams-per-cup figure came from
#[derive(Debug, Clone, PartialEq)]
pub enum ConversionSource {
    /// A portion whose description contains "1 cup"
    CupPortion { description: String },
    /// The "1 egg" portion times `EGGS_PER_CUP`
    EggCount { egg_grams: f64 },
}

/// A resolved grams-per-cup conversion
#[derive(Debug, Clone, PartialEq)]
pub struct CupConversion {
    pub grams_per_cup: f64,
    pub source: ConversionSource,
}

/// Determine grams per cup for a record.
///
/// The first portion containing "1 cup" (case-sensitive) wins. When there is
/// none and the label is "egg", a portion described exactly as "1 egg" is
/// scaled up to a cup.
pub fn resolve_cup_grams(record: &FoodRecord, object_name: &str) -> Option<CupConversion> {
    for portion in &record.food_portions {
        debug!(
            food = object_name,
            portion = %portion.portion_description,
            grams = portion.gram_weight,
            "Available portion"
        );
    }

    if let Some(portion) = record
        .food_portions
        .iter()
        .find(|p| p.portion_description.contains(CUP_PORTION_MARKER))
    {
        debug!(
            food = object_name,
            portion = %portion.portion_description,
            grams = portion.gram_weight,
            "Found cup measurement"
        );
        return Some(CupConversion {
            grams_per_cup: portion.gram_weight,
            source: ConversionSource::CupPortion {
                description: portion.portion_description.clone(),
            },
        });
    }

    if object_name != "egg" {
        return None;
    }

    record
        .food_portions
        .iter()
        .find(|p| p.portion_description == EGG_PORTION)
        .map(|portion| {
            debug!(egg_grams = portion.gram_weight, "Using egg count for cup weight");
            CupConversion {
                grams_per_cup: portion.gram_weight * EGGS_PER_CUP,
                source: ConversionSource::EggCount {
                    egg_grams: portion.gram_weight,
                },
            }
        })
}

/// Scale per-100g nutrient amounts to `grams`.
///
/// Untracked codes are ignored and tracked codes that are absent stay zero.
pub fn scale_nutrients(nutrients: &[Nutrient], grams: f64) -> Macros {
    let mut per_basis = Macros::zero();

    for nutrient in nutrients {
        match MacroNutrient::from_code(nutrient.code()) {
            Some(MacroNutrient::Energy) => per_basis.calories = nutrient.amount,
            Some(MacroNutrient::Protein) => per_basis.protein = nutrient.amount,
            Some(MacroNutrient::Fat) => per_basis.fat = nutrient.amount,
            Some(MacroNutrient::Carbohydrate) => per_basis.carbs = nutrient.amount,
            None => {}
        }
    }

    per_basis.scale(grams / GRAMS_PER_NUTRIENT_BASIS)
}

/// Compute weight and macros for `volume_cups` of a record
pub fn compute(
    record: &FoodRecord,
    object_name: &str,
    volume_cups: f64,
) -> Result<MacroData, MacroError> {
    let conversion = resolve_cup_grams(record, object_name)
        .ok_or_else(|| MacroError::NoConversionAvailable(object_name.to_string()))?;

    let calculated_grams = volume_cups * conversion.grams_per_cup;
    let macros = scale_nutrients(&record.food_nutrients, calculated_grams);

    Ok(MacroData::found(
        object_name,
        volume_cups,
        calculated_grams,
        macros,
    ))
}

/// Like [`compute`], but a missing conversion is logged and becomes a
/// `found: false` result
pub fn compute_or_missing(record: &FoodRecord, object_name: &str, volume_cups: f64) -> MacroData {
    compute(record, object_name, volume_cups).unwrap_or_else(|e| {
        warn!(food = object_name, kind = e.kind(), error = %e, "Could not calculate macros");
        MacroData::missing(object_name, volume_cups)
    })
}
