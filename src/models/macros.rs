//! Macronutrient totals
//!
//! The four tracked values returned for every found food.

use serde::{Deserialize, Serialize};

/// Macronutrient amounts
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Macros {
    pub calories: f64, // kcal
    pub carbs: f64,    // grams
    pub fat: f64,      // grams
    pub protein: f64,  // grams
}

impl Macros {
    /// Create a new Macros with all zeros
    pub fn zero() -> Self {
        Self::default()
    }

    /// Scale every value by a multiplier
    pub fn scale(&self, multiplier: f64) -> Self {
        Self {
            calories: self.calories * multiplier,
            carbs: self.carbs * multiplier,
            fat: self.fat * multiplier,
            protein: self.protein * multiplier,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scale() {
        let base = Macros {
            calories: 100.0,
            carbs: 20.0,
            fat: 5.0,
            protein: 10.0,
        };
        let doubled = base.scale(2.0);
        assert_eq!(doubled.calories, 200.0);
        assert_eq!(doubled.carbs, 40.0);
        assert_eq!(doubled.fat, 10.0);
        assert_eq!(doubled.protein, 20.0);
        assert_eq!(base.scale(0.0), Macros::zero());
    }
}
