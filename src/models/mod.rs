//! Data models
//!
//! Food catalog records and the request/response shapes of the macro calculator.

mod food_record;
mod macros;
mod volume;

pub use food_record::{parse_food_export, FoodRecord, Nutrient, NutrientInfo, Portion};
pub use macros::Macros;
pub use volume::{MacroData, MacroResponse, VolumeItem, VolumeRequest, VolumeRequestData};
