//! Macro calculation tool
//!
//! Runs lookup and conversion for every volume in a request.

use tracing::{info, info_span, warn};

use crate::models::{MacroData, MacroResponse, VolumeItem, VolumeRequest};
use crate::nutrition::{compute_or_missing, FoodLookup};

/// Process every volume in request order.
///
/// Items are independent: a failed item becomes `found: false` and the rest
/// of the batch is still processed.
pub fn calculate_macros(lookup: &FoodLookup, request: &VolumeRequest) -> MacroResponse {
    let _span = info_span!(
        "calculate_macros",
        frame_id = request.data.frame_id.as_deref().unwrap_or(""),
        items = request.data.volumes.len()
    )
    .entered();

    let data: Vec<MacroData> = request
        .data
        .volumes
        .iter()
        .map(|item| process_food_volume(lookup, item))
        .collect();

    let found = data.iter().filter(|d| d.found).count();
    info!(found, missing = data.len() - found, "Calculated macros");

    MacroResponse { data }
}

/// Convert a single volume, collapsing any failure to a `found: false` result
pub fn process_food_volume(lookup: &FoodLookup, item: &VolumeItem) -> MacroData {
    if item.volume_cups < 0.0 {
        warn!(
            food = %item.object_name,
            volume_cups = item.volume_cups,
            "Negative volume, scaling anyway"
        );
    }

    match lookup.lookup(&item.object_name) {
        Ok(record) => compute_or_missing(&record, &item.object_name, item.volume_cups),
        Err(e) => {
            warn!(
                food = %item.object_name,
                kind = e.kind(),
                error = %e,
                "Could not calculate macros"
            );
            MacroData::missing(item.object_name.clone(), item.volume_cups)
        }
    }
}
