//! Volume request and macro result shapes
//!
//! These are the JSON bodies exchanged on `POST /v1/calculate-macros`.

use serde::{Deserialize, Serialize};

use super::Macros;

/// Request envelope
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VolumeRequest {
    pub data: VolumeRequestData,
}

/// Volumes estimated for one captured frame
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct VolumeRequestData {
    #[serde(default)]
    pub frame_id: Option<String>,
    #[serde(default)]
    pub volumes: Vec<VolumeItem>,
}

/// One recognized food instance and its estimated volume
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VolumeItem {
    pub object_name: String,
    pub volume_cups: f64,
    /// Reported by the volume estimator; not used in the calculation
    #[serde(default)]
    pub uncertainty_cups: f64,
}

impl VolumeItem {
    pub fn new(object_name: impl Into<String>, volume_cups: f64) -> Self {
        Self {
            object_name: object_name.into(),
            volume_cups,
            uncertainty_cups: 0.0,
        }
    }
}

/// Result for one volume item.
///
/// `macros` and `calculated_weight` are only present when `found` is true.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MacroData {
    pub found: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub macros: Option<Macros>,
    pub requested_food: String,
    pub requested_volume: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub calculated_weight: Option<f64>,
}

impl MacroData {
    /// A result carrying only the echoed request
    pub fn missing(requested_food: impl Into<String>, requested_volume: f64) -> Self {
        Self {
            found: false,
            macros: None,
            requested_food: requested_food.into(),
            requested_volume,
            calculated_weight: None,
        }
    }

    pub fn found(
        requested_food: impl Into<String>,
        requested_volume: f64,
        calculated_weight: f64,
        macros: Macros,
    ) -> Self {
        Self {
            found: true,
            macros: Some(macros),
            requested_food: requested_food.into(),
            requested_volume,
            calculated_weight: Some(calculated_weight),
        }
    }
}

/// Response envelope, one entry per requested volume in request order
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MacroResponse {
    pub data: Vec<MacroData>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_request_parses_estimator_payload() {
        let body = json!({
            "data": {
                "frame_id": "frame-0042",
                "volumes": [
                    {"object_name": "rice", "volume_cups": 0.75, "uncertainty_cups": 0.1},
                    {"object_name": "egg", "volume_cups": 0.5}
                ]
            }
        });

        let request: VolumeRequest = serde_json::from_value(body).unwrap();
        assert_eq!(request.data.frame_id.as_deref(), Some("frame-0042"));
        assert_eq!(request.data.volumes.len(), 2);
        assert_eq!(request.data.volumes[0].uncertainty_cups, 0.1);
        assert_eq!(request.data.volumes[1], VolumeItem::new("egg", 0.5));
    }

    #[test]
    fn test_missing_result_omits_weight_and_macros() {
        let value = serde_json::to_value(MacroData::missing("tofu", 1.0)).unwrap();
        assert_eq!(
            value,
            json!({"found": false, "requested_food": "tofu", "requested_volume": 1.0})
        );
    }

    #[test]
    fn test_found_result_serializes_all_fields() {
        let macros = Macros {
            calories: 200.25,
            carbs: 0.0,
            fat: 0.0,
            protein: 0.0,
        };
        let value = serde_json::to_value(MacroData::found("banana", 1.5, 225.0, macros)).unwrap();
        assert_eq!(value["found"], json!(true));
        assert_eq!(value["calculated_weight"], json!(225.0));
        assert_eq!(value["macros"]["calories"], json!(200.25));
    }
}
