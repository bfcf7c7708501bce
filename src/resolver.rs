use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::error::LumenError;
use crate::lux::{RoomLuxTable, CUSTOM_ROOM};
use crate::units::{area_from_dimensions, UnitSystem};

/// Validated room description handed to the calculator.
///
/// Dimensions are expected positive and finite; `custom_lux` is only read when
/// `room_type` is "Custom" and should lie in 50..=1000 (see [`crate::guard`]).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalculationInput {
    pub length: f64,
    pub width: f64,
    pub unit: UnitSystem,
    pub room_type: String,
    pub custom_lux: Option<f64>,
    /// Dimensions exactly as typed, used when echoing them back.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub entered: Option<EnteredDimensions>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnteredDimensions {
    pub length: String,
    pub width: String,
}

impl CalculationInput {
    pub fn resolve(&self, table: &RoomLuxTable) -> Result<CalculationResult, LumenError> {
        resolve(
            self.length,
            self.width,
            self.unit,
            &self.room_type,
            self.custom_lux,
            table,
        )
    }

    pub fn is_custom(&self) -> bool {
        self.room_type == CUSTOM_ROOM
    }

    /// Length and width for display: the typed text when known, else the numbers.
    pub fn dimension_text(&self) -> (String, String) {
        match &self.entered {
            Some(e) => (e.length.clone(), e.width.clone()),
            None => (self.length.to_string(), self.width.to_string()),
        }
    }
}

/// Area and lumen requirement for one room.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CalculationResult {
    pub area_sq_ft: f64,
    pub area_sq_m: f64,
    pub required_lux: f64,
    pub total_lumens: u64,
}

/// Total lumens for an area and illuminance, rounded to nearest with ties away
/// from zero. Fails when the product does not fit in a `u64`.
pub fn required_lumens(area_sq_m: f64, lux: f64) -> Result<u64, LumenError> {
    let lumens = (area_sq_m * lux).round();
    // `u64::MAX as f64` is 2^64, one past the largest representable value.
    if !lumens.is_finite() || lumens < 0.0 || lumens >= u64::MAX as f64 {
        return Err(LumenError::RequirementOutOfRange(lumens));
    }
    Ok(lumens as u64)
}

/// Resolves area in both unit systems and the lumen requirement of a room.
///
/// A "Custom" room takes `custom_lux` and never reads the table. Any other room
/// type must be present in `table`.
pub fn resolve(
    length: f64,
    width: f64,
    unit: UnitSystem,
    room_type: &str,
    custom_lux: Option<f64>,
    table: &RoomLuxTable,
) -> Result<CalculationResult, LumenError> {
    let required_lux = if room_type == CUSTOM_ROOM {
        custom_lux.ok_or(LumenError::MissingCustomLux)?
    } else {
        table
            .lookup(room_type)
            .map(f64::from)
            .ok_or_else(|| LumenError::UnknownRoomType(room_type.to_string()))?
    };

    let (area_sq_ft, area_sq_m) = area_from_dimensions(length, width, unit);
    let total_lumens = required_lumens(area_sq_m, required_lux)?;

    debug!(
        "resolved {room_type}: {area_sq_m:.4} sq m at {required_lux} lux -> {total_lumens} lm"
    );
    if total_lumens == 0 {
        warn!("room {room_type} requires 0 lumens ({area_sq_m} sq m at {required_lux} lux)");
    }

    Ok(CalculationResult {
        area_sq_ft,
        area_sq_m,
        required_lux,
        total_lumens,
    })
}
