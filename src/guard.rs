//! Field-level validation of raw form values before they reach the calculator.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::lux::{RoomLuxTable, CUSTOM_ROOM};
use crate::resolver::{CalculationInput, EnteredDimensions};
use crate::units::UnitSystem;

pub const CUSTOM_LUX_MIN: f64 = 50.0;
pub const CUSTOM_LUX_MAX: f64 = 1000.0;

const MSG_REQUIRED: &str = "Required.";
const MSG_POSITIVE: &str = "Must be a positive number.";
const MSG_LUX_RANGE: &str = "Must be 50-1000.";
const MSG_UNKNOWN_ROOM: &str = "Unknown room type.";

/// Raw, unparsed values as typed by a user.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FormInput {
    pub room_type: String,
    pub length: String,
    pub width: String,
    pub custom_lux: String,
    pub unit: UnitSystem,
}

/// Messages keyed by field name, in the order the fields were checked.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldErrors(pub Vec<(String, String)>);

impl FieldErrors {
    fn push(&mut self, field: &str, message: &str) {
        self.0.push((field.to_string(), message.to_string()));
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(f, _)| f == field)
            .map(|(_, m)| m.as_str())
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }
}

impl fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, (field, message)) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str("; ")?;
            }
            write!(f, "{field}: {message}")?;
        }
        Ok(())
    }
}

pub struct InputGuard;

impl InputGuard {
    /// Parses a strictly positive, finite number.
    pub fn positive_number(raw: &str) -> Option<f64> {
        raw.trim()
            .parse::<f64>()
            .ok()
            .filter(|v| v.is_finite() && *v > 0.0)
    }

    pub fn custom_lux(raw: &str) -> Option<f64> {
        raw.trim()
            .parse::<f64>()
            .ok()
            .filter(|v| (CUSTOM_LUX_MIN..=CUSTOM_LUX_MAX).contains(v))
    }

    /// Checks every field and returns either a calculator input or all errors at once.
    pub fn validate(
        form: &FormInput,
        table: &RoomLuxTable,
    ) -> Result<CalculationInput, FieldErrors> {
        let mut errors = FieldErrors::default();

        let room_type = form.room_type.trim();
        if room_type.is_empty() {
            errors.push("room_type", MSG_REQUIRED);
        } else if room_type != CUSTOM_ROOM && !table.contains(room_type) {
            errors.push("room_type", MSG_UNKNOWN_ROOM);
        }

        let length = Self::dimension(&form.length, "length", &mut errors);
        let width = Self::dimension(&form.width, "width", &mut errors);

        let mut custom_lux = None;
        if room_type == CUSTOM_ROOM {
            if form.custom_lux.trim().is_empty() {
                errors.push("custom_lux", MSG_REQUIRED);
            } else {
                custom_lux = Self::custom_lux(&form.custom_lux);
                if custom_lux.is_none() {
                    errors.push("custom_lux", MSG_LUX_RANGE);
                }
            }
        }

        match (length, width) {
            (Some(length), Some(width)) if errors.is_empty() => Ok(CalculationInput {
                length,
                width,
                unit: form.unit,
                room_type: room_type.to_string(),
                custom_lux,
                entered: Some(EnteredDimensions {
                    length: form.length.trim().to_string(),
                    width: form.width.trim().to_string(),
                }),
            }),
            _ => Err(errors),
        }
    }

    fn dimension(raw: &str, field: &str, errors: &mut FieldErrors) -> Option<f64> {
        if raw.trim().is_empty() {
            errors.push(field, MSG_REQUIRED);
            return None;
        }
        let value = Self::positive_number(raw);
        if value.is_none() {
            errors.push(field, MSG_POSITIVE);
        }
        value
    }
}
