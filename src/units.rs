use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Square metres in one square foot.
pub const SQ_FT_TO_SQ_M: f64 = 0.092903;

/// Unit system the room dimensions are entered in.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UnitSystem {
    #[default]
    Feet,
    Meters,
}

impl UnitSystem {
    /// Short suffix used next to dimensions ("ft" / "m").
    pub fn label(self) -> &'static str {
        match self {
            UnitSystem::Feet => "ft",
            UnitSystem::Meters => "m",
        }
    }
}

impl fmt::Display for UnitSystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UnitSystem::Feet => f.write_str("feet"),
            UnitSystem::Meters => f.write_str("meters"),
        }
    }
}

impl FromStr for UnitSystem {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "feet" | "foot" | "ft" => Ok(UnitSystem::Feet),
            "meters" | "metres" | "meter" | "metre" | "m" => Ok(UnitSystem::Meters),
            other => Err(format!("unknown unit system: {other}")),
        }
    }
}

pub fn sq_ft_to_sq_m(area_sq_ft: f64) -> f64 {
    area_sq_ft * SQ_FT_TO_SQ_M
}

pub fn sq_m_to_sq_ft(area_sq_m: f64) -> f64 {
    area_sq_m / SQ_FT_TO_SQ_M
}

/// Floor area in both unit systems, as `(sq_ft, sq_m)`.
///
/// The area in the input unit is the plain product of the dimensions; the
/// other one is derived through [`SQ_FT_TO_SQ_M`].
pub fn area_from_dimensions(length: f64, width: f64, unit: UnitSystem) -> (f64, f64) {
    match unit {
        UnitSystem::Feet => {
            let sq_ft = length * width;
            (sq_ft, sq_ft_to_sq_m(sq_ft))
        }
        UnitSystem::Meters => {
            let sq_m = length * width;
            (sq_m_to_sq_ft(sq_m), sq_m)
        }
    }
}
