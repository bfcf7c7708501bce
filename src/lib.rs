#![forbid(unsafe_code)]

//! Room lighting calculator: lumen requirement from room size and type, and
//! cost-ranked fixture quantities that meet it.

pub mod catalog;
pub mod config;
pub mod engine;
pub mod error;
pub mod guard;
pub mod logging;
pub mod lux;
pub mod report;
pub mod resolver;
pub mod session;
pub mod units;

pub use catalog::{Fixture, FixtureCatalog};
pub use config::{Lighting, LumenConfig};
pub use engine::{
    best_value, recommend, recommend_with, EvenAboveOne, FixtureSuggestion, QuantityPolicy,
};
pub use error::LumenError;
pub use guard::{FieldErrors, FormInput, InputGuard};
pub use lux::{RoomLux, RoomLuxTable, CUSTOM_ROOM};
pub use resolver::{resolve, CalculationInput, CalculationResult, EnteredDimensions};
pub use session::{Calculation, Session};
pub use units::{UnitSystem, SQ_FT_TO_SQ_M};
