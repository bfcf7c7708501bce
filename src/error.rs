use thiserror::Error;

use crate::guard::FieldErrors;

/// Errors raised while configuring or running a lighting calculation.
#[derive(Debug, Error)]
pub enum LumenError {
    #[error("room type not present in lux table: {0}")]
    UnknownRoomType(String),
    #[error("custom room type requires a lux value")]
    MissingCustomLux,
    #[error("invalid input: {0}")]
    InvalidInput(FieldErrors),
    #[error("lumen requirement out of range: {0}")]
    RequirementOutOfRange(f64),
    #[error("fixture {0} quantity overflows for the requested lumens")]
    QuantityOverflow(u32),
    #[error("invalid fixture catalog: {0}")]
    InvalidCatalog(String),
    #[error("invalid configuration: {0}")]
    Config(String),
    #[error("logging already initialised: {0}")]
    Logging(#[from] tracing_subscriber::util::TryInitError),
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
    #[error("toml error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}
