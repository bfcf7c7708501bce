use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::catalog::{default_fixtures, Fixture, FixtureCatalog};
use crate::error::LumenError;
use crate::lux::{default_rooms, RoomLux, RoomLuxTable};

fn default_currency() -> String {
    "₹".to_string()
}

/// On-disk configuration. Every section is optional and falls back to the
/// built-in tables.
///
/// ```toml
/// currency = "$"
///
/// [[rooms]]
/// name = "Garage"
/// lux = 100
///
/// [[fixtures]]
/// id = 1
/// name = "Shop Light"
/// lumens = 4000
/// price = 30.0
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LumenConfig {
    #[serde(default = "default_currency")]
    pub currency: String,
    #[serde(default = "default_rooms")]
    pub rooms: Vec<RoomLux>,
    #[serde(default = "default_fixtures")]
    pub fixtures: Vec<Fixture>,
}

impl Default for LumenConfig {
    fn default() -> Self {
        LumenConfig {
            currency: default_currency(),
            rooms: default_rooms(),
            fixtures: default_fixtures(),
        }
    }
}

impl LumenConfig {
    pub fn from_toml_str(text: &str) -> Result<Self, LumenError> {
        let cfg: LumenConfig = toml::from_str(text)?;
        Ok(cfg)
    }

    pub fn load(path: &Path) -> Result<Self, LumenError> {
        let text = fs::read_to_string(path)?;
        let cfg = Self::from_toml_str(&text)?;
        info!(
            "loaded {} rooms and {} fixtures from {}",
            cfg.rooms.len(),
            cfg.fixtures.len(),
            path.display()
        );
        Ok(cfg)
    }

    /// Validates and freezes the tables for use by the calculator.
    pub fn build(self) -> Result<Lighting, LumenError> {
        Ok(Lighting {
            currency: self.currency,
            rooms: RoomLuxTable::new(self.rooms)?,
            catalog: FixtureCatalog::new(self.fixtures)?,
        })
    }
}

/// Validated, read-only tables shared by every calculation.
#[derive(Debug, Clone, PartialEq)]
pub struct Lighting {
    pub currency: String,
    pub rooms: RoomLuxTable,
    pub catalog: FixtureCatalog,
}

impl Default for Lighting {
    fn default() -> Self {
        Lighting {
            currency: default_currency(),
            rooms: RoomLuxTable::default(),
            catalog: FixtureCatalog::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_file_uses_defaults() {
        let cfg = LumenConfig::from_toml_str("").unwrap();
        assert_eq!(cfg, LumenConfig::default());
        assert_eq!(cfg.build().unwrap(), Lighting::default());
    }

    #[test]
    fn test_partial_override() {
        let text = r#"
currency = "$"

[[fixtures]]
id = 1
name = "Shop Light"
lumens = 4000
price = 30.0
"#;
        let lighting = LumenConfig::from_toml_str(text).unwrap().build().unwrap();
        assert_eq!(lighting.currency, "$");
        assert_eq!(lighting.catalog.len(), 1);
        assert_eq!(lighting.rooms.lookup("Kitchen"), Some(300));
    }

    #[test]
    fn test_invalid_catalog_rejected_on_build() {
        let text = r#"
[[fixtures]]
id = 1
name = "Broken"
lumens = 0
price = 10.0
"#;
        let err = LumenConfig::from_toml_str(text).unwrap().build().unwrap_err();
        assert!(matches!(err, LumenError::InvalidCatalog(_)));
    }

    #[test]
    fn test_malformed_toml() {
        let err = LumenConfig::from_toml_str("rooms = 3").unwrap_err();
        assert!(matches!(err, LumenError::Toml(_)));
    }

    #[test]
    fn test_missing_file() {
        let err = LumenConfig::load(Path::new("/nonexistent/lumenator.toml")).unwrap_err();
        assert!(matches!(err, LumenError::Io(_)));
    }
}
