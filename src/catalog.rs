use serde::{Deserialize, Serialize};

use crate::error::LumenError;

/// A purchasable lighting unit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Fixture {
    pub id: u32,
    pub name: String,
    /// Light output of a single unit, in lumens.
    pub lumens: u32,
    /// Price of a single unit.
    pub price: f64,
}

impl Fixture {
    pub fn new(id: u32, name: &str, lumens: u32, price: f64) -> Self {
        Fixture {
            id,
            name: name.to_string(),
            lumens,
            price,
        }
    }
}

/// Ordered, validated fixture list. Order is the tie-break for equal costs.
#[derive(Debug, Clone, PartialEq)]
pub struct FixtureCatalog {
    fixtures: Vec<Fixture>,
}

impl FixtureCatalog {
    pub fn new(fixtures: Vec<Fixture>) -> Result<Self, LumenError> {
        for (i, f) in fixtures.iter().enumerate() {
            if f.id == 0 {
                return Err(LumenError::InvalidCatalog(format!(
                    "fixture {} must have a positive id",
                    f.name
                )));
            }
            if f.lumens == 0 {
                return Err(LumenError::InvalidCatalog(format!(
                    "fixture {} must have positive lumens",
                    f.id
                )));
            }
            if !f.price.is_finite() || f.price < 0.0 {
                return Err(LumenError::InvalidCatalog(format!(
                    "fixture {} has invalid price {}",
                    f.id, f.price
                )));
            }
            if fixtures[..i].iter().any(|other| other.id == f.id) {
                return Err(LumenError::InvalidCatalog(format!(
                    "duplicate fixture id {}",
                    f.id
                )));
            }
        }
        Ok(FixtureCatalog { fixtures })
    }

    pub fn fixtures(&self) -> &[Fixture] {
        &self.fixtures
    }

    pub fn get(&self, id: u32) -> Option<&Fixture> {
        self.fixtures.iter().find(|f| f.id == id)
    }

    pub fn len(&self) -> usize {
        self.fixtures.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fixtures.is_empty()
    }
}

/// Built-in catalog, prices in INR.
pub fn default_fixtures() -> Vec<Fixture> {
    vec![
        Fixture::new(1, "LED Bulb (9W)", 800, 150.0),
        Fixture::new(2, "LED Tube Light (20W)", 2000, 400.0),
        Fixture::new(3, "Recessed Downlight (12W)", 1100, 600.0),
        Fixture::new(4, "Panel Light (36W)", 3600, 1500.0),
        Fixture::new(5, "Smart Bulb (10W)", 850, 750.0),
        Fixture::new(6, "Decorative Chandelier Bulb (5W)", 450, 250.0),
    ]
}

impl Default for FixtureCatalog {
    fn default() -> Self {
        FixtureCatalog {
            fixtures: default_fixtures(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_catalog_is_valid() {
        let catalog = FixtureCatalog::new(default_fixtures()).unwrap();
        assert_eq!(catalog.len(), 6);
        assert_eq!(catalog.get(1).map(|f| f.lumens), Some(800));
        assert!(catalog.get(42).is_none());
    }

    #[test]
    fn test_catalog_rejects_invalid_entries() {
        let zero_lumens = vec![Fixture::new(1, "Dark", 0, 10.0)];
        assert!(matches!(
            FixtureCatalog::new(zero_lumens),
            Err(LumenError::InvalidCatalog(_))
        ));

        let negative_price = vec![Fixture::new(1, "Rebate", 100, -1.0)];
        assert!(FixtureCatalog::new(negative_price).is_err());

        let nan_price = vec![Fixture::new(1, "Odd", 100, f64::NAN)];
        assert!(FixtureCatalog::new(nan_price).is_err());

        let dup = vec![
            Fixture::new(3, "A", 100, 1.0),
            Fixture::new(3, "B", 200, 2.0),
        ];
        assert!(FixtureCatalog::new(dup).is_err());
    }

    #[test]
    fn test_zero_price_is_allowed() {
        let free = vec![Fixture::new(9, "Sample", 500, 0.0)];
        assert!(FixtureCatalog::new(free).is_ok());
    }
}
