use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::catalog::Fixture;
use crate::error::LumenError;

/// One catalog fixture sized to cover a lumen requirement.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FixtureSuggestion {
    #[serde(flatten)]
    pub fixture: Fixture,
    pub quantity: u64,
    pub total_lumens: u64,
    pub total_cost: f64,
    /// Lumens per currency unit for a single fixture. `None` when the fixture
    /// is free.
    pub efficiency: Option<f64>,
}

/// Rounding rule applied to the raw fixture count.
pub trait QuantityPolicy {
    /// Final quantity for a raw count of `ceil(lumens / fixture.lumens)`,
    /// `None` if it cannot be represented.
    fn adjust(&self, raw_quantity: u64) -> Option<u64>;
}

/// Counts above one are bumped to the next even number; a single unit stays single.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub struct EvenAboveOne;

impl QuantityPolicy for EvenAboveOne {
    fn adjust(&self, raw_quantity: u64) -> Option<u64> {
        if raw_quantity > 1 && raw_quantity % 2 != 0 {
            raw_quantity.checked_add(1)
        } else {
            Some(raw_quantity)
        }
    }
}

/// Smallest fixture count whose combined output reaches `total_lumens`.
pub fn raw_quantity(total_lumens: u64, fixture: &Fixture) -> u64 {
    total_lumens.div_ceil(u64::from(fixture.lumens))
}

/// Lumens per currency unit of one fixture, undefined for zero price.
pub fn efficiency(fixture: &Fixture) -> Option<f64> {
    if fixture.price > 0.0 {
        Some(f64::from(fixture.lumens) / fixture.price)
    } else {
        None
    }
}

pub fn suggest<P: QuantityPolicy>(
    total_lumens: u64,
    fixture: &Fixture,
    policy: &P,
) -> Result<FixtureSuggestion, LumenError> {
    let overflow = || LumenError::QuantityOverflow(fixture.id);
    let raw = raw_quantity(total_lumens, fixture);
    let quantity = policy.adjust(raw).ok_or_else(overflow)?;
    let total_lumens_provided = quantity
        .checked_mul(u64::from(fixture.lumens))
        .ok_or_else(overflow)?;
    let efficiency = efficiency(fixture);
    if efficiency.is_none() {
        warn!("fixture {} ({}) has zero price", fixture.id, fixture.name);
    }
    debug!(
        "fixture {}: raw {} -> {} units for {} lm",
        fixture.id, raw, quantity, total_lumens
    );

    Ok(FixtureSuggestion {
        fixture: fixture.clone(),
        quantity,
        total_lumens: total_lumens_provided,
        total_cost: quantity as f64 * fixture.price,
        efficiency,
    })
}

/// Sizes every fixture against the requirement under `policy` and sorts the
/// result by total cost. Equal costs keep catalog order. Fails as a whole if
/// any fixture's quantity overflows.
pub fn recommend_with<P: QuantityPolicy>(
    total_lumens: u64,
    catalog: &[Fixture],
    policy: &P,
) -> Result<Vec<FixtureSuggestion>, LumenError> {
    let mut suggestions = catalog
        .iter()
        .map(|f| suggest(total_lumens, f, policy))
        .collect::<Result<Vec<_>, _>>()?;
    suggestions.sort_by(|a, b| a.total_cost.total_cmp(&b.total_cost));
    Ok(suggestions)
}

/// Cost-ranked suggestions using the even-quantity rule.
pub fn recommend(
    total_lumens: u64,
    catalog: &[Fixture],
) -> Result<Vec<FixtureSuggestion>, LumenError> {
    recommend_with(total_lumens, catalog, &EvenAboveOne)
}

/// The cheapest option of a ranked list.
pub fn best_value(suggestions: &[FixtureSuggestion]) -> Option<&FixtureSuggestion> {
    suggestions.first()
}
