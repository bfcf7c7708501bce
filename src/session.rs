use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::config::Lighting;
use crate::engine::{best_value, recommend, FixtureSuggestion};
use crate::error::LumenError;
use crate::report;
use crate::resolver::{CalculationInput, CalculationResult};

/// A requirement together with the suggestions computed from it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Calculation {
    pub input: CalculationInput,
    pub result: CalculationResult,
    pub suggestions: Vec<FixtureSuggestion>,
}

impl Calculation {
    /// Runs the resolver and the engine for one room.
    pub fn run(input: &CalculationInput, lighting: &Lighting) -> Result<Self, LumenError> {
        let result = input.resolve(&lighting.rooms)?;
        let suggestions = recommend(result.total_lumens, lighting.catalog.fixtures())?;
        Ok(Calculation {
            input: input.clone(),
            result,
            suggestions,
        })
    }

    pub fn best_value(&self) -> Option<&FixtureSuggestion> {
        best_value(&self.suggestions)
    }

    pub fn to_json(&self) -> Result<String, LumenError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Keeps only the most recent calculation.
#[derive(Debug)]
pub struct Session<'a> {
    lighting: &'a Lighting,
    last: Option<Calculation>,
}

impl<'a> Session<'a> {
    pub fn new(lighting: &'a Lighting) -> Self {
        Session {
            lighting,
            last: None,
        }
    }

    /// Replaces the stored calculation. On error the previous one is kept.
    pub fn calculate(&mut self, input: &CalculationInput) -> Result<&Calculation, LumenError> {
        let calc = Calculation::run(input, self.lighting)?;
        Ok(&*self.last.insert(calc))
    }

    pub fn last(&self) -> Option<&Calculation> {
        self.last.as_ref()
    }

    pub fn reset(&mut self) {
        self.last = None;
    }

    /// Text report of the stored calculation, if any.
    pub fn report(&self, generated_at: NaiveDateTime) -> Option<String> {
        self.last
            .as_ref()
            .map(|calc| report::render(calc, &self.lighting.currency, generated_at))
    }
}
