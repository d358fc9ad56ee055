use super::entities::{Ingredient, IngredientRatios};
use super::evaluation::{score_formulation, FormulationScores};

/// Dashboard state: the ratios on the sliders and the ratios a reset returns to.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AppState {
    pub ratios: IngredientRatios,
    pub initial: IngredientRatios,
}

impl AppState {
    pub fn with_initial(initial: IngredientRatios) -> Self {
        Self {
            ratios: initial,
            initial,
        }
    }

    pub fn scores(&self) -> FormulationScores {
        score_formulation(&self.ratios)
    }

    pub fn set_ratio(&mut self, ingredient: Ingredient, value: f64) {
        self.ratios.set(ingredient, value);
    }

    /// Applies raw slider input; invalid input leaves the state untouched.
    pub fn apply_input(&mut self, ingredient: Ingredient, raw: &str) -> Result<f64, RatioInputError> {
        let value = parse_ratio(raw)?;
        self.set_ratio(ingredient, value);
        Ok(value)
    }

    pub fn reset(&mut self) {
        self.ratios = self.initial;
    }

    pub fn is_modified(&self) -> bool {
        self.ratios != self.initial
    }
}

#[derive(Debug, PartialEq, thiserror::Error)]
pub enum RatioInputError {
    #[error("'{0}' is not a number")]
    NotANumber(String),
    #[error("ratio must be a finite number")]
    NotFinite,
}

pub fn parse_ratio(raw: &str) -> Result<f64, RatioInputError> {
    let trimmed = raw.trim();
    let value: f64 = trimmed
        .parse()
        .map_err(|_| RatioInputError::NotANumber(trimmed.to_string()))?;
    if value.is_finite() {
        Ok(value)
    } else {
        Err(RatioInputError::NotFinite)
    }
}
