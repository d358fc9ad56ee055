//! Scoring model for the moisturizer chassis lives here.

pub mod app_state;
pub mod entities;
pub mod evaluation;

pub use app_state::{parse_ratio, AppState, RatioInputError};
pub use entities::{Ingredient, IngredientRatios};
pub use evaluation::{
    clamp_score, format_total, score_formulation, FormulationScores, Indicator, ScoreCard,
    ScoreKind, SCORE_MAX, SCORE_MIN,
};
