//! End-to-end scoring scenarios for representative formulations.

use formulation_optimizer::domain::{
    score_formulation, FormulationScores, Indicator, IngredientRatios, ScoreKind,
};

const EPSILON: f64 = 1e-9;

fn assert_close(actual: f64, expected: f64, what: &str) {
    assert!(
        (actual - expected).abs() < EPSILON,
        "{what}: expected {expected}, got {actual}"
    );
}

fn indicators(scores: &FormulationScores) -> Vec<Indicator> {
    ScoreKind::ALL
        .into_iter()
        .map(|kind| scores.indicator(kind))
        .collect()
}

#[test]
fn dashboard_start_position() {
    let ratios = IngredientRatios {
        shea: 10.0,
        squalane: 4.0,
        lc: 3.0,
        gum: 0.6,
        glda: 0.3,
        preservative: 1.0,
    };
    let scores = score_formulation(&ratios);

    assert_close(scores.total, 18.9, "total");
    assert_close(scores.sensory, 2.42, "sensory");
    assert_close(scores.sustainability, 0.29, "sustainability");
    assert_close(scores.stability, 0.74, "stability");
    assert_close(scores.cost, 2.62, "cost");
    assert_eq!(indicators(&scores), vec![Indicator::Low; 4]);
}

#[test]
fn every_slider_at_maximum() {
    let scores = score_formulation(&IngredientRatios::at_maximum());

    assert_close(scores.total, 55.0, "total");
    assert_close(scores.sensory, 8.9, "sensory");
    assert_close(scores.sustainability, 1.4, "sustainability");
    assert_close(scores.stability, 3.3, "stability");
    assert_close(scores.cost, 9.4, "cost");
    assert_eq!(
        indicators(&scores),
        vec![
            Indicator::High,
            Indicator::Low,
            Indicator::Low,
            Indicator::High
        ]
    );
}

#[test]
fn empty_chassis_scores_zero() {
    let scores = score_formulation(&IngredientRatios::zero());

    assert_eq!(scores.total, 0.0);
    for kind in ScoreKind::ALL {
        assert_eq!(scores.get(kind), 0.0, "{kind:?}");
    }
    assert_eq!(indicators(&scores), vec![Indicator::Low; 4]);
}

#[test]
fn shea_only_floors_negative_scores_at_zero() {
    let ratios = IngredientRatios {
        shea: 25.0,
        ..IngredientRatios::zero()
    };
    let scores = score_formulation(&ratios);

    assert_eq!(scores.total, 25.0);
    assert_eq!(scores.sensory, 0.0);
    assert_eq!(scores.sustainability, 0.0);
    assert_eq!(scores.stability, 0.0);
    assert_eq!(scores.cost, 0.0);
    assert_eq!(indicators(&scores), vec![Indicator::Low; 4]);
}

#[test]
fn total_is_not_clamped_or_normalised() {
    let ratios = IngredientRatios {
        shea: 90.0,
        squalane: 60.0,
        ..IngredientRatios::zero()
    };
    let scores = score_formulation(&ratios);

    assert_eq!(scores.total, 150.0);
    assert_eq!(scores.sensory, 10.0);
}

#[test]
fn indicator_boundaries() {
    assert_eq!(Indicator::from_score(4.0), Indicator::Medium);
    assert_eq!(Indicator::from_score(7.0), Indicator::High);
    assert_eq!(Indicator::from_score(0.0).to_string(), "low");
}
