use std::fmt;

use serde::Serialize;

use super::entities::IngredientRatios;

pub const SCORE_MIN: f64 = 0.0;
pub const SCORE_MAX: f64 = 10.0;

const HIGH_THRESHOLD: f64 = 7.0;
const MEDIUM_THRESHOLD: f64 = 4.0;

/// Saturates a raw score to `[0, 10]`.
pub fn clamp_score(raw: f64) -> f64 {
    SCORE_MIN.max(SCORE_MAX.min(raw))
}

/// Predicted properties of a formulation, recomputed from scratch per call.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct FormulationScores {
    pub total: f64,
    pub sensory: f64,
    pub sustainability: f64,
    pub stability: f64,
    pub cost: f64,
}

pub fn score_formulation(ratios: &IngredientRatios) -> FormulationScores {
    let IngredientRatios {
        shea,
        squalane,
        lc,
        gum,
        glda,
        preservative,
    } = *ratios;

    // Squalane drives slip, LC adds creaminess, gums add tack.
    let sensory = 0.5 * squalane + 0.2 * lc - 0.3 * gum;
    let sustainability = 0.3 * lc + 0.3 * glda + 0.3 * preservative - 0.1 * shea;
    // Heavy oils destabilize the lamellar LC network.
    let stability = 0.5 * lc + 0.4 * gum - 0.1 * shea;
    let cost = 0.4 * squalane + 0.3 * lc + 0.2 * gum;

    FormulationScores {
        total: ratios.total(),
        sensory: clamp_score(sensory),
        sustainability: clamp_score(sustainability),
        stability: clamp_score(stability),
        cost: clamp_score(cost),
    }
}

impl FormulationScores {
    pub fn get(&self, kind: ScoreKind) -> f64 {
        match kind {
            ScoreKind::Sensory => self.sensory,
            ScoreKind::Sustainability => self.sustainability,
            ScoreKind::Stability => self.stability,
            ScoreKind::Cost => self.cost,
        }
    }

    pub fn indicator(&self, kind: ScoreKind) -> Indicator {
        Indicator::from_score(self.get(kind))
    }

    pub fn cards(&self) -> Vec<ScoreCard> {
        ScoreKind::ALL
            .into_iter()
            .map(|kind| ScoreCard {
                kind,
                value: self.get(kind),
                indicator: self.indicator(kind),
            })
            .collect()
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub enum ScoreKind {
    Sensory,
    Sustainability,
    Stability,
    Cost,
}

impl ScoreKind {
    pub const ALL: [ScoreKind; 4] = [
        ScoreKind::Sensory,
        ScoreKind::Sustainability,
        ScoreKind::Stability,
        ScoreKind::Cost,
    ];

    pub fn title(&self) -> &'static str {
        match self {
            ScoreKind::Sensory => "Sensory Slip Score",
            ScoreKind::Sustainability => "Sustainability Score",
            ScoreKind::Stability => "Predicted Stability",
            ScoreKind::Cost => "Cost Impact",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            ScoreKind::Sensory => "✨",
            ScoreKind::Sustainability => "🌱",
            ScoreKind::Stability => "🧪",
            ScoreKind::Cost => "💰",
        }
    }

    /// What moves this score, as shown on the about page.
    pub fn drivers(&self) -> &'static [&'static str] {
        match self {
            ScoreKind::Sensory => &[
                "Squalane contributes strong slip",
                "Gums reduce slip through tackiness",
                "LC emulsifiers add some creaminess",
            ],
            ScoreKind::Sustainability => &[
                "PEG-free LC emulsifiers",
                "GLDA improves biodegradability",
                "Natural preservatives reduce environmental persistence",
                "Shea butter carries a moderate sustainability impact",
            ],
            ScoreKind::Stability => &[
                "LC emulsifiers and gums provide lamellar structure",
                "Shea butter destabilizes at high concentrations",
            ],
            ScoreKind::Cost => &[
                "Squalane and LC emulsifiers are high-cost ingredients",
                "Gum blends moderately increase cost",
            ],
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct ScoreCard {
    pub kind: ScoreKind,
    pub value: f64,
    pub indicator: Indicator,
}

impl ScoreCard {
    pub fn display_value(&self) -> String {
        format!("{:.1} / 10", self.value)
    }
}

/// Qualitative band of a score. Lower bounds are inclusive.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Indicator {
    High,
    Medium,
    Low,
}

impl Indicator {
    pub fn from_score(score: f64) -> Self {
        if score >= HIGH_THRESHOLD {
            Indicator::High
        } else if score >= MEDIUM_THRESHOLD {
            Indicator::Medium
        } else {
            Indicator::Low
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Indicator::High => "high",
            Indicator::Medium => "medium",
            Indicator::Low => "low",
        }
    }
}

impl fmt::Display for Indicator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

pub fn format_total(total: f64) -> String {
    format!("{total:.1}%")
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn clamp_saturates_both_ends() {
        assert_eq!(clamp_score(-2.5), 0.0);
        assert_eq!(clamp_score(12.0), 10.0);
        assert_eq!(clamp_score(4.2), 4.2);
        assert_eq!(clamp_score(0.0), 0.0);
        assert_eq!(clamp_score(10.0), 10.0);
    }

    #[test]
    fn indicator_boundaries_are_inclusive_below() {
        assert_eq!(Indicator::from_score(7.0), Indicator::High);
        assert_eq!(Indicator::from_score(6.999), Indicator::Medium);
        assert_eq!(Indicator::from_score(4.0), Indicator::Medium);
        assert_eq!(Indicator::from_score(3.999), Indicator::Low);
        assert_eq!(Indicator::from_score(0.0), Indicator::Low);
        assert_eq!(Indicator::from_score(10.0), Indicator::High);
    }

    #[test]
    fn default_formulation_scores_low_everywhere() {
        let scores = score_formulation(&IngredientRatios::default());
        assert!(close(scores.total, 18.9));
        assert!(close(scores.sensory, 2.42));
        assert!(close(scores.sustainability, 0.29));
        assert!(close(scores.stability, 0.74));
        assert!(close(scores.cost, 2.62));
        assert!(scores.cards().iter().all(|card| card.indicator == Indicator::Low));
    }

    #[test]
    fn cards_follow_display_order() {
        let cards = score_formulation(&IngredientRatios::at_maximum()).cards();
        let kinds: Vec<_> = cards.iter().map(|card| card.kind).collect();
        assert_eq!(kinds, ScoreKind::ALL.to_vec());
        assert_eq!(cards[0].display_value(), "8.9 / 10");
        assert_eq!(cards[3].display_value(), "9.4 / 10");
    }

    #[test]
    fn raw_scores_above_ten_saturate() {
        let ratios = IngredientRatios {
            squalane: 40.0,
            ..IngredientRatios::zero()
        };
        let scores = score_formulation(&ratios);
        assert_eq!(scores.sensory, 10.0);
        assert_eq!(scores.cost, 10.0);
        assert_eq!(scores.indicator(ScoreKind::Cost), Indicator::High);
    }

    #[test]
    fn total_format_has_one_decimal() {
        assert_eq!(format_total(18.9), "18.9%");
        assert_eq!(format_total(0.0), "0.0%");
    }

    proptest! {
        #[test]
        fn prop_scores_stay_in_range(
            shea in -100.0f64..100.0,
            squalane in -100.0f64..100.0,
            lc in -100.0f64..100.0,
            gum in -100.0f64..100.0,
            glda in -100.0f64..100.0,
            preservative in -100.0f64..100.0,
        ) {
            let ratios = IngredientRatios { shea, squalane, lc, gum, glda, preservative };
            let scores = score_formulation(&ratios);
            for kind in ScoreKind::ALL {
                let value = scores.get(kind);
                prop_assert!((SCORE_MIN..=SCORE_MAX).contains(&value));
            }
            prop_assert_eq!(scores.total, shea + squalane + lc + gum + glda + preservative);
        }

        #[test]
        fn prop_indicator_matches_thresholds(score in -5.0f64..15.0) {
            let expected = if score >= 7.0 {
                Indicator::High
            } else if score >= 4.0 {
                Indicator::Medium
            } else {
                Indicator::Low
            };
            prop_assert_eq!(Indicator::from_score(score), expected);
        }
    }
}
