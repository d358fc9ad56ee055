use serde::{Deserialize, Serialize};

/// One of the six adjustable ingredients of the moisturizer chassis.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Ingredient {
    Shea,
    Squalane,
    Lc,
    Gum,
    Glda,
    Preservative,
}

impl Ingredient {
    /// Slider order used throughout the dashboard.
    pub const ALL: [Ingredient; 6] = [
        Ingredient::Shea,
        Ingredient::Squalane,
        Ingredient::Lc,
        Ingredient::Gum,
        Ingredient::Glda,
        Ingredient::Preservative,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Ingredient::Shea => "Shea Butter",
            Ingredient::Squalane => "Squalane",
            Ingredient::Lc => "Liquid Crystal Emulsifier (Olivem-type)",
            Ingredient::Gum => "Xanthan + Sclerotium Gum Blend",
            Ingredient::Glda => "GLDA",
            Ingredient::Preservative => "Natural Preservative System",
        }
    }

    pub fn role(&self) -> &'static str {
        match self {
            Ingredient::Shea => "occlusive",
            Ingredient::Squalane => "emollient",
            Ingredient::Lc => "emulsifier",
            Ingredient::Gum => "thickener",
            Ingredient::Glda => "biodegradable chelator",
            Ingredient::Preservative => "preservative",
        }
    }

    /// Upper bound of the ingredient's slider, in percent.
    pub fn max(&self) -> f64 {
        match self {
            Ingredient::Shea => 25.0,
            Ingredient::Squalane => 15.0,
            Ingredient::Lc => 10.0,
            Ingredient::Gum => 2.0,
            Ingredient::Glda => 1.0,
            Ingredient::Preservative => 2.0,
        }
    }

    pub fn default_ratio(&self) -> f64 {
        match self {
            Ingredient::Shea => 10.0,
            Ingredient::Squalane => 4.0,
            Ingredient::Lc => 3.0,
            Ingredient::Gum => 0.6,
            Ingredient::Glda => 0.3,
            Ingredient::Preservative => 1.0,
        }
    }

    pub fn contains(&self, value: f64) -> bool {
        value.is_finite() && (0.0..=self.max()).contains(&value)
    }
}

/// Percentage-by-weight of each ingredient. Values are not required to sum to
/// any fixed total and are never clamped here.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct IngredientRatios {
    pub shea: f64,
    pub squalane: f64,
    pub lc: f64,
    pub gum: f64,
    pub glda: f64,
    #[serde(alias = "pres")]
    pub preservative: f64,
}

impl Default for IngredientRatios {
    fn default() -> Self {
        Self::from_fn(|ingredient| ingredient.default_ratio())
    }
}

impl IngredientRatios {
    pub fn zero() -> Self {
        Self::from_fn(|_| 0.0)
    }

    pub fn at_maximum() -> Self {
        Self::from_fn(|ingredient| ingredient.max())
    }

    pub fn from_fn(mut f: impl FnMut(Ingredient) -> f64) -> Self {
        Self {
            shea: f(Ingredient::Shea),
            squalane: f(Ingredient::Squalane),
            lc: f(Ingredient::Lc),
            gum: f(Ingredient::Gum),
            glda: f(Ingredient::Glda),
            preservative: f(Ingredient::Preservative),
        }
    }

    pub fn get(&self, ingredient: Ingredient) -> f64 {
        match ingredient {
            Ingredient::Shea => self.shea,
            Ingredient::Squalane => self.squalane,
            Ingredient::Lc => self.lc,
            Ingredient::Gum => self.gum,
            Ingredient::Glda => self.glda,
            Ingredient::Preservative => self.preservative,
        }
    }

    pub fn set(&mut self, ingredient: Ingredient, value: f64) {
        let slot = match ingredient {
            Ingredient::Shea => &mut self.shea,
            Ingredient::Squalane => &mut self.squalane,
            Ingredient::Lc => &mut self.lc,
            Ingredient::Gum => &mut self.gum,
            Ingredient::Glda => &mut self.glda,
            Ingredient::Preservative => &mut self.preservative,
        };
        *slot = value;
    }

    pub fn iter(&self) -> impl Iterator<Item = (Ingredient, f64)> + '_ {
        Ingredient::ALL
            .into_iter()
            .map(move |ingredient| (ingredient, self.get(ingredient)))
    }

    /// Total Active Chassis: the plain sum of all six ratios.
    pub fn total(&self) -> f64 {
        self.shea + self.squalane + self.lc + self.gum + self.glda + self.preservative
    }

    /// Share of each ingredient in the chassis, in percent of `total()`.
    pub fn composition(&self) -> Vec<(Ingredient, f64)> {
        let total = self.total();
        self.iter()
            .map(|(ingredient, value)| {
                let share = if total == 0.0 {
                    0.0
                } else {
                    value / total * 100.0
                };
                (ingredient, share)
            })
            .collect()
    }

    /// Returns the first ingredient whose ratio falls outside its slider range.
    pub fn validate_bounds(&self) -> Result<(), (Ingredient, f64)> {
        match self.iter().find(|(ingredient, value)| !ingredient.contains(*value)) {
            Some(offender) => Err(offender),
            None => Ok(()),
        }
    }
}
