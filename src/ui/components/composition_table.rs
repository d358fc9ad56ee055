use dioxus::prelude::*;

use crate::domain::IngredientRatios;

/// Ratio and share of the chassis for each ingredient.
#[component]
pub fn CompositionTable(ratios: IngredientRatios) -> Element {
    let rows = ratios
        .iter()
        .zip(ratios.composition())
        .map(|((ingredient, value), (_, share))| (ingredient.label(), value, share))
        .collect::<Vec<_>>();

    rsx! {
        table { class: "composition",
            thead {
                tr {
                    th { "Ingredient" }
                    th { "Ratio (%)" }
                    th { "Share of chassis" }
                }
            }
            tbody {
                for (label, value, share) in rows {
                    tr {
                        td { "{label}" }
                        td { "{value:.1}" }
                        td { "{share:.1}%" }
                    }
                }
            }
        }
    }
}
