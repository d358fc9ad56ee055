use dioxus::prelude::*;

use crate::domain::{format_total, AppState, Ingredient};
use crate::ui::components::{
    push_toast, CompositionTable, RatioSlider, ScoreCard, ToastKind, ToastMessage,
};

#[component]
pub fn DashboardPage() -> Element {
    let mut state = use_context::<Signal<AppState>>();
    let toasts = use_context::<Signal<Vec<ToastMessage>>>();

    let snapshot = state();
    let scores = snapshot.scores();
    let total = format_total(scores.total);

    let on_reset = move |_: MouseEvent| {
        state.with_mut(|st| st.reset());
        tracing::info!("ratios reset to initial formulation");
        push_toast(toasts, ToastKind::Info, "Ratios reset to the initial formulation.");
    };

    rsx! {
        section { class: "dashboard",
            aside { class: "sliders",
                h2 { "Adjust Sustainable Ingredient Ratios (%)" }
                for ingredient in Ingredient::ALL {
                    RatioSlider {
                        key: "{ingredient:?}",
                        ingredient,
                        value: snapshot.ratios.get(ingredient),
                        on_input: move |raw: String| {
                            let result = state.with_mut(|st| st.apply_input(ingredient, &raw));
                            match result {
                                Ok(value) => tracing::debug!(
                                    ?ingredient,
                                    value,
                                    total = state.with(|st| st.ratios.total()),
                                    "ratio changed"
                                ),
                                Err(err) => tracing::debug!(?ingredient, %err, "ignored slider input"),
                            }
                        },
                    }
                }
                h3 { "Total Active Chassis: {total}" }
                button {
                    disabled: !snapshot.is_modified(),
                    onclick: on_reset,
                    "Reset"
                }
            }
            div { class: "results",
                h2 { "📊 Predicted Formulation Performance" }
                div { class: "score-grid",
                    for card in scores.cards() {
                        ScoreCard { key: "{card.kind:?}", card }
                    }
                }
                h2 { "Composition" }
                CompositionTable { ratios: snapshot.ratios }
            }
        }
    }
}
