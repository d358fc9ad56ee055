use dioxus::prelude::*;

use crate::domain::Ingredient;

const SLIDER_STEP: f64 = 0.1;

#[component]
pub fn RatioSlider(ingredient: Ingredient, value: f64, on_input: EventHandler<String>) -> Element {
    let id = format!("ratio-{ingredient:?}").to_lowercase();
    rsx! {
        div { class: "ratio-slider",
            label { r#for: "{id}",
                "{ingredient.label()} ({ingredient.role()})"
            }
            input {
                id: "{id}",
                r#type: "range",
                min: "0",
                max: "{ingredient.max()}",
                step: "{SLIDER_STEP}",
                value: "{value}",
                oninput: move |evt| on_input.call(evt.value()),
            }
            span { class: "ratio-value", "{value:.1}%" }
        }
    }
}
