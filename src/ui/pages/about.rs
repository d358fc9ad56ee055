use dioxus::prelude::*;

use crate::domain::ScoreKind;

const OPTIMISATION_LOOP: [&str; 4] = [
    "Adjust ingredients",
    "Predict outcomes",
    "Iterate",
    "Converge toward an optimized sustainable formula",
];

#[component]
pub fn AboutPage() -> Element {
    rsx! {
        section { class: "about",
            h2 { "📘 How These Predictions Are Modelled" }
            p {
                "Every score is a fixed weighted sum of the ingredient ratios, "
                "clamped to the range 0 to 10. Scores of 7 and above read as high, "
                "4 up to 7 as medium, anything lower as low."
            }
            for kind in ScoreKind::ALL {
                div { key: "{kind:?}",
                    h3 { "{kind.icon()} {kind.title()}" }
                    ul {
                        for driver in kind.drivers() {
                            li { "{driver}" }
                        }
                    }
                }
            }
            h2 { "Prediction loop" }
            ol {
                for step in OPTIMISATION_LOOP {
                    li { "{step}" }
                }
            }
        }
    }
}
