use dioxus::prelude::*;

use crate::domain::Indicator;

#[component]
pub fn IndicatorBadge(indicator: Indicator) -> Element {
    let color = match indicator {
        Indicator::High => "badge badge-high",
        Indicator::Medium => "badge badge-medium",
        Indicator::Low => "badge badge-low",
    };

    rsx! {
        span { class: "{color}", "{indicator.label()}" }
    }
}
