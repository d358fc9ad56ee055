use dioxus::prelude::*;

use super::indicator_badge::IndicatorBadge;
use crate::domain::ScoreCard as Card;

#[component]
pub fn ScoreCard(card: Card) -> Element {
    rsx! {
        div { class: "score-card",
            h3 { "{card.kind.icon()} {card.kind.title()}" }
            p { class: "score-value", "{card.display_value()}" }
            IndicatorBadge { indicator: card.indicator }
        }
    }
}
