use dioxus::prelude::*;

use crate::app::Route;
use crate::util::version::{version_label, APP_NAME};

#[component]
pub fn Shell(children: Element) -> Element {
    let current_route = use_route::<Route>();
    let nav = use_navigator();

    rsx! {
        div { class: "shell",
            header {
                div {
                    h1 { "🌿 {APP_NAME}" }
                    p { class: "version", "{version_label()}" }
                }
                nav {
                    NavButton {
                        active: matches!(current_route, Route::Dashboard {}),
                        onclick: move |_| { nav.push(Route::Dashboard {}); },
                        label: "📊 Dashboard",
                    }
                    NavButton {
                        active: matches!(current_route, Route::About {}),
                        onclick: move |_| { nav.push(Route::About {}); },
                        label: "📘 About",
                    }
                }
            }
            main { {children} }
        }
    }
}

#[component]
fn NavButton(active: bool, onclick: EventHandler<()>, label: &'static str) -> Element {
    let class = if active { "nav-button active" } else { "nav-button" };
    rsx! {
        button {
            class: "{class}",
            onclick: move |_| onclick.call(()),
            "{label}"
        }
    }
}
