use dioxus::prelude::*;

use crate::{
    domain::AppState,
    ui::{
        components::{push_toast, ToastKind, ToastMessage, Toasts},
        pages::{AboutPage, DashboardPage},
        shell::Shell,
    },
    util::config::AppConfig,
};

/// Resolved start-up configuration, handed to the root component as context.
#[derive(Clone, Debug, Default)]
pub struct Startup {
    pub config: AppConfig,
    pub load_error: Option<String>,
}

#[derive(Routable, Clone, PartialEq)]
pub enum Route {
    #[route("/")]
    Dashboard {},
    #[route("/about")]
    About {},
}

#[component]
pub fn App() -> Element {
    let startup = use_context::<Startup>();
    let initial = startup.config.initial_ratios;

    let state = use_signal(move || AppState::with_initial(initial));
    use_context_provider(|| state);

    let toasts = use_signal(Vec::<ToastMessage>::new);
    use_context_provider(|| toasts);

    use_hook(move || {
        if let Some(err) = startup.load_error {
            push_toast(
                toasts,
                ToastKind::Warning,
                format!("Config not loaded, using default ratios: {err}"),
            );
        }
    });

    rsx! {
        document::Title { "{crate::util::version::window_title()}" }
        Router::<Route> {}
        Toasts {}
    }
}

#[component]
pub fn Dashboard() -> Element {
    rsx! { Shell { DashboardPage {} } }
}

#[component]
pub fn About() -> Element {
    rsx! { Shell { AboutPage {} } }
}
