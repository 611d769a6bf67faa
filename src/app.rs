use std::sync::OnceLock;

use dioxus::prelude::*;

use crate::{
    config::AppConfig,
    domain::FormSnapshot,
    ui::{
        pages::{AboutPage, BreakdownDefault, EstimatorPage, RatesPage},
        shell::Shell,
    },
    util::assets,
};

static CONFIG: OnceLock<AppConfig> = OnceLock::new();

/// Hands the process configuration to the UI. Only the first call takes effect.
pub fn install_config(config: AppConfig) {
    if CONFIG.set(config).is_err() {
        tracing::warn!("app config already installed; ignoring");
    }
}

fn config() -> AppConfig {
    CONFIG.get().cloned().unwrap_or_default()
}

#[derive(Routable, Clone, PartialEq)]
pub enum Route {
    #[route("/")]
    Estimator {},
    #[route("/rates")]
    Rates {},
    #[route("/about")]
    About {},
}

#[component]
pub fn App() -> Element {
    // Lives above the router so the form survives page switches.
    let form = use_signal(FormSnapshot::default);
    use_context_provider(|| form);

    let show_breakdown = config().show_breakdown;
    use_context_provider(|| BreakdownDefault(show_breakdown));

    rsx! {
        document::Style { "{assets::main_css()}" }
        document::Style { "{assets::estimator_css()}" }
        Router::<Route> {}
    }
}

#[component]
pub fn Estimator() -> Element {
    rsx! { Shell { EstimatorPage {} } }
}

#[component]
pub fn Rates() -> Element {
    rsx! { Shell { RatesPage {} } }
}

#[component]
pub fn About() -> Element {
    rsx! { Shell { AboutPage {} } }
}
