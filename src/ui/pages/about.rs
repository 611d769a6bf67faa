use dioxus::prelude::*;

use crate::{
    ui::theme,
    util::version::{current_version, version_label, APP_AUTHOR, APP_NAME},
};

#[component]
pub fn AboutPage() -> Element {
    let version = match current_version() {
        Ok(version) => version.to_string(),
        Err(err) => {
            tracing::warn!(%err, "could not parse build version");
            version_label()
        }
    };

    rsx! {
        section { class: "{theme::panel(false)}",
            h2 { "About" }
            p { "{APP_NAME} {version}" }
            p { class: "price-caption", "Built by {APP_AUTHOR}." }
            p { class: "price-caption",
                "Estimates are indicative only. Totals above the selected budget are shown at the budget ceiling."
            }
        }
    }
}
