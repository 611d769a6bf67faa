use dioxus::prelude::*;

use crate::ui::theme;

#[component]
pub fn KpiCard(title: String, value: String, description: Option<String>, highlight: bool) -> Element {
    rsx! {
        div {
            class: "{theme::panel(highlight)}",
            h2 { "{title}" }
            p { class: "price-total", "{value}" }
            if let Some(desc) = description {
                p { class: "price-caption", "{desc}" }
            }
        }
    }
}
