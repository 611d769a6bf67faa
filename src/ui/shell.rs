use dioxus::prelude::*;

use crate::app::Route;
use crate::domain::FormSnapshot;
use crate::ui::theme::{self, Accent};
use crate::util::version::APP_NAME;

#[component]
pub fn Shell(children: Element) -> Element {
    let form = use_context::<Signal<FormSnapshot>>();
    let accent = form.with(|f| Accent::for_property(&f.property_type));

    let current_route = use_route::<Route>();
    let nav = use_navigator();

    rsx! {
        div { class: "app-shell {theme::accent_class(accent)}",
            header { class: "app-header",
                div {
                    h1 { "{APP_NAME}" }
                    p { "{accent.tagline()}" }
                }
                nav { class: "app-nav",
                    NavButton {
                        active: matches!(current_route, Route::Estimator {}),
                        onclick: move |_| { nav.push(Route::Estimator {}); },
                        label: "Estimate",
                    }
                    NavButton {
                        active: matches!(current_route, Route::Rates {}),
                        onclick: move |_| { nav.push(Route::Rates {}); },
                        label: "Rates",
                    }
                    NavButton {
                        active: matches!(current_route, Route::About {}),
                        onclick: move |_| { nav.push(Route::About {}); },
                        label: "About",
                    }
                }
            }
            main { class: "app-main",
                {children}
            }
        }
    }
}

#[component]
fn NavButton(active: bool, onclick: EventHandler<()>, label: &'static str) -> Element {
    rsx! {
        button {
            class: "{theme::nav_button(active)}",
            onclick: move |_| onclick.call(()),
            "{label}"
        }
    }
}
