use dioxus::prelude::*;

#[derive(Clone, Debug, PartialEq)]
pub struct SelectOption {
    pub value: String,
    pub label: String,
}

impl SelectOption {
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
        }
    }
}

/// Dropdown with a leading blank choice meaning "nothing selected".
#[component]
pub fn SelectField(
    label: &'static str,
    name: &'static str,
    value: String,
    options: Vec<SelectOption>,
    on_change: EventHandler<String>,
) -> Element {
    let nothing_selected = value.is_empty();
    rsx! {
        div { class: "field",
            label { r#for: name, "{label}" }
            select {
                id: name,
                name: name,
                value: "{value}",
                onchange: move |evt| on_change.call(evt.value()),
                option { value: "", selected: nothing_selected, "Select…" }
                for choice in options {
                    option {
                        value: "{choice.value}",
                        selected: choice.value == value,
                        "{choice.label}"
                    }
                }
            }
        }
    }
}
