//! The quote form: every edit re-prices the job immediately.

use dioxus::prelude::*;

use crate::{
    domain::{
        estimate_breakdown, Extra, FormSnapshot, RateTable, Selections, BUDGET_BANDS,
        GARDEN_STYLE_SURCHARGES, PROPERTY_TYPES, SERVICE_BASE_COSTS, SOIL_SURCHARGES,
        URGENCY_SURCHARGES,
    },
    ui::{
        components::{
            breakdown_table::BreakdownTable,
            kpi_card::KpiCard,
            select_field::{SelectField, SelectOption},
        },
        theme,
    },
    util::format::{format_amount, format_price, humanize_key},
};

/// Whether the itemised breakdown panel starts expanded.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BreakdownDefault(pub bool);

#[component]
pub fn EstimatorPage() -> Element {
    let mut form = use_context::<Signal<FormSnapshot>>();
    let BreakdownDefault(initially_open) = use_context::<BreakdownDefault>();
    let mut show_breakdown = use_signal(|| initially_open);

    let snapshot = form();
    let selections = Selections::from(&snapshot);
    let estimate = estimate_breakdown(&selections);
    let total_display = format_price(estimate.price);
    let caption = if estimate.items.is_empty() {
        "Fill in the form to build a quote.".to_string()
    } else {
        format!("{} priced items", estimate.items.len())
    };
    let accent = theme::Accent::for_property(&snapshot.property_type);

    let on_reset = move |_| {
        form.set(FormSnapshot::default());
        tracing::debug!("estimator form reset");
    };

    rsx! {
        div { class: "estimator-layout",
            section { class: "{theme::panel(false)}",
                h2 { "Project details" }
                form {
                    class: "calculator-form",
                    onsubmit: move |evt: FormEvent| evt.prevent_default(),
                    div { class: "field-grid",
                        SelectField {
                            label: "Service",
                            name: "service-type",
                            value: snapshot.service_type.clone(),
                            options: priced_options(&SERVICE_BASE_COSTS, ""),
                            on_change: move |value: String| form.with_mut(|f| f.service_type = value),
                        }
                        SelectField {
                            label: "Property type",
                            name: "property-type",
                            value: snapshot.property_type.clone(),
                            options: property_options(),
                            on_change: move |value: String| form.with_mut(|f| f.property_type = value),
                        }
                        div { class: "field",
                            label { r#for: "area-size", "Area (m²)" }
                            input {
                                id: "area-size",
                                name: "area-size",
                                inputmode: "decimal",
                                placeholder: "0",
                                value: "{snapshot.area_size}",
                                oninput: move |evt| form.with_mut(|f| f.area_size = evt.value()),
                            }
                        }
                        div { class: "field",
                            label { r#for: "number-of-plants", "Number of plants" }
                            input {
                                id: "number-of-plants",
                                name: "number-of-plants",
                                inputmode: "numeric",
                                placeholder: "0",
                                value: "{snapshot.number_of_plants}",
                                oninput: move |evt| form.with_mut(|f| f.number_of_plants = evt.value()),
                            }
                        }
                        SelectField {
                            label: "Garden style",
                            name: "garden-style",
                            value: snapshot.garden_style.clone(),
                            options: priced_options(&GARDEN_STYLE_SURCHARGES, "+"),
                            on_change: move |value: String| form.with_mut(|f| f.garden_style = value),
                        }
                        SelectField {
                            label: "Urgency",
                            name: "project-urgency",
                            value: snapshot.project_urgency.clone(),
                            options: priced_options(&URGENCY_SURCHARGES, "+"),
                            on_change: move |value: String| form.with_mut(|f| f.project_urgency = value),
                        }
                        SelectField {
                            label: "Soil type",
                            name: "soil-type",
                            value: snapshot.soil_type.clone(),
                            options: priced_options(&SOIL_SURCHARGES, "+"),
                            on_change: move |value: String| form.with_mut(|f| f.soil_type = value),
                        }
                        SelectField {
                            label: "Budget",
                            name: "budget",
                            value: snapshot.budget.clone(),
                            options: budget_options(),
                            on_change: move |value: String| form.with_mut(|f| f.budget = value),
                        }
                    }
                    div { class: "extras",
                        for extra in Extra::ALL {
                            label {
                                class: "{theme::extra_toggle(snapshot.extras.contains(extra))}",
                                input {
                                    r#type: "checkbox",
                                    id: "{extra.key()}-checkbox",
                                    checked: snapshot.extras.contains(extra),
                                    onclick: move |_| form.with_mut(|f| f.extras.toggle(extra)),
                                }
                                {extra_caption(extra)}
                            }
                        }
                    }
                    div { class: "button-row",
                        button {
                            class: "button",
                            r#type: "button",
                            onclick: on_reset,
                            "Reset"
                        }
                        button {
                            class: "button button--primary",
                            r#type: "button",
                            onclick: move |_| {
                                let open = show_breakdown();
                                show_breakdown.set(!open);
                            },
                            if show_breakdown() { "Hide breakdown" } else { "Show breakdown" }
                        }
                    }
                }
            }
            aside { class: "cost-total",
                KpiCard {
                    title: "Estimated total".to_string(),
                    value: total_display,
                    description: Some(caption),
                    highlight: accent != theme::Accent::Unset,
                }
                if show_breakdown() {
                    div { class: "{theme::panel(false)}",
                        h2 { "Breakdown" }
                        BreakdownTable { estimate: estimate.clone() }
                    }
                }
            }
        }
    }
}

/// Choices for a rate table, labelled with their price.
pub fn priced_options(table: &RateTable, sign: &str) -> Vec<SelectOption> {
    table
        .entries()
        .iter()
        .map(|(key, rate)| {
            SelectOption::new(
                *key,
                format!("{} ({sign}{})", humanize_key(key), format_amount(*rate)),
            )
        })
        .collect()
}

fn extra_caption(extra: Extra) -> String {
    format!("{} (+{})", extra.label(), format_amount(extra.fee()))
}

fn property_options() -> Vec<SelectOption> {
    PROPERTY_TYPES
        .iter()
        .map(|key| SelectOption::new(*key, humanize_key(key)))
        .collect()
}

fn budget_options() -> Vec<SelectOption> {
    BUDGET_BANDS
        .iter()
        .map(|(key, ceiling)| {
            let label = match ceiling.limit() {
                Some(_) => format!("{key} (up to {ceiling})"),
                None => format!("{} (no limit)", humanize_key(key)),
            };
            SelectOption::new(*key, label)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn options_cover_every_table_entry() {
        let options = priced_options(&SOIL_SURCHARGES, "+");
        assert_eq!(options.len(), 7);
        assert_eq!(options[0], SelectOption::new("loam", "Loam (+$50.00)"));

        let services = priced_options(&SERVICE_BASE_COSTS, "");
        assert_eq!(services[1].label, "Garden Design ($200.00)");
    }

    #[test]
    fn budget_labels_show_ceilings() {
        let options = budget_options();
        assert_eq!(options.len(), 6);
        assert_eq!(options[0].label, "under-1000 (up to $1000.00)");
        assert_eq!(options[5].label, "Not Sure (no limit)");
    }

    #[test]
    fn extras_show_their_fee() {
        assert_eq!(extra_caption(Extra::Seating), "Outdoor seating (+$700.00)");
    }
}
