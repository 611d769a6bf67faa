use dioxus::prelude::*;

use crate::{
    domain::{
        rates::{AREA_RATE, COMMERCIAL_MULTIPLIER, PLANT_RATE},
        Extra, RateTable, BUDGET_BANDS, GARDEN_STYLE_SURCHARGES, SERVICE_BASE_COSTS,
        SOIL_SURCHARGES, URGENCY_SURCHARGES,
    },
    ui::theme,
    util::format::{format_amount, humanize_key},
};

#[derive(Clone, Debug, PartialEq)]
struct RateRow {
    label: String,
    value: String,
}

#[component]
pub fn RatesPage() -> Element {
    let tables = [
        &SERVICE_BASE_COSTS,
        &GARDEN_STYLE_SURCHARGES,
        &URGENCY_SURCHARGES,
        &SOIL_SURCHARGES,
    ]
    .map(|table| (table.name.to_string(), table_rows(table)));

    let unit_rows = vec![
        RateRow {
            label: "Per m² of area".into(),
            value: format_amount(AREA_RATE),
        },
        RateRow {
            label: "Per plant".into(),
            value: format_amount(PLANT_RATE),
        },
        RateRow {
            label: "Commercial service multiplier".into(),
            value: format!("×{COMMERCIAL_MULTIPLIER}"),
        },
    ];
    let extra_rows = Extra::ALL
        .iter()
        .map(|extra| RateRow {
            label: extra.label().to_string(),
            value: format_amount(extra.fee()),
        })
        .collect::<Vec<_>>();
    let budget_rows = BUDGET_BANDS
        .iter()
        .map(|(key, ceiling)| RateRow {
            label: humanize_key(key),
            value: ceiling.to_string(),
        })
        .collect::<Vec<_>>();

    rsx! {
        div { class: "rate-grid",
            RateCard { title: "Unit rates".to_string(), rows: unit_rows }
            for (title, rows) in tables {
                RateCard { title, rows, fallback: Some("$0.00") }
            }
            RateCard { title: "Extras".to_string(), rows: extra_rows }
            RateCard { title: "Budget ceilings".to_string(), rows: budget_rows, fallback: Some("No limit") }
        }
    }
}

fn table_rows(table: &RateTable) -> Vec<RateRow> {
    table
        .entries()
        .iter()
        .map(|(key, rate)| RateRow {
            label: humanize_key(key),
            value: format_amount(*rate),
        })
        .collect()
}

#[component]
fn RateCard(title: String, rows: Vec<RateRow>, fallback: Option<&'static str>) -> Element {
    rsx! {
        section { class: "{theme::panel(false)}",
            h2 { "{title}" }
            table { class: "table",
                tbody {
                    for row in rows {
                        tr {
                            td { "{row.label}" }
                            td { class: "amount", "{row.value}" }
                        }
                    }
                    if let Some(fallback) = fallback {
                        tr {
                            td { class: "muted", "Anything else" }
                            td { class: "amount muted", "{fallback}" }
                        }
                    }
                }
            }
        }
    }
}
