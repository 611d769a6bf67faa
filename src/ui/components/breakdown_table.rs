use dioxus::prelude::*;

use crate::domain::{BudgetCeiling, Estimate};
use crate::util::format::{format_amount, format_price};

#[component]
pub fn BreakdownTable(estimate: Estimate) -> Element {
    let Estimate {
        price,
        subtotal,
        ceiling,
        capped,
        items,
    } = estimate;
    let is_empty = items.is_empty();
    let ceiling_label = match ceiling {
        BudgetCeiling::Limited(_) => format!("Budget ceiling {ceiling}"),
        BudgetCeiling::NoLimit => "No budget ceiling".to_string(),
    };
    let subtotal = format_amount(subtotal);
    let total = format_price(price);
    let capped_note = if capped { "capped" } else { "" };

    rsx! {
        table { class: "table",
            thead {
                tr {
                    th { "Item" }
                    th { class: "amount", "Amount" }
                }
            }
            tbody {
                for item in items {
                    tr {
                        td { "{item.label}" }
                        td { class: "amount", {format_amount(item.amount)} }
                    }
                }
                if is_empty {
                    tr {
                        td { class: "muted", colspan: "2", "Choose a service or add area to see line items." }
                    }
                }
                tr {
                    td { class: "muted", "Subtotal" }
                    td { class: "amount muted", "{subtotal}" }
                }
                tr {
                    td { class: "muted", "{ceiling_label}" }
                    td { class: "amount muted", "{capped_note}" }
                }
                tr { class: "total",
                    td { "Total" }
                    td { class: "amount", "{total}" }
                }
            }
        }
    }
}
