//! Job pricing: additive line items, then a single budget clamp.

use serde::Serialize;

use super::rates::{
    budget_ceiling, property_multiplier, BudgetCeiling, AREA_RATE, GARDEN_STYLE_SURCHARGES,
    PLANT_RATE, SERVICE_BASE_COSTS, SOIL_SURCHARGES, URGENCY_SURCHARGES,
};
use super::selections::{clamp_area, Selections};
use crate::util::format::humanize_key;

/// Final estimate in currency units. Never negative.
#[derive(Clone, Copy, Debug, Default, PartialEq, PartialOrd, Serialize)]
#[serde(transparent)]
pub struct Price(f64);

impl Price {
    pub const ZERO: Price = Price(0.0);

    pub fn value(self) -> f64 {
        self.0
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum LineItemKind {
    Service,
    Area,
    Plants,
    GardenStyle,
    Urgency,
    Soil,
    Extra,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct LineItem {
    pub kind: LineItemKind,
    pub label: String,
    pub amount: f64,
}

/// Price together with the line items that produced it.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Estimate {
    pub price: Price,
    pub subtotal: f64,
    pub ceiling: BudgetCeiling,
    pub capped: bool,
    pub items: Vec<LineItem>,
}

impl Estimate {
    fn empty() -> Self {
        Self {
            price: Price::ZERO,
            subtotal: 0.0,
            ceiling: BudgetCeiling::NoLimit,
            capped: false,
            items: Vec::new(),
        }
    }

    fn push(&mut self, kind: LineItemKind, label: impl Into<String>, amount: f64) {
        if amount == 0.0 {
            return;
        }
        self.subtotal += amount;
        self.items.push(LineItem {
            kind,
            label: label.into(),
            amount,
        });
    }
}

pub fn estimate(selections: &Selections) -> Price {
    estimate_breakdown(selections).price
}

pub fn estimate_breakdown(selections: &Selections) -> Estimate {
    let mut estimate = Estimate::empty();

    if !selections.service_type.is_empty() && !selections.property_type.is_empty() {
        let base = SERVICE_BASE_COSTS.rate(&selections.service_type)
            * property_multiplier(&selections.property_type);
        estimate.push(
            LineItemKind::Service,
            format!(
                "{} ({})",
                humanize_key(&selections.service_type),
                humanize_key(&selections.property_type)
            ),
            base,
        );
    }

    let area = clamp_area(selections.area_size);
    estimate.push(
        LineItemKind::Area,
        format!("Area {area} m² @ {AREA_RATE}"),
        area * AREA_RATE,
    );
    estimate.push(
        LineItemKind::Plants,
        format!("{} plants @ {PLANT_RATE}", selections.number_of_plants),
        f64::from(selections.number_of_plants) * PLANT_RATE,
    );
    estimate.push(
        LineItemKind::GardenStyle,
        format!("{} style", humanize_key(&selections.garden_style)),
        GARDEN_STYLE_SURCHARGES.rate(&selections.garden_style),
    );
    estimate.push(
        LineItemKind::Urgency,
        format!("Urgency: {}", humanize_key(&selections.project_urgency)),
        URGENCY_SURCHARGES.rate(&selections.project_urgency),
    );
    estimate.push(
        LineItemKind::Soil,
        format!("{} soil", humanize_key(&selections.soil_type)),
        SOIL_SURCHARGES.rate(&selections.soil_type),
    );
    for extra in selections.extras.iter() {
        estimate.push(LineItemKind::Extra, extra.label(), extra.fee());
    }

    estimate.ceiling = budget_ceiling(&selections.budget_band);
    let clamped = estimate.ceiling.apply(estimate.subtotal);
    estimate.capped = clamped < estimate.subtotal;
    estimate.price = Price(clamped);

    tracing::debug!(
        subtotal = estimate.subtotal,
        ceiling = %estimate.ceiling,
        price = clamped,
        capped = estimate.capped,
        "estimated job price"
    );

    estimate
}
