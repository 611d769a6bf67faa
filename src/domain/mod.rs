//! Pricing rules for landscaping jobs live here.

pub mod estimator;
pub mod rates;
pub mod selections;

pub use estimator::{estimate, estimate_breakdown, Estimate, LineItem, LineItemKind, Price};
pub use rates::{
    budget_ceiling, property_multiplier, BudgetCeiling, Extra, RateTable, BUDGET_BANDS,
    GARDEN_STYLE_SURCHARGES, PROPERTY_TYPES, SERVICE_BASE_COSTS, SOIL_SURCHARGES,
    URGENCY_SURCHARGES,
};
pub use selections::{Extras, FormSnapshot, Selections};
