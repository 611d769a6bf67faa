//! Fixed price lists for every priced dimension of a job.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Currency units charged per unit of area.
pub const AREA_RATE: f64 = 10.0;
/// Currency units charged per plant.
pub const PLANT_RATE: f64 = 5.0;
/// Applied to the service base cost for commercial properties.
pub const COMMERCIAL_MULTIPLIER: f64 = 1.5;

/// Static mapping from a category key to a flat rate.
///
/// Lookups never fail: a key missing from the table prices at zero.
#[derive(Debug)]
pub struct RateTable {
    pub name: &'static str,
    entries: &'static [(&'static str, f64)],
}

impl RateTable {
    const fn new(name: &'static str, entries: &'static [(&'static str, f64)]) -> Self {
        Self { name, entries }
    }

    pub fn get(&self, key: &str) -> Option<f64> {
        self.entries
            .iter()
            .find(|(candidate, _)| *candidate == key)
            .map(|(_, rate)| *rate)
    }

    pub fn rate(&self, key: &str) -> f64 {
        self.get(key).unwrap_or(0.0)
    }

    pub fn entries(&self) -> &'static [(&'static str, f64)] {
        self.entries
    }
}

pub static SERVICE_BASE_COSTS: RateTable = RateTable::new(
    "Service base cost",
    &[
        ("lawn-maintenance", 100.0),
        ("garden-design", 200.0),
        ("tree-planting", 150.0),
        ("hardscaping", 300.0),
        ("water-features", 400.0),
        ("outdoor-lighting", 250.0),
    ],
);

pub static GARDEN_STYLE_SURCHARGES: RateTable = RateTable::new(
    "Garden style",
    &[
        ("native", 100.0),
        ("formal", 200.0),
        ("cottage", 150.0),
        ("japanese", 250.0),
        ("modern", 300.0),
        ("eclectic", 200.0),
    ],
);

pub static URGENCY_SURCHARGES: RateTable = RateTable::new(
    "Project urgency",
    &[
        ("asap", 300.0),
        ("within-a-month", 200.0),
        ("within-three-months", 100.0),
        ("no-rush", 0.0),
    ],
);

pub static SOIL_SURCHARGES: RateTable = RateTable::new(
    "Soil type",
    &[
        ("loam", 50.0),
        ("sandy", 30.0),
        ("clay", 40.0),
        ("silt", 45.0),
        ("peat", 60.0),
        ("chalk", 55.0),
        ("rocky", 70.0),
    ],
);

pub const PROPERTY_TYPES: [&str; 2] = ["residential", "commercial"];

pub fn property_multiplier(property_type: &str) -> f64 {
    if property_type == "commercial" {
        COMMERCIAL_MULTIPLIER
    } else {
        1.0
    }
}

/// Upper bound the customer is willing to pay.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BudgetCeiling {
    Limited(f64),
    NoLimit,
}

impl BudgetCeiling {
    pub fn apply(self, total: f64) -> f64 {
        match self {
            BudgetCeiling::Limited(max) if total > max => max,
            _ => total,
        }
    }

    pub fn limit(self) -> Option<f64> {
        match self {
            BudgetCeiling::Limited(max) => Some(max),
            BudgetCeiling::NoLimit => None,
        }
    }
}

impl fmt::Display for BudgetCeiling {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BudgetCeiling::Limited(max) => write!(f, "${max:.2}"),
            BudgetCeiling::NoLimit => write!(f, "No limit"),
        }
    }
}

pub const BUDGET_BANDS: [(&str, BudgetCeiling); 6] = [
    ("under-1000", BudgetCeiling::Limited(1000.0)),
    ("1000-5000", BudgetCeiling::Limited(5000.0)),
    ("5000-10000", BudgetCeiling::Limited(10000.0)),
    ("10000-20000", BudgetCeiling::Limited(20000.0)),
    ("over-20000", BudgetCeiling::NoLimit),
    ("not-sure", BudgetCeiling::NoLimit),
];

pub fn budget_ceiling(band: &str) -> BudgetCeiling {
    BUDGET_BANDS
        .iter()
        .find(|(key, _)| *key == band)
        .map(|(_, ceiling)| *ceiling)
        .unwrap_or(BudgetCeiling::NoLimit)
}

/// Optional add-on services, each billed at a flat fee.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Extra {
    Irrigation,
    Pathways,
    Seating,
}

impl Extra {
    pub const ALL: [Extra; 3] = [Extra::Irrigation, Extra::Pathways, Extra::Seating];

    pub fn fee(self) -> f64 {
        match self {
            Extra::Irrigation => 500.0,
            Extra::Pathways => 300.0,
            Extra::Seating => 700.0,
        }
    }

    pub fn key(self) -> &'static str {
        match self {
            Extra::Irrigation => "irrigation",
            Extra::Pathways => "pathways",
            Extra::Seating => "seating",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Extra::Irrigation => "Automated irrigation",
            Extra::Pathways => "Custom pathways",
            Extra::Seating => "Outdoor seating",
        }
    }

    pub fn from_key(key: &str) -> Option<Extra> {
        Extra::ALL.into_iter().find(|extra| extra.key() == key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_keys_price_from_table() {
        assert_eq!(SERVICE_BASE_COSTS.rate("water-features"), 400.0);
        assert_eq!(GARDEN_STYLE_SURCHARGES.rate("japanese"), 250.0);
        assert_eq!(URGENCY_SURCHARGES.rate("within-three-months"), 100.0);
        assert_eq!(SOIL_SURCHARGES.rate("rocky"), 70.0);
    }

    #[test]
    fn unknown_and_empty_keys_price_at_zero() {
        for table in [
            &SERVICE_BASE_COSTS,
            &GARDEN_STYLE_SURCHARGES,
            &URGENCY_SURCHARGES,
            &SOIL_SURCHARGES,
        ] {
            assert_eq!(table.rate("xyz"), 0.0, "{}", table.name);
            assert_eq!(table.rate(""), 0.0, "{}", table.name);
            assert_eq!(table.rate("default"), 0.0, "{}", table.name);
        }
    }

    #[test]
    fn no_rush_is_listed_but_free() {
        assert_eq!(URGENCY_SURCHARGES.get("no-rush"), Some(0.0));
        assert_eq!(URGENCY_SURCHARGES.get("someday"), None);
    }

    #[test]
    fn only_commercial_gets_multiplier() {
        assert_eq!(property_multiplier("commercial"), 1.5);
        assert_eq!(property_multiplier("residential"), 1.0);
        assert_eq!(property_multiplier("industrial"), 1.0);
        assert_eq!(property_multiplier(""), 1.0);
    }

    #[test]
    fn budget_bands_map_to_ceilings() {
        assert_eq!(budget_ceiling("under-1000"), BudgetCeiling::Limited(1000.0));
        assert_eq!(budget_ceiling("1000-5000"), BudgetCeiling::Limited(5000.0));
        assert_eq!(budget_ceiling("5000-10000"), BudgetCeiling::Limited(10000.0));
        assert_eq!(budget_ceiling("10000-20000"), BudgetCeiling::Limited(20000.0));
        assert_eq!(budget_ceiling("over-20000"), BudgetCeiling::NoLimit);
        assert_eq!(budget_ceiling("not-sure"), BudgetCeiling::NoLimit);
        assert_eq!(budget_ceiling(""), BudgetCeiling::NoLimit);
        assert_eq!(budget_ceiling("lots"), BudgetCeiling::NoLimit);
    }

    #[test]
    fn ceiling_is_a_hard_cap() {
        let ceiling = BudgetCeiling::Limited(1000.0);
        assert_eq!(ceiling.apply(1840.0), 1000.0);
        assert_eq!(ceiling.apply(1000.0), 1000.0);
        assert_eq!(ceiling.apply(999.5), 999.5);
        assert_eq!(BudgetCeiling::NoLimit.apply(1e9), 1e9);
    }

    #[test]
    fn extras_round_trip_through_keys() {
        for extra in Extra::ALL {
            assert_eq!(Extra::from_key(extra.key()), Some(extra));
        }
        assert_eq!(Extra::from_key("pool"), None);
        assert_eq!(
            Extra::ALL.iter().map(|extra| extra.fee()).sum::<f64>(),
            1500.0
        );
    }
}
