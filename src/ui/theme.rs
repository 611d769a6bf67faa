//! Accent styling keyed off the selected property type.

/// Colour scheme applied across the shell and estimator panels.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Accent {
    #[default]
    Unset,
    Residential,
    Commercial,
}

impl Accent {
    pub fn for_property(property_type: &str) -> Self {
        match property_type.trim() {
            "residential" => Accent::Residential,
            "commercial" => Accent::Commercial,
            _ => Accent::Unset,
        }
    }

    pub fn tagline(self) -> &'static str {
        match self {
            Accent::Residential => "home gardens, priced as you type",
            Accent::Commercial => "commercial grounds at 1.5x service rates",
            Accent::Unset => "pick a property type to get started",
        }
    }
}

pub fn accent_class(accent: Accent) -> &'static str {
    match accent {
        Accent::Unset => "accent--unset",
        Accent::Residential => "accent--residential",
        Accent::Commercial => "accent--commercial",
    }
}

pub fn nav_button(active: bool) -> &'static str {
    if active {
        "nav-button nav-button--active"
    } else {
        "nav-button"
    }
}

pub fn extra_toggle(enabled: bool) -> &'static str {
    if enabled {
        "extra-toggle extra-toggle--on"
    } else {
        "extra-toggle"
    }
}

pub fn panel(highlight: bool) -> &'static str {
    if highlight {
        "panel panel--accent"
    } else {
        "panel"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accent_follows_property_type() {
        assert_eq!(Accent::for_property("commercial"), Accent::Commercial);
        assert_eq!(Accent::for_property(" residential "), Accent::Residential);
        assert_eq!(Accent::for_property("castle"), Accent::Unset);
        assert_eq!(accent_class(Accent::for_property("")), "accent--unset");
    }
}
