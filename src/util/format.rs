use rust_decimal::{Decimal, RoundingStrategy};

use crate::domain::Price;

/// Dollar-prefixed amount with exactly two decimals.
pub fn format_price(price: Price) -> String {
    format_amount(price.value())
}

/// Rounds the exact binary value to cents, with half-cent ties going away from zero.
pub fn format_amount(amount: f64) -> String {
    match Decimal::from_f64_retain(amount) {
        Some(exact) => {
            let mut cents = exact.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
            cents.rescale(2);
            format!("${cents}")
        }
        None => format!("${amount:.2}"),
    }
}

/// Turns a kebab-case key into a title, e.g. `within-a-month` -> `Within A Month`.
pub fn humanize_key(key: &str) -> String {
    key.split('-')
        .filter(|segment| !segment.is_empty())
        .map(|segment| {
            let mut chars = segment.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{estimate, Selections};

    #[test]
    fn prices_render_with_two_decimals() {
        assert_eq!(format_price(estimate(&Selections::default())), "$0.00");
        assert_eq!(format_amount(1840.0), "$1840.00");
        assert_eq!(format_amount(12.346), "$12.35");
        assert_eq!(format_amount(0.5), "$0.50");
    }

    #[test]
    fn half_cent_ties_round_up() {
        assert_eq!(format_amount(0.625), "$0.63");
        assert_eq!(format_amount(0.125), "$0.13");
        // 1.005 is stored just below the tie
        assert_eq!(format_amount(1.005), "$1.00");
    }

    #[test]
    fn tiny_area_quote_rounds_like_the_form() {
        let selections = Selections {
            area_size: 0.0625,
            ..Selections::default()
        };
        assert_eq!(format_price(estimate(&selections)), "$0.63");
    }

    #[test]
    fn keys_become_titles() {
        assert_eq!(humanize_key("within-a-month"), "Within A Month");
        assert_eq!(humanize_key("japanese"), "Japanese");
        assert_eq!(humanize_key("under-1000"), "Under 1000");
        assert_eq!(humanize_key(""), "");
    }
}
