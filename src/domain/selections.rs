use serde::{Deserialize, Deserializer, Serialize};

use super::rates::Extra;

/// Normalised customer choices, the only input pricing looks at.
///
/// Empty strings mean "nothing selected" for every categorical field.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct Selections {
    pub service_type: String,
    pub property_type: String,
    pub area_size: f64,
    pub garden_style: String,
    pub number_of_plants: u32,
    pub project_urgency: String,
    pub soil_type: String,
    pub extras: Extras,
    pub budget_band: String,
}

/// Which add-ons were ticked.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<Extra>", into = "Vec<Extra>")]
pub struct Extras {
    pub irrigation: bool,
    pub pathways: bool,
    pub seating: bool,
}

impl Extras {
    pub fn contains(&self, extra: Extra) -> bool {
        match extra {
            Extra::Irrigation => self.irrigation,
            Extra::Pathways => self.pathways,
            Extra::Seating => self.seating,
        }
    }

    pub fn set(&mut self, extra: Extra, enabled: bool) {
        match extra {
            Extra::Irrigation => self.irrigation = enabled,
            Extra::Pathways => self.pathways = enabled,
            Extra::Seating => self.seating = enabled,
        }
    }

    pub fn toggle(&mut self, extra: Extra) {
        let current = self.contains(extra);
        self.set(extra, !current);
    }

    /// Selected extras in display order.
    pub fn iter(&self) -> impl Iterator<Item = Extra> + '_ {
        Extra::ALL.into_iter().filter(|extra| self.contains(*extra))
    }
}

impl FromIterator<Extra> for Extras {
    fn from_iter<I: IntoIterator<Item = Extra>>(iter: I) -> Self {
        let mut extras = Extras::default();
        for extra in iter {
            extras.set(extra, true);
        }
        extras
    }
}

impl From<Vec<Extra>> for Extras {
    fn from(list: Vec<Extra>) -> Self {
        list.into_iter().collect()
    }
}

impl From<Extras> for Vec<Extra> {
    fn from(extras: Extras) -> Self {
        extras.iter().collect()
    }
}

/// Raw form values exactly as a host collected them, before normalisation.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct FormSnapshot {
    pub service_type: String,
    pub property_type: String,
    #[serde(deserialize_with = "string_or_number")]
    pub area_size: String,
    pub garden_style: String,
    #[serde(deserialize_with = "string_or_number")]
    pub number_of_plants: String,
    pub project_urgency: String,
    pub soil_type: String,
    pub extras: Extras,
    pub budget: String,
}

impl From<&FormSnapshot> for Selections {
    fn from(form: &FormSnapshot) -> Self {
        let selections = Selections {
            service_type: normalize_key(&form.service_type),
            property_type: normalize_key(&form.property_type),
            area_size: normalize_area(&form.area_size),
            garden_style: normalize_key(&form.garden_style),
            number_of_plants: normalize_plant_count(&form.number_of_plants),
            project_urgency: normalize_key(&form.project_urgency),
            soil_type: normalize_key(&form.soil_type),
            extras: form.extras,
            budget_band: normalize_key(&form.budget),
        };
        tracing::trace!(?selections, "normalised form snapshot");
        selections
    }
}

fn normalize_key(raw: &str) -> String {
    raw.trim().to_string()
}

/// Area in square metres; anything unparseable, negative or infinite counts as zero.
pub fn normalize_area(raw: &str) -> f64 {
    parse_leading_float(raw).map_or(0.0, clamp_area)
}

/// Negative, NaN and infinite areas count as zero.
pub fn clamp_area(area: f64) -> f64 {
    if area.is_finite() && area > 0.0 {
        area
    } else {
        0.0
    }
}

pub fn normalize_plant_count(raw: &str) -> u32 {
    match parse_leading_int(raw) {
        Some(value) if value > 0 => u32::try_from(value).unwrap_or(u32::MAX),
        _ => 0,
    }
}

/// Parses the longest numeric prefix, so `"12.5m"` reads as `12.5`.
fn parse_leading_float(raw: &str) -> Option<f64> {
    let text = raw.trim_start();
    let bytes = text.as_bytes();
    let mut end = 0;

    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end += 1;
    }
    let int_digits = count_digits(&bytes[end..]);
    end += int_digits;

    let mut frac_digits = 0;
    if bytes.get(end) == Some(&b'.') {
        frac_digits = count_digits(&bytes[end + 1..]);
        if int_digits > 0 || frac_digits > 0 {
            end += 1 + frac_digits;
        }
    }
    if int_digits == 0 && frac_digits == 0 {
        return None;
    }

    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut exp_end = end + 1;
        if matches!(bytes.get(exp_end), Some(b'+' | b'-')) {
            exp_end += 1;
        }
        let exp_digits = count_digits(&bytes[exp_end..]);
        if exp_digits > 0 {
            end = exp_end + exp_digits;
        }
    }

    text[..end].parse().ok()
}

/// Parses a leading base-10 integer, so `"12.7"` reads as `12`.
fn parse_leading_int(raw: &str) -> Option<i64> {
    let text = raw.trim_start();
    let bytes = text.as_bytes();
    let (negative, start) = match bytes.first() {
        Some(b'-') => (true, 1),
        Some(b'+') => (false, 1),
        _ => (false, 0),
    };
    let digits = count_digits(&bytes[start..]);
    if digits == 0 {
        return None;
    }

    let magnitude = text[start..start + digits]
        .bytes()
        .fold(0_i64, |acc, digit| {
            acc.saturating_mul(10).saturating_add(i64::from(digit - b'0'))
        });
    Some(if negative { -magnitude } else { magnitude })
}

fn count_digits(bytes: &[u8]) -> usize {
    bytes.iter().take_while(|b| b.is_ascii_digit()).count()
}

fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Text(String),
        Number(f64),
        Missing(()),
    }

    Ok(match Raw::deserialize(deserializer)? {
        Raw::Text(text) => text,
        Raw::Number(number) => number.to_string(),
        Raw::Missing(()) => String::new(),
    })
}
