//! Conversion between stored values and displayed values.
//!
//! Specialties are stored as slugs and shown as labels; cities are stored as
//! bare city names and shown as "City, ST".
//!
//! Unknown keys are handled differently per table: an unknown specialty is
//! dropped, while an unknown city is passed through unchanged so the user
//! still sees it. Callers rely on both behaviours.
// TODO: settle on a single unknown-key policy for both tables once the stored
// data has been audited for raw labels in the specialties column.

use serde_json::Value;

use crate::reference::{Location, location_by_city, specialty_by_label, specialty_by_slug};

/// ## Summary
/// Returns the label for a specialty slug, or `None` if the slug is unknown.
#[must_use]
pub fn specialty_slug_to_label(slug: &str) -> Option<&'static str> {
    specialty_by_slug(slug).map(|s| s.label)
}

/// ## Summary
/// Returns the slug for an exact (case-sensitive) specialty label.
#[must_use]
pub fn specialty_label_to_slug(label: &str) -> Option<&'static str> {
    specialty_by_label(label).map(|s| s.slug)
}

/// ## Summary
/// Maps slugs to labels, dropping any slug that is not in the catalog.
///
/// Order and duplicates of the input are preserved.
#[must_use]
pub fn specialty_slugs_to_labels<S: AsRef<str>>(slugs: &[S]) -> Vec<&'static str> {
    slugs
        .iter()
        .filter_map(|slug| specialty_slug_to_label(slug.as_ref()))
        .collect()
}

/// ## Summary
/// Maps labels to slugs, dropping any label that is not in the catalog.
#[must_use]
pub fn specialty_labels_to_slugs<S: AsRef<str>>(labels: &[S]) -> Vec<&'static str> {
    labels
        .iter()
        .filter_map(|label| specialty_label_to_slug(label.as_ref()))
        .collect()
}

/// ## Summary
/// Extracts the stored city from either display form ("Austin, TX") or a
/// bare city name ("Austin").
///
/// Everything before the first comma is taken and trimmed; input without a
/// comma is returned as-is.
#[must_use]
pub fn city_display_name_to_raw_city(display: &str) -> &str {
    match display.split_once(',') {
        Some((city, _)) => city.trim(),
        None => display,
    }
}

/// ## Summary
/// Renders a stored city as "City, ST", or returns it unchanged if it is not
/// in the location catalog.
#[must_use]
pub fn raw_city_to_display_name(raw_city: &str) -> String {
    location_by_city(raw_city).map_or_else(|| raw_city.to_owned(), Location::display_name)
}

/// ## Summary
/// Renders each stored city for display; unknown cities pass through.
#[must_use]
pub fn raw_cities_to_display_names<S: AsRef<str>>(raw_cities: &[S]) -> Vec<String> {
    raw_cities
        .iter()
        .map(|city| raw_city_to_display_name(city.as_ref()))
        .collect()
}

/// ## Summary
/// Maps display names (or bare city names) to location slugs, dropping any
/// city that is not in the catalog.
#[must_use]
pub fn location_display_names_to_slugs<S: AsRef<str>>(display_names: &[S]) -> Vec<&'static str> {
    display_names
        .iter()
        .filter_map(|name| location_by_city(city_display_name_to_raw_city(name.as_ref())))
        .map(|l| l.slug)
        .collect()
}

/// ## Summary
/// Formats a ten-digit phone number as `555-123-4567`.
///
/// Numbers with any other digit count are rendered without separators.
#[must_use]
pub fn format_phone_number(phone_number: i64) -> String {
    let digits = phone_number.to_string();
    if digits.len() == 10 && digits.bytes().all(|b| b.is_ascii_digit()) {
        format!("{}-{}-{}", &digits[..3], &digits[3..6], &digits[6..])
    } else {
        digits
    }
}

/// ## Summary
/// Splits a comma-separated `specialties` query value into slugs.
///
/// Empty segments are discarded; segments are otherwise taken literally.
#[must_use]
pub fn parse_specialty_list(param: &str) -> Vec<String> {
    param
        .split(',')
        .filter(|s| !s.is_empty())
        .map(str::to_owned)
        .collect()
}

/// ## Summary
/// Reads a stored specialties column value as a list of tags.
///
/// A JSON array yields its elements as strings. A JSON string is parsed as an
/// array when it looks like one, otherwise split on commas with each part
/// trimmed and empties dropped. Any other value has no tags.
#[must_use]
pub fn specialty_tags_from_json(value: &Value) -> Vec<String> {
    match value {
        Value::Array(items) => items.iter().map(tag_from_json).collect(),
        Value::String(text) => {
            let trimmed = text.trim();
            if trimmed.starts_with('[') && trimmed.ends_with(']') {
                if let Ok(parsed) = serde_json::from_str::<Value>(trimmed) {
                    return match parsed {
                        Value::Array(items) => items.iter().map(tag_from_json).collect(),
                        _ => Vec::new(),
                    };
                }
            }
            trimmed
                .split(',')
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(str::to_owned)
                .collect()
        }
        _ => Vec::new(),
    }
}

fn tag_from_json(item: &Value) -> String {
    match item {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
