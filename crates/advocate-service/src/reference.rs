//! Reference catalog payloads.

use advocate_core::reference::{LOCATIONS, Specialty, specialties_by_category};
use serde::Serialize;

/// One category of the specialty catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SpecialtyGroup {
    pub category: &'static str,
    pub specialties: Vec<Specialty>,
}

/// A location with its rendered display name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LocationEntry {
    pub slug: &'static str,
    pub city: &'static str,
    pub state: &'static str,
    pub display_name: String,
}

/// ## Summary
/// Returns the specialty catalog grouped by category, categories in name
/// order and specialties in label order.
#[must_use]
pub fn specialty_groups() -> Vec<SpecialtyGroup> {
    specialties_by_category()
        .into_iter()
        .map(|(category, specialties)| SpecialtyGroup {
            category,
            specialties: specialties.into_iter().copied().collect(),
        })
        .collect()
}

/// ## Summary
/// Returns every location, sorted by display name.
#[must_use]
pub fn location_entries() -> Vec<LocationEntry> {
    let mut entries: Vec<LocationEntry> = LOCATIONS
        .iter()
        .map(|location| LocationEntry {
            slug: location.slug,
            city: location.city,
            state: location.state,
            display_name: location.display_name(),
        })
        .collect();
    entries.sort_by(|a, b| a.display_name.cmp(&b.display_name));
    entries
}
