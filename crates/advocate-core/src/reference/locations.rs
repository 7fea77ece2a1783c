//! Location catalog.

use std::collections::HashMap;
use std::sync::LazyLock;

use serde::Serialize;

/// A city advocates can be listed in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Location {
    pub slug: &'static str,
    /// Display name, unique across the catalog. Also the value stored on
    /// advocate records.
    pub city: &'static str,
    /// Two-letter uppercase state abbreviation.
    pub state: &'static str,
}

impl Location {
    const fn new(slug: &'static str, city: &'static str, state: &'static str) -> Self {
        Self { slug, city, state }
    }

    /// ## Summary
    /// Renders the location as "City, ST".
    #[must_use]
    pub fn display_name(&self) -> String {
        format!("{}, {}", self.city, self.state)
    }
}

pub static LOCATIONS: &[Location] = &[
    Location::new("atlanta", "Atlanta", "GA"),
    Location::new("austin", "Austin", "TX"),
    Location::new("boston", "Boston", "MA"),
    Location::new("buffalo", "Buffalo", "NY"),
    Location::new("charlotte", "Charlotte", "NC"),
    Location::new("chicago", "Chicago", "IL"),
    Location::new("cincinnati", "Cincinnati", "OH"),
    Location::new("cleveland", "Cleveland", "OH"),
    Location::new("columbus", "Columbus", "OH"),
    Location::new("dallas", "Dallas", "TX"),
    Location::new("denver", "Denver", "CO"),
    Location::new("fort-worth", "Fort Worth", "TX"),
    Location::new("houston", "Houston", "TX"),
    Location::new("jacksonville", "Jacksonville", "FL"),
    Location::new("kansas-city", "Kansas City", "MO"),
    Location::new("las-vegas", "Las Vegas", "NV"),
    Location::new("los-angeles", "Los Angeles", "CA"),
    Location::new("miami", "Miami", "FL"),
    Location::new("minneapolis", "Minneapolis", "MN"),
    Location::new("nashville", "Nashville", "TN"),
    Location::new("new-orleans", "New Orleans", "LA"),
    Location::new("new-york", "New York", "NY"),
    Location::new("norfolk", "Norfolk", "VA"),
    Location::new("orlando", "Orlando", "FL"),
    Location::new("philadelphia", "Philadelphia", "PA"),
    Location::new("phoenix", "Phoenix", "AZ"),
    Location::new("pittsburgh", "Pittsburgh", "PA"),
    Location::new("portland", "Portland", "OR"),
    Location::new("raleigh", "Raleigh", "NC"),
    Location::new("richmond", "Richmond", "VA"),
    Location::new("sacramento", "Sacramento", "CA"),
    Location::new("salt-lake-city", "Salt Lake City", "UT"),
    Location::new("san-antonio", "San Antonio", "TX"),
    Location::new("san-diego", "San Diego", "CA"),
    Location::new("san-francisco", "San Francisco", "CA"),
    Location::new("san-jose", "San Jose", "CA"),
    Location::new("seattle", "Seattle", "WA"),
    Location::new("spokane", "Spokane", "WA"),
    Location::new("st-louis", "St. Louis", "MO"),
    Location::new("tampa", "Tampa", "FL"),
];

static BY_SLUG: LazyLock<HashMap<&'static str, &'static Location>> =
    LazyLock::new(|| LOCATIONS.iter().map(|l| (l.slug, l)).collect());

static BY_CITY: LazyLock<HashMap<&'static str, &'static Location>> =
    LazyLock::new(|| LOCATIONS.iter().map(|l| (l.city, l)).collect());

/// ## Summary
/// Looks up a location by its exact slug.
#[must_use]
pub fn location_by_slug(slug: &str) -> Option<&'static Location> {
    BY_SLUG.get(slug).copied()
}

/// ## Summary
/// Looks up a location by its exact, case-sensitive city name.
#[must_use]
pub fn location_by_city(city: &str) -> Option<&'static Location> {
    BY_CITY.get(city).copied()
}

/// ## Summary
/// Returns every location as "City, ST", sorted.
#[must_use]
pub fn all_location_display_names() -> Vec<String> {
    let mut names: Vec<String> = LOCATIONS.iter().map(Location::display_name).collect();
    names.sort();
    names
}

/// ## Summary
/// Returns every location slug, sorted.
#[must_use]
pub fn all_location_slugs() -> Vec<&'static str> {
    let mut slugs: Vec<&'static str> = LOCATIONS.iter().map(|l| l.slug).collect();
    slugs.sort_unstable();
    slugs
}
