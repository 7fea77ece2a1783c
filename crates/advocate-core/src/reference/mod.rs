//! Static reference tables.
//!
//! Both tables are immutable for the lifetime of the process and safe to
//! read from any task without synchronisation.

pub mod locations;
pub mod specialties;

pub use locations::{
    LOCATIONS, Location, all_location_display_names, all_location_slugs, location_by_city,
    location_by_slug,
};
pub use specialties::{
    SPECIALTIES, Specialty, all_specialty_labels, specialties_by_category, specialty_by_label,
    specialty_by_slug,
};
