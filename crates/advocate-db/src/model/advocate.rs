//! Advocate records.

use advocate_core::normalize::specialty_tags_from_json;
use diesel::{pg::Pg, prelude::*};
use serde::{Deserialize, Serialize};

use crate::db::schema;

/// Raw `advocates` row as stored.
#[derive(Debug, Clone, PartialEq, Queryable, Selectable)]
#[diesel(table_name = schema::advocates)]
#[diesel(check_for_backend(Pg))]
pub struct AdvocateRow {
    pub id: i32,
    pub first_name: String,
    pub last_name: String,
    pub city: String,
    pub degree: String,
    /// JSONB tag column; normally an array of specialty slugs.
    pub specialties: serde_json::Value,
    pub years_of_experience: i32,
    pub phone_number: i64,
    pub created_at: Option<chrono::DateTime<chrono::Utc>>,
}

/// An advocate in storage form: raw city, specialty slugs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Advocate {
    pub id: i32,
    pub first_name: String,
    pub last_name: String,
    pub city: String,
    pub degree: String,
    pub specialties: Vec<String>,
    pub years_of_experience: i32,
    pub phone_number: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<chrono::DateTime<chrono::Utc>>,
}

impl Advocate {
    /// ## Summary
    /// Returns true if the advocate carries `slug`.
    #[must_use]
    pub fn has_specialty(&self, slug: &str) -> bool {
        self.specialties.iter().any(|s| s == slug)
    }
}

impl From<AdvocateRow> for Advocate {
    fn from(row: AdvocateRow) -> Self {
        Self {
            id: row.id,
            first_name: row.first_name,
            last_name: row.last_name,
            city: row.city,
            degree: row.degree,
            specialties: specialty_tags_from_json(&row.specialties),
            years_of_experience: row.years_of_experience,
            phone_number: row.phone_number,
            created_at: row.created_at,
        }
    }
}
