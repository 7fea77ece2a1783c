//! Response payloads for directory search.

use advocate_core::normalize::{
    format_phone_number, raw_city_to_display_name, specialty_slugs_to_labels,
};
use advocate_core::pagination::Pagination;
use advocate_db::model::advocate::Advocate;
use serde::{Deserialize, Serialize};

/// An advocate in display form: "City, ST" and specialty labels.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdvocateView {
    pub id: i32,
    pub first_name: String,
    pub last_name: String,
    pub city: String,
    pub degree: String,
    pub specialties: Vec<String>,
    pub years_of_experience: i32,
    pub phone_number: i64,
    pub formatted_phone_number: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<chrono::DateTime<chrono::Utc>>,
}

impl From<Advocate> for AdvocateView {
    fn from(advocate: Advocate) -> Self {
        Self {
            id: advocate.id,
            city: raw_city_to_display_name(&advocate.city),
            specialties: specialty_slugs_to_labels(&advocate.specialties)
                .into_iter()
                .map(str::to_owned)
                .collect(),
            formatted_phone_number: format_phone_number(advocate.phone_number),
            first_name: advocate.first_name,
            last_name: advocate.last_name,
            degree: advocate.degree,
            years_of_experience: advocate.years_of_experience,
            phone_number: advocate.phone_number,
            created_at: advocate.created_at,
        }
    }
}

/// Choices offered by the directory's filter controls.
///
/// Always derived from the whole directory, never from the filtered page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterOptions {
    pub cities: Vec<String>,
    pub specialties: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdvocatesResponse {
    pub data: Vec<AdvocateView>,
    pub pagination: Pagination,
    pub filter_options: FilterOptions,
}
