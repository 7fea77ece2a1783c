//! Directory request decoding.

use std::num::NonZeroU32;

use advocate_core::constants::INVALID_LIMIT;
use advocate_core::normalize::{city_display_name_to_raw_city, parse_specialty_list};
use advocate_core::pagination::PageRequest;
use advocate_core::types::SpecialtyMatch;
use advocate_db::db::query::filter::AdvocateFilter;

use crate::error::{ServiceError, ServiceResult};

/// A directory search as received from a client, already validated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectoryRequest {
    pub search_term: String,
    /// Either a bare city or "City, ST".
    pub city: String,
    pub specialties: Vec<String>,
    pub page: PageRequest,
}

impl DirectoryRequest {
    /// ## Summary
    /// Builds a request from raw query parameter values.
    ///
    /// Missing text parameters default to empty. A `page` that is missing,
    /// malformed or below 1 becomes 1. A missing or empty `limit` becomes
    /// `default_limit`.
    ///
    /// ## Errors
    /// Returns `ServiceError::ValidationError` if `limit` is present but is
    /// not a positive integer.
    pub fn from_params(
        search: Option<&str>,
        city: Option<&str>,
        specialties: Option<&str>,
        page: Option<&str>,
        limit: Option<&str>,
        default_limit: NonZeroU32,
    ) -> ServiceResult<Self> {
        let limit = parse_limit(limit, default_limit)?;
        let page = parse_page(page);

        Ok(Self {
            search_term: search.unwrap_or_default().to_owned(),
            city: city.unwrap_or_default().to_owned(),
            specialties: specialties.map(parse_specialty_list).unwrap_or_default(),
            page: PageRequest::new(page, limit),
        })
    }

    /// ## Summary
    /// Decodes the request into a store filter.
    ///
    /// The city is reduced to its stored form; specialties are already slugs.
    #[must_use]
    pub fn filter(&self, specialty_match: SpecialtyMatch) -> AdvocateFilter {
        AdvocateFilter::new(
            &self.search_term,
            city_display_name_to_raw_city(&self.city),
            &self.specialties,
        )
        .with_specialty_match(specialty_match)
    }
}

fn parse_page(raw: Option<&str>) -> i64 {
    raw.and_then(|value| value.trim().parse::<i64>().ok())
        .unwrap_or(1)
}

fn parse_limit(raw: Option<&str>, default_limit: NonZeroU32) -> ServiceResult<NonZeroU32> {
    match raw.map(str::trim) {
        None | Some("") => Ok(default_limit),
        Some(value) => value
            .parse::<NonZeroU32>()
            .map_err(|e| {
                tracing::debug!(limit = value, error = %e, "Rejected limit parameter");
                ServiceError::ValidationError(INVALID_LIMIT.to_string())
            }),
    }
}
