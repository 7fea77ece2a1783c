//! Directory search service layer.

use advocate_core::normalize::raw_cities_to_display_names;
use advocate_core::pagination::Pagination;
use advocate_core::reference::all_specialty_labels;
use advocate_core::types::SpecialtyMatch;
use advocate_db::db::store::AdvocateStore;

use crate::directory::request::DirectoryRequest;
use crate::directory::view::{AdvocateView, AdvocatesResponse, FilterOptions};
use crate::error::ServiceResult;

/// ## Summary
/// Runs a directory search and assembles the full response.
///
/// The page read, the filtered count and the distinct-city read are issued
/// together. If any of them fails the whole search fails and nothing partial
/// is returned.
///
/// ## Side Effects
/// Reads from the store three times.
///
/// ## Errors
/// Returns `ServiceError::DatabaseError` if any store read fails.
#[tracing::instrument(skip(store, request), fields(
    page = request.page.page(),
    limit = request.page.limit().get(),
))]
pub async fn search_advocates<S>(
    store: &S,
    request: &DirectoryRequest,
    specialty_match: SpecialtyMatch,
) -> ServiceResult<AdvocatesResponse>
where
    S: AdvocateStore + ?Sized,
{
    let filter = request.filter(specialty_match);

    let (records, total_count, raw_cities) = tokio::try_join!(
        store.load_page(&filter, request.page),
        store.count(&filter),
        store.distinct_cities(),
    )?;

    tracing::debug!(
        total_count,
        returned = records.len(),
        "Directory search complete"
    );

    Ok(AdvocatesResponse {
        data: records.into_iter().map(AdvocateView::from).collect(),
        pagination: Pagination::new(total_count, request.page),
        filter_options: filter_options(&raw_cities),
    })
}

/// ## Summary
/// Builds the filter choices from the directory's distinct stored cities.
///
/// Cities are rendered as "City, ST" where known, then sorted and
/// deduplicated. Specialties are always the whole catalog.
#[must_use]
pub fn filter_options<S: AsRef<str>>(raw_cities: &[S]) -> FilterOptions {
    let mut cities = raw_cities_to_display_names(raw_cities);
    cities.sort();
    cities.dedup();

    FilterOptions {
        cities,
        specialties: all_specialty_labels()
            .into_iter()
            .map(str::to_owned)
            .collect(),
    }
}
