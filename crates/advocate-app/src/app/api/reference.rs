use salvo::caching_headers::CachingHeaders;
use salvo::{Response, Router, handler, writing::Json};

use advocate_core::constants::{LOCATIONS_ROUTE_COMPONENT, SPECIALTIES_ROUTE_COMPONENT};
use advocate_service::reference::{location_entries, specialty_groups};

/// ## Summary
/// GET /api/specialties - The specialty catalog grouped by category.
#[handler]
async fn list_specialties(res: &mut Response) {
    res.render(Json(specialty_groups()));
}

/// ## Summary
/// GET /api/locations - Every location, sorted by display name.
#[handler]
async fn list_locations(res: &mut Response) {
    res.render(Json(location_entries()));
}

#[must_use]
pub fn routes() -> Router {
    Router::new()
        .hoop(CachingHeaders::new())
        .push(Router::with_path(SPECIALTIES_ROUTE_COMPONENT).get(list_specialties))
        .push(Router::with_path(LOCATIONS_ROUTE_COMPONENT).get(list_locations))
}
