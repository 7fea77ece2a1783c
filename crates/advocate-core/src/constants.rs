/// Route component constants shared across crates
pub const API_ROUTE_COMPONENT: &str = "api";
pub const API_ROUTE_PREFIX: &str = const_str::concat!("/", API_ROUTE_COMPONENT);

pub const ADVOCATES_ROUTE_COMPONENT: &str = "advocates";
pub const ADVOCATES_ROUTE_PREFIX: &str =
    const_str::concat!(API_ROUTE_PREFIX, "/", ADVOCATES_ROUTE_COMPONENT);

pub const SPECIALTIES_ROUTE_COMPONENT: &str = "specialties";
pub const SPECIALTIES_ROUTE_PREFIX: &str =
    const_str::concat!(API_ROUTE_PREFIX, "/", SPECIALTIES_ROUTE_COMPONENT);

pub const LOCATIONS_ROUTE_COMPONENT: &str = "locations";
pub const LOCATIONS_ROUTE_PREFIX: &str =
    const_str::concat!(API_ROUTE_PREFIX, "/", LOCATIONS_ROUTE_COMPONENT);

/// Message returned to clients for any failed directory read.
pub const FETCH_ADVOCATES_FAILED: &str = "Failed to fetch advocates";

/// Message returned when the `limit` query parameter is not a positive integer.
pub const INVALID_LIMIT: &str = "limit must be a positive integer";
