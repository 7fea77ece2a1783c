mod advocates;
mod app_specific;
mod reference;
pub mod response;

use salvo::Router;

// Re-export route constants from core
pub use advocate_core::constants::{
    ADVOCATES_ROUTE_COMPONENT, ADVOCATES_ROUTE_PREFIX, API_ROUTE_COMPONENT, API_ROUTE_PREFIX,
    LOCATIONS_ROUTE_COMPONENT, LOCATIONS_ROUTE_PREFIX, SPECIALTIES_ROUTE_COMPONENT,
    SPECIALTIES_ROUTE_PREFIX,
};

/// ## Summary
/// Constructs the main API router.
///
/// ## Errors
/// Returns an error if any child route handler fails to initialize.
pub fn routes() -> anyhow::Result<Router> {
    Ok(Router::with_path(API_ROUTE_COMPONENT)
        .push(app_specific::routes())
        .push(advocates::routes())
        .push(reference::routes()))
}
