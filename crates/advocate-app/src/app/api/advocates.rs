use salvo::{Depot, Request, Response, Router, handler, http::StatusCode, writing::Json};
use tracing::error;

use advocate_core::constants::{ADVOCATES_ROUTE_COMPONENT, FETCH_ADVOCATES_FAILED};
use advocate_service::directory::{DirectoryRequest, search_advocates};
use advocate_service::error::ServiceError;

use super::response::ErrorResponse;
use crate::config::get_config_from_depot;
use crate::db_handler::get_store_from_depot;

fn render_failure(res: &mut Response) {
    res.status_code(StatusCode::INTERNAL_SERVER_ERROR);
    res.render(Json(ErrorResponse::new(FETCH_ADVOCATES_FAILED)));
}

/// ## Summary
/// GET /api/advocates - One page of the directory with filter choices.
///
/// Query parameters: `search`, `city` ("City, ST" or bare city),
/// `specialties` (comma-separated slugs), `page`, `limit`.
///
/// ## Errors
/// Returns HTTP 400 if `limit` is not a positive integer
/// Returns HTTP 500 with a fixed message if any store read fails
#[handler]
async fn list_advocates(req: &mut Request, depot: &mut Depot, res: &mut Response) {
    let settings = match get_config_from_depot(depot) {
        Ok(settings) => settings,
        Err(e) => {
            error!(error = ?e, "Failed to get configuration");
            render_failure(res);
            return;
        }
    };

    let store = match get_store_from_depot(depot) {
        Ok(store) => store,
        Err(e) => {
            error!(error = ?e, "Failed to get advocate store");
            render_failure(res);
            return;
        }
    };

    let search = req.query::<String>("search");
    let city = req.query::<String>("city");
    let specialties = req.query::<String>("specialties");
    let page = req.query::<String>("page");
    let limit = req.query::<String>("limit");

    let request = match DirectoryRequest::from_params(
        search.as_deref(),
        city.as_deref(),
        specialties.as_deref(),
        page.as_deref(),
        limit.as_deref(),
        settings.directory.default_limit,
    ) {
        Ok(request) => request,
        Err(ServiceError::ValidationError(message)) => {
            res.status_code(StatusCode::BAD_REQUEST);
            res.render(Json(ErrorResponse::new(message)));
            return;
        }
        Err(e) => {
            error!(error = ?e, "Failed to decode directory request");
            render_failure(res);
            return;
        }
    };

    match search_advocates(store.as_ref(), &request, settings.directory.specialty_match).await {
        Ok(response) => {
            res.status_code(StatusCode::OK);
            res.render(Json(response));
        }
        Err(e) => {
            error!(error = ?e, "Error fetching advocates");
            render_failure(res);
        }
    }
}

#[must_use]
pub fn routes() -> Router {
    Router::with_path(ADVOCATES_ROUTE_COMPONENT).get(list_advocates)
}
