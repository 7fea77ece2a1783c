//! Tests for store failures surfacing through the advocates listing.

use advocate_core::constants::{ADVOCATES_ROUTE_PREFIX, FETCH_ADVOCATES_FAILED};
use salvo::http::StatusCode;
use serde_json::{Value, json};

use super::helpers::*;

#[test_log::test(tokio::test)]
async fn store_failure_returns_fixed_error() {
    let service = create_test_service(FailingStore);

    let response = get(&service, ADVOCATES_ROUTE_PREFIX)
        .await
        .assert_status(StatusCode::INTERNAL_SERVER_ERROR);

    let body: Value = response.json();
    assert_eq!(body, json!({ "error": FETCH_ADVOCATES_FAILED }));
}

#[test_log::test(tokio::test)]
async fn store_failure_with_filters_returns_fixed_error() {
    let service = create_test_service(FailingStore);

    let response = get(
        &service,
        &format!("{ADVOCATES_ROUTE_PREFIX}?search=jo&city=Austin&specialties=adhd&page=2"),
    )
    .await
    .assert_status(StatusCode::INTERNAL_SERVER_ERROR);

    let body: Value = response.json();
    assert_eq!(body, json!({ "error": "Failed to fetch advocates" }));
}

#[test_log::test(tokio::test)]
async fn filter_option_failure_discards_page() {
    let service = create_test_service(CitiesFailingStore {
        inner: MemoryStore::new(sample_advocates()),
    });

    let response = get(&service, ADVOCATES_ROUTE_PREFIX)
        .await
        .assert_status(StatusCode::INTERNAL_SERVER_ERROR);

    let body: Value = response.json();
    assert!(body.get("data").is_none());
    assert!(body.get("pagination").is_none());
    assert_eq!(body["error"], FETCH_ADVOCATES_FAILED);
}
