#![allow(clippy::expect_used)]
//! Tests for the reference catalog endpoints.

use advocate_core::constants::{LOCATIONS_ROUTE_PREFIX, SPECIALTIES_ROUTE_PREFIX};
use advocate_core::reference::{LOCATIONS, SPECIALTIES};
use salvo::http::StatusCode;
use serde_json::Value;

use super::helpers::*;

#[test_log::test(tokio::test)]
async fn specialties_are_grouped_by_category() {
    let service = sample_service();

    let body: Value = get(&service, SPECIALTIES_ROUTE_PREFIX)
        .await
        .assert_status(StatusCode::OK)
        .json();

    let groups = body.as_array().expect("groups array");
    let total: usize = groups
        .iter()
        .map(|g| g["specialties"].as_array().map_or(0, Vec::len))
        .sum();
    assert_eq!(total, SPECIALTIES.len());

    let first = &groups[0]["specialties"][0];
    assert!(first["slug"].is_string());
    assert!(first["label"].is_string());
    assert!(first.get("subLabel").is_some());
    assert_eq!(first["category"], groups[0]["category"]);
}

#[test_log::test(tokio::test)]
async fn locations_are_sorted_by_display_name() {
    let service = sample_service();

    let body: Value = get(&service, LOCATIONS_ROUTE_PREFIX)
        .await
        .assert_status(StatusCode::OK)
        .json();

    let entries = body.as_array().expect("locations array");
    assert_eq!(entries.len(), LOCATIONS.len());

    let names: Vec<&str> = entries
        .iter()
        .filter_map(|e| e["displayName"].as_str())
        .collect();
    let mut sorted = names.clone();
    sorted.sort_unstable();
    assert_eq!(names, sorted);

    let austin = entries
        .iter()
        .find(|e| e["slug"] == "austin")
        .expect("austin is listed");
    assert_eq!(austin["displayName"], "Austin, TX");
    assert_eq!(austin["state"], "TX");
}

#[test_log::test(tokio::test)]
async fn reference_endpoints_ignore_store_failure() {
    let service = create_test_service(FailingStore);

    let specialties: Value = get(&service, SPECIALTIES_ROUTE_PREFIX)
        .await
        .assert_status(StatusCode::OK)
        .json();
    assert!(specialties.is_array());

    let locations: Value = get(&service, LOCATIONS_ROUTE_PREFIX)
        .await
        .assert_status(StatusCode::OK)
        .json();
    assert!(locations.is_array());
}
