#![allow(clippy::expect_used)]
//! Tests for the Postgres store against a real database.
//!
//! Each test also runs its filters through [`MemoryStore`] and requires the
//! same answer, so the SQL and in-memory evaluations cannot drift apart.

use std::num::NonZeroU32;

use advocate_core::constants::ADVOCATES_ROUTE_PREFIX;
use advocate_core::pagination::PageRequest;
use advocate_core::types::SpecialtyMatch;
use advocate_db::db::query::filter::AdvocateFilter;
use advocate_db::db::store::AdvocateStore;
use advocate_service::directory::AdvocatesResponse;
use advocate_test::advocate;
use salvo::http::StatusCode;
use serde_json::json;

use super::helpers::*;

const HUNDRED: NonZeroU32 = NonZeroU32::new(100).unwrap();
const TWELVE: NonZeroU32 = NonZeroU32::new(12).unwrap();

async fn ids(store: &impl AdvocateStore, filter: &AdvocateFilter) -> Vec<i32> {
    store
        .load_page(filter, PageRequest::new(1, HUNDRED))
        .await
        .expect("page loads")
        .iter()
        .map(|a| a.id)
        .collect()
}

/// Loads `filter` from Postgres, checks the count and the in-memory answer
/// agree, and returns the ids.
async fn pg_ids(db: &TestDb, memory: &MemoryStore, filter: &AdvocateFilter) -> Vec<i32> {
    let store = db.store();
    let found = ids(&store, filter).await;

    assert_eq!(found, ids(memory, filter).await, "stores disagree on {filter:?}");
    assert_eq!(
        store.count(filter).await.expect("count"),
        u64::try_from(found.len()).expect("small result"),
        "count disagrees with page for {filter:?}"
    );
    found
}

#[test_log::test(tokio::test)]
async fn pg_specialties_require_every_slug() {
    let Some(db) = TestDb::create("specialties_all").await else {
        return;
    };
    db.seed(&sample_advocates()).await;
    let memory = MemoryStore::new(sample_advocates());

    let filter = AdvocateFilter::new("", "", &["bipolar", "lgbtq"]);
    assert_eq!(pg_ids(&db, &memory, &filter).await, vec![1, 5]);

    let filter = AdvocateFilter::new("", "", &["bipolar", "lgbtq", "adhd"]);
    assert_eq!(pg_ids(&db, &memory, &filter).await, vec![1]);

    let filter = AdvocateFilter::new("", "", &["bipolar", "ocd"]);
    assert!(pg_ids(&db, &memory, &filter).await.is_empty());

    let filter = AdvocateFilter::new("", "", &["ocd", "trauma-ptsd"])
        .with_specialty_match(SpecialtyMatch::Any);
    assert_eq!(pg_ids(&db, &memory, &filter).await, vec![3, 4]);

    db.teardown().await;
}

#[test_log::test(tokio::test)]
async fn pg_unknown_specialty_matches_nothing() {
    let Some(db) = TestDb::create("unknown_slug").await else {
        return;
    };
    db.seed(&sample_advocates()).await;
    let memory = MemoryStore::new(sample_advocates());

    let filter = AdvocateFilter::new("", "", &["nonexistent-specialty"]);
    assert!(pg_ids(&db, &memory, &filter).await.is_empty());

    db.teardown().await;
}

#[test_log::test(tokio::test)]
async fn pg_name_prefix_is_not_substring() {
    let Some(db) = TestDb::create("name_prefix").await else {
        return;
    };
    let mut records = sample_advocates();
    records.push(advocate(6, "Jörg", "Strauß", "Austin", &["adhd"]));
    records.push(advocate(7, "J%nathan", "Under_score", "Austin", &["adhd"]));
    db.seed(&records).await;
    let memory = MemoryStore::new(records);

    let cases: [(&str, Vec<i32>); 10] = [
        ("jo", vec![1, 3, 5]),
        ("JOHN", vec![1, 3]),
        ("DOE", vec![1]),
        ("ohn", vec![]),
        ("%", vec![]),
        ("J%", vec![7]),
        ("under_", vec![7]),
        ("_nder", vec![]),
        ("STRAUß", vec![6]),
        ("strauss", vec![]),
    ];
    for (term, expected) in cases {
        let filter = AdvocateFilter::new::<&str>(term, "", &[]);
        assert_eq!(pg_ids(&db, &memory, &filter).await, expected, "search {term:?}");
    }

    db.teardown().await;
}

#[test_log::test(tokio::test)]
async fn pg_city_and_groups_combine() {
    let Some(db) = TestDb::create("city").await else {
        return;
    };
    db.seed(&sample_advocates()).await;
    let memory = MemoryStore::new(sample_advocates());

    let filter = AdvocateFilter::new::<&str>("", "New York", &[]);
    assert_eq!(pg_ids(&db, &memory, &filter).await, vec![1, 4]);

    let filter = AdvocateFilter::new("jo", "New York", &["adhd"]);
    assert_eq!(pg_ids(&db, &memory, &filter).await, vec![1]);

    let filter = AdvocateFilter::new::<&str>("", "new york", &[]);
    assert!(pg_ids(&db, &memory, &filter).await.is_empty());

    db.teardown().await;
}

#[test_log::test(tokio::test)]
async fn pg_page_beyond_end_is_empty() {
    let Some(db) = TestDb::create("paging").await else {
        return;
    };
    db.seed(&numbered_advocates(25)).await;
    let store = db.store();
    let filter = AdvocateFilter::default();

    let last = store
        .load_page(&filter, PageRequest::new(3, TWELVE))
        .await
        .expect("last page loads");
    assert_eq!(last.iter().map(|a| a.id).collect::<Vec<_>>(), vec![25]);

    let beyond = store
        .load_page(&filter, PageRequest::new(10, TWELVE))
        .await
        .expect("page past the end loads");
    assert!(beyond.is_empty());

    let far_beyond = store
        .load_page(&filter, PageRequest::new(1_000_000_000_000_000_000, TWELVE))
        .await
        .expect("page past the offset range loads");
    assert!(far_beyond.is_empty());

    assert_eq!(store.count(&filter).await.expect("count"), 25);

    db.teardown().await;
}

#[test_log::test(tokio::test)]
async fn pg_distinct_cities_sorted() {
    let Some(db) = TestDb::create("cities").await else {
        return;
    };
    db.seed(&sample_advocates()).await;

    let cities = db.store().distinct_cities().await.expect("cities load");
    assert_eq!(
        cities,
        vec!["Chicago", "Los Angeles", "New York", "Springfield"]
    );

    db.teardown().await;
}

#[test_log::test(tokio::test)]
async fn pg_specialties_column_only_holds_arrays() {
    let Some(db) = TestDb::create("specialties_array").await else {
        return;
    };

    assert!(db.insert_raw_specialties(1, json!("adhd, ocd")).await.is_err());
    assert!(db.insert_raw_specialties(2, json!({"adhd": true})).await.is_err());
    db.insert_raw_specialties(3, json!(["adhd", "ocd"]))
        .await
        .expect("array tags insert");

    let filter = AdvocateFilter::new("", "", &["adhd"]);
    assert_eq!(ids(&db.store(), &filter).await, vec![3]);

    db.teardown().await;
}

#[test_log::test(tokio::test)]
async fn pg_listing_over_http() {
    let Some(db) = TestDb::create("http").await else {
        return;
    };
    db.seed(&sample_advocates()).await;
    let service = create_test_service(db.store());

    let parsed: AdvocatesResponse = get(
        &service,
        &format!("{ADVOCATES_ROUTE_PREFIX}?specialties=bipolar,lgbtq&city=New%20York,%20NY"),
    )
    .await
    .assert_status(StatusCode::OK)
    .json();

    assert_eq!(parsed.data.iter().map(|a| a.id).collect::<Vec<_>>(), vec![1]);
    assert_eq!(parsed.pagination.total_count, 1);
    assert_eq!(
        parsed.filter_options.cities,
        vec!["Chicago, IL", "Los Angeles, CA", "New York, NY", "Springfield"]
    );

    db.teardown().await;
}
