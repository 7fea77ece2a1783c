//! Advocate directory - integration test support.
//!
//! Provides in-memory [`AdvocateStore`] implementations, fixture records and a
//! helper that wires them into the real API router so tests can drive the
//! HTTP surface without a database.

use std::sync::Arc;

use futures::future::BoxFuture;
use salvo::{Router, Service};

use advocate_app::app::api::routes;
use advocate_app::config::ConfigHandler;
use advocate_app::db_handler::StoreHandler;
use advocate_core::config::Settings;
use advocate_core::pagination::PageRequest;
use advocate_core::types::SpecialtyMatch;
use advocate_db::db::query::filter::AdvocateFilter;
use advocate_db::db::store::AdvocateStore;
use advocate_db::error::{DbError, DbResult};
use advocate_db::model::advocate::Advocate;

pub use advocate_app as app;
pub use advocate_core as core;
pub use advocate_db as db;
pub use advocate_service as service;

/// Store that evaluates filters against a fixed list of advocates.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    advocates: Arc<Vec<Advocate>>,
}

impl MemoryStore {
    #[must_use]
    pub fn new(mut advocates: Vec<Advocate>) -> Self {
        advocates.sort_by_key(|a| a.id);
        Self {
            advocates: Arc::new(advocates),
        }
    }

    fn matching<'a>(&'a self, filter: &'a AdvocateFilter) -> impl Iterator<Item = &'a Advocate> {
        self.advocates.iter().filter(move |a| filter.matches(a))
    }
}

impl AdvocateStore for MemoryStore {
    fn load_all(&self) -> BoxFuture<'_, DbResult<Vec<Advocate>>> {
        Box::pin(async move { Ok(self.advocates.as_ref().clone()) })
    }

    fn load_page<'a>(
        &'a self,
        filter: &'a AdvocateFilter,
        page: PageRequest,
    ) -> BoxFuture<'a, DbResult<Vec<Advocate>>> {
        Box::pin(async move {
            let offset = usize::try_from(page.offset()).unwrap_or(usize::MAX);
            let limit = usize::try_from(page.limit().get()).unwrap_or(usize::MAX);
            Ok(self
                .matching(filter)
                .skip(offset)
                .take(limit)
                .cloned()
                .collect())
        })
    }

    fn count<'a>(&'a self, filter: &'a AdvocateFilter) -> BoxFuture<'a, DbResult<u64>> {
        Box::pin(async move {
            let total = self.matching(filter).count();
            Ok(u64::try_from(total).unwrap_or(u64::MAX))
        })
    }
}

/// Store whose every read fails, standing in for an unreachable database.
#[derive(Debug, Clone, Copy, Default)]
pub struct FailingStore;

impl FailingStore {
    fn unavailable<T>() -> DbResult<T> {
        Err(DbError::Unavailable("connection refused".to_string()))
    }
}

impl AdvocateStore for FailingStore {
    fn load_all(&self) -> BoxFuture<'_, DbResult<Vec<Advocate>>> {
        Box::pin(async { Self::unavailable() })
    }

    fn load_page<'a>(
        &'a self,
        _filter: &'a AdvocateFilter,
        _page: PageRequest,
    ) -> BoxFuture<'a, DbResult<Vec<Advocate>>> {
        Box::pin(async { Self::unavailable() })
    }

    fn count<'a>(&'a self, _filter: &'a AdvocateFilter) -> BoxFuture<'a, DbResult<u64>> {
        Box::pin(async { Self::unavailable() })
    }
}

/// Store that serves pages but fails when listing cities.
#[derive(Debug, Clone, Default)]
pub struct CitiesFailingStore {
    pub inner: MemoryStore,
}

impl AdvocateStore for CitiesFailingStore {
    fn load_all(&self) -> BoxFuture<'_, DbResult<Vec<Advocate>>> {
        self.inner.load_all()
    }

    fn load_page<'a>(
        &'a self,
        filter: &'a AdvocateFilter,
        page: PageRequest,
    ) -> BoxFuture<'a, DbResult<Vec<Advocate>>> {
        self.inner.load_page(filter, page)
    }

    fn count<'a>(&'a self, filter: &'a AdvocateFilter) -> BoxFuture<'a, DbResult<u64>> {
        self.inner.count(filter)
    }

    fn distinct_cities(&self) -> BoxFuture<'_, DbResult<Vec<String>>> {
        Box::pin(async { FailingStore::unavailable() })
    }
}

/// ## Summary
/// Builds an advocate record in storage form.
#[must_use]
pub fn advocate(
    id: i32,
    first_name: &str,
    last_name: &str,
    city: &str,
    specialties: &[&str],
) -> Advocate {
    Advocate {
        id,
        first_name: first_name.to_string(),
        last_name: last_name.to_string(),
        city: city.to_string(),
        degree: "MD".to_string(),
        specialties: specialties.iter().map(|s| (*s).to_string()).collect(),
        years_of_experience: 10,
        phone_number: 5_551_234_567,
        created_at: None,
    }
}

/// ## Summary
/// A small directory covering name, city and specialty filtering cases.
#[must_use]
pub fn sample_advocates() -> Vec<Advocate> {
    vec![
        advocate(1, "John", "Doe", "New York", &["bipolar", "lgbtq", "adhd"]),
        advocate(2, "Jane", "Smith", "Los Angeles", &["bipolar"]),
        advocate(3, "Alice", "Johnson", "Chicago", &["adhd", "ocd"]),
        advocate(4, "Bob", "Williams", "New York", &["trauma-ptsd"]),
        advocate(5, "Mary", "Jones", "Springfield", &["lgbtq", "bipolar"]),
    ]
}

/// ## Summary
/// `count` advocates with ids 1..=count, spread over a few cities.
#[must_use]
pub fn numbered_advocates(count: i32) -> Vec<Advocate> {
    const CITIES: [&str; 3] = ["Austin", "Dallas", "Houston"];
    (1..=count)
        .map(|id| {
            let city = CITIES[usize::try_from(id).unwrap_or_default() % CITIES.len()];
            advocate(id, &format!("First{id}"), &format!("Last{id}"), city, &["adhd"])
        })
        .collect()
}

/// ## Summary
/// Settings for tests: defaults plus a placeholder database URL.
///
/// ## Panics
/// Panics if the defaults cannot be deserialized.
#[expect(clippy::expect_used, reason = "Invalid test configuration is fatal")]
#[must_use]
pub fn test_config(specialty_match: SpecialtyMatch) -> Settings {
    Settings::builder()
        .and_then(|builder| {
            Ok(builder
                .set_override("database.url", "postgres://localhost/advocates_test")?
                .set_override("directory.specialty_match", specialty_match.as_str())?
                .build()?
                .try_deserialize::<Settings>()?)
        })
        .expect("test configuration should load")
}

/// ## Summary
/// Creates a service with the full API router over `store`.
///
/// ## Panics
/// Panics if the router cannot be created.
#[must_use]
pub fn create_test_service<T: AdvocateStore + 'static>(store: T) -> Service {
    create_test_service_with(store, test_config(SpecialtyMatch::All))
}

/// ## Summary
/// Creates a service with the full API router over `store` and `settings`.
///
/// ## Panics
/// Panics if the router cannot be created.
#[expect(clippy::expect_used, reason = "Service creation failure is fatal")]
#[must_use]
pub fn create_test_service_with<T: AdvocateStore + 'static>(store: T, settings: Settings) -> Service {
    let router = Router::new()
        .hoop(StoreHandler::new(store))
        .hoop(ConfigHandler { settings })
        .push(routes().expect("API routes should be valid"));
    Service::new(router)
}
