#![allow(clippy::expect_used, dead_code)]
//! Test helpers for integration tests.
//!
//! Provides utilities for:
//! - Building services over sample stores
//! - Setting up isolated Postgres databases (one per test)
//! - Making HTTP requests
//! - Asserting on responses
//!
//! ## Database Tests
//! Postgres-backed tests need `TEST_DATABASE_URL` (server URL without a
//! database name) or `DATABASE_URL` (any database on the server). When
//! neither is set they return early without asserting anything.

use advocate_db::db::connection::{DbPool, create_pool, run_migrations};
use advocate_db::db::schema::advocates;
use advocate_db::db::store::PgAdvocateStore;
use advocate_db::model::advocate::Advocate;
use diesel::prelude::*;
use diesel_async::{AsyncConnection, AsyncPgConnection, RunQueryDsl};
use salvo::Service;
use salvo::http::StatusCode;
use salvo::test::{ResponseExt, TestClient};
use serde::de::DeserializeOwned;

pub use advocate_test::{
    CitiesFailingStore, FailingStore, MemoryStore, create_test_service,
    create_test_service_with, numbered_advocates, sample_advocates, test_config,
};

/// Represents an HTTP test response for assertions.
pub struct TestResponse {
    pub status: StatusCode,
    pub body: Vec<u8>,
}

impl TestResponse {
    /// Asserts that the response status matches the expected code.
    #[must_use]
    pub fn assert_status(self, expected: StatusCode) -> Self {
        assert_eq!(
            self.status,
            expected,
            "Expected status {expected} but got {}: {}",
            self.status,
            String::from_utf8_lossy(&self.body)
        );
        self
    }

    /// Parses the body as JSON.
    ///
    /// ## Panics
    /// Panics if the body is not valid JSON for `T`.
    #[must_use]
    pub fn json<T: DeserializeOwned>(&self) -> T {
        serde_json::from_slice(&self.body).expect("response body should be valid JSON")
    }

    #[must_use]
    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }
}

/// Sends a GET request for `path` to `service`.
pub async fn get(service: &Service, path: &str) -> TestResponse {
    let url = format!("http://127.0.0.1:5800{path}");
    let mut response = TestClient::get(&url).send(service).await;

    let status = response
        .status_code
        .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    let body: Vec<u8> = response.take_bytes(None).await.unwrap_or_default().to_vec();

    TestResponse { status, body }
}

/// Service over [`sample_advocates`].
#[must_use]
pub fn sample_service() -> Service {
    create_test_service(MemoryStore::new(sample_advocates()))
}

/// Server URL without a database name, if database tests are enabled.
fn get_base_database_url() -> Option<String> {
    if let Ok(url) = std::env::var("TEST_DATABASE_URL") {
        return Some(url.trim_end_matches('/').to_string());
    }

    let url = std::env::var("DATABASE_URL").ok()?;
    let (base, _database) = url.rsplit_once('/')?;
    Some(base.to_string())
}

/// A database of its own for one test, migrated and empty.
///
/// The database is named after the test, dropped and recreated on creation,
/// and dropped again by [`TestDb::teardown`].
pub struct TestDb {
    pool: DbPool,
    base_url: String,
    db_name: String,
}

impl TestDb {
    /// Creates `advocates_test_<name>`, or returns `None` when no database
    /// server is configured.
    ///
    /// ## Panics
    /// Panics if a server is configured but the database cannot be prepared.
    pub async fn create(name: &str) -> Option<Self> {
        let Some(base_url) = get_base_database_url() else {
            eprintln!("[TestDb] No TEST_DATABASE_URL or DATABASE_URL set, skipping {name}");
            return None;
        };
        let db_name = format!("advocates_test_{name}");

        Self::recreate_database(&base_url, &db_name)
            .await
            .expect("test database should be created");

        let url = format!("{base_url}/{db_name}");
        run_migrations(&url)
            .await
            .expect("migrations should apply");
        let pool = create_pool(&url, 2).await.expect("pool should connect");

        Some(Self {
            pool,
            base_url,
            db_name,
        })
    }

    async fn admin_connection(base_url: &str) -> anyhow::Result<AsyncPgConnection> {
        Ok(AsyncPgConnection::establish(&format!("{base_url}/postgres")).await?)
    }

    async fn recreate_database(base_url: &str, db_name: &str) -> anyhow::Result<()> {
        let mut admin = Self::admin_connection(base_url).await?;
        diesel::sql_query(format!("DROP DATABASE IF EXISTS \"{db_name}\" WITH (FORCE)"))
            .execute(&mut admin)
            .await?;
        diesel::sql_query(format!("CREATE DATABASE \"{db_name}\""))
            .execute(&mut admin)
            .await?;
        Ok(())
    }

    /// Store over this database.
    #[must_use]
    pub fn store(&self) -> PgAdvocateStore<DbPool> {
        PgAdvocateStore::new(self.pool.clone())
    }

    /// Inserts `records` with their ids and specialty arrays as given.
    ///
    /// ## Panics
    /// Panics if an insert fails.
    pub async fn seed(&self, records: &[Advocate]) {
        let mut conn = self.pool.get().await.expect("connection");
        for record in records {
            diesel::insert_into(advocates::table)
                .values((
                    advocates::id.eq(record.id),
                    advocates::first_name.eq(&record.first_name),
                    advocates::last_name.eq(&record.last_name),
                    advocates::city.eq(&record.city),
                    advocates::degree.eq(&record.degree),
                    advocates::specialties.eq(serde_json::Value::from(record.specialties.clone())),
                    advocates::years_of_experience.eq(record.years_of_experience),
                    advocates::phone_number.eq(record.phone_number),
                ))
                .execute(&mut conn)
                .await
                .expect("advocate should insert");
        }
    }

    /// Inserts one advocate with `specialties` stored verbatim.
    ///
    /// ## Errors
    /// Returns the database error if the row is rejected.
    pub async fn insert_raw_specialties(
        &self,
        id: i32,
        specialties: serde_json::Value,
    ) -> anyhow::Result<()> {
        let mut conn = self.pool.get().await?;
        diesel::insert_into(advocates::table)
            .values((
                advocates::id.eq(id),
                advocates::first_name.eq("Raw"),
                advocates::last_name.eq("Tags"),
                advocates::city.eq("Austin"),
                advocates::degree.eq("MD"),
                advocates::specialties.eq(specialties),
                advocates::years_of_experience.eq(1),
                advocates::phone_number.eq(5_551_234_567_i64),
            ))
            .execute(&mut conn)
            .await?;
        Ok(())
    }

    /// Drops the database.
    ///
    /// ## Panics
    /// Panics if the database cannot be dropped.
    pub async fn teardown(self) {
        let Self {
            pool,
            base_url,
            db_name,
        } = self;
        drop(pool);

        let mut admin = Self::admin_connection(&base_url)
            .await
            .expect("admin connection");
        diesel::sql_query(format!("DROP DATABASE IF EXISTS \"{db_name}\" WITH (FORCE)"))
            .execute(&mut admin)
            .await
            .expect("test database should drop");
    }
}
