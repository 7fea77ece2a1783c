//! Read access to the advocate collection.
//!
//! [`AdvocateStore`] is the seam the directory service reads through. The
//! Postgres implementation pushes filtering, counting and paging into SQL;
//! other implementations only need to answer the same questions.

use diesel::{QueryDsl, SelectableHelper};
use diesel_async::RunQueryDsl;
use futures::future::BoxFuture;

use advocate_core::pagination::PageRequest;

use crate::db::DbProvider;
use crate::db::query::advocate as advocate_query;
use crate::db::query::filter::AdvocateFilter;
use crate::error::DbResult;
use crate::model::advocate::{Advocate, AdvocateRow};

pub trait AdvocateStore: Send + Sync {
    /// ## Summary
    /// Loads every advocate, in id order.
    ///
    /// ## Errors
    /// Returns an error if the store cannot be read.
    fn load_all(&self) -> BoxFuture<'_, DbResult<Vec<Advocate>>>;

    /// ## Summary
    /// Loads the advocates on one page of the filtered result, in id order.
    ///
    /// ## Errors
    /// Returns an error if the store cannot be read.
    fn load_page<'a>(
        &'a self,
        filter: &'a AdvocateFilter,
        page: PageRequest,
    ) -> BoxFuture<'a, DbResult<Vec<Advocate>>>;

    /// ## Summary
    /// Counts every advocate matching `filter`, ignoring paging.
    ///
    /// ## Errors
    /// Returns an error if the store cannot be read.
    fn count<'a>(&'a self, filter: &'a AdvocateFilter) -> BoxFuture<'a, DbResult<u64>>;

    /// ## Summary
    /// Returns every distinct stored city, sorted and deduplicated.
    ///
    /// Never affected by any request filter.
    ///
    /// ## Errors
    /// Returns an error if the store cannot be read.
    fn distinct_cities(&self) -> BoxFuture<'_, DbResult<Vec<String>>> {
        Box::pin(async move {
            let mut cities: Vec<String> = self
                .load_all()
                .await?
                .into_iter()
                .map(|advocate| advocate.city)
                .collect();
            cities.sort_unstable();
            cities.dedup();
            Ok(cities)
        })
    }
}

/// Postgres-backed store.
#[derive(Debug, Clone)]
pub struct PgAdvocateStore<P> {
    provider: P,
}

impl<P: DbProvider> PgAdvocateStore<P> {
    #[must_use]
    pub const fn new(provider: P) -> Self {
        Self { provider }
    }
}

/// Offsets past `i64::MAX` clamp to it; no row can sit that far in.
fn saturating_sql_bound(value: u64) -> i64 {
    i64::try_from(value).unwrap_or(i64::MAX)
}

impl<P: DbProvider> AdvocateStore for PgAdvocateStore<P> {
    fn load_all(&self) -> BoxFuture<'_, DbResult<Vec<Advocate>>> {
        Box::pin(async move {
            let mut conn = self.provider.get_connection().await?;
            let rows = advocate_query::filtered(&AdvocateFilter::default())
                .select(AdvocateRow::as_select())
                .load::<AdvocateRow>(&mut conn)
                .await?;
            Ok(rows.into_iter().map(Advocate::from).collect())
        })
    }

    fn load_page<'a>(
        &'a self,
        filter: &'a AdvocateFilter,
        page: PageRequest,
    ) -> BoxFuture<'a, DbResult<Vec<Advocate>>> {
        Box::pin(async move {
            let limit = i64::from(page.limit().get());
            let offset = saturating_sql_bound(page.offset());

            tracing::debug!(page = page.page(), limit, offset, "Loading advocate page");

            let mut conn = self.provider.get_connection().await?;
            let rows = advocate_query::page(filter, limit, offset)
                .select(AdvocateRow::as_select())
                .load::<AdvocateRow>(&mut conn)
                .await?;
            Ok(rows.into_iter().map(Advocate::from).collect())
        })
    }

    fn count<'a>(&'a self, filter: &'a AdvocateFilter) -> BoxFuture<'a, DbResult<u64>> {
        Box::pin(async move {
            let mut conn = self.provider.get_connection().await?;
            let total: i64 = advocate_query::count(filter)
                .get_result(&mut conn)
                .await?;
            // COUNT(*) is never negative.
            Ok(u64::try_from(total).unwrap_or_default())
        })
    }

    fn distinct_cities(&self) -> BoxFuture<'_, DbResult<Vec<String>>> {
        Box::pin(async move {
            let mut conn = self.provider.get_connection().await?;
            let cities = advocate_query::distinct_cities()
                .load::<String>(&mut conn)
                .await?;
            Ok(cities)
        })
    }
}
