//! Query builder functions for advocates.

use diesel::pg::Pg;
use diesel::prelude::*;

use crate::db::query::filter::AdvocateFilter;
use crate::db::schema::advocates;

/// ## Summary
/// Returns a query to select all advocates.
#[must_use]
pub fn all() -> advocates::BoxedQuery<'static, Pg> {
    advocates::table.into_boxed()
}

/// ## Summary
/// Returns a query to select advocates matching `filter`, in id order.
#[must_use]
pub fn filtered(filter: &AdvocateFilter) -> advocates::BoxedQuery<'static, Pg> {
    filter.to_query().order(advocates::id.asc())
}

/// ## Summary
/// Returns a query for one page of advocates matching `filter`.
#[must_use]
pub fn page(filter: &AdvocateFilter, limit: i64, offset: i64) -> advocates::BoxedQuery<'static, Pg> {
    filtered(filter).limit(limit).offset(offset)
}

/// ## Summary
/// Returns a query to count advocates matching `filter`.
#[must_use]
pub fn count(filter: &AdvocateFilter) -> advocates::BoxedQuery<'static, Pg, diesel::sql_types::BigInt> {
    filter.to_query().count()
}

/// ## Summary
/// Returns a query for every distinct stored city, sorted.
#[must_use]
pub fn distinct_cities() -> advocates::BoxedQuery<'static, Pg, diesel::sql_types::Text> {
    advocates::table
        .select(advocates::city)
        .distinct()
        .order(advocates::city.asc())
        .into_boxed()
}
