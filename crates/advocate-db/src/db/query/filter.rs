//! Directory filter evaluation.
//!
//! A filter is a conjunction of independent predicate groups (name prefix,
//! exact city, specialty tags). Groups whose input is empty are omitted, so
//! a filter with no groups matches every advocate.
//!
//! The same filter is evaluated two ways: translated into a Diesel query for
//! Postgres, and checked directly against an [`Advocate`] for stores that keep
//! records in memory. Both must agree: name prefixes compare lowercased, as
//! `ILIKE` does, and specialty tags must be a JSON array (enforced by a
//! column check).

use advocate_core::types::SpecialtyMatch;
use advocate_core::util::text::starts_with_ignore_case;
use diesel::pg::Pg;
use diesel::prelude::*;
use diesel::sql_types::Bool;
use serde_json::{Value, json};

use crate::db::query::text_match::build_prefix_pattern;
use crate::db::schema::advocates;
use crate::model::advocate::Advocate;

type BoxedCondition = Box<dyn BoxableExpression<advocates::table, Pg, SqlType = Bool>>;

/// One independent condition of a directory filter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PredicateGroup {
    /// First or last name starts with the term, ignoring case.
    NamePrefix(String),
    /// Stored city equals the value exactly.
    City(String),
    /// Specialty tag membership.
    Specialties {
        slugs: Vec<String>,
        mode: SpecialtyMatch,
    },
}

impl PredicateGroup {
    /// ## Summary
    /// Evaluates this group against a single advocate.
    #[must_use]
    pub fn matches(&self, advocate: &Advocate) -> bool {
        match self {
            Self::NamePrefix(term) => {
                starts_with_ignore_case(&advocate.first_name, term)
                    || starts_with_ignore_case(&advocate.last_name, term)
            }
            Self::City(city) => advocate.city == *city,
            Self::Specialties {
                slugs,
                mode: SpecialtyMatch::All,
            } => slugs.iter().all(|slug| advocate.has_specialty(slug)),
            Self::Specialties {
                slugs,
                mode: SpecialtyMatch::Any,
            } => slugs.iter().any(|slug| advocate.has_specialty(slug)),
        }
    }

    /// ## Summary
    /// Narrows `query` by this group.
    #[must_use]
    pub fn apply(
        &self,
        query: advocates::BoxedQuery<'static, Pg>,
    ) -> advocates::BoxedQuery<'static, Pg> {
        match self {
            Self::NamePrefix(term) => {
                let pattern = build_prefix_pattern(term);
                query.filter(
                    advocates::first_name
                        .ilike(pattern.clone())
                        .or(advocates::last_name.ilike(pattern)),
                )
            }
            Self::City(city) => query.filter(advocates::city.eq(city.clone())),
            Self::Specialties {
                slugs,
                mode: SpecialtyMatch::All,
            } => query.filter(advocates::specialties.contains(Value::from(slugs.clone()))),
            Self::Specialties {
                slugs,
                mode: SpecialtyMatch::Any,
            } => match any_specialty_condition(slugs) {
                Some(condition) => query.filter(condition),
                None => query,
            },
        }
    }
}

/// OR of one containment test per slug.
fn any_specialty_condition(slugs: &[String]) -> Option<BoxedCondition> {
    slugs
        .iter()
        .map(|slug| -> BoxedCondition { Box::new(advocates::specialties.contains(json!([slug]))) })
        .reduce(|acc, next| -> BoxedCondition { Box::new(acc.or(next)) })
}

/// Filter over the advocate directory.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AdvocateFilter {
    groups: Vec<PredicateGroup>,
}

impl AdvocateFilter {
    /// ## Summary
    /// Builds a filter from already-decoded inputs.
    ///
    /// `raw_city` must be the stored city form, not "City, ST". Specialty
    /// slugs are used literally; an unknown slug matches nothing. Specialty
    /// groups default to requiring every slug.
    #[must_use]
    pub fn new<S: AsRef<str>>(search_term: &str, raw_city: &str, specialty_slugs: &[S]) -> Self {
        let mut groups = Vec::with_capacity(3);

        if !search_term.is_empty() {
            groups.push(PredicateGroup::NamePrefix(search_term.to_owned()));
        }

        if !raw_city.is_empty() {
            groups.push(PredicateGroup::City(raw_city.to_owned()));
        }

        if !specialty_slugs.is_empty() {
            groups.push(PredicateGroup::Specialties {
                slugs: specialty_slugs
                    .iter()
                    .map(|s| s.as_ref().to_owned())
                    .collect(),
                mode: SpecialtyMatch::All,
            });
        }

        Self { groups }
    }

    /// ## Summary
    /// Sets how the specialty group combines its slugs.
    #[must_use]
    pub fn with_specialty_match(mut self, specialty_match: SpecialtyMatch) -> Self {
        for group in &mut self.groups {
            if let PredicateGroup::Specialties { mode, .. } = group {
                *mode = specialty_match;
            }
        }
        self
    }

    #[must_use]
    pub fn groups(&self) -> &[PredicateGroup] {
        &self.groups
    }

    /// ## Summary
    /// True when no group is active and every advocate matches.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// ## Summary
    /// Evaluates the whole filter against a single advocate.
    #[must_use]
    pub fn matches(&self, advocate: &Advocate) -> bool {
        self.groups.iter().all(|group| group.matches(advocate))
    }

    /// ## Summary
    /// Returns a boxed query over `advocates` restricted by every active group.
    #[must_use]
    pub fn to_query(&self) -> advocates::BoxedQuery<'static, Pg> {
        self.groups
            .iter()
            .fold(advocates::table.into_boxed(), |query, group| {
                group.apply(query)
            })
    }
}
