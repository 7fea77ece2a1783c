//! Case-insensitive text helpers.
//!
//! Ordering uses ICU case folding. Prefix matching lowercases instead, which
//! is what Postgres `ILIKE` does, so in-memory and SQL filtering agree on
//! names such as "Straße".

use std::borrow::Cow;
use std::cmp::Ordering;

use icu::casemap::CaseMapper;

/// ## Summary
/// Case-folds `text` for comparison.
#[must_use]
pub fn fold_case(text: &str) -> Cow<'_, str> {
    CaseMapper::new().fold_string(text)
}

/// ## Summary
/// Returns true if `text` begins with `prefix` once both are lowercased.
///
/// Unlike folding, lowercasing leaves "ß" alone, so "STRASSE" is not a
/// prefix of "Straße".
#[must_use]
pub fn starts_with_ignore_case(text: &str, prefix: &str) -> bool {
    text.to_lowercase().starts_with(&prefix.to_lowercase())
}

/// ## Summary
/// Orders two strings case-insensitively, falling back to a byte-wise
/// comparison so that the ordering is total.
#[must_use]
pub fn compare_folded(a: &str, b: &str) -> Ordering {
    fold_case(a)
        .cmp(&fold_case(b))
        .then_with(|| a.cmp(b))
}
