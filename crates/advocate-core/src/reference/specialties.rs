//! Specialty catalog.
//!
//! Slugs are the storage and wire key for a specialty; labels are only ever
//! shown to people. The catalog is fixed at compile time and indexed once on
//! first use.

use std::collections::{BTreeMap, HashMap};
use std::sync::LazyLock;

use serde::Serialize;

use crate::util::text::compare_folded;

/// A specialty tag an advocate can carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Specialty {
    pub slug: &'static str,
    pub label: &'static str,
    /// Clarifying text shown under the label; empty when there is none.
    pub sub_label: &'static str,
    /// Display grouping key.
    pub category: &'static str,
}

impl Specialty {
    const fn new(
        slug: &'static str,
        label: &'static str,
        sub_label: &'static str,
        category: &'static str,
    ) -> Self {
        Self {
            slug,
            label,
            sub_label,
            category,
        }
    }
}

pub static SPECIALTIES: &[Specialty] = &[
    Specialty::new("bipolar", "Bipolar", "", "Mental Health & Trauma"),
    Specialty::new("lgbtq", "LGBTQ", "", "Identity & Life Stages"),
    Specialty::new("medication-prescribing", "Medication/Prescribing", "", "Health & Medical"),
    Specialty::new("suicide-history", "Suicide History/Attempts", "", "Mental Health & Trauma"),
    Specialty::new(
        "general-mental-health",
        "General Mental Health",
        "Anxiety, depression, stress, grief, life transitions",
        "Mental Health & Trauma",
    ),
    Specialty::new("mens-issues", "Men's Issues", "", "Identity & Life Stages"),
    Specialty::new(
        "relationship-issues",
        "Relationship Issues",
        "Family, friends, couple, etc.",
        "Identity & Life Stages",
    ),
    Specialty::new("trauma-ptsd", "Trauma & PTSD", "", "Mental Health & Trauma"),
    Specialty::new("personality-disorders", "Personality Disorders", "", "Mental Health & Trauma"),
    Specialty::new("personal-growth", "Personal Growth", "", "Growth & Coaching"),
    Specialty::new("substance-abuse", "Substance Use/Abuse", "", "Mental Health & Trauma"),
    Specialty::new("pediatrics", "Pediatrics", "", "Identity & Life Stages"),
    Specialty::new(
        "womens-issues",
        "Women's Issues",
        "Post-partum, infertility, family planning",
        "Identity & Life Stages",
    ),
    Specialty::new("chronic-pain", "Chronic Pain", "", "Health & Medical"),
    Specialty::new("weight-nutrition", "Weight Loss & Nutrition", "", "Nutrition & Body"),
    Specialty::new("eating-disorders", "Eating Disorders", "", "Nutrition & Body"),
    Specialty::new("diabetic-diet", "Diabetic Nutrition", "", "Nutrition & Body"),
    Specialty::new(
        "coaching-leadership",
        "Coaching",
        "Leadership, career, academic and wellness",
        "Growth & Coaching",
    ),
    Specialty::new("life-coaching", "Life Coaching", "", "Growth & Coaching"),
    Specialty::new("ocd", "OCD", "Obsessive-compulsive disorders", "Mental Health & Trauma"),
    Specialty::new(
        "neuropsych-testing",
        "Neuropsychological Testing",
        "ADHD and cognitive evaluations",
        "Mental Health & Trauma",
    ),
    Specialty::new("adhd", "ADHD", "Attention and hyperactivity", "Mental Health & Trauma"),
    Specialty::new(
        "sleep-issues",
        "Sleep Support",
        "Insomnia and other sleep concerns",
        "Health & Medical",
    ),
    Specialty::new(
        "schizophrenia",
        "Psychosis",
        "Schizophrenia and psychotic disorders",
        "Mental Health & Trauma",
    ),
    Specialty::new("learning-disorders", "Learning Disorders", "", "Mental Health & Trauma"),
    Specialty::new("domestic-abuse", "Domestic Abuse", "", "Mental Health & Trauma"),
];

static BY_SLUG: LazyLock<HashMap<&'static str, &'static Specialty>> =
    LazyLock::new(|| SPECIALTIES.iter().map(|s| (s.slug, s)).collect());

static BY_LABEL: LazyLock<HashMap<&'static str, &'static Specialty>> =
    LazyLock::new(|| SPECIALTIES.iter().map(|s| (s.label, s)).collect());

/// ## Summary
/// Looks up a specialty by its exact slug.
#[must_use]
pub fn specialty_by_slug(slug: &str) -> Option<&'static Specialty> {
    BY_SLUG.get(slug).copied()
}

/// ## Summary
/// Looks up a specialty by its exact, case-sensitive label.
#[must_use]
pub fn specialty_by_label(label: &str) -> Option<&'static Specialty> {
    BY_LABEL.get(label).copied()
}

/// ## Summary
/// Returns every catalog label, sorted case-insensitively.
#[must_use]
pub fn all_specialty_labels() -> Vec<&'static str> {
    let mut labels: Vec<&'static str> = SPECIALTIES.iter().map(|s| s.label).collect();
    labels.sort_by(|a, b| compare_folded(a, b));
    labels
}

/// ## Summary
/// Groups the catalog by category for presentation.
///
/// Categories iterate in name order; the specialties inside each category
/// are sorted by label.
#[must_use]
pub fn specialties_by_category() -> BTreeMap<&'static str, Vec<&'static Specialty>> {
    let mut grouped: BTreeMap<&'static str, Vec<&'static Specialty>> = BTreeMap::new();
    for specialty in SPECIALTIES {
        grouped.entry(specialty.category).or_default().push(specialty);
    }
    for group in grouped.values_mut() {
        group.sort_by(|a, b| compare_folded(a.label, b.label));
    }
    grouped
}
