//! Translation of raw control values into criteria and sort specs.
//!
//! Pages hand over whatever their inputs hold: dropdown option values,
//! free text, chip ids. Every function here fails open. A value that can't
//! be interpreted becomes "no constraint" (`None`), so a broken control shows
//! everything rather than nothing.

use serde::{Deserialize, Serialize};

use super::criterion::Criterion;
use super::sort::SortSpec;
use crate::item::Field;

/// Option value dropdowns and tabs use for "no selection".
const ALL_OPTION: &str = "all";

/// A preset price range offered by the price dropdown.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceBucket {
    /// Option value, e.g. `"0-100000"`.
    pub id: String,
    /// Display label, e.g. `"Under ₱100k"`.
    pub label: String,
    /// Inclusive lower bound.
    pub min: f64,
    /// Exclusive upper bound; `None` for the open-ended top bucket.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max: Option<f64>,
}

impl PriceBucket {
    /// Creates a bucket.
    pub fn new(id: impl Into<String>, label: impl Into<String>, min: f64, max: Option<f64>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            min,
            max,
        }
    }

    /// Returns the price criterion this bucket selects.
    pub fn criterion(&self) -> Criterion {
        Criterion::price_range(Some(self.min), self.max)
    }

    /// Returns true if `criterion` is exactly this bucket's range.
    pub fn describes(&self, criterion: &Criterion) -> bool {
        matches!(
            criterion,
            Criterion::Range { field: Field::Price, min: Some(min), max }
                if *min == self.min && *max == self.max
        )
    }
}

/// The buckets of the motorcycle catalog page.
///
/// Adjacent buckets share a boundary; the upper bound is exclusive so a price
/// sitting on a boundary lands in exactly one bucket.
pub fn default_price_buckets() -> Vec<PriceBucket> {
    vec![
        PriceBucket::new("0-100000", "Under ₱100k", 0.0, Some(100_000.0)),
        PriceBucket::new("100000-200000", "₱100k - ₱200k", 100_000.0, Some(200_000.0)),
        PriceBucket::new("200000-300000", "₱200k - ₱300k", 200_000.0, Some(300_000.0)),
        PriceBucket::new("300000+", "Above ₱300k", 300_000.0, None),
    ]
}

/// Parses a peso amount such as `"100000"`, `"₱100,000"` or `"100,000.50"`.
///
/// Returns `None` for anything that is not a finite, non-negative number.
pub fn parse_amount(raw: &str) -> Option<f64> {
    let cleaned: String = raw
        .trim()
        .trim_start_matches('₱')
        .chars()
        .filter(|c| *c != ',' && !c.is_whitespace())
        .collect();
    cleaned
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite() && *v >= 0.0)
}

/// Translates a dropdown or tab value. `""` and `"all"` clear the slot.
pub fn select_value(field: Field, raw: &str) -> Option<Criterion> {
    if raw.is_empty() || raw.eq_ignore_ascii_case(ALL_OPTION) {
        return None;
    }
    Criterion::equals(field, raw).normalize()
}

/// Translates search box text. An empty box clears the slot.
pub fn keyword_input(raw: &str) -> Option<Criterion> {
    Criterion::keyword(raw).normalize()
}

/// Translates a price dropdown value.
///
/// Known bucket ids map to their bucket. Other values are read as `"a-b"` or
/// `"a+"`. Anything else clears the slot.
pub fn price_bucket(buckets: &[PriceBucket], raw: &str) -> Option<Criterion> {
    let raw = raw.trim();
    if let Some(bucket) = buckets.iter().find(|b| b.id == raw) {
        return bucket.criterion().normalize();
    }

    if let Some(min) = raw.strip_suffix('+') {
        return Criterion::price_range(parse_amount(min), None).normalize();
    }

    let (min, max) = raw.split_once('-')?;
    let (min, max) = (parse_amount(min)?, parse_amount(max)?);
    Criterion::price_range(Some(min), Some(max)).normalize()
}

/// Translates free-form minimum and maximum price inputs.
///
/// Each unparseable bound is dropped on its own; if neither survives the
/// slot is cleared.
pub fn price_bounds(min: &str, max: &str) -> Option<Criterion> {
    Criterion::price_range(parse_amount(min), parse_amount(max)).normalize()
}

/// Translates a filter chip. The `"all"` chip clears the slot.
pub fn feature_chip(raw: &str) -> Option<Criterion> {
    let raw = raw.trim();
    if raw.eq_ignore_ascii_case(ALL_OPTION) {
        return None;
    }
    Criterion::predicate(raw).normalize()
}

/// Translates the sort dropdown. Unknown values keep catalog order.
pub fn sort_choice(raw: &str) -> SortSpec {
    match raw.trim().to_lowercase().as_str() {
        "name" => SortSpec::by_name(),
        "price-low" => SortSpec::price_asc(),
        "price-high" => SortSpec::price_desc(),
        "newest" => SortSpec::newest(),
        _ => SortSpec::none(),
    }
}
