//! Criteria: the individual constraints a filter control contributes.

use std::fmt;

use serde::Serialize;

use crate::item::{Field, Item, TagValue};

/// The logical control a criterion belongs to.
///
/// A slot holds at most one criterion. Setting a slot that is already
/// occupied replaces its criterion, mirroring the single-select controls on
/// the pages (one search box, one type dropdown, one chip row).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Slot {
    /// The keyword search box.
    Keyword,
    /// The type/category dropdown or category tabs.
    Category,
    /// The brand dropdown.
    Brand,
    /// The price bucket dropdown.
    PriceRange,
    /// The store locator's filter chips ("open now", "weekend").
    Feature,
}

impl Slot {
    /// All slots in display order.
    pub const ALL: [Slot; 5] = [
        Slot::Keyword,
        Slot::Category,
        Slot::Brand,
        Slot::PriceRange,
        Slot::Feature,
    ];

    /// Returns the slot's name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Slot::Keyword => "keyword",
            Slot::Category => "category",
            Slot::Brand => "brand",
            Slot::PriceRange => "price-range",
            Slot::Feature => "feature",
        }
    }
}

impl fmt::Display for Slot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single filter constraint.
#[derive(Debug, Clone, PartialEq)]
pub enum Criterion {
    /// Case-insensitive substring match against the item name (and any
    /// catalog search tags).
    Keyword(String),

    /// Exact, case-sensitive match of a field against a value.
    Equals {
        /// Field to compare.
        field: Field,
        /// Expected value.
        value: String,
    },

    /// Numeric range with an inclusive lower and exclusive upper bound.
    ///
    /// A missing bound leaves that side open.
    Range {
        /// Numeric field to compare.
        field: Field,
        /// Inclusive lower bound.
        min: Option<f64>,
        /// Exclusive upper bound.
        max: Option<f64>,
    },

    /// The named tag must be a flag set to `true`.
    Predicate(String),
}

impl Criterion {
    /// Creates a keyword criterion.
    pub fn keyword(text: impl Into<String>) -> Self {
        Criterion::Keyword(text.into())
    }

    /// Creates an equals criterion.
    pub fn equals(field: Field, value: impl Into<String>) -> Self {
        Criterion::Equals {
            field,
            value: value.into(),
        }
    }

    /// Creates an equals criterion on the category.
    pub fn category(value: impl Into<String>) -> Self {
        Self::equals(Field::Category, value)
    }

    /// Creates an equals criterion on the brand.
    pub fn brand(value: impl Into<String>) -> Self {
        Self::equals(Field::Brand, value)
    }

    /// Creates a range criterion.
    pub fn range(field: Field, min: Option<f64>, max: Option<f64>) -> Self {
        Criterion::Range { field, min, max }
    }

    /// Creates a range criterion on the price.
    pub fn price_range(min: Option<f64>, max: Option<f64>) -> Self {
        Self::range(Field::Price, min, max)
    }

    /// Creates a predicate criterion.
    pub fn predicate(tag: impl Into<String>) -> Self {
        Criterion::Predicate(tag.into())
    }

    /// Reduces a criterion to its effective form.
    ///
    /// Returns `None` when the criterion imposes no constraint or cannot be
    /// interpreted: empty text, a range without finite bounds or with
    /// inverted bounds, a range over a non-numeric field, or a price
    /// equality that is not a finite number. Non-finite bounds are dropped.
    pub fn normalize(self) -> Option<Self> {
        match self {
            Criterion::Keyword(text) if text.is_empty() => None,
            Criterion::Equals { value, .. } if value.is_empty() => None,
            Criterion::Equals {
                field: Field::Price,
                value,
            } if value
                .trim()
                .parse::<f64>()
                .ok()
                .filter(|v| v.is_finite())
                .is_none() =>
            {
                None
            }
            Criterion::Equals {
                field: Field::Tag(tag),
                ..
            } if tag.is_empty() => None,
            Criterion::Range { field, min, max } => {
                if !field.is_numeric() {
                    return None;
                }
                let min = min.filter(|v| v.is_finite());
                let max = max.filter(|v| v.is_finite());
                match (min, max) {
                    (None, None) => None,
                    (Some(lo), Some(hi)) if lo > hi => None,
                    _ => Some(Criterion::Range { field, min, max }),
                }
            }
            Criterion::Predicate(tag) if tag.is_empty() => None,
            other => Some(other),
        }
    }

    /// Returns true if the item satisfies this criterion.
    ///
    /// `search_tags` lists text tags keyword search looks at besides the name.
    pub fn matches(&self, item: &Item, search_tags: &[String]) -> bool {
        match self {
            Criterion::Keyword(text) => {
                if text.is_empty() {
                    return true;
                }
                let needle = text.to_lowercase();
                item.name.to_lowercase().contains(&needle)
                    || search_tags.iter().any(|tag| match item.tags.get(tag) {
                        Some(TagValue::Text(s)) => s.to_lowercase().contains(&needle),
                        _ => false,
                    })
            }
            Criterion::Equals { value, .. } if value.is_empty() => true,
            Criterion::Equals { field, value } => equals_field(item, field, value),
            Criterion::Range { field, min, max } => item.number(field).is_some_and(|v| {
                min.map_or(true, |lo| v >= lo) && max.map_or(true, |hi| v < hi)
            }),
            Criterion::Predicate(tag) => item.has_flag(tag),
        }
    }

    /// Returns a short human-readable description, used for filter tags.
    pub fn label(&self) -> String {
        match self {
            Criterion::Keyword(text) => format!("\"{text}\""),
            Criterion::Equals { value, .. } => value.clone(),
            Criterion::Range { min, max, .. } => match (min, max) {
                (Some(lo), Some(hi)) => format!("{lo}-{hi}"),
                (Some(lo), None) => format!("{lo}+"),
                (None, Some(hi)) => format!("under {hi}"),
                (None, None) => "any".to_string(),
            },
            Criterion::Predicate(tag) => tag.clone(),
        }
    }
}

/// Compares a field against a raw control value.
fn equals_field(item: &Item, field: &Field, value: &str) -> bool {
    match field {
        // Unparseable price equality is normalized away before evaluation;
        // if it slips through it constrains nothing.
        Field::Price => value
            .trim()
            .parse::<f64>()
            .map_or(true, |expected| item.price == expected),
        Field::Tag(tag) => match item.tags.get(tag) {
            Some(TagValue::Text(s)) => s == value,
            Some(TagValue::Flag(b)) => value.trim().parse::<bool>() == Ok(*b),
            Some(TagValue::Number(n)) => value.trim().parse::<f64>() == Ok(*n),
            None => false,
        },
        Field::Name | Field::Category | Field::Brand => {
            item.text(field).is_some_and(|v| v == value)
        }
    }
}

impl fmt::Display for Criterion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Criterion::Keyword(text) => write!(f, "keyword({text:?})"),
            Criterion::Equals { field, value } => write!(f, "{field} = {value:?}"),
            Criterion::Range { field, .. } => write!(f, "{field} in {}", self.label()),
            Criterion::Predicate(tag) => write!(f, "{tag}"),
        }
    }
}
