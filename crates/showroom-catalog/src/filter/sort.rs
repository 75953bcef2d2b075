//! Ordering of the visible list.

use std::cmp::Ordering;

use serde::Serialize;

use crate::item::Item;

/// Field the visible list is ordered by.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SortField {
    /// Keep catalog order (the `none` sort).
    #[default]
    Original,
    /// Case-insensitive lexicographic by name.
    Name,
    /// Numeric by price.
    Price,
    /// By listing date. Undated items go last in either direction.
    Listed,
}

impl SortField {
    /// Parses a sort field name. Unknown names fall back to catalog order.
    pub fn parse(s: &str) -> SortField {
        match s.trim().to_lowercase().as_str() {
            "name" => SortField::Name,
            "price" => SortField::Price,
            "listed" | "listed_on" | "date" => SortField::Listed,
            _ => SortField::Original,
        }
    }
}

/// Sort direction.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    #[default]
    Asc,
    Desc,
}

impl Direction {
    /// Parses a direction. Anything other than `desc`/`descending` is ascending.
    pub fn parse(s: &str) -> Direction {
        match s.trim().to_lowercase().as_str() {
            "desc" | "descending" => Direction::Desc,
            _ => Direction::Asc,
        }
    }

    fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            Direction::Asc => ordering,
            Direction::Desc => ordering.reverse(),
        }
    }
}

/// How the visible list is ordered.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
pub struct SortSpec {
    pub field: SortField,
    pub direction: Direction,
}

impl SortSpec {
    /// Creates a sort spec.
    pub fn new(field: SortField, direction: Direction) -> Self {
        Self { field, direction }
    }

    /// Catalog order.
    pub fn none() -> Self {
        Self::default()
    }

    /// A to Z by name.
    pub fn by_name() -> Self {
        Self::new(SortField::Name, Direction::Asc)
    }

    /// Cheapest first.
    pub fn price_asc() -> Self {
        Self::new(SortField::Price, Direction::Asc)
    }

    /// Most expensive first.
    pub fn price_desc() -> Self {
        Self::new(SortField::Price, Direction::Desc)
    }

    /// Most recently listed first.
    pub fn newest() -> Self {
        Self::new(SortField::Listed, Direction::Desc)
    }

    /// Returns true if this spec keeps catalog order.
    pub fn is_original(&self) -> bool {
        self.field == SortField::Original
    }

    /// Compares two items under this spec.
    ///
    /// Equal keys compare as `Equal` in both directions, so a stable sort
    /// keeps ties in catalog order.
    pub fn compare(&self, a: &Item, b: &Item) -> Ordering {
        match self.field {
            SortField::Original => Ordering::Equal,
            SortField::Name => self
                .direction
                .apply(a.name.to_lowercase().cmp(&b.name.to_lowercase())),
            SortField::Price => self.direction.apply(a.price.total_cmp(&b.price)),
            SortField::Listed => match (a.listed_on, b.listed_on) {
                (None, None) => Ordering::Equal,
                (None, Some(_)) => Ordering::Greater,
                (Some(_), None) => Ordering::Less,
                (Some(x), Some(y)) => self.direction.apply(x.cmp(&y)),
            },
        }
    }
}
