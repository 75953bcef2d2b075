//! Catalog model and list filtering engine for the showroom site.
//!
//! A [`Catalog`] is the immutable set of items a page shows (motorcycles,
//! stores, service packages). The [`filter`] module narrows and orders it:
//! callers set criteria on a [`filter::FilterEngine`] and ask it to
//! recompute the visible list, which a [`Renderer`] then presents.
//!
//! # Example
//!
//! ```
//! use showroom_catalog::{Catalog, Item};
//! use showroom_catalog::filter::{Criterion, FilterEngine, Slot, SortSpec};
//!
//! let catalog = Catalog::new(vec![
//!     Item::new("a", "Honda Click", "scooter", "honda", 90000.0),
//!     Item::new("b", "Yamaha Mio", "scooter", "yamaha", 110000.0),
//!     Item::new("c", "Kawasaki Ninja", "sport", "kawasaki", 250000.0),
//! ])?;
//!
//! let mut engine = FilterEngine::new(&catalog);
//! engine.set_criterion(Slot::Category, Some(Criterion::category("scooter")));
//! engine.set_sort(SortSpec::price_desc());
//!
//! let view = engine.recompute();
//! assert_eq!(view.ids, vec!["b", "a"]);
//! # Ok::<(), showroom_catalog::CatalogError>(())
//! ```

use std::collections::{BTreeSet, HashMap};

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub mod debounce;
pub mod filter;
mod item;
mod lookups;
mod render;
pub mod store;

pub use filter::PriceBucket;
pub use item::{Field, Item, TagValue};
pub use render::Renderer;
pub use store::{CatalogStore, CatalogStoreError};

/// Errors raised when a catalog breaks its invariants.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CatalogError {
    /// Two items share the same id.
    #[error("duplicate item id: {id}")]
    DuplicateId {
        /// The repeated id.
        id: String,
    },

    /// An item has an empty id.
    #[error("item at position {index} has an empty id")]
    EmptyId {
        /// Position of the offending item in the source list.
        index: usize,
    },

    /// An item's price is negative or not a finite number.
    #[error("item {id} has an invalid price")]
    InvalidPrice {
        /// The offending item's id.
        id: String,
    },
}

/// On-disk shape of a catalog, before validation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogFile {
    /// Items in display order.
    #[serde(default)]
    pub items: Vec<Item>,

    /// Price buckets offered by the page. Falls back to the default buckets.
    #[serde(default = "filter::default_price_buckets")]
    pub price_buckets: Vec<PriceBucket>,

    /// Text tags searched by keyword in addition to the item name.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub search_tags: Vec<String>,
}

/// An immutable, validated collection of items.
///
/// Item order is the catalog's default display order. Ids are unique.
#[derive(Debug, Clone)]
pub struct Catalog {
    items: Vec<Item>,
    price_buckets: Vec<PriceBucket>,
    search_tags: Vec<String>,
    index: HashMap<String, usize>,
}

impl Catalog {
    /// Creates a catalog with the default price buckets and name-only search.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError`] if any id is empty or repeated, or a price is
    /// negative or not finite.
    pub fn new(items: Vec<Item>) -> Result<Self, CatalogError> {
        Self::with_config(items, filter::default_price_buckets(), Vec::new())
    }

    /// Creates a catalog with explicit page configuration.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError`] if any id is empty or repeated, or a price is
    /// negative or not finite.
    pub fn with_config(
        items: Vec<Item>,
        price_buckets: Vec<PriceBucket>,
        search_tags: Vec<String>,
    ) -> Result<Self, CatalogError> {
        let mut index = HashMap::with_capacity(items.len());
        for (i, item) in items.iter().enumerate() {
            if item.id.is_empty() {
                return Err(CatalogError::EmptyId { index: i });
            }
            if !item.price.is_finite() || item.price < 0.0 {
                return Err(CatalogError::InvalidPrice {
                    id: item.id.clone(),
                });
            }
            if index.insert(item.id.clone(), i).is_some() {
                return Err(CatalogError::DuplicateId {
                    id: item.id.clone(),
                });
            }
        }

        Ok(Self {
            items,
            price_buckets,
            search_tags,
            index,
        })
    }

    /// Returns the items in catalog order.
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    /// Looks up an item by id.
    pub fn get(&self, id: &str) -> Option<&Item> {
        self.index.get(id).map(|&i| &self.items[i])
    }

    /// Returns the number of items.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns true if the catalog has no items.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Returns the price buckets the page offers.
    pub fn price_buckets(&self) -> &[PriceBucket] {
        &self.price_buckets
    }

    /// Returns the text tags keyword search also looks at.
    pub fn search_tags(&self) -> &[String] {
        &self.search_tags
    }

    /// Returns the sorted distinct non-empty values of a field.
    pub fn distinct_values(&self, field: &Field) -> Vec<String> {
        self.items
            .iter()
            .filter_map(|item| item.text(field))
            .filter(|v| !v.is_empty())
            .map(|v| v.into_owned())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }
}

impl TryFrom<CatalogFile> for Catalog {
    type Error = CatalogError;

    fn try_from(file: CatalogFile) -> Result<Self, Self::Error> {
        Self::with_config(file.items, file.price_buckets, file.search_tags)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_items() -> Vec<Item> {
        vec![
            Item::new("a", "Honda Click", "scooter", "honda", 90000.0),
            Item::new("b", "Yamaha Mio", "scooter", "yamaha", 110000.0),
            Item::new("c", "Kawasaki Ninja", "sport", "kawasaki", 250000.0),
        ]
    }

    #[test]
    fn test_catalog_new_indexes_items() {
        let catalog = Catalog::new(sample_items()).unwrap();

        assert_eq!(catalog.len(), 3);
        assert!(!catalog.is_empty());
        assert_eq!(catalog.get("b").map(|i| i.name.as_str()), Some("Yamaha Mio"));
        assert!(catalog.get("z").is_none());
        assert_eq!(catalog.price_buckets().len(), 4);
        assert!(catalog.search_tags().is_empty());
    }

    #[test]
    fn test_catalog_rejects_duplicate_id() {
        let mut items = sample_items();
        items.push(Item::new("a", "Honda Beat", "scooter", "honda", 80000.0));

        let err = Catalog::new(items).unwrap_err();
        assert_eq!(
            err,
            CatalogError::DuplicateId {
                id: "a".to_string()
            }
        );
        assert_eq!(err.to_string(), "duplicate item id: a");
    }

    #[test]
    fn test_catalog_rejects_empty_id() {
        let mut items = sample_items();
        items.insert(1, Item::new("", "Nameless", "", "", 0.0));

        let err = Catalog::new(items).unwrap_err();
        assert_eq!(err, CatalogError::EmptyId { index: 1 });
    }

    #[test]
    fn test_catalog_rejects_invalid_price() {
        for price in [-5.0, f64::NAN, f64::INFINITY] {
            let mut items = sample_items();
            items.push(Item::new("bad", "Bad Price", "scooter", "honda", price));

            let err = Catalog::new(items).unwrap_err();
            assert_eq!(
                err,
                CatalogError::InvalidPrice {
                    id: "bad".to_string()
                },
                "price {price}"
            );
        }
        assert_eq!(
            CatalogError::InvalidPrice { id: "x".into() }.to_string(),
            "item x has an invalid price"
        );
    }

    #[test]
    fn test_catalog_accepts_zero_price() {
        let catalog = Catalog::new(vec![Item::new("free", "Free Check", "", "", 0.0)]).unwrap();
        assert_eq!(catalog.len(), 1);
    }

    #[test]
    fn test_catalog_empty_is_valid() {
        let catalog = Catalog::new(vec![]).unwrap();
        assert!(catalog.is_empty());
        assert_eq!(catalog.len(), 0);
    }

    #[test]
    fn test_distinct_values_sorted_and_unique() {
        let catalog = Catalog::new(sample_items()).unwrap();

        assert_eq!(
            catalog.distinct_values(&Field::Category),
            vec!["scooter".to_string(), "sport".to_string()]
        );
        assert_eq!(
            catalog.distinct_values(&Field::Brand),
            vec![
                "honda".to_string(),
                "kawasaki".to_string(),
                "yamaha".to_string()
            ]
        );
        assert!(catalog
            .distinct_values(&Field::Tag("address".into()))
            .is_empty());
    }

    #[test]
    fn test_catalog_file_defaults() {
        let file: CatalogFile = serde_json::from_str(r#"{"items": []}"#).unwrap();

        assert!(file.items.is_empty());
        assert_eq!(file.price_buckets, filter::default_price_buckets());
        assert!(file.search_tags.is_empty());
    }

    #[test]
    fn test_catalog_try_from_file_keeps_config() {
        let file = CatalogFile {
            items: sample_items(),
            price_buckets: vec![PriceBucket::new("cheap", "Cheap", 0.0, Some(100000.0))],
            search_tags: vec!["address".to_string()],
        };

        let catalog = Catalog::try_from(file).unwrap();
        assert_eq!(catalog.price_buckets().len(), 1);
        assert_eq!(catalog.search_tags(), ["address".to_string()]);
    }
}
