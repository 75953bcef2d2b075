//! Declarative list filtering and sorting.
//!
//! Pages narrow a [`Catalog`](crate::Catalog) by setting one [`Criterion`] per
//! [`Slot`] on a [`FilterEngine`], choosing a [`SortSpec`], and recomputing.
//!
//! # Criteria
//!
//! - `Keyword(text)` - case-insensitive substring of the name
//! - `Equals { field, value }` - exact match on category, brand or a tag
//! - `Range { field, min, max }` - numeric, `min <= v < max`
//! - `Predicate(tag)` - a boolean tag must be true
//!
//! Criteria in different slots combine with AND. An empty slot matches
//! everything.
//!
//! # Failing open
//!
//! Nothing in this module returns an error. Empty or malformed input
//! (an unparseable price bound, an unknown field, an unknown sort) is treated
//! as no constraint; the page shows more rather than nothing. The
//! [`controls`] functions apply the same rule to raw form values.
//!
//! # Example
//!
//! ```
//! use showroom_catalog::{Catalog, Item};
//! use showroom_catalog::filter::{controls, FilterEngine, Slot};
//!
//! let catalog = Catalog::new(vec![
//!     Item::new("a", "Honda Click", "scooter", "honda", 90000.0),
//!     Item::new("b", "Yamaha Mio", "scooter", "yamaha", 100000.0),
//! ])?;
//!
//! let mut engine = FilterEngine::new(&catalog);
//! let bucket = controls::price_bucket(catalog.price_buckets(), "0-100000");
//! engine.set_criterion(Slot::PriceRange, bucket);
//! engine.set_criterion(Slot::Keyword, controls::keyword_input("CLICK"));
//!
//! assert_eq!(engine.recompute().ids, vec!["a"]);
//! # Ok::<(), showroom_catalog::CatalogError>(())
//! ```

pub mod controls;
mod criterion;
mod engine;
mod sort;

pub use controls::{default_price_buckets, PriceBucket};
pub use criterion::{Criterion, Slot};
pub use engine::{ActiveFilter, FilterEngine, VisibleList};
pub use sort::{Direction, SortField, SortSpec};
