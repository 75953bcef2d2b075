//! The filtering engine.
//!
//! [`FilterEngine`] follows a two-phase protocol. Setters only record the new
//! criteria and mark the view stale. [`FilterEngine::recompute`] evaluates
//! them. Callers can batch several control changes and pay for one pass.

use std::collections::BTreeMap;

use serde::Serialize;
use tracing::{debug, trace};

use super::criterion::{Criterion, Slot};
use super::sort::SortSpec;
use crate::item::Item;
use crate::Catalog;

/// The ordered ids of the visible items.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct VisibleList {
    /// Visible item ids, in display order.
    pub ids: Vec<String>,
    /// Number of visible items.
    pub count: usize,
    /// Number of items in the catalog.
    pub total: usize,
}

impl VisibleList {
    /// Returns true if no item is visible.
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}

/// An active criterion as shown in the "active filters" tag row.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ActiveFilter {
    pub slot: Slot,
    #[serde(skip)]
    pub criterion: Criterion,
    pub label: String,
}

/// Computes the visible, ordered subset of a catalog.
///
/// One engine serves one page session. It borrows the catalog and never
/// modifies it.
#[derive(Debug, Clone)]
pub struct FilterEngine<'a> {
    catalog: &'a Catalog,
    active: BTreeMap<Slot, Criterion>,
    sort: SortSpec,
    /// Last computed view; `None` when stale.
    view: Option<VisibleList>,
}

impl<'a> FilterEngine<'a> {
    /// Creates an engine with no criteria and catalog order.
    pub fn new(catalog: &'a Catalog) -> Self {
        Self {
            catalog,
            active: BTreeMap::new(),
            sort: SortSpec::none(),
            view: None,
        }
    }

    /// Returns the catalog this engine filters.
    pub fn catalog(&self) -> &'a Catalog {
        self.catalog
    }

    /// Sets or clears the criterion of a slot.
    ///
    /// The criterion is normalized first; one that imposes no constraint (or
    /// can't be interpreted) clears the slot. Never fails.
    pub fn set_criterion(&mut self, slot: Slot, criterion: Option<Criterion>) {
        let given = criterion.is_some();
        match criterion.and_then(Criterion::normalize) {
            Some(criterion) => {
                trace!(%slot, %criterion, "setting criterion");
                self.active.insert(slot, criterion);
            }
            None => {
                if given {
                    debug!(%slot, "criterion imposes no constraint, clearing slot");
                } else {
                    trace!(%slot, "clearing criterion");
                }
                self.active.remove(&slot);
            }
        }
        self.view = None;
    }

    /// Replaces the sort spec.
    pub fn set_sort(&mut self, spec: SortSpec) {
        self.sort = spec;
        self.view = None;
    }

    /// Clears every slot. The sort spec is kept.
    pub fn clear(&mut self) {
        self.active.clear();
        self.view = None;
    }

    /// Returns the criterion held by a slot.
    pub fn criterion(&self, slot: Slot) -> Option<&Criterion> {
        self.active.get(&slot)
    }

    /// Returns the current sort spec.
    pub fn sort(&self) -> SortSpec {
        self.sort
    }

    /// Returns true if criteria or sort changed since the last recompute.
    pub fn is_stale(&self) -> bool {
        self.view.is_none()
    }

    /// Returns the last computed view, unless it is stale.
    pub fn view(&self) -> Option<&VisibleList> {
        self.view.as_ref()
    }

    /// Evaluates the active criteria and sort against the catalog.
    ///
    /// An item is visible when every active criterion matches it. Visible
    /// items keep catalog order unless a sort is set; the sort is stable.
    /// Calling this again without changes returns the same list.
    pub fn recompute(&mut self) -> VisibleList {
        if let Some(view) = &self.view {
            return view.clone();
        }

        let mut visible = self.visible_items(&self.active);
        if !self.sort.is_original() {
            let sort = self.sort;
            visible.sort_by(|a, b| sort.compare(a, b));
        }

        let ids: Vec<String> = visible.iter().map(|item| item.id.clone()).collect();
        let view = VisibleList {
            count: ids.len(),
            total: self.catalog.len(),
            ids,
        };

        debug!(
            visible = view.count,
            total = view.total,
            criteria = self.active.len(),
            sort = ?self.sort,
            "recomputed view"
        );

        self.view = Some(view.clone());
        view
    }

    /// Counts the items that would be visible if `slot` held `criterion`.
    ///
    /// The engine's own state is untouched. Used for per-option counts such
    /// as "Under ₱100k (12)".
    pub fn count_with(&self, slot: Slot, criterion: Option<Criterion>) -> usize {
        let mut active = self.active.clone();
        match criterion.and_then(Criterion::normalize) {
            Some(criterion) => active.insert(slot, criterion),
            None => active.remove(&slot),
        };
        self.visible_items(&active).len()
    }

    /// Returns the active criteria in slot order with display labels.
    ///
    /// Price ranges that match one of the catalog's buckets use the bucket's
    /// label.
    pub fn active_filters(&self) -> Vec<ActiveFilter> {
        self.active
            .iter()
            .map(|(slot, criterion)| {
                let label = self
                    .catalog
                    .price_buckets()
                    .iter()
                    .find(|bucket| bucket.describes(criterion))
                    .map(|bucket| bucket.label.clone())
                    .unwrap_or_else(|| criterion.label());
                ActiveFilter {
                    slot: *slot,
                    criterion: criterion.clone(),
                    label,
                }
            })
            .collect()
    }

    /// Returns the catalog items that satisfy every criterion, in catalog order.
    fn visible_items(&self, active: &BTreeMap<Slot, Criterion>) -> Vec<&'a Item> {
        let search_tags = self.catalog.search_tags();
        self.catalog
            .items()
            .iter()
            .filter(|item| {
                active
                    .values()
                    .all(|criterion| criterion.matches(item, search_tags))
            })
            .collect()
    }
}

#[cfg(test)]
#[path = "engine_tests.rs"]
mod tests;
