//! Output formatting utilities for the showroom CLI.
//!
//! This module provides functions for formatting data as tables or JSON.
//! It is organized into submodules by entity type:
//!
//! - [`items`] - Item output formatting (list, show) and the list renderers
//! - [`buckets`] - Price bucket counts
//! - [`helpers`] - Common formatting utilities (currency, truncation, summaries)

mod buckets;
pub mod helpers;
mod items;

// Items
pub use items::{
    format_item_details_json, format_item_details_table, JsonRenderer, ListStyle, TableRenderer,
};

// Buckets
pub use buckets::{format_buckets_json, format_buckets_table, BucketCount};
