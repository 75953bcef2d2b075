//! Buckets command implementation.
//!
//! Counts, for every price bucket, the items the list would show if that
//! bucket were picked, keeping the other filters as given.

use showroom_catalog::filter::{FilterEngine, Slot};
use showroom_catalog::Catalog;

use super::{apply_filters, CommandContext, Result};
use crate::cli::FilterArgs;
use crate::output::{format_buckets_json, format_buckets_table, BucketCount};

/// Executes the buckets command.
pub fn execute(ctx: &CommandContext, catalog: &Catalog, filter: &FilterArgs) -> Result<()> {
    let counts = bucket_counts(catalog, filter);

    if ctx.json_output {
        println!("{}", format_buckets_json(&counts, catalog.len())?);
    } else if !ctx.quiet {
        print!("{}", format_buckets_table(&counts, ctx.use_colors));
    }

    Ok(())
}

/// Computes per-bucket counts under the other active filters.
pub fn bucket_counts(catalog: &Catalog, filter: &FilterArgs) -> Vec<BucketCount> {
    let mut engine = FilterEngine::new(catalog);
    apply_filters(&mut engine, filter);
    let selected = engine.criterion(Slot::PriceRange).cloned();

    catalog
        .price_buckets()
        .iter()
        .map(|bucket| BucketCount {
            id: bucket.id.clone(),
            label: bucket.label.clone(),
            count: engine.count_with(Slot::PriceRange, Some(bucket.criterion())),
            selected: selected.as_ref().is_some_and(|c| bucket.describes(c)),
        })
        .collect()
}
