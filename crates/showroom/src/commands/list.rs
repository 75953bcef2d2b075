//! List command implementation.
//!
//! Filters and sorts the catalog the way the listing page does, then renders
//! the visible items.

use std::io;

use showroom_catalog::filter::{FilterEngine, SortSpec};
use showroom_catalog::{Catalog, Renderer};

use super::config::Config;
use super::{apply_filters, suggestions, CommandContext, Result};
use crate::cli::{FilterArgs, SortChoice};
use crate::output::{JsonRenderer, ListStyle, TableRenderer};

/// Rows shown when neither `--limit` nor the config sets one.
pub const DEFAULT_LIMIT: usize = 50;

/// Options for the list command.
#[derive(Debug)]
pub struct ListOptions {
    /// Filter flags.
    pub filter: FilterArgs,
    /// Sort order.
    pub sort: Option<SortChoice>,
    /// Limit results.
    pub limit: Option<usize>,
    /// Show all items (no limit).
    pub all: bool,
}

/// Executes the list command.
///
/// # Errors
///
/// Returns an error if writing the output fails.
pub fn execute(ctx: &CommandContext, catalog: &Catalog, config: &Config, opts: &ListOptions) -> Result<()> {
    let mut engine = FilterEngine::new(catalog);
    apply_filters(&mut engine, &opts.filter);
    engine.set_sort(sort_spec(opts, config));

    let view = engine.recompute();
    let style = ListStyle {
        use_colors: ctx.use_colors,
        noun: ctx.noun.clone(),
        limit: effective_limit(opts, config),
        filters: engine.active_filters(),
    };

    if ctx.json_output {
        JsonRenderer::new(io::stdout().lock(), style).render(catalog, &view)?;
    } else if !ctx.quiet {
        TableRenderer::new(io::stdout().lock(), style).render(catalog, &view)?;

        if view.is_empty() {
            for (field, value, suggestion) in suggestions(&engine) {
                println!("No {field} matches '{value}'. Did you mean '{suggestion}'?");
            }
        }
    }

    Ok(())
}

/// Returns the sort to apply: `--sort`, then the config default.
fn sort_spec(opts: &ListOptions, config: &Config) -> SortSpec {
    opts.sort
        .map(SortSpec::from)
        .unwrap_or_else(|| config.defaults.sort_spec())
}

/// Returns the row limit: none with `--all`, else `--limit`, the config, or the default.
fn effective_limit(opts: &ListOptions, config: &Config) -> Option<usize> {
    if opts.all {
        return None;
    }
    Some(opts.limit.or(config.defaults.limit).unwrap_or(DEFAULT_LIMIT))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn opts(sort: Option<SortChoice>, limit: Option<usize>, all: bool) -> ListOptions {
        ListOptions {
            filter: FilterArgs::default(),
            sort,
            limit,
            all,
        }
    }

    #[test]
    fn test_sort_flag_overrides_config() {
        let mut config = Config::default();
        config.defaults.sort = Some("newest".to_string());

        assert_eq!(
            sort_spec(&opts(Some(SortChoice::PriceHigh), None, false), &config),
            SortSpec::price_desc()
        );
        assert_eq!(sort_spec(&opts(None, None, false), &config), SortSpec::newest());
    }

    #[test]
    fn test_sort_defaults_to_catalog_order() {
        let config = Config::default();
        assert!(sort_spec(&opts(None, None, false), &config).is_original());
    }

    #[test]
    fn test_effective_limit() {
        let mut config = Config::default();
        assert_eq!(effective_limit(&opts(None, None, false), &config), Some(DEFAULT_LIMIT));
        assert_eq!(effective_limit(&opts(None, Some(5), false), &config), Some(5));
        assert_eq!(effective_limit(&opts(None, None, true), &config), None);

        config.defaults.limit = Some(20);
        assert_eq!(effective_limit(&opts(None, None, false), &config), Some(20));
        assert_eq!(effective_limit(&opts(None, Some(5), false), &config), Some(5));
    }
}
