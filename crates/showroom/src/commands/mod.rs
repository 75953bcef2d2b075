//! Command implementations for the showroom CLI.
//!
//! This module contains the actual command handlers that are invoked by the CLI.

pub mod buckets;
pub mod completions;
pub mod config;
pub mod list;
pub mod show;

use std::env;
use std::path::PathBuf;

use showroom_catalog::filter::{controls, Criterion, FilterEngine, Slot};
use showroom_catalog::{Catalog, CatalogStore, Field};
use tracing::{debug, warn};

use crate::cli::{Cli, FilterArgs};
use config::Config;

/// Default noun used in summaries ("Showing 3 motorcycles").
pub const DEFAULT_NOUN: &str = "motorcycle";

/// Error type for command execution.
#[derive(Debug, thiserror::Error)]
pub enum CommandError {
    /// Catalog could not be loaded.
    #[error("catalog error: {0}")]
    CatalogStore(#[from] showroom_catalog::CatalogStoreError),

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),

    /// No item with the given id.
    #[error("no item with id '{id}'{}", suggestion_hint(.suggestion))]
    NotFound {
        /// The id that was looked up.
        id: String,
        /// The closest known id, if any.
        suggestion: Option<String>,
    },

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error.
    #[error("serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

fn suggestion_hint(suggestion: &Option<String>) -> String {
    suggestion
        .as_ref()
        .map(|s| format!(" (did you mean '{s}'?)"))
        .unwrap_or_default()
}

/// Result type for command execution.
pub type Result<T> = std::result::Result<T, CommandError>;

/// Context for command execution, containing common dependencies.
pub struct CommandContext {
    /// Whether to output JSON.
    pub json_output: bool,
    /// Whether to use colors.
    pub use_colors: bool,
    /// Whether to be quiet (errors only).
    pub quiet: bool,
    /// Noun for the summary line.
    pub noun: String,
}

impl CommandContext {
    /// Creates a new command context from CLI arguments and the config file.
    ///
    /// Colors are off when `--no-color` is given, `NO_COLOR` is set, or the
    /// config disables them.
    pub fn from_cli(cli: &Cli, config: &Config) -> Self {
        let no_color_env = env::var_os("NO_COLOR").is_some_and(|v| !v.is_empty());
        Self {
            json_output: cli.json,
            use_colors: !cli.no_color && !no_color_env && config.output.color.unwrap_or(true),
            quiet: cli.quiet,
            noun: config
                .output
                .noun
                .clone()
                .unwrap_or_else(|| DEFAULT_NOUN.to_string()),
        }
    }
}

/// Resolves the catalog file: `--catalog` / `SHOWROOM_CATALOG` first, then the config.
pub fn resolve_catalog_path(cli: &Cli, config: &Config) -> Result<PathBuf> {
    cli.catalog
        .clone()
        .or_else(|| config.catalog.clone())
        .ok_or_else(|| {
            CommandError::Config(
                "no catalog file configured. Pass --catalog, set SHOWROOM_CATALOG, \
                 or run 'showroom config set catalog <path>'"
                    .to_string(),
            )
        })
}

/// Loads the catalog the command operates on.
pub fn load_catalog(cli: &Cli, config: &Config) -> Result<Catalog> {
    let path = resolve_catalog_path(cli, config)?;
    debug!(path = %path.display(), "loading catalog");
    Ok(CatalogStore::with_path(path).load()?)
}

/// Sets the engine's criteria from the filter flags.
///
/// Each flag goes through the same control translation the pages use, so
/// empty, `all` and unreadable values clear their slot instead of failing.
/// `--where` conditions are applied after the dedicated flags and override
/// them slot by slot.
pub fn apply_filters(engine: &mut FilterEngine<'_>, filter: &FilterArgs) {
    let catalog = engine.catalog();

    if let Some(keyword) = &filter.keyword {
        engine.set_criterion(Slot::Keyword, controls::keyword_input(keyword));
    }
    if let Some(category) = &filter.category {
        engine.set_criterion(
            Slot::Category,
            controls::select_value(Field::Category, category),
        );
    }
    if let Some(brand) = &filter.brand {
        engine.set_criterion(Slot::Brand, controls::select_value(Field::Brand, brand));
    }

    if let Some(price) = &filter.price {
        engine.set_criterion(
            Slot::PriceRange,
            controls::price_bucket(catalog.price_buckets(), price),
        );
    } else if filter.min_price.is_some() || filter.max_price.is_some() {
        engine.set_criterion(
            Slot::PriceRange,
            controls::price_bounds(
                filter.min_price.as_deref().unwrap_or_default(),
                filter.max_price.as_deref().unwrap_or_default(),
            ),
        );
    }

    if let Some(feature) = &filter.feature {
        engine.set_criterion(Slot::Feature, controls::feature_chip(feature));
    }

    for condition in &filter.conditions {
        match parse_condition(condition) {
            Some((slot, criterion)) => engine.set_criterion(slot, Some(criterion)),
            None => warn!(condition = %condition, "ignoring unreadable --where condition"),
        }
    }
}

/// Parses a `field=value` condition into the slot it occupies.
///
/// `name=` searches like the keyword box; other fields compare exactly.
/// Returns `None` when there is no `=` or the field is unknown.
fn parse_condition(condition: &str) -> Option<(Slot, Criterion)> {
    let (field, value) = condition.split_once('=')?;
    let value = value.trim();
    let parsed = match Field::parse(field.trim())? {
        Field::Name => (Slot::Keyword, Criterion::keyword(value)),
        Field::Category => (Slot::Category, Criterion::category(value)),
        Field::Brand => (Slot::Brand, Criterion::brand(value)),
        Field::Price => (Slot::PriceRange, Criterion::equals(Field::Price, value)),
        field @ Field::Tag(_) => (Slot::Feature, Criterion::equals(field, value)),
    };
    Some(parsed)
}

/// Returns the equals criteria in the engine whose value the catalog doesn't know,
/// paired with the closest known value.
pub fn suggestions(engine: &FilterEngine<'_>) -> Vec<(Field, String, String)> {
    let catalog = engine.catalog();
    [Slot::Category, Slot::Brand, Slot::Feature]
        .into_iter()
        .filter_map(|slot| match engine.criterion(slot) {
            Some(Criterion::Equals { field, value }) => catalog
                .suggest(field, value)
                .map(|s| (field.clone(), value.clone(), s)),
            _ => None,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use showroom_catalog::Item;

    fn catalog() -> Catalog {
        Catalog::new(vec![
            Item::new("click", "Honda Click 125i", "scooter", "honda", 79900.0),
            Item::new("nmax", "Yamaha NMAX 155", "scooter", "yamaha", 151000.0)
                .with_tag("abs", true),
            Item::new("ninja", "Kawasaki Ninja 400", "sport", "kawasaki", 339000.0)
                .with_tag("abs", true),
        ])
        .unwrap()
    }

    fn ids(engine: &mut FilterEngine<'_>) -> Vec<String> {
        engine.recompute().ids
    }

    #[test]
    fn test_parse_condition() {
        assert_eq!(
            parse_condition("brand=honda"),
            Some((Slot::Brand, Criterion::brand("honda")))
        );
        assert_eq!(
            parse_condition(" type = scooter "),
            Some((Slot::Category, Criterion::category("scooter")))
        );
        assert_eq!(
            parse_condition("tag:region=ncr"),
            Some((
                Slot::Feature,
                Criterion::equals(Field::Tag("region".into()), "ncr")
            ))
        );
        assert_eq!(
            parse_condition("name=ninja"),
            Some((Slot::Keyword, Criterion::keyword("ninja")))
        );
        assert_eq!(parse_condition("color=red"), None);
        assert_eq!(parse_condition("brand"), None);
    }

    #[test]
    fn test_apply_filters_combines_flags() {
        let catalog = catalog();
        let mut engine = FilterEngine::new(&catalog);
        let filter = FilterArgs {
            category: Some("scooter".into()),
            feature: Some("abs".into()),
            ..Default::default()
        };

        apply_filters(&mut engine, &filter);
        assert_eq!(ids(&mut engine), vec!["nmax"]);
    }

    #[test]
    fn test_apply_filters_price_bucket_wins_over_bounds() {
        let catalog = catalog();
        let mut engine = FilterEngine::new(&catalog);
        let filter = FilterArgs {
            price: Some("300000+".into()),
            min_price: Some("0".into()),
            ..Default::default()
        };

        apply_filters(&mut engine, &filter);
        assert_eq!(ids(&mut engine), vec!["ninja"]);
    }

    #[test]
    fn test_apply_filters_price_bounds() {
        let catalog = catalog();
        let mut engine = FilterEngine::new(&catalog);
        let filter = FilterArgs {
            min_price: Some("₱79,900".into()),
            max_price: Some("151000".into()),
            ..Default::default()
        };

        apply_filters(&mut engine, &filter);
        assert_eq!(ids(&mut engine), vec!["click"]);
    }

    #[test]
    fn test_apply_filters_where_overrides_flag() {
        let catalog = catalog();
        let mut engine = FilterEngine::new(&catalog);
        let filter = FilterArgs {
            brand: Some("honda".into()),
            conditions: vec!["brand=kawasaki".into()],
            ..Default::default()
        };

        apply_filters(&mut engine, &filter);
        assert_eq!(ids(&mut engine), vec!["ninja"]);
    }

    #[test]
    fn test_apply_filters_where_name_searches_like_keyword() {
        let catalog = catalog();
        let mut engine = FilterEngine::new(&catalog);
        let filter = FilterArgs {
            conditions: vec!["name=honda".into()],
            ..Default::default()
        };

        apply_filters(&mut engine, &filter);
        assert_eq!(engine.criterion(Slot::Keyword), Some(&Criterion::keyword("honda")));
        assert_eq!(ids(&mut engine), vec!["click"]);
    }

    #[test]
    fn test_apply_filters_fails_open() {
        let catalog = catalog();
        let mut engine = FilterEngine::new(&catalog);
        let filter = FilterArgs {
            keyword: Some(String::new()),
            category: Some("all".into()),
            price: Some("cheap".into()),
            conditions: vec!["color=red".into()],
            ..Default::default()
        };

        apply_filters(&mut engine, &filter);
        assert_eq!(engine.recompute().count, 3);
    }

    #[test]
    fn test_suggestions_for_unknown_values() {
        let catalog = catalog();
        let mut engine = FilterEngine::new(&catalog);
        let filter = FilterArgs {
            brand: Some("Honda".into()),
            category: Some("scooter".into()),
            ..Default::default()
        };

        apply_filters(&mut engine, &filter);
        assert!(engine.recompute().is_empty());
        assert_eq!(
            suggestions(&engine),
            vec![(Field::Brand, "Honda".to_string(), "honda".to_string())]
        );
    }

    #[test]
    fn test_not_found_message() {
        let err = CommandError::NotFound {
            id: "ninj".into(),
            suggestion: Some("ninja".into()),
        };
        assert_eq!(err.to_string(), "no item with id 'ninj' (did you mean 'ninja'?)");

        let err = CommandError::NotFound {
            id: "zzz".into(),
            suggestion: None,
        };
        assert_eq!(err.to_string(), "no item with id 'zzz'");
    }
}
